use pitboss_core::{analyze_sessions, first_faulty_turns};
use pitboss_data::{read_sessions, render_json, write_report};
use std::path::PathBuf;

#[derive(Debug, Clone)]
struct CliOptions {
    input: PathBuf,
    output: Option<PathBuf>,
    json: bool,
}

fn parse_cli_options(args: &[String]) -> Result<CliOptions, String> {
    let mut input = None;
    let mut output = None;
    let mut json = false;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--json" => json = true,
            "--out" | "-o" => {
                let Some(value) = args.get(idx + 1) else {
                    return Err("--out needs a file path".to_string());
                };
                output = Some(PathBuf::from(value));
                idx += 1;
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option {other}"));
            }
            other => {
                if input.is_some() {
                    return Err(format!("unexpected argument {other}"));
                }
                input = Some(PathBuf::from(other));
            }
        }
        idx += 1;
    }
    let Some(input) = input else {
        return Err("missing input log".to_string());
    };
    Ok(CliOptions {
        input,
        output,
        json,
    })
}

fn print_usage() {
    eprintln!("usage: pitboss <game-log> [--out <file>] [--json]");
}

fn run(options: &CliOptions) -> anyhow::Result<()> {
    let mut sessions = read_sessions(&options.input)?;

    let report = if options.json {
        let faulty = first_faulty_turns(&mut sessions)?;
        vec![render_json(&faulty)?]
    } else {
        analyze_sessions(&mut sessions)?
    };

    match &options.output {
        Some(path) => write_report(path, &report)?,
        None => {
            for line in &report {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_cli_options(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            std::process::exit(2);
        }
    };
    if let Err(err) = run(&options) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
