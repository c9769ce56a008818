use anyhow::Context;
use pitboss_core::Turn;
use std::fs;
use std::path::Path;

/// Writes the report: one line per faulty session, nothing else. An empty
/// report produces an empty file.
pub fn write_report(path: &Path, lines: &[String]) -> anyhow::Result<()> {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    fs::write(path, out).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// The faulty turns as a pretty JSON array, for consumers that want
/// structure instead of raw log lines.
pub fn render_json(turns: &[Turn]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(turns).context("render report as JSON")
}
