use pitboss_core::{analyze_sessions, Action};
use pitboss_data::{parse_sessions, parse_turn, render_json};

#[test]
fn parses_a_well_formed_line() {
    let turn = parse_turn("1700000000,3,17,P Hit,AS-?,5H-7D").expect("parse");
    assert_eq!(turn.timestamp, 1700000000);
    assert_eq!(turn.session_id, 3);
    assert_eq!(turn.player_id, 17);
    assert_eq!(turn.action, Action::Hit);
    assert_eq!(turn.dealer_hand, "AS-?");
    assert_eq!(turn.player_hand, "5H-7D");
}

#[test]
fn skips_wrong_field_counts() {
    assert_eq!(parse_turn(""), None);
    assert_eq!(parse_turn("1,2,3,P Hit,AS-?"), None);
    assert_eq!(parse_turn("1,2,3,P Hit,AS-?,5H-7D,extra"), None);
}

#[test]
fn skips_blank_timestamps() {
    assert_eq!(parse_turn(",2,3,P Hit,AS-?,5H-7D"), None);
    assert_eq!(parse_turn("   ,2,3,P Hit,AS-?,5H-7D"), None);
}

#[test]
fn skips_unparseable_integers() {
    assert_eq!(parse_turn("abc,2,3,P Hit,AS-?,5H-7D"), None);
    assert_eq!(parse_turn("1,two,3,P Hit,AS-?,5H-7D"), None);
    assert_eq!(parse_turn("1,2,three,P Hit,AS-?,5H-7D"), None);
}

#[test]
fn unknown_action_labels_pass_through() {
    let turn = parse_turn("1,2,3,D Hit,9S-5H,KH-4D").expect("parse");
    assert_eq!(turn.action, Action::Other("D Hit".to_string()));
}

#[test]
fn groups_turns_by_session_in_arrival_order() {
    let raw = "\
10,1,7,P Joined,AS-?,5H-7D
30,2,8,P Joined,KH-?,2C-3D
20,1,7,P Hit,AS-?,5H-7D-2C
not,a,valid,line
40,2,8,P Hit,KH-?,2C-3D-4S
";
    let sessions = parse_sessions(raw);
    assert_eq!(sessions.len(), 2);
    let timestamps: Vec<i64> = sessions[&1].turns.iter().map(|t| t.timestamp).collect();
    assert_eq!(timestamps, vec![10, 20]);
}

#[test]
fn parsed_turn_renders_back_to_its_line() {
    let line = "1700000000,3,17,P Hit,AS-?,5H-7D";
    let turn = parse_turn(line).expect("parse");
    assert_eq!(turn.to_string(), line);
}

#[test]
fn full_log_to_report_lines() {
    // Session 1: clean. Session 2: the win at t=25 lands while the
    // dealer sits at 12, so that turn heads the report.
    let raw = "\
15,2,8,P Hit,9S-3H,KH-4D
5,1,7,P Joined,AS-?,5H-7D
25,2,8,P Win,9S-3H,KH-4D
10,1,7,P Stand,AS-?,5H-7D
";
    let mut sessions = parse_sessions(raw);
    let lines = analyze_sessions(&mut sessions).expect("analyze");
    assert_eq!(lines, vec!["25,2,8,P Win,9S-3H,KH-4D".to_string()]);
}

#[test]
fn json_report_carries_the_turn_fields() {
    let turn = parse_turn("1,2,3,P Win,9S-3H,KH-4D").expect("parse");
    let rendered = render_json(&[turn]).expect("render");
    assert!(rendered.contains("\"session_id\": 2"));
    assert!(rendered.contains("\"dealer_hand\": \"9S-3H\""));
}
