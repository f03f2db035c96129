use std::io::Cursor;

use bracket_cli::export::write_positions;
use bracket_cli::interactive::{parse_trigger_line, run};
use bracket_core::{compute, SpacingRequest, SpacingSession};

#[test]
fn parses_whitespace_and_commas() {
    assert_eq!(parse_trigger_line("14.879 200 19").unwrap(), SpacingRequest::new(14.879, 200.0, 19));
    assert_eq!(parse_trigger_line("2.0, 150, 1").unwrap(), SpacingRequest::new(2.0, 150.0, 1));
}

#[test]
fn rejects_malformed_lines() {
    assert!(parse_trigger_line("14.879 200").unwrap_err().reason().contains("expected 3 values"));
    assert!(parse_trigger_line("x 200 19").unwrap_err().reason().contains("not a number"));
    assert!(parse_trigger_line("1 200 2.5").unwrap_err().reason().contains("whole number"));
}

#[test]
fn failed_trigger_reports_and_keeps_previous() {
    let input = Cursor::new("2 100 4\n2 100 0\n\n# comment\nq\n3 100 4\n");
    let mut out = Vec::new();
    let mut rendered = Vec::new();
    let mut session = SpacingSession::default();

    run(&mut session, input, &mut out, |o| {
        rendered.push(o.result.spacing_mm);
        Ok(())
    })
    .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Spacing: 500mm"), "{text}");
    assert!(text.contains("error: number of brackets must be at least 1"), "{text}");
    assert!(text.contains("(still showing Spacing: 500mm)"), "{text}");
    // `q` stops before the last line
    assert_eq!(rendered, vec![500]);
    assert_eq!(session.current().unwrap().result.spacing_mm, 500);
}

#[test]
fn positions_csv_has_one_row_per_point() {
    let r = compute(&SpacingRequest::new(2.0, 150.0, 1)).unwrap();
    let mut buf = Vec::new();
    write_positions(&r, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "index,position_mm\n0,150\n1,2150\n");
}
