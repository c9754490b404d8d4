use covtab::aggregator::{summarize, ScopeKind};
use covtab::output::{render_table, write_table};
use covtab::utils::error::ParseError;
use pretty_assertions::assert_eq;
use std::io::Write;

const SAMPLE_REPORT: &str = "\
File 'x.c'
Lines executed:100.00% of 10
Function 'x.c:foo'
Lines executed:50.00% of 4
Branches executed:25.00% of 8
";

#[test]
fn test_round_trip_table() {
    let summaries = summarize(SAMPLE_REPORT.lines()).unwrap();
    let table = render_table(&summaries);

    assert_eq!(
        table,
        vec![
            "              %line   %branch   %taken   %call".to_string(),
            "file x.c      100.00     N/A       N/A      N/A  ".to_string(),
            "func x.c:foo   50.00   25.00       N/A      N/A  ".to_string(),
        ]
    );
}

#[test]
fn test_row_count_matches_header_count() {
    let report = "\
File 'a.c'
Function 'a.c:f'
Function 'a.c:g'
noise line
File 'b.c'
";
    let summaries = summarize(report.lines()).unwrap();
    assert_eq!(summaries.len(), 4);

    let table = render_table(&summaries);
    assert_eq!(table.len(), 5); // header + one row per scope

    let kinds: Vec<ScopeKind> = summaries.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ScopeKind::File,
            ScopeKind::Function,
            ScopeKind::Function,
            ScopeKind::File,
        ]
    );
}

#[test]
fn test_write_table_emits_newline_terminated_lines() {
    let summaries = summarize(SAMPLE_REPORT.lines()).unwrap();
    let mut buf = Vec::new();
    write_table(&summaries, &mut buf).unwrap();

    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.ends_with('\n'));
}

#[test]
fn test_report_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_REPORT.as_bytes()).unwrap();

    let input = std::fs::read_to_string(file.path()).unwrap();
    let summaries = summarize(input.lines()).unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].name, "x.c");
    assert_eq!(summaries[1].name, "x.c:foo");
}

#[test]
fn test_metric_before_header_aborts() {
    let report = "Branches executed:25.00% of 8\nFile 'x.c'\n";
    let err = summarize(report.lines()).unwrap_err();
    assert!(matches!(err, ParseError::MetricWithoutScope { .. }));
}

#[test]
fn test_malformed_percentage_aborts() {
    let report = "File 'x.c'\nLines executed:not-a-number% of 10\n";
    let err = summarize(report.lines()).unwrap_err();
    assert!(matches!(err, ParseError::MalformedPercentage { .. }));
}

#[test]
fn test_empty_report_renders_header_only() {
    let summaries = summarize("".lines()).unwrap();
    let table = render_table(&summaries);
    assert_eq!(table, vec!["       %line   %branch   %taken   %call".to_string()]);
}
