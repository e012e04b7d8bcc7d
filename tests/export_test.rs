//! Integration tests for the CSV and Markdown exporters

use gcpro::export::{export_csv, export_markdown};
use gcpro::types::{DayRecord, ModelCounts, ReportOptions, UsageLedger};

fn sample_ledger() -> UsageLedger {
    let mut ledger = UsageLedger::new();
    ledger.insert(
        "2026-02-08".parse().unwrap(),
        DayRecord::new(10, 2, ModelCounts::new(5, 3, 2)),
    );
    ledger.insert(
        "2026-02-09".parse().unwrap(),
        DayRecord::new(8, 1, ModelCounts::new(4, 2, 2)),
    );
    ledger.insert(
        "2026-02-10".parse().unwrap(),
        DayRecord::new(5, 1, ModelCounts::new(3, 1, 1)),
    );
    ledger
}

/// Ledger spanning sixty consecutive days starting 2026-01-01
fn sixty_day_ledger() -> UsageLedger {
    let start: chrono::NaiveDate = "2026-01-01".parse().unwrap();
    (0..60u64)
        .map(|i| {
            let date = start + chrono::Days::new(i);
            (
                date.into(),
                DayRecord::new(i + 1, 1, ModelCounts::default()),
            )
        })
        .collect()
}

#[test]
fn csv_has_fixed_header_and_line_count() {
    let csv = export_csv(&sample_ledger());
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Date,Messages,Chats,Flash,Thinking,Pro,Weighted");
    // header + one line per day + TOTAL
    assert_eq!(lines.len(), 5);
}

#[test]
fn csv_every_row_has_seven_fields() {
    let csv = export_csv(&sample_ledger());
    for line in csv.lines() {
        assert_eq!(line.split(',').count(), 7, "short row: {line}");
    }
}

#[test]
fn csv_rows_sorted_by_date() {
    let csv = export_csv(&sample_ledger());
    let dates: Vec<&str> = csv
        .lines()
        .skip(1)
        .take(3)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(dates, vec!["2026-02-08", "2026-02-09", "2026-02-10"]);
}

#[test]
fn csv_total_row_sums_each_column() {
    let csv = export_csv(&sample_ledger());
    let total = csv.lines().last().unwrap();
    assert_eq!(total, "TOTAL,23,4,12,6,5,6.98");
}

#[test]
fn csv_spec_example_row() {
    let mut ledger = UsageLedger::new();
    ledger.insert(
        "2026-02-08".parse().unwrap(),
        DayRecord::new(10, 2, ModelCounts::new(5, 3, 2)),
    );
    let csv = export_csv(&ledger);
    assert!(csv.contains("2026-02-08,10,2,5,3,2,2.99"));
}

#[test]
fn csv_empty_ledger_is_header_plus_zero_total() {
    let csv = export_csv(&UsageLedger::new());
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "TOTAL,0,0,0,0,0,0");
}

#[test]
fn csv_legacy_records_render_zero_model_columns() {
    let mut ledger = UsageLedger::new();
    ledger.insert(
        "2026-01-01".parse().unwrap(),
        DayRecord {
            messages: 5,
            chats: 1,
            by_model: None,
        },
    );
    let csv = export_csv(&ledger);
    assert!(csv.contains("2026-01-01,5,1,0,0,0,0"));
}

#[test]
fn csv_integral_weighted_without_decimals() {
    let mut ledger = UsageLedger::new();
    ledger.insert(
        "2026-01-01".parse().unwrap(),
        DayRecord::new(3, 1, ModelCounts::new(0, 0, 3)),
    );
    let csv = export_csv(&ledger);
    assert!(csv.contains("2026-01-01,3,1,0,0,3,3"));
}

#[test]
fn markdown_title_user_and_footer() {
    let options = ReportOptions::default().with_user("test@gmail.com");
    let md = export_markdown(&sample_ledger(), Some(&options));
    assert!(md.contains("# Gemini Usage Report"));
    assert!(md.contains("**User:** test@gmail.com"));
    assert!(md.contains("**Exported:**"));
    assert!(md.contains("Generated by Gemini Counter Pro"));
}

#[test]
fn markdown_title_and_footer_survive_empty_input() {
    let md = export_markdown(&UsageLedger::new(), None);
    assert!(md.contains("# Gemini Usage Report"));
    assert!(md.contains("Generated by Gemini Counter Pro"));
    assert!(md.contains("**User:** Unknown"));
}

#[test]
fn markdown_summary_table_always_present() {
    let options = ReportOptions::default().with_total(100).with_total_chats(20);
    let md = export_markdown(&sample_ledger(), Some(&options));
    assert!(md.contains("## Summary"));
    assert!(md.contains("| Total Messages | 100 |"));
    assert!(md.contains("| Chats Created | 20 |"));

    let bare = export_markdown(&UsageLedger::new(), None);
    assert!(bare.contains("## Summary"));
    assert!(bare.contains("| Total Messages | 0 |"));
    assert!(bare.contains("| Chats Created | 0 |"));
}

#[test]
fn markdown_streak_rows_iff_supplied() {
    let both = export_markdown(
        &sample_ledger(),
        Some(
            &ReportOptions::default()
                .with_current_streak(5)
                .with_best_streak(10),
        ),
    );
    assert!(both.contains("| Current Streak | 5 days |"));
    assert!(both.contains("| Best Streak | 10 days |"));

    let only_best = export_markdown(
        &sample_ledger(),
        Some(&ReportOptions::default().with_best_streak(7)),
    );
    assert!(only_best.contains("| Best Streak | 7 days |"));
    assert!(!only_best.contains("Current Streak"));

    let neither = export_markdown(&sample_ledger(), Some(&ReportOptions::default()));
    assert!(!neither.contains("Streak"));
}

#[test]
fn markdown_breakdown_lists_all_days_under_cap() {
    let md = export_markdown(&sample_ledger(), None);
    assert!(md.contains("## Daily Breakdown"));
    assert!(md.contains("| 2026-02-08 | 10 | 2 | 5 | 3 | 2 |"));
    assert!(md.contains("| 2026-02-09 | 8 | 1 | 4 | 2 | 2 |"));
    assert!(md.contains("| 2026-02-10 | 5 | 1 | 3 | 1 | 1 |"));
}

#[test]
fn markdown_breakdown_limited_to_most_recent_thirty() {
    let md = export_markdown(&sixty_day_ledger(), None);
    let rows: Vec<&str> = md.lines().filter(|l| l.starts_with("| 2026-")).collect();
    assert_eq!(rows.len(), 30);
    assert!(rows[0].starts_with("| 2026-01-31"));
    assert!(rows[29].starts_with("| 2026-03-01"));
}

#[test]
fn markdown_breakdown_omitted_for_empty_ledger() {
    let md = export_markdown(&UsageLedger::new(), Some(&ReportOptions::default()));
    assert!(!md.contains("## Daily Breakdown"));
}

#[test]
fn markdown_partial_records_default_to_zero() {
    let mut ledger = UsageLedger::new();
    ledger.insert("2026-01-01".parse().unwrap(), DayRecord::default());
    let md = export_markdown(&ledger, None);
    assert!(md.contains("| 2026-01-01 | 0 | 0 | 0 | 0 | 0 |"));
}

#[test]
fn exporters_leave_ledger_untouched() {
    let ledger = sample_ledger();
    let before: Vec<String> = ledger.keys().map(|k| k.to_string()).collect();
    let _ = export_csv(&ledger);
    let _ = export_markdown(&ledger, None);
    let after: Vec<String> = ledger.keys().map(|k| k.to_string()).collect();
    assert_eq!(before, after);
    assert_eq!(ledger.len(), 3);
}
