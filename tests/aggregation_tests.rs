use chrono::{NaiveDate, NaiveDateTime};
use expense_tracker_frontend::aggregation::{
    bar_percentage, compute_category_summaries, compute_dashboard_stats, compute_grand_total,
    compute_max, compute_monthly_total, compute_top_category, compute_total, top_summary,
    NO_CATEGORY,
};
use expense_tracker_frontend::model::ExpenseRecord;

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn sample_records() -> Vec<ExpenseRecord> {
    vec![
        ExpenseRecord::new(120.0, "Food & Dining").with_date(at(2024, 5, 2)),
        ExpenseRecord::new(40.5, "Transportation").with_date(at(2024, 5, 9)),
        ExpenseRecord::new(80.0, "Food & Dining").with_date(at(2024, 4, 28)),
        ExpenseRecord::new(300.0, "Travel").with_date(at(2023, 5, 14)),
        ExpenseRecord::new(9.5, "Other"),
    ]
}

#[test]
fn total_of_empty_list_is_zero() {
    assert_eq!(compute_total(&[]), 0.0);
}

#[test]
fn total_sums_every_amount() {
    let records = vec![
        ExpenseRecord::new(10.0, "Other"),
        ExpenseRecord::new(5.5, "Other"),
    ];
    assert_eq!(compute_total(&records), 15.5);
}

#[test]
fn monthly_total_matches_month_and_year() {
    let records = sample_records();

    assert_eq!(compute_monthly_total(&records, 5, 2024), 160.5);
    assert_eq!(compute_monthly_total(&records, 5, 2023), 300.0);
    assert_eq!(compute_monthly_total(&records, 1, 2024), 0.0);
    assert_eq!(compute_monthly_total(&[], 5, 2024), 0.0);
}

#[test]
fn summaries_partition_the_total() {
    let records = sample_records();
    let summaries = compute_category_summaries(&records);

    let summed: f64 = summaries.iter().map(|s| s.total_amount).sum();
    assert_eq!(summed, compute_total(&records));
    assert_eq!(compute_grand_total(&summaries), compute_total(&records));

    let counted: u32 = summaries.iter().map(|s| s.count).sum();
    assert_eq!(counted as usize, records.len());

    let mut labels: Vec<&str> = summaries.iter().map(|s| s.category.as_str()).collect();
    let before = labels.len();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), before, "each category appears once");
}

#[test]
fn summary_average_is_total_over_count() {
    let summaries = compute_category_summaries(&sample_records());
    let food = summaries
        .iter()
        .find(|s| s.category == "Food & Dining")
        .expect("food summary");

    assert_eq!(food.count, 2);
    assert_eq!(food.total_amount, 200.0);
    assert_eq!(food.average_amount, 100.0);
}

#[test]
fn max_bounds_every_summary_and_scales_to_full_width() {
    let summaries = compute_category_summaries(&sample_records());
    let max = compute_max(&summaries);

    for summary in &summaries {
        assert!(max >= summary.total_amount);
    }
    let top = top_summary(&summaries).expect("non-empty");
    assert_eq!(bar_percentage(top.total_amount, max), 100.0);
}

#[test]
fn empty_summaries_have_zero_max_and_zero_width() {
    let max = compute_max(&[]);

    assert_eq!(max, 0.0);
    let width = bar_percentage(0.0, max);
    assert_eq!(width, 0.0);
    assert!(!width.is_nan());
}

#[test]
fn top_category_tie_goes_to_first_seen() {
    let records = vec![ExpenseRecord::new(5.0, "A"), ExpenseRecord::new(5.0, "B")];
    assert_eq!(compute_top_category(&records), "A");

    let reversed = vec![ExpenseRecord::new(5.0, "B"), ExpenseRecord::new(5.0, "A")];
    assert_eq!(compute_top_category(&reversed), "B");
}

#[test]
fn top_category_uses_summed_amounts() {
    // Travel has the single largest expense, but Food & Dining has more in total
    let records = vec![
        ExpenseRecord::new(150.0, "Travel"),
        ExpenseRecord::new(100.0, "Food & Dining"),
        ExpenseRecord::new(100.0, "Food & Dining"),
    ];
    assert_eq!(compute_top_category(&records), "Food & Dining");
    assert_eq!(compute_top_category(&[]), NO_CATEGORY);
}

#[test]
fn dashboard_stats_split_this_month_from_all_time() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let records = vec![
        ExpenseRecord::new(100.0, "Travel").with_date(at(2024, 6, 3)),
        ExpenseRecord::new(50.0, "Travel").with_date(at(2024, 5, 20)),
    ];

    let stats = compute_dashboard_stats(&records, today);

    assert_eq!(stats.monthly_expenses, 100.0);
    assert_eq!(stats.total_expenses, 150.0);
    assert_eq!(stats.transaction_count, 2);
    assert_eq!(stats.top_category, "Travel");
}
