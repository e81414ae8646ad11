//! Pure summaries over a fetched list of expenses.
//!
//! Nothing in here can fail: amounts that did not decode are already `0`
//! by the time a record reaches these functions.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::model::{CategorySummary, ExpenseRecord};

/// Shown wherever a category is expected but there is no data.
pub const NO_CATEGORY: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_expenses: f64,
    pub monthly_expenses: f64,
    pub transaction_count: usize,
    pub top_category: String,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            total_expenses: 0.0,
            monthly_expenses: 0.0,
            transaction_count: 0,
            top_category: NO_CATEGORY.to_string(),
        }
    }
}

pub fn compute_total(records: &[ExpenseRecord]) -> f64 {
    records.iter().map(|record| record.amount).sum()
}

/// Sum of the records dated in `month` (1-12) of `year`. Undated records never match.
pub fn compute_monthly_total(records: &[ExpenseRecord], month: u32, year: i32) -> f64 {
    records
        .iter()
        .filter(|record| {
            record
                .date
                .is_some_and(|date| date.month() == month && date.year() == year)
        })
        .map(|record| record.amount)
        .sum()
}

/// Groups by category label, keeping the order in which labels first appear.
pub fn compute_category_summaries(records: &[ExpenseRecord]) -> Vec<CategorySummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<CategorySummary> = Vec::new();

    for record in records {
        let slot = *index.entry(record.category.as_str()).or_insert_with(|| {
            summaries.push(CategorySummary {
                category: record.category.clone(),
                total_amount: 0.0,
                count: 0,
                average_amount: 0.0,
            });
            summaries.len() - 1
        });
        let summary = &mut summaries[slot];
        summary.total_amount += record.amount;
        summary.count += 1;
    }

    for summary in &mut summaries {
        summary.average_amount = summary.total_amount / f64::from(summary.count);
    }
    summaries
}

/// Largest `total_amount`; on a tie the summary seen first wins.
pub fn top_summary(summaries: &[CategorySummary]) -> Option<&CategorySummary> {
    summaries.iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.total_amount <= current.total_amount => Some(current),
        _ => Some(candidate),
    })
}

pub fn compute_top_category(records: &[ExpenseRecord]) -> String {
    top_category_label(&compute_category_summaries(records))
}

pub(crate) fn top_category_label(summaries: &[CategorySummary]) -> String {
    top_summary(summaries)
        .map(|summary| summary.category.trim())
        .filter(|label| !label.is_empty())
        .unwrap_or(NO_CATEGORY)
        .to_string()
}

pub fn compute_max(summaries: &[CategorySummary]) -> f64 {
    summaries
        .iter()
        .map(|summary| summary.total_amount)
        .fold(0.0, f64::max)
}

pub fn compute_grand_total(summaries: &[CategorySummary]) -> f64 {
    summaries.iter().map(|summary| summary.total_amount).sum()
}

/// Width of a bar as a percentage of `max`. Zero when there is nothing to scale by.
pub fn bar_percentage(amount: f64, max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 0.0;
    }
    (amount / max * 100.0).clamp(0.0, 100.0)
}

pub fn compute_dashboard_stats(records: &[ExpenseRecord], today: NaiveDate) -> DashboardStats {
    DashboardStats {
        total_expenses: compute_total(records),
        monthly_expenses: compute_monthly_total(records, today.month(), today.year()),
        transaction_count: records.len(),
        top_category: compute_top_category(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, amount: f64) -> ExpenseRecord {
        ExpenseRecord::new(amount, category)
    }

    #[test]
    fn total_of_nothing_is_zero() {
        assert_eq!(compute_total(&[]), 0.0);
    }

    #[test]
    fn summaries_keep_first_seen_order() {
        let records = vec![
            record("Travel", 10.0),
            record("Shopping", 4.0),
            record("Travel", 20.0),
        ];
        let summaries = compute_category_summaries(&records);

        let labels: Vec<&str> = summaries.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(labels, vec!["Travel", "Shopping"]);
        assert_eq!(summaries[0].count, 2);
        assert_eq!(summaries[0].average_amount, 15.0);
    }

    #[test]
    fn blank_top_category_reports_sentinel() {
        assert_eq!(compute_top_category(&[record("", 9.0)]), NO_CATEGORY);
        assert_eq!(compute_top_category(&[]), NO_CATEGORY);
    }

    #[test]
    fn percentage_never_divides_by_zero() {
        assert_eq!(bar_percentage(5.0, 0.0), 0.0);
        assert_eq!(bar_percentage(0.0, 0.0), 0.0);
        assert_eq!(bar_percentage(25.0, 50.0), 50.0);
    }
}
