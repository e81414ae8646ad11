use chrono::Datelike;
use expense_tracker_frontend::aggregation::compute_total;
use expense_tracker_frontend::model::{CategorySummary, ExpenseRecord, ExpensePatch, NewExpense};
use serde_json::json;

#[test]
fn decodes_a_typical_listing() {
    let records: Vec<ExpenseRecord> = serde_json::from_value(json!([
        {
            "id": 1,
            "amount": 250.75,
            "category": "Food & Dining",
            "description": "Team lunch",
            "date": "2024-05-03T13:45:10.512"
        },
        {
            "id": "b7c1",
            "amount": 40,
            "category": "Transportation",
            "description": null,
            "date": "2024-05-04"
        }
    ]))
    .expect("decode listing");

    assert_eq!(records[0].id.as_deref(), Some("1"));
    assert_eq!(records[0].date.unwrap().day(), 3);
    assert_eq!(records[1].id.as_deref(), Some("b7c1"));
    assert_eq!(records[1].description, "");
    assert_eq!(records[1].description_or_placeholder(), "No description");
}

#[test]
fn malformed_fields_fall_back_instead_of_failing() {
    let records: Vec<ExpenseRecord> = serde_json::from_value(json!([
        { "id": 7, "category": "Other" },
        { "id": 8, "amount": "12.50", "category": "Other", "date": "not a date" },
        { "id": 9, "amount": "twelve", "category": "Other" },
        { "id": 10, "amount": null, "category": null }
    ]))
    .expect("decode malformed listing");

    assert_eq!(records[0].amount, 0.0);
    assert_eq!(records[1].amount, 12.5);
    assert!(records[1].date.is_none());
    assert_eq!(records[2].amount, 0.0);
    assert_eq!(records[3].category, "");
    assert_eq!(compute_total(&records), 12.5);
}

#[test]
fn decodes_server_category_summaries() {
    let summaries: Vec<CategorySummary> = serde_json::from_value(json!([
        { "category": "Travel", "totalAmount": 420.0, "count": 3, "averageAmount": 140.0 },
        { "category": "Shopping", "totalAmount": "15", "count": 1 }
    ]))
    .expect("decode summaries");

    assert_eq!(summaries[0].total_amount, 420.0);
    assert_eq!(summaries[0].count, 3);
    assert_eq!(summaries[1].total_amount, 15.0);
    assert_eq!(summaries[1].average_amount, 0.0);
}

#[test]
fn create_payload_has_exactly_three_fields() {
    let payload = NewExpense {
        amount: 250.75,
        category: "Food & Dining".to_string(),
        description: String::new(),
    };

    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({ "amount": 250.75, "category": "Food & Dining", "description": "" })
    );
}

#[test]
fn patch_only_sends_fields_that_are_set() {
    let patch = ExpensePatch {
        amount: Some(99.0),
        ..ExpensePatch::default()
    };

    assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "amount": 99.0 }));
}
