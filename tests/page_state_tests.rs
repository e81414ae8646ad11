use chrono::NaiveDate;
use expense_tracker_frontend::config::SummarySource;
use expense_tracker_frontend::errors::{GatewayError, ValidationError};
use expense_tracker_frontend::model::{CategorySummary, ExpenseRecord, NewExpense};
use expense_tracker_frontend::state::{
    AddExpenseForm, AnalyticsState, DashboardState, FormField, FormMessage, SUCCESS_MESSAGE,
};

fn filled_form() -> AddExpenseForm {
    let mut form = AddExpenseForm::default();
    form.set_field(FormField::Amount, "250.75".to_string());
    form.set_field(FormField::Category, "Food & Dining".to_string());
    form.set_field(FormField::Description, String::new());
    form
}

#[test]
fn submit_builds_the_create_payload() {
    let mut form = filled_form();

    let payload = form.submit().expect("valid form");

    assert_eq!(
        payload,
        NewExpense {
            amount: 250.75,
            category: "Food & Dining".to_string(),
            description: String::new(),
        }
    );
    assert!(form.submitting);
    assert!(form.message.is_none());
}

#[test]
fn successful_create_resets_the_form() {
    let mut form = filled_form();
    form.submit().expect("valid form");

    form.finish(Ok(ExpenseRecord::new(250.75, "Food & Dining").with_id("31")));

    assert!(!form.submitting);
    assert!(form.amount.is_empty());
    assert!(form.category.is_empty());
    assert!(form.description.is_empty());
    assert_eq!(
        form.message,
        Some(FormMessage::Success(SUCCESS_MESSAGE.to_string()))
    );
}

#[test]
fn failed_create_keeps_entered_values() {
    let mut form = filled_form();
    form.submit().expect("valid form");

    form.finish(Err(GatewayError::Server {
        status: 500,
        message: "Database unavailable".to_string(),
    }));

    assert!(!form.submitting);
    assert_eq!(form.amount, "250.75");
    assert_eq!(form.category, "Food & Dining");
    assert_eq!(
        form.message,
        Some(FormMessage::Error("Database unavailable".to_string()))
    );
}

#[test]
fn missing_required_fields_never_reach_the_gateway() {
    let mut form = AddExpenseForm::default();
    form.set_field(FormField::Description, "coffee".to_string());

    assert_eq!(form.submit(), Err(ValidationError::MissingRequired));
    assert!(!form.submitting);
    assert_eq!(
        form.message.as_ref().map(FormMessage::text),
        Some("Please fill in all required fields")
    );
    assert_eq!(form.description, "coffee");
}

#[test]
fn dashboard_fetch_derives_stats() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let this_month = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let last_month = NaiveDate::from_ymd_opt(2024, 5, 31)
        .unwrap()
        .and_hms_opt(22, 0, 0)
        .unwrap();

    let mut state = DashboardState::new();
    assert!(state.loading);
    state.begin();
    state.finish(
        Ok(vec![
            ExpenseRecord::new(100.0, "Travel").with_date(this_month),
            ExpenseRecord::new(50.0, "Travel").with_date(last_month),
        ]),
        today,
    );

    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.stats.monthly_expenses, 100.0);
    assert_eq!(state.stats.total_expenses, 150.0);
    assert_eq!(state.stats.top_category, "Travel");
}

#[test]
fn dashboard_failure_surfaces_message() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let mut state = DashboardState::new();

    state.finish(
        Err(GatewayError::Transport("Failed to fetch expenses".to_string())),
        today,
    );

    assert!(!state.loading);
    assert!(state.is_empty());
    assert_eq!(state.error.as_deref(), Some("Failed to fetch expenses"));
    assert_eq!(state.stats.top_category, "N/A");
}

#[test]
fn analytics_from_records_scales_bars() {
    let mut state = AnalyticsState::new();
    state.begin(SummarySource::Client);
    state.finish_records(SummarySource::Client, Ok(vec![
        ExpenseRecord::new(30.0, "Shopping"),
        ExpenseRecord::new(60.0, "Travel"),
        ExpenseRecord::new(10.0, "Shopping"),
    ]));

    assert_eq!(state.max, 60.0);
    assert_eq!(state.grand_total, 100.0);
    assert_eq!(state.top_category(), "Travel");

    let shopping = &state.summaries[0];
    assert_eq!(shopping.category, "Shopping");
    assert!((state.percentage(shopping) - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(state.share(shopping), 40.0);
}

#[test]
fn analytics_renders_server_summaries_as_received() {
    let summaries = vec![
        CategorySummary {
            category: "Healthcare".to_string(),
            total_amount: 75.0,
            count: 3,
            average_amount: 25.0,
        },
        CategorySummary {
            category: "Education".to_string(),
            total_amount: 75.0,
            count: 1,
            average_amount: 75.0,
        },
    ];

    let mut state = AnalyticsState::new();
    state.begin(SummarySource::Server);
    state.finish_summaries(SummarySource::Server, Ok(summaries.clone()));

    assert_eq!(state.summaries, summaries);
    assert_eq!(state.top_category(), "Healthcare");
    assert_eq!(state.percentage(&state.summaries[1]), 100.0);
}

#[test]
fn analytics_with_no_data_is_an_empty_state_not_an_error() {
    let mut state = AnalyticsState::new();
    state.finish_records(SummarySource::Client, Ok(Vec::new()));

    assert!(state.is_empty());
    assert!(state.error.is_none());
    assert_eq!(state.max, 0.0);
    assert!(state.top().is_none());
    assert_eq!(state.top_category(), "N/A");
}
