//! Per-page state holders.
//!
//! Each holder is a plain value with explicit transitions. The dashboard and
//! analytics holders are also Yew reducers, so a completion that arrives
//! after other updates is applied to the latest state rather than to the
//! snapshot the page rendered with. Keeping the transitions here means the
//! fetch lifecycle can be tested without a browser.

use std::rc::Rc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};
use yew::Reducible;

use crate::aggregation::{
    self, bar_percentage, compute_category_summaries, compute_dashboard_stats, DashboardStats,
};
use crate::category::Category;
use crate::config::SummarySource;
use crate::errors::{GatewayError, ValidationError};
use crate::model::{CategorySummary, ExpenseRecord, NewExpense};

pub const SUCCESS_MESSAGE: &str = "Expense added successfully! 🎉";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub loading: bool,
    pub error: Option<String>,
    pub expenses: Vec<ExpenseRecord>,
    pub stats: DashboardStats,
    /// Bumped once per requested re-fetch; the page effect keys on it.
    pub generation: u32,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    /// Pages start out loading: the fetch is issued on mount.
    pub fn new() -> Self {
        Self {
            loading: true,
            error: None,
            expenses: Vec::new(),
            stats: DashboardStats::default(),
            generation: 0,
        }
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn reload(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn finish(&mut self, result: Result<Vec<ExpenseRecord>, GatewayError>, today: NaiveDate) {
        self.loading = false;
        match result {
            Ok(expenses) => {
                info!(count = expenses.len(), "dashboard expenses loaded");
                self.stats = compute_dashboard_stats(&expenses, today);
                self.expenses = expenses;
                self.error = None;
            }
            Err(err) => {
                warn!(error = %err, status = ?err.status(), "dashboard fetch failed");
                self.error = Some(err.message());
            }
        }
    }

    /// Records a failed follow-up action (e.g. delete) without touching the data.
    pub fn fail(&mut self, err: GatewayError) {
        warn!(error = %err, status = ?err.status(), "dashboard action failed");
        self.error = Some(err.message());
    }

    pub fn recent(&self, limit: usize) -> &[ExpenseRecord] {
        &self.expenses[..self.expenses.len().min(limit)]
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

#[derive(Debug)]
pub enum DashboardAction {
    /// Ask for a fresh fetch (retry, or after a successful delete).
    Reload,
    Begin,
    Loaded {
        generation: u32,
        result: Result<Vec<ExpenseRecord>, GatewayError>,
        today: NaiveDate,
    },
    Failed(GatewayError),
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: DashboardAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DashboardAction::Reload => next.reload(),
            DashboardAction::Begin => next.begin(),
            DashboardAction::Loaded {
                generation,
                result,
                today,
            } => {
                if generation != next.generation {
                    debug!(generation, current = next.generation, "dropping stale dashboard fetch");
                    return self;
                }
                next.finish(result, today);
            }
            DashboardAction::Failed(err) => next.fail(err),
        }
        Rc::new(next)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsState {
    pub loading: bool,
    pub error: Option<String>,
    pub summaries: Vec<CategorySummary>,
    pub max: f64,
    pub grand_total: f64,
    /// Source of the fetch in flight, or of the data shown.
    pub source: SummarySource,
}

impl Default for AnalyticsState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsState {
    pub fn new() -> Self {
        Self {
            loading: true,
            error: None,
            summaries: Vec::new(),
            max: 0.0,
            grand_total: 0.0,
            source: SummarySource::default(),
        }
    }

    pub fn begin(&mut self, source: SummarySource) {
        self.loading = true;
        self.error = None;
        self.source = source;
    }

    /// Aggregates raw records in the browser.
    pub fn finish_records(
        &mut self,
        source: SummarySource,
        result: Result<Vec<ExpenseRecord>, GatewayError>,
    ) {
        self.finish_summaries(
            source,
            result.map(|records| compute_category_summaries(&records)),
        );
    }

    /// Takes per-category summaries as the server computed them.
    ///
    /// Results for a source other than the one last passed to `begin` are dropped.
    pub fn finish_summaries(
        &mut self,
        source: SummarySource,
        result: Result<Vec<CategorySummary>, GatewayError>,
    ) {
        if source != self.source {
            debug!(
                result_source = source.label(),
                current = self.source.label(),
                "dropping stale analytics fetch"
            );
            return;
        }

        self.loading = false;
        match result {
            Ok(summaries) => {
                info!(categories = summaries.len(), "category summaries loaded");
                self.max = aggregation::compute_max(&summaries);
                self.grand_total = aggregation::compute_grand_total(&summaries);
                self.summaries = summaries;
                self.error = None;
            }
            Err(err) => {
                warn!(error = %err, status = ?err.status(), "analytics fetch failed");
                self.error = Some(err.message());
            }
        }
    }

    pub fn top(&self) -> Option<&CategorySummary> {
        aggregation::top_summary(&self.summaries)
    }

    pub fn top_category(&self) -> String {
        aggregation::top_category_label(&self.summaries)
    }

    pub fn percentage(&self, summary: &CategorySummary) -> f64 {
        bar_percentage(summary.total_amount, self.max)
    }

    /// Share of all spending, 0-100.
    pub fn share(&self, summary: &CategorySummary) -> f64 {
        bar_percentage(summary.total_amount, self.grand_total)
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

#[derive(Debug)]
pub enum AnalyticsAction {
    Begin(SummarySource),
    Records(SummarySource, Result<Vec<ExpenseRecord>, GatewayError>),
    Summaries(SummarySource, Result<Vec<CategorySummary>, GatewayError>),
}

impl Reducible for AnalyticsState {
    type Action = AnalyticsAction;

    fn reduce(self: Rc<Self>, action: AnalyticsAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AnalyticsAction::Begin(source) => next.begin(source),
            AnalyticsAction::Records(source, result) => next.finish_records(source, result),
            AnalyticsAction::Summaries(source, result) => next.finish_summaries(source, result),
        }
        Rc::new(next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Amount,
    Category,
    Description,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    Success(String),
    Error(String),
}

impl FormMessage {
    pub fn text(&self) -> &str {
        match self {
            FormMessage::Success(text) | FormMessage::Error(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FormMessage::Success(_))
    }
}

/// The Add Expense form, holding values exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddExpenseForm {
    pub amount: String,
    pub category: String,
    pub description: String,
    pub submitting: bool,
    pub message: Option<FormMessage>,
}

impl AddExpenseForm {
    /// Ignored while a submission is in flight.
    pub fn set_field(&mut self, field: FormField, value: String) {
        if self.submitting {
            return;
        }
        match field {
            FormField::Amount => self.amount = value,
            FormField::Category => self.category = value,
            FormField::Description => self.description = value,
        }
        self.message = None;
    }

    /// Validates the form and, if it passes, marks it as submitting and
    /// returns the payload for `POST /expense`.
    pub fn submit(&mut self) -> Result<NewExpense, ValidationError> {
        self.message = None;
        match self.payload() {
            Ok(payload) => {
                self.submitting = true;
                Ok(payload)
            }
            Err(err) => {
                self.message = Some(FormMessage::Error(err.to_string()));
                Err(err)
            }
        }
    }

    pub fn finish(&mut self, result: Result<ExpenseRecord, GatewayError>) {
        self.submitting = false;
        match result {
            Ok(created) => {
                info!(id = created.id.as_deref().unwrap_or("-"), "expense created");
                self.amount.clear();
                self.category.clear();
                self.description.clear();
                self.message = Some(FormMessage::Success(SUCCESS_MESSAGE.to_string()));
            }
            Err(err) => {
                warn!(error = %err, "expense creation failed");
                self.message = Some(FormMessage::Error(err.message()));
            }
        }
    }

    fn payload(&self) -> Result<NewExpense, ValidationError> {
        let amount = self.amount.trim();
        let category = self.category.trim();
        if amount.is_empty() || category.is_empty() {
            return Err(ValidationError::MissingRequired);
        }

        let amount = amount
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
            .ok_or(ValidationError::InvalidAmount)?;
        let category = Category::from_label(category).ok_or(ValidationError::UnknownCategory)?;

        Ok(NewExpense {
            amount,
            category: category.label().to_string(),
            description: self.description.clone(),
        })
    }
}
