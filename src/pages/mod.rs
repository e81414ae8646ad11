mod add_expense;
mod analytics;
mod dashboard;

pub use add_expense::AddExpensePage;
pub use analytics::AnalyticsPage;
pub use dashboard::DashboardPage;

use yew::UseStateHandle;

use crate::config::AppConfig;

fn current_config(handle: Option<&UseStateHandle<AppConfig>>) -> AppConfig {
    handle.map(|config| (**config).clone()).unwrap_or_default()
}
