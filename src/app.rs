use yew::prelude::*;

use crate::components::Layout;
use crate::config::AppConfig;
use crate::pages::{AddExpensePage, AnalyticsPage, DashboardPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    AddExpense,
    Analytics,
}

impl Page {
    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::AddExpense => "Add Expense",
            Page::Analytics => "Analytics",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::AddExpense => "/add",
            Page::Analytics => "/analytics",
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let active_page = use_state(|| Page::Dashboard);
    let config = use_state(AppConfig::load);
    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    // each page fetches on mount, so switching pages always refetches
    let content = match *active_page {
        Page::Dashboard => html! { <DashboardPage on_navigate={on_select.clone()} /> },
        Page::AddExpense => html! { <AddExpensePage /> },
        Page::Analytics => html! { <AnalyticsPage /> },
    };

    html! {
        <ContextProvider<UseStateHandle<AppConfig>> context={config}>
            <Layout active_page={*active_page} on_select={on_select}>
                { content }
            </Layout>
        </ContextProvider<UseStateHandle<AppConfig>>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_have_distinct_paths() {
        let pages = [Page::Dashboard, Page::AddExpense, Page::Analytics];
        let mut paths: Vec<&str> = pages.iter().map(|page| page.path()).collect();
        paths.dedup();

        assert_eq!(paths.len(), pages.len());
        assert_eq!(Page::AddExpense.label(), "Add Expense");
    }
}
