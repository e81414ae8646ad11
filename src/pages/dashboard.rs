use chrono::Local;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::current_config;
use crate::api::ExpenseApi;
use crate::app::Page;
use crate::category::badge_class_for;
use crate::components::{
    icon_bar_chart, icon_plus_circle, icon_receipt, icon_trash, StatCard, StatIcon,
};
use crate::config::AppConfig;
use crate::format::{format_currency, format_date, month_label};
use crate::model::ExpenseRecord;
use crate::state::{DashboardAction, DashboardState};

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardProps) -> Html {
    let config_handle = use_context::<UseStateHandle<AppConfig>>();
    let config = current_config(config_handle.as_ref());
    let state = use_reducer(DashboardState::new);

    // fetch on mount, then once per generation bump (retry or delete)
    {
        let generation = state.generation;
        let state = state.clone();
        let api = ExpenseApi::from_config(&config);
        use_effect_with_deps(
            move |generation: &u32| {
                let generation = *generation;
                state.dispatch(DashboardAction::Begin);
                spawn_local(async move {
                    let result = api.list_all().await;
                    state.dispatch(DashboardAction::Loaded {
                        generation,
                        result,
                        today: Local::now().date_naive(),
                    });
                });
                || ()
            },
            generation,
        );
    }

    let on_retry = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(DashboardAction::Reload))
    };

    let on_delete = {
        let state = state.clone();
        let api = ExpenseApi::from_config(&config);
        Callback::from(move |id: String| {
            let state = state.clone();
            let api = api.clone();
            spawn_local(async move {
                match api.delete(&id).await {
                    Ok(()) => state.dispatch(DashboardAction::Reload),
                    Err(err) => state.dispatch(DashboardAction::Failed(err)),
                }
            });
        })
    };

    let navigate = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(page))
    };

    if state.loading {
        return html! {
            <div class="min-h-screen bg-linear-to-br from-purple-50 to-indigo-100 flex items-center justify-center">
                <div class="text-center">
                    <div class="animate-spin rounded-full h-16 w-16 border-b-4 border-purple-600 mx-auto mb-4"></div>
                    <p class="text-gray-600 font-medium">{"Loading dashboard..."}</p>
                </div>
            </div>
        };
    }

    let symbol = config.currency_symbol.as_str();
    let stats = &state.stats;
    let today = Local::now().date_naive();

    html! {
        <div class="min-h-screen bg-linear-to-br from-purple-50 to-indigo-100 py-8 px-4">
            <div class="max-w-7xl mx-auto">
                <div class="mb-8">
                    <h1 class="text-4xl font-bold text-gray-800 mb-2">{"Dashboard"}</h1>
                    <p class="text-gray-600">{"Welcome back! Here's your expense overview"}</p>
                </div>

                {
                    if let Some(error) = &state.error {
                        html! {
                            <div class="flex items-center justify-between p-4 mb-6 rounded-lg bg-red-50 border-2 border-red-200">
                                <span class="text-sm font-medium text-red-800">{ error.clone() }</span>
                                <button onclick={on_retry} class="text-sm font-semibold text-red-700 hover:text-red-800">{"Retry"}</button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                    <StatCard
                        title="Total Expenses"
                        value={format_currency(stats.total_expenses, symbol)}
                        subtitle={"All time".to_string()}
                        icon={StatIcon::Wallet}
                        color="bg-linear-to-br from-purple-500 to-purple-600"
                    />
                    <StatCard
                        title="This Month"
                        value={format_currency(stats.monthly_expenses, symbol)}
                        subtitle={month_label(today)}
                        icon={StatIcon::Calendar}
                        color="bg-linear-to-br from-blue-500 to-blue-600"
                    />
                    <StatCard
                        title="Transactions"
                        value={stats.transaction_count.to_string()}
                        subtitle={"Total count".to_string()}
                        icon={StatIcon::BarChart}
                        color="bg-linear-to-br from-green-500 to-green-600"
                    />
                    <StatCard
                        title="Top Category"
                        value={stats.top_category.clone()}
                        subtitle={"Highest spending".to_string()}
                        icon={StatIcon::PieChart}
                        color="bg-linear-to-br from-orange-500 to-orange-600"
                    />
                </div>

                <div class="bg-white rounded-2xl shadow-xl p-6">
                    <div class="flex items-center justify-between mb-6">
                        <h2 class="text-2xl font-bold text-gray-800">{"Recent Expenses"}</h2>
                    </div>

                    {
                        if state.is_empty() {
                            html! {
                                <div class="text-center py-12">
                                    { icon_receipt("h-16 w-16 text-gray-300 mx-auto mb-4") }
                                    <p class="text-gray-500 font-medium">{"No expenses yet"}</p>
                                    <p class="text-gray-400 text-sm mt-2">{"Start tracking by adding your first expense"}</p>
                                </div>
                            }
                        } else {
                            html! {
                                <div class="space-y-3">
                                    { for state.recent(config.recent_limit).iter().enumerate().map(|(idx, expense)| {
                                        expense_item(idx, expense, symbol, &on_delete)
                                    }) }
                                </div>
                            }
                        }
                    }
                </div>

                <div class="mt-8 grid grid-cols-1 md:grid-cols-2 gap-6">
                    <button onclick={navigate(Page::AddExpense)} class="text-left bg-linear-to-br from-purple-500 to-purple-600 rounded-xl p-6 text-white cursor-pointer hover:shadow-xl transition-shadow">
                        { icon_plus_circle("h-8 w-8 mb-3") }
                        <h3 class="font-bold text-lg mb-2">{"Add Expense"}</h3>
                        <p class="text-purple-100 text-sm">{"Track a new transaction"}</p>
                    </button>
                    <button onclick={navigate(Page::Analytics)} class="text-left bg-linear-to-br from-blue-500 to-blue-600 rounded-xl p-6 text-white cursor-pointer hover:shadow-xl transition-shadow">
                        { icon_bar_chart("h-8 w-8 mb-3") }
                        <h3 class="font-bold text-lg mb-2">{"View Analytics"}</h3>
                        <p class="text-blue-100 text-sm">{"Spending by category"}</p>
                    </button>
                </div>
            </div>
        </div>
    }
}

fn expense_item(
    idx: usize,
    expense: &ExpenseRecord,
    symbol: &str,
    on_delete: &Callback<String>,
) -> Html {
    let key = expense.id.clone().unwrap_or_else(|| format!("row-{}", idx));
    let date = expense
        .date
        .as_ref()
        .map(format_date)
        .unwrap_or_else(|| "Date unavailable".to_string());

    let delete_button = match &expense.id {
        Some(id) => {
            let onclick = {
                let on_delete = on_delete.clone();
                let id = id.clone();
                Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
            };
            html! {
                <button onclick={onclick} class="p-2 rounded-lg text-gray-400 hover:text-red-600 hover:bg-red-50" aria-label="Delete expense">
                    { icon_trash("h-4 w-4") }
                </button>
            }
        }
        None => html! {},
    };

    html! {
        <div key={key} class="flex items-center justify-between p-4 bg-white rounded-lg border border-gray-100 hover:shadow-md transition-shadow">
            <div class="flex items-center space-x-4">
                <div class={classes!("p-2", "rounded-lg", badge_class_for(&expense.category))}>
                    { icon_receipt("h-5 w-5") }
                </div>
                <div>
                    <p class="font-semibold text-gray-800">{ expense.category.clone() }</p>
                    <p class="text-sm text-gray-500">{ expense.description_or_placeholder().to_string() }</p>
                    <p class="text-xs text-gray-400 mt-1">{ date }</p>
                </div>
            </div>
            <div class="flex items-center gap-3">
                <p class="font-bold text-lg text-red-600">{ format_currency(expense.amount, symbol) }</p>
                { delete_button }
            </div>
        </div>
    }
}
