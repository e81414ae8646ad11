use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::current_config;
use crate::api::ExpenseApi;
use crate::category::{badge_class_for, bar_class_for};
use crate::components::{icon_bar_chart, icon_pie_chart, icon_trending_up};
use crate::config::{AppConfig, SummarySource};
use crate::format::{format_currency, format_percentage};
use crate::state::{AnalyticsAction, AnalyticsState};

#[function_component(AnalyticsPage)]
pub fn analytics_page() -> Html {
    let config_handle = use_context::<UseStateHandle<AppConfig>>();
    let config = current_config(config_handle.as_ref());
    let state = use_reducer(AnalyticsState::new);

    {
        let state = state.clone();
        let api = ExpenseApi::from_config(&config);
        use_effect_with_deps(
            move |source: &SummarySource| {
                let source = *source;
                state.dispatch(AnalyticsAction::Begin(source));
                spawn_local(async move {
                    let action = match source {
                        SummarySource::Client => {
                            AnalyticsAction::Records(source, api.list_all().await)
                        }
                        SummarySource::Server => {
                            AnalyticsAction::Summaries(source, api.category_summary().await)
                        }
                    };
                    state.dispatch(action);
                });
                || ()
            },
            config.summary_source,
        );
    }

    let on_toggle_source = {
        let config_handle = config_handle.clone();
        let config = config.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(handle) = config_handle.as_ref() {
                let mut next = config.clone();
                next.summary_source = next.summary_source.toggled();
                if let Err(err) = next.save() {
                    tracing::warn!(error = %err, "could not save settings");
                }
                handle.set(next);
            }
        })
    };

    let symbol = config.currency_symbol.as_str();

    let body = if state.loading {
        html! {
            <div class="text-center py-12">
                <div class="animate-spin rounded-full h-12 w-12 border-b-4 border-indigo-600 mx-auto mb-4"></div>
                <p class="text-gray-600 font-medium">{"Loading analytics..."}</p>
            </div>
        }
    } else if let Some(error) = &state.error {
        html! {
            <div class="p-4 rounded-lg bg-red-50 border-2 border-red-200">
                <span class="text-sm font-medium text-red-800">{ error.clone() }</span>
            </div>
        }
    } else if state.is_empty() {
        html! {
            <div class="text-center py-12">
                { icon_pie_chart("h-16 w-16 text-gray-300 mx-auto mb-4") }
                <p class="text-gray-500 font-medium">{"No spending data yet"}</p>
                <p class="text-gray-400 text-sm mt-2">{"Add an expense to see where your money goes"}</p>
            </div>
        }
    } else {
        let top_total = state
            .top()
            .map(|summary| format_currency(summary.total_amount, symbol))
            .unwrap_or_default();

        html! {
            <>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                    <div class="bg-white rounded-xl shadow-lg p-6">
                        <div class="flex items-center gap-2 mb-2 text-orange-600">{ icon_trending_up("h-5 w-5") }</div>
                        <h3 class="text-gray-500 text-sm font-medium mb-1">{"Highest spending"}</h3>
                        <p class="text-2xl font-bold text-gray-800">{ state.top_category() }</p>
                        <p class="text-xs text-gray-400">{ top_total }</p>
                    </div>
                    <div class="bg-white rounded-xl shadow-lg p-6">
                        <div class="flex items-center gap-2 mb-2 text-purple-600">{ icon_pie_chart("h-5 w-5") }</div>
                        <h3 class="text-gray-500 text-sm font-medium mb-1">{"Categories tracked"}</h3>
                        <p class="text-2xl font-bold text-gray-800">{ state.summaries.len().to_string() }</p>
                    </div>
                    <div class="bg-white rounded-xl shadow-lg p-6">
                        <div class="flex items-center gap-2 mb-2 text-blue-600">{ icon_bar_chart("h-5 w-5") }</div>
                        <h3 class="text-gray-500 text-sm font-medium mb-1">{"Total spent"}</h3>
                        <p class="text-2xl font-bold text-gray-800">{ format_currency(state.grand_total, symbol) }</p>
                    </div>
                </div>

                <div class="bg-white rounded-2xl shadow-xl p-6 space-y-5">
                    <h2 class="text-2xl font-bold text-gray-800">{"Spending by Category"}</h2>
                    { for state.summaries.iter().map(|summary| {
                        let width = state.percentage(summary);
                        html! {
                            <div key={summary.category.clone()} class="space-y-2">
                                <div class="flex items-center justify-between text-sm">
                                    <span class={classes!("px-3", "py-1", "rounded-full", "text-xs", "font-bold", badge_class_for(&summary.category))}>
                                        { summary.category.clone() }
                                    </span>
                                    <span class="font-semibold text-gray-800">{ format_currency(summary.total_amount, symbol) }</span>
                                </div>
                                <div class="h-3 w-full bg-gray-100 rounded-full overflow-hidden">
                                    <div class={classes!("h-full", "rounded-full", bar_class_for(&summary.category))} style={format!("width: {:.2}%", width)}></div>
                                </div>
                                <div class="flex items-center justify-between text-xs text-gray-500">
                                    <span>{ format!("{} transaction(s) · avg {}", summary.count, format_currency(summary.average_amount, symbol)) }</span>
                                    <span>{ format!("{} of total", format_percentage(state.share(summary))) }</span>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </>
        }
    };

    html! {
        <div class="min-h-screen bg-linear-to-br from-purple-50 to-indigo-100 py-8 px-4">
            <div class="max-w-7xl mx-auto">
                <div class="flex items-start justify-between mb-8">
                    <div>
                        <h1 class="text-4xl font-bold text-gray-800 mb-2">{"Analytics"}</h1>
                        <p class="text-gray-600">{"Where your money goes, category by category"}</p>
                    </div>
                    <button
                        onclick={on_toggle_source}
                        disabled={state.loading}
                        class="text-sm font-medium text-indigo-700 bg-white/70 hover:bg-white px-4 py-2 rounded-lg shadow disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        { config.summary_source.label() }
                    </button>
                </div>
                { body }
            </div>
        </div>
    }
}
