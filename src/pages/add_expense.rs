use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::current_config;
use crate::api::ExpenseApi;
use crate::category::Category;
use crate::components::icon_plus_circle;
use crate::config::AppConfig;
use crate::state::{AddExpenseForm, FormField};

#[function_component(AddExpensePage)]
pub fn add_expense_page() -> Html {
    let config_handle = use_context::<UseStateHandle<AppConfig>>();
    let config = current_config(config_handle.as_ref());
    let form = use_state(AddExpenseForm::default);

    let on_amount = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field(FormField::Amount, input.value());
            form.set(next);
        })
    };

    let on_category = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field(FormField::Category, select.value());
            form.set(next);
        })
    };

    let on_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field(FormField::Description, area.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let api = ExpenseApi::from_config(&config);
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let payload = match next.submit() {
                Ok(payload) => payload,
                Err(_) => {
                    form.set(next);
                    return;
                }
            };
            form.set(next.clone());

            let form = form.clone();
            let api = api.clone();
            spawn_local(async move {
                let result = api.create(&payload).await;
                next.finish(result);
                form.set(next);
            });
        })
    };

    let on_clear = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.set(AddExpenseForm::default()))
    };

    html! {
        <div class="min-h-screen bg-linear-to-br from-purple-50 to-indigo-100 py-8 px-4">
            <div class="max-w-2xl mx-auto">
                <div class="text-center mb-8">
                    <div class="inline-flex items-center justify-center w-16 h-16 bg-purple-600 rounded-full mb-4">
                        { icon_plus_circle("h-8 w-8 text-white") }
                    </div>
                    <h1 class="text-3xl font-bold text-gray-800 mb-2">{"Add New Expense"}</h1>
                    <p class="text-gray-600">{"Track your spending by adding a new expense"}</p>
                </div>

                <div class="bg-white rounded-2xl shadow-xl p-8">
                    <form onsubmit={on_submit} class="space-y-6">
                        <div>
                            <label class="flex items-center text-sm font-semibold text-gray-700 mb-2">
                                { format!("Amount ({}) *", config.currency_symbol) }
                            </label>
                            <input
                                type="number"
                                id="amount"
                                name="amount"
                                step="0.01"
                                min="0"
                                placeholder="0.00"
                                value={form.amount.clone()}
                                oninput={on_amount}
                                disabled={form.submitting}
                                class="w-full px-4 py-3 border-2 border-gray-200 rounded-lg focus:border-purple-500 focus:outline-none transition-colors text-lg"
                            />
                        </div>

                        <div>
                            <label class="flex items-center text-sm font-semibold text-gray-700 mb-2">
                                {"Category *"}
                            </label>
                            <select
                                id="category"
                                name="category"
                                onchange={on_category}
                                disabled={form.submitting}
                                class="w-full px-4 py-3 border-2 border-gray-200 rounded-lg focus:border-purple-500 focus:outline-none transition-colors text-lg bg-white"
                            >
                                <option value="" selected={form.category.is_empty()}>{"Select a category"}</option>
                                { for Category::ALL.iter().map(|category| html! {
                                    <option value={category.label()} selected={form.category == category.label()}>
                                        { category.label() }
                                    </option>
                                }) }
                            </select>
                        </div>

                        <div>
                            <label class="flex items-center text-sm font-semibold text-gray-700 mb-2">
                                {"Description"}
                            </label>
                            <textarea
                                id="description"
                                name="description"
                                rows="3"
                                placeholder="Add notes about this expense (optional)"
                                value={form.description.clone()}
                                oninput={on_description}
                                disabled={form.submitting}
                                class="w-full px-4 py-3 border-2 border-gray-200 rounded-lg focus:border-purple-500 focus:outline-none transition-colors resize-none"
                            ></textarea>
                        </div>

                        {
                            match &form.message {
                                Some(message) => {
                                    let (container, text) = if message.is_success() {
                                        ("bg-green-50 border-2 border-green-200", "text-green-800")
                                    } else {
                                        ("bg-red-50 border-2 border-red-200", "text-red-800")
                                    };
                                    html! {
                                        <div class={classes!("flex", "items-center", "p-4", "rounded-lg", container)}>
                                            <span class={classes!("text-sm", "font-medium", text)}>{ message.text().to_string() }</span>
                                        </div>
                                    }
                                }
                                None => html! {},
                            }
                        }

                        <div class="flex gap-3">
                            <button
                                type="submit"
                                disabled={form.submitting}
                                class="flex-1 bg-linear-to-r from-purple-600 to-indigo-600 text-white py-4 px-6 rounded-lg font-semibold text-lg shadow-lg disabled:opacity-50 disabled:cursor-not-allowed flex items-center justify-center"
                            >
                                { if form.submitting { "Adding Expense..." } else { "Add Expense" } }
                            </button>
                            <button
                                type="button"
                                onclick={on_clear}
                                disabled={form.submitting}
                                class="px-6 rounded-lg font-semibold text-gray-600 border-2 border-gray-200 hover:bg-gray-50"
                            >
                                {"Clear"}
                            </button>
                        </div>
                    </form>
                </div>

                <p class="text-center text-sm text-gray-500 mt-6">{"* Required fields"}</p>
            </div>
        </div>
    }
}
