use yew::prelude::*;

use crate::app::Page;
use crate::components::{icon_bar_chart, icon_layout_dashboard, icon_plus_circle, icon_user, icon_wallet};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub active_page: Page,
    pub on_select: Callback<Page>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-slate-50">
            <Navbar active_page={props.active_page} on_select={props.on_select.clone()} />
            <main>
                { for props.children.iter() }
            </main>
        </div>
    }
}

struct NavItem {
    page: Page,
    icon: fn(&'static str) -> Html,
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub active_page: Page,
    pub on_select: Callback<Page>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let nav_items = [
        NavItem {
            page: Page::Dashboard,
            icon: icon_layout_dashboard,
        },
        NavItem {
            page: Page::AddExpense,
            icon: icon_plus_circle,
        },
        NavItem {
            page: Page::Analytics,
            icon: icon_bar_chart,
        },
    ];

    let on_home = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(Page::Dashboard))
    };

    html! {
        <nav class="bg-linear-to-r from-purple-600 via-purple-700 to-indigo-700 shadow-lg sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <button onclick={on_home} class="flex items-center space-x-3 cursor-pointer group">
                        <div class="bg-white/20 p-2 rounded-lg group-hover:bg-white/30 transition-all duration-300">
                            { icon_wallet("h-6 w-6 text-white") }
                        </div>
                        <span class="text-white font-bold text-xl hidden sm:block">{"Expense Tracker"}</span>
                    </button>

                    <div class="flex space-x-1 sm:space-x-2">
                        { for nav_items.iter().map(|item| {
                            let page = item.page;
                            let is_active = page == props.active_page;
                            let onclick = {
                                let on_select = props.on_select.clone();
                                Callback::from(move |_: MouseEvent| on_select.emit(page))
                            };
                            let class = if is_active {
                                "flex items-center space-x-2 px-3 sm:px-4 py-2 rounded-lg font-medium transition-all duration-300 bg-white/25 text-white shadow-lg scale-105"
                            } else {
                                "flex items-center space-x-2 px-3 sm:px-4 py-2 rounded-lg font-medium transition-all duration-300 text-white/80 hover:bg-white/15 hover:text-white hover:scale-105"
                            };
                            html! {
                                <button key={page.path()} class={class} onclick={onclick} aria-current={if is_active { "page" } else { "false" }}>
                                    { (item.icon)("h-5 w-5") }
                                    <span class="hidden md:inline text-sm lg:text-base">{ page.label() }</span>
                                </button>
                            }
                        }) }
                    </div>

                    <div class="flex items-center">
                        <span class="bg-white/20 p-2 rounded-full">{ icon_user("h-6 w-6 text-white") }</span>
                    </div>
                </div>
            </div>
        </nav>
    }
}
