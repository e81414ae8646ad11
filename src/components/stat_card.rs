use yew::prelude::*;

use crate::components::{icon_bar_chart, icon_calendar, icon_pie_chart, icon_wallet};

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Wallet,
    Calendar,
    BarChart,
    PieChart,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub value: String,
    pub subtitle: String,
    pub icon: StatIcon,
    pub color: &'static str,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let icon_class = "h-6 w-6 text-white";
    html! {
        <div class="bg-white rounded-xl shadow-lg p-6 hover:shadow-xl transition-shadow duration-300">
            <div class="flex items-center justify-between mb-4">
                <div class={classes!("p-3", "rounded-lg", props.color)}>
                    {
                        match props.icon {
                            StatIcon::Wallet => icon_wallet(icon_class),
                            StatIcon::Calendar => icon_calendar(icon_class),
                            StatIcon::BarChart => icon_bar_chart(icon_class),
                            StatIcon::PieChart => icon_pie_chart(icon_class),
                        }
                    }
                </div>
            </div>
            <h3 class="text-gray-500 text-sm font-medium mb-1">{ props.title }</h3>
            <p class="text-2xl font-bold text-gray-800 mb-1">{ props.value.clone() }</p>
            <p class="text-xs text-gray-400">{ props.subtitle.clone() }</p>
        </div>
    }
}
