use yew::prelude::*;

fn icon_base(path: &'static str, class: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class={class}>
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_wallet(class: &'static str) -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2", class)
}
pub fn icon_layout_dashboard(class: &'static str) -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z", class)
}
pub fn icon_plus_circle(class: &'static str) -> Html {
    icon_base("M12 22a10 10 0 100-20 10 10 0 000 20zM12 8v8M8 12h8", class)
}
pub fn icon_bar_chart(class: &'static str) -> Html {
    icon_base("M4 20V10M10 20V4M16 20v-6M22 20H2", class)
}
pub fn icon_pie_chart(class: &'static str) -> Html {
    icon_base("M21.2 15.9A10 10 0 118 2.8M22 12A10 10 0 0012 2v10z", class)
}
pub fn icon_calendar(class: &'static str) -> Html {
    icon_base("M3 5h18v16H3zM16 3v4M8 3v4M3 11h18", class)
}
pub fn icon_receipt(class: &'static str) -> Html {
    icon_base("M4 2v20l3-2 3 2 3-2 3 2 3-2 1 1V2l-1 1-3-2-3 2-3-2-3 2-3-2zM8 8h8M8 12h8M8 16h5", class)
}
pub fn icon_user(class: &'static str) -> Html {
    icon_base("M20 21v-2a4 4 0 00-4-4H8a4 4 0 00-4 4v2M12 11a4 4 0 100-8 4 4 0 000 8z", class)
}
pub fn icon_trash(class: &'static str) -> Html {
    icon_base("M3 6h18M8 6V4h8v2M19 6l-1 14H6L5 6", class)
}
pub fn icon_trending_up(class: &'static str) -> Html {
    icon_base("M3 17l6-6 4 4 7-7", class)
}
