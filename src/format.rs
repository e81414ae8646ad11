use chrono::{NaiveDate, NaiveDateTime};

fn format_with_commas(value: u64) -> String {
    let s = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// `₹1,234.50`; rounds to the nearest cent.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        format_with_commas(cents / 100),
        cents % 100
    )
}

pub fn format_date(date: &NaiveDateTime) -> String {
    date.format("%-d %b %Y").to_string()
}

pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}
