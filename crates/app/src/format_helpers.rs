//! Shared formatting utilities for the UI layer.

use chrono::NaiveDate;

/// Format a monthly rent as "₹12,000" with thousands separators.
pub fn format_price(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Format a date as "Jan 20, 2026".
pub fn format_date_human(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Render a rating like "4.5 (12 reviews)"; hides the review count at zero.
pub fn format_rating(rating: f64, total_reviews: i32) -> String {
    if total_reviews == 0 {
        format!("{rating:.1}")
    } else {
        format!("{rating:.1} ({total_reviews} reviews)")
    }
}
