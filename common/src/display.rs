//! Formatting helpers for the result list.

use chrono::{DateTime, Datelike, Utc};


pub fn results_heading(count: usize) -> String {
    format!("검색 결과 ({count}건)")
}

/// Formats a KRW amount the way `ko-KR` currency formatting does, e.g. `₩1,234,567`.
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if price < 0 {
        format!("-₩{grouped}")
    } else {
        format!("₩{grouped}")
    }
}

/// Long Korean date, e.g. `2024년 3월 5일`. Dates are shown in UTC.
pub fn format_date(date: &DateTime<Utc>) -> String {
    format!("{}년 {}월 {}일", date.year(), date.month(), date.day())
}
