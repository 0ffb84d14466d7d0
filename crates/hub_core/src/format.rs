//! Display formatting shared by the hub views.

use chrono::{DateTime, Utc};

/// Compact count: `1.2M`, `125K`, `999`. Ties round up (`1_250` is `1.3K`).
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{}M", tenths(n, 1_000_000))
    } else if n >= 1_000 {
        format!("{}K", tenths(n, 1_000))
    } else {
        n.to_string()
    }
}

fn tenths(n: u64, divisor: u64) -> String {
    let tenths = (u128::from(n) * 10 + u128::from(divisor / 2)) / u128::from(divisor);
    match tenths % 10 {
        0 => (tenths / 10).to_string(),
        frac => format!("{}.{frac}", tenths / 10),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

/// Splits a 0..=5 rating into full, half and empty stars.
pub fn star_rating(rating: f32) -> StarRating {
    let rating = if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, 5.0)
    };
    let full = rating.floor() as u8;
    let half = full < 5 && rating.fract() >= 0.5;
    let empty = 5 - full - u8::from(half);
    StarRating { full, half, empty }
}

/// Cuts `text` to `len` characters and appends `...` when it was longer.
pub fn truncate(text: &str, len: usize) -> String {
    if text.chars().count() <= len {
        return text.to_owned();
    }
    let head: String = text.chars().take(len).collect();
    format!("{}...", head.trim())
}

const INTERVALS: [(&str, i64); 6] = [
    ("year", 31_536_000),
    ("month", 2_592_000),
    ("week", 604_800),
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
];

/// `"3 hours ago"` style label for `then` as seen from `now`.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    for (label, span) in INTERVALS {
        let count = seconds / span;
        if count >= 1 {
            let plural = if count > 1 { "s" } else { "" };
            return format!("{count} {label}{plural} ago");
        }
    }
    "Just now".to_owned()
}

/// `part / whole` as a percentage; zero when `whole` is zero.
pub fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
