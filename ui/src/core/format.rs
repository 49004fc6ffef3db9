//! Formatting helpers for presenting counters.

/// `1234567` → `"1,234,567"`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Listening time as `"12h 05m"`, or `"45m"` under an hour.
pub fn format_minutes(minutes: f64) -> String {
    if !minutes.is_finite() || minutes < 0.0 {
        return "—".to_string();
    }
    let total = minutes.round() as u64;
    let (hours, mins) = (total / 60, total % 60);
    if hours == 0 {
        format!("{mins}m")
    } else {
        format!("{}h {mins:02}m", format_count(hours))
    }
}
