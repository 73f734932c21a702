//! Display formatting for table cells

/// NZD price in en-NZ style: `$1,234.50`, `-$3.00`
pub fn format_price(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, decimal_part)
}

/// Optional contact field, or "Not provided"
pub fn or_not_provided(value: &Option<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "Not provided".to_string(),
    }
}

/// First `max_chars` characters followed by `...` when the text is longer
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1.5), "$1.50");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(1234.5), "$1,234.50");
        assert_eq!(format_price(1234567.891), "$1,234,567.89");
        assert_eq!(format_price(-3.0), "-$3.00");
        assert_eq!(format_price(-0.001), "$0.00");
    }

    #[test]
    fn test_or_not_provided() {
        assert_eq!(or_not_provided(&Some("021 555".into())), "021 555");
        assert_eq!(or_not_provided(&Some(" ".into())), "Not provided");
        assert_eq!(or_not_provided(&None), "Not provided");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 50), "short");
        let long = "x".repeat(60);
        assert_eq!(truncate(&long, 50), format!("{}...", "x".repeat(50)));
        assert_eq!(truncate("ääää", 2), "ää...");
    }
}
