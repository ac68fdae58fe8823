//! Report formatting utilities for terminal output

/// Format an amount with a currency symbol and two decimals ("$-10.00" when negative)
pub fn format_money(currency: &str, amount: f64) -> String {
    format!("{}{:.2}", currency, amount)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("$", 150.0), "$150.00");
        assert_eq!(format_money("€", 2.5), "€2.50");
        assert_eq!(format_money("$", -10.0), "$-10.00");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);

        assert_eq!(format_bar(0.0, 100.0, 4), "░░░░");
        assert_eq!(format_bar(250.0, 100.0, 4), "████");
    }
}
