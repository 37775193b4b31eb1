/// `$1,234.56` style display for derived (fractional) amounts.
pub fn currency(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let cents = (value * 100.0).round() as i64;
    format_cents(cents)
}

/// `$1,234.00` style display for whole-dollar amounts.
pub fn dollars(value: i64) -> String {
    format_cents(value.saturating_mul(100))
}

fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = group_thousands(cents / 100);
    format!("{sign}${whole}.{:02}", cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_two_decimals() {
        assert_eq!(currency(800.0), "$800.00");
        assert_eq!(currency(2200.0), "$2,200.00");
        assert_eq!(currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(currency(0.005), "$0.01");
        assert_eq!(currency(0.0), "$0.00");
    }

    #[test]
    fn whole_dollars() {
        assert_eq!(dollars(500_000), "$500,000.00");
        assert_eq!(dollars(100), "$100.00");
        assert_eq!(dollars(-1_500), "-$1,500.00");
    }
}
