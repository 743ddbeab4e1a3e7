/// Whole-currency amount, e.g. `$25`.
pub fn format_cost(amount: u32) -> String {
    format!("${}", amount)
}

/// Minutes as `15 min` below an hour, `1h 05m` from an hour up.
pub fn format_minutes(minutes: u32) -> String {
    if minutes < 60 {
        format!("{} min", minutes)
    } else {
        format!("{}h {:02}m", minutes / 60, minutes % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cost() {
        assert_eq!(format_cost(0), "$0");
        assert_eq!(format_cost(70), "$70");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(45), "45 min");
        assert_eq!(format_minutes(60), "1h 00m");
        assert_eq!(format_minutes(125), "2h 05m");
    }
}
