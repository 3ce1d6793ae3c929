/// Rounds to two decimal places from the exact binary value, so `1.255`
/// (stored just below the tie) becomes `1.25`.
/// Non-finite values pass through.
#[must_use]
pub fn round_metric(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Text form used in the CSV and console summary: rounded to two places,
/// shortest round-trip digits, always at least one fractional digit.
#[must_use]
pub fn format_metric(value: f64) -> String {
    let rounded = round_metric(value);

    if rounded.is_infinite() {
        return if rounded > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }

    if rounded.is_nan() {
        return "nan".to_string();
    }

    format!("{:?}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_metric_two_places() {
        assert_eq!(round_metric(12.34567), 12.35);
        assert_eq!(round_metric(4.104), 4.1);
        assert_eq!(round_metric(66.666_666), 66.67);
    }

    #[test]
    fn test_round_metric_follows_binary_value() {
        assert_eq!(round_metric(1.255), 1.25);
        assert_eq!(round_metric(2.675), 2.67);
        assert_eq!(format_metric(1.255), "1.25");
    }

    #[test]
    fn test_round_metric_keeps_infinity() {
        assert_eq!(round_metric(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_format_metric_shortest_form() {
        assert_eq!(format_metric(12.34567), "12.35");
        assert_eq!(format_metric(4.10), "4.1");
        assert_eq!(format_metric(15.0), "15.0");
        assert_eq!(format_metric(311.53), "311.53");
        assert_eq!(format_metric(0.0), "0.0");
    }

    #[test]
    fn test_format_metric_non_finite() {
        assert_eq!(format_metric(f64::INFINITY), "inf");
        assert_eq!(format_metric(f64::NAN), "nan");
    }
}
