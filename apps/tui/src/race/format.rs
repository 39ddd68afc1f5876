/// Formats a bar value for display: millions as `M`, thousands as `K`,
/// anything smaller as a plain rounded integer.
pub fn format_value(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{}", value.round())
    }
}

/// Values below one million are drawn after the bar end; larger ones inside it.
pub fn value_inside_bar(value: f64) -> bool {
    value >= 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::{format_value, value_inside_bar};

    #[test]
    fn small_values_are_plain_integers() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(999.4), "999");
        assert_eq!(format_value(41.6), "42");
    }

    #[test]
    fn thousands_use_k_suffix() {
        assert_eq!(format_value(1_000.0), "1.0K");
        assert_eq!(format_value(25_340.0), "25.3K");
        assert_eq!(format_value(999_000.0), "999.0K");
    }

    #[test]
    fn millions_use_m_suffix() {
        assert_eq!(format_value(1_000_000.0), "1.0M");
        assert_eq!(format_value(10_480_000.0), "10.5M");
    }

    #[test]
    fn label_moves_inside_from_one_million() {
        assert!(!value_inside_bar(999_999.0));
        assert!(value_inside_bar(1_000_000.0));
    }
}
