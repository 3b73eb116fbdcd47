// tests/tick_formatting_test.rs

use gps_log_compare::plot_framework::{format_tick, tick_decimals};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_axes_use_whole_numbers() {
        // A few hundred meters of track
        let span = 250.0;
        assert_eq!(tick_decimals(span), 0);
        assert_eq!(format_tick(0.0, span), "0");
        assert_eq!(format_tick(125.4, span), "125");
        assert_eq!(format_tick(-40.6, span), "-41");
    }

    #[test]
    fn test_short_ranges_keep_decimals() {
        assert_eq!(tick_decimals(1.0), 1);
        assert_eq!(format_tick(0.2, 1.0), "0.2");
        assert_eq!(tick_decimals(0.5), 2);
        assert_eq!(format_tick(0.25, 0.5), "0.25");
    }

    #[test]
    fn test_degree_axes_show_enough_digits() {
        // Unconverted logs span a few thousandths of a degree
        let span = 0.002;
        assert_eq!(tick_decimals(span), 4);
        assert_eq!(format_tick(47.1234, span), "47.1234");
        assert_eq!(format_tick(8.5, span), "8.5000");
    }

    #[test]
    fn test_tiny_spans_are_capped() {
        assert_eq!(tick_decimals(1e-12), 6);
    }

    #[test]
    fn test_degenerate_spans_fall_back() {
        assert_eq!(tick_decimals(0.0), 2);
        assert_eq!(tick_decimals(f64::NAN), 2);
        assert_eq!(format_tick(1.0, 0.0), "1.00");
    }

    #[test]
    fn test_no_negative_zero() {
        assert_eq!(format_tick(-0.0001, 100.0), "0");
        assert_eq!(format_tick(-0.004, 1.0), "0.0");
    }
}
