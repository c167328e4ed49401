// Parsing and formatting helpers.
//
// All of the forgiving string handling lives here so the pipeline modules can
// work with typed values only.
use crate::config::CURRENCY_SYMBOL;
use num_format::{Locale, ToFormattedString};

/// Trimmed, non-empty text or `None`.
pub fn non_empty(s: Option<&str>) -> Option<&str> {
    let s = s?.trim();
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Strict numeric coercion for the balance and coordinate columns.
///
/// Anything `str::parse` rejects becomes `None`, as do `NaN` and infinities,
/// so every returned value can be summed safely. Thousands separators are
/// not stripped: `"1,200"` in a numeric column is treated as malformed.
pub fn parse_f64_safe(s: Option<&str>) -> Option<f64> {
    let s = non_empty(s)?;
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Insert `en` thousands separators into a run of ASCII digits.
fn group_thousands(digits: &str) -> String {
    let sep = Locale::en.separator();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * sep.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(c);
    }
    out
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Fixed decimals plus `en` thousands separators, e.g. `1,234,567.89`.
    // Grouping works on the digit string, so magnitudes beyond any integer
    // type still format correctly.
    if !n.is_finite() {
        return n.to_string();
    }
    let neg = n.is_sign_negative() && n != 0.0;
    let s = format!("{:.*}", decimals, n.abs());
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };
    let mut res = group_thousands(int_part);
    if let Some(frac) = frac_part {
        res.push('.');
        res.push_str(frac);
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

pub fn format_currency(n: f64) -> String {
    format!("{} {}", CURRENCY_SYMBOL, format_number(n, 2))
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}

/// Text bar scaled so that `max` fills `width` characters.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if width == 0 || max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * width as f64).round() as usize;
    "█".repeat(len.clamp(1, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_text_and_non_finite() {
        assert_eq!(parse_f64_safe(Some(" 100 ")), Some(100.0));
        assert_eq!(parse_f64_safe(Some("-12.5")), Some(-12.5));
        assert_eq!(parse_f64_safe(Some("abc")), None);
        assert_eq!(parse_f64_safe(Some("1,200")), None);
        assert_eq!(parse_f64_safe(Some("NaN")), None);
        assert_eq!(parse_f64_safe(Some("inf")), None);
        assert_eq!(parse_f64_safe(Some("   ")), None);
        assert_eq!(parse_f64_safe(None), None);
    }

    #[test]
    fn currency_uses_thousands_separators() {
        assert_eq!(format_currency(1234567.891), "₹ 1,234,567.89");
        assert_eq!(format_currency(0.0), "₹ 0.00");
        assert_eq!(format_currency(-2500.5), "₹ -2,500.50");
    }

    #[test]
    fn huge_and_non_finite_values_keep_their_magnitude() {
        // Larger than u64::MAX.
        assert_eq!(format_currency(2.5e19), "₹ 25,000,000,000,000,000,000.00");
        assert_eq!(format_number(1e21, 0), "1,000,000,000,000,000,000,000");
        assert_eq!(format_number(999.6, 0), "1,000");
        assert_eq!(format_number(123.456, 1), "123.5");
        assert_eq!(format_currency(f64::INFINITY), "₹ inf");
        assert_eq!(format_number(f64::NEG_INFINITY, 2), "-inf");
        assert_eq!(format_number(f64::NAN, 2), "NaN");
    }

    #[test]
    fn zero_width_bar_is_empty() {
        assert!(bar(50.0, 100.0, 0).is_empty());
    }

    #[test]
    fn bar_scales_to_width() {
        assert_eq!(bar(50.0, 100.0, 10).chars().count(), 5);
        assert_eq!(bar(100.0, 100.0, 10).chars().count(), 10);
        // Tiny but positive values still get a visible bar.
        assert_eq!(bar(0.001, 100.0, 10).chars().count(), 1);
        assert!(bar(0.0, 100.0, 10).is_empty());
        assert!(bar(-5.0, 100.0, 10).is_empty());
    }
}
