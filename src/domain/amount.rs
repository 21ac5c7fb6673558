use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Amounts are kept as `f64` and re-rounded to cents after every accumulation.
pub type Amount = f64;

/// Round to 2 decimal places, half away from zero, on the exact value of the float.
/// Same result as formatting with two fixed decimals and parsing back.
/// Example: 0.125 -> 0.13, 1.005 -> 1.0 (1.005 is stored slightly below the midpoint)
pub fn round2(value: Amount) -> Amount {
    Decimal::from_f64_retain(value)
        .map(|exact| exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or(value)
}

/// Add `amount` to `total` and round the sum to cents.
pub fn accumulate(total: Amount, amount: Amount) -> Amount {
    round2(total + amount)
}

/// Parse an amount written with space thousands separators and a decimal comma.
/// Example: "1 234,56" -> 1234.56, "" -> 0.0, "n/a" -> 0.0
///
/// Only the leading numeric part is read, so trailing garbage is ignored.
pub fn parse_amount(input: &str) -> Amount {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized = compact.replacen(',', ".", 1);

    let number = leading_number(&normalized);
    match number.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Format an amount for display with two decimals.
/// Example: 1234.5 -> "1234.50", -0.004 -> "0.00"
pub fn format_amount(amount: Amount) -> String {
    let rounded = round2(amount);
    // Avoid printing "-0.00"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.2}", rounded)
}

// Longest prefix shaped like `[+-]digits[.digits][e[+-]digits]`
fn leading_number(input: &str) -> &str {
    let bytes = input.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return "";
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &input[..end]
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1 234,56", 1234.56)]
    #[case("12,5", 12.5)]
    #[case("100", 100.0)]
    #[case("-45,10", -45.1)]
    #[case("1\u{a0}000,00", 1000.0)]
    #[case("  7,00  ", 7.0)]
    #[case("", 0.0)]
    #[case("abc", 0.0)]
    #[case("12abc", 12.0)]
    #[case(",5", 0.5)]
    #[case("1,2,3", 1.2)]
    #[case("2e3", 2000.0)]
    #[case("2e", 2.0)]
    #[case("-", 0.0)]
    fn test_parse_amount(#[case] input: &str, #[case] expected: Amount) {
        assert_eq!(parse_amount(input), expected);
    }

    #[test]
    fn test_parse_amount_rejects_non_finite() {
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("1e999"), 0.0);
    }

    #[rstest]
    #[case(0.125, 0.13)]
    #[case(-0.125, -0.13)]
    #[case(1.005, 1.0)]
    #[case(2.675, 2.67)]
    #[case(0.1 + 0.2, 0.3)]
    #[case(19604.055000001, 19604.06)]
    #[case(0.004, 0.0)]
    #[case(42.0, 42.0)]
    fn test_round2(#[case] input: Amount, #[case] expected: Amount) {
        assert_eq!(round2(input), expected);
    }

    #[test]
    fn test_round2_keeps_non_finite_values() {
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_accumulate_rounds_every_step() {
        let stepwise = [0.004, 0.004, 0.004].iter().fold(0.0, |t, a| accumulate(t, *a));
        assert_eq!(stepwise, 0.0);
        assert_eq!(round2(0.004 + 0.004 + 0.004), 0.01);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234.5), "1234.50");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-0.004), "0.00");
        assert_eq!(format_amount(-12.346), "-12.35");
    }
}
