//! Derived statistics shown on the admin dashboard cards
//!
//! Averages and totals over money amounts, plus Indonesian Rupiah
//! formatting with dot thousand separators.

use rust_decimal::Decimal;

/// Sum of a series of amounts
pub fn total(amounts: &[Decimal]) -> Decimal {
    amounts.iter().sum()
}

/// Arithmetic mean of a series of amounts; zero for an empty series
pub fn average(amounts: &[Decimal]) -> Decimal {
    if amounts.is_empty() {
        return Decimal::ZERO;
    }
    total(amounts) / Decimal::from(amounts.len() as u64)
}

/// Format an amount as Indonesian Rupiah, e.g. `Rp 1.250.000`
///
/// Amounts are rounded to whole Rupiah; the fraction is not displayed.
pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = amount.round();
    let negative = rounded.is_sign_negative();
    let digits = rounded.abs().to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if negative {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_total() {
        assert_eq!(total(&[dec("100"), dec("250"), dec("50")]), dec("400"));
        assert_eq!(total(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&[dec("100"), dec("200")]), dec("150"));
        assert_eq!(average(&[dec("75000")]), dec("75000"));
    }

    #[test]
    fn test_average_empty_is_zero() {
        assert_eq!(average(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_format_rupiah_grouping() {
        assert_eq!(format_rupiah(dec("0")), "Rp 0");
        assert_eq!(format_rupiah(dec("950")), "Rp 950");
        assert_eq!(format_rupiah(dec("1250")), "Rp 1.250");
        assert_eq!(format_rupiah(dec("1250000")), "Rp 1.250.000");
    }

    #[test]
    fn test_format_rupiah_rounds_fraction() {
        assert_eq!(format_rupiah(dec("999.6")), "Rp 1.000");
        assert_eq!(format_rupiah(dec("1000.4")), "Rp 1.000");
    }

    #[test]
    fn test_format_rupiah_negative() {
        assert_eq!(format_rupiah(dec("-15000")), "-Rp 15.000");
    }
}
