//! Advisory validation helpers for the admin forms
//!
//! These are presentation-layer hints only. The backend remains the source
//! of truth: the form controller submits without local validation and
//! attaches whatever field errors the backend returns.

use rust_decimal::Decimal;

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate a URL slug (lowercase alphanumeric and dashes)
pub fn validate_slug(slug: &str) -> Result<(), &'static str> {
    if slug.is_empty() {
        return Err("Slug cannot be empty");
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("Slug must be lowercase alphanumeric with dashes");
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err("Slug cannot start or end with a dash");
    }
    Ok(())
}

/// Validate a price is non-negative
pub fn validate_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Price cannot be negative");
    }
    Ok(())
}

/// Validate stock is non-negative
pub fn validate_stock(stock: i32) -> Result<(), &'static str> {
    if stock < 0 {
        return Err("Stock cannot be negative");
    }
    Ok(())
}

// ============================================================================
// Indonesia-Specific Validations
// ============================================================================

/// Validate Indonesian phone number format
/// Accepts: 081234567890, 0812-3456-7890, +6281234567890
pub fn validate_indonesian_phone(phone: &str) -> Result<(), &'static str> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    // Domestic mobile: 10-13 digits starting with 08
    if digits.len() >= 10 && digits.len() <= 13 && digits.starts_with("08") {
        return Ok(());
    }
    // International format with country code 62
    if digits.len() >= 11 && digits.len() <= 14 && digits.starts_with("628") {
        return Ok(());
    }

    Err("Invalid Indonesian phone number format")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("admin@budayaku.id").is_ok());
        assert!(validate_email("user.name@domain.co.id").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@domain").is_err());
        assert!(validate_email("@.").is_err());
    }

    #[test]
    fn test_validate_slug_valid() {
        assert!(validate_slug("tari-kecak").is_ok());
        assert!(validate_slug("batik-2024").is_ok());
    }

    #[test]
    fn test_validate_slug_invalid() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Tari Kecak").is_err());
        assert!(validate_slug("-leading").is_err());
        assert!(validate_slug("trailing-").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Decimal::from_str("25000").unwrap()).is_ok());
        assert!(validate_price(Decimal::ZERO).is_ok());
        assert!(validate_price(Decimal::from_str("-1").unwrap()).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(120).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_indonesian_phone_valid() {
        assert!(validate_indonesian_phone("081234567890").is_ok());
        assert!(validate_indonesian_phone("0812-3456-7890").is_ok());
        assert!(validate_indonesian_phone("+6281234567890").is_ok());
    }

    #[test]
    fn test_validate_indonesian_phone_invalid() {
        assert!(validate_indonesian_phone("12345").is_err());
        assert!(validate_indonesian_phone("021123").is_err());
        assert!(validate_indonesian_phone("abcdefghij").is_err());
    }
}
