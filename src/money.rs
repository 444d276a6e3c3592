//! Money Parsing and Formatting
//!
//! Unified conversion between user-entered amount strings and the internal
//! `Decimal` representation. All amount input MUST go through this module.
//!
//! ## Design Principles
//! 1. Strict parsing: no silent acceptance of ambiguous formats
//! 2. Full precision internally; 2-dp rounding only at display time
//! 3. Explicit error handling via `MoneyError`

use rust_decimal::prelude::*;
use thiserror::Error;

/// Decimal places shown to the user
pub const DISPLAY_DECIMALS: u32 = 2;

/// Money parsing errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MoneyError {
    #[error("Amount must be greater than zero")]
    NotPositive,

    #[error("Invalid amount format: {0}")]
    InvalidFormat(String),
}

/// Parse a user-entered amount string into a `Decimal`.
///
/// # Validation Rules
/// - Rejects empty input and explicit signs (`+`/`-`)
/// - Rejects ambiguous formats like `.5` or `5.`
/// - Rejects zero and negative values
///
/// # Example
/// ```
/// use transfer_wizard::money::parse_amount;
///
/// let amount = parse_amount("100.00").unwrap();
/// assert!(amount > rust_decimal::Decimal::ZERO);
/// assert!(parse_amount(".5").is_err());
/// ```
pub fn parse_amount(amount_str: &str) -> Result<Decimal, MoneyError> {
    let amount_str = amount_str.trim();
    if amount_str.is_empty() {
        return Err(MoneyError::InvalidFormat("empty string".into()));
    }

    if amount_str.starts_with('-') || amount_str.starts_with('+') {
        return Err(MoneyError::InvalidFormat("explicit sign not allowed".into()));
    }

    if let Some((whole, frac)) = amount_str.split_once('.') {
        // Require both sides of the dot to be non-empty.
        // This prevents ambiguous formats like ".5" or "5."
        if whole.is_empty() {
            return Err(MoneyError::InvalidFormat(
                "missing leading zero (e.g., use 0.5 instead of .5)".into(),
            ));
        }
        if frac.is_empty() {
            return Err(MoneyError::InvalidFormat(
                "missing fractional part (e.g., use 5.0 instead of 5.)".into(),
            ));
        }
    }

    let value =
        Decimal::from_str(amount_str).map_err(|e| MoneyError::InvalidFormat(e.to_string()))?;

    if value <= Decimal::ZERO {
        return Err(MoneyError::NotPositive);
    }

    Ok(value)
}

/// Format a money value for display with exactly 2 decimal places.
///
/// Display-only: the underlying `Decimal` keeps full precision.
pub fn format_money(value: Decimal) -> String {
    let rounded =
        value.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
