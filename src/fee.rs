//! Fee/Tax Calculator
//!
//! Pure projection of `(category, amount)` into a fee quote. This is the ONLY
//! place fee math lives; every step that displays a quote calls in here and
//! never recomputes inline.
//!
//! Fees are flat currency amounts per category; the tax is a flat 18% levy on
//! the fee only (never on the transferred amount). All math is exact `Decimal`
//! arithmetic with no intermediate rounding, so the displayed total can never
//! diverge from the submitted charge.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::wizard::draft::TransferCategory;

/// Flat fee for a category, in currency units.
///
/// International: 15.00, DomesticBank: 2.50, everything else: 0.00.
pub fn fee_for(category: TransferCategory) -> Decimal {
    match category {
        TransferCategory::International => Decimal::new(1500, 2),
        TransferCategory::DomesticBank => Decimal::new(250, 2),
        TransferCategory::Internal
        | TransferCategory::InstantId
        | TransferCategory::Scheduled => Decimal::ZERO,
    }
}

/// Tax levy rate applied to the fee (18%)
pub fn tax_rate() -> Decimal {
    Decimal::new(18, 2)
}

/// Derived fee quote. Never stored: a pure projection of the draft,
/// recomputed on every category/amount change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub amount: Decimal,
    pub fee: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Compute a quote for the given category and amount.
///
/// Returns `None` unless `amount > 0`; a quote is only shown/used once the
/// amount is a valid positive number.
pub fn quote(category: TransferCategory, amount: Decimal) -> Option<FeeQuote> {
    if amount <= Decimal::ZERO {
        return None;
    }

    let fee = fee_for(category);
    let tax = fee * tax_rate();
    Some(FeeQuote {
        amount,
        fee,
        tax,
        total: amount + fee + tax,
    })
}

/// Convenience: quote from a raw amount string (as typed in step 3).
///
/// Unparseable input means "no quote", same as a non-positive amount.
pub fn quote_str(category: TransferCategory, amount_str: &str) -> Option<FeeQuote> {
    let amount = crate::money::parse_amount(amount_str).ok()?;
    quote(category, amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_fee_table() {
        assert_eq!(fee_for(TransferCategory::International), dec("15.00"));
        assert_eq!(fee_for(TransferCategory::DomesticBank), dec("2.50"));
        assert_eq!(fee_for(TransferCategory::Internal), Decimal::ZERO);
        assert_eq!(fee_for(TransferCategory::InstantId), Decimal::ZERO);
        assert_eq!(fee_for(TransferCategory::Scheduled), Decimal::ZERO);
    }

    #[test]
    fn test_scenario_domestic_bank() {
        // category=domestic-bank, amount=100.00 -> fee=2.50, tax=0.45, total=102.95
        let q = quote(TransferCategory::DomesticBank, dec("100.00")).unwrap();
        assert_eq!(q.fee, dec("2.50"));
        assert_eq!(q.tax, dec("0.45"));
        assert_eq!(q.total, dec("102.95"));
    }

    #[test]
    fn test_scenario_instant_id() {
        // category=instant-id-based, amount=50.00 -> fee=0, tax=0, total=50.00
        let q = quote(TransferCategory::InstantId, dec("50.00")).unwrap();
        assert_eq!(q.fee, Decimal::ZERO);
        assert_eq!(q.tax, Decimal::ZERO);
        assert_eq!(q.total, dec("50.00"));
    }

    #[test]
    fn test_scenario_international() {
        // category=international, amount=200.00 -> fee=15.00, tax=2.70, total=217.70
        let q = quote(TransferCategory::International, dec("200.00")).unwrap();
        assert_eq!(q.fee, dec("15.00"));
        assert_eq!(q.tax, dec("2.70"));
        assert_eq!(q.total, dec("217.70"));
    }

    #[test]
    fn test_total_identity_all_categories() {
        // total(c, a) = a + fee(c) + fee(c) * 0.18, exactly
        let amounts = ["0.01", "1", "100.00", "12345.67", "0.333"];
        let categories = [
            TransferCategory::Internal,
            TransferCategory::DomesticBank,
            TransferCategory::InstantId,
            TransferCategory::International,
            TransferCategory::Scheduled,
        ];

        for c in categories {
            for a in amounts {
                let amount = dec(a);
                let q = quote(c, amount).unwrap();
                assert_eq!(q.total, amount + fee_for(c) + fee_for(c) * dec("0.18"));
            }
        }
    }

    #[test]
    fn test_no_quote_for_non_positive() {
        assert!(quote(TransferCategory::Internal, Decimal::ZERO).is_none());
        assert!(quote(TransferCategory::International, dec("-1")).is_none());
    }

    #[test]
    fn test_quote_str_invalid_means_no_quote() {
        assert!(quote_str(TransferCategory::DomesticBank, "abc").is_none());
        assert!(quote_str(TransferCategory::DomesticBank, "").is_none());
        assert!(quote_str(TransferCategory::DomesticBank, "0").is_none());
        assert!(quote_str(TransferCategory::DomesticBank, "100.00").is_some());
    }

    #[test]
    fn test_full_precision_retained() {
        // Odd precision input must flow through without rounding
        let q = quote(TransferCategory::DomesticBank, dec("0.333")).unwrap();
        assert_eq!(q.total, dec("0.333") + dec("2.50") + dec("0.45"));
    }
}
