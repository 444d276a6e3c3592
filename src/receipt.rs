//! Receipt Renderer
//!
//! Terminal confirmation built from a successful submission plus the
//! still-readable draft. Rendering must never fail: clipboard problems are
//! logged and swallowed.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::fee;
use crate::money::format_money;
use crate::wizard::draft::TransferDraft;
use crate::wizard::submit::{SubmissionResult, TransactionRef};

/// Side-effecting clipboard seam provided by the UI shell
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Confirmation of a completed transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub destination_name: String,
    pub destination_identifier: String,
    pub amount: Decimal,
    pub fee: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub transaction_id: TransactionRef,
    pub completed_at_ms: i64,
}

impl Receipt {
    /// Build the receipt from a successful submission.
    ///
    /// # Panics
    /// When handed a failure result or an incomplete draft - receipts only
    /// exist for committed transfers, so that is a caller defect.
    pub fn from_success(draft: &TransferDraft, result: &SubmissionResult) -> Self {
        let SubmissionResult::Success {
            transaction_id,
            timestamp_ms,
        } = result
        else {
            panic!("receipt built from a failed submission");
        };

        let beneficiary = draft
            .beneficiary
            .as_ref()
            .expect("submitted draft has a beneficiary");
        let category = draft.category.expect("submitted draft has a category");
        let amount = draft.amount.expect("submitted draft has an amount");
        let quote = fee::quote(category, amount).expect("submitted amount is positive");

        Self {
            destination_name: beneficiary.display_name.clone(),
            destination_identifier: beneficiary.routing.destination().to_string(),
            amount: quote.amount,
            fee: quote.fee,
            tax: quote.tax,
            total: quote.total,
            transaction_id: transaction_id.clone(),
            completed_at_ms: *timestamp_ms,
        }
    }

    /// Completion time as UTC
    pub fn completed_at(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.completed_at_ms)
            .single()
            .expect("submission timestamp is a valid instant")
    }

    /// Human-readable confirmation lines for the terminal screen
    pub fn render(&self) -> String {
        [
            "Transfer complete".to_string(),
            format!("To:          {} ({})", self.destination_name, self.destination_identifier),
            format!("Amount:      {}", format_money(self.amount)),
            format!("Fee:         {}", format_money(self.fee)),
            format!("Tax:         {}", format_money(self.tax)),
            format!("Total:       {}", format_money(self.total)),
            format!("Transaction: {}", self.transaction_id),
            format!("Completed:   {}", self.completed_at().to_rfc3339()),
        ]
        .join("\n")
    }

    /// Copy the transaction id to the clipboard. Idempotent and non-failing:
    /// the receipt display must never break because of a clipboard issue.
    pub fn copy_transaction_id(&self, clipboard: &dyn Clipboard) {
        if let Err(e) = clipboard.copy(self.transaction_id.as_str()) {
            warn!(error = %e, "Clipboard copy failed (ignored)");
        }
    }
}
