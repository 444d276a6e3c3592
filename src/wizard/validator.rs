//! Step Validator
//!
//! Pure admission predicates over the draft, one per step. Independently
//! testable without rendering anything; the UI surfaces the blocking fields
//! as hints, never as exceptions.

use std::fmt;

use rust_decimal::Decimal;

use super::draft::TransferDraft;
use super::state::WizardStep;

/// Draft fields a step can be blocked on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Category,
    Beneficiary,
    SourceAccount,
    Amount,
    Secret,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Category => "category",
            DraftField::Beneficiary => "beneficiary",
            DraftField::SourceAccount => "source_account",
            DraftField::Amount => "amount",
            DraftField::Secret => "secret",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check whether `draft` satisfies `step`'s completion requirements.
///
/// Returns the blocking fields on rejection. The terminal step admits
/// nothing (the empty rejection).
pub fn check(step: WizardStep, draft: &TransferDraft) -> Result<(), Vec<DraftField>> {
    let mut blocking = Vec::new();

    match step {
        WizardStep::SelectType => {
            require_category(draft, &mut blocking);
        }
        WizardStep::SelectBeneficiary => {
            require_beneficiary(draft, &mut blocking);
        }
        WizardStep::EnterDetails => {
            require_details(draft, &mut blocking);
        }
        WizardStep::Review => {
            // Everything entered so far must still hold
            require_category(draft, &mut blocking);
            require_beneficiary(draft, &mut blocking);
            require_details(draft, &mut blocking);
        }
        WizardStep::Authorize => {
            require_category(draft, &mut blocking);
            require_beneficiary(draft, &mut blocking);
            require_details(draft, &mut blocking);
            if draft.authorization_secret.is_none() {
                blocking.push(DraftField::Secret);
            }
        }
        WizardStep::Terminal => return Err(blocking),
    }

    if blocking.is_empty() { Ok(()) } else { Err(blocking) }
}

/// `check` collapsed to a boolean, for UI enable/disable logic
#[inline]
pub fn can_advance(step: WizardStep, draft: &TransferDraft) -> bool {
    check(step, draft).is_ok()
}

fn require_category(draft: &TransferDraft, blocking: &mut Vec<DraftField>) {
    if draft.category.is_none() {
        blocking.push(DraftField::Category);
    }
}

fn require_beneficiary(draft: &TransferDraft, blocking: &mut Vec<DraftField>) {
    if draft.beneficiary.is_none() {
        blocking.push(DraftField::Beneficiary);
    }
}

fn require_details(draft: &TransferDraft, blocking: &mut Vec<DraftField>) {
    if draft.source_account_id.is_none() {
        blocking.push(DraftField::SourceAccount);
    }
    if !draft.amount.is_some_and(|a| a > Decimal::ZERO) {
        blocking.push(DraftField::Amount);
    }
}
