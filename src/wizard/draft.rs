//! Transfer Draft
//!
//! The accumulated, immutable-per-step transfer request. The draft is owned
//! exclusively by the `StepController` for the lifetime of one wizard session
//! and is only ever replaced wholesale via `apply` - no component mutates
//! fields in place. This prevents stale-read bugs between steps.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::authorize::Secret;
use crate::beneficiary::Beneficiary;

/// Transfer category chosen in step 1
///
/// The category constrains which beneficiaries/fields are valid further in;
/// selecting one clears any previously chosen beneficiary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum TransferCategory {
    /// Transfer between the user's own accounts
    Internal = 1,
    /// Transfer to another domestic bank (needs a bank routing code)
    DomesticBank = 2,
    /// Instant transfer addressed by an instant-payment id
    #[serde(rename = "instant-id-based")]
    InstantId = 3,
    /// Cross-border transfer
    International = 4,
    /// Future-dated transfer
    Scheduled = 5,
}

impl TransferCategory {
    /// Get the numeric category ID
    #[inline]
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Convert from a numeric category ID
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(TransferCategory::Internal),
            2 => Some(TransferCategory::DomesticBank),
            3 => Some(TransferCategory::InstantId),
            4 => Some(TransferCategory::International),
            5 => Some(TransferCategory::Scheduled),
            _ => None,
        }
    }

    /// Wire/display name (matches the serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferCategory::Internal => "internal",
            TransferCategory::DomesticBank => "domestic-bank",
            TransferCategory::InstantId => "instant-id-based",
            TransferCategory::International => "international",
            TransferCategory::Scheduled => "scheduled",
        }
    }
}

impl fmt::Display for TransferCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The in-progress, not-yet-submitted transfer request.
///
/// Field completion follows the step order: `category` no later than step 1,
/// `beneficiary` step 2, `source_account_id` and a positive `amount` step 3.
/// The authorization secret is transient - populated only at the authorize
/// step, never serialized or logged, cleared after every submission attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferDraft {
    pub category: Option<TransferCategory>,
    pub beneficiary: Option<Beneficiary>,
    pub source_account_id: Option<String>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub save_as_template: bool,
    pub authorization_secret: Option<Secret>,
}

impl TransferDraft {
    /// True once category, beneficiary, source account and a positive amount
    /// are all present (the completeness the Submission Executor requires).
    pub fn is_complete(&self) -> bool {
        self.category.is_some()
            && self.beneficiary.is_some()
            && self.source_account_id.is_some()
            && self.amount.is_some_and(|a| a > Decimal::ZERO)
    }

    /// Merge a partial update into a new draft value.
    ///
    /// This is the ONLY mutation path for drafts; callers replace their copy
    /// with the returned value.
    #[must_use]
    pub fn apply(&self, patch: DraftPatch) -> TransferDraft {
        let mut next = self.clone();

        if let Some(category) = patch.category {
            next.category = Some(category);
        }
        if patch.clear_beneficiary {
            next.beneficiary = None;
        }
        if let Some(beneficiary) = patch.beneficiary {
            next.beneficiary = Some(beneficiary);
        }
        if let Some(source_account_id) = patch.source_account_id {
            next.source_account_id = Some(source_account_id);
        }
        if let Some(amount) = patch.amount {
            next.amount = Some(amount);
        }
        if let Some(description) = patch.description {
            next.description = Some(description);
        }
        if let Some(save_as_template) = patch.save_as_template {
            next.save_as_template = save_as_template;
        }
        if patch.clear_secret {
            next.authorization_secret = None;
        }
        if let Some(secret) = patch.secret {
            next.authorization_secret = Some(secret);
        }

        next
    }
}

/// Partial draft update merged via [`TransferDraft::apply`].
///
/// `None` fields are left untouched; the `clear_*` flags remove a value
/// (a clear flag combined with a new value applies the new value).
#[derive(Debug, Clone, Default)]
pub struct DraftPatch {
    pub category: Option<TransferCategory>,
    pub beneficiary: Option<Beneficiary>,
    pub source_account_id: Option<String>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub save_as_template: Option<bool>,
    pub secret: Option<Secret>,
    pub clear_beneficiary: bool,
    pub clear_secret: bool,
}

impl DraftPatch {
    /// Patch setting the category and dropping any stale beneficiary
    /// (a beneficiary from a different category must not survive).
    pub fn select_category(category: TransferCategory) -> Self {
        Self {
            category: Some(category),
            clear_beneficiary: true,
            ..Default::default()
        }
    }

    /// Patch selecting a beneficiary
    pub fn select_beneficiary(beneficiary: Beneficiary) -> Self {
        Self {
            beneficiary: Some(beneficiary),
            ..Default::default()
        }
    }

    /// Patch arming the authorization secret
    pub fn arm_secret(secret: Secret) -> Self {
        Self {
            secret: Some(secret),
            ..Default::default()
        }
    }

    /// Patch clearing the authorization secret
    pub fn wipe_secret() -> Self {
        Self {
            clear_secret: true,
            ..Default::default()
        }
    }
}
