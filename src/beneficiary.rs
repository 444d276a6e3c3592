//! Beneficiary Model and Resolver
//!
//! Two selection paths: pick from the directory (filtered by case-insensitive
//! substring match) or inline creation. A newly created beneficiary is
//! immediately selected and the wizard advances - creation and selection are
//! not separable user actions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::wizard::controller::StepController;
use crate::wizard::draft::{DraftPatch, TransferCategory};
use crate::wizard::error::{ServiceError, WizardError};
use crate::wizard::state::WizardStep;

/// Routing identifier for a payee.
///
/// The inner value is what gets sent as the destination identifier on
/// submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingId {
    /// External account number
    AccountNumber(String),
    /// Instant-payment id (instant-id-based transfers)
    InstantPaymentId(String),
}

impl RoutingId {
    /// The destination identifier carried in the submission payload
    pub fn destination(&self) -> &str {
        match self {
            RoutingId::AccountNumber(n) => n,
            RoutingId::InstantPaymentId(id) => id,
        }
    }

    fn is_empty(&self) -> bool {
        self.destination().trim().is_empty()
    }
}

/// A payee record. Read-only within the wizard; created either ahead of time
/// in the external directory or inline during step 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beneficiary {
    pub id: String,
    pub display_name: String,
    pub nickname: Option<String>,
    pub routing: RoutingId,
    pub bank_label: Option<String>,
    pub favorite: bool,
}

/// Inline-creation payload for a new payee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBeneficiary {
    pub display_name: String,
    pub nickname: Option<String>,
    pub routing: RoutingId,
    /// Bank routing code, required for domestic-bank transfers
    pub bank_code: Option<String>,
    pub bank_label: Option<String>,
}

impl NewBeneficiary {
    /// Validate the payload against the transfer category.
    ///
    /// Minimum bar everywhere: a display name and a non-empty routing
    /// identifier whose shape fits the category. Domestic-bank additionally
    /// requires a bank routing code.
    pub fn validate_for(&self, category: TransferCategory) -> Result<(), WizardError> {
        if self.display_name.trim().is_empty() {
            return Err(WizardError::BeneficiaryNameRequired);
        }
        if self.routing.is_empty() {
            return Err(WizardError::RoutingRequired);
        }

        match category {
            TransferCategory::InstantId => {
                if !matches!(self.routing, RoutingId::InstantPaymentId(_)) {
                    return Err(WizardError::RoutingMismatch(category));
                }
            }
            TransferCategory::DomesticBank => {
                if !matches!(self.routing, RoutingId::AccountNumber(_)) {
                    return Err(WizardError::RoutingMismatch(category));
                }
                if !self
                    .bank_code
                    .as_deref()
                    .is_some_and(|c| !c.trim().is_empty())
                {
                    return Err(WizardError::BankCodeRequired);
                }
            }
            TransferCategory::Internal
            | TransferCategory::International
            | TransferCategory::Scheduled => {
                if !matches!(self.routing, RoutingId::AccountNumber(_)) {
                    return Err(WizardError::RoutingMismatch(category));
                }
            }
        }

        Ok(())
    }
}

/// External beneficiary directory service
#[async_trait]
pub trait BeneficiaryDirectory: Send + Sync {
    /// Search payees by name
    async fn search(&self, query: &str) -> Result<Vec<Beneficiary>, ServiceError>;

    /// Create a payee, returning the stored record (with server-assigned id)
    async fn create(&self, new: NewBeneficiary) -> Result<Beneficiary, ServiceError>;
}

/// Case-insensitive substring filter over display names and nicknames.
///
/// Pure; an empty query keeps everything.
pub fn filter_by_name(list: &[Beneficiary], query: &str) -> Vec<Beneficiary> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return list.to_vec();
    }

    list.iter()
        .filter(|b| {
            b.display_name.to_lowercase().contains(&needle)
                || b.nickname
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Selects or creates the payee for the wizard's second step
pub struct BeneficiaryResolver {
    directory: Arc<dyn BeneficiaryDirectory>,
}

impl BeneficiaryResolver {
    pub fn new(directory: Arc<dyn BeneficiaryDirectory>) -> Self {
        Self { directory }
    }

    /// Search the directory, then apply the local substring filter.
    pub async fn search(&self, query: &str) -> Result<Vec<Beneficiary>, ServiceError> {
        let results = self.directory.search(query).await?;
        Ok(filter_by_name(&results, query))
    }

    /// Select an existing payee and advance past the beneficiary step.
    pub fn select(
        &self,
        controller: &mut StepController,
        beneficiary: Beneficiary,
    ) -> Result<WizardStep, WizardError> {
        assert_eq!(
            controller.step(),
            WizardStep::SelectBeneficiary,
            "beneficiary selected outside the SelectBeneficiary step"
        );

        controller.apply(DraftPatch::select_beneficiary(beneficiary));
        controller.advance()
    }

    /// Inline-create a payee, select it, and advance - one user action.
    pub async fn create_and_select(
        &self,
        controller: &mut StepController,
        new: NewBeneficiary,
    ) -> Result<WizardStep, WizardError> {
        assert_eq!(
            controller.step(),
            WizardStep::SelectBeneficiary,
            "beneficiary created outside the SelectBeneficiary step"
        );

        let category = controller
            .draft()
            .category
            .expect("category is set before the beneficiary step");
        new.validate_for(category)?;

        let created = self.directory.create(new).await?;
        info!(beneficiary_id = %created.id, "Beneficiary created inline");

        self.select(controller, created)
    }
}
