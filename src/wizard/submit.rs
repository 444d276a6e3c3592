//! Submission Executor
//!
//! The one-shot external transfer call: the single point of external mutation
//! and the only asynchronous operation in the workflow.
//!
//! # Safety Invariants
//!
//! 1. **At-most-once per authorization attempt**: an in-flight guard is
//!    checked before dispatch and cleared only after the call resolves,
//!    including on error. A double click or a slow network can never move
//!    money twice.
//! 2. **Secret hygiene**: the authorization secret is wiped from the draft
//!    after every attempt, success or failure.
//! 3. **Failure is not terminal**: the machine stays on Authorize so the
//!    user may retry; only success (or an explicit abandon) terminates.
//! 4. **No automatic retry, no client-side timeout** beyond what the service
//!    itself enforces.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::controller::StepController;
use super::error::{ServiceError, ServiceErrorKind, WizardError};
use super::state::WizardStep;
use crate::authorize::Secret;

/// Description used when the user left the field empty
pub const DEFAULT_DESCRIPTION: &str = "Transfer via Wizard";

/// The request dispatched to the external transfer service.
///
/// Amounts keep full precision up to this point; this payload IS the
/// submitted charge, so nothing here is rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferOrder {
    /// Beneficiary's account number or instant-payment id
    pub destination_identifier: String,
    pub amount: Decimal,
    pub description: String,
    pub source_account_id: String,
}

/// Acknowledgement from the transfer execution service.
///
/// The service's transaction id, when present, is authoritative; the client
/// only fabricates a reference if the contract omitted one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionAck {
    pub transaction_id: Option<String>,
}

/// External transfer execution service.
///
/// The implementation performs the actual money movement; everything before
/// this call is local and side-effect free.
#[async_trait]
pub trait TransferService: Send + Sync {
    async fn execute(
        &self,
        order: &TransferOrder,
        secret: &Secret,
    ) -> Result<ExecutionAck, ServiceError>;
}

/// Client-visible transaction reference shown on the receipt
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionRef(String);

impl TransactionRef {
    /// Wrap a server-issued id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fabricate a placeholder reference when the service ack omits one
    pub fn generate() -> Self {
        Self(ulid::Ulid::new().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Terminal value of one wizard session. At most one non-cancelled result is
/// produced per draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionResult {
    Success {
        transaction_id: TransactionRef,
        timestamp_ms: i64,
    },
    Failure {
        kind: ServiceErrorKind,
        message: String,
    },
}

impl SubmissionResult {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success { .. })
    }

    pub fn transaction_id(&self) -> Option<&TransactionRef> {
        match self {
            SubmissionResult::Success { transaction_id, .. } => Some(transaction_id),
            SubmissionResult::Failure { .. } => None,
        }
    }
}

/// Performs the one-shot transfer call and maps the outcome onto the wizard.
pub struct SubmissionExecutor {
    service: Arc<dyn TransferService>,
    in_flight: AtomicBool,
    default_description: String,
}

impl SubmissionExecutor {
    pub fn new(service: Arc<dyn TransferService>) -> Self {
        Self::with_default_description(service, DEFAULT_DESCRIPTION)
    }

    /// Override the fallback description (e.g. from `AppConfig`)
    pub fn with_default_description(
        service: Arc<dyn TransferService>,
        default_description: impl Into<String>,
    ) -> Self {
        Self {
            service,
            in_flight: AtomicBool::new(false),
            default_description: default_description.into(),
        }
    }

    /// Whether a submission is currently pending
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Submit the authorized draft, exactly once.
    ///
    /// # Errors
    /// - `SecretFormat` when no armed secret is present (the gate rejected,
    ///   or arming was skipped) - nothing is dispatched.
    /// - `SubmissionInFlight` when a prior dispatch has not resolved yet -
    ///   nothing is dispatched.
    ///
    /// Remote failures are NOT errors of this method: they come back as
    /// `Ok(SubmissionResult::Failure { .. })` with the controller still on
    /// Authorize and the draft (minus the wiped secret) intact.
    ///
    /// # Panics
    /// When called off the Authorize step or with an incomplete draft -
    /// those are violations of the Step Controller's contract.
    pub async fn submit(
        &self,
        controller: &mut StepController,
    ) -> Result<SubmissionResult, WizardError> {
        assert_eq!(
            controller.step(),
            WizardStep::Authorize,
            "submit() called off the Authorize step"
        );
        let draft = controller.draft();
        assert!(
            draft.is_complete(),
            "submit() called with an incomplete draft"
        );

        let Some(secret) = draft.authorization_secret.clone() else {
            return Err(WizardError::SecretFormat);
        };

        // At-most-once guard: reject re-entry while a dispatch is pending.
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("Submission ignored: one is already in flight");
            return Err(WizardError::SubmissionInFlight);
        }

        let order = self.build_order(controller);
        info!(
            destination = %order.destination_identifier,
            amount = %order.amount,
            source = %order.source_account_id,
            "Dispatching transfer"
        );

        let outcome = self.service.execute(&order, &secret).await;

        // Wipe the secret and release the guard no matter what came back.
        controller.clear_secret();
        self.in_flight.store(false, Ordering::SeqCst);

        match outcome {
            Ok(ack) => {
                // Server id is authoritative; fabricate only if absent.
                let transaction_id = ack
                    .transaction_id
                    .map(TransactionRef::new)
                    .unwrap_or_else(TransactionRef::generate);

                let result = SubmissionResult::Success {
                    transaction_id: transaction_id.clone(),
                    timestamp_ms: Utc::now().timestamp_millis(),
                };
                controller.finish_success(result.clone());
                info!(transaction_id = %transaction_id, "Transfer committed");
                Ok(result)
            }
            Err(e) => {
                // Business rejection and transport failure alike: surface the
                // message and return control to Authorize for another attempt.
                warn!(kind = %e.kind, error = %e.message, "Transfer failed");
                Ok(SubmissionResult::Failure {
                    kind: e.kind,
                    message: e.message,
                })
            }
        }
    }

    fn build_order(&self, controller: &StepController) -> TransferOrder {
        let draft = controller.draft();
        let beneficiary = draft.beneficiary.as_ref().expect("draft is complete");

        let description = draft
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(&self.default_description)
            .to_string();

        TransferOrder {
            destination_identifier: beneficiary.routing.destination().to_string(),
            amount: draft.amount.expect("draft is complete"),
            description,
            source_account_id: draft
                .source_account_id
                .clone()
                .expect("draft is complete"),
        }
    }

    /// Test-only: force the in-flight flag to exercise the guard.
    #[cfg(test)]
    pub(crate) fn force_in_flight(&self, value: bool) {
        self.in_flight.store(value, Ordering::SeqCst);
    }
}
