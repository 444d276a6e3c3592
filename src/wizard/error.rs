//! Wizard Error Types
//!
//! Local (validation/format) errors and the remote service error shape.
//! Error codes follow the SCREAMING_SNAKE convention for API responses.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::state::WizardStep;
use super::validator::DraftField;
use crate::money::MoneyError;

/// Wizard error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WizardError {
    // === Step admission ===
    #[error("Step {step} is incomplete (blocking fields: {fields:?})")]
    StepIncomplete {
        step: WizardStep,
        fields: Vec<DraftField>,
    },

    // === Authorization format ===
    #[error("Authorization secret must be exactly 4 digits")]
    SecretFormat,

    // === Submission guard ===
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    // === Inline beneficiary creation ===
    #[error("Beneficiary display name is required")]
    BeneficiaryNameRequired,

    #[error("Routing identifier is required")]
    RoutingRequired,

    #[error("Routing identifier does not fit category '{0}'")]
    RoutingMismatch(crate::wizard::draft::TransferCategory),

    #[error("Bank routing code is required for domestic bank transfers")]
    BankCodeRequired,

    // === Amount parsing ===
    #[error("Amount error: {0}")]
    Money(#[from] MoneyError),

    // === Remote ===
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl WizardError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            WizardError::StepIncomplete { .. } => "STEP_INCOMPLETE",
            WizardError::SecretFormat => "SECRET_FORMAT",
            WizardError::SubmissionInFlight => "SUBMISSION_IN_FLIGHT",
            WizardError::BeneficiaryNameRequired => "BENEFICIARY_NAME_REQUIRED",
            WizardError::RoutingRequired => "ROUTING_REQUIRED",
            WizardError::RoutingMismatch(_) => "ROUTING_MISMATCH",
            WizardError::BankCodeRequired => "BANK_CODE_REQUIRED",
            WizardError::Money(_) => "INVALID_AMOUNT",
            WizardError::Service(_) => "SERVICE_ERROR",
        }
    }
}

/// Error kind reported by an external service.
///
/// Business rejections and transport failures are NOT distinguished in retry
/// policy - both return control to the Authorize step for another attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceErrorKind {
    InvalidSecret,
    InsufficientFunds,
    AccountFrozen,
    Rejected,
    Transport,
}

impl ServiceErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceErrorKind::InvalidSecret => "INVALID_SECRET",
            ServiceErrorKind::InsufficientFunds => "INSUFFICIENT_FUNDS",
            ServiceErrorKind::AccountFrozen => "ACCOUNT_FROZEN",
            ServiceErrorKind::Rejected => "REJECTED",
            ServiceErrorKind::Transport => "TRANSPORT",
        }
    }
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned by an external collaborator (directory or transfer service)
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct ServiceError {
    pub kind: ServiceErrorKind,
    pub message: String,
}

impl ServiceError {
    pub fn new(kind: ServiceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Transport-level failure (timeout, connection reset)
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::Transport, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(WizardError::SecretFormat.code(), "SECRET_FORMAT");
        assert_eq!(WizardError::SubmissionInFlight.code(), "SUBMISSION_IN_FLIGHT");
        assert_eq!(WizardError::BankCodeRequired.code(), "BANK_CODE_REQUIRED");
        assert_eq!(
            WizardError::Money(MoneyError::NotPositive).code(),
            "INVALID_AMOUNT"
        );
    }

    #[test]
    fn test_service_error_display() {
        let err = ServiceError::new(ServiceErrorKind::InsufficientFunds, "balance too low");
        assert_eq!(err.to_string(), "INSUFFICIENT_FUNDS: balance too low");
    }

    #[test]
    fn test_service_error_wraps_into_wizard_error() {
        let err: WizardError = ServiceError::transport("connection reset").into();
        assert_eq!(err.code(), "SERVICE_ERROR");
        assert_eq!(err.to_string(), "TRANSPORT: connection reset");
    }
}
