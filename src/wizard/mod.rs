//! Guided Funds-Transfer Wizard
//!
//! The step state machine at the heart of the transfer workflow: it collects
//! a draft across steps, lets the user review and edit, gates submission
//! behind a 4-digit secret, and submits exactly once.
//!
//! # State Machine
//!
//! ```text
//! SELECT_TYPE → SELECT_BENEFICIARY → ENTER_DETAILS → REVIEW → AUTHORIZE → TERMINAL
//!                                                      │           ↑  │
//!                                                      └── edit ───┘  └── retry stays here on failure
//! ```
//!
//! # Safety Invariants
//!
//! 1. **Immutable draft**: replaced wholesale on every change, never mutated
//!    in place
//! 2. **At-most-once submission**: the executor's in-flight guard blocks
//!    re-entry while a dispatch is pending
//! 3. **Secret hygiene**: the authorization secret is wiped after every
//!    submission attempt, success or failure
//! 4. **Absorbing terminal**: only `reset()` leaves the terminal step

pub mod controller;
pub mod draft;
pub mod error;
pub mod state;
pub mod submit;
pub mod validator;


// Re-exports for convenience
pub use controller::StepController;
pub use draft::{DraftPatch, TransferCategory, TransferDraft};
pub use error::{ServiceError, ServiceErrorKind, WizardError};
pub use state::WizardStep;
pub use submit::{
    ExecutionAck, SubmissionExecutor, SubmissionResult, TransactionRef, TransferOrder,
    TransferService,
};
pub use validator::{DraftField, can_advance, check};
