//! transfer_wizard - Guided Funds-Transfer Workflow Core
//!
//! The client-side core of a banking transfer wizard: step navigation,
//! fee/tax quoting, review/edit, secret-gated authorization, one-shot
//! submission, and receipt rendering. The surrounding UI shell, routing and
//! persistence are out of scope; external collaborators sit behind traits.
//!
//! # Modules
//!
//! - [`wizard`] - step state machine, draft, validators, submission executor
//! - [`fee`] - the single source of fee/tax math
//! - [`money`] - strict amount parsing and display formatting
//! - [`beneficiary`] - payee model, directory seam, inline creation
//! - [`account`] - source-account model and listing seam
//! - [`authorize`] - 4-digit secret gate
//! - [`receipt`] - terminal confirmation rendering
//! - [`config`] / [`logging`] - deployment config and tracing setup

pub mod account;
pub mod authorize;
pub mod beneficiary;
pub mod config;
pub mod fee;
pub mod logging;
pub mod money;
pub mod receipt;
pub mod wizard;

// Convenient re-exports at crate root
pub use account::{Account, AccountDirectory, AccountType};
pub use authorize::{AuthorizationGate, Secret};
pub use beneficiary::{
    Beneficiary, BeneficiaryDirectory, BeneficiaryResolver, NewBeneficiary, RoutingId,
};
pub use fee::{FeeQuote, fee_for, quote};
pub use money::{MoneyError, format_money, parse_amount};
pub use receipt::{Clipboard, ClipboardError, Receipt};
pub use wizard::{
    DraftPatch, ExecutionAck, ServiceError, ServiceErrorKind, StepController, SubmissionExecutor,
    SubmissionResult, TransactionRef, TransferCategory, TransferDraft, TransferOrder,
    TransferService, WizardError, WizardStep,
};
