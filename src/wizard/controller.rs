//! Step Controller
//!
//! The state machine owning wizard navigation and the draft's lifecycle.
//! All transitions are synchronous and side-effect-free; the only suspension
//! point in the whole workflow is the Submission Executor's service call.
//!
//! Contract violations (advancing out of Terminal, edit-jumping outside
//! Review) are caller defects and fail loudly instead of being absorbed.

use tracing::{debug, info};

use super::draft::{DraftPatch, TransferCategory, TransferDraft};
use super::error::{ServiceErrorKind, WizardError};
use super::state::WizardStep;
use super::submit::SubmissionResult;
use super::validator;
use crate::fee::{self, FeeQuote};

/// Drives the user through
/// `SelectType -> SelectBeneficiary -> EnterDetails -> Review -> Authorize ->
/// Terminal` and holds the draft for one wizard session.
#[derive(Debug)]
pub struct StepController {
    step: WizardStep,
    draft: TransferDraft,
    outcome: Option<SubmissionResult>,
}

impl StepController {
    /// Fresh wizard session on the first step with an empty draft
    pub fn new() -> Self {
        Self {
            step: WizardStep::SelectType,
            draft: TransferDraft::default(),
            outcome: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &TransferDraft {
        &self.draft
    }

    /// Terminal outcome, once the session finished
    pub fn outcome(&self) -> Option<&SubmissionResult> {
        self.outcome.as_ref()
    }

    /// Replace the draft wholesale with `draft.apply(patch)`
    pub fn apply(&mut self, patch: DraftPatch) {
        assert!(
            !self.step.is_terminal(),
            "draft patched after the wizard terminated"
        );
        self.draft = self.draft.apply(patch);
    }

    /// Step-1 action: choose the transfer category.
    ///
    /// Also drops any previously chosen beneficiary - a stale payee from a
    /// different category must not survive.
    pub fn select_category(&mut self, category: TransferCategory) {
        debug!(category = %category, "Category selected");
        self.apply(DraftPatch::select_category(category));
    }

    /// Move to the next step if the current step's validator admits the
    /// draft; otherwise a no-op reporting the blocking fields.
    ///
    /// # Panics
    /// On Terminal (absorbing) and on Authorize - authorization completes
    /// through the `SubmissionExecutor`, never through plain navigation.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        assert!(!self.step.is_terminal(), "advance() called on terminal wizard");
        assert_ne!(
            self.step,
            WizardStep::Authorize,
            "the Authorize step completes through SubmissionExecutor::submit"
        );

        match validator::check(self.step, &self.draft) {
            Ok(()) => {
                let from = self.step;
                self.step = from.next().expect("non-terminal step has a successor");
                debug!(from = %from, to = %self.step, "Wizard advanced");
                Ok(self.step)
            }
            Err(fields) => {
                debug!(step = %self.step, ?fields, "Advance blocked");
                Err(WizardError::StepIncomplete {
                    step: self.step,
                    fields,
                })
            }
        }
    }

    /// Move to the previous step unconditionally. Back navigation never
    /// loses already-entered data; the draft is untouched. No-op on the
    /// first step.
    ///
    /// # Panics
    /// On Terminal (absorbing).
    pub fn retreat(&mut self) -> WizardStep {
        assert!(!self.step.is_terminal(), "retreat() called on terminal wizard");

        if let Some(prev) = self.step.prev() {
            debug!(from = %self.step, to = %prev, "Wizard retreated");
            self.step = prev;
        }
        self.step
    }

    /// From Review only: jump straight to one of steps 1-3 for editing,
    /// bypassing intermediate validators (those steps were already satisfied
    /// to reach Review). Forward traversal afterwards re-validates through
    /// `advance()`.
    ///
    /// # Panics
    /// When not on Review, or when `target` is not an editable step.
    pub fn edit_jump_to(&mut self, target: WizardStep) -> WizardStep {
        assert_eq!(
            self.step,
            WizardStep::Review,
            "edit_jump_to() is only valid from the Review step"
        );
        assert!(
            matches!(
                target,
                WizardStep::SelectType | WizardStep::SelectBeneficiary | WizardStep::EnterDetails
            ),
            "edit_jump_to() target must be one of steps 1-3, got {target}"
        );

        debug!(to = %target, "Edit jump from review");
        self.step = target;
        self.step
    }

    /// Clear the session: fresh empty draft (a new object, no aliasing with
    /// the prior session's data), back to the first step, outcome dropped.
    pub fn reset(&mut self) {
        debug!("Wizard reset");
        self.step = WizardStep::SelectType;
        self.draft = TransferDraft::default();
        self.outcome = None;
    }

    /// Current fee quote, recomputed from the draft on every call.
    ///
    /// `None` until both a category and a positive amount are present.
    pub fn fee_quote(&self) -> Option<FeeQuote> {
        let category = self.draft.category?;
        fee::quote(category, self.draft.amount?)
    }

    /// Record the explicit user abandon after failed submissions.
    ///
    /// Spec'd behavior: a failed submission does NOT terminate the session
    /// (the machine stays on Authorize for a retry); only the shell, on the
    /// user's behalf, closes it out as a failure.
    pub fn abandon_with_failure(&mut self, kind: ServiceErrorKind, message: impl Into<String>) {
        assert_eq!(
            self.step,
            WizardStep::Authorize,
            "failure terminal is only reachable from the Authorize step"
        );

        let message = message.into();
        info!(kind = %kind, "Wizard abandoned after submission failure");
        self.outcome = Some(SubmissionResult::Failure { kind, message });
        self.step = WizardStep::Terminal;
    }

    /// Executor-only: record the success outcome and terminate.
    pub(crate) fn finish_success(&mut self, result: SubmissionResult) {
        debug_assert!(result.is_success());
        assert_eq!(self.step, WizardStep::Authorize);
        self.outcome = Some(result);
        self.step = WizardStep::Terminal;
    }

    /// Executor-only: wipe the secret after a submission attempt.
    pub(crate) fn clear_secret(&mut self) {
        self.draft = self.draft.apply(DraftPatch::wipe_secret());
    }
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beneficiary::{Beneficiary, RoutingId};
    use rust_decimal::Decimal;

    fn beneficiary() -> Beneficiary {
        Beneficiary {
            id: "ben-1".into(),
            display_name: "Alice".into(),
            nickname: None,
            routing: RoutingId::AccountNumber("1234567890".into()),
            bank_label: None,
            favorite: true,
        }
    }

    fn details_patch() -> DraftPatch {
        DraftPatch {
            source_account_id: Some("acc-1".into()),
            amount: Some(Decimal::new(10000, 2)),
            ..Default::default()
        }
    }

    /// Drive a fresh controller up to the Review step
    fn controller_at_review() -> StepController {
        let mut c = StepController::new();
        c.select_category(TransferCategory::DomesticBank);
        c.advance().unwrap();
        c.apply(DraftPatch::select_beneficiary(beneficiary()));
        c.advance().unwrap();
        c.apply(details_patch());
        c.advance().unwrap();
        assert_eq!(c.step(), WizardStep::Review);
        c
    }

    #[test]
    fn test_advance_blocked_on_empty_draft() {
        let mut c = StepController::new();
        let err = c.advance().unwrap_err();

        // No-op: step and draft unchanged, blocking field reported
        assert_eq!(c.step(), WizardStep::SelectType);
        assert_eq!(*c.draft(), TransferDraft::default());
        match err {
            WizardError::StepIncomplete { step, fields } => {
                assert_eq!(step, WizardStep::SelectType);
                assert_eq!(fields, vec![crate::wizard::validator::DraftField::Category]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_happy_path_to_authorize() {
        let mut c = controller_at_review();
        assert_eq!(c.advance().unwrap(), WizardStep::Authorize);
    }

    #[test]
    fn test_retreat_then_advance_keeps_data() {
        let mut c = controller_at_review();

        c.retreat();
        assert_eq!(c.step(), WizardStep::EnterDetails);
        c.retreat();
        assert_eq!(c.step(), WizardStep::SelectBeneficiary);

        // Nothing was lost; the unmodified path re-validates cleanly
        assert!(c.draft().beneficiary.is_some());
        assert_eq!(c.advance().unwrap(), WizardStep::EnterDetails);
        assert_eq!(c.advance().unwrap(), WizardStep::Review);
        assert_eq!(c.draft().amount, Some(Decimal::new(10000, 2)));
    }

    #[test]
    fn test_retreat_noop_on_first_step() {
        let mut c = StepController::new();
        assert_eq!(c.retreat(), WizardStep::SelectType);
    }

    #[test]
    fn test_edit_jump_and_forward_revalidation() {
        let mut c = controller_at_review();
        c.edit_jump_to(WizardStep::SelectType);

        // Switching category drops the beneficiary, so the forward pass
        // re-blocks at step 2 until a new payee is chosen.
        c.select_category(TransferCategory::InstantId);
        assert_eq!(c.advance().unwrap(), WizardStep::SelectBeneficiary);
        assert!(c.advance().is_err());

        c.apply(DraftPatch::select_beneficiary(Beneficiary {
            routing: RoutingId::InstantPaymentId("alice@pay".into()),
            ..beneficiary()
        }));
        assert_eq!(c.advance().unwrap(), WizardStep::EnterDetails);
        // Details survived the edit detour
        assert_eq!(c.advance().unwrap(), WizardStep::Review);
    }

    #[test]
    #[should_panic(expected = "only valid from the Review step")]
    fn test_edit_jump_outside_review_panics() {
        let mut c = StepController::new();
        c.edit_jump_to(WizardStep::SelectType);
    }

    #[test]
    #[should_panic(expected = "steps 1-3")]
    fn test_edit_jump_to_authorize_panics() {
        let mut c = controller_at_review();
        c.edit_jump_to(WizardStep::Authorize);
    }

    #[test]
    fn test_reset_yields_fresh_draft() {
        let mut c = controller_at_review();
        c.reset();

        assert_eq!(c.step(), WizardStep::SelectType);
        assert_eq!(*c.draft(), TransferDraft::default());
        assert!(c.outcome().is_none());
    }

    #[test]
    fn test_fee_quote_follows_draft() {
        let mut c = StepController::new();
        assert!(c.fee_quote().is_none());

        c.select_category(TransferCategory::DomesticBank);
        assert!(c.fee_quote().is_none()); // no amount yet

        c.apply(DraftPatch {
            amount: Some(Decimal::new(10000, 2)),
            ..Default::default()
        });
        let q = c.fee_quote().unwrap();
        assert_eq!(q.total, Decimal::new(10295, 2));

        // Category change reprices immediately
        c.select_category(TransferCategory::Internal);
        let q = c.fee_quote().unwrap();
        assert_eq!(q.total, Decimal::new(10000, 2));
    }

    #[test]
    fn test_abandon_with_failure_terminates() {
        let mut c = controller_at_review();
        c.advance().unwrap();

        c.abandon_with_failure(ServiceErrorKind::InsufficientFunds, "balance too low");
        assert_eq!(c.step(), WizardStep::Terminal);
        assert!(matches!(
            c.outcome(),
            Some(SubmissionResult::Failure { kind, .. })
                if *kind == ServiceErrorKind::InsufficientFunds
        ));
    }

    #[test]
    #[should_panic(expected = "terminal wizard")]
    fn test_advance_from_terminal_panics() {
        let mut c = controller_at_review();
        c.advance().unwrap();
        c.abandon_with_failure(ServiceErrorKind::Rejected, "gave up");
        let _ = c.advance();
    }

    #[test]
    #[should_panic(expected = "terminal wizard")]
    fn test_retreat_from_terminal_panics() {
        let mut c = controller_at_review();
        c.advance().unwrap();
        c.abandon_with_failure(ServiceErrorKind::Rejected, "gave up");
        let _ = c.retreat();
    }

    #[test]
    #[should_panic(expected = "SubmissionExecutor")]
    fn test_advance_from_authorize_panics() {
        let mut c = controller_at_review();
        c.advance().unwrap();
        let _ = c.advance();
    }
}
