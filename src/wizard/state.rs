//! Wizard Step Definitions
//!
//! Step IDs are numbered 1-6 for addressing from the UI shell.

use std::fmt;

/// Wizard steps
///
/// Terminal (6) is absorbing: only `StepController::reset` leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WizardStep {
    /// Step 1 - choose the transfer category
    SelectType = 1,

    /// Step 2 - pick or inline-create the beneficiary
    SelectBeneficiary = 2,

    /// Step 3 - source account, amount, description (fee quoted here)
    EnterDetails = 3,

    /// Step 4 - review; may jump back to edit steps 1-3
    Review = 4,

    /// Step 5 - enter the 4-digit secret and confirm
    Authorize = 5,

    /// Terminal - success or failure outcome recorded on the controller
    Terminal = 6,
}

impl WizardStep {
    /// Check if this is the terminal step (no more transitions possible)
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardStep::Terminal)
    }

    /// Get the numeric step ID (1-6)
    #[inline]
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Convert from a numeric step ID
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(WizardStep::SelectType),
            2 => Some(WizardStep::SelectBeneficiary),
            3 => Some(WizardStep::EnterDetails),
            4 => Some(WizardStep::Review),
            5 => Some(WizardStep::Authorize),
            6 => Some(WizardStep::Terminal),
            _ => None,
        }
    }

    /// The step after this one, if any
    pub fn next(&self) -> Option<Self> {
        Self::from_id(self.id() + 1)
    }

    /// The step before this one, if any
    pub fn prev(&self) -> Option<Self> {
        match self {
            WizardStep::SelectType => None,
            _ => Self::from_id(self.id() - 1),
        }
    }

    /// Get human-readable step name
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::SelectType => "SELECT_TYPE",
            WizardStep::SelectBeneficiary => "SELECT_BENEFICIARY",
            WizardStep::EnterDetails => "ENTER_DETAILS",
            WizardStep::Review => "REVIEW",
            WizardStep::Authorize => "AUTHORIZE",
            WizardStep::Terminal => "TERMINAL",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        WizardStep::from_id(value).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_step() {
        assert!(WizardStep::Terminal.is_terminal());

        assert!(!WizardStep::SelectType.is_terminal());
        assert!(!WizardStep::SelectBeneficiary.is_terminal());
        assert!(!WizardStep::EnterDetails.is_terminal());
        assert!(!WizardStep::Review.is_terminal());
        assert!(!WizardStep::Authorize.is_terminal());
    }

    #[test]
    fn test_step_id_roundtrip() {
        let steps = [
            WizardStep::SelectType,
            WizardStep::SelectBeneficiary,
            WizardStep::EnterDetails,
            WizardStep::Review,
            WizardStep::Authorize,
            WizardStep::Terminal,
        ];

        for step in steps {
            let id = step.id();
            assert_eq!(WizardStep::from_id(id), Some(step));
        }
    }

    #[test]
    fn test_invalid_step_id() {
        assert_eq!(WizardStep::from_id(0), None);
        assert_eq!(WizardStep::from_id(7), None);
    }

    #[test]
    fn test_next_prev() {
        assert_eq!(WizardStep::SelectType.next(), Some(WizardStep::SelectBeneficiary));
        assert_eq!(WizardStep::Authorize.next(), Some(WizardStep::Terminal));
        assert_eq!(WizardStep::Terminal.next(), None);

        assert_eq!(WizardStep::SelectType.prev(), None);
        assert_eq!(WizardStep::Review.prev(), Some(WizardStep::EnterDetails));
    }

    #[test]
    fn test_display() {
        assert_eq!(WizardStep::SelectType.to_string(), "SELECT_TYPE");
        assert_eq!(WizardStep::Review.to_string(), "REVIEW");
        assert_eq!(WizardStep::Terminal.to_string(), "TERMINAL");
    }
}
