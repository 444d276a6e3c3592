//! Authorization Gate
//!
//! Verifies the short secret (PIN) format before submission is possible.
//! The secret lives in the draft only between arming and the submission
//! attempt; the executor clears it afterwards regardless of outcome.

use std::fmt;

use crate::wizard::controller::StepController;
use crate::wizard::draft::DraftPatch;
use crate::wizard::error::WizardError;
use crate::wizard::state::WizardStep;

/// Required secret length (digits)
pub const SECRET_LEN: usize = 4;

/// A validated 4-digit authorization secret.
///
/// Construction only through [`Secret::parse`]. `Debug`/`Display` are
/// redacted so a draft can be logged without leaking the PIN, and the type
/// deliberately has no serde support.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Parse a raw user entry. Accepts exactly 4 ASCII digits.
    pub fn parse(raw: &str) -> Result<Self, WizardError> {
        if raw.len() != SECRET_LEN || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(WizardError::SecretFormat);
        }
        Ok(Self(raw.to_string()))
    }

    /// The underlying digits, needed only to build the service call.
    ///
    /// Never log or persist the returned value.
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(****)")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "****")
    }
}

/// Gate guarding the submission step
pub struct AuthorizationGate;

impl AuthorizationGate {
    /// Validate the raw secret and arm it into the draft.
    ///
    /// Rejects (and leaves the draft untouched) unless exactly 4 digits are
    /// present. Must be called while the wizard is on the Authorize step.
    pub fn arm(controller: &mut StepController, raw: &str) -> Result<(), WizardError> {
        assert_eq!(
            controller.step(),
            WizardStep::Authorize,
            "authorization secret armed outside the Authorize step"
        );

        let secret = Secret::parse(raw)?;
        controller.apply(DraftPatch::arm_secret(secret));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_four_digits() {
        assert!(Secret::parse("0000").is_ok());
        assert!(Secret::parse("1234").is_ok());
        assert_eq!(Secret::parse("1234").unwrap().reveal(), "1234");
    }

    #[test]
    fn test_parse_rejects_bad_lengths() {
        assert_eq!(Secret::parse(""), Err(WizardError::SecretFormat));
        assert_eq!(Secret::parse("123"), Err(WizardError::SecretFormat));
        assert_eq!(Secret::parse("12345"), Err(WizardError::SecretFormat));
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert_eq!(Secret::parse("12a4"), Err(WizardError::SecretFormat));
        assert_eq!(Secret::parse("12 4"), Err(WizardError::SecretFormat));
        assert_eq!(Secret::parse("١٢٣٤"), Err(WizardError::SecretFormat));
    }

    #[test]
    fn test_debug_and_display_redacted() {
        let secret = Secret::parse("1234").unwrap();
        assert_eq!(format!("{:?}", secret), "Secret(****)");
        assert_eq!(secret.to_string(), "****");
    }
}
