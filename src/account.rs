//! Source Account Model
//!
//! The wizard only reads accounts: the listing populates the source-account
//! selector in step 3. Balances and account lifecycle live behind the
//! external service.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::wizard::error::ServiceError;

/// Account type as reported by the listing service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Checking,
    Savings,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::Savings => "Savings",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One of the caller's debitable accounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub account_type: AccountType,
    /// Last digits of the account number, for display only
    pub number_suffix: String,
    pub balance: Decimal,
}

impl Account {
    /// Selector label, e.g. "Checking ••4821"
    pub fn display_label(&self) -> String {
        format!("{} \u{2022}\u{2022}{}", self.account_type, self.number_suffix)
    }
}

/// External account listing service.
///
/// The listing must be re-fetched every time the wizard is entered; cached
/// balances from a previous session are not trustworthy.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    async fn list_accounts(&self) -> Result<Vec<Account>, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label() {
        let account = Account {
            id: "acc-1".into(),
            account_type: AccountType::Checking,
            number_suffix: "4821".into(),
            balance: Decimal::new(125000, 2),
        };
        assert_eq!(account.display_label(), "Checking ••4821");
    }

    #[test]
    fn test_account_type_serde() {
        assert_eq!(
            serde_json::to_string(&AccountType::Savings).unwrap(),
            "\"savings\""
        );
    }
}
