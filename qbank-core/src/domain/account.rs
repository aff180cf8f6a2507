//! Account domain model

use rust_decimal::Decimal;

/// A bank account as the rest of the system sees it.
///
/// All fields are public and accept any value. The id is assigned by
/// whoever owns the record; nothing here generates or checks it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    pub id: i32,
    pub account_number: String,
    pub account_holder: String,
    pub balance: Decimal,
}

impl Account {
    /// Create an account from its four fields
    pub fn new(
        id: i32,
        account_number: impl Into<String>,
        account_holder: impl Into<String>,
        balance: Decimal,
    ) -> Self {
        Self {
            id,
            account_number: account_number.into(),
            account_holder: account_holder.into(),
            balance,
        }
    }
}
