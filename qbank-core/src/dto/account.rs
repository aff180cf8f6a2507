//! Account transfer object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Account;

/// Account as exposed to external consumers
///
/// Field names follow the camelCase JSON contract. Any field missing from
/// the input takes its default (0, empty string, zero balance).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountDto {
    pub id: i32,
    pub account_number: String,
    pub account_holder: String,
    /// Written as an exact JSON number, never through f64
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

// Mapping destructures both sides so that a new field on either struct
// stops compiling here until the contract is updated.

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        let Account {
            id,
            account_number,
            account_holder,
            balance,
        } = account;

        Self {
            id,
            account_number,
            account_holder,
            balance,
        }
    }
}

impl From<&Account> for AccountDto {
    fn from(account: &Account) -> Self {
        Self::from(account.clone())
    }
}

impl From<AccountDto> for Account {
    fn from(dto: AccountDto) -> Self {
        let AccountDto {
            id,
            account_number,
            account_holder,
            balance,
        } = dto;

        Self {
            id,
            account_number,
            account_holder,
            balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Account {
        Account::new(1, "1000123456", "Jane Doe", Decimal::new(25075, 2))
    }

    #[test]
    fn test_entity_to_dto_copies_every_field() {
        let dto = AccountDto::from(&jane());

        assert_eq!(dto.id, 1);
        assert_eq!(dto.account_number, "1000123456");
        assert_eq!(dto.account_holder, "Jane Doe");
        assert_eq!(dto.balance, Decimal::new(25075, 2));
    }

    #[test]
    fn test_dto_to_entity_and_back() {
        let account = jane();
        let back: Account = AccountDto::from(account.clone()).into();
        assert_eq!(back, account);
    }

    #[test]
    fn test_default_dto_matches_default_entity() {
        assert_eq!(AccountDto::from(Account::default()), AccountDto::default());
    }

    #[test]
    fn test_serializes_camel_case_with_numeric_balance() {
        let json = serde_json::to_string(&AccountDto::from(jane())).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"accountNumber":"1000123456","accountHolder":"Jane Doe","balance":250.75}"#
        );
    }

    #[test]
    fn test_zero_balance_serializes_as_number() {
        let json = serde_json::to_string(&AccountDto::default()).unwrap();
        assert_eq!(
            json,
            r#"{"id":0,"accountNumber":"","accountHolder":"","balance":0}"#
        );
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let dto: AccountDto = serde_json::from_str("{}").unwrap();
        assert_eq!(dto, AccountDto::default());

        let dto: AccountDto = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert_eq!(dto.id, 9);
        assert_eq!(dto.account_holder, "");
        assert_eq!(dto.balance, Decimal::ZERO);
    }

    #[test]
    fn test_balance_is_exact() {
        // 0.1 + 0.2 style values must not pick up binary float noise
        let dto: AccountDto =
            serde_json::from_str(r#"{"balance": 12345678901234567.89}"#).unwrap();
        assert_eq!(dto.balance.to_string(), "12345678901234567.89");

        let dto: AccountDto = serde_json::from_str(r#"{"balance": 0.1}"#).unwrap();
        assert_eq!(dto.balance + Decimal::new(2, 1), Decimal::new(3, 1));
    }

    #[test]
    fn test_balance_accepts_string() {
        let dto: AccountDto = serde_json::from_str(r#"{"balance": "99.95"}"#).unwrap();
        assert_eq!(dto.balance, Decimal::new(9995, 2));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let dto: AccountDto =
            serde_json::from_str(r#"{"id": 3, "branch": "north", "accountHolder": "Ann"}"#)
                .unwrap();
        assert_eq!(dto.id, 3);
        assert_eq!(dto.account_holder, "Ann");
    }
}
