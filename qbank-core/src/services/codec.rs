//! Codec service - JSON wire format for accounts
//!
//! Everything that leaves or enters the process goes through
//! [`AccountDto`]; entities are never serialized directly.
//! Logged fields are limited to counts and ids.

use std::io::Read;

use tracing::debug;

use crate::config::Config;
use crate::domain::result::Result;
use crate::domain::Account;
use crate::dto::AccountDto;

/// Top-level shape of an accounts JSON document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountsDocument {
    /// A bare account object
    Single(Account),
    /// An array of account objects
    List(Vec<Account>),
}

impl AccountsDocument {
    pub fn into_accounts(self) -> Vec<Account> {
        match self {
            Self::Single(account) => vec![account],
            Self::List(accounts) => accounts,
        }
    }
}

/// Codec service for encoding and decoding account JSON
#[derive(Debug, Clone, Copy)]
pub struct AccountCodec {
    pretty: bool,
}

impl Default for AccountCodec {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl AccountCodec {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.pretty_json)
    }

    /// Encode a single account
    pub fn encode(&self, account: &Account) -> Result<String> {
        debug!(id = account.id, "encoding account");
        self.to_json(&AccountDto::from(account))
    }

    /// Encode a list of accounts as a JSON array
    pub fn encode_many(&self, accounts: &[Account]) -> Result<String> {
        debug!(count = accounts.len(), "encoding accounts");
        let dtos: Vec<AccountDto> = accounts.iter().map(AccountDto::from).collect();
        self.to_json(&dtos)
    }

    /// Decode a single account object
    pub fn decode(&self, input: &str) -> Result<Account> {
        let dto: AccountDto = serde_json::from_str(input)?;
        debug!(id = dto.id, "decoded account");
        Ok(dto.into())
    }

    /// Decode either a JSON array of accounts or a single account object
    pub fn decode_many(&self, input: &str) -> Result<Vec<Account>> {
        Ok(self.decode_document(input)?.into_accounts())
    }

    /// Decode a document, remembering whether it was an array or an object
    pub fn decode_document(&self, input: &str) -> Result<AccountsDocument> {
        // Deserialize straight from the text. Going through Value or an
        // untagged enum loses integers wider than u64 under arbitrary precision.
        if input.trim_start().starts_with('[') {
            let dtos: Vec<AccountDto> = serde_json::from_str(input)?;
            debug!(count = dtos.len(), "decoded accounts");
            Ok(AccountsDocument::List(
                dtos.into_iter().map(Account::from).collect(),
            ))
        } else {
            self.decode(input).map(AccountsDocument::Single)
        }
    }

    /// Encode a document keeping its top-level shape
    pub fn encode_document(&self, document: &AccountsDocument) -> Result<String> {
        match document {
            AccountsDocument::Single(account) => self.encode(account),
            AccountsDocument::List(accounts) => self.encode_many(accounts),
        }
    }

    /// Read all of `reader` and decode it with [`Self::decode_document`]
    pub fn read_document(&self, mut reader: impl Read) -> Result<AccountsDocument> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        self.decode_document(&input)
    }

    /// Read all of `reader` as a flat list of accounts
    pub fn decode_reader(&self, reader: impl Read) -> Result<Vec<Account>> {
        Ok(self.read_document(reader)?.into_accounts())
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}
