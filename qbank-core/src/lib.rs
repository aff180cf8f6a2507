//! QBank Core - account records for the QBank API
//!
//! The crate keeps the internal and external shapes of an account apart:
//!
//! - **domain**: Core business entities (Account) and error types
//! - **dto**: Transfer objects exposed at the system boundary, with mapping
//! - **services**: Wire codec built on the transfer objects
//! - **config**: settings.json handling

pub mod domain;
pub mod dto;
pub mod services;
pub mod config;

// Re-export commonly used types at crate root
pub use domain::Account;
pub use domain::result::{Error, Result};
pub use dto::AccountDto;
pub use services::{AccountCodec, AccountsDocument};
