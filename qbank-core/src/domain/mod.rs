//! Core domain entities
//!
//! Entities here are plain data holders for internal use. They never go
//! over the wire directly; see [`crate::dto`] for the boundary shapes.

mod account;
pub mod result;

pub use account::Account;
