//! Service layer
//!
//! Services sit on top of the domain and transfer types. Each one
//! focuses on a specific use case.

mod codec;

pub use codec::{AccountCodec, AccountsDocument};
