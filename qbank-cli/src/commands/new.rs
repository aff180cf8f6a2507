//! New command - build an account and print its transfer JSON

use anyhow::{Context, Result};
use qbank_core::dto::parse_balance;
use qbank_core::Account;

use super::get_codec;

pub fn run(id: i32, number: String, holder: String, balance: &str) -> Result<()> {
    let balance = parse_balance(balance)
        .with_context(|| format!("Invalid --balance value {:?}", balance))?;

    let account = Account::new(id, number, holder, balance);
    let codec = get_codec()?;

    println!("{}", codec.encode(&account)?);
    Ok(())
}
