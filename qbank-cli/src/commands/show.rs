//! Show command - list accounts with a balance total

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;

use qbank_core::{Account, AccountDto};

use super::{get_codec, read_accounts};
use crate::output;

/// JSON shape for `qb show --json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowSummary {
    count: usize,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    total_balance: Decimal,
    accounts: Vec<AccountDto>,
}

impl ShowSummary {
    fn new(accounts: &[Account]) -> Result<Self> {
        let total_balance = accounts
            .iter()
            .try_fold(Decimal::ZERO, |total, a| total.checked_add(a.balance))
            .context("Total balance does not fit in a decimal")?;

        Ok(Self {
            count: accounts.len(),
            total_balance,
            accounts: accounts.iter().map(AccountDto::from).collect(),
        })
    }
}

pub fn run(file: Option<&Path>, json: bool) -> Result<()> {
    let codec = get_codec()?;
    let accounts = read_accounts(&codec, file)?;
    let summary = ShowSummary::new(&accounts)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if accounts.is_empty() {
        output::info("No accounts");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Id", "Account Number", "Account Holder", "Balance"]);
    for account in &accounts {
        table.add_row(vec![
            account.id.to_string(),
            account.account_number.clone(),
            account.account_holder.clone(),
            account.balance.to_string(),
        ]);
    }
    output::align_right(table.column_mut(0));
    output::align_right(table.column_mut(3));

    println!("{}", table);
    println!();
    println!(
        "{} {}  {} {}",
        "Accounts:".bold(),
        summary.count,
        "Total balance:".bold(),
        summary.total_balance
    );

    Ok(())
}
