//! CLI command implementations

pub mod fmt;
pub mod new;
pub mod show;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use qbank_core::config::Config;
use qbank_core::{Account, AccountCodec, AccountsDocument};

/// Get the qbank directory from environment or default
pub fn get_qbank_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("QBANK_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().context("Could not find home directory")?;
    Ok(home.join(".qbank"))
}

/// Load config and build a codec from it
pub fn get_codec() -> Result<AccountCodec> {
    let qbank_dir = get_qbank_dir()?;
    tracing::debug!(dir = ?qbank_dir, "loading settings");
    let config = Config::load(&qbank_dir)
        .with_context(|| format!("Failed to load settings from {:?}", qbank_dir))?;
    Ok(AccountCodec::from_config(&config))
}

/// Decode an accounts document from a file, or stdin when no file is given
pub fn read_document(codec: &AccountCodec, file: Option<&Path>) -> Result<AccountsDocument> {
    match file {
        Some(path) => {
            let handle = File::open(path)
                .with_context(|| format!("Failed to open {:?}", path))?;
            codec
                .read_document(BufReader::new(handle))
                .with_context(|| format!("Failed to read accounts from {:?}", path))
        }
        None => codec
            .read_document(io::stdin().lock())
            .context("Failed to read accounts from stdin"),
    }
}

/// Decode accounts from a file, or stdin, flattening a single object to one entry
pub fn read_accounts(codec: &AccountCodec, file: Option<&Path>) -> Result<Vec<Account>> {
    Ok(read_document(codec, file)?.into_accounts())
}
