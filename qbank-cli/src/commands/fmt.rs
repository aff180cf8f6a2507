//! Fmt command - normalize account JSON
//!
//! A bare object stays an object and an array stays an array.

use std::path::Path;

use anyhow::Result;

use super::{get_codec, read_document};

pub fn run(file: Option<&Path>) -> Result<()> {
    let codec = get_codec()?;
    let document = read_document(&codec, file)?;

    println!("{}", codec.encode_document(&document)?);
    Ok(())
}
