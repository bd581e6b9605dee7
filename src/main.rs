mod config;
mod crypto;
mod error;
mod models;

use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::Level;

use crate::{
    config::{ENV_FILE_HINT, ENV_VAR_NAME, GENERATED_LABEL},
    crypto::KeyGenerator,
    models::EncodedKey,
};

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries nothing but the key report
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let key = KeyGenerator::generate_key()
        .with_context(|| format!("Failed to generate {}", ENV_VAR_NAME))?;

    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, &key).context("Failed to write key to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}

/// Print the key followed by a ready-to-paste `.env` line.
fn write_report<W: Write>(out: &mut W, key: &EncodedKey) -> io::Result<()> {
    writeln!(out, "{}", GENERATED_LABEL)?;
    writeln!(out, "{}", key)?;
    writeln!(out)?;
    writeln!(out, "{}", ENV_FILE_HINT)?;
    writeln!(out, "{}={}", ENV_VAR_NAME, key)?;
    Ok(())
}
