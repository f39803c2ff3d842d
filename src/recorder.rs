//! Append-only result file.
//!
//! Each match is persisted as one self-contained text block with every
//! encoding a wallet import needs. The file is opened for append and
//! closed per record, so a partial run still leaves every registered
//! match on disk.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::worker::VanityResult;

/// Writes found results to an append-only text file.
pub struct Recorder {
    path: PathBuf,
}

impl Recorder {
    /// Creates a recorder with the default timestamp-derived filename.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(format!(
                "solana_vanity_address_{}.txt",
                Local::now().timestamp()
            )),
        }
    }

    /// Creates a recorder writing to an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the result file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one result block.
    ///
    /// The sink is opened, written and released per call; no file handle
    /// is held between matches.
    pub fn record(&self, result: &VanityResult) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "=== SOL Vanity Address #{} ===", result.sequence)?;
        writeln!(file, "Address: {}", result.address)?;
        if let Some(mnemonic) = &result.mnemonic {
            writeln!(file, "Mnemonic: {}", mnemonic)?;
        }
        writeln!(
            file,
            "Private key (Phantom & mainstream wallets): {}",
            result.keypair_base58()
        )?;
        writeln!(
            file,
            "Private key (Solflare wallet): {}",
            result.private_key_base58()
        )?;
        writeln!(file, "Private key (hex): {}", result.private_key_hex())?;
        writeln!(
            file,
            "Private key (bytes): {}",
            result.private_key_byte_array()
        )?;
        writeln!(file, "Import instructions:")?;
        writeln!(file, "- Phantom & mainstream wallets: Use Phantom format above")?;
        writeln!(file, "- Solflare wallet: Use Solflare format")?;
        writeln!(file, "- Sollet wallet: Use bytes array format")?;
        writeln!(
            file,
            "Generated time: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(file)?;

        Ok(())
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}
