//! # Ledger Store — JSON File Persistence
//!
//! Loads and saves the ledger as pretty-printed JSON. A missing store file
//! loads as an empty ledger, so the first transaction against a fresh path
//! just works.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use paxsign_ledger::Ledger;

/// A ledger persisted at a filesystem path.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// A store rooted at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store file's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger, or an empty one if the file does not exist yet.
    pub fn load(&self) -> anyhow::Result<Ledger> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no store file, starting empty");
            return Ok(Ledger::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading ledger store {}", self.path.display()))?;
        let mut ledger: Ledger = serde_json::from_str(&raw)
            .with_context(|| format!("parsing ledger store {}", self.path.display()))?;
        ledger.retag();
        Ok(ledger)
    }

    /// Write the ledger back to the store file.
    pub fn save(&self, ledger: &Ledger) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(ledger).context("serializing ledger")?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing ledger store {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "ledger saved");
        Ok(())
    }
}
