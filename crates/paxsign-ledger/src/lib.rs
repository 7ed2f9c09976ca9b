//! # paxsign-ledger — Signature Notarization Records and Transactions
//!
//! Implements the ledger layer around the digest engine:
//!
//! - **Records** (`records.rs`): `Signee` participants and `Signature`
//!   assets.
//! - **Registries** (`registry.rs`): the keyed get/add/update contract and
//!   the `BTreeMap`-backed implementation.
//! - **Transactions** (`ledger.rs`): upload, allow-list management, and
//!   validation, each resolving the calling identity against the signee
//!   registry before writing.
//!
//! ## Design
//!
//! Every signature asset stores the SHA-256 fingerprint of its filename,
//! computed at upload time by `paxsign-crypto`. Validation recomputes the
//! fingerprint and compares byte-for-byte, so any drift between the stored
//! digest and the filename is detected without trusting either party.

pub mod error;
pub mod ledger;
pub mod records;
pub mod registry;

pub use error::LedgerError;
pub use ledger::{Ledger, ValidationOutcome};
pub use records::{Signature, Signee};
pub use registry::{InMemoryRegistry, Record, Registry, RegistryError};
