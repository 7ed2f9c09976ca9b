//! # paxsign-core — Foundational Types for the paxsign Ledger
//!
//! This crate is the bedrock of the paxsign workspace. It defines the core
//! type-system primitives shared by the digest engine, the ledger, and the
//! CLI. Every other crate in the workspace depends on `paxsign-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `EmailAddress` and
//!    `SignatureName` are newtypes with validated constructors. No bare
//!    strings for identifiers.
//!
//! 2. **`SignatureDigest` is the only digest currency.** The 8 final words
//!    of a SHA-256 computation are sealed into `SignatureDigest` at the
//!    engine boundary; everything downstream (records, comparison, the
//!    ledger store file) handles the digest type, never loose hex strings.
//!
//! 3. **Validated parsing, infallible rendering.** Constructors that accept
//!    external text return `Result`; rendering to text never fails and is
//!    always canonical (lowercase hex, exact length).
//!
//! ## Crate Policy
//!
//! - No dependencies on other `paxsign-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod digest;
pub mod error;
pub mod identity;

// Re-export primary types for ergonomic imports.
pub use digest::SignatureDigest;
pub use error::{DigestParseError, IdentityError};
pub use identity::{EmailAddress, SignatureName};
