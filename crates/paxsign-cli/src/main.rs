//! # paxsign CLI Entry Point
//!
//! Assembles subcommands and dispatches them against the JSON ledger store.

mod store;

use anyhow::bail;
use clap::Parser;

use paxsign_core::{EmailAddress, SignatureName};
use paxsign_crypto::compute_sha256;
use store::LedgerStore;

/// paxsign — signature notarization ledger.
///
/// Fingerprints uploaded signature filenames with a self-contained SHA-256
/// engine and records signees, signatures, allow-lists, and validation
/// notes in a JSON ledger file.
#[derive(Parser, Debug)]
#[command(name = "paxsign", version, about)]
struct Cli {
    /// Path of the ledger store file.
    #[arg(long, global = true, default_value = "paxsign-ledger.json")]
    ledger: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Compute the SHA-256 digest of a text argument.
    Digest {
        /// Text to fingerprint (single-byte characters only).
        text: String,
    },
    /// Register a new signee.
    Register {
        /// The signee's email address.
        email: EmailAddress,
    },
    /// Upload a signature: fingerprint the filename and record the asset.
    Upload {
        /// Calling signee's email address.
        caller: EmailAddress,
        /// Registry name of the new signature.
        name: SignatureName,
        /// Filename of the signed artifact.
        filename: String,
    },
    /// Add a validator to the caller's allow-list.
    Allow {
        /// Calling signee's email address.
        caller: EmailAddress,
        /// Validator email to permit.
        validator: EmailAddress,
    },
    /// Validate a signee's uploaded signature.
    Validate {
        /// Calling signee's email address.
        caller: EmailAddress,
        /// Email of the signee whose signature is validated.
        owner: EmailAddress,
    },
    /// Print a signee's record, or the whole ledger.
    Show {
        /// Email of the signee to show. Omit for the full ledger.
        email: Option<EmailAddress>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let store = LedgerStore::new(&cli.ledger);

    match cli.command {
        Commands::Digest { text } => {
            let digest = compute_sha256(&text)?;
            println!("{digest}");
        }
        Commands::Register { email } => {
            let mut ledger = store.load()?;
            ledger.register_signee(email.clone())?;
            store.save(&ledger)?;
            println!("registered {email}");
        }
        Commands::Upload { caller, name, filename } => {
            let mut ledger = store.load()?;
            let digest = ledger.upload_signature(&caller, name.clone(), filename)?;
            store.save(&ledger)?;
            println!("{name}: {digest}");
        }
        Commands::Allow { caller, validator } => {
            let mut ledger = store.load()?;
            ledger.add_to_allowed_list(&caller, validator.clone())?;
            store.save(&ledger)?;
            println!("{validator} may now validate for {caller}");
        }
        Commands::Validate { caller, owner } => {
            let mut ledger = store.load()?;
            let outcome = ledger.validate_signature(&caller, &owner)?;
            store.save(&ledger)?;
            println!("{outcome:?}");
        }
        Commands::Show { email } => {
            let ledger = store.load()?;
            match email {
                Some(email) => match ledger.signee(&email) {
                    Some(signee) => println!("{}", serde_json::to_string_pretty(signee)?),
                    None => bail!("signee {email} not found"),
                },
                None => println!("{}", serde_json::to_string_pretty(&ledger)?),
            }
        }
    }

    Ok(())
}
