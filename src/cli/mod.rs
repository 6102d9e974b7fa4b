//! Command-line interface.

pub mod init;
pub mod member;
pub mod output;
pub mod pending;
pub mod request;
pub mod reveal;
pub mod secret;
pub mod status;
pub mod vote;

use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::core::domain::VaultInfo;
use crate::core::store::FileStore;
use crate::core::Warden;
use crate::error::{ConfigError, Result};

/// Warden - quorum-gated secrets for teams.
#[derive(Parser)]
#[command(
    name = "warden",
    about = "Quorum-gated secrets for teams",
    version,
    after_help = "Nothing leaves the vault without everyone's say-so."
)]
pub struct Cli {
    /// Act as this member (defaults to the OS username)
    #[arg(long = "as", global = true, env = "WARDEN_MEMBER", value_name = "MEMBER")]
    pub member: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize a vault in the current directory
    Init {
        /// Vault name
        #[arg(short, long)]
        name: Option<String>,
        /// Vault description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Manage vault members
    Member {
        #[command(subcommand)]
        action: MemberAction,
    },

    /// Manage the protected secret
    Secret {
        #[command(subcommand)]
        action: SecretAction,
    },

    /// Open a disclosure request for the vault's secret
    Request,

    /// Vote on a disclosure request
    Vote {
        /// Request id
        id: Uuid,
        /// Record a denial instead of an approval
        #[arg(long)]
        deny: bool,
    },

    /// Show the approval state of a request
    Status {
        /// Request id
        id: Uuid,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List unresolved requests
    Pending,

    /// Reveal the secret behind an approved request
    Reveal {
        /// Request id
        id: Uuid,
    },
}

/// Member subcommands.
#[derive(Subcommand)]
pub enum MemberAction {
    /// Add a member to the vault
    Add {
        /// Member name
        name: String,
    },

    /// Remove a member from the vault
    Rm {
        /// Member name
        name: String,
    },

    /// List vault members
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Secret subcommands.
#[derive(Subcommand)]
pub enum SecretAction {
    /// Store a plaintext-equivalent secret (prompts if no value given)
    Set {
        /// Secret value
        value: Option<String>,
    },

    /// Enroll a TOTP seed (base32 text, sealed at rest)
    Totp {
        /// Seed label, also the key derivation input
        label: String,
        /// Base32 seed text
        seed: String,
        /// Code interval in seconds
        #[arg(long, default_value_t = crate::core::constants::DEFAULT_INTERVAL_SECS)]
        interval: i64,
        /// Code length in digits
        #[arg(long, default_value_t = crate::core::constants::DEFAULT_DIGITS)]
        digits: u32,
        /// Epoch start as a unix timestamp
        #[arg(long, default_value_t = crate::core::constants::DEFAULT_EPOCH_START)]
        epoch: i64,
    },

    /// Show what the vault currently protects (never the plaintext)
    Show,
}

/// Open the state file and resolve the vault it holds.
pub(crate) fn open_vault() -> Result<(Warden<FileStore>, VaultInfo)> {
    let warden = Warden::new(FileStore::open()?);
    let vault = warden
        .vaults()?
        .into_iter()
        .next()
        .ok_or(ConfigError::NotInitialized)?;
    Ok((warden, vault))
}

/// Execute a command as the given member.
pub fn execute(command: Command, member: &str) -> Result<()> {
    use Command::*;

    match command {
        Init { name, description } => init::execute(name, description, member),
        Member { action } => match action {
            MemberAction::Add { name } => member::add(&name),
            MemberAction::Rm { name } => member::rm(&name),
            MemberAction::List { json } => member::list(json),
        },
        Secret { action } => match action {
            SecretAction::Set { value } => secret::set(value),
            SecretAction::Totp {
                label,
                seed,
                interval,
                digits,
                epoch,
            } => secret::totp(&label, &seed, epoch, interval, digits),
            SecretAction::Show => secret::show(),
        },
        Request => request::execute(member),
        Vote { id, deny } => vote::execute(id, member, !deny),
        Status { id, json } => status::execute(id, json),
        Pending => pending::execute(),
        Reveal { id } => reveal::execute(id, member),
    }
}
