//! Error taxonomy for warden.
//!
//! A top-level [`Error`] wraps one sub-enum per concern so callers can match
//! on the failure class without string inspection.

use thiserror::Error;
use uuid::Uuid;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Quorum(#[from] QuorumError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Failures of the quorum approval state machine and the release gate.
#[derive(Error, Debug)]
pub enum QuorumError {
    #[error("'{0}' is not a member of this vault")]
    InvalidMember(String),

    #[error("no such secret: {0}")]
    NoSuchSecret(Uuid),

    #[error("no such vault: {0}")]
    NoSuchVault(Uuid),

    #[error("unknown disclosure request: {0}")]
    UnknownRequest(Uuid),

    #[error("'{member}' holds no vote on request {request}")]
    NotAVoter { request: Uuid, member: String },

    #[error("request {0} is already resolved")]
    AlreadyResolved(Uuid),

    #[error("request {0} is not approved yet")]
    NotApproved(Uuid),
}

/// Failures of the seed codec.
///
/// `Corrupt` and `AuthenticationFailed` deliberately render the same text:
/// a caller probing ciphertexts must not learn whether the framing or the
/// tag check rejected the input.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("ciphertext rejected")]
    Corrupt,

    #[error("ciphertext rejected")]
    AuthenticationFailed,

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("invalid timing parameters: {0}")]
    InvalidTiming(String),

    #[error("seed is not valid base32: {0}")]
    SeedEncoding(String),
}

/// Persistence failures (the storage collaborator being unavailable or
/// holding unreadable state).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read state file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("failed to write state file: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("state file parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("state file serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Workspace configuration failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: run `warden init` first")]
    NotInitialized,

    #[error("already initialized: .warden.toml exists")]
    AlreadyInitialized,
}

/// Input validation failures.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("secret value cannot be empty")]
    EmptyValue,

    #[error("label cannot be empty")]
    EmptyLabel,

    #[error("code length must be between 1 and 9 digits, got {0}")]
    InvalidDigits(u32),

    #[error("code interval must be at least 1 second, got {0}")]
    InvalidInterval(i64),
}

pub type Result<T> = std::result::Result<T, Error>;
