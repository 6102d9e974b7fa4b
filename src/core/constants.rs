//! Constants used throughout warden.
//!
//! Centralizes magic strings and protocol defaults.

/// State file name (.warden.toml).
pub const STATE_FILE: &str = ".warden.toml";

/// Default TOTP epoch start (unix seconds).
pub const DEFAULT_EPOCH_START: i64 = 0;

/// Default TOTP code interval in seconds.
pub const DEFAULT_INTERVAL_SECS: i64 = 30;

/// Default TOTP code length in digits.
pub const DEFAULT_DIGITS: u32 = 6;

/// AES-GCM nonce length in bytes.
pub const NONCE_LEN: usize = 12;
