//! One-time code derivation (HOTP/TOTP, RFC 4226/6238).
//!
//! Seed text is treated the way authenticator apps distribute it: a base32
//! string, upper-cased before decoding so `"orug..."` and `"ORUG..."` name
//! the same seed. Two implementations that disagree on this normalization
//! produce different codes from the same seed text.

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha1::Sha1;

use crate::error::{CodecError, Result};

type HmacSha1 = Hmac<Sha1>;

/// A derived one-time code and the window it is valid for.
///
/// The window is `[valid_from, valid_until)` in unix seconds; its width is
/// exactly one interval regardless of where inside the window `now` fell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OneTimeCode {
    pub code: String,
    pub valid_from: i64,
    pub valid_until: i64,
}

impl std::fmt::Display for OneTimeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Derive the one-time code for `now`.
///
/// `seed_text` is the base32-encoded seed as distributed by the external
/// service. Pure: identical inputs always yield identical output.
///
/// # Errors
///
/// Returns `CodecError::InvalidTiming` unless `now > epoch_start`,
/// `interval_secs >= 1`, and `digits` is in `1..=9`;
/// `CodecError::SeedEncoding` if the seed text is not valid base32.
pub fn derive(
    seed_text: &[u8],
    epoch_start: i64,
    now: i64,
    interval_secs: i64,
    digits: u32,
) -> Result<OneTimeCode> {
    if now <= epoch_start {
        return Err(CodecError::InvalidTiming(format!(
            "now ({now}) must be after epoch start ({epoch_start})"
        ))
        .into());
    }
    if interval_secs < 1 {
        return Err(CodecError::InvalidTiming(format!(
            "interval must be at least 1 second, got {interval_secs}"
        ))
        .into());
    }
    if !(1..=9).contains(&digits) {
        return Err(CodecError::InvalidTiming(format!(
            "digits must be in 1..=9, got {digits}"
        ))
        .into());
    }

    let seed_bytes = decode_seed(seed_text)?;

    let elapsed = now - epoch_start;
    let counter = (elapsed / interval_secs) as u64;

    let mut mac: HmacSha1 = KeyInit::new_from_slice(&seed_bytes)
        .map_err(|e| CodecError::SeedEncoding(e.to_string()))?;
    Mac::update(&mut mac, &counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    // Dynamic truncation, RFC 4226 §5.4: low nibble of the last byte picks
    // a 4-byte window, whose top bit is masked off to yield a 31-bit value.
    let offset = (digest[digest.len() - 1] & 0x0f) as usize;
    let value = ((digest[offset] as u32 & 0x7f) << 24)
        | ((digest[offset + 1] as u32) << 16)
        | ((digest[offset + 2] as u32) << 8)
        | (digest[offset + 3] as u32);

    let modulus = 10u64.pow(digits);
    let code = format!(
        "{:0width$}",
        value as u64 % modulus,
        width = digits as usize
    );

    let mut intervals = elapsed / interval_secs;
    if elapsed % interval_secs != 0 {
        intervals += 1;
    }
    let valid_until = epoch_start + intervals * interval_secs;

    Ok(OneTimeCode {
        code,
        valid_from: valid_until - interval_secs,
        valid_until,
    })
}

/// Decode seed text: upper-case, strip padding, base32 (RFC 4648).
fn decode_seed(seed_text: &[u8]) -> Result<Vec<u8>> {
    let text = std::str::from_utf8(seed_text)
        .map_err(|_| CodecError::SeedEncoding("seed text is not utf-8".to_string()))?;
    let normalized = text.trim().trim_end_matches('=').to_ascii_uppercase();

    base32::decode(base32::Alphabet::Rfc4648 { padding: false }, &normalized)
        .filter(|decoded| !decoded.is_empty())
        .ok_or_else(|| {
            CodecError::SeedEncoding("seed text is not valid base32".to_string()).into()
        })
}

/// Check that seed text decodes, without deriving anything.
///
/// Used at enrollment so a broken seed is rejected before it is sealed.
pub fn validate_seed_text(seed_text: &[u8]) -> Result<()> {
    decode_seed(seed_text).map(|_| ())
}
