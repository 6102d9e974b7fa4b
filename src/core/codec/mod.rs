//! Seed codec: envelope encryption for TOTP seeds.
//!
//! Seals seed material under AES-256-GCM with a key derived from the seed's
//! human-readable label (SHA-256 of the label). The derived key is therefore
//! not an independent secret: anyone who knows the label can recompute it.
//! Confidentiality rests on the quorum gate in front of [`decrypt`]; the
//! façade never calls it before a request is resolved. The deterministic
//! label→key mapping is load-bearing; a stored ciphertext can only be opened
//! with the label it was sealed under.
//!
//! Wire format: `nonce (12 bytes) ‖ ciphertext ‖ tag`.

pub mod otp;

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::RngCore;
use sha2::{Digest, Sha256};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::NONCE_LEN;
use crate::error::{CodecError, Result};

/// Derive the 32-byte encryption key for a seed label.
pub fn derive_key(label: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(label.as_bytes());
    hasher.finalize().into()
}

/// Seal seed material under the label-derived key.
///
/// Generates a fresh random nonce per call and returns `nonce‖ct‖tag`.
///
/// # Errors
///
/// Returns `CodecError::EncryptionFailed` if the AEAD rejects the input.
pub fn encrypt(label: &str, plaintext: &[u8]) -> Result<Vec<u8>> {
    let key = derive_key(label);
    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| CodecError::EncryptionFailed(e.to_string()))?;

    let mut nonce = [0u8; NONCE_LEN];
    rand::thread_rng().fill_bytes(&mut nonce);

    let sealed = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|e| CodecError::EncryptionFailed(e.to_string()))?;

    debug!(label, len = sealed.len() + NONCE_LEN, "sealed seed");

    let mut out = Vec::with_capacity(NONCE_LEN + sealed.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&sealed);
    Ok(out)
}

/// Open a sealed seed with the label-derived key.
///
/// # Errors
///
/// Returns `CodecError::Corrupt` if `data` is shorter than one nonce, or
/// `CodecError::AuthenticationFailed` if the tag check fails (tampered
/// ciphertext or wrong label). The two render identical text by design.
pub fn decrypt(label: &str, data: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    if data.len() < NONCE_LEN {
        return Err(CodecError::Corrupt.into());
    }

    let key = derive_key(label);
    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|_| CodecError::AuthenticationFailed)?;

    let (nonce, sealed) = data.split_at(NONCE_LEN);
    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), sealed)
        .map_err(|_| CodecError::AuthenticationFailed)?;

    Ok(Zeroizing::new(plaintext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let sealed = encrypt("Facebook", b"ORUGKIDQOJUXMYLUMUQGWZLZ").unwrap();
        let opened = decrypt("Facebook", &sealed).unwrap();
        assert_eq!(opened.as_slice(), b"ORUGKIDQOJUXMYLUMUQGWZLZ");
    }

    #[test]
    fn test_fresh_nonce_per_seal() {
        let a = encrypt("label", b"seed").unwrap();
        let b = encrypt("label", b"seed").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_wrong_label_fails() {
        let sealed = encrypt("Facebook", b"seed material").unwrap();
        let err = decrypt("Faceb00k", &sealed).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Codec(CodecError::AuthenticationFailed)
        ));
    }

    #[test]
    fn test_short_ciphertext_is_corrupt() {
        let err = decrypt("x", &[0u8; 5]).unwrap_err();
        assert!(matches!(err, crate::error::Error::Codec(CodecError::Corrupt)));
    }

    #[test]
    fn test_tamper_any_byte_rejected() {
        let sealed = encrypt("label", b"some seed bytes").unwrap();
        for i in 0..sealed.len() {
            let mut tampered = sealed.clone();
            tampered[i] ^= 0x01;
            assert!(decrypt("label", &tampered).is_err(), "byte {i} accepted");
        }
    }

    #[test]
    fn test_corrupt_and_auth_failure_render_identically() {
        let corrupt = crate::error::Error::from(CodecError::Corrupt);
        let auth = crate::error::Error::from(CodecError::AuthenticationFailed);
        assert_eq!(corrupt.to_string(), auth.to_string());
    }

    #[test]
    fn test_key_derivation_is_deterministic() {
        assert_eq!(derive_key("Facebook"), derive_key("Facebook"));
        assert_ne!(derive_key("Facebook"), derive_key("facebook"));
    }
}
