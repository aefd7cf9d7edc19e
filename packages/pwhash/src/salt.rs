//! Salt generation and decoding

use crate::{PasswordHashError, Result};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use zeroize::Zeroizing;

/// Decoder for stored salts: padding optional, trailing bits ignored
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone),
);

/// Generate `length` random bytes from the OS source, encoded as padded
/// standard base64.
///
/// # Errors
///
/// Returns `HashProviderFailure` if the secure random source is unavailable.
pub fn generate_salt(length: usize) -> Result<String> {
    let mut bytes = Zeroizing::new(vec![0u8; length]);
    getrandom::fill(bytes.as_mut_slice()).map_err(|e| {
        PasswordHashError::provider(format!("secure random source unavailable: {e}"))
    })?;
    Ok(STANDARD.encode(bytes.as_slice()))
}

/// Decode a base64 salt into the bytes that are fed to the hash.
///
/// Accepts the standard and URL-safe alphabets with or without padding. A
/// dangling final character carries fewer than 8 bits and is dropped.
///
/// # Errors
///
/// Returns `InvalidHashString` if the salt contains characters outside
/// either base64 alphabet.
pub fn decode_salt(salt: &str) -> Result<Zeroizing<Vec<u8>>> {
    let mut normalized: String = salt
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();
    if normalized.len() % 4 == 1 {
        normalized.pop();
    }

    LENIENT
        .decode(normalized.as_bytes())
        .map(Zeroizing::new)
        .map_err(|e| PasswordHashError::invalid_hash_string(format!("salt is not base64: {e}")))
}
