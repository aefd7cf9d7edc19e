//! Digest function

use crate::algorithm::HashAlgorithm;
use crate::salt::decode_salt;
use crate::Result;
use ::digest::DynDigest;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Compute the base64 digest of `password` salted with `salt`.
///
/// The hasher is fed the UTF-8 password bytes first and the decoded salt
/// bytes second. Records from other implementations only verify if this
/// order is kept.
///
/// # Errors
///
/// - `HashProviderFailure` if `algorithm` is not implemented by the provider
/// - `InvalidHashString` if `salt` is not base64
pub fn compute_digest(password: &str, algorithm: &str, salt: &str) -> Result<String> {
    let algorithm = HashAlgorithm::from_name(algorithm)?;
    let salt = decode_salt(salt)?;

    let mut hasher = algorithm.hasher();
    hasher.update(password.as_bytes());
    hasher.update(&salt);
    let digest = hasher.finalize();

    Ok(STANDARD.encode(&digest))
}

#[cfg(test)]
mod tests {
    use super::compute_digest;
    use crate::PasswordHashError;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use sha2::{Digest, Sha256};

    #[test]
    fn test_password_then_salt_order() {
        let mut expected = Sha256::new();
        expected.update(b"example");
        expected.update(b"salt");
        let expected = STANDARD.encode(expected.finalize());

        let digest = compute_digest("example", "sha256", "c2FsdA==").unwrap();
        assert_eq!(digest, expected);

        let mut reversed = Sha256::new();
        reversed.update(b"salt");
        reversed.update(b"example");
        assert_ne!(digest, STANDARD.encode(reversed.finalize()));
    }

    #[test]
    fn test_deterministic() {
        let a = compute_digest("pw", "sha512", "c2FsdA==").unwrap();
        let b = compute_digest("pw", "sha512", "c2FsdA==").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = compute_digest("pw", "md5", "c2FsdA==").unwrap_err();
        assert!(matches!(err, PasswordHashError::HashProviderFailure(_)));
    }

    #[test]
    fn test_empty_password() {
        let digest = compute_digest("", "sha256", "c2FsdA==").unwrap();
        let expected = STANDARD.encode(Sha256::digest(b"salt"));
        assert_eq!(digest, expected);
    }
}
