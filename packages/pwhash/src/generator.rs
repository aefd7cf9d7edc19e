//! Password hash creation and verification

use crate::config::HashConfig;
use crate::hashing::compute_digest;
use crate::record::HashRecord;
use crate::salt::generate_salt;
use crate::{PasswordHashError, Result};
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

/// Creates and verifies hash strings under a fixed [`HashConfig`].
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct HashGenerator {
    config: HashConfig,
}

impl HashGenerator {
    /// Create a generator from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `config` fails
    /// [`HashConfig::validate`].
    pub fn new(config: HashConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this generator was built with
    #[must_use]
    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Hash `password` with a fresh salt and the configured algorithm.
    ///
    /// No policy checks are applied to `password`.
    ///
    /// # Errors
    ///
    /// Returns `HashProviderFailure` if the secure random source is
    /// unavailable.
    pub fn create(&self, password: &str) -> Result<String> {
        let salt = generate_salt(self.config.salt_length)?;
        let hash_string = hash(password, &self.config.algorithm, &salt)?;
        debug!(
            algorithm = %self.config.algorithm,
            salt_length = self.config.salt_length,
            "Created password hash"
        );
        Ok(hash_string)
    }

    /// Check `password` against a stored hash string.
    ///
    /// The digest is recomputed with the algorithm and salt recorded in
    /// `hash_string`, not the configured algorithm, so records made before an
    /// algorithm change keep verifying while their algorithm stays supported.
    ///
    /// `Ok(false)` means only that the password is wrong.
    ///
    /// # Errors
    ///
    /// - `InvalidHashString` if `hash_string` is malformed
    /// - `UnsupportedAlgorithm` if its algorithm is not in
    ///   `supported_algorithms`; no hashing is attempted in that case
    /// - `HashProviderFailure` if an allowed algorithm is not implemented
    pub fn verify(&self, password: &str, hash_string: &str) -> Result<bool> {
        let record = parse(hash_string)?;

        if !self.config.is_supported(&record.algorithm) {
            warn!(
                algorithm = %record.algorithm,
                "Rejected hash string with unsupported algorithm"
            );
            return Err(PasswordHashError::UnsupportedAlgorithm(record.algorithm));
        }

        let candidate = hash(password, &record.algorithm, &record.salt)?;
        let matches: bool = candidate.as_bytes().ct_eq(hash_string.as_bytes()).into();
        debug!(algorithm = %record.algorithm, matches, "Verified password hash");
        Ok(matches)
    }

    /// Whether a record should be re-created with the configured algorithm.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHashString` if `hash_string` is malformed.
    pub fn needs_rehash(&self, hash_string: &str) -> Result<bool> {
        let record = parse(hash_string)?;
        Ok(record.algorithm != self.config.algorithm)
    }
}

/// Hash `password` with the given algorithm and base64 salt, returning the
/// full `algorithm:salt:digest` string. The salt is copied verbatim.
///
/// # Errors
///
/// - `HashProviderFailure` if `algorithm` is not implemented
/// - `InvalidHashString` if `salt` is not base64
pub fn hash(password: &str, algorithm: &str, salt: &str) -> Result<String> {
    let digest = compute_digest(password, algorithm, salt)?;
    Ok(HashRecord::new(algorithm, salt, digest).encode())
}

/// Split a hash string into its algorithm, salt and digest.
///
/// # Errors
///
/// Returns `InvalidHashString` unless the input has exactly three fields.
pub fn parse(hash_string: &str) -> Result<HashRecord> {
    HashRecord::parse(hash_string)
}
