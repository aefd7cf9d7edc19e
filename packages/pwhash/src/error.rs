//! Error taxonomy for password hashing
//!
//! Callers branch on the variant: a wrong password is `Ok(false)` from
//! `verify`, while every variant here means the record, the configuration,
//! or the platform is at fault.

use thiserror::Error;

/// Password hashing errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordHashError {
    /// The input does not split into exactly three `:`-delimited fields,
    /// or its salt field is not decodable base64.
    #[error("Invalid hash string: {0}")]
    InvalidHashString(String),

    /// The record names an algorithm outside the configured allowlist.
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The hash provider does not implement the algorithm, or the secure
    /// random source is unavailable.
    #[error("Hash provider failure: {0}")]
    HashProviderFailure(String),

    /// The configuration was rejected while loading or validating it.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl PasswordHashError {
    /// Create an `InvalidHashString` error
    #[must_use]
    pub fn invalid_hash_string(msg: impl Into<String>) -> Self {
        Self::InvalidHashString(msg.into())
    }

    /// Create a `HashProviderFailure` error
    #[must_use]
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::HashProviderFailure(msg.into())
    }

    /// Create an `InvalidConfiguration` error
    #[must_use]
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

/// Result type for password hashing operations
pub type Result<T> = std::result::Result<T, PasswordHashError>;
