//! Hash record and its canonical string form

use crate::{PasswordHashError, Result};
use std::fmt;
use std::str::FromStr;

/// Field separator of a hash string.
///
/// Parsing relies on `:` never occurring inside a field. Salts and digests
/// are base64, whose alphabets exclude `:`; switching either field to an
/// encoding that can emit `:` breaks parsing.
pub const DELIMITER: char = ':';

/// The (algorithm, salt, digest) triple behind a hash string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashRecord {
    /// Algorithm identifier, e.g. `sha256`
    pub algorithm: String,
    /// Base64 encoded salt
    pub salt: String,
    /// Base64 encoded digest
    pub digest: String,
}

impl HashRecord {
    /// Create a record from its three fields
    #[must_use]
    pub fn new(
        algorithm: impl Into<String>,
        salt: impl Into<String>,
        digest: impl Into<String>,
    ) -> Self {
        Self {
            algorithm: algorithm.into(),
            salt: salt.into(),
            digest: digest.into(),
        }
    }

    /// Encode as `algorithm:salt:digest`
    #[must_use]
    pub fn encode(&self) -> String {
        format!(
            "{}{DELIMITER}{}{DELIMITER}{}",
            self.algorithm, self.salt, self.digest
        )
    }

    /// Parse a hash string into its three fields.
    ///
    /// Empty fields are accepted; only the field count is checked.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHashString` unless the input has exactly two delimiters.
    pub fn parse(hash_string: &str) -> Result<Self> {
        let mut parts = hash_string.split(DELIMITER);
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(algorithm), Some(salt), Some(digest), None) => {
                Ok(Self::new(algorithm, salt, digest))
            }
            _ => Err(PasswordHashError::invalid_hash_string(format!(
                "expected 3 fields, found {}",
                hash_string.split(DELIMITER).count()
            ))),
        }
    }
}

impl fmt::Display for HashRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for HashRecord {
    type Err = PasswordHashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
