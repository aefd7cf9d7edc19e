//! Generator configuration

use crate::algorithm::HashAlgorithm;
use crate::{PasswordHashError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Settings for a [`HashGenerator`](crate::HashGenerator).
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashConfig {
    /// Algorithm used by `create`
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Algorithms accepted by `verify`
    #[serde(default = "default_supported_algorithms")]
    pub supported_algorithms: BTreeSet<String>,
    /// Length in bytes of generated salts
    #[serde(default = "default_salt_length")]
    pub salt_length: usize,
}

fn default_algorithm() -> String {
    HashAlgorithm::Sha256.name().to_string()
}

fn default_supported_algorithms() -> BTreeSet<String> {
    [HashAlgorithm::Sha256, HashAlgorithm::Sha512]
        .into_iter()
        .map(|algorithm| algorithm.name().to_string())
        .collect()
}

fn default_salt_length() -> usize {
    64
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            supported_algorithms: default_supported_algorithms(),
            salt_length: default_salt_length(),
        }
    }
}

impl HashConfig {
    /// Load a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the JSON is malformed or the
    /// resulting configuration fails [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| PasswordHashError::invalid_configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the algorithm used by `create`
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Replace the set of algorithms accepted by `verify`
    #[must_use]
    pub fn with_supported_algorithms<I, S>(mut self, algorithms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_algorithms = algorithms.into_iter().map(Into::into).collect();
        self
    }

    /// Set the salt length in bytes
    #[must_use]
    pub fn with_salt_length(mut self, salt_length: usize) -> Self {
        self.salt_length = salt_length;
        self
    }

    /// Whether `verify` accepts records hashed with `algorithm`
    #[must_use]
    pub fn is_supported(&self, algorithm: &str) -> bool {
        self.supported_algorithms.contains(algorithm)
    }

    /// Check the configuration can produce verifiable records.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if:
    /// - `salt_length` is zero
    /// - `algorithm` is not implemented by the hash provider
    /// - `algorithm` is not in `supported_algorithms`
    pub fn validate(&self) -> Result<()> {
        if self.salt_length == 0 {
            return Err(PasswordHashError::invalid_configuration(
                "salt_length must be positive",
            ));
        }
        HashAlgorithm::from_name(&self.algorithm)
            .map_err(|e| PasswordHashError::invalid_configuration(e.to_string()))?;
        if !self.is_supported(&self.algorithm) {
            return Err(PasswordHashError::invalid_configuration(format!(
                "algorithm '{}' is not in supported_algorithms",
                self.algorithm
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HashConfig::default();
        assert_eq!(config.algorithm, "sha256");
        assert!(config.is_supported("sha256"));
        assert!(config.is_supported("sha512"));
        assert!(!config.is_supported("sha1"));
        assert_eq!(config.supported_algorithms.len(), 2);
        assert_eq!(config.salt_length, 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = HashConfig::from_json(r#"{"salt_length": 32}"#).unwrap();
        assert_eq!(config.salt_length, 32);
        assert_eq!(config.algorithm, "sha256");
        assert_eq!(config.supported_algorithms, default_supported_algorithms());

        let config = HashConfig::from_json(
            r#"{"algorithm": "sha3-256", "supported_algorithms": ["sha256", "sha3-256"]}"#,
        )
        .unwrap();
        assert_eq!(config.algorithm, "sha3-256");
        assert!(config.is_supported("sha3-256"));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = HashConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, PasswordHashError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_validate_rejects_zero_salt_length() {
        let err = HashConfig::default().with_salt_length(0).validate().unwrap_err();
        assert!(matches!(err, PasswordHashError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_validate_rejects_unknown_algorithm() {
        let config = HashConfig::default()
            .with_algorithm("md5")
            .with_supported_algorithms(["md5"]);
        assert!(matches!(
            config.validate(),
            Err(PasswordHashError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_rejects_algorithm_outside_allowlist() {
        let config = HashConfig::default().with_algorithm("sha384");
        assert!(matches!(
            config.validate(),
            Err(PasswordHashError::InvalidConfiguration(_))
        ));
    }
}
