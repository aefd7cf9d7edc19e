//! Salted password digests stored as `algorithm:salt:digest` strings
//!
//! ```
//! use pwhash::{HashConfig, HashGenerator, PasswordHashError};
//!
//! let generator = HashGenerator::new(HashConfig::default())?;
//! let stored = generator.create("correct horse")?;
//!
//! assert!(generator.verify("correct horse", &stored)?);
//! assert!(!generator.verify("battery staple", &stored)?);
//! # Ok::<(), PasswordHashError>(())
//! ```
//!
//! This is a single salted digest, not a key-stretching function: there is
//! no work factor or memory cost.

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod config;
pub mod error;
pub mod generator;
pub mod hashing;
pub mod record;
pub mod salt;

pub use algorithm::HashAlgorithm;
pub use config::HashConfig;
pub use error::{PasswordHashError, Result};
pub use generator::{hash, parse, HashGenerator};
pub use record::{HashRecord, DELIMITER};
