//! Hash configuration loading
//!
//! The algorithm is chosen once and handed to [`crate::HashFacade`] at
//! construction; nothing here mutates a live facade.

use crate::algorithm::HashAlgorithm;
use crate::{HashError, Result};
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use tracing::debug;

/// Environment variable read by [`HashConfig::from_env`]
pub const ALGORITHM_ENV_VAR: &str = "DIGESTKIT_ALGORITHM";

/// Immutable hashing configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HashConfig {
    /// Selected algorithm, SHA-256 when omitted
    pub algorithm: HashAlgorithm,
}

impl HashConfig {
    /// Configuration for a fixed algorithm
    #[must_use]
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Parse configuration from a JSON document such as `{"algorithm":"sha3-256"}`
    ///
    /// # Errors
    ///
    /// Returns `HashError::Configuration` for malformed JSON, unknown fields or
    /// unsupported algorithm names.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| HashError::configuration(e.to_string()))
    }

    /// Load configuration from [`ALGORITHM_ENV_VAR`]
    ///
    /// # Errors
    ///
    /// See [`HashConfig::from_env_var`].
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(ALGORITHM_ENV_VAR)
    }

    /// Load configuration from the named environment variable
    ///
    /// An unset variable yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `HashError::Configuration` when the variable is not valid
    /// unicode or does not name a supported algorithm.
    pub fn from_env_var(name: &str) -> Result<Self> {
        match env::var(name) {
            Ok(value) => {
                let algorithm = value.parse::<HashAlgorithm>().map_err(|e| {
                    HashError::configuration(format!("{name}: {e}"))
                })?;
                debug!("Hash algorithm {algorithm} selected from {name}");
                Ok(Self::new(algorithm))
            }
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(_)) => Err(HashError::configuration(format!(
                "{name} is not valid unicode"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::OutputLength;

    #[test]
    fn default_is_sha256() {
        assert_eq!(
            HashConfig::default().algorithm,
            HashAlgorithm::Sha2(OutputLength::L256)
        );
        assert_eq!(
            HashConfig::from_json("{}").ok(),
            Some(HashConfig::default())
        );
    }

    #[test]
    fn json_selects_algorithm() {
        let config = HashConfig::from_json(r#"{"algorithm":"sha3-512"}"#)
            .expect("valid config");
        assert_eq!(config.algorithm, HashAlgorithm::Sha3(OutputLength::L512));
    }

    #[test]
    fn json_errors_are_configuration_errors() {
        for json in [
            r#"{"algorithm":"md5"}"#,
            r#"{"algorithm":"sha1","extra":true}"#,
            "not json",
        ] {
            assert!(
                matches!(HashConfig::from_json(json), Err(HashError::Configuration(_))),
                "{json}"
            );
        }
    }

    #[test]
    fn unset_env_var_gives_default() {
        let config = HashConfig::from_env_var("DIGESTKIT_TEST_VARIABLE_THAT_IS_NEVER_SET")
            .expect("unset variable falls back to default");
        assert_eq!(config, HashConfig::default());
    }

    #[test]
    fn env_var_selects_algorithm() {
        let name = "DIGESTKIT_TEST_ALGORITHM_VALID";
        env::set_var(name, " Sha3_384 ");
        let config = HashConfig::from_env_var(name);
        env::remove_var(name);
        assert_eq!(
            config.expect("valid algorithm name").algorithm,
            HashAlgorithm::Sha3(OutputLength::L384)
        );
    }

    #[test]
    fn unparsable_env_var_is_configuration_error() {
        let name = "DIGESTKIT_TEST_ALGORITHM_INVALID";
        env::set_var(name, "md5");
        let result = HashConfig::from_env_var(name);
        env::remove_var(name);
        match result {
            Err(err @ HashError::Configuration(_)) => {
                assert_eq!(err.code(), crate::error::CONFIGURATION_ERROR_CODE);
                assert!(err.to_string().contains(name));
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn config_serialises_canonical_id() {
        let json = serde_json::to_string(&HashConfig::new(HashAlgorithm::Sha1))
            .expect("serialize config");
        assert_eq!(json, r#"{"algorithm":"sha1"}"#);
    }
}
