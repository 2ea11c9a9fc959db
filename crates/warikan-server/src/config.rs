//! Server configuration
//!
//! Read from Shuttle secrets (`Secrets.toml` locally, the secret store when deployed).

use thiserror::Error;
use warikan::SplitPolicy;

const SPLIT_POLICY_KEY: &str = "SPLIT_POLICY";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// Runtime configuration for the API server
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// Rounding policy used when a new expense is split
    pub split_policy: SplitPolicy,
}

impl ServerConfig {
    /// Build configuration from a key lookup (secret store, env, ...)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let split_policy = match lookup(SPLIT_POLICY_KEY) {
            Some(raw) if !raw.trim().is_empty() => {
                raw.trim()
                    .parse()
                    .map_err(|message| ConfigError::InvalidValue {
                        key: SPLIT_POLICY_KEY,
                        message,
                    })?
            }
            _ => SplitPolicy::default(),
        };

        Ok(Self { split_policy })
    }

    /// Load from Shuttle secrets, falling back to defaults on invalid values
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Self {
        match Self::from_lookup(|key| secrets.get(key)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("⚠️  {} - using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_to_per_share() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.split_policy, SplitPolicy::PerShare);
    }

    #[test]
    fn test_reads_split_policy() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("SPLIT_POLICY", " distribute_remainder ")]))
                .unwrap();
        assert_eq!(config.split_policy, SplitPolicy::DistributeRemainder);
    }

    #[test]
    fn test_blank_value_uses_default() {
        let config = ServerConfig::from_lookup(lookup_from(&[("SPLIT_POLICY", "  ")])).unwrap();
        assert_eq!(config.split_policy, SplitPolicy::PerShare);
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let err = ServerConfig::from_lookup(lookup_from(&[("SPLIT_POLICY", "banker")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "SPLIT_POLICY",
                ..
            }
        ));
    }
}
