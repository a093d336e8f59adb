//! Refresh policy configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;
use crate::consts::{DEFAULT_REFRESH_OFFSET_SECS, MAX_REFRESH_OFFSET_SECS};

/// Tunables for [`RefreshScheduler`](crate::RefreshScheduler).
///
/// ```toml
/// refresh_offset_secs = 5
/// prefer_exact = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Seconds after local midnight at which the refresh fires. A small
    /// positive offset keeps the refresh clear of the date boundary when the
    /// host timer fires slightly early.
    pub refresh_offset_secs: u32,

    /// Ask the timer for exact delivery first. When false, or when exact
    /// delivery is refused, an inexact deadline is registered.
    pub prefer_exact: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            refresh_offset_secs: DEFAULT_REFRESH_OFFSET_SECS,
            prefer_exact:        true,
        }
    }
}

impl SchedulerConfig {
    /// Parses and validates a TOML document. Missing keys take defaults.
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` for malformed TOML or unknown keys and
    /// `ConfigError::Invalid` for out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` if the offset reaches an hour or more,
    /// which would move the refresh far past the date change.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_offset_secs >= MAX_REFRESH_OFFSET_SECS {
            return Err(ConfigError::Invalid(format!(
                "refresh_offset_secs ({}) must be below {MAX_REFRESH_OFFSET_SECS}",
                self.refresh_offset_secs
            )));
        }
        Ok(())
    }

    pub fn refresh_offset(&self) -> chrono::Duration {
        chrono::Duration::seconds(i64::from(self.refresh_offset_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SchedulerConfig::default();
        assert_eq!(config.refresh_offset_secs, 5);
        assert!(config.prefer_exact);
        assert_eq!(config.refresh_offset(), chrono::Duration::seconds(5));
    }

    #[test]
    fn parses_partial_document() {
        let config = SchedulerConfig::from_toml_str("prefer_exact = false").unwrap();
        assert_eq!(
            config,
            SchedulerConfig {
                refresh_offset_secs: 5,
                prefer_exact:        false,
            }
        );
        assert_eq!(SchedulerConfig::from_toml_str("").unwrap(), SchedulerConfig::default());
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        assert!(matches!(
            SchedulerConfig::from_toml_str("refresh_offset = 5"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SchedulerConfig::from_toml_str("refresh_offset_secs = -1"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SchedulerConfig::from_toml_str("refresh_offset_secs = 3600"),
            Err(ConfigError::Invalid(_))
        ));
    }
}
