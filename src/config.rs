//! Runtime configuration read from environment variables.
//!
//! Every variable is optional. Unset variables fall back to their defaults, while set but
//! unparseable ones are reported as [`ConfigError::InvalidEnvValue`].

use std::{env::VarError, fmt::Display, str::FromStr};

use dioxus_logger::tracing::Level;

use crate::{error::ConfigError, model::raid::GroupConfig};

/// Group size applied when a raid snapshot carries no group configuration.
pub static DEFAULT_GROUP_SIZE: u32 = 5;

/// Group count applied when a raid snapshot carries no group configuration.
pub static DEFAULT_GROUP_NUMBER: u32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum level of log events emitted (`LOG_LEVEL`).
    pub log_level: Level,
    /// Group layout for snapshots without one (`DEFAULT_GROUP_SIZE`, `DEFAULT_GROUP_NUMBER`).
    pub default_groups: GroupConfig,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All set variables parsed successfully
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set to an unusable value
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var))
    }

    /// Reads the configuration through an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Resolves a variable name the way [`std::env::var`] does
    ///
    /// # Returns
    /// - `Ok(Config)` - All set variables parsed successfully
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set to an unusable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let log_level = parse_var(&lookup, "LOG_LEVEL", Level::WARN)?;
        let size = parse_positive(&lookup, "DEFAULT_GROUP_SIZE", DEFAULT_GROUP_SIZE)?;
        let number = parse_positive(&lookup, "DEFAULT_GROUP_NUMBER", DEFAULT_GROUP_NUMBER)?;

        Ok(Self {
            log_level,
            default_groups: GroupConfig::new(size, number),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::WARN,
            default_groups: GroupConfig::new(DEFAULT_GROUP_SIZE, DEFAULT_GROUP_NUMBER),
        }
    }
}

fn parse_var<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        Err(VarError::NotPresent) => Ok(default),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "value is not valid unicode".to_string(),
        }),
    }
}

fn parse_positive<F>(lookup: &F, var: &str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let value = parse_var(lookup, var, default)?;
    if value == 0 {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}
