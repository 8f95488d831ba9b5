//! Environment Configuration
//!
//! Typed lookup of environment variables. A setting may be known under
//! several names (deployments disagree on naming), so every lookup takes
//! a list of aliases and the first non-blank value wins.

use std::collections::HashMap;
use std::str::FromStr;

/// Source of configuration values
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// The process environment (after `.env` has been loaded by the binary)
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Configuration error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: set one of {}", .names.join(", "))]
    Missing { names: Vec<String> },

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: String, reason: String },
}

/// First non-blank value among `names`, with the name it was found under
fn lookup<S: EnvSource + ?Sized>(env: &S, names: &[&str]) -> Option<(String, String)> {
    names.iter().find_map(|name| {
        env.get(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(|v| ((*name).to_string(), v))
    })
}

/// Required setting; fails when none of the aliases is set
pub fn require_any<S: EnvSource + ?Sized>(env: &S, names: &[&str]) -> Result<String, ConfigError> {
    lookup(env, names)
        .map(|(_, value)| value)
        .ok_or_else(|| ConfigError::Missing {
            names: names.iter().map(|n| (*n).to_string()).collect(),
        })
}

/// Optional setting
pub fn optional_any<S: EnvSource + ?Sized>(env: &S, names: &[&str]) -> Option<String> {
    lookup(env, names).map(|(_, value)| value)
}

/// Optional setting parsed with [`FromStr`], `default` when unset
pub fn parse_or<S, T>(env: &S, name: &str, default: T) -> Result<T, ConfigError>
where
    S: EnvSource + ?Sized,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(env, &[name]) {
        None => Ok(default),
        Some((name, raw)) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
    }
}

/// Boolean flag: accepts `1/0`, `true/false`, `yes/no`, `on/off` (case-insensitive)
pub fn flag_or<S: EnvSource + ?Sized>(env: &S, name: &str, default: bool) -> Result<bool, ConfigError> {
    match lookup(env, &[name]) {
        None => Ok(default),
        Some((name, raw)) => match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid {
                name,
                reason: format!("expected a boolean, got {raw:?}"),
            }),
        },
    }
}
