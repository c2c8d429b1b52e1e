//! Rig settings that are not about HTTP.
//!
//! Read from the environment by [`RigConfig::from_env`]; the binary applies
//! its command-line flags on top.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::UnknownGesturePolicy;

pub const DEFAULT_LOG_PATH: &str = "rps-rig.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RigConfig {
    pub seed: u32,
    pub unknown_policy: UnknownGesturePolicy,
    pub log_path: PathBuf,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            seed: time_seed(),
            unknown_policy: UnknownGesturePolicy::default(),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

impl RigConfig {
    /// `RPS_SEED`, `RPS_UNKNOWN_POLICY` and `RPS_LOG_PATH`; unparsable values
    /// fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = lookup("RPS_SEED").and_then(|s| s.trim().parse().ok()) {
            config.seed = seed;
        }
        if let Some(policy) =
            lookup("RPS_UNKNOWN_POLICY").and_then(|s| UnknownGesturePolicy::from_str(s.trim()))
        {
            config.unknown_policy = policy;
        }
        if let Some(path) = lookup("RPS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            config.log_path = PathBuf::from(path);
        }

        config
    }
}

/// Seed from the wall clock, for runs without `RPS_SEED`.
pub fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
