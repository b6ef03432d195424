//! Raw configuration document types and loading.
//!
//! These types mirror the YAML layout of the config file. Durations are
//! written as human-readable strings ("500ms", "3s", "15m"); a bare
//! number without a unit is rejected at decode time, never defaulted.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/pingmon/config.yaml";

/// Configuration document as written on disk, before validation.
///
/// Check types are still free-form strings and the target list is
/// unfiltered; [`Config::resolve`] turns this into the published
/// [`ResolvedConfig`](super::ResolvedConfig).
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Global settings shared by every check type.
    #[serde(default)]
    pub conf: GlobalConfig,
    /// ICMP echo probe parameters.
    #[serde(default)]
    pub icmp: IcmpConfig,
    /// MTR (multi-hop traceroute) probe parameters.
    #[serde(default)]
    pub mtr: MtrConfig,
    /// TCP connect probe parameters.
    #[serde(default)]
    pub tcp: TcpConfig,
    /// Probing targets, in declaration order.
    #[serde(default)]
    pub targets: Vec<TargetConfig>,
}

/// Global settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GlobalConfig {
    /// How often targets are re-resolved and rescheduled.
    #[serde(with = "humantime_serde", default = "default_refresh")]
    pub refresh: Duration,
    /// Optional DNS resolver override (address or address:port).
    #[serde(default)]
    pub nameserver: Option<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            refresh: default_refresh(),
            nameserver: None,
        }
    }
}

/// ICMP echo probe parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IcmpConfig {
    #[serde(with = "humantime_serde", default = "default_interval")]
    pub interval: Duration,
    #[serde(with = "humantime_serde", default = "default_timeout")]
    pub timeout: Duration,
    /// Echo requests sent per probe cycle.
    #[serde(default = "default_count")]
    pub count: u16,
}

impl Default for IcmpConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
            timeout: default_timeout(),
            count: default_count(),
        }
    }
}

/// MTR probe parameters.
///
/// `max-hops` and `count` stay wide here so that out-of-range values
/// survive decoding and get their own validation error instead of a
/// generic syntax error; [`Config::resolve`] narrows them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MtrConfig {
    #[serde(with = "humantime_serde", default = "default_interval")]
    pub interval: Duration,
    #[serde(with = "humantime_serde", default = "default_mtr_timeout")]
    pub timeout: Duration,
    /// Maximum hop count, must be in `[0, 65500]`.
    #[serde(rename = "max-hops", default = "default_max_hops")]
    pub max_hops: i64,
    /// Probes sent per hop, must be in `[0, 65500]`.
    #[serde(default = "default_mtr_count")]
    pub count: i64,
}

impl Default for MtrConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
            timeout: default_mtr_timeout(),
            max_hops: default_max_hops(),
            count: default_mtr_count(),
        }
    }
}

/// TCP connect probe parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TcpConfig {
    #[serde(with = "humantime_serde", default = "default_interval")]
    pub interval: Duration,
    #[serde(with = "humantime_serde", default = "default_timeout")]
    pub timeout: Duration,
}

impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
            timeout: default_timeout(),
        }
    }
}

/// A single probing target as declared in the `targets` list.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetConfig {
    /// Unique name, used for metric labels and duplicate detection.
    pub name: String,
    /// Hostname or address to probe; opaque to the config layer.
    pub host: String,
    /// Check type as written; validated against the closed set on resolve.
    #[serde(rename = "type")]
    pub check_type: String,
    /// Hosts allowed to probe this target. Absent means every host.
    #[serde(default)]
    pub probe: Option<Vec<String>>,
}

fn default_refresh() -> Duration {
    Duration::from_secs(15 * 60)
}

fn default_interval() -> Duration {
    Duration::from_secs(3)
}

fn default_timeout() -> Duration {
    Duration::from_secs(1)
}

fn default_mtr_timeout() -> Duration {
    Duration::from_millis(500)
}

fn default_count() -> u16 {
    10
}

fn default_max_hops() -> i64 {
    30
}

fn default_mtr_count() -> i64 {
    10
}

impl Config {
    /// Load a raw configuration document from a file path.
    ///
    /// # Errors
    /// Returns [`ConfigError::SourceUnavailable`] if the file cannot be read.
    /// Returns [`ConfigError::Syntax`] if the YAML does not decode.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::SourceUnavailable(format!("{}: {}", path.display(), e)))?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::Syntax(e.to_string()))
    }
}
