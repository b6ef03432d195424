//! Validated configuration snapshot published to probe workers.

use super::types::{Config, IcmpConfig, TcpConfig};
use super::validation;
use crate::error::ConfigError;
use std::fmt;
use std::time::Duration;

/// Probing protocol for a target. Closed set; anything else is rejected
/// during resolve with a [`ConfigError::InvalidCheckType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckType {
    Icmp,
    Mtr,
    IcmpAndMtr,
    Tcp,
}

impl CheckType {
    /// Parses the exact on-disk spelling. Whole-value match, so inputs
    /// like "ICMPX" or "MTR " are rejected.
    pub fn parse(s: &str) -> Option<CheckType> {
        match s {
            "ICMP" => Some(CheckType::Icmp),
            "MTR" => Some(CheckType::Mtr),
            "ICMP+MTR" => Some(CheckType::IcmpAndMtr),
            "TCP" => Some(CheckType::Tcp),
            _ => None,
        }
    }

    /// The on-disk spelling of this check type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckType::Icmp => "ICMP",
            CheckType::Mtr => "MTR",
            CheckType::IcmpAndMtr => "ICMP+MTR",
            CheckType::Tcp => "TCP",
        }
    }
}

impl fmt::Display for CheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A target selected for this host, with its validated check type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub host: String,
    pub check_type: CheckType,
}

/// MTR parameters with bounds already enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MtrSettings {
    pub interval: Duration,
    pub timeout: Duration,
    pub max_hops: u16,
    pub count: u16,
}

/// The validated, host-filtered configuration snapshot.
///
/// Built fresh on every successful reload and never mutated afterwards;
/// probe workers hold it behind an `Arc` and pick up replacements at the
/// start of their next cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub refresh: Duration,
    pub nameserver: Option<String>,
    pub icmp: IcmpConfig,
    pub mtr: MtrSettings,
    pub tcp: TcpConfig,
    /// Targets selected for this host, in declaration order.
    pub targets: Vec<Target>,
}

impl Config {
    /// Validate the document and filter targets for `local_host`.
    ///
    /// Targets are processed in declaration order: the check type must be
    /// one of the closed set, and a target is kept when it has no `probe`
    /// list or when `local_host` appears in it. The input list is never
    /// mutated; accepted targets are collected into a fresh vector.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] encountered; on any error the
    /// document is rejected as a whole.
    pub fn resolve(&self, local_host: &str) -> Result<ResolvedConfig, ConfigError> {
        let mut names = Vec::with_capacity(self.targets.len());
        let mut targets = Vec::with_capacity(self.targets.len());

        for target in &self.targets {
            names.push(target.name.clone());

            let Some(check_type) = CheckType::parse(&target.check_type) else {
                return Err(ConfigError::InvalidCheckType {
                    target: target.name.clone(),
                    check_type: target.check_type.clone(),
                });
            };

            let selected = match &target.probe {
                None => true,
                Some(hosts) => hosts.iter().any(|h| h == local_host),
            };
            if selected {
                targets.push(Target {
                    name: target.name.clone(),
                    host: target.host.clone(),
                    check_type,
                });
            }
        }

        // Duplicates are an error even when filtering would keep only one
        // of the clashing targets: the same document must be valid on
        // every probe instance it is shipped to.
        validation::check_unique_names(&names)?;

        let mtr = validation::check_mtr_bounds(&self.mtr)?;

        Ok(ResolvedConfig {
            refresh: self.conf.refresh,
            nameserver: self.conf.nameserver.clone(),
            icmp: self.icmp.clone(),
            mtr,
            tcp: self.tcp.clone(),
            targets,
        })
    }
}
