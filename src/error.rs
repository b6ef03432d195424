//! Centralized error types for pingmon using thiserror.
//!
//! Every failure mode of the reload pipeline has its own variant so that
//! callers can distinguish "the config is bad, keep the old one" from
//! "the environment is unusable" ([`ConfigError::HostIdentityUnavailable`]).

use thiserror::Error;

/// Errors produced by configuration loading, validation, and reload.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration source could not be opened or read.
    #[error("reading config file: {0}")]
    SourceUnavailable(String),
    /// The source does not decode into the expected structure. Covers
    /// malformed YAML and malformed duration strings.
    #[error("parsing config file: {0}")]
    Syntax(String),
    /// A target declared a check type outside the closed set.
    #[error("target '{target}' has unknown check type '{check_type}', must be one of (ICMP|MTR|ICMP+MTR|TCP)")]
    InvalidCheckType { target: String, check_type: String },
    /// Two or more targets share a name. Checked over every configured
    /// target, not just the ones selected for this host.
    #[error("duplicate target names: {}", comma_joined(.names))]
    DuplicateTargetNames { names: Vec<String> },
    /// An MTR parameter is outside `[0, 65500]`.
    #[error("{field} must be between 0 and 65500 (got {value})")]
    OutOfRangeParameter { field: &'static str, value: i64 },
    /// The local host identity could not be determined. Target filtering
    /// depends on it, so this is fatal to the embedding process rather
    /// than a recoverable reload failure.
    #[error("resolving local host identity: {0}")]
    HostIdentityUnavailable(String),
}

fn comma_joined(names: &[String]) -> String {
    names.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_unavailable_display() {
        let err =
            ConfigError::SourceUnavailable("/etc/pingmon/config.yaml: no such file".to_string());
        assert_eq!(
            err.to_string(),
            "reading config file: /etc/pingmon/config.yaml: no such file"
        );
    }

    #[test]
    fn syntax_display() {
        let err = ConfigError::Syntax("mapping values are not allowed".to_string());
        assert_eq!(
            err.to_string(),
            "parsing config file: mapping values are not allowed"
        );
    }

    #[test]
    fn invalid_check_type_display() {
        let err = ConfigError::InvalidCheckType {
            target: "db1".to_string(),
            check_type: "PING".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "target 'db1' has unknown check type 'PING', must be one of (ICMP|MTR|ICMP+MTR|TCP)"
        );
    }

    #[test]
    fn duplicate_target_names_display() {
        let err = ConfigError::DuplicateTargetNames {
            names: vec!["db1".to_string(), "web1".to_string()],
        };
        assert_eq!(err.to_string(), "duplicate target names: db1, web1");
    }

    #[test]
    fn out_of_range_parameter_display() {
        let err = ConfigError::OutOfRangeParameter {
            field: "mtr.max-hops",
            value: 70_000,
        };
        assert_eq!(
            err.to_string(),
            "mtr.max-hops must be between 0 and 65500 (got 70000)"
        );
    }

    #[test]
    fn host_identity_unavailable_display() {
        let err = ConfigError::HostIdentityUnavailable("gethostname failed".to_string());
        assert_eq!(
            err.to_string(),
            "resolving local host identity: gethostname failed"
        );
    }
}
