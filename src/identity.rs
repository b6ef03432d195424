//! Local host identity resolution for target filtering.

use crate::error::ConfigError;

/// Resolves the identity of the host this process runs on.
///
/// A target's `probe` list is matched against this identity to decide
/// whether the target is scheduled here, so a wrong answer silently
/// selects the wrong targets. Implementations must fail loudly rather
/// than fall back to a guess.
pub trait HostIdentity: Send + Sync {
    /// Returns the identity of the local host.
    ///
    /// # Errors
    /// Returns [`ConfigError::HostIdentityUnavailable`] when the identity
    /// cannot be determined.
    fn resolve(&self) -> Result<String, ConfigError>;
}

/// Production resolver backed by the operating system hostname.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHostname;

impl HostIdentity for SystemHostname {
    fn resolve(&self) -> Result<String, ConfigError> {
        let name = hostname::get()
            .map_err(|e| ConfigError::HostIdentityUnavailable(e.to_string()))?;
        name.into_string().map_err(|raw| {
            ConfigError::HostIdentityUnavailable(format!("hostname is not valid UTF-8: {:?}", raw))
        })
    }
}

/// Fixed identity, for tests and explicit per-instance overrides.
#[derive(Debug, Clone)]
pub struct FixedIdentity(pub String);

impl HostIdentity for FixedIdentity {
    fn resolve(&self) -> Result<String, ConfigError> {
        Ok(self.0.clone())
    }
}
