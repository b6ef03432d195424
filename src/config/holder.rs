//! Guarded holder publishing immutable configuration snapshots.

use super::resolved::ResolvedConfig;
use super::types::Config;
use crate::error::ConfigError;
use crate::identity::HostIdentity;
use arc_swap::ArcSwap;
use std::path::Path;
use std::sync::Arc;

/// Shared holder for the active configuration.
///
/// Readers take a cheap snapshot with [`ConfigHolder::current`] without
/// blocking each other. A reload runs the whole decode-validate-filter
/// pipeline on a private document and publishes with a single atomic
/// pointer store, so readers observe either the old snapshot or the new
/// one, never a partial state. On a failed reload the previously
/// published snapshot stays active untouched.
pub struct ConfigHolder {
    current: ArcSwap<ResolvedConfig>,
    identity: Arc<dyn HostIdentity>,
}

impl std::fmt::Debug for ConfigHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigHolder").finish_non_exhaustive()
    }
}

impl ConfigHolder {
    /// Load `path` and create a holder around the resulting snapshot.
    ///
    /// # Errors
    /// Fails with the same errors as [`ConfigHolder::reload`]; there is no
    /// holder without an initial valid configuration.
    pub fn load(path: &Path, identity: Arc<dyn HostIdentity>) -> Result<Self, ConfigError> {
        let resolved = resolve_from_path(path, identity.as_ref())?;
        Ok(Self {
            current: ArcSwap::from_pointee(resolved),
            identity,
        })
    }

    /// Re-run the full pipeline against `path` and publish the result.
    ///
    /// Concurrent reloads do not corrupt state; the last store wins.
    ///
    /// # Errors
    /// Returns [`ConfigError::HostIdentityUnavailable`] when the local
    /// identity cannot be resolved (fatal to the embedding process), or
    /// any decode/validation error, in which case the previous snapshot
    /// remains authoritative and the process should keep serving it.
    pub fn reload(&self, path: &Path) -> Result<(), ConfigError> {
        let resolved = resolve_from_path(path, self.identity.as_ref())?;
        self.current.store(Arc::new(resolved));
        Ok(())
    }

    /// Snapshot of the active configuration.
    ///
    /// The returned `Arc` stays valid for as long as the caller holds it,
    /// regardless of later reloads.
    pub fn current(&self) -> Arc<ResolvedConfig> {
        self.current.load_full()
    }
}

/// Full reload pipeline, executed before any shared-state mutation.
///
/// Identity comes first: filtering against a wrong identity would
/// silently select the wrong targets, so that failure propagates instead
/// of falling back to a default.
fn resolve_from_path(
    path: &Path,
    identity: &dyn HostIdentity,
) -> Result<ResolvedConfig, ConfigError> {
    let local_host = identity.resolve()?;
    let config = Config::load(path)?;
    config.resolve(&local_host)
}
