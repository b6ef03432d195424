//! pingmon - network probe monitoring daemon (ICMP/MTR/TCP).
//!
//! This crate owns the configuration core: parsing the YAML target
//! document, validating and filtering it against the local host identity,
//! and publishing immutable snapshots atomically so probe workers never
//! see a half-applied reload.

pub mod cli;
pub mod config;
pub mod error;
pub mod identity;
pub mod watcher;

// Re-export commonly used types
pub use cli::LogFormat;
pub use config::{
    CheckType, Config, ConfigHolder, MtrSettings, ResolvedConfig, Target, DEFAULT_CONFIG_PATH,
};
pub use error::ConfigError;
pub use identity::{FixedIdentity, HostIdentity, SystemHostname};
pub use watcher::ConfigWatcher;
