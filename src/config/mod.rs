//! Configuration loading, validation, and hot reload for pingmon.
//!
//! The document flows raw to resolved: [`Config`] is the YAML as written,
//! [`ResolvedConfig`] is the validated, host-filtered snapshot that
//! [`ConfigHolder`] publishes atomically to probe workers.

mod holder;
mod resolved;
mod types;
mod validation;

pub use holder::ConfigHolder;
pub use resolved::{CheckType, MtrSettings, ResolvedConfig, Target};
pub use types::{
    Config, GlobalConfig, IcmpConfig, MtrConfig, TargetConfig, TcpConfig, DEFAULT_CONFIG_PATH,
};
