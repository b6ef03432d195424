//! Semantic validation helpers for the configuration document.

use super::resolved::MtrSettings;
use super::types::MtrConfig;
use crate::error::ConfigError;
use std::collections::HashSet;

/// Upper bound shared by `mtr.max-hops` and `mtr.count`.
const MTR_PARAM_MAX: i64 = 65_500;

/// Rejects duplicate entries in an ordered name list.
///
/// Every duplicated name is reported, each once, in first-occurrence order.
pub(super) fn check_unique_names(names: &[String]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();

    for name in names {
        if !seen.insert(name.as_str()) && !duplicates.contains(name) {
            duplicates.push(name.clone());
        }
    }

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::DuplicateTargetNames { names: duplicates })
    }
}

/// Range-checks the MTR parameters and narrows them into [`MtrSettings`].
pub(super) fn check_mtr_bounds(mtr: &MtrConfig) -> Result<MtrSettings, ConfigError> {
    Ok(MtrSettings {
        interval: mtr.interval,
        timeout: mtr.timeout,
        max_hops: in_range("mtr.max-hops", mtr.max_hops)?,
        count: in_range("mtr.count", mtr.count)?,
    })
}

fn in_range(field: &'static str, value: i64) -> Result<u16, ConfigError> {
    if (0..=MTR_PARAM_MAX).contains(&value) {
        // Fits: MTR_PARAM_MAX < u16::MAX.
        Ok(value as u16)
    } else {
        Err(ConfigError::OutOfRangeParameter { field, value })
    }
}
