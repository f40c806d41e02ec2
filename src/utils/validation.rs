use crate::domain::model::Capability;
use crate::utils::error::{ReportError, Result};

/// A missing or blank identifier counts as an unavailable dependency.
pub fn validate_version_identifier(capability: Capability, value: Option<String>) -> Result<String> {
    match value {
        Some(version) if !version.trim().is_empty() => Ok(version),
        _ => Err(ReportError::DependencyUnavailable {
            capability,
            crate_name: capability.crate_name(),
        }),
    }
}
