use crate::domain::model::Capability;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("{capability} dependency `{crate_name}` has no version identifier")]
    DependencyUnavailable {
        capability: Capability,
        crate_name: &'static str,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ReportError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::DependencyUnavailable { crate_name, .. } => {
                format!("Version of `{}` could not be determined", crate_name)
            }
            ReportError::IoError(e) => format!("Failed to write report: {}", e),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ReportError::DependencyUnavailable { .. } => 1,
            ReportError::IoError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
