pub mod reporter;

pub use crate::domain::model::{Capability, DependencyVersion};
pub use crate::domain::ports::VersionSource;
pub use crate::utils::error::Result;
