use crate::domain::model::Capability;
use crate::domain::ports::VersionSource;
use std::collections::HashMap;

/// Explicit version table, for importers that resolve versions themselves.
#[derive(Debug, Clone, Default)]
pub struct StaticVersions {
    versions: HashMap<Capability, String>,
}

impl StaticVersions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, capability: Capability, version: impl Into<String>) -> Self {
        self.versions.insert(capability, version.into());
        self
    }

    pub fn remove(&mut self, capability: Capability) -> Option<String> {
        self.versions.remove(&capability)
    }
}

impl VersionSource for StaticVersions {
    fn version(&self, capability: Capability) -> Option<String> {
        self.versions.get(&capability).cloned()
    }
}

impl<S: Into<String>> FromIterator<(Capability, S)> for StaticVersions {
    fn from_iter<I: IntoIterator<Item = (Capability, S)>>(iter: I) -> Self {
        Self {
            versions: iter.into_iter().map(|(c, v)| (c, v.into())).collect(),
        }
    }
}
