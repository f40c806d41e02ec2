use crate::domain::model::Capability;

/// Supplies version identifiers. Implementations are queried on every lookup;
/// callers must not assume results are cached.
pub trait VersionSource {
    fn version(&self, capability: Capability) -> Option<String>;
}

impl<T: VersionSource + ?Sized> VersionSource for &T {
    fn version(&self, capability: Capability) -> Option<String> {
        (**self).version(capability)
    }
}
