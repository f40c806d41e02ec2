// Adapters layer: concrete version sources and the lockfile reader used at build time.

pub mod build_manifest;
pub mod lockfile;
pub mod static_versions;

pub use build_manifest::BuildManifest;
pub use static_versions::StaticVersions;
