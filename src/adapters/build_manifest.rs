use crate::domain::model::Capability;
use crate::domain::ports::VersionSource;

/// Versions resolved from `Cargo.lock` when the crate was compiled.
///
/// `build.rs` exports one `NIX_AND_POETRY_VERSION_<CRATE>` variable per
/// provider; an unset variable means the provider could not be resolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildManifest;

impl VersionSource for BuildManifest {
    fn version(&self, capability: Capability) -> Option<String> {
        let value = match capability {
            Capability::HttpClient => option_env!("NIX_AND_POETRY_VERSION_REQWEST"),
            Capability::HumanFormatter => option_env!("NIX_AND_POETRY_VERSION_HUMANTIME"),
            Capability::ConfigSerializer => option_env!("NIX_AND_POETRY_VERSION_TOML"),
            Capability::CliToolkit => option_env!("NIX_AND_POETRY_VERSION_CLAP"),
        };
        value.map(str::to_string)
    }
}
