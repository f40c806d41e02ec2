//! Reader for `Cargo.lock`.
//!
//! This module is also compiled into `build.rs`, so it must not refer to
//! anything else in the crate.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

const VERSION_ENV_PREFIX: &str = "NIX_AND_POETRY_VERSION_";

#[derive(Error, Debug)]
pub enum LockfileError {
    #[error("Failed to read lockfile: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse lockfile: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Package `{package}` not found in lockfile")]
    MissingPackage { package: String },

    #[error("No Cargo.lock found")]
    NotFound,
}

#[derive(Debug, Deserialize)]
struct RawLockfile {
    #[serde(default)]
    package: Vec<LockedPackage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LockedPackage {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Lockfile {
    packages: Vec<LockedPackage>,
}

impl Lockfile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LockfileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, LockfileError> {
        let raw: RawLockfile = toml::from_str(content)?;
        Ok(Self {
            packages: raw.package,
        })
    }

    /// The locked entry for `name`, narrowed to `version` when one is given.
    pub fn find_package(&self, name: &str, version: Option<&str>) -> Option<&LockedPackage> {
        self.packages
            .iter()
            .find(|p| p.name == name && version.map_or(true, |v| p.version == v))
    }

    /// Resolved versions of `root`'s direct dependencies that appear in `wanted`.
    ///
    /// Cargo writes `"name version"` in a dependency list only when several
    /// versions of `name` are locked; otherwise the bare name is unique.
    pub fn direct_dependency_versions(
        &self,
        root: &str,
        root_version: Option<&str>,
        wanted: &[&str],
    ) -> Result<BTreeMap<String, String>, LockfileError> {
        let root_package =
            self.find_package(root, root_version)
                .ok_or_else(|| LockfileError::MissingPackage {
                    package: root.to_string(),
                })?;

        let mut versions = BTreeMap::new();
        for entry in &root_package.dependencies {
            let mut parts = entry.split_whitespace();
            let Some(name) = parts.next() else {
                continue;
            };
            if !wanted.contains(&name) {
                continue;
            }

            let version = match parts.next() {
                Some(pinned) => Some(pinned.to_string()),
                None => self.unique_version(name),
            };
            if let Some(version) = version {
                versions.insert(name.to_string(), version);
            }
        }

        Ok(versions)
    }

    fn unique_version(&self, name: &str) -> Option<String> {
        let mut matches = self.packages.iter().filter(|p| p.name == name);
        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(first.version.clone())
    }
}

/// Lockfiles to try, best first: an explicit override, then the one above the
/// build's `OUT_DIR` (the top-level workspace being compiled), then the one
/// above this package's manifest.
pub fn lockfile_candidates(
    override_path: Option<&Path>,
    out_dir: Option<&Path>,
    manifest_dir: &Path,
) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    let found = override_path
        .filter(|path| path.is_file())
        .map(Path::to_path_buf)
        .into_iter()
        .chain(out_dir.and_then(find_lockfile))
        .chain(find_lockfile(manifest_dir));
    for path in found {
        if !candidates.contains(&path) {
            candidates.push(path);
        }
    }
    candidates
}

/// Versions from the first candidate lockfile that records `root`.
pub fn resolve_versions(
    candidates: &[PathBuf],
    root: &str,
    root_version: Option<&str>,
    wanted: &[&str],
) -> Result<(PathBuf, BTreeMap<String, String>), LockfileError> {
    let mut last_error = LockfileError::NotFound;
    for path in candidates {
        match Lockfile::from_file(path)
            .and_then(|lock| lock.direct_dependency_versions(root, root_version, wanted))
        {
            Ok(versions) => return Ok((path.clone(), versions)),
            Err(e) => last_error = e,
        }
    }
    Err(last_error)
}

/// Walks up from `start` to the nearest directory holding a `Cargo.lock`.
pub fn find_lockfile(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join("Cargo.lock"))
        .find(|candidate| candidate.is_file())
}

/// Compile-time environment variable carrying a crate's resolved version.
pub fn version_env_var(crate_name: &str) -> String {
    format!(
        "{}{}",
        VERSION_ENV_PREFIX,
        crate_name.to_uppercase().replace('-', "_")
    )
}
