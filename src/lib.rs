pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

use std::io::Write;

// Linked so the HTTP client provider is part of every build that reports it.
use reqwest as _;

pub use adapters::{BuildManifest, StaticVersions};
pub use config::CliConfig;
pub use crate::core::reporter::{StartupReporter, DIRECT_EXECUTION_NOTICE, GREETING};
pub use domain::model::{Capability, DependencyVersion};
pub use domain::ports::VersionSource;
pub use utils::error::{ReportError, Result};

/// Writes the greeting and the compiled-in dependency versions to stdout.
pub fn run() -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(&mut out, BuildManifest)
}

pub fn run_with<W: Write, S: VersionSource>(out: &mut W, source: S) -> Result<()> {
    StartupReporter::new(source).report(out)
}

pub fn versions<S: VersionSource>(source: S) -> Result<Vec<DependencyVersion>> {
    StartupReporter::new(source).versions()
}
