use crate::core::{Capability, DependencyVersion, Result, VersionSource};
use crate::utils::validation::validate_version_identifier;
use std::io::Write;
use std::time::Instant;

pub const GREETING: &str = "Hello World!";

/// Printed by the binary, never by the library, before the report.
pub const DIRECT_EXECUTION_NOTICE: &str = "Executing the script directly";

pub struct StartupReporter<S: VersionSource> {
    source: S,
}

impl<S: VersionSource> StartupReporter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn lookup(&self, capability: Capability) -> Result<DependencyVersion> {
        tracing::debug!(
            "Looking up {} version ({})",
            capability,
            capability.crate_name()
        );
        let version = validate_version_identifier(capability, self.source.version(capability))?;
        Ok(DependencyVersion {
            capability,
            version,
        })
    }

    /// Greeting, then one line per capability in [`Capability::ALL`] order.
    ///
    /// Each version is looked up just before its line is written, so a failed
    /// lookup leaves earlier lines in `out` and writes nothing after them.
    pub fn report<W: Write>(&self, out: &mut W) -> Result<()> {
        let started = Instant::now();
        let outcome = self.write_lines(out);
        // Lines written before a failed lookup still get flushed, but the
        // lookup error takes precedence over a flush error.
        let flushed = out.flush();

        if let Err(e) = outcome {
            tracing::warn!("Report aborted: {}", e);
            return Err(e);
        }
        flushed?;

        tracing::debug!(
            "Reported {} dependency versions in {}",
            Capability::ALL.len(),
            humantime::format_duration(started.elapsed())
        );
        Ok(())
    }

    /// Every version, or the first lookup failure.
    pub fn versions(&self) -> Result<Vec<DependencyVersion>> {
        Capability::ALL
            .iter()
            .map(|capability| self.lookup(*capability))
            .collect()
    }

    fn write_lines<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", GREETING)?;
        for capability in Capability::ALL {
            let dependency = self.lookup(capability)?;
            writeln!(out, "{}", dependency.version)?;
        }
        Ok(())
    }
}
