// Application layer: what the binary does when it is the process entry point.

use crate::adapters::BuildManifest;
use crate::core::reporter::DIRECT_EXECUTION_NOTICE;
use crate::core::VersionSource;
use crate::utils::error::{ReportError, Result};
use std::io::Write;

/// Notice line, then the report against the compiled-in versions, on stdout.
pub fn run_direct() -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_direct_with(&mut out, BuildManifest)
}

pub fn run_direct_with<W: Write, S: VersionSource>(out: &mut W, source: S) -> Result<()> {
    writeln!(out, "{}", DIRECT_EXECUTION_NOTICE)?;
    crate::run_with(out, source)
}

/// Logs `error`, writes its diagnostic to `err_out` and returns the exit code.
pub fn report_failure<E: Write>(err_out: &mut E, error: &ReportError) -> i32 {
    tracing::error!("❌ Startup report failed: {}", error);
    // Nowhere left to report a failed stderr write.
    let _ = writeln!(err_out, "❌ {}", error.user_friendly_message());
    error.exit_code()
}
