use anyhow::Result;
use nix_and_poetry::{
    run_with, versions, Capability, ReportError, StaticVersions, VersionSource,
    DIRECT_EXECUTION_NOTICE,
};
use std::cell::Cell;

fn scenario_versions() -> StaticVersions {
    [
        (Capability::HttpClient, "2.31.0"),
        (Capability::HumanFormatter, "4.9.0"),
        (Capability::ConfigSerializer, "0.10.2"),
        (Capability::CliToolkit, "8.1.7"),
    ]
    .into_iter()
    .collect()
}

fn report(source: impl VersionSource) -> (String, nix_and_poetry::Result<()>) {
    let mut out = Vec::new();
    let result = run_with(&mut out, source);
    (String::from_utf8(out).expect("report is utf-8"), result)
}

#[test]
fn test_scenario_output_is_exact() -> Result<()> {
    let (output, result) = report(scenario_versions());
    result?;
    assert_eq!(output, "Hello World!\n2.31.0\n4.9.0\n0.10.2\n8.1.7\n");
    Ok(())
}

#[test]
fn test_library_never_prints_direct_execution_notice() {
    let (output, _) = report(scenario_versions());
    assert!(!output.contains(DIRECT_EXECUTION_NOTICE));
    assert_eq!(output.lines().count(), 5);
}

#[test]
fn test_repeated_runs_are_identical() {
    let source = scenario_versions();
    let (first, _) = report(&source);
    let (second, _) = report(&source);
    assert_eq!(first, second);
}

#[test]
fn test_missing_cli_toolkit_keeps_earlier_lines() {
    let mut source = scenario_versions();
    source.remove(Capability::CliToolkit);

    let (output, result) = report(source);

    assert_eq!(output, "Hello World!\n2.31.0\n4.9.0\n0.10.2\n");
    match result {
        Err(ReportError::DependencyUnavailable {
            capability,
            crate_name,
        }) => {
            assert_eq!(capability, Capability::CliToolkit);
            assert_eq!(crate_name, "clap");
        }
        other => panic!("expected DependencyUnavailable, got {:?}", other),
    }
}

#[test]
fn test_each_missing_slot_stops_at_that_slot() {
    for (index, missing) in Capability::ALL.iter().enumerate() {
        let mut source = scenario_versions();
        source.remove(*missing);

        let (output, result) = report(source);

        assert!(result.is_err(), "{} missing should fail", missing);
        // Greeting plus every slot before the missing one.
        assert_eq!(output.lines().count(), 1 + index, "{} missing", missing);
    }
}

#[test]
fn test_blank_identifier_is_unavailable() {
    let source = scenario_versions().with(Capability::ConfigSerializer, "");
    let (output, result) = report(source);
    assert!(matches!(
        result,
        Err(ReportError::DependencyUnavailable {
            capability: Capability::ConfigSerializer,
            ..
        })
    ));
    assert_eq!(output, "Hello World!\n2.31.0\n4.9.0\n");
}

/// Counts lookups so tests can check nothing is memoized.
struct CountingSource {
    inner: StaticVersions,
    lookups: Cell<usize>,
}

impl VersionSource for CountingSource {
    fn version(&self, capability: Capability) -> Option<String> {
        self.lookups.set(self.lookups.get() + 1);
        self.inner.version(capability)
    }
}

#[test]
fn test_versions_are_fetched_on_every_run() {
    let source = CountingSource {
        inner: scenario_versions(),
        lookups: Cell::new(0),
    };

    report(&source).1.unwrap();
    report(&source).1.unwrap();

    assert_eq!(source.lookups.get(), 8);
}

#[test]
fn test_versions_stops_at_first_failure() {
    let mut inner = scenario_versions();
    inner.remove(Capability::HttpClient);
    let source = CountingSource {
        inner,
        lookups: Cell::new(0),
    };

    assert!(versions(&source).is_err());
    assert_eq!(source.lookups.get(), 1);
}

#[test]
fn test_failing_writer_surfaces_io_error() {
    struct ClosedPipe;

    impl std::io::Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let err = run_with(&mut ClosedPipe, scenario_versions()).unwrap_err();
    assert!(matches!(err, ReportError::IoError(_)));
    assert_eq!(err.exit_code(), 3);
}
