use std::env;
use std::path::PathBuf;

#[allow(dead_code)]
#[path = "src/adapters/lockfile.rs"]
mod lockfile;

use lockfile::{lockfile_candidates, resolve_versions, version_env_var};

// Must match `Capability::crate_name` for every capability.
const REPORTED_CRATES: &[&str] = &["reqwest", "humantime", "toml", "clap"];

/// Points at the `Cargo.lock` to read when the build's target directory is
/// not under the workspace root.
const LOCKFILE_OVERRIDE_ENV: &str = "NIX_AND_POETRY_LOCKFILE";

fn main() {
    println!("cargo:rerun-if-changed=src/adapters/lockfile.rs");
    println!("cargo:rerun-if-env-changed={}", LOCKFILE_OVERRIDE_ENV);

    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo"));
    let out_dir = env::var_os("OUT_DIR").map(PathBuf::from);
    let override_path = env::var_os(LOCKFILE_OVERRIDE_ENV).map(PathBuf::from);
    let package = env::var("CARGO_PKG_NAME").expect("CARGO_PKG_NAME is set by cargo");
    let package_version = env::var("CARGO_PKG_VERSION").ok();

    let candidates = lockfile_candidates(
        override_path.as_deref(),
        out_dir.as_deref(),
        &manifest_dir,
    );
    for candidate in &candidates {
        println!("cargo:rerun-if-changed={}", candidate.display());
    }

    let versions = match resolve_versions(
        &candidates,
        &package,
        package_version.as_deref(),
        REPORTED_CRATES,
    ) {
        Ok((_, versions)) => versions,
        Err(e) => {
            println!("cargo:warning={}; dependency versions will be unavailable", e);
            return;
        }
    };

    for name in REPORTED_CRATES {
        match versions.get(*name) {
            Some(version) => println!("cargo:rustc-env={}={}", version_env_var(name), version),
            None => println!("cargo:warning=no locked version for `{}`", name),
        }
    }
}
