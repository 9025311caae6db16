//! Locating and invoking the external clang-format binary.
//!
//! The binary can be pinned with the `CLANG_FORMAT_BIN` environment
//! variable. Otherwise `clang-format --version` decides: version 7 and
//! newer is used as-is, and older installations fall back to the first of
//! `clang-format-7` through `clang-format-10` found on the PATH.

use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

use anyhow::{bail, Context};
use regex::Regex;

use crate::error::Result;

/// Oldest clang-format major version the house style works with
const MIN_MAJOR_VERSION: u32 = 7;

/// Versioned binary names probed when the default binary is too old
const VERSIONED_BINS: &[&str] = &[
    "clang-format-7",
    "clang-format-8",
    "clang-format-9",
    "clang-format-10",
];

/// Major version in `clang-format --version` output
///
/// Distros prefix the version string ("Ubuntu clang-format version 10.0.0-4"),
/// so anchor on the `version` word rather than the start of the line.
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"version\s+(\d+)").unwrap());

/// Parse the major version out of `clang-format --version` output
#[must_use]
pub fn parse_major_version(output: &str) -> Option<u32> {
    VERSION_RE.captures(output)?.get(1)?.as_str().parse().ok()
}

/// Check whether a binary name resolves on the PATH
fn on_path(bin: &str) -> bool {
    Command::new("which")
        .arg(bin)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Pick the clang-format binary to use for this run
pub fn find_clang_format() -> Result<String> {
    if let Ok(bin) = std::env::var("CLANG_FORMAT_BIN") {
        if !bin.is_empty() {
            return Ok(bin);
        }
    }

    let output = Command::new("clang-format")
        .arg("--version")
        .output()
        .context("failed to run clang-format --version")?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let major = parse_major_version(&stdout).with_context(|| {
        format!(
            "unrecognized clang-format version output: {:?}",
            stdout.trim()
        )
    })?;

    if major >= MIN_MAJOR_VERSION {
        return Ok("clang-format".to_string());
    }
    for bin in VERSIONED_BINS {
        if on_path(bin) {
            return Ok((*bin).to_string());
        }
    }
    bail!("clang-format {MIN_MAJOR_VERSION} or above is needed")
}

/// Run clang-format on a file and capture the formatted text
pub fn run_clang_format(bin: &str, path: &Path) -> Result<String> {
    let output = Command::new(bin)
        .arg(path)
        .output()
        .with_context(|| format!("failed to run {bin}"))?;
    if !output.status.success() {
        bail!("{bin} exited with {} on {}", output.status, path.display());
    }
    String::from_utf8(output.stdout)
        .with_context(|| format!("{bin} produced non-UTF-8 output for {}", path.display()))
}
