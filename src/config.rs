//! Style configuration for cpostfmt.
//!
//! The only setting the post-processor reads is `ColumnLimit`, taken from
//! the `.clang-format` file that governs the source being formatted.
//! Discovery searches the file's ancestor directories and the nearest file
//! wins, matching clang-format's own lookup. When no file or no recognized
//! key is found, the limit falls back to 80.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// Config file name searched for in ancestor directories
const CONFIG_FILE_NAME: &str = ".clang-format";

/// Column limit used when `.clang-format` has no usable `ColumnLimit` entry
const DEFAULT_COLUMN_LIMIT: usize = 80;

/// `ColumnLimit: <n>` entry in a `.clang-format` file
static COLUMN_LIMIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*ColumnLimit\s*:\s*(\d+)\s*$").unwrap());

/// Style settings for the post-processing passes
#[derive(Debug, Clone)]
pub struct Style {
    /// Maximum permitted line width (default: 80)
    pub column_limit: usize,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            column_limit: DEFAULT_COLUMN_LIMIT,
        }
    }
}

impl Style {
    /// Maximum reasonable column limit
    const MAX_COLUMN_LIMIT: usize = 1000;

    /// Validate configuration values are within reasonable bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.column_limit == 0 {
            return Some("column limit must be at least 1".to_string());
        }
        if self.column_limit > Self::MAX_COLUMN_LIMIT {
            return Some(format!(
                "column limit {} exceeds maximum of {}",
                self.column_limit,
                Self::MAX_COLUMN_LIMIT
            ));
        }
        None
    }

    /// Parse style out of `.clang-format` contents
    ///
    /// The file is scanned textually rather than parsed as YAML: one
    /// recognized key is not worth a parser, and clang-format configs in the
    /// wild carry per-language sections that plain YAML loaders reject.
    /// Later entries win, so a multi-section file behaves like the
    /// formatter's own lookup. A `ColumnLimit: 0` entry (clang-format's "no
    /// limit") is treated as absent.
    #[must_use]
    pub fn from_clang_format(contents: &str) -> Self {
        let column_limit = contents
            .lines()
            .filter_map(|line| {
                let caps = COLUMN_LIMIT_RE.captures(line)?;
                caps[1].parse::<usize>().ok().filter(|&v| v > 0)
            })
            .last()
            .unwrap_or(DEFAULT_COLUMN_LIMIT);
        Style { column_limit }
    }

    /// Load the style governing `start_path`
    ///
    /// Falls back to defaults when no `.clang-format` is found or the file
    /// cannot be read; a missing column limit is never an error.
    #[must_use]
    pub fn discover(start_path: &Path) -> Self {
        let Some(config_path) = discover_config_file(start_path) else {
            return Self::default();
        };
        match std::fs::read_to_string(&config_path) {
            Ok(contents) => Self::from_clang_format(&contents),
            Err(e) => {
                eprintln!("Warning: failed to read {}: {e}", config_path.display());
                Self::default()
            }
        }
    }
}

/// Find the `.clang-format` file governing a path
///
/// Searches the path's directory and its ancestors; the nearest file wins.
#[must_use]
pub fn discover_config_file(start_path: &Path) -> Option<PathBuf> {
    let start_dir = if start_path.is_file() {
        start_path.parent().map(Path::to_path_buf)
    } else if start_path.is_dir() {
        Some(start_path.to_path_buf())
    } else {
        // Path doesn't exist, use current directory
        std::env::current_dir().ok()
    };

    for ancestor in start_dir?.ancestors() {
        let candidate = ancestor.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}
