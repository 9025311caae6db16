//! cpostfmt - house-style post-processor for clang-format output
//!
//! Runs clang-format and applies the adjustments it cannot express:
//! indentation of nested preprocessor conditionals, right-alignment of
//! short trailing comments, and blank lines around block boundaries.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod clang;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod process;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Style;
pub use error::Result;
