//! Command-line interface for cpostfmt.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Files or directories to format
    pub inputs: Vec<PathBuf>,

    /// Rewrite files in place instead of printing to stdout
    pub in_place: bool,

    /// Column limit override (otherwise read from .clang-format)
    pub column_limit: Option<usize>,

    /// Recursive directory processing
    pub recursive: bool,

    /// Exclude patterns for files/directories (glob patterns)
    pub exclude: Vec<String>,

    /// Number of parallel jobs for in-place mode (0 = auto, 1 = sequential)
    pub jobs: Option<usize>,

    /// Post-process files as-is, without invoking clang-format
    pub no_clang_format: bool,

    /// Silent mode (no progress output)
    pub silent: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("cpostfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Applies house formatting rules on top of clang-format output")
        .arg(
            Arg::new("inputs")
                .help("Files or directories to format")
                .value_name("FILE")
                .num_args(1..)
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("in-place")
                .short('i')
                .long("in-place")
                .help("Rewrite files in place instead of printing to stdout")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("column-limit")
                .short('l')
                .long("column-limit")
                .help("Override the ColumnLimit read from .clang-format [default: 80]")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("recursive")
                .short('r')
                .long("recursive")
                .help("Recursively format directories")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .help("Exclude files/directories matching pattern (glob syntax, can be repeated)")
                .value_name("PATTERN")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .help("Number of parallel jobs for in-place mode (0=auto, 1=sequential)")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("no-clang-format")
                .long("no-clang-format")
                .help("Post-process files as-is, without running clang-format first")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (no output, for editor integration)")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        inputs: matches
            .get_many::<PathBuf>("inputs")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        in_place: matches.get_flag("in-place"),
        column_limit: matches.get_one::<usize>("column-limit").copied(),
        recursive: matches.get_flag("recursive"),
        exclude: matches
            .get_many::<String>("exclude")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        jobs: matches.get_one::<usize>("jobs").copied(),
        no_clang_format: matches.get_flag("no-clang-format"),
        silent: matches.get_flag("silent"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_builds() {
        let cmd = build_cli();
        assert_eq!(cmd.get_name(), "cpostfmt");
    }

    #[test]
    fn test_cli_defaults() {
        let args = parse_args_from(vec!["cpostfmt", "file.c"]);
        assert!(!args.in_place);
        assert!(!args.recursive);
        assert!(!args.no_clang_format);
        assert!(!args.silent);
        assert_eq!(args.column_limit, None);
        assert_eq!(args.jobs, None);
        assert!(args.exclude.is_empty());
    }

    #[test]
    fn test_no_inputs() {
        let args = parse_args_from(vec!["cpostfmt"]);
        assert!(args.inputs.is_empty());
    }

    #[test]
    fn test_in_place_flag() {
        let args = parse_args_from(vec!["cpostfmt", "-i", "file.c"]);
        assert!(args.in_place);
        assert_eq!(args.inputs, vec![PathBuf::from("file.c")]);
    }

    #[test]
    fn test_in_place_after_inputs() {
        // The flag is accepted in any position, not just leading
        let args = parse_args_from(vec!["cpostfmt", "file.c", "--in-place"]);
        assert!(args.in_place);
    }

    #[test]
    fn test_column_limit_override() {
        let args = parse_args_from(vec!["cpostfmt", "-l", "100", "file.c"]);
        assert_eq!(args.column_limit, Some(100));
    }

    #[test]
    fn test_multiple_inputs() {
        let args = parse_args_from(vec!["cpostfmt", "-i", "a.c", "b.c", "c.h"]);
        assert_eq!(args.inputs.len(), 3);
    }

    #[test]
    fn test_exclude_multiple() {
        let args = parse_args_from(vec![
            "cpostfmt", "-r", "-e", "*.pb.cc", "--exclude", "third_party*", "src/",
        ]);
        assert_eq!(args.exclude, vec!["*.pb.cc", "third_party*"]);
    }

    #[test]
    fn test_jobs() {
        let args = parse_args_from(vec!["cpostfmt", "-i", "-j", "4", "src/"]);
        assert_eq!(args.jobs, Some(4));
    }

    #[test]
    fn test_no_clang_format_flag() {
        let args = parse_args_from(vec!["cpostfmt", "--no-clang-format", "file.c"]);
        assert!(args.no_clang_format);
    }
}
