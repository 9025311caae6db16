//! cpostfmt - house-style post-processor for clang-format output

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Context;
use cpostfmt::clang::{find_clang_format, run_clang_format};
use cpostfmt::process::postprocess;
use cpostfmt::{parse_args, CliArgs, Result, Style};
use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

/// C/C++ file extensions picked up when formatting directories
const C_EXTENSIONS: &[&str] = &[
    "c", "h", "cc", "cpp", "cxx", "c++", "hh", "hpp", "hxx", "inc",
];

fn main() -> Result<()> {
    let args = parse_args();

    if args.inputs.is_empty() {
        print_usage();
        std::process::exit(1);
    }

    if let Some(column_limit) = args.column_limit {
        let style = Style { column_limit };
        if let Some(error) = style.validate() {
            anyhow::bail!("Invalid configuration: {error}");
        }
    }

    // Resolve the formatter binary once; every file goes through the same one
    let clang_format = if args.no_clang_format {
        None
    } else {
        Some(find_clang_format()?)
    };

    let files = collect_files(&args);
    if files.is_empty() {
        if !args.silent {
            eprintln!("No C/C++ files found to format.");
        }
        return Ok(());
    }

    // Configure thread pool if --jobs specified
    if let Some(jobs) = args.jobs {
        if jobs > 0 {
            if let Err(e) = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build_global()
            {
                eprintln!("Warning: failed to configure thread pool: {e}");
            }
        }
    }

    // stdout mode stays sequential so per-file output never interleaves;
    // in-place mode goes parallel only when --jobs asks for it
    let use_sequential = !args.in_place || args.jobs.is_none() || args.jobs == Some(1);
    if use_sequential {
        process_files_sequential(&files, clang_format.as_deref(), &args);
    } else {
        process_files_parallel(&files, clang_format.as_deref(), &args);
    }

    Ok(())
}

/// Resolve the style for one file: CLI override, else nearest .clang-format
fn build_style(args: &CliArgs, path: &Path) -> Style {
    match args.column_limit {
        Some(column_limit) => Style { column_limit },
        None => Style::discover(path),
    }
}

/// Collect all files to process, handling directories and the recursive flag
fn collect_files(args: &CliArgs) -> Vec<PathBuf> {
    let exclude_patterns: Vec<Pattern> = args
        .exclude
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();

    let mut files = Vec::new();

    for input in &args.inputs {
        if input.is_file() {
            if !is_excluded(input, &exclude_patterns) {
                files.push(input.clone());
            }
        } else if input.is_dir() {
            if args.recursive {
                for entry in WalkDir::new(input)
                    .follow_links(true)
                    .max_depth(256)
                    .into_iter()
                    .filter_map(std::result::Result::ok)
                {
                    let path = entry.path();
                    if path.is_file()
                        && is_c_file(path)
                        && !is_excluded(path, &exclude_patterns)
                    {
                        files.push(path.to_path_buf());
                    }
                }
            } else if let Ok(entries) = std::fs::read_dir(input) {
                for entry in entries.filter_map(std::result::Result::ok) {
                    let path = entry.path();
                    if path.is_file() && is_c_file(&path) && !is_excluded(&path, &exclude_patterns)
                    {
                        files.push(path);
                    }
                }
            }
        } else {
            eprintln!("Error: no such file or directory: {}", input.display());
        }
    }

    files
}

/// Check if a path matches any exclusion pattern
fn is_excluded(path: &Path, patterns: &[Pattern]) -> bool {
    if patterns.is_empty() {
        return false;
    }

    let path_str = path.to_string_lossy();

    for pattern in patterns {
        if pattern.matches(&path_str) {
            return true;
        }

        if let Some(file_name) = path.file_name() {
            if pattern.matches(&file_name.to_string_lossy()) {
                return true;
            }
        }

        for component in path.components() {
            if let std::path::Component::Normal(c) = component {
                if pattern.matches(&c.to_string_lossy()) {
                    return true;
                }
            }
        }
    }

    false
}

/// Check if a file has a C/C++ extension
fn is_c_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            C_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Process files sequentially (always used for stdout output)
fn process_files_sequential(files: &[PathBuf], clang_format: Option<&str>, args: &CliArgs) {
    for path in files {
        if let Err(e) = process_single_file(path, clang_format, args) {
            eprintln!("Error formatting {}: {}", path.display(), e);
        }
    }
}

/// Process files in parallel using Rayon (in-place mode only)
fn process_files_parallel(files: &[PathBuf], clang_format: Option<&str>, args: &CliArgs) {
    let success_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);

    files.par_iter().for_each(|path| {
        match process_single_file(path, clang_format, args) {
            Ok(()) => {
                success_count.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                error_count.fetch_add(1, Ordering::Relaxed);
                eprintln!("Error formatting {}: {}", path.display(), e);
            }
        }
    });

    let success = success_count.load(Ordering::Relaxed);
    let errors = error_count.load(Ordering::Relaxed);

    if !args.silent {
        if errors == 0 {
            eprintln!("Formatted {success} files successfully.");
        } else {
            eprintln!("Formatted {success} files, {errors} errors.");
        }
    }
}

/// Process a single file
fn process_single_file(path: &PathBuf, clang_format: Option<&str>, args: &CliArgs) -> Result<()> {
    let style = build_style(args, path);

    let formatted = match clang_format {
        Some(bin) => run_clang_format(bin, path)?,
        None => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
    };

    let result = postprocess(&formatted, &style);

    if args.in_place {
        if !args.silent {
            eprintln!("Formatting: {}", path.display());
        }
        write_in_place(path, result.as_bytes())?;
    } else {
        io::stdout().write_all(result.as_bytes())?;
    }

    Ok(())
}

/// Replace a file's contents atomically
///
/// Writes a sibling temp file and renames it over the original, so a
/// failure part-way through never leaves a half-written source file.
fn write_in_place(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = tempfile::NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))?;
    tmp.write_all(contents)?;
    tmp.persist(path)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}

fn print_usage() {
    println!(
        "cpostfmt v{} - clang-format post-processor",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Runs clang-format and applies the house style it cannot express:");
    println!("indented nested preprocessor conditionals, right-aligned trailing");
    println!("comments, and blank lines around block boundaries.");
    println!();
    println!("Usage:");
    println!("  cpostfmt [OPTIONS] <FILE>...");
    println!("  cpostfmt -i <FILE>...           # Rewrite files in place");
    println!("  cpostfmt -i -r src/             # Format a directory tree");
    println!();
    println!("Options:");
    println!("  -i, --in-place                  Rewrite files instead of printing to stdout");
    println!("  -l, --column-limit <NUM>        Override ColumnLimit from .clang-format [default: 80]");
    println!("  -r, --recursive                 Process directories recursively");
    println!("  -e, --exclude <PATTERN>         Exclude files/dirs matching pattern (repeatable)");
    println!("  -j, --jobs <NUM>                Parallel jobs for in-place mode (0=auto, 1=sequential)");
    println!("      --no-clang-format           Post-process files as-is, without running clang-format");
    println!("  -S, --silent                    Silent mode");
    println!("  -h, --help                      Print help");
    println!();
    println!("The clang-format binary is taken from the CLANG_FORMAT_BIN environment");
    println!("variable when set; otherwise a version 7+ binary is located on the PATH.");
}
