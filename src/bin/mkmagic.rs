//! mkmagic - write file-signature ("magic number") byte sequences to disk
//!
//! Companion utility for preparing seed files: each output file contains
//! just the magic bytes of one format. Signatures are entered interactively
//! or imported in bulk from a two-column CSV file (`name,hex` per line).
//! Shares no logic with the formatter.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Arg, ArgAction, Command};
use cpostfmt::Result;

fn build_cli() -> Command {
    Command::new("mkmagic")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Write file-signature (magic number) byte sequences to disk")
        .arg(
            Arg::new("manual")
                .short('m')
                .long("manual")
                .help("Enter one magic signature interactively")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("auto")
                .short('a')
                .long("auto")
                .help("Import magic signatures from a CSV file (name,hex per line)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    if matches.get_flag("manual") {
        manual_import()
    } else if let Some(path) = matches.get_one::<PathBuf>("auto") {
        auto_import(path)
    } else {
        bail!("one of --manual or --auto <FILE> is required (see --help)");
    }
}

/// Prompt once and read one trimmed line from stdin
fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn manual_import() -> Result<()> {
    let name = prompt("Magic name: ")?;
    if name.is_empty() {
        bail!("no file name given");
    }
    let hex = prompt("Magic bytes (e.g. 42 4d for 'BM'): ")?;
    write_magic(&name, &hex)
}

fn auto_import(path: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    for (lineno, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (name, hex) = line
            .split_once(',')
            .with_context(|| format!("{}:{}: expected name,hex", path.display(), lineno + 1))?;
        write_magic(name.trim(), hex)?;
    }
    Ok(())
}

fn write_magic(name: &str, hex: &str) -> Result<()> {
    let magic = decode_hex(hex)?;
    std::fs::write(name, &magic).with_context(|| format!("failed to write {name}"))?;
    Ok(())
}

/// Decode a hex string, ignoring whitespace: "42 4d" -> [0x42, 0x4d]
fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() % 2 != 0 {
        bail!("odd number of hex digits in {input:?}");
    }
    if !compact.is_ascii() {
        bail!("non-hex characters in {input:?}");
    }

    let mut bytes = Vec::with_capacity(compact.len() / 2);
    for i in (0..compact.len()).step_by(2) {
        let pair = &compact[i..i + 2];
        let byte = u8::from_str_radix(pair, 16)
            .with_context(|| format!("invalid hex byte {pair:?} in {input:?}"))?;
        bytes.push(byte);
    }
    Ok(bytes)
}
