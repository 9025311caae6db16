//! Single-pass line orchestrator
//!
//! Walks the formatted text line by line, routing each line to at most one
//! transformation: directive lines go to the macro indenter and nothing
//! else; remaining lines get comment alignment and brace padding, which are
//! disjoint by shape (an alignable line ends in `*/`, never in `{` or a
//! lone `}`). Lines matched by nothing pass through unchanged. There is no
//! backtracking: once a line is emitted it is never revisited.

use std::io::{BufRead, Read, Write};

use crate::config::Style;
use crate::error::Result;
use crate::format::{
    align_trailing_comment, brace_padding, is_directive, BracePad, MacroIndenter,
};

/// Post-process one file's worth of already-formatted text
///
/// Emits one line per input line, plus blank lines inserted around block
/// boundaries. Insertions are suppressed next to lines that are already
/// blank, which keeps the whole transformation idempotent.
#[must_use]
pub fn postprocess(src: &str, style: &Style) -> String {
    let mut indenter = MacroIndenter::new(style.column_limit);
    let lines: Vec<&str> = src.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    for (idx, &line) in lines.iter().enumerate() {
        if is_directive(line) {
            out.push(indenter.process_line(line));
            continue;
        }

        let emitted = match align_trailing_comment(line, style.column_limit) {
            Some(aligned) => aligned,
            None => line.to_string(),
        };

        match brace_padding(line) {
            BracePad::Before => {
                if out.last().map_or(true, |prev| !prev.trim().is_empty()) {
                    out.push(String::new());
                }
                out.push(emitted);
            }
            BracePad::After => {
                out.push(emitted);
                if lines.get(idx + 1).is_some_and(|next| !next.trim().is_empty()) {
                    out.push(String::new());
                }
            }
            BracePad::None => out.push(emitted),
        }
    }

    out.join("\n")
}

/// Stream variant of [`postprocess`]: read formatted text from `input`,
/// write the transformed text to `output`
///
/// The whole input is materialized before any output is produced, so a
/// failure mid-read never emits a partial file.
pub fn postprocess_file<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    style: &Style,
) -> Result<()> {
    let mut src = String::new();
    input.read_to_string(&mut src)?;
    output.write_all(postprocess(&src, style).as_bytes())?;
    Ok(())
}
