//! `MacroIndenter` - nesting-depth tracker for preprocessor conditionals
//!
//! clang-format leaves every directive in column zero. This pass re-renders
//! directive lines as `#` followed by two spaces per open conditional
//! block, so nested `#if`/`#endif` regions read like indented code:
//!
//! ```text
//! #if defined(__linux__)
//! #  include <sys/mman.h>
//! #  if defined(MAP_HUGETLB)
//! #    define USE_HUGEPAGES 1
//! #  endif
//! #endif
//! ```

use crate::format::classify::{classify_directive, directive_body, is_include_guard, DirectiveKind};

/// Spaces per nesting level
const INDENT_UNIT: usize = 2;

/// Tracks how many conditional blocks are open and renders directive lines
/// at the matching depth.
///
/// Depth is the only state carried across lines. Decrements are clamped at
/// zero, so an unmatched `#endif` degrades to best-effort output instead of
/// failing the pass.
#[derive(Debug)]
pub struct MacroIndenter {
    depth: usize,
    column_limit: usize,
}

impl MacroIndenter {
    #[must_use]
    pub fn new(column_limit: usize) -> Self {
        Self {
            depth: 0,
            column_limit,
        }
    }

    /// Current nesting depth (number of open conditional blocks)
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Re-indent one directive line, updating the depth for the lines that
    /// follow
    ///
    /// The caller is responsible for only passing directive lines (see
    /// [`crate::format::classify::is_directive`]). If the rendered line
    /// would exceed the column limit, the original line is returned
    /// unchanged: indentation is cosmetic, never worth an over-width line.
    #[must_use]
    pub fn process_line(&mut self, line: &str) -> String {
        let body = directive_body(line);
        let level = match classify_directive(body) {
            DirectiveKind::End => {
                if self.depth > 0 {
                    self.depth -= 1;
                }
                // endif sits at the depth of the block it closes
                self.depth
            }
            DirectiveKind::Else => self.depth.saturating_sub(1),
            DirectiveKind::If => {
                let level = self.depth;
                if !is_include_guard(body, line) {
                    self.depth += 1;
                }
                level
            }
            DirectiveKind::Other => self.depth,
        };

        let indent = level * INDENT_UNIT;
        let mut rendered = String::with_capacity(1 + indent + body.len());
        rendered.push('#');
        for _ in 0..indent {
            rendered.push(' ');
        }
        rendered.push_str(body);

        if level != 0 && rendered.ends_with('\\') {
            rendered = trim_before_continuation(rendered, line.chars().count());
        }

        if rendered.chars().count() <= self.column_limit {
            rendered
        } else {
            line.to_string()
        }
    }
}

/// Pull the continuation marker back over the whitespace in front of it,
/// until either no whitespace remains or the line returns to its original
/// length. Keeps continued macro bodies aligned instead of drifting right
/// on every pass.
fn trim_before_continuation(mut rendered: String, original_len: usize) -> String {
    rendered.pop(); // the trailing backslash
    let mut len = rendered.chars().count();
    while len + 1 != original_len && rendered.ends_with(|c: char| c.is_whitespace()) {
        rendered.pop();
        len -= 1;
    }
    rendered.push('\\');
    rendered
}
