//! House-style transformations applied on top of clang-format output.
//!
//! This module contains the core post-processing logic organized into submodules:
//! - [`classify`]: Textual line classification (directive detection and kinds)
//! - [`indenter`]: Nesting-depth tracking and re-indentation of preprocessor conditionals
//! - [`aligner`]: Right-alignment of short trailing block comments
//! - [`spacer`]: Blank-line padding around block boundaries

pub mod aligner;
pub mod classify;
pub mod indenter;
pub mod spacer;

pub use aligner::align_trailing_comment;
pub use classify::{classify_directive, directive_body, is_directive, DirectiveKind};
pub use indenter::MacroIndenter;
pub use spacer::{brace_padding, BracePad};
