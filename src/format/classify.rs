//! Textual line classification.
//!
//! Classification works on line shape only (prefix and suffix predicates);
//! directive-like text inside string or comment literals is intentionally
//! not recognized. That can misclassify pathological input, which is an
//! accepted limitation of operating downstream of a real formatter.

/// Kind of preprocessor directive, judged by the keyword after `#`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `#if`, `#ifdef`, `#ifndef` - opens a conditional block
    If,
    /// `#else`, `#elif` - switches branch within a block
    Else,
    /// `#endif` - closes a conditional block
    End,
    /// `#define`, `#include`, `#pragma`, ...
    Other,
}

/// Check whether a line is a preprocessor directive
/// (first non-whitespace character is `#`)
#[must_use]
pub fn is_directive(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// The directive body: text after `#` with the gap between `#` and the
/// keyword removed
///
/// Re-running the indenter must not stack indentation, so spaces inserted
/// by an earlier pass are not part of the body.
#[must_use]
pub fn directive_body(line: &str) -> &str {
    let trimmed = line.trim_start();
    trimmed.strip_prefix('#').unwrap_or(trimmed).trim_start()
}

/// Classify a directive body by keyword prefix
///
/// Prefix matching is deliberate: `end`, `el` and `if` cover `#endif`,
/// `#else`, `#elif`, `#ifdef` and `#ifndef` without enumerating them.
#[must_use]
pub fn classify_directive(body: &str) -> DirectiveKind {
    if body.starts_with("end") {
        DirectiveKind::End
    } else if body.starts_with("el") {
        DirectiveKind::Else
    } else if body.starts_with("if") {
        DirectiveKind::If
    } else {
        DirectiveKind::Other
    }
}

/// Include-guard heuristic: an `#ifndef` whose guard symbol follows the
/// `FOO_H` / `FOO_H_` naming convention wraps the whole file and must not
/// contribute indentation to its contents
///
/// Checked by suffix only. Guards using other naming conventions are not
/// recognized, and unrelated symbols ending in `_H` are; both are accepted
/// approximations inherited from the house style.
#[must_use]
pub fn is_include_guard(body: &str, line: &str) -> bool {
    body.starts_with("ifndef") && (line.ends_with("_H") || line.ends_with("H_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_directive() {
        assert!(is_directive("#include <stdio.h>"));
        assert!(is_directive("  #define X 1"));
        assert!(is_directive("#"));
        assert!(!is_directive("int x = 1;"));
        assert!(!is_directive("// #if 0"));
        assert!(!is_directive(""));
    }

    #[test]
    fn test_directive_body_strips_indent() {
        assert_eq!(directive_body("#define X 1"), "define X 1");
        assert_eq!(directive_body("#  define X 1"), "define X 1");
        assert_eq!(directive_body("  #endif"), "endif");
        assert_eq!(directive_body("#"), "");
    }

    #[test]
    fn test_classify_if_family() {
        assert_eq!(classify_directive("if defined(FOO)"), DirectiveKind::If);
        assert_eq!(classify_directive("ifdef FOO"), DirectiveKind::If);
        assert_eq!(classify_directive("ifndef FOO"), DirectiveKind::If);
    }

    #[test]
    fn test_classify_else_family() {
        assert_eq!(classify_directive("else"), DirectiveKind::Else);
        assert_eq!(classify_directive("elif FOO > 1"), DirectiveKind::Else);
    }

    #[test]
    fn test_classify_end() {
        assert_eq!(classify_directive("endif"), DirectiveKind::End);
        assert_eq!(classify_directive("endif  // FOO"), DirectiveKind::End);
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(classify_directive("define X 1"), DirectiveKind::Other);
        assert_eq!(classify_directive("include <stdio.h>"), DirectiveKind::Other);
        assert_eq!(classify_directive("pragma once"), DirectiveKind::Other);
        assert_eq!(classify_directive("error \"unsupported\""), DirectiveKind::Other);
        assert_eq!(classify_directive(""), DirectiveKind::Other);
    }

    #[test]
    fn test_include_guard() {
        assert!(is_include_guard("ifndef UTIL_H", "#ifndef UTIL_H"));
        assert!(is_include_guard("ifndef UTIL_H_", "#ifndef UTIL_H_"));
        assert!(!is_include_guard("ifndef DEBUG", "#ifndef DEBUG"));
        // Only ifndef qualifies, whatever the symbol looks like
        assert!(!is_include_guard("ifdef UTIL_H", "#ifdef UTIL_H"));
    }
}
