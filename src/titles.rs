//! Display-title derivation from the underscore filename convention.
//!
//! Documentation source files use underscores between words, e.g.
//! `control_flow_statements.md`. The sidebar shows a human title derived
//! from the stem (extension already stripped). This module is the single
//! place that transform lives; the sidebar builder and nothing else should
//! re-derive titles.
//!
//! ## Transform
//!
//! Split on `_`, then per word:
//! - `index` (any case) becomes `Introduction` — index files are the
//!   landing page of their folder
//! - anything else gets its first character uppercased, rest untouched
//!
//! Words are rejoined with single spaces:
//! - `control_flow_statements` → "Control Flow Statements"
//! - `index` → "Introduction"
//! - `oop` → "Oop" (no acronym detection; rename the file if that grates)

/// Word that maps to the landing-page title regardless of case.
const INDEX_STEM: &str = "index";

/// Derive a display title from a filename stem.
///
/// Empty words from doubled or trailing underscores are dropped rather
/// than producing runs of spaces. Stems with characters outside the
/// `[A-Za-z0-9_]` convention are passed through word-by-word unchanged
/// apart from the leading capital.
pub fn page_title(stem: &str) -> String {
    stem.split('_')
        .filter(|word| !word.is_empty())
        .map(title_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Transform a single word: `index` → `Introduction`, else capitalize
/// the first character only.
fn title_word(word: &str) -> String {
    if word.eq_ignore_ascii_case(INDEX_STEM) {
        return "Introduction".to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
