//! CLI output formatting.
//!
//! The sidebar dump is an explicit call, never a load-time side effect:
//! `format_tree` renders the tree, callers decide when to print it (the
//! `tree` subcommand, or `build` with the `dump_tree` flag).
//!
//! Each concern has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes it out. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## Tree format
//!
//! ```text
//! javascript/ (3 pages)
//!     Introduction → /docs/javascript/index.md
//!     Variables → /docs/javascript/variables.md
//!     Control Flow Statements → /docs/javascript/control_flow_statements.md
//! About → /docs/about.md
//! ```

use std::path::Path;

use crate::sidebar::KeyCollision;
use crate::types::SidebarItem;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Pluralize a page count: `1 page`, `4 pages`.
fn page_count_label(count: usize) -> String {
    if count == 1 {
        "1 page".to_string()
    } else {
        format!("{count} pages")
    }
}

// ============================================================================
// Sidebar tree
// ============================================================================

/// Format the computed sidebar tree, one line per node.
pub fn format_tree(items: &[SidebarItem]) -> Vec<String> {
    let mut lines = Vec::new();
    format_tree_level(items, 0, &mut lines);
    lines
}

fn format_tree_level(items: &[SidebarItem], depth: usize, lines: &mut Vec<String>) {
    for item in items {
        match item {
            SidebarItem::Group(group) => {
                lines.push(format!(
                    "{}{}/ ({})",
                    indent(depth),
                    group.text,
                    page_count_label(item.page_count())
                ));
                format_tree_level(&group.items, depth + 1, lines);
            }
            SidebarItem::Page(page) => {
                lines.push(format!(
                    "{}{} \u{2192} {}",
                    indent(depth),
                    page.text,
                    page.link
                ));
            }
        }
    }
}

/// Print the sidebar tree to stdout.
pub fn print_tree(items: &[SidebarItem]) {
    for line in format_tree(items) {
        println!("{line}");
    }
}

// ============================================================================
// Build summary
// ============================================================================

/// Format the one-line build summary.
///
/// ```text
/// Generated 2 sections, 13 pages → site-config.json
/// ```
pub fn format_build_summary(items: &[SidebarItem], output: &Path) -> String {
    let sections = items.iter().filter(|i| i.is_group()).count();
    let pages: usize = items.iter().map(SidebarItem::page_count).sum();
    format!(
        "Generated {} sections, {} \u{2192} {}",
        sections,
        page_count_label(pages),
        output.display()
    )
}

// ============================================================================
// Route-key collisions
// ============================================================================

/// Format route-key collision warnings, one line per collision.
pub fn format_collisions(collisions: &[KeyCollision]) -> Vec<String> {
    collisions
        .iter()
        .map(|c| {
            format!(
                "warning: sidebar sections \"{}\" and \"{}\" share the route key \"{}\"; \"{}\" wins",
                c.shadowed, c.kept, c.key, c.kept
            )
        })
        .collect()
}

/// Print collision warnings to stderr.
pub fn print_collisions(collisions: &[KeyCollision]) {
    for line in format_collisions(collisions) {
        eprintln!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SidebarGroup, SidebarPage};
    use std::path::PathBuf;

    fn page(text: &str, link: &str) -> SidebarItem {
        SidebarItem::Page(SidebarPage {
            text: text.to_string(),
            link: link.to_string(),
        })
    }

    fn group(text: &str, items: Vec<SidebarItem>) -> SidebarItem {
        SidebarItem::Group(SidebarGroup {
            text: text.to_string(),
            collapsed: true,
            items,
        })
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(1), "    ");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn page_count_label_pluralizes() {
        assert_eq!(page_count_label(1), "1 page");
        assert_eq!(page_count_label(0), "0 pages");
        assert_eq!(page_count_label(4), "4 pages");
    }

    #[test]
    fn format_tree_empty() {
        assert!(format_tree(&[]).is_empty());
    }

    #[test]
    fn format_tree_top_level_page() {
        let lines = format_tree(&[page("About", "/docs/about.md")]);
        assert_eq!(lines, vec!["About \u{2192} /docs/about.md"]);
    }

    #[test]
    fn format_tree_group_with_children() {
        let lines = format_tree(&[group(
            "javascript",
            vec![
                page("Introduction", "/docs/javascript/index.md"),
                page("Variables", "/docs/javascript/variables.md"),
            ],
        )]);
        assert_eq!(lines[0], "javascript/ (2 pages)");
        assert_eq!(lines[1], "    Introduction \u{2192} /docs/javascript/index.md");
        assert_eq!(lines[2], "    Variables \u{2192} /docs/javascript/variables.md");
    }

    #[test]
    fn format_tree_nested_groups_indent_deeper() {
        let lines = format_tree(&[group(
            "guide",
            vec![group("advanced", vec![page("Tuning", "/docs/guide/advanced/tuning.md")])],
        )]);
        assert_eq!(lines[0], "guide/ (1 page)");
        assert_eq!(lines[1], "    advanced/ (1 page)");
        assert_eq!(
            lines[2],
            "        Tuning \u{2192} /docs/guide/advanced/tuning.md"
        );
    }

    #[test]
    fn build_summary_counts_sections_and_pages() {
        let items = vec![
            group("javascript", vec![page("A", "/docs/javascript/a.md")]),
            group("css", vec![page("B", "/docs/css/b.md")]),
            page("About", "/docs/about.md"),
        ];
        let summary = format_build_summary(&items, &PathBuf::from("site-config.json"));
        assert_eq!(summary, "Generated 2 sections, 3 pages \u{2192} site-config.json");
    }

    #[test]
    fn collision_warning_names_both_sections() {
        let collisions = vec![KeyCollision {
            key: "/docs/javascript/".to_string(),
            kept: "javascript".to_string(),
            shadowed: "JavaScript".to_string(),
        }];
        let lines = format_collisions(&collisions);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("/docs/javascript/"));
        assert!(lines[0].contains("\"JavaScript\""));
        assert!(lines[0].contains("\"javascript\" wins"));
    }

    #[test]
    fn no_collisions_no_lines() {
        assert!(format_collisions(&[]).is_empty());
    }
}
