//! Sidebar node types shared between the builder, the emitter and the
//! CLI output.
//!
//! These serialize to the exact shape the site-generation framework
//! expects, so the JSON artifact can be fed to it without a mapping
//! layer on the other side:
//!
//! ```json
//! {"text": "javascript", "collapsed": true, "items": [
//!     {"text": "Variables", "link": "/docs/javascript/variables.md"}
//! ]}
//! ```

use serde::{Deserialize, Serialize};

/// One node of the sidebar tree: a collapsible folder group or a page leaf.
///
/// Untagged — groups and pages are told apart by their fields (`items`
/// vs `link`), matching the framework's duck-typed sidebar entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarItem {
    Group(SidebarGroup),
    Page(SidebarPage),
}

/// A folder: collapsible navigation group named after the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Display name — the directory's base name, verbatim.
    pub text: String,
    /// Groups start collapsed.
    pub collapsed: bool,
    /// Children in listing order; may be empty for an empty directory.
    pub items: Vec<SidebarItem>,
}

/// A markdown page: leaf entry with a display title and a link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarPage {
    /// Display title derived from the filename stem.
    pub text: String,
    /// Route: prefix + relative directory path + filename (`.md` kept).
    pub link: String,
}

impl SidebarItem {
    /// Display text of the node, whichever variant it is.
    pub fn text(&self) -> &str {
        match self {
            SidebarItem::Group(group) => &group.text,
            SidebarItem::Page(page) => &page.text,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, SidebarItem::Group(_))
    }

    /// Number of page leaves in this subtree.
    pub fn page_count(&self) -> usize {
        match self {
            SidebarItem::Page(_) => 1,
            SidebarItem::Group(group) => group.items.iter().map(SidebarItem::page_count).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(text: &str, link: &str) -> SidebarItem {
        SidebarItem::Page(SidebarPage {
            text: text.to_string(),
            link: link.to_string(),
        })
    }

    #[test]
    fn page_serializes_to_text_and_link() {
        let json = serde_json::to_value(page("Variables", "/docs/js/variables.md")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"text": "Variables", "link": "/docs/js/variables.md"})
        );
    }

    #[test]
    fn group_serializes_with_collapsed_and_items() {
        let group = SidebarItem::Group(SidebarGroup {
            text: "javascript".to_string(),
            collapsed: true,
            items: vec![page("Variables", "/docs/javascript/variables.md")],
        });
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["text"], "javascript");
        assert_eq!(json["collapsed"], true);
        assert_eq!(json["items"][0]["link"], "/docs/javascript/variables.md");
    }

    #[test]
    fn untagged_roundtrip() {
        let group = SidebarItem::Group(SidebarGroup {
            text: "guide".to_string(),
            collapsed: true,
            items: vec![page("Introduction", "/docs/guide/index.md")],
        });
        let json = serde_json::to_string(&group).unwrap();
        let back: SidebarItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, group);
    }

    #[test]
    fn page_count_counts_leaves_recursively() {
        let tree = SidebarItem::Group(SidebarGroup {
            text: "outer".to_string(),
            collapsed: true,
            items: vec![
                page("A", "/docs/outer/a.md"),
                SidebarItem::Group(SidebarGroup {
                    text: "inner".to_string(),
                    collapsed: true,
                    items: vec![page("B", "/docs/outer/inner/b.md")],
                }),
            ],
        });
        assert_eq!(tree.page_count(), 2);
    }

    #[test]
    fn empty_group_counts_zero_pages() {
        let group = SidebarItem::Group(SidebarGroup {
            text: "empty".to_string(),
            collapsed: true,
            items: vec![],
        });
        assert_eq!(group.page_count(), 0);
        assert!(group.is_group());
    }
}
