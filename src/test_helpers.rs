//! Shared test utilities for the docside test suite.
//!
//! Provides a content-tree fixture writer and lookup helpers for sidebar
//! structures, so tests describe trees as path lists instead of repeating
//! `create_dir_all`/`write` boilerplate.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = content_root(&["javascript/index.md", "about.md"]);
//! let tree = sidebar::build(tmp.path(), "/docs/").unwrap();
//!
//! assert_eq!(texts(&tree), vec!["About", "javascript"]);
//! let js = find_group(&tree, "javascript");
//! assert_eq!(js.items.len(), 1);
//! ```

use std::fs;

use tempfile::TempDir;

use crate::types::{SidebarGroup, SidebarItem};

/// Create a temp content root containing the given relative files.
///
/// Parent directories are created as needed; file contents are a stub
/// markdown line (the builder never reads file contents, only names).
pub fn content_root(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for file in files {
        let path = tmp.path().join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "# stub\n").unwrap();
    }
    tmp
}

/// Display texts of a node list, in order.
pub fn texts(items: &[SidebarItem]) -> Vec<String> {
    items.iter().map(|item| item.text().to_string()).collect()
}

/// Find a group by name, panicking with a useful message if absent.
pub fn find_group<'a>(items: &'a [SidebarItem], name: &str) -> &'a SidebarGroup {
    items
        .iter()
        .find_map(|item| match item {
            SidebarItem::Group(group) if group.text == name => Some(group),
            _ => None,
        })
        .unwrap_or_else(|| {
            panic!("no group named {name:?} in {:?}", texts(items));
        })
}
