//! Sidebar tree construction.
//!
//! Walks the content directory and mirrors it as a navigation tree:
//! directories become collapsible groups, markdown files become page
//! entries titled from their filename stem. This is the behavioral core
//! of the tool — everything else is configuration plumbing around it.
//!
//! ## Directory structure
//!
//! ```text
//! docs/                            # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── getting_started.md           # Top-level page
//! ├── javascript/                  # Section (directory = sidebar group)
//! │   ├── index.md                 # "Introduction" entry
//! │   ├── variables.md             # "Variables" entry
//! │   └── control_flow_statements.md
//! └── css/
//!     └── selectors.md
//! ```
//!
//! ## Traversal rules
//!
//! - Each directory listing is sorted lexicographically before use, so
//!   the produced tree is identical across runs and platforms.
//! - Entries whose names start with `.` are skipped.
//! - Files that are not markdown are skipped; they are content assets,
//!   not pages.
//! - An unreadable directory aborts the build. A sidebar with silently
//!   missing sections is worse than a failed build.
//!
//! ## Route keys
//!
//! The host framework picks the sidebar subtree for the active route by
//! longest-prefix match on a key like `/docs/javascript/`. [`sidebar_map`]
//! derives those keys from the top-level groups. Keys are lowercased
//! (routes are lowercase); two directories whose names differ only in
//! case therefore collide, and the later one shadows the earlier. The
//! collision is reported alongside the map so callers can warn.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::titles::page_title;
use crate::types::{SidebarGroup, SidebarItem, SidebarPage};

/// Extension pages link with, whatever case the source file used.
const MD_EXTENSION: &str = ".md";

#[derive(Error, Debug)]
pub enum SidebarError {
    #[error("failed to read content directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Build the full sidebar tree for a content root.
///
/// Thin wrapper over [`build_tree`] with an empty relative base.
pub fn build(root: &Path, route_prefix: &str) -> Result<Vec<SidebarItem>, SidebarError> {
    build_tree(root, route_prefix, "")
}

/// Recursively convert one directory level into sidebar nodes.
///
/// `relative_base` is the path accumulated from the content root, either
/// empty or `/`-terminated (e.g. `"javascript/"`). Every page link is
/// `route_prefix + relative_base + stem + ".md"` — the framework resolves
/// rendered routes from source paths, so links keep the extension.
pub fn build_tree(
    dir: &Path,
    route_prefix: &str,
    relative_base: &str,
) -> Result<Vec<SidebarItem>, SidebarError> {
    let mut items = Vec::new();

    for entry in list_entries(dir)? {
        let Some(name) = entry.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };

        if entry.is_dir() {
            let child_base = format!("{relative_base}{name}/");
            let children = build_tree(&entry, route_prefix, &child_base)?;
            items.push(SidebarItem::Group(SidebarGroup {
                text: name,
                collapsed: true,
                items: children,
            }));
        } else if let Some(stem) = markdown_stem(&name) {
            items.push(SidebarItem::Page(SidebarPage {
                text: page_title(stem),
                link: format!("{route_prefix}{relative_base}{stem}{MD_EXTENSION}"),
            }));
        }
        // Anything else (assets, config.toml, sidecar files) is not a page.
    }

    Ok(items)
}

/// List a directory's entries, sorted, with `.`-prefixed names dropped.
fn list_entries(dir: &Path) -> Result<Vec<PathBuf>, SidebarError> {
    let read_dir = fs::read_dir(dir).map_err(|source| SidebarError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries: Vec<PathBuf> = read_dir
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .map(|n| !n.to_string_lossy().starts_with('.'))
                .unwrap_or(false)
        })
        .collect();

    entries.sort();
    Ok(entries)
}

/// Return the stem of a markdown filename, or `None` for anything else.
fn markdown_stem(name: &str) -> Option<&str> {
    let path = Path::new(name);
    let is_md = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("md"))
        .unwrap_or(false);
    if is_md {
        path.file_stem().and_then(|s| s.to_str())
    } else {
        None
    }
}

/// Route-namespace key for a top-level section name.
///
/// `("/docs/", "JavaScript")` → `"/docs/javascript/"`. Lowercasing is the
/// only normalization; it matches how the site's routes are written.
pub fn route_key(route_prefix: &str, name: &str) -> String {
    format!("{route_prefix}{}/", name.to_lowercase())
}

/// A route key claimed by two top-level sections.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyCollision {
    pub key: String,
    /// Section that survives in the map (the later listing entry).
    pub kept: String,
    /// Section that was shadowed.
    pub shadowed: String,
}

/// The route-key → subtree mapping consumed by the framework, plus any
/// collisions met while building it.
#[derive(Debug, Default)]
pub struct RouteKeyMap {
    pub entries: BTreeMap<String, SidebarItem>,
    pub collisions: Vec<KeyCollision>,
}

/// Map each top-level group to its route-namespace key.
///
/// Top-level pages carry no namespace and are skipped. On a key
/// collision the later group wins (last write) and the collision is
/// recorded for the caller to report.
pub fn sidebar_map(items: &[SidebarItem], route_prefix: &str) -> RouteKeyMap {
    let mut map = RouteKeyMap::default();

    for item in items {
        let SidebarItem::Group(group) = item else {
            continue;
        };
        let key = route_key(route_prefix, &group.text);
        if let Some(previous) = map.entries.insert(key.clone(), item.clone()) {
            map.collisions.push(KeyCollision {
                key,
                kept: group.text.clone(),
                shadowed: previous.text().to_string(),
            });
        }
    }

    map
}
