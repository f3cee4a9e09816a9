//! # docside
//!
//! Sidebar and site-config generator for markdown documentation sites.
//! Your filesystem is the data source: directories become collapsible
//! sidebar sections, markdown files become pages titled from their
//! filenames, and a `config.toml` of declarative site metadata is merged
//! around the computed navigation.
//!
//! The output is the configuration object a VitePress-style framework
//! consumes, written as JSON. The framework side is a one-line shim that
//! imports the file; docside owns everything that can be derived or
//! declared ahead of time.
//!
//! # Pipeline
//!
//! ```text
//! 1. Load     content/config.toml  →  SiteConfig   (defaults + overlay)
//! 2. Build    content/             →  sidebar tree + route-key map
//! 3. Generate SiteConfig + map     →  site-config.json
//! ```
//!
//! Each step is a pure function over its inputs; the tree is rebuilt
//! fresh on every run, there is no cache and no persisted state. A build
//! that cannot read the content directory fails outright — a site with a
//! silently incomplete sidebar is worse than no site.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`sidebar`] | Walks the content directory into the sidebar tree and derives route-namespace keys |
//! | [`titles`] | `snake_case` filename → display title transform (`index` → "Introduction") |
//! | [`config`] | `config.toml` loading, stock defaults, overlay merge, validation |
//! | [`generate`] | Assembles and writes the framework configuration object |
//! | [`types`] | Sidebar node types serialized into the artifact (`SidebarItem`) |
//! | [`output`] | CLI output formatting — tree dump, build summary, collision warnings |
//!
//! # Design Decisions
//!
//! ## Deterministic traversal
//!
//! Directory listings are sorted before use. The filesystem's native
//! order is platform-dependent; a sidebar that reorders itself between
//! machines makes diffs of the artifact useless.
//!
//! ## Links keep the markdown extension
//!
//! Page links are source paths (`/docs/javascript/variables.md`), not
//! rendered routes. The framework maps source paths to routes itself;
//! emitting its input avoids duplicating that logic here.
//!
//! ## Collisions warn, they don't fail
//!
//! Two top-level sections can normalize to the same route key (names
//! differing only in case). The later one wins and the build prints a
//! warning naming both sections. Failing the build would turn a cosmetic
//! degradation into an outage.
//!
//! ## Explicit diagnostics
//!
//! The computed tree is printed only on request — [`output::print_tree`]
//! behind the `tree` subcommand or the `docs.dump_tree` flag — never as
//! a side effect of loading.

pub mod config;
pub mod generate;
pub mod output;
pub mod sidebar;
pub mod titles;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
