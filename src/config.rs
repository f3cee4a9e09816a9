//! Site configuration module.
//!
//! Handles loading, merging, and validating the `config.toml` found in
//! the content root. User files are sparse overlays on stock defaults:
//! specify only the values you want to change, unknown keys are rejected
//! to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Documentation"
//! description = ""
//!
//! [docs]
//! route_prefix = "/docs/"   # Prepended to every sidebar link
//! dump_tree = false         # Print the computed sidebar tree on build
//!
//! [head]
//! # icon = "/icon.png"           # Favicon <link> injection
//! # analytics_id = "G-XXXXXXX"   # Analytics <script> pair injection
//!
//! [theme]
//! outline_depth = 3         # Heading depth shown in the page outline
//! search = "local"          # Search provider: "local" or "none"
//! # logo = "/logo.png"
//! # footer = "Released under the MIT License."
//! # edit_link = "https://github.com/sople/docs/edit/main/:path"
//!
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//!
//! # [[theme.social]]
//! # icon = "github"
//! # link = "https://github.com/sople"
//! ```
//!
//! ## Passthrough
//!
//! The framework accepts many more fields than this tool produces.
//! `[extra]` and `[theme.extra]` tables are forwarded verbatim into the
//! emitted object without validation — they belong to the framework,
//! not to us.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults; user files only override. Unknown keys are
/// rejected, except inside the free-form `extra` tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title shown in the header and the browser tab.
    pub title: String,
    /// Site description (meta tag).
    pub description: String,
    /// Sidebar construction settings.
    pub docs: DocsConfig,
    /// Head injections (favicon, analytics).
    pub head: HeadConfig,
    /// Theme options passed to the framework.
    pub theme: ThemeConfig,
    /// Free-form table merged into the root of the emitted object.
    pub extra: Option<toml::value::Table>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: String::new(),
            docs: DocsConfig::default(),
            head: HeadConfig::default(),
            theme: ThemeConfig::default(),
            extra: None,
        }
    }
}

fn default_title() -> String {
    "Documentation".to_string()
}

/// Sidebar construction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsConfig {
    /// Fixed documentation-root prefix prepended to every page link and
    /// route-namespace key. Must start and end with `/`.
    pub route_prefix: String,
    /// Print the computed sidebar tree to stdout during `build`.
    pub dump_tree: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            route_prefix: "/docs/".to_string(),
            dump_tree: false,
        }
    }
}

/// Head injections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeadConfig {
    /// Favicon href; emitted as a `<link rel="icon">` entry.
    pub icon: Option<String>,
    /// Measurement id; emitted as the usual pair of `<script>` entries.
    pub analytics_id: Option<String>,
}

/// Theme options owned by this tool. Everything else the theme accepts
/// goes through `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Header logo href.
    pub logo: Option<String>,
    /// Navigation bar entries.
    pub nav: Vec<NavEntry>,
    /// Heading depth rendered in the page outline (1-6).
    pub outline_depth: u8,
    /// Search provider selector: "local" or "none".
    pub search: String,
    /// Social icon links.
    pub social: Vec<SocialLink>,
    /// Edit-link URL pattern with a `:path` placeholder.
    pub edit_link: Option<String>,
    /// Footer message.
    pub footer: Option<String>,
    /// Free-form table merged into the emitted theme object.
    pub extra: Option<toml::value::Table>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            logo: None,
            nav: vec![NavEntry {
                text: "Home".to_string(),
                link: "/".to_string(),
            }],
            outline_depth: 3,
            search: "local".to_string(),
            social: Vec::new(),
            edit_link: None,
            footer: None,
            extra: None,
        }
    }
}

/// One navigation bar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavEntry {
    pub text: String,
    pub link: String,
}

/// One social icon link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// Icon name the theme understands ("github", "x", ...).
    pub icon: String,
    pub link: String,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        let prefix = &self.docs.route_prefix;
        if !prefix.starts_with('/') || !prefix.ends_with('/') {
            return Err(ConfigError::Validation(
                "docs.route_prefix must start and end with '/'".into(),
            ));
        }
        if !(1..=6).contains(&self.theme.outline_depth) {
            return Err(ConfigError::Validation(
                "theme.outline_depth must be 1-6".into(),
            ));
        }
        if self.theme.search != "local" && self.theme.search != "none" {
            return Err(ConfigError::Validation(format!(
                "theme.search must be \"local\" or \"none\", got \"{}\"",
                self.theme.search
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// The canonical representation of all default values, used as the base
/// layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the content root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# docside configuration
# =====================
# Place this file in your content root (next to your markdown sections).
# All settings are optional; values shown are the defaults. Each file
# only needs the keys it wants to override. Unknown keys are an error.

# Site identity
title = "Documentation"
description = ""

# ---------------------------------------------------------------------------
# Sidebar construction
# ---------------------------------------------------------------------------
[docs]
# Prefix for every sidebar link and route-namespace key.
# A file at <root>/javascript/variables.md links as
# "/docs/javascript/variables.md" with the default prefix.
route_prefix = "/docs/"

# Print the computed sidebar tree to stdout during `build`
# (`docside tree` prints it on demand regardless).
dump_tree = false

# ---------------------------------------------------------------------------
# Head injections
# ---------------------------------------------------------------------------
[head]
# Favicon, emitted as a <link rel="icon"> tag.
# icon = "/icon.png"

# Analytics measurement id, emitted as the usual <script> pair.
# analytics_id = "G-XXXXXXX"

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
# Heading depth shown in the page outline (1-6).
outline_depth = 3

# Search provider: "local" or "none".
search = "local"

# Header logo.
# logo = "/logo.png"

# Footer message.
# footer = "Released under the MIT License."

# Edit-link pattern; ":path" is replaced by the page's source path.
# edit_link = "https://github.com/sople/docs/edit/main/:path"

# Navigation bar entries, in order.
[[theme.nav]]
text = "Home"
link = "/"

# Social icon links.
# [[theme.social]]
# icon = "github"
# link = "https://github.com/sople"

# ---------------------------------------------------------------------------
# Passthrough
# ---------------------------------------------------------------------------
# Anything the framework accepts that docside doesn't own can be written
# under [extra] (root of the emitted object) or [theme.extra] (theme
# object). These tables are forwarded verbatim, unvalidated.
# [theme.extra]
# sidebarMenuLabel = "Menu"
"#
}
