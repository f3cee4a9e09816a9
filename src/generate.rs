//! Final artifact assembly.
//!
//! Takes the loaded [`SiteConfig`](crate::config::SiteConfig) and the
//! computed sidebar map and produces the configuration object the
//! site-generation framework consumes, as pretty-printed JSON. The
//! framework side is a one-line shim that imports the file; every field
//! name here matches what it expects (`themeConfig`, `socialLinks`, ...).
//!
//! Optional fields that are unset are omitted from the JSON rather than
//! emitted as null — the framework treats "absent" and "null" differently
//! for some options, and absent is always safe.
//!
//! Passthrough: `[extra]` keys land at the root of the object and
//! `[theme.extra]` keys inside `themeConfig`. Keys docside owns win over
//! passthrough keys of the same name.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::config::{HeadConfig, SiteConfig};
use crate::types::SidebarItem;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Assemble the framework configuration object.
pub fn framework_config(
    site: &SiteConfig,
    sidebar: &BTreeMap<String, SidebarItem>,
) -> Result<Value, GenerateError> {
    let mut root = Map::new();
    root.insert("title".into(), json!(site.title));
    root.insert("description".into(), json!(site.description));

    let head = head_entries(&site.head);
    if !head.is_empty() {
        root.insert("head".into(), Value::Array(head));
    }

    root.insert(
        "themeConfig".into(),
        Value::Object(theme_config(site, sidebar)?),
    );

    if let Some(extra) = &site.extra {
        merge_passthrough(&mut root, extra)?;
    }

    Ok(Value::Object(root))
}

/// Build the `themeConfig` object.
fn theme_config(
    site: &SiteConfig,
    sidebar: &BTreeMap<String, SidebarItem>,
) -> Result<Map<String, Value>, GenerateError> {
    let theme = &site.theme;
    let mut out = Map::new();

    if let Some(logo) = &theme.logo {
        out.insert("logo".into(), json!(logo));
    }
    out.insert("nav".into(), serde_json::to_value(&theme.nav)?);
    out.insert("sidebar".into(), serde_json::to_value(sidebar)?);
    out.insert("outline".into(), json!(theme.outline_depth));
    if theme.search == "local" {
        out.insert("search".into(), json!({ "provider": "local" }));
    }
    if !theme.social.is_empty() {
        out.insert("socialLinks".into(), serde_json::to_value(&theme.social)?);
    }
    if let Some(pattern) = &theme.edit_link {
        out.insert("editLink".into(), json!({ "pattern": pattern }));
    }
    if let Some(message) = &theme.footer {
        out.insert("footer".into(), json!({ "message": message }));
    }

    if let Some(extra) = &theme.extra {
        merge_passthrough(&mut out, extra)?;
    }

    Ok(out)
}

/// Expand head settings into the framework's head-injection tuples.
///
/// ```json
/// [["link", {"rel": "icon", "href": "/icon.png"}],
///  ["script", {"async": "", "src": "https://.../js?id=G-X"}],
///  ["script", {}, "window.dataLayer = ..."]]
/// ```
fn head_entries(head: &HeadConfig) -> Vec<Value> {
    let mut entries = Vec::new();

    if let Some(icon) = &head.icon {
        entries.push(json!(["link", { "rel": "icon", "href": icon }]));
    }

    if let Some(id) = &head.analytics_id {
        entries.push(json!([
            "script",
            {
                "async": "",
                "src": format!("https://www.googletagmanager.com/gtag/js?id={id}")
            }
        ]));
        entries.push(json!([
            "script",
            {},
            format!(
                "window.dataLayer = window.dataLayer || [];\n\
                 function gtag(){{dataLayer.push(arguments);}}\n\
                 gtag('js', new Date());\n\
                 gtag('config', '{id}');"
            )
        ]));
    }

    entries
}

/// Copy passthrough keys into `target`, never overwriting owned keys.
fn merge_passthrough(
    target: &mut Map<String, Value>,
    extra: &toml::value::Table,
) -> Result<(), GenerateError> {
    for (key, value) in extra {
        if !target.contains_key(key) {
            target.insert(key.clone(), serde_json::to_value(value)?);
        }
    }
    Ok(())
}

/// Write the configuration object as pretty JSON with a trailing newline.
pub fn write_config(value: &Value, path: &Path) -> Result<(), GenerateError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}
