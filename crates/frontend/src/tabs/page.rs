//! Finding tab groups on the page.
//!
//! A page either marks each group root with `data-tab-group`, or has no
//! markers at all, in which case the whole document is one group.
//! A group root may carry a `data-tabs` attribute with JSON overrides for its
//! class and attribute names, e.g. `data-tabs='{"hoverClass":"lit"}'`.

use contracts::shared::tabs::{TabError, TabsConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::dom::js_error;
use super::group::TabGroup;

pub const GROUP_SELECTOR: &str = "[data-tab-group]";
pub const GROUP_CONFIG_ATTRIBUTE: &str = "data-tabs";

fn document() -> Result<Document, TabError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| TabError::Dom("no document".to_string()))
}

/// Mount the whole document as a single group.
pub fn mount_document(config: TabsConfig) -> Result<TabGroup, TabError> {
    let root = document()?
        .document_element()
        .ok_or_else(|| TabError::Dom("document has no root element".to_string()))?;
    TabGroup::mount(&root, config, None)
}

/// Mount one group per element matching `selector`.
///
/// A group that fails to mount is logged and skipped, the others still mount.
pub fn mount_groups(selector: &str, config: &TabsConfig) -> Result<Vec<TabGroup>, TabError> {
    let roots = document()?.query_selector_all(selector).map_err(js_error)?;

    let mut groups = Vec::new();
    for i in 0..roots.length() {
        let Some(root) = roots.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };

        let mounted = resolve_config(config, root.get_attribute(GROUP_CONFIG_ATTRIBUTE).as_deref())
            .and_then(|group_config| TabGroup::mount(&root, group_config, Some(selector)));
        match mounted {
            Ok(group) => groups.push(group),
            Err(err) => log::warn!("tab group {} ({}) not mounted: {}", i, selector, err),
        }
    }

    log::info!(
        "mounted {} of {} tab groups matching {}",
        groups.len(),
        roots.length(),
        selector
    );
    Ok(groups)
}

/// Config for one group: `base`, with the root's JSON overrides applied if any.
pub fn resolve_config(base: &TabsConfig, overrides: Option<&str>) -> Result<TabsConfig, TabError> {
    match overrides.map(str::trim) {
        Some(json) if !json.is_empty() => base.with_overrides(json),
        _ => Ok(base.clone()),
    }
}

/// Mount whatever the page contains and keep it mounted. Returns the number of
/// groups mounted.
pub fn auto_mount() -> usize {
    let config = TabsConfig::default();

    let has_markers = document()
        .ok()
        .and_then(|d| d.query_selector(GROUP_SELECTOR).ok().flatten())
        .is_some();

    if has_markers {
        return match mount_groups(GROUP_SELECTOR, &config) {
            Ok(groups) => {
                let count = groups.len();
                groups.into_iter().for_each(TabGroup::forget);
                count
            }
            Err(err) => {
                log::error!("failed to mount tab groups: {}", err);
                0
            }
        };
    }

    match mount_document(config) {
        Ok(group) => {
            group.forget();
            1
        }
        // A page without tabs is not an error
        Err(TabError::NoDefaultTab) => {
            log::debug!("no default tab on the page, nothing to mount");
            0
        }
        Err(err) => {
            log::warn!("document tab group not mounted: {}", err);
            0
        }
    }
}
