pub mod components;
pub mod tabs;

use contracts::shared::tabs::{TabError, TabsConfig};
use wasm_bindgen::prelude::*;

use crate::tabs::TabGroup;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let mounted = tabs::auto_mount();
    log::debug!("tabs ready: {} group(s)", mounted);
}

/// Tab groups mounted from JS. Dropping the handle detaches them.
#[wasm_bindgen]
pub struct TabsHandle {
    groups: Vec<TabGroup>,
}

#[wasm_bindgen]
impl TabsHandle {
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.groups.len()
    }

    /// Select `key` in every group that has a tab for it. Returns the number of
    /// groups that switched.
    pub fn select(&self, key: &str) -> usize {
        let mut switched = 0;
        for group in &self.groups {
            match group.select(key) {
                Ok(()) => switched += 1,
                Err(TabError::NotFound { .. }) => {}
                Err(err) => log::warn!("select `{}`: {}", key, err),
            }
        }
        switched
    }

    /// Target of the active tab in group `index`.
    pub fn active(&self, index: usize) -> Option<String> {
        self.groups.get(index)?.active_target()
    }
}

/// Mount every element matching `selector` as an independent tab group.
///
/// `config` is an optional object with camelCase overrides of the class and
/// attribute names (see `TabsConfig`).
#[wasm_bindgen]
pub fn mount_tabs(selector: &str, config: JsValue) -> Result<TabsHandle, JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        TabsConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?
    };
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let groups = tabs::mount_groups(selector, &config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(TabsHandle { groups })
}
