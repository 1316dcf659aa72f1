//! `TabSurface` over live DOM elements.

use contracts::shared::tabs::{TabError, TabId, TabSurface, TabsConfig};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, Node};

pub struct DomSurface {
    config: TabsConfig,
    buttons: Vec<Element>,
    panels: Vec<HtmlElement>,
}

impl DomSurface {
    /// Collect the buttons and panels under `root`, in document order.
    ///
    /// With `group_selector` set, elements whose nearest enclosing group is
    /// not `root` are left to that nested group.
    pub fn scan(
        root: &Element,
        config: TabsConfig,
        group_selector: Option<&str>,
    ) -> Result<Self, TabError> {
        let buttons = owned_elements(root, &config.button_selector(), group_selector)?;
        let panels = owned_elements(root, &config.panel_selector(), group_selector)?
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect::<Vec<_>>();

        log::debug!(
            "scanned tab group: {} buttons, {} panels",
            buttons.len(),
            panels.len()
        );

        Ok(Self {
            config,
            buttons,
            panels,
        })
    }

    pub fn buttons(&self) -> &[Element] {
        &self.buttons
    }

    pub fn config(&self) -> &TabsConfig {
        &self.config
    }
}

impl TabSurface for DomSurface {
    fn tab_count(&self) -> usize {
        self.buttons.len()
    }

    fn target(&self, tab: TabId) -> Option<String> {
        self.buttons
            .get(tab.0)?
            .get_attribute(&self.config.target_attribute)
    }

    fn is_default(&self, tab: TabId) -> bool {
        self.buttons
            .get(tab.0)
            .is_some_and(|b| b.class_list().contains(&self.config.default_class))
    }

    fn clear_default(&mut self, tab: TabId) {
        if let Some(button) = self.buttons.get(tab.0) {
            if let Err(err) = button.class_list().remove_1(&self.config.default_class) {
                log::warn!("tab {}: cannot remove default class: {:?}", tab, err);
            }
        }
    }

    fn set_hover(&mut self, tab: TabId, hovered: bool) {
        let Some(button) = self.buttons.get(tab.0) else {
            return;
        };
        let classes = button.class_list();
        let result = if hovered {
            classes.add_1(&self.config.hover_class)
        } else {
            classes.remove_1(&self.config.hover_class)
        };
        if let Err(err) = result {
            log::warn!("tab {}: cannot update hover class: {:?}", tab, err);
        }
    }

    fn panel_count(&self) -> usize {
        self.panels.len()
    }

    fn panel_key(&self, panel: usize) -> Option<String> {
        self.panels
            .get(panel)?
            .get_attribute(&self.config.panel_attribute)
    }

    fn set_panel_hidden(&mut self, panel: usize, hidden: bool) {
        if let Some(p) = self.panels.get(panel) {
            p.set_hidden(hidden);
        }
    }
}

pub(crate) fn js_error(err: JsValue) -> TabError {
    TabError::Dom(format!("{:?}", err))
}

fn owned_elements(
    root: &Element,
    selector: &str,
    group_selector: Option<&str>,
) -> Result<Vec<Element>, TabError> {
    let nodes = root.query_selector_all(selector).map_err(js_error)?;
    let root_node: &Node = root;

    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else { continue };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };

        let nearest_group_is_root = group_selector.and_then(|group_selector| {
            // Start from the parent: a panel may itself be the root of an inner group
            element
                .parent_element()
                .and_then(|parent| parent.closest(group_selector).ok().flatten())
                .map(|owner| owner.is_same_node(Some(root_node)))
        });

        if belongs_to_root(nearest_group_is_root) {
            elements.push(element);
        }
    }
    Ok(elements)
}

/// Whether an element found under a root belongs to that root's group.
///
/// `nearest_group_is_root` is `None` when no group root encloses the element
/// (or no group selector is in use), otherwise whether the nearest enclosing
/// root is the one being scanned.
fn belongs_to_root(nearest_group_is_root: Option<bool>) -> bool {
    nearest_group_is_root.unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_without_enclosing_group_belongs_to_root() {
        assert!(belongs_to_root(None));
    }

    #[test]
    fn test_element_directly_in_root_belongs_to_root() {
        assert!(belongs_to_root(Some(true)));
    }

    #[test]
    fn test_element_of_nested_group_is_skipped() {
        assert!(!belongs_to_root(Some(false)));
    }
}
