//! In-memory tab surface.
//!
//! Mirrors what the DOM surface does with `classList` and `hidden`, without a
//! browser. Used by the controller tests and by callers that want to drive a
//! tab group headlessly.

use super::controller::{TabId, TabSurface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryButton {
    pub target: Option<String>,
    pub default: bool,
    pub hovered: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryPanel {
    pub key: String,
    pub hidden: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTabs {
    pub buttons: Vec<MemoryButton>,
    pub panels: Vec<MemoryPanel>,
}

impl MemoryTabs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a button targeting `target`.
    pub fn button(mut self, target: &str) -> Self {
        self.buttons.push(MemoryButton {
            target: Some(target.to_string()),
            default: false,
            hovered: false,
        });
        self
    }

    /// Add a button targeting `target` and carrying the default marker.
    pub fn default_button(mut self, target: &str) -> Self {
        self.buttons.push(MemoryButton {
            target: Some(target.to_string()),
            default: true,
            hovered: false,
        });
        self
    }

    /// Add a button with no target attribute at all.
    pub fn untargeted_button(mut self) -> Self {
        self.buttons.push(MemoryButton {
            target: None,
            default: false,
            hovered: false,
        });
        self
    }

    /// Add a panel. Panels start visible, as in unstyled markup.
    pub fn panel(mut self, key: &str) -> Self {
        self.panels.push(MemoryPanel {
            key: key.to_string(),
            hidden: false,
        });
        self
    }

    /// Keys of the panels that are currently visible, in order.
    pub fn visible_panels(&self) -> Vec<&str> {
        self.panels
            .iter()
            .filter(|p| !p.hidden)
            .map(|p| p.key.as_str())
            .collect()
    }

    /// Buttons currently carrying the hover state.
    pub fn hovered_tabs(&self) -> Vec<TabId> {
        self.buttons
            .iter()
            .enumerate()
            .filter(|(_, b)| b.hovered)
            .map(|(i, _)| TabId(i))
            .collect()
    }
}

impl TabSurface for MemoryTabs {
    fn tab_count(&self) -> usize {
        self.buttons.len()
    }

    fn target(&self, tab: TabId) -> Option<String> {
        self.buttons.get(tab.0).and_then(|b| b.target.clone())
    }

    fn is_default(&self, tab: TabId) -> bool {
        self.buttons.get(tab.0).is_some_and(|b| b.default)
    }

    fn clear_default(&mut self, tab: TabId) {
        if let Some(button) = self.buttons.get_mut(tab.0) {
            button.default = false;
        }
    }

    fn set_hover(&mut self, tab: TabId, hovered: bool) {
        if let Some(button) = self.buttons.get_mut(tab.0) {
            button.hovered = hovered;
        }
    }

    fn panel_count(&self) -> usize {
        self.panels.len()
    }

    fn panel_key(&self, panel: usize) -> Option<String> {
        self.panels.get(panel).map(|p| p.key.clone())
    }

    fn set_panel_hidden(&mut self, panel: usize, hidden: bool) {
        if let Some(p) = self.panels.get_mut(panel) {
            p.hidden = hidden;
        }
    }
}
