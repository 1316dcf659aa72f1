//! Tab controller
//!
//! Содержит:
//! - `TabSurface` - то, чем управляет контроллер (DOM или память)
//! - `TabController` - состояние одной группы табов: активный таб,
//!   превью по наведению, переключение панелей по клику
//!
//! One controller owns one group. There is no shared state between groups, so
//! any number of them can live on the same page.

use std::fmt;

use super::error::TabError;

/// Position of a tab button inside its group, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(pub usize);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Pointer events a tab button reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEvent {
    Enter,
    Leave,
    Click,
}

/// The buttons and panels of one tab group.
///
/// Buttons and panels are addressed by index. Implementations must keep the
/// indices stable for the lifetime of the controller.
pub trait TabSurface {
    fn tab_count(&self) -> usize;

    /// Panel key the button points at, `None` if the attribute is absent.
    fn target(&self, tab: TabId) -> Option<String>;

    fn is_default(&self, tab: TabId) -> bool;

    fn clear_default(&mut self, tab: TabId);

    fn set_hover(&mut self, tab: TabId, hovered: bool);

    fn panel_count(&self) -> usize;

    fn panel_key(&self, panel: usize) -> Option<String>;

    fn set_panel_hidden(&mut self, panel: usize, hidden: bool);
}

pub struct TabController<S> {
    surface: S,
    active: TabId,
}

impl<S: TabSurface> TabController<S> {
    /// Take over a group: the first button marked default loses its marker,
    /// gets the hover state and has its panel shown, every other panel is
    /// hidden.
    ///
    /// Nothing is modified if the default button cannot be committed.
    pub fn init(surface: S) -> Result<Self, TabError> {
        let default = (0..surface.tab_count())
            .map(TabId)
            .find(|&tab| surface.is_default(tab))
            .ok_or(TabError::NoDefaultTab)?;

        let mut controller = Self {
            surface,
            active: default,
        };
        controller.panel_for(default)?;
        controller.surface.clear_default(default);
        controller.select(default)?;

        log::debug!(
            "tab group initialised: {} tabs, {} panels, default {}",
            controller.surface.tab_count(),
            controller.surface.panel_count(),
            default
        );
        Ok(controller)
    }

    /// Move the hover state from the active tab to `tab`. Panels are untouched.
    pub fn preview_on(&mut self, tab: TabId) -> Result<(), TabError> {
        self.check(tab)?;
        self.surface.set_hover(self.active, false);
        self.surface.set_hover(tab, true);
        Ok(())
    }

    /// Take the hover state off `tab` and give it back to the active tab.
    pub fn preview_off(&mut self, tab: TabId) -> Result<(), TabError> {
        self.check(tab)?;
        self.surface.set_hover(tab, false);
        self.surface.set_hover(self.active, true);
        Ok(())
    }

    /// Show the panel `tab` targets, hide every other one and make `tab` active.
    ///
    /// The panel is looked up first: an unmatched target returns
    /// `PanelNotFound` with the group left exactly as it was.
    pub fn commit(&mut self, tab: TabId) -> Result<(), TabError> {
        self.check(tab)?;
        let shown = self.panel_for(tab)?;

        for panel in 0..self.surface.panel_count() {
            self.surface.set_panel_hidden(panel, panel != shown);
        }
        self.active = tab;
        Ok(())
    }

    /// Preview and commit in one step, so the hover state follows a selection
    /// that did not come from the pointer.
    pub fn select(&mut self, tab: TabId) -> Result<(), TabError> {
        self.check(tab)?;
        self.panel_for(tab)?;
        self.preview_on(tab)?;
        self.commit(tab)
    }

    /// Select the first button targeting `key`.
    pub fn select_target(&mut self, key: &str) -> Result<(), TabError> {
        let tab = (0..self.surface.tab_count())
            .map(TabId)
            .find(|&tab| self.surface.target(tab).as_deref() == Some(key))
            .ok_or_else(|| TabError::NotFound {
                target: key.to_string(),
            })?;
        self.select(tab)
    }

    pub fn handle(&mut self, event: TabEvent, tab: TabId) -> Result<(), TabError> {
        match event {
            TabEvent::Enter => self.preview_on(tab),
            TabEvent::Leave => self.preview_off(tab),
            TabEvent::Click => self.commit(tab),
        }
    }

    pub fn active(&self) -> TabId {
        self.active
    }

    pub fn active_target(&self) -> Option<String> {
        self.surface.target(self.active)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn check(&self, tab: TabId) -> Result<(), TabError> {
        if tab.0 < self.surface.tab_count() {
            Ok(())
        } else {
            Err(TabError::UnknownTab { tab })
        }
    }

    // Duplicate keys: the first panel wins.
    fn panel_for(&self, tab: TabId) -> Result<usize, TabError> {
        let target = self
            .surface
            .target(tab)
            .ok_or(TabError::MissingTarget { tab })?;

        (0..self.surface.panel_count())
            .find(|&panel| self.surface.panel_key(panel).as_deref() == Some(target.as_str()))
            .ok_or(TabError::PanelNotFound { target })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::tabs::memory::MemoryTabs;

    fn three_tabs() -> MemoryTabs {
        MemoryTabs::new()
            .button("intro")
            .default_button("usage")
            .button("faq")
            .panel("intro")
            .panel("usage")
            .panel("faq")
    }

    #[test]
    fn test_init_shows_default_panel_only() {
        let controller = TabController::init(three_tabs()).unwrap();

        assert_eq!(controller.active(), TabId(1));
        assert_eq!(controller.active_target().as_deref(), Some("usage"));
        assert_eq!(controller.surface().visible_panels(), vec!["usage"]);
        assert_eq!(controller.surface().hovered_tabs(), vec![TabId(1)]);
        assert!(!controller.surface().buttons[1].default);
    }

    #[test]
    fn test_init_uses_first_default() {
        let surface = MemoryTabs::new()
            .default_button("a")
            .default_button("b")
            .panel("a")
            .panel("b");
        let controller = TabController::init(surface).unwrap();

        assert_eq!(controller.active(), TabId(0));
        assert_eq!(controller.surface().visible_panels(), vec!["a"]);
        // only the consumed marker is removed
        assert!(controller.surface().buttons[1].default);
    }

    #[test]
    fn test_init_without_default() {
        let surface = MemoryTabs::new().button("a").panel("a");
        assert_eq!(
            TabController::init(surface).err(),
            Some(TabError::NoDefaultTab)
        );
    }

    #[test]
    fn test_init_default_without_panel() {
        let surface = MemoryTabs::new().default_button("missing").panel("a");
        let err = TabController::init(surface).err();
        assert_eq!(
            err,
            Some(TabError::PanelNotFound {
                target: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_click_sequences_keep_one_visible_panel() {
        let targets = ["intro", "usage", "faq"];
        let sequences: [&[usize]; 5] = [
            &[0],
            &[2, 2, 2],
            &[0, 1, 2, 1, 0],
            &[2, 0, 2, 0],
            &[1, 1, 0, 2, 2, 1],
        ];

        for sequence in sequences {
            let mut controller = TabController::init(three_tabs()).unwrap();
            for &tab in sequence {
                controller.handle(TabEvent::Click, TabId(tab)).unwrap();

                let visible = controller.surface().visible_panels();
                assert_eq!(visible, vec![targets[tab]], "sequence {:?}", sequence);
                assert_eq!(controller.active(), TabId(tab));
            }
        }
    }

    #[test]
    fn test_hover_previews_without_touching_panels() {
        let mut controller = TabController::init(three_tabs()).unwrap();

        controller.handle(TabEvent::Enter, TabId(2)).unwrap();
        assert_eq!(controller.surface().hovered_tabs(), vec![TabId(2)]);
        assert_eq!(controller.surface().visible_panels(), vec!["usage"]);
        assert_eq!(controller.active(), TabId(1));

        controller.handle(TabEvent::Leave, TabId(2)).unwrap();
        assert_eq!(controller.surface().hovered_tabs(), vec![TabId(1)]);
        assert_eq!(controller.surface().visible_panels(), vec!["usage"]);
    }

    #[test]
    fn test_hover_click_leave_keeps_new_tab_hovered() {
        let mut controller = TabController::init(three_tabs()).unwrap();

        controller.handle(TabEvent::Enter, TabId(0)).unwrap();
        controller.handle(TabEvent::Click, TabId(0)).unwrap();
        controller.handle(TabEvent::Leave, TabId(0)).unwrap();

        assert_eq!(controller.surface().hovered_tabs(), vec![TabId(0)]);
        assert_eq!(controller.surface().visible_panels(), vec!["intro"]);
    }

    #[test]
    fn test_hover_over_active_tab_is_stable() {
        let mut controller = TabController::init(three_tabs()).unwrap();

        controller.handle(TabEvent::Enter, TabId(1)).unwrap();
        assert_eq!(controller.surface().hovered_tabs(), vec![TabId(1)]);
        controller.handle(TabEvent::Leave, TabId(1)).unwrap();
        assert_eq!(controller.surface().hovered_tabs(), vec![TabId(1)]);
    }

    #[test]
    fn test_click_unmatched_target_changes_nothing() {
        let surface = three_tabs().button("nowhere");
        let mut controller = TabController::init(surface).unwrap();
        controller.handle(TabEvent::Enter, TabId(3)).unwrap();
        let before = controller.surface().clone();

        let err = controller.handle(TabEvent::Click, TabId(3)).unwrap_err();
        assert_eq!(
            err,
            TabError::PanelNotFound {
                target: "nowhere".to_string()
            }
        );
        assert_eq!(controller.surface(), &before);
        assert_eq!(controller.active(), TabId(1));

        // leaving restores the real selection
        controller.handle(TabEvent::Leave, TabId(3)).unwrap();
        assert_eq!(controller.surface().hovered_tabs(), vec![TabId(1)]);
    }

    #[test]
    fn test_click_button_without_target() {
        let surface = three_tabs().untargeted_button();
        let mut controller = TabController::init(surface).unwrap();

        let err = controller.commit(TabId(3)).unwrap_err();
        assert_eq!(err, TabError::MissingTarget { tab: TabId(3) });
        assert_eq!(controller.surface().visible_panels(), vec!["usage"]);
    }

    #[test]
    fn test_unknown_tab_index() {
        let mut controller = TabController::init(three_tabs()).unwrap();

        for event in [TabEvent::Enter, TabEvent::Leave, TabEvent::Click] {
            assert_eq!(
                controller.handle(event, TabId(9)),
                Err(TabError::UnknownTab { tab: TabId(9) })
            );
        }
        assert_eq!(controller.surface().hovered_tabs(), vec![TabId(1)]);
    }

    #[test]
    fn test_duplicate_panel_keys_show_first() {
        let surface = MemoryTabs::new()
            .default_button("a")
            .button("b")
            .panel("a")
            .panel("b")
            .panel("a");
        let mut controller = TabController::init(surface).unwrap();
        assert_eq!(controller.surface().visible_panels(), vec!["a"]);
        assert!(controller.surface().panels[2].hidden);

        controller.commit(TabId(1)).unwrap();
        assert_eq!(controller.surface().visible_panels(), vec!["b"]);
    }

    #[test]
    fn test_select_target_moves_hover() {
        let mut controller = TabController::init(three_tabs()).unwrap();

        controller.select_target("faq").unwrap();
        assert_eq!(controller.active(), TabId(2));
        assert_eq!(controller.surface().hovered_tabs(), vec![TabId(2)]);
        assert_eq!(controller.surface().visible_panels(), vec!["faq"]);

        assert_eq!(
            controller.select_target("missing"),
            Err(TabError::NotFound {
                target: "missing".to_string()
            })
        );
        assert_eq!(controller.active(), TabId(2));
    }

    #[test]
    fn test_select_unmatched_target_keeps_hover() {
        let surface = three_tabs().button("nowhere");
        let mut controller = TabController::init(surface).unwrap();

        assert!(controller.select(TabId(3)).is_err());
        assert_eq!(controller.surface().hovered_tabs(), vec![TabId(1)]);
    }

    #[test]
    fn test_groups_are_independent() {
        let mut left = TabController::init(three_tabs()).unwrap();
        let right = TabController::init(three_tabs()).unwrap();

        left.commit(TabId(0)).unwrap();
        assert_eq!(left.surface().visible_panels(), vec!["intro"]);
        assert_eq!(right.surface().visible_panels(), vec!["usage"]);
        assert_eq!(right.active(), TabId(1));
    }
}
