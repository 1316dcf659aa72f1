//! Tabs for Leptos views.
//!
//! Same behaviour as the page-level groups, for apps that render the markup
//! themselves:
//!
//! ```rust,ignore
//! view! {
//!     <TabsProvider initial="intro">
//!         <TabButton target="intro">"Intro"</TabButton>
//!         <TabButton target="usage">"Usage"</TabButton>
//!         <TabPanel name="intro">...</TabPanel>
//!         <TabPanel name="usage">...</TabPanel>
//!     </TabsProvider>
//! }
//! ```
//!
//! Do not put these inside a `data-tab-group` root: the page binder would
//! attach to the same buttons.

use contracts::shared::tabs::TabError;
use leptos::attr::custom::custom_attribute;
use leptos::prelude::*;

// Same markup as the page binder expects with a default `TabsConfig`
pub const BUTTON_CLASS: &str = "button-tab";
pub const TARGET_ATTRIBUTE: &str = "tab-target";
pub const PANEL_ATTRIBUTE: &str = "tab";

/// Registration of one rendered `TabPanel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelId(usize);

/// Selection state of one tab group.
#[derive(Clone, Copy)]
pub struct TabsContext {
    /// Key of the committed panel
    pub active: RwSignal<String>,
    /// Key of the button carrying the hover state
    pub hovered: RwSignal<String>,
    /// Rendered panels in registration order; a key may repeat
    pub panels: RwSignal<Vec<(PanelId, String)>>,
    next_panel: StoredValue<usize>,
}

impl TabsContext {
    pub fn new(initial: &str) -> Self {
        Self {
            active: RwSignal::new(initial.to_string()),
            hovered: RwSignal::new(initial.to_string()),
            panels: RwSignal::new(vec![]),
            next_panel: StoredValue::new(0),
        }
    }

    pub fn preview_on(&self, key: &str) {
        self.hovered.set(key.to_string());
    }

    /// Pointer left `key`: the hover state goes back to the active tab.
    ///
    /// Only one key carries the hover state here, so a leave for a key that is
    /// not hovered has nothing to take away and is ignored.
    pub fn preview_off(&self, key: &str) {
        if self.hovered.with_untracked(|hovered| hovered == key) {
            self.hovered.set(self.active.get_untracked());
        }
    }

    /// Show panel `key`. Unknown keys leave the selection untouched.
    pub fn commit(&self, key: &str) -> Result<(), TabError> {
        if !self.has_panel(key) {
            return Err(TabError::PanelNotFound {
                target: key.to_string(),
            });
        }
        self.active.set(key.to_string());
        Ok(())
    }

    pub fn select(&self, key: &str) -> Result<(), TabError> {
        self.commit(key)?;
        self.hovered.set(key.to_string());
        Ok(())
    }

    /// Check the initial key once the panels are registered. If no panel has
    /// it, the first registered panel is selected instead and the error is
    /// returned for the caller to report.
    pub fn resolve_initial(&self) -> Result<(), TabError> {
        let initial = self.active.get_untracked();
        if self.has_panel(&initial) {
            return Ok(());
        }
        self.fall_back_to_first();
        Err(TabError::PanelNotFound { target: initial })
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.with(|active| active == key)
    }

    pub fn is_hovered(&self, key: &str) -> bool {
        self.hovered.with(|hovered| hovered == key)
    }

    /// The single panel on display: the first one registered under the active key.
    pub fn visible_panel(&self) -> Option<PanelId> {
        self.active.with(|active| {
            self.panels.with(|panels| {
                panels
                    .iter()
                    .find(|(_, key)| key == active)
                    .map(|(id, _)| *id)
            })
        })
    }

    pub fn is_panel_visible(&self, panel: PanelId) -> bool {
        self.visible_panel() == Some(panel)
    }

    fn has_panel(&self, key: &str) -> bool {
        self.panels
            .with_untracked(|panels| panels.iter().any(|(_, k)| k == key))
    }

    fn register_panel(&self, key: &str) -> PanelId {
        let id = PanelId(self.next_panel.get_value());
        self.next_panel.set_value(id.0 + 1);
        self.panels.update(|panels| panels.push((id, key.to_string())));
        id
    }

    fn unregister_panel(&self, panel: PanelId) {
        self.panels
            .update(|panels| panels.retain(|(id, _)| *id != panel));

        let active = self.active.get_untracked();
        if !self.has_panel(&active) {
            self.fall_back_to_first();
        }
    }

    fn fall_back_to_first(&self) {
        let first = self
            .panels
            .with_untracked(|panels| panels.first().map(|(_, key)| key.clone()));
        if let Some(first) = first {
            self.active.set(first.clone());
            self.hovered.set(first);
        }
    }
}

pub fn use_tabs() -> TabsContext {
    use_context::<TabsContext>().expect("TabsContext not found. Wrap tabs with TabsProvider.")
}

#[component]
pub fn TabsProvider(
    /// Key of the panel shown first
    #[prop(into)]
    initial: String,
    children: Children,
) -> impl IntoView {
    let ctx = TabsContext::new(&initial);
    provide_context(ctx);

    // Child components register their panels while the view is built
    let view = children();
    if let Err(err) = ctx.resolve_initial() {
        log::warn!("tabs: initial selection rejected: {}", err);
    }
    view
}

#[component]
pub fn TabButton(
    /// Key of the panel this button shows
    #[prop(into)]
    target: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_tabs();

    let key_for_hover = target.clone();
    let key_for_enter = target.clone();
    let key_for_leave = target.clone();
    let key_for_click = target.clone();

    view! {
        <div
            class=BUTTON_CLASS
            class:hover=move || ctx.is_hovered(&key_for_hover)
            on:mouseover=move |_| ctx.preview_on(&key_for_enter)
            on:mouseout=move |_| ctx.preview_off(&key_for_leave)
            on:click=move |_| {
                if let Err(err) = ctx.commit(&key_for_click) {
                    log::warn!("tab click ignored: {}", err);
                }
            }
            {..custom_attribute(TARGET_ATTRIBUTE, target)}
        >
            {children()}
        </div>
    }
}

#[component]
pub fn TabPanel(
    /// Key buttons refer to
    #[prop(into)]
    name: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_tabs();
    let panel = ctx.register_panel(&name);

    on_cleanup(move || ctx.unregister_panel(panel));

    view! {
        <div
            hidden=move || !ctx.is_panel_visible(panel)
            {..custom_attribute(PANEL_ATTRIBUTE, name)}
        >
            {children()}
        </div>
    }
}
