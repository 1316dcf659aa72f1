use std::cell::RefCell;
use std::rc::Rc;

use contracts::shared::tabs::{TabController, TabError, TabEvent, TabId, TabsConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::dom::{js_error, DomSurface};

type SharedController = Rc<RefCell<TabController<DomSurface>>>;

const POINTER_EVENTS: [(&str, TabEvent); 3] = [
    ("mouseover", TabEvent::Enter),
    ("mouseout", TabEvent::Leave),
    ("click", TabEvent::Click),
];

/// Event listener attached to one button. Removed from the button on drop.
struct Binding {
    target: Element,
    event: &'static str,
    listener: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for Binding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.listener.as_ref().unchecked_ref());
    }
}

/// A mounted tab group: its controller plus the listeners driving it.
///
/// Dropping the group detaches it from the page; the markup is left in
/// whatever state the last event produced.
pub struct TabGroup {
    controller: SharedController,
    _bindings: Vec<Binding>,
}

impl TabGroup {
    pub fn mount(
        root: &Element,
        config: TabsConfig,
        group_selector: Option<&str>,
    ) -> Result<Self, TabError> {
        let surface = DomSurface::scan(root, config, group_selector)?;
        let buttons = surface.buttons().to_vec();
        let controller: SharedController = Rc::new(RefCell::new(TabController::init(surface)?));

        let mut bindings = Vec::with_capacity(buttons.len() * POINTER_EVENTS.len());
        for (index, button) in buttons.into_iter().enumerate() {
            let tab = TabId(index);
            for (event_name, event) in POINTER_EVENTS {
                let controller = Rc::clone(&controller);
                let listener = Closure::wrap(Box::new(move |_: web_sys::Event| {
                    dispatch(&controller, event, tab);
                }) as Box<dyn FnMut(web_sys::Event)>);

                button
                    .add_event_listener_with_callback(event_name, listener.as_ref().unchecked_ref())
                    .map_err(js_error)?;

                bindings.push(Binding {
                    target: button.clone(),
                    event: event_name,
                    listener,
                });
            }
        }

        Ok(Self {
            controller,
            _bindings: bindings,
        })
    }

    /// Select the first tab targeting `key`, as if it had been hovered and clicked.
    pub fn select(&self, key: &str) -> Result<(), TabError> {
        let mut controller = self
            .controller
            .try_borrow_mut()
            .map_err(|_| TabError::Busy)?;
        controller.select_target(key)
    }

    pub fn active_target(&self) -> Option<String> {
        self.controller
            .try_borrow()
            .ok()
            .and_then(|c| c.active_target())
    }

    /// Keep the listeners attached for the rest of the page's life.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

fn dispatch(controller: &RefCell<TabController<DomSurface>>, event: TabEvent, tab: TabId) {
    let Ok(mut controller) = controller.try_borrow_mut() else {
        log::warn!("{}: dropping {:?}", TabError::Busy, event);
        return;
    };

    if let Err(err) = controller.handle(event, tab) {
        log::warn!("tab {} {:?} ignored: {}", tab, event, err);
    }
}
