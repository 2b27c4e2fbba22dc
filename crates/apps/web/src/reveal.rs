use std::cell::{Cell, RefCell};
use std::rc::Rc;

use choreo::{RevealConfig, RevealPage};
use gloo_events::EventListener;
use gloo_render::{AnimationFrame, request_animation_frame};
use runtime::Subscriptions;
use scene::entity::ElementId;
use tracing::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, Node};

use crate::MountError;
use crate::dom::{Dom, DomSurface, Listener, dom_error, rect_of};

/// Selects the effect: `pin`, `fan`, `tilt` or `spy`. Absent means fade.
const KIND_ATTRIBUTE: &str = "data-reveal";
/// Set on the active spied section.
const ACTIVE_ATTRIBUTE: &str = "data-active";

struct RevealMount {
    dom: Dom,
    page: RefCell<RevealPage>,
    surface: RefCell<DomSurface>,
    /// Styled element for each stage element, indexed by id.
    bound: Vec<HtmlElement>,
    /// Element measured for each stage element, indexed by id.
    measured: Vec<Element>,
    active: Cell<Option<ElementId>>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Subscriptions>,
}

impl RevealMount {
    fn sample(self: &Rc<Self>) {
        let viewport = self.dom.viewport();
        let (changed, entered) = {
            let mut page = self.page.borrow_mut();
            let changed = page.sample(&viewport, |id| {
                self.measured.get(id.index() as usize).map(rect_of)
            });
            (changed, page.take_active_change())
        };
        if let Some(id) = entered {
            self.mark_active(id);
        }
        if changed > 0 {
            self.request_flush();
        }
    }

    fn relayout(self: &Rc<Self>) {
        self.page.borrow_mut().relayout();
        self.sample();
    }

    fn element(&self, id: ElementId) -> Option<&HtmlElement> {
        self.bound.get(id.index() as usize)
    }

    fn mark_active(&self, id: ElementId) {
        if let Some(previous) = self.active.replace(Some(id)).and_then(|p| self.element(p)) {
            if let Err(err) = previous.remove_attribute(ACTIVE_ATTRIBUTE).map_err(dom_error) {
                debug!(%err, "could not clear active section");
            }
        }
        let Some(el) = self.element(id) else {
            return;
        };
        if let Err(err) = el.set_attribute(ACTIVE_ATTRIBUTE, "").map_err(dom_error) {
            debug!(%err, "could not mark active section");
        }
        debug!(section = %el.id(), "active section");
    }

    fn request_flush(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let weak = Rc::downgrade(self);
        let handle = request_animation_frame(move |_| {
            if let Some(mount) = weak.upgrade() {
                mount.frame.borrow_mut().take();
                mount
                    .page
                    .borrow_mut()
                    .flush(&mut *mount.surface.borrow_mut());
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn listen(self: &Rc<Self>) {
        let mut listeners = self.listeners.borrow_mut();

        let weak = Rc::downgrade(self);
        let scroll = EventListener::new(&self.dom.window, "scroll", move |_| {
            if let Some(mount) = weak.upgrade() {
                mount.sample();
            }
        });
        listeners.hold(Listener::new("reveal:scroll", scroll));

        let weak = Rc::downgrade(self);
        let resize = EventListener::new(&self.dom.window, "resize", move |_| {
            if let Some(mount) = weak.upgrade() {
                mount.relayout();
            }
        });
        listeners.hold(Listener::new("reveal:resize", resize));
    }

    fn unmount(&self) {
        self.page.borrow_mut().unmount();
        self.frame.borrow_mut().take();
        self.listeners.borrow_mut().release_all();
    }
}

/// Position of `el` among its siblings marked as fan items, and how many
/// there are.
fn fan_position(el: &HtmlElement, row: &Element) -> (usize, usize) {
    let node: &Node = el;
    let items = row.children();
    let mut index = 0;
    let mut count = 0;
    for i in 0..items.length() {
        let Some(item) = items.item(i) else {
            continue;
        };
        if item.get_attribute(KIND_ATTRIBUTE).as_deref() != Some("fan") {
            continue;
        }
        if item.is_same_node(Some(node)) {
            index = count;
        }
        count += 1;
    }
    (index, count)
}

fn build(selector: &str, config_json: &str) -> Result<Rc<RevealMount>, MountError> {
    let config = RevealConfig::from_json(config_json)?;
    let dom = Dom::acquire()?;
    let nodes = dom
        .document
        .query_selector_all(selector)
        .map_err(|_| MountError::Selector(selector.to_string()))?;

    let mut page = RevealPage::new(config);
    let mut bound = Vec::new();
    let mut measured = Vec::new();
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let label = format!("reveal-{}", bound.len());
        let kind = el.get_attribute(KIND_ATTRIBUTE);
        match kind.as_deref() {
            Some(kind @ ("pin" | "fan")) => {
                let Some(parent) = el.parent_element() else {
                    debug!(%label, kind, "element has no parent to measure; skipped");
                    continue;
                };
                if kind == "pin" {
                    page.pin(label);
                } else {
                    let (index, count) = fan_position(&el, &parent);
                    let motion = page.config().fan_motion(index, count);
                    page.motion(label, motion);
                }
                measured.push(parent);
            }
            Some("tilt") => {
                let motion = page.config().tilt_motion();
                page.motion(label, motion);
                measured.push(el.clone().into());
            }
            Some("spy") => {
                page.spy(label);
                measured.push(el.clone().into());
            }
            _ => {
                page.fade(label);
                measured.push(el.clone().into());
            }
        }
        bound.push(el);
    }
    info!(elements = bound.len(), selector, "reveal sections mounted");

    let surface = DomSurface::resolve(page.stage(), |label| {
        let index = label.strip_prefix("reveal-")?.parse::<usize>().ok()?;
        bound.get(index).cloned()
    });
    Ok(Rc::new(RevealMount {
        dom,
        page: RefCell::new(page),
        surface: RefCell::new(surface),
        bound,
        measured,
        active: Cell::new(None),
        frame: RefCell::new(None),
        listeners: RefCell::new(Subscriptions::new()),
    }))
}

/// Mounted reveal/pin effects. Drop or [`RevealHandle::unmount`] stops them.
#[wasm_bindgen]
pub struct RevealHandle {
    mount: Option<Rc<RevealMount>>,
}

#[wasm_bindgen]
impl RevealHandle {
    pub fn unmount(&mut self) {
        if let Some(mount) = self.mount.take() {
            mount.unmount();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mount
            .as_ref()
            .is_some_and(|m| m.page.borrow().is_mounted())
    }

    /// `id` of the active spied section, if any has been entered.
    #[wasm_bindgen(getter, js_name = activeSection)]
    pub fn active_section(&self) -> Option<String> {
        let mount = self.mount.as_ref()?;
        let id = mount.page.borrow().active_section()?;
        mount.element(id).map(|el| el.id())
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Fades in every element matching `selector` as it nears the viewport.
///
/// `data-reveal` picks another effect: `pin` headers pin and shrink while
/// their parent section scrolls past the viewport top, `fan` items swing
/// apart as their parent row scrolls through, `tilt` turns an element in
/// 3D across the viewport, and `spy` sections get `data-active` while the
/// reader is in them.
#[wasm_bindgen]
pub fn mount_reveal_sections(
    selector: &str,
    config_json: Option<String>,
) -> Result<RevealHandle, JsValue> {
    let mount = build(selector, config_json.as_deref().unwrap_or(""))?;
    mount.listen();
    mount.sample();
    Ok(RevealHandle { mount: Some(mount) })
}
