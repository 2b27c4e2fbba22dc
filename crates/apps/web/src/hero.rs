use std::cell::RefCell;
use std::rc::Rc;

use foundation::math::Vec2;
use foundation::time::Time;
use gloo_events::EventListener;
use gloo_render::{AnimationFrame, request_animation_frame};
use orbit::{HeroScene, OrbitConfig, TickOutcome};
use runtime::Subscriptions;
use tracing::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{DeviceOrientationEvent, HtmlElement, MouseEvent};

use crate::MountError;
use crate::dom::{Dom, DomSurface, Listener, append, dom_error, rect_of};

const REQUIRED: &str = "name-header";

struct HeroMount {
    dom: Dom,
    scene: RefCell<HeroScene>,
    surface: RefCell<DomSurface>,
    reference: HtmlElement,
    phrase: Option<HtmlElement>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Subscriptions>,
}

impl HeroMount {
    fn schedule(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let handle = request_animation_frame(move |timestamp| {
            if let Some(mount) = weak.upgrade() {
                mount.on_frame(timestamp);
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        {
            let mut scene = self.scene.borrow_mut();
            if scene.tick(Time(timestamp), rect_of(&self.reference)) == TickOutcome::Unmounted {
                return;
            }
            if let (Some(el), Some(text)) = (&self.phrase, scene.take_phrase_change()) {
                el.set_text_content(Some(text));
            }
            scene.flush(&mut *self.surface.borrow_mut());
        }
        self.schedule();
    }

    fn listen(self: &Rc<Self>) {
        let mut listeners = self.listeners.borrow_mut();

        let weak = Rc::downgrade(self);
        let pointer = EventListener::new(&self.dom.window, "mousemove", move |event| {
            let Some(mount) = weak.upgrade() else {
                return;
            };
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (w, h) = mount.dom.inner_size();
            let client = Vec2::new(f64::from(event.client_x()), f64::from(event.client_y()));
            mount.scene.borrow().pointer_moved(client, w, h);
        });
        listeners.hold(Listener::new("hero:mousemove", pointer));

        if !self.dom.has_global("DeviceOrientationEvent") {
            debug!("device orientation unsupported; pointer parallax only");
            return;
        }
        let weak = Rc::downgrade(self);
        let orientation = EventListener::new(&self.dom.window, "deviceorientation", move |event| {
            let Some(mount) = weak.upgrade() else {
                return;
            };
            let Some(event) = event.dyn_ref::<DeviceOrientationEvent>() else {
                return;
            };
            mount
                .scene
                .borrow()
                .orientation_changed(event.beta(), event.gamma());
        });
        listeners.hold(Listener::new("hero:deviceorientation", orientation));
    }

    fn unmount(&self) {
        self.scene.borrow_mut().unmount();
        self.frame.borrow_mut().take();
        self.listeners.borrow_mut().release_all();
    }
}

fn find(root: &HtmlElement, label: &str) -> Option<HtmlElement> {
    root.query_selector(&format!("[data-hero=\"{label}\"]"))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn build(root_id: &str, config_json: &str) -> Result<Rc<HeroMount>, MountError> {
    let config = OrbitConfig::from_json(config_json)?;
    let dom = Dom::acquire()?;
    let root = dom.root(root_id)?;
    let header = find(&root, REQUIRED).ok_or_else(|| MountError::MissingElement(REQUIRED.to_string()))?;
    let reference = find(&root, "orbit-reference").unwrap_or_else(|| header.clone());
    let container = find(&root, "orbit").unwrap_or_else(|| root.clone());
    let phrase = find(&root, "phrase");

    let scene = HeroScene::new(config);
    let mut markers = Vec::with_capacity(scene.elements().markers.len());
    for marker in scene.engine().markers() {
        let label = format!("orbiter-{}", marker.index);
        let el = match find(&root, &label) {
            Some(el) => el,
            None => {
                let el = dom.create("div", &format!("orbiter orbiter-{}", marker.icon.name()))?;
                el.set_attribute("data-hero", &label).map_err(dom_error)?;
                el.set_attribute("data-icon", marker.icon.name())
                    .map_err(dom_error)?;
                append(&container, &el)?;
                el
            }
        };
        markers.push((label, el));
    }
    let surface = DomSurface::resolve(scene.stage(), |label| {
        if label == REQUIRED {
            return Some(header.clone());
        }
        markers
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, el)| el.clone())
            .or_else(|| find(&root, label))
    });

    Ok(Rc::new(HeroMount {
        dom,
        scene: RefCell::new(scene),
        surface: RefCell::new(surface),
        reference,
        phrase,
        frame: RefCell::new(None),
        listeners: RefCell::new(Subscriptions::new()),
    }))
}

/// Mounted hero scene. Drop or [`HeroHandle::unmount`] stops it.
#[wasm_bindgen]
pub struct HeroHandle {
    mount: Option<Rc<HeroMount>>,
}

#[wasm_bindgen]
impl HeroHandle {
    pub fn unmount(&mut self) {
        if let Some(mount) = self.mount.take() {
            mount.unmount();
            info!("hero handle released");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mount
            .as_ref()
            .is_some_and(|m| m.scene.borrow().is_mounted())
    }
}

impl Drop for HeroHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Starts the orbit and header tilt inside `#root_id`.
///
/// The root must contain `[data-hero="name-header"]`. Optional hooks:
/// `orbit-reference` (defaults to the header), `orbit` (where created
/// markers are appended, defaults to the root; markers are viewport-fixed), `header-content`, `hero-text-top`,
/// `hero-text-bottom`, `phrase`, and `orbiter-{i}` (created when absent).
#[wasm_bindgen]
pub fn mount_hero(root_id: &str, config_json: &str) -> Result<HeroHandle, JsValue> {
    let mount = build(root_id, config_json)?;
    mount.listen();
    mount.schedule();
    Ok(HeroHandle { mount: Some(mount) })
}
