use choreo::{Capabilities, Viewport};
use foundation::bounds::Rect;
use gloo_events::EventListener;
use runtime::Subscription;
use scene::components::{Style, Visibility};
use scene::entity::ElementId;
use scene::{Stage, Surface};
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::MountError;

/// Window and document, fetched once per mount.
#[derive(Debug, Clone)]
pub struct Dom {
    pub window: Window,
    pub document: Document,
}

impl Dom {
    pub fn acquire() -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn root(&self, id: &str) -> Result<HtmlElement, MountError> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| MountError::MissingRoot(id.to_string()))
    }

    pub fn create(&self, tag: &str, class: &str) -> Result<HtmlElement, MountError> {
        let el = self
            .document
            .create_element(tag)
            .map_err(dom_error)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| MountError::Dom(format!("<{tag}> is not an HTML element")))?;
        el.set_class_name(class);
        Ok(el)
    }

    /// `innerWidth`/`innerHeight`, 0 when unreadable.
    pub fn inner_size(&self) -> (f64, f64) {
        let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (
            read(self.window.inner_width()),
            read(self.window.inner_height()),
        )
    }

    pub fn viewport(&self) -> Viewport {
        let (width, height) = self.inner_size();
        let mut viewport = Viewport::new(width, height);
        if let Some(px) = self.root_font_px() {
            viewport.root_font_px = px;
        }
        viewport
    }

    fn root_font_px(&self) -> Option<f64> {
        let html = self.document.document_element()?;
        let computed = self.window.get_computed_style(&html).ok()??;
        let size = computed.get_property_value("font-size").ok()?;
        size.trim_end_matches("px").parse::<f64>().ok()
    }

    pub fn capabilities(&self) -> Capabilities {
        let supports = |property: &str, value: &str| {
            web_sys::css::supports_with_value(property, value).unwrap_or(false)
        };
        Capabilities {
            scroll_sampling: self.window.scroll_y().is_ok(),
            transforms: supports("transform", "translate(-50%, -50%) rotate(1deg)"),
        }
    }

    pub fn has_global(&self, name: &str) -> bool {
        js_sys::Reflect::has(&self.window, &JsValue::from_str(name)).unwrap_or(false)
    }
}

pub fn dom_error(err: JsValue) -> MountError {
    MountError::Dom(format!("{err:?}"))
}

pub fn rect_of(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

pub fn append(parent: &Element, child: &Element) -> Result<(), MountError> {
    parent.append_child(child).map(|_| ()).map_err(dom_error)
}

/// [`Surface`] over real elements, indexed by stage id.
pub struct DomSurface {
    elements: Vec<Option<HtmlElement>>,
    shown_as: &'static str,
}

impl DomSurface {
    /// Binds every stage element to the DOM element `lookup` returns for its
    /// label. Unbound elements are skipped on write.
    pub fn resolve(stage: &Stage, mut lookup: impl FnMut(&str) -> Option<HtmlElement>) -> Self {
        let elements = (0..stage.len() as u32)
            .map(|i| {
                let label = stage.label(ElementId(i))?;
                let el = lookup(label);
                if el.is_none() {
                    debug!(label, "no element bound; writes will be skipped");
                }
                el
            })
            .collect();
        Self {
            elements,
            shown_as: "block",
        }
    }

    pub fn element(&self, id: ElementId) -> Option<&HtmlElement> {
        self.elements.get(id.index() as usize)?.as_ref()
    }
}

impl Surface for DomSurface {
    fn apply_style(&mut self, element: ElementId, style: &Style) {
        let Some(el) = self.element(element) else {
            return;
        };
        let css = el.style();
        for (property, value) in style.declarations() {
            if let Err(err) = css.set_property(property, &value) {
                debug!(property, ?err, "style write rejected");
            }
        }
    }

    fn apply_visibility(&mut self, element: ElementId, visibility: Visibility) {
        let Some(el) = self.element(element) else {
            return;
        };
        if let Err(err) = el.style().set_property("display", visibility.display(self.shown_as)) {
            debug!(?err, "display write rejected");
        }
    }
}

/// DOM listener held by a mount's [`runtime::Subscriptions`].
pub struct Listener {
    label: &'static str,
    _listener: EventListener,
}

impl Listener {
    pub fn new(label: &'static str, listener: EventListener) -> Self {
        Self {
            label,
            _listener: listener,
        }
    }
}

impl Subscription for Listener {
    fn label(&self) -> &str {
        self.label
    }
}
