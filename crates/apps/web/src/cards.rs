use std::cell::{Cell, RefCell};
use std::rc::Rc;

use choreo::{
    ADVISORY_TEXT, CardDescriptor, CardStack, READ_MORE_LABEL, ScrollMode, ScrollTrack, StackConfig,
};
use foundation::math::Vec2;
use gloo_events::EventListener;
use gloo_render::{AnimationFrame, request_animation_frame};
use runtime::Subscriptions;
use serde::Serialize;
use tracing::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, MouseEvent};

use crate::MountError;
use crate::dom::{Dom, DomSurface, Listener, append, dom_error, rect_of};

struct StackMount {
    dom: Dom,
    root: HtmlElement,
    stack: RefCell<CardStack>,
    surface: RefCell<DomSurface>,
    /// Card surfaces in deck order, for hover measurement.
    surfaces: Vec<HtmlElement>,
    frame: RefCell<Option<AnimationFrame>>,
    viewport_h: Cell<f64>,
    listeners: RefCell<Subscriptions>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StackSnapshot {
    mounted: bool,
    animated: bool,
    track_height: f64,
    progress: Vec<f64>,
}

fn set_styles(el: &HtmlElement, declarations: &[(&str, &str)]) -> Result<(), MountError> {
    let css = el.style();
    for (property, value) in declarations {
        css.set_property(property, value).map_err(dom_error)?;
    }
    Ok(())
}

impl StackMount {
    fn track_offset(&self) -> f64 {
        ScrollTrack::offset_for(rect_of(&self.root).top)
    }

    /// Lead-in and segments, plus the viewport the sticky deck occupies at
    /// the end.
    fn size_root(&self) -> Result<(), MountError> {
        let height = self.stack.borrow().track().height() + self.viewport_h.get();
        set_styles(&self.root, &[("height", format!("{height}px").as_str())])
    }

    fn request_flush(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let weak = Rc::downgrade(self);
        let handle = request_animation_frame(move |_| {
            if let Some(mount) = weak.upgrade() {
                mount.frame.borrow_mut().take();
                mount.flush();
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn flush(&self) {
        let writes = self
            .stack
            .borrow_mut()
            .flush(&mut *self.surface.borrow_mut());
        if writes > 0 {
            debug!(writes, "card stack flushed");
        }
    }

    fn on_scroll(self: &Rc<Self>) {
        let offset = self.track_offset();
        if self.stack.borrow_mut().on_scroll(offset) {
            self.request_flush();
        }
    }

    fn on_resize(self: &Rc<Self>) {
        let (_, h) = self.dom.inner_size();
        self.viewport_h.set(h);
        let changed = self.stack.borrow_mut().relayout(h);
        if let Err(err) = self.size_root() {
            debug!(%err, "could not resize card track");
        }
        let offset = self.track_offset();
        if self.stack.borrow_mut().on_scroll(offset) || changed {
            self.request_flush();
        }
    }

    fn listen(self: &Rc<Self>) {
        let mut listeners = self.listeners.borrow_mut();

        let weak = Rc::downgrade(self);
        let scroll = EventListener::new(&self.dom.window, "scroll", move |_| {
            if let Some(mount) = weak.upgrade() {
                mount.on_scroll();
            }
        });
        listeners.hold(Listener::new("stack:scroll", scroll));

        let weak = Rc::downgrade(self);
        let resize = EventListener::new(&self.dom.window, "resize", move |_| {
            if let Some(mount) = weak.upgrade() {
                mount.on_resize();
            }
        });
        listeners.hold(Listener::new("stack:resize", resize));

        for (index, el) in self.surfaces.iter().enumerate() {
            let weak = Rc::downgrade(self);
            let target = el.clone();
            let hover = EventListener::new(el, "mousemove", move |event| {
                let (Some(mount), Some(event)) = (weak.upgrade(), event.dyn_ref::<MouseEvent>())
                else {
                    return;
                };
                let pointer = Vec2::new(f64::from(event.client_x()), f64::from(event.client_y()));
                let rect = rect_of(&target);
                if mount.stack.borrow_mut().hover(index, pointer, &rect) {
                    mount.request_flush();
                }
            });
            listeners.hold(Listener::new("card:mousemove", hover));

            let weak = Rc::downgrade(self);
            let leave = EventListener::new(el, "mouseleave", move |_| {
                let Some(mount) = weak.upgrade() else {
                    return;
                };
                if mount.stack.borrow_mut().leave(index) {
                    mount.request_flush();
                }
            });
            listeners.hold(Listener::new("card:mouseleave", leave));
        }
    }

    fn unmount(&self) {
        self.stack.borrow_mut().unmount();
        self.frame.borrow_mut().take();
        self.listeners.borrow_mut().release_all();
    }

    fn snapshot(&self) -> StackSnapshot {
        let stack = self.stack.borrow();
        StackSnapshot {
            mounted: stack.is_mounted(),
            animated: stack.mode() == ScrollMode::Animated,
            track_height: stack.track().height(),
            progress: (0..stack.cards().len())
                .filter_map(|i| stack.progress(i))
                .collect(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum CardPart {
    Wrapper(usize),
    Surface(usize),
}

/// Maps `card-{i}` and `card-{i}-surface` stage labels back to the deck.
fn card_part(label: &str) -> Option<CardPart> {
    let rest = label.strip_prefix("card-")?;
    match rest.split_once('-') {
        Some((index, "surface")) => index.parse().ok().map(CardPart::Surface),
        Some(_) => None,
        None => rest.parse().ok().map(CardPart::Wrapper),
    }
}

/// Renders one card's payload into `surface`.
fn render_card(dom: &Dom, surface: &HtmlElement, card: &CardDescriptor) -> Result<(), MountError> {
    let payload = &card.payload;
    set_styles(surface, &[("background-color", payload.theme_color.as_str())])?;
    for (name, value) in card.link.anchor_attributes() {
        surface.set_attribute(name, &value).map_err(dom_error)?;
    }
    if !payload.image.is_empty() {
        let img = dom.create("img", "card-image")?;
        img.set_attribute("src", &payload.image).map_err(dom_error)?;
        img.set_attribute("alt", &payload.image_alt).map_err(dom_error)?;
        append(surface, &img)?;
    }
    let text = |tag: &str, class: &str, content: &str| -> Result<(), MountError> {
        let el = dom.create(tag, class)?;
        el.set_text_content(Some(content));
        append(surface, &el)
    };
    text("h3", "card-client", &payload.client_name)?;
    text("p", "card-project", &payload.project_title)?;
    text("span", "card-years", &payload.years)?;
    let tags = dom.create("ul", "card-tags")?;
    for tag in &payload.tags {
        let li = dom.create("li", "card-tag")?;
        li.set_text_content(Some(tag.as_str()));
        append(&tags, &li)?;
    }
    append(surface, &tags)?;
    if card.shows_read_more() {
        text("span", "card-read-more", READ_MORE_LABEL)?;
    }
    Ok(())
}

fn build(root_id: &str, cards_json: &str, config_json: &str) -> Result<Rc<StackMount>, MountError> {
    let config = StackConfig::from_json(config_json)?;
    let records = if cards_json.trim().is_empty() {
        content::default_cards()
    } else {
        content::parse_cards(cards_json)?
    };
    let dom = Dom::acquire()?;
    let root = dom.root(root_id)?;
    let (_, viewport_h) = dom.inner_size();
    let mode = dom.capabilities().mode();
    let stack = CardStack::new(records, config, viewport_h, mode);

    set_styles(&root, &[("position", "relative")])?;

    let advisory = dom.create("div", "stack-advisory")?;
    advisory.set_text_content(Some(ADVISORY_TEXT));
    append(&root, &advisory)?;

    let deck = dom.create("div", "stack-deck")?;
    set_styles(
        &deck,
        &[
            ("position", "sticky"),
            ("top", "0"),
            ("height", "100vh"),
            ("overflow", "hidden"),
        ],
    )?;
    append(&root, &deck)?;

    let mut wrappers = Vec::with_capacity(stack.cards().len());
    let mut surfaces = Vec::with_capacity(stack.cards().len());
    for card in stack.cards() {
        let wrapper = dom.create("div", "card-wrapper")?;
        set_styles(&wrapper, &[("position", "absolute"), ("left", "50%"), ("top", "50%")])?;
        let surface = dom.create(card.link.tag_name(), "card")?;
        surface.set_attribute("data-card-id", card.id()).map_err(dom_error)?;
        render_card(&dom, &surface, card)?;
        append(&wrapper, &surface)?;
        append(&deck, &wrapper)?;
        wrappers.push(wrapper);
        surfaces.push(surface);
    }

    let surface = DomSurface::resolve(stack.stage(), |label| {
        if label == "stack-advisory" {
            return Some(advisory.clone());
        }
        match card_part(label)? {
            CardPart::Wrapper(i) => wrappers.get(i).cloned(),
            CardPart::Surface(i) => surfaces.get(i).cloned(),
        }
    });

    let mount = Rc::new(StackMount {
        dom,
        root,
        stack: RefCell::new(stack),
        surface: RefCell::new(surface),
        surfaces,
        frame: RefCell::new(None),
        viewport_h: Cell::new(viewport_h),
        listeners: RefCell::new(Subscriptions::new()),
    });
    mount.size_root()?;
    Ok(mount)
}

/// Mounted card stack. Drop or [`CardStackHandle::unmount`] stops it.
#[wasm_bindgen]
pub struct CardStackHandle {
    mount: Option<Rc<StackMount>>,
}

#[wasm_bindgen]
impl CardStackHandle {
    pub fn unmount(&mut self) {
        if let Some(mount) = self.mount.take() {
            mount.unmount();
            info!("card stack handle released");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mount
            .as_ref()
            .is_some_and(|m| m.stack.borrow().is_mounted())
    }

    /// Exit progress of card `index`, if it exists.
    pub fn progress(&self, index: usize) -> Option<f64> {
        self.mount.as_ref()?.stack.borrow().progress(index)
    }

    /// Mount state as JSON, for debugging from the console.
    pub fn snapshot_json(&self) -> String {
        let Some(mount) = &self.mount else {
            return "null".to_string();
        };
        serde_json::to_string(&mount.snapshot()).unwrap_or_else(|_| "null".to_string())
    }
}

impl Drop for CardStackHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Renders the deck into `#root_id` and drives it from window scroll.
///
/// `cards_json` is a JSON array of card records; an empty string uses the
/// built-in deck. `config_json` overrides stack layout and motion.
#[wasm_bindgen]
pub fn mount_card_stack(
    root_id: &str,
    cards_json: &str,
    config_json: &str,
) -> Result<CardStackHandle, JsValue> {
    let mount = build(root_id, cards_json, config_json)?;
    mount.listen();
    mount.on_scroll();
    mount.flush();
    Ok(CardStackHandle { mount: Some(mount) })
}
