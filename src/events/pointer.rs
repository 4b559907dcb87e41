//! Global custom cursor: dot, follower ring and hover label.

use crate::constants::*;
use crate::core::{assign_keys, CursorState, HoverRegistry};
use crate::dom::{self, ElementWatcher, Listener};
use crate::frame::{FrameLoop, Waker};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    static CURSOR: RefCell<Option<CursorTracker>> = const { RefCell::new(None) };
}

/// Mount the page's single cursor tracker. Returns `false` if one is
/// already mounted or the device has a coarse pointer.
pub fn init(document: &web::Document) -> bool {
    if CURSOR.with(|c| c.borrow().is_some()) {
        log::warn!("[cursor] already initialised");
        return false;
    }
    match CursorTracker::start(document) {
        Ok(Some(tracker)) => {
            CURSOR.with(|c| *c.borrow_mut() = Some(tracker));
            true
        }
        Ok(None) => false,
        Err(e) => {
            log::error!("[cursor] init error: {:?}", e);
            false
        }
    }
}

pub fn teardown() {
    let tracker = CURSOR.with(|c| c.borrow_mut().take());
    if let Some(mut t) = tracker {
        t.stop();
        log::info!("[cursor] torn down");
    }
}

const DOT_STYLE: &str = concat!(
    "position:fixed;top:0;left:0;pointer-events:none;opacity:0;",
    "width:16px;height:16px;border-radius:50%;z-index:9999;mix-blend-mode:difference;",
);
const RING_STYLE: &str = concat!(
    "position:fixed;top:0;left:0;pointer-events:none;opacity:0;",
    "border-radius:50%;z-index:9998;transition:width 0.2s,height 0.2s,opacity 0.2s;",
);
const LABEL_STYLE: &str = concat!(
    "position:fixed;top:0;left:0;pointer-events:none;opacity:0;z-index:9999;",
    "font-size:12px;font-weight:700;text-transform:uppercase;letter-spacing:0.1em;color:#fff;",
);

/// Listeners attached to one interactive element.
struct HoverHandle {
    el: web::Element,
    _enter: Listener,
    _leave: Listener,
}

struct Visuals {
    dot: web::HtmlElement,
    ring: web::HtmlElement,
    label: web::HtmlElement,
    shown_label: RefCell<String>,
}

impl Visuals {
    fn create(document: &web::Document) -> anyhow::Result<Self> {
        let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
        let make = |class: &str, style: &str| -> anyhow::Result<web::HtmlElement> {
            let el = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el.set_class_name(class);
            _ = el.set_attribute("aria-hidden", "true");
            _ = el.set_attribute("style", style);
            body.append_child(&el).map_err(|e| anyhow::anyhow!("{:?}", e))?;
            Ok(el)
        };
        let dot = make(CURSOR_DOT_CLASS, DOT_STYLE)?;
        let ring = make(CURSOR_RING_CLASS, RING_STYLE)?;
        let label = make(CURSOR_LABEL_CLASS, LABEL_STYLE)?;
        Ok(Self {
            dot,
            ring,
            label,
            shown_label: RefCell::new(String::new()),
        })
    }

    fn render(&self, s: &CursorState) {
        if !s.is_placed() {
            return;
        }
        let accent = s.hovering;
        let d = s.dot_position();
        let style = self.dot.style();
        _ = style.set_property("opacity", "1");
        _ = style.set_property(
            "transform",
            &format!(
                "translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%) scale({:.3})",
                d.x,
                d.y,
                s.dot_scale()
            ),
        );
        _ = style.set_property(
            "background-color",
            if accent { CURSOR_ACCENT_COLOR } else { CURSOR_DOT_COLOR },
        );

        let r = s.ring_position();
        let size = format!("{:.0}px", s.ring_size_px());
        let style = self.ring.style();
        _ = style.set_property("opacity", &format!("{:.2}", s.ring_opacity()));
        _ = style.set_property("width", &size);
        _ = style.set_property("height", &size);
        _ = style.set_property(
            "border",
            &format!(
                "2px solid {}",
                if accent { CURSOR_ACCENT_COLOR } else { CURSOR_RING_BORDER }
            ),
        );
        _ = style.set_property(
            "transform",
            &format!(
                "translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%) scale({:.3})",
                r.x,
                r.y,
                s.ring_scale()
            ),
        );

        let label = s.hover_label();
        if *self.shown_label.borrow() != label {
            self.label.set_text_content(Some(label));
            *self.shown_label.borrow_mut() = label.to_string();
        }
        let style = self.label.style();
        _ = style.set_property("opacity", if label.is_empty() { "0" } else { "1" });
        _ = style.set_property(
            "transform",
            &format!(
                "translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%)",
                d.x,
                d.y + CURSOR_LABEL_OFFSET_PX
            ),
        );
    }

    fn remove(&self) {
        self.dot.remove();
        self.ring.remove();
        self.label.remove();
    }
}

pub struct CursorTracker {
    state: Rc<RefCell<CursorState>>,
    registry: Rc<RefCell<HoverRegistry<HoverHandle>>>,
    visuals: Rc<Visuals>,
    frame: Option<FrameLoop>,
    listeners: Vec<Listener>,
    watcher: Option<ElementWatcher>,
}

impl CursorTracker {
    /// `Ok(None)` on coarse-pointer devices: nothing is created or attached.
    pub fn start(document: &web::Document) -> anyhow::Result<Option<Self>> {
        if dom::is_coarse_pointer(COARSE_POINTER_QUERY) {
            log::info!("[cursor] coarse pointer, custom cursor disabled");
            return Ok(None);
        }
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;

        let state = Rc::new(RefCell::new(CursorState::default()));
        let registry: Rc<RefCell<HoverRegistry<HoverHandle>>> =
            Rc::new(RefCell::new(HoverRegistry::default()));
        let visuals = Rc::new(Visuals::create(document)?);
        let dirty = Rc::new(Cell::new(true));
        let next_key = Rc::new(Cell::new(1u32));

        let frame = {
            let state = state.clone();
            let visuals = visuals.clone();
            let registry = registry.clone();
            let dirty = dirty.clone();
            let document = document.clone();
            let next_key = next_key.clone();
            let waker_slot: Rc<RefCell<Option<Waker>>> = Rc::new(RefCell::new(None));
            let waker_for_step = waker_slot.clone();
            let frame = FrameLoop::new(move |dt| {
                if dirty.replace(false) {
                    if let Some(w) = waker_for_step.borrow().as_ref() {
                        rescan(&document, &state, &registry, w, &next_key);
                    }
                }
                let moving = state.borrow_mut().tick(dt);
                visuals.render(&state.borrow());
                moving
            });
            *waker_slot.borrow_mut() = Some(frame.waker());
            frame
        };
        let waker = frame.waker();
        let target: &web::EventTarget = window.as_ref();

        let mut listeners = Vec::with_capacity(3);
        {
            let state = state.clone();
            let waker = waker.clone();
            listeners.push(Listener::new(target, "pointermove", move |ev| {
                if let Some(pos) = dom::pointer_position(&ev) {
                    state.borrow_mut().pointer_move(pos);
                    waker.wake();
                }
            }));
        }
        {
            let state = state.clone();
            let waker = waker.clone();
            listeners.push(Listener::new(target, "pointerdown", move |_ev| {
                state.borrow_mut().pointer_down();
                waker.wake();
            }));
        }
        {
            let state = state.clone();
            let waker = waker.clone();
            listeners.push(Listener::new(target, "pointerup", move |_ev| {
                state.borrow_mut().pointer_up();
                waker.wake();
            }));
        }

        // Element-set changes are coalesced into one rescan on the next frame.
        let watcher = {
            let dirty = dirty.clone();
            let waker = waker.clone();
            ElementWatcher::subscribe(body.as_ref(), move || {
                dirty.set(true);
                waker.wake();
            })?
        };

        rescan(document, &state, &registry, &waker, &next_key);
        dirty.set(false);
        log::info!(
            "[cursor] tracking {} interactive elements",
            registry.borrow().len()
        );

        Ok(Some(Self {
            state,
            registry,
            visuals,
            frame: Some(frame),
            listeners,
            watcher: Some(watcher),
        }))
    }

    pub fn hover_listener_count(&self) -> usize {
        self.registry.borrow().len()
    }

    pub fn stop(&mut self) {
        log::debug!(
            "[cursor] releasing {} hover targets",
            self.hover_listener_count()
        );
        self.watcher.take();
        self.listeners.clear();
        self.registry.borrow_mut().clear();
        if let Some(frame) = self.frame.take() {
            frame.stop();
        }
        self.visuals.remove();
        *self.state.borrow_mut() = CursorState::default();
    }
}

impl Drop for CursorTracker {
    fn drop(&mut self) {
        if self.frame.is_some() {
            self.stop();
        }
    }
}

fn rescan(
    document: &web::Document,
    state: &Rc<RefCell<CursorState>>,
    registry: &Rc<RefCell<HoverRegistry<HoverHandle>>>,
    waker: &Waker,
    next_key: &Cell<u32>,
) {
    let elements = dom::query_all(document, INTERACTIVE_SELECTOR);
    let carried = elements
        .iter()
        .map(|el| el.get_attribute(CURSOR_KEY_ATTR).and_then(|v| v.parse::<u32>().ok()));
    let mut next = next_key.get();
    let keys = assign_keys(carried, &mut next);
    next_key.set(next);

    let live = keys.into_iter().zip(elements).map(|((k, fresh), el)| {
        if fresh {
            _ = el.set_attribute(CURSOR_KEY_ATTR, &k.to_string());
        }
        (k, el)
    });
    let removed = registry.borrow_mut().sync(
        live,
        |h: &HoverHandle, el: &web::Element| h.el.is_same_node(Some(el.as_ref())),
        |k, el: &web::Element| Some(attach_hover(el, k, state, waker)),
    );
    if !removed.is_empty() {
        state.borrow_mut().forget(&removed);
        log::debug!("[cursor] released {} hover targets", removed.len());
    }
}

fn attach_hover(
    el: &web::Element,
    key: u32,
    state: &Rc<RefCell<CursorState>>,
    waker: &Waker,
) -> HoverHandle {
    let target: &web::EventTarget = el.as_ref();
    let enter = {
        let state = state.clone();
        let waker = waker.clone();
        Listener::new(target, "pointerenter", move |ev| {
            let label = ev
                .current_target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .and_then(|el| el.get_attribute(CURSOR_LABEL_ATTR));
            state.borrow_mut().hover_enter(key, label.as_deref());
            waker.wake();
        })
    };
    let leave = {
        let state = state.clone();
        let waker = waker.clone();
        Listener::new(target, "pointerleave", move |_ev| {
            state.borrow_mut().hover_leave(key);
            waker.wake();
        })
    };
    HoverHandle {
        el: el.clone(),
        _enter: enter,
        _leave: leave,
    }
}
