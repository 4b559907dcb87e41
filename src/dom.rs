use crate::core::Rect;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Capability check for touch-first devices, done once per mount.
pub fn is_coarse_pointer(query: &str) -> bool {
    web::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let list = match document.query_selector_all(selector) {
        Ok(l) => l,
        Err(e) => {
            log::warn!("[dom] bad selector {}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

#[inline]
pub fn pointer_position(ev: &web::Event) -> Option<Vec2> {
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| Vec2::new(m.client_x() as f32, m.client_y() as f32))
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        _ = h.style().set_property(property, value);
    }
}

/// (scroll offset, scrollable height, viewport height)
pub fn scroll_metrics() -> Option<(f64, f64, f64)> {
    let window = web::window()?;
    let root = window.document()?.document_element()?;
    let top = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    Some((top, root.scroll_height() as f64, viewport))
}

/// Replace the element's children with a single text node and return it,
/// so later updates are character-data writes rather than child-list churn.
pub fn text_slot(document: &web::Document, el: &web::Element, initial: &str) -> web::Node {
    el.set_text_content(None);
    let node: web::Node = document.create_text_node(initial).into();
    _ = el.append_child(&node);
    node
}

/// An event listener that is removed when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
        _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }

    /// Passive variant for scroll-type events.
    pub fn passive(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

struct TimerInner {
    handle: Cell<Option<i32>>,
    closure: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl TimerInner {
    fn arm(&self, delay: Duration) {
        self.cancel();
        let Some(window) = web::window() else {
            return;
        };
        let closure = self.closure.borrow();
        if let Some(c) = closure.as_ref() {
            let ms = delay.as_millis().min(i32::MAX as u128) as i32;
            let callback = c.as_ref().unchecked_ref();
            match window.set_timeout_with_callback_and_timeout_and_arguments_0(callback, ms) {
                Ok(h) => self.handle.set(Some(h)),
                Err(e) => log::error!("[timer] setTimeout failed: {:?}", e),
            }
        }
    }

    fn cancel(&self) {
        if let Some(h) = self.handle.take() {
            if let Some(window) = web::window() {
                window.clear_timeout_with_handle(h);
            }
        }
    }
}

/// A self-rescheduling timeout with one reusable callback and at most one
/// armed handle. The callback returns the delay until its next run, or
/// `None` to stay idle. Dropping the timer clears the pending timeout.
pub struct Timer {
    inner: Rc<TimerInner>,
}

impl Timer {
    pub fn new(mut on_fire: impl FnMut() -> Option<Duration> + 'static) -> Self {
        let inner = Rc::new(TimerInner {
            handle: Cell::new(None),
            closure: RefCell::new(None),
        });
        let weak: Weak<TimerInner> = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            if let Some(next) = on_fire() {
                inner.arm(next);
            }
        }) as Box<dyn FnMut()>);
        *inner.closure.borrow_mut() = Some(closure);
        Self { inner }
    }

    pub fn arm(&self, delay: Duration) {
        self.inner.arm(delay);
    }

    pub fn cancel(&self) {
        self.inner.cancel();
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.inner.cancel();
        self.inner.closure.borrow_mut().take();
    }
}

/// Notifies when elements are added to or removed from a subtree.
pub struct ElementWatcher {
    observer: web::MutationObserver,
    _closure: Closure<dyn FnMut(js_sys::Array, web::MutationObserver)>,
}

impl ElementWatcher {
    pub fn subscribe(
        root: &web::Node,
        mut on_change: impl FnMut() + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(
            move |_records: js_sys::Array, _obs: web::MutationObserver| {
                on_change();
            },
        ) as Box<dyn FnMut(_, _)>);
        let observer = web::MutationObserver::new(closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("MutationObserver: {:?}", e))?;
        let init = web::MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        observer
            .observe_with_options(root, &init)
            .map_err(|e| anyhow::anyhow!("observe: {:?}", e))?;
        Ok(Self {
            observer,
            _closure: closure,
        })
    }
}

impl Drop for ElementWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Reports viewport intersection for one element. The callback gets the
/// intersecting flag and returns `true` to stop watching.
pub struct VisibilityWatcher {
    observer: web::IntersectionObserver,
    _closure: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl VisibilityWatcher {
    pub fn observe(
        el: &web::Element,
        root_margin: &str,
        mut on_change: impl FnMut(bool) -> bool + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(
            move |entries: js_sys::Array, obs: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if on_change(entry.is_intersecting()) {
                        obs.disconnect();
                        return;
                    }
                }
            },
        ) as Box<dyn FnMut(_, _)>);
        let init = web::IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        let observer =
            web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
        observer.observe(el);
        Ok(Self {
            observer,
            _closure: closure,
        })
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
