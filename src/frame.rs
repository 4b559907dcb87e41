use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// dt reported for the first frame after waking
const FIRST_FRAME_DT: Duration = Duration::from_millis(16);

struct FrameInner {
    raf: Cell<Option<i32>>,
    last: Cell<Option<Instant>>,
    closure: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameInner {
    fn request(&self) {
        if self.raf.get().is_some() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        if let Some(c) = self.closure.borrow().as_ref() {
            match w.request_animation_frame(c.as_ref().unchecked_ref()) {
                Ok(id) => self.raf.set(Some(id)),
                Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.raf.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.last.set(None);
    }
}

/// A `requestAnimationFrame` loop that only runs while its step reports
/// motion. Input handlers restart it through a [`Waker`].
pub struct FrameLoop {
    inner: Rc<FrameInner>,
}

/// Weak handle used by event listeners to restart a sleeping loop.
#[derive(Clone)]
pub struct Waker(Weak<FrameInner>);

impl Waker {
    pub fn wake(&self) {
        if let Some(inner) = self.0.upgrade() {
            inner.request();
        }
    }
}

impl FrameLoop {
    pub fn new(mut step: impl FnMut(Duration) -> bool + 'static) -> Self {
        let inner = Rc::new(FrameInner {
            raf: Cell::new(None),
            last: Cell::new(None),
            closure: RefCell::new(None),
        });
        let weak = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.raf.set(None);
            let now = Instant::now();
            let dt = inner
                .last
                .get()
                .map(|t| now.duration_since(t))
                .unwrap_or(FIRST_FRAME_DT);
            inner.last.set(Some(now));
            if step(dt) {
                inner.request();
            } else {
                inner.last.set(None);
            }
        }) as Box<dyn FnMut()>);
        *inner.closure.borrow_mut() = Some(closure);
        Self { inner }
    }

    pub fn waker(&self) -> Waker {
        Waker(Rc::downgrade(&self.inner))
    }

    pub fn wake(&self) {
        self.inner.request();
    }

    pub fn stop(&self) {
        self.inner.cancel();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.inner.cancel();
        self.inner.closure.borrow_mut().take();
    }
}
