use crate::constants::*;
use crate::core::constants::{TYPEWRITER_DELETING_MS, TYPEWRITER_PAUSE_MS, TYPEWRITER_TYPING_MS};
use crate::core::{
    caret_opacity, parse_ms_attr, parse_words, Scramble, Typewriter, TypewriterConfig,
};
use crate::dom::{self, Listener, Timer};
use crate::frame::FrameLoop;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Cycling typewriter inside a `[data-typewriter]` element.
pub struct TypewriterText {
    timer: Timer,
    caret: FrameLoop,
}

impl TypewriterText {
    pub fn start(document: &web::Document, el: &web::Element) -> Option<Self> {
        let words = parse_words(el.get_attribute(TYPEWRITER_WORDS_ATTR).as_deref());
        if words.is_empty() {
            log::warn!("[typewriter] no words on element, skipping");
            return None;
        }
        let config = TypewriterConfig {
            typing: parse_ms_attr(
                el.get_attribute(TYPEWRITER_TYPING_ATTR).as_deref(),
                TYPEWRITER_TYPING_MS,
            ),
            deleting: parse_ms_attr(
                el.get_attribute(TYPEWRITER_DELETING_ATTR).as_deref(),
                TYPEWRITER_DELETING_MS,
            ),
            pause: parse_ms_attr(
                el.get_attribute(TYPEWRITER_PAUSE_ATTR).as_deref(),
                TYPEWRITER_PAUSE_MS,
            ),
        };

        let text = dom::text_slot(document, el, "");
        let caret_el = document
            .create_element("span")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        caret_el.set_class_name(TYPEWRITER_CARET_CLASS);
        _ = caret_el.set_attribute("aria-hidden", "true");
        _ = caret_el.set_attribute(
            "style",
            concat!(
                "display:inline-block;width:3px;height:1em;margin-left:4px;",
                "vertical-align:middle;background:currentColor;",
            ),
        );
        _ = el.append_child(&caret_el);

        let mut machine = Typewriter::new(words, config);
        let first = machine.next_delay();
        let timer = Timer::new(move || {
            machine.fire();
            text.set_node_value(Some(&machine.text()));
            machine.next_delay()
        });
        if let Some(d) = first {
            timer.arm(d);
        }

        let mut elapsed = Duration::ZERO;
        let caret = FrameLoop::new(move |dt| {
            elapsed += dt;
            _ = caret_el
                .style()
                .set_property("opacity", &format!("{:.3}", caret_opacity(elapsed)));
            true
        });
        caret.wake();

        Some(Self { timer, caret })
    }

    pub fn stop(&mut self) {
        self.timer.cancel();
        self.caret.stop();
    }
}

impl Drop for TypewriterText {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Hover-triggered glyph scramble on a `[data-scramble]` element.
pub struct ScrambleText {
    frame: FrameLoop,
    listeners: Vec<Listener>,
    restore: Rc<dyn Fn()>,
}

impl ScrambleText {
    pub fn start(document: &web::Document, el: &web::Element) -> Option<Self> {
        let original = el.text_content().unwrap_or_default();
        if original.trim().is_empty() {
            return None;
        }
        let node = dom::text_slot(document, el, &original);
        let scramble = Rc::new(RefCell::new(Scramble::new(&original)));

        let frame = {
            let scramble = scramble.clone();
            let node = node.clone();
            FrameLoop::new(move |dt| {
                let mut s = scramble.borrow_mut();
                if let Some(frame) = s.tick(dt, &mut rand::thread_rng()) {
                    node.set_node_value(Some(&frame));
                }
                s.active()
            })
        };
        let restore: Rc<dyn Fn()> = {
            let scramble = scramble.clone();
            Rc::new(move || {
                let text = scramble.borrow_mut().stop();
                node.set_node_value(Some(&text));
            })
        };

        let waker = frame.waker();
        let target: &web::EventTarget = el.as_ref();
        let enter = Listener::new(target, "pointerenter", move |_ev| {
            scramble.borrow_mut().start();
            waker.wake();
        });
        let leave = {
            let restore = restore.clone();
            Listener::new(target, "pointerleave", move |_ev| restore())
        };
        Some(Self {
            frame,
            listeners: vec![enter, leave],
            restore,
        })
    }

    pub fn stop(&mut self) {
        self.listeners.clear();
        self.frame.stop();
        (self.restore)();
    }
}

impl Drop for ScrambleText {
    fn drop(&mut self) {
        self.stop();
    }
}
