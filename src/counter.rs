use crate::constants::*;
use crate::core::constants::COUNT_UP_DEFAULT_SECS;
use crate::core::{format_count, parse_f32_attr, parse_number, CountUp};
use crate::dom::{self, VisibilityWatcher};
use crate::frame::FrameLoop;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

const MAX_DURATION_SECS: f32 = 60.0;

/// `[data-count-up]` number that counts up once, the first time it scrolls
/// into view.
pub struct CountUpText {
    frame: FrameLoop,
    watcher: Option<VisibilityWatcher>,
}

impl CountUpText {
    pub fn start(document: &web::Document, el: &web::Element) -> Option<Self> {
        let target = parse_number(el.get_attribute(COUNT_UP_ATTR).as_deref())?;
        let secs = parse_f32_attr(
            el.get_attribute(COUNT_UP_DURATION_ATTR).as_deref(),
            COUNT_UP_DEFAULT_SECS,
        )
        .min(MAX_DURATION_SECS);
        let prefix = el.get_attribute(COUNT_UP_PREFIX_ATTR).unwrap_or_default();
        let suffix = el.get_attribute(COUNT_UP_SUFFIX_ATTR).unwrap_or_default();
        let node = dom::text_slot(document, el, &format!("{prefix}{}{suffix}", format_count(0.0)));

        let count = Rc::new(RefCell::new(CountUp::new(
            target,
            Duration::from_secs_f32(secs),
        )));
        let frame = {
            let count = count.clone();
            FrameLoop::new(move |dt| {
                let mut c = count.borrow_mut();
                let running = c.tick(dt);
                node.set_node_value(Some(&format!("{prefix}{}{suffix}", c.text())));
                running
            })
        };
        let waker = frame.waker();
        let watcher = VisibilityWatcher::observe(el, COUNT_UP_ROOT_MARGIN, move |visible| {
            if !visible {
                return false;
            }
            if count.borrow_mut().trigger() {
                waker.wake();
            }
            true
        });
        let watcher = match watcher {
            Ok(w) => Some(w),
            Err(e) => {
                log::error!("[count-up] {:?}", e);
                None
            }
        };
        Some(Self { frame, watcher })
    }

    pub fn stop(&mut self) {
        self.watcher.take();
        self.frame.stop();
    }
}

impl Drop for CountUpText {
    fn drop(&mut self) {
        self.stop();
    }
}
