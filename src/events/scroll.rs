use crate::constants::*;
use crate::core::{active_section, header_is_solid, HeaderVisibility, ScrollProgress, SectionBounds};
use crate::dom::{self, Listener};
use crate::frame::FrameLoop;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Fixed bar whose horizontal scale follows the smoothed page progress.
pub struct ScrollProgressBar {
    bar: web::Element,
    frame: FrameLoop,
    listeners: Vec<Listener>,
}

impl ScrollProgressBar {
    pub fn start(document: &web::Document) -> Option<Self> {
        let window = web::window()?;
        let bar = document.get_element_by_id(PROGRESS_BAR_ID)?;
        dom::set_style(&bar, "transform-origin", "left center");

        let progress = Rc::new(RefCell::new(ScrollProgress::default()));
        let frame = {
            let progress = progress.clone();
            let bar = bar.clone();
            FrameLoop::new(move |dt| {
                let mut p = progress.borrow_mut();
                let moving = p.tick(dt);
                dom::set_style(&bar, "transform", &format!("scaleX({:.4})", p.smoothed()));
                moving
            })
        };
        let waker = frame.waker();
        let refresh = {
            let progress = progress.clone();
            move || {
                if let Some((top, height, viewport)) = dom::scroll_metrics() {
                    progress.borrow_mut().update(top, height, viewport);
                    waker.wake();
                }
            }
        };
        refresh();

        let target: &web::EventTarget = window.as_ref();
        let on_scroll = refresh.clone();
        let on_resize = refresh;
        let listeners = vec![
            Listener::passive(target, "scroll", move |_ev| on_scroll()),
            Listener::passive(target, "resize", move |_ev| on_resize()),
        ];
        Some(Self {
            bar,
            frame,
            listeners,
        })
    }

    pub fn stop(&mut self) {
        self.listeners.clear();
        self.frame.stop();
        dom::set_style(&self.bar, "transform", "");
    }
}

impl Drop for ScrollProgressBar {
    fn drop(&mut self) {
        self.stop();
    }
}

struct NavTarget {
    link: web::Element,
    section: web::Element,
    id: String,
}

/// Header show/hide from scroll direction, solid background past the top,
/// and the active-section highlight in the navigation.
///
/// Scroll events only record the latest offset; everything is recomputed
/// at most once per animation frame.
pub struct HeaderTracker {
    header: web::Element,
    frame: FrameLoop,
    listeners: Vec<Listener>,
}

impl HeaderTracker {
    pub fn start(document: &web::Document) -> Option<Self> {
        let window = web::window()?;
        let header = document.get_element_by_id(HEADER_ID)?;
        dom::set_style(&header, "transition", "transform 0.3s ease-out");

        let targets: Vec<NavTarget> = dom::query_all(document, NAV_LINK_SELECTOR)
            .into_iter()
            .filter_map(|link| {
                let id = link.get_attribute("href")?.trim_start_matches('#').to_string();
                if id.is_empty() {
                    return None;
                }
                let section = document.get_element_by_id(&id)?;
                Some(NavTarget { link, section, id })
            })
            .collect();

        let visibility = RefCell::new(HeaderVisibility::default());
        let pending = Rc::new(Cell::new(true));
        let shown_active: RefCell<Option<String>> = RefCell::new(None);
        let frame = {
            let header = header.clone();
            let pending = pending.clone();
            FrameLoop::new(move |_dt| {
                if !pending.replace(false) {
                    return false;
                }
                let Some((y, _, viewport)) = dom::scroll_metrics() else {
                    return false;
                };
                let visible = visibility.borrow_mut().sample(y);
                dom::set_style(
                    &header,
                    "transform",
                    if visible { "translateY(0)" } else { "translateY(-100%)" },
                );
                let cl = header.class_list();
                _ = if header_is_solid(y) {
                    cl.add_1(HEADER_SOLID_CLASS)
                } else {
                    cl.remove_1(HEADER_SOLID_CLASS)
                };
                update_active_link(&targets, viewport, &shown_active);
                false
            })
        };
        let waker = frame.waker();
        frame.wake();

        let target: &web::EventTarget = window.as_ref();
        let mark = move || {
            pending.set(true);
            waker.wake();
        };
        let on_scroll = mark.clone();
        let on_resize = mark;
        let listeners = vec![
            Listener::passive(target, "scroll", move |_ev| on_scroll()),
            Listener::passive(target, "resize", move |_ev| on_resize()),
        ];
        Some(Self {
            header,
            frame,
            listeners,
        })
    }

    pub fn stop(&mut self) {
        self.listeners.clear();
        self.frame.stop();
        dom::set_style(&self.header, "transform", "");
    }
}

impl Drop for HeaderTracker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn update_active_link(targets: &[NavTarget], viewport: f64, shown: &RefCell<Option<String>>) {
    if targets.is_empty() {
        return;
    }
    let bounds: Vec<SectionBounds> = targets
        .iter()
        .map(|t| {
            let r = dom::element_rect(&t.section);
            SectionBounds {
                id: t.id.clone(),
                top: r.top as f64,
                height: r.height as f64,
            }
        })
        .collect();
    let active = active_section(&bounds, viewport).map(str::to_string);
    if *shown.borrow() == active {
        return;
    }
    for t in targets {
        let on = active.as_deref() == Some(t.id.as_str());
        let cl = t.link.class_list();
        if on {
            _ = cl.add_1(NAV_ACTIVE_CLASS);
            _ = t.link.set_attribute("aria-current", "true");
        } else {
            _ = cl.remove_1(NAV_ACTIVE_CLASS);
            _ = t.link.remove_attribute("aria-current");
        }
    }
    *shown.borrow_mut() = active;
}
