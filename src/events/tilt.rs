use crate::constants::*;
use crate::core::constants::{
    MAGNETIC_DEFAULT_STRENGTH, TILT_DEFAULT_AMOUNT_DEG, TILT_DEFAULT_HOVER_SCALE,
};
use crate::core::{parse_f32_attr, MagneticState, TiltState};
use crate::dom::{self, Listener};
use crate::frame::FrameLoop;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Pointer-driven 3D tilt for one `[data-tilt]` element.
pub struct TiltCard {
    el: web::Element,
    frame: FrameLoop,
    listeners: Vec<Listener>,
}

impl TiltCard {
    pub fn start(el: &web::Element) -> Self {
        let amount = parse_f32_attr(
            el.get_attribute(TILT_ATTR).as_deref(),
            TILT_DEFAULT_AMOUNT_DEG,
        );
        let glow = el
            .get_attribute(TILT_GLOW_ATTR)
            .filter(|g| !g.trim().is_empty())
            .unwrap_or_else(|| TILT_DEFAULT_GLOW.to_string());
        dom::set_style(el, "--tilt-glow", &glow);
        dom::set_style(el, "transform-style", "preserve-3d");

        let state = Rc::new(RefCell::new(TiltState::new(amount, TILT_DEFAULT_HOVER_SCALE)));
        let frame = {
            let state = state.clone();
            let el = el.clone();
            FrameLoop::new(move |dt| {
                let mut s = state.borrow_mut();
                let moving = s.tick(dt);
                dom::set_style(&el, "transform", &s.css_transform());
                moving
            })
        };
        let waker = frame.waker();
        let target: &web::EventTarget = el.as_ref();
        let mut listeners = Vec::with_capacity(3);
        {
            let state = state.clone();
            let waker = waker.clone();
            let el = el.clone();
            listeners.push(Listener::new(target, "pointerenter", move |_ev| {
                state.borrow_mut().enter();
                _ = el.class_list().add_1(TILT_HOVERED_CLASS);
                waker.wake();
            }));
        }
        {
            let state = state.clone();
            let waker = waker.clone();
            let el = el.clone();
            listeners.push(Listener::new(target, "pointermove", move |ev| {
                if let Some(p) = dom::pointer_position(&ev) {
                    state.borrow_mut().move_to(dom::element_rect(&el), p);
                    waker.wake();
                }
            }));
        }
        {
            let state = state.clone();
            let waker = waker.clone();
            let el = el.clone();
            listeners.push(Listener::new(target, "pointerleave", move |_ev| {
                state.borrow_mut().leave();
                _ = el.class_list().remove_1(TILT_HOVERED_CLASS);
                waker.wake();
            }));
        }
        Self {
            el: el.clone(),
            frame,
            listeners,
        }
    }

    pub fn stop(&mut self) {
        self.frame.stop();
        self.listeners.clear();
        _ = self.el.class_list().remove_1(TILT_HOVERED_CLASS);
        dom::set_style(&self.el, "transform", "");
    }
}

impl Drop for TiltCard {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Pulls a `[data-magnetic]` element toward the pointer while hovered.
pub struct MagneticButton {
    el: web::Element,
    frame: FrameLoop,
    listeners: Vec<Listener>,
}

impl MagneticButton {
    pub fn start(el: &web::Element) -> Self {
        let strength = parse_f32_attr(
            el.get_attribute(MAGNETIC_ATTR).as_deref(),
            MAGNETIC_DEFAULT_STRENGTH,
        );
        let state = Rc::new(RefCell::new(MagneticState::new(strength)));
        let frame = {
            let state = state.clone();
            let el = el.clone();
            FrameLoop::new(move |dt| {
                let mut s = state.borrow_mut();
                let moving = s.tick(dt);
                dom::set_style(&el, "transform", &s.css_transform());
                moving
            })
        };
        let waker = frame.waker();
        let target: &web::EventTarget = el.as_ref();
        let mut listeners = Vec::with_capacity(2);
        {
            let state = state.clone();
            let waker = waker.clone();
            let el = el.clone();
            listeners.push(Listener::new(target, "pointermove", move |ev| {
                if let Some(p) = dom::pointer_position(&ev) {
                    state.borrow_mut().move_to(dom::element_rect(&el), p);
                    waker.wake();
                }
            }));
        }
        {
            let state = state.clone();
            let waker = waker.clone();
            listeners.push(Listener::new(target, "pointerleave", move |_ev| {
                state.borrow_mut().leave();
                waker.wake();
            }));
        }
        Self {
            el: el.clone(),
            frame,
            listeners,
        }
    }

    pub fn stop(&mut self) {
        self.frame.stop();
        self.listeners.clear();
        dom::set_style(&self.el, "transform", "");
    }
}

impl Drop for MagneticButton {
    fn drop(&mut self) {
        self.stop();
    }
}
