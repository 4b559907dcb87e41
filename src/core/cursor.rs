// Custom cursor state: a tight dot, a looser follower ring, hover and click
// flags, plus the registry of hover listeners for interactive elements.

use super::constants::*;
use super::spring::{Spring, SpringConfig, SpringVec2};
use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct CursorState {
    dot: SpringVec2,
    ring: SpringVec2,
    dot_scale: Spring,
    ring_scale: Spring,
    placed: bool,
    pub hovering: bool,
    pub clicking: bool,
    hover_key: Option<u32>,
    hover_label: String,
}

impl Default for CursorState {
    fn default() -> Self {
        let scale = SpringConfig::from_preset(CURSOR_SCALE_SPRING);
        Self {
            dot: SpringVec2::new(SpringConfig::from_preset(CURSOR_DOT_SPRING), Vec2::ZERO),
            ring: SpringVec2::new(SpringConfig::from_preset(CURSOR_RING_SPRING), Vec2::ZERO),
            dot_scale: Spring::new(scale, 1.0),
            ring_scale: Spring::new(scale, 1.0),
            placed: false,
            hovering: false,
            clicking: false,
            hover_key: None,
            hover_label: String::new(),
        }
    }
}

impl CursorState {
    pub fn pointer_move(&mut self, pos: Vec2) {
        if !pos.is_finite() {
            return;
        }
        if self.placed {
            self.dot.set_target(pos);
            self.ring.set_target(pos);
        } else {
            // first sighting: start where the pointer is rather than flying in from (0, 0)
            self.dot.jump_to(pos);
            self.ring.jump_to(pos);
            self.placed = true;
        }
    }

    pub fn pointer_down(&mut self) {
        self.clicking = true;
        self.retarget_scales();
    }

    pub fn pointer_up(&mut self) {
        self.clicking = false;
        self.retarget_scales();
    }

    pub fn hover_enter(&mut self, key: u32, label: Option<&str>) {
        self.hovering = true;
        self.hover_key = Some(key);
        self.hover_label = label.map(str::trim).unwrap_or_default().to_string();
        self.retarget_scales();
    }

    /// Ignored unless `key` is the element currently hovered.
    pub fn hover_leave(&mut self, key: u32) {
        if self.hover_key == Some(key) {
            self.clear_hover();
        }
    }

    /// Drop hover state held by elements that left the document.
    pub fn forget(&mut self, removed: &[u32]) {
        if let Some(k) = self.hover_key {
            if removed.contains(&k) {
                self.clear_hover();
            }
        }
    }

    fn clear_hover(&mut self) {
        self.hovering = false;
        self.hover_key = None;
        self.hover_label.clear();
        self.retarget_scales();
    }

    fn retarget_scales(&mut self) {
        self.dot_scale.set_target(self.dot_scale_target());
        self.ring_scale.set_target(if self.clicking {
            CURSOR_RING_SCALE_CLICK
        } else {
            1.0
        });
    }

    pub fn dot_scale_target(&self) -> f32 {
        if self.clicking {
            CURSOR_DOT_SCALE_CLICK
        } else if self.hovering {
            CURSOR_DOT_SCALE_HOVER
        } else {
            1.0
        }
    }

    #[inline]
    pub fn hover_label(&self) -> &str {
        &self.hover_label
    }

    #[inline]
    pub fn hover_key(&self) -> Option<u32> {
        self.hover_key
    }

    #[inline]
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    pub fn dot_position(&self) -> Vec2 {
        self.dot.current()
    }

    pub fn ring_position(&self) -> Vec2 {
        self.ring.current()
    }

    pub fn dot_scale(&self) -> f32 {
        self.dot_scale.current()
    }

    pub fn ring_scale(&self) -> f32 {
        self.ring_scale.current()
    }

    pub fn ring_size_px(&self) -> f32 {
        if self.hovering {
            CURSOR_RING_SIZE_HOVER_PX
        } else {
            CURSOR_RING_SIZE_PX
        }
    }

    pub fn ring_opacity(&self) -> f32 {
        if self.hovering {
            CURSOR_RING_OPACITY_HOVER
        } else {
            CURSOR_RING_OPACITY
        }
    }

    /// Advance all springs. Returns `true` while anything is still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let a = self.dot.tick(dt);
        let b = self.ring.tick(dt);
        let c = self.dot_scale.tick(dt);
        let d = self.ring_scale.tick(dt);
        a || b || c || d
    }
}

/// Keys for one document-order scan. An element keeps the key it already
/// carries unless an earlier element in the same scan claimed it (cloned
/// nodes copy their source's key); everything else gets a fresh non-zero
/// key from `next_key`. Returns `(key, fresh)` per element.
pub fn assign_keys<I>(existing: I, next_key: &mut u32) -> Vec<(u32, bool)>
where
    I: IntoIterator<Item = Option<u32>>,
{
    let mut claimed = FnvHashSet::default();
    let mut out = Vec::new();
    for carried in existing {
        let key = match carried {
            Some(k) if k != 0 && !claimed.contains(&k) => (k, false),
            _ => loop {
                let k = *next_key;
                *next_key = next_key.wrapping_add(1).max(1);
                if k != 0 && !claimed.contains(&k) {
                    break (k, true);
                }
            },
        };
        claimed.insert(key.0);
        out.push(key);
    }
    out
}

/// One listener handle per live interactive element, keyed by element key.
/// Dropping a handle is expected to detach its listeners.
pub struct HoverRegistry<H> {
    handles: FnvHashMap<u32, H>,
}

impl<H> Default for HoverRegistry<H> {
    fn default() -> Self {
        Self {
            handles: FnvHashMap::default(),
        }
    }
}

impl<H> HoverRegistry<H> {
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn contains(&self, key: u32) -> bool {
        self.handles.contains_key(&key)
    }

    /// Reconcile against the `(key, element)` pairs currently in the
    /// document. A key only counts as attached while `is_bound` confirms its
    /// handle belongs to that element; a key now carried by a different
    /// element (a replaced or cloned node) has its old handle dropped and is
    /// attached again. `attach` returning `None` skips the element.
    ///
    /// Returns the keys whose handle was dropped, sorted.
    pub fn sync<T, I, B, F>(&mut self, live: I, is_bound: B, mut attach: F) -> Vec<u32>
    where
        I: IntoIterator<Item = (u32, T)>,
        B: Fn(&H, &T) -> bool,
        F: FnMut(u32, &T) -> Option<H>,
    {
        let live: FnvHashMap<u32, T> = live.into_iter().collect();
        let mut removed: Vec<u32> = self
            .handles
            .iter()
            .filter(|(k, h)| live.get(*k).map_or(true, |el| !is_bound(*h, el)))
            .map(|(k, _)| *k)
            .collect();
        removed.sort_unstable();
        for k in &removed {
            self.handles.remove(k);
        }
        for (k, el) in &live {
            if self.handles.contains_key(k) {
                continue;
            }
            if let Some(h) = attach(*k, el) {
                self.handles.insert(*k, h);
            }
        }
        removed
    }

    pub fn clear(&mut self) {
        self.handles.clear();
    }
}
