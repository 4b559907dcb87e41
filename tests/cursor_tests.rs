// Host-side tests for cursor state and the hover listener registry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod spring {
    include!("../src/core/spring.rs");
}
mod cursor {
    include!("../src/core/cursor.rs");
}

use constants::*;
use cursor::*;
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

/// Stand-in for a pair of DOM listeners bound to one node: counts how many
/// are alive.
struct CountedHandle {
    node: u32,
    live: Rc<Cell<usize>>,
}

impl CountedHandle {
    fn new(node: u32, live: &Rc<Cell<usize>>) -> Self {
        live.set(live.get() + 1);
        Self {
            node,
            live: live.clone(),
        }
    }
}

impl Drop for CountedHandle {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

/// Sync `(key, node)` pairs, where the node id stands in for DOM identity.
fn sync_nodes(
    reg: &mut HoverRegistry<CountedHandle>,
    pairs: &[(u32, u32)],
    live: &Rc<Cell<usize>>,
) -> Vec<u32> {
    reg.sync(
        pairs.iter().copied(),
        |h: &CountedHandle, node: &u32| h.node == *node,
        |_, node: &u32| Some(CountedHandle::new(*node, live)),
    )
}

/// Node ids double as keys for elements that never collide.
fn pairs(keys: &[u32]) -> Vec<(u32, u32)> {
    keys.iter().map(|k| (*k, *k)).collect()
}

fn is_self(_: &(), _: &u32) -> bool {
    true
}

fn settle(s: &mut CursorState) {
    for _ in 0..600 {
        if !s.tick(FRAME) {
            return;
        }
    }
    panic!("cursor never settled");
}

#[test]
fn first_move_places_without_flying_in() {
    let mut s = CursorState::default();
    assert!(!s.is_placed());
    s.pointer_move(Vec2::new(300.0, 200.0));
    assert!(s.is_placed());
    assert_eq!(s.dot_position(), Vec2::new(300.0, 200.0));
    assert_eq!(s.ring_position(), Vec2::new(300.0, 200.0));
}

#[test]
fn dot_leads_ring() {
    let mut s = CursorState::default();
    s.pointer_move(Vec2::ZERO);
    s.pointer_move(Vec2::new(200.0, 0.0));
    for _ in 0..3 {
        s.tick(FRAME);
    }
    assert!(s.dot_position().x > s.ring_position().x);
    settle(&mut s);
    assert_eq!(s.dot_position(), Vec2::new(200.0, 0.0));
    assert_eq!(s.ring_position(), Vec2::new(200.0, 0.0));
}

#[test]
fn non_finite_pointer_is_ignored() {
    let mut s = CursorState::default();
    s.pointer_move(Vec2::new(f32::NAN, 1.0));
    assert!(!s.is_placed());
}

#[test]
fn hover_scales_and_labels() {
    let mut s = CursorState::default();
    s.hover_enter(7, Some("  View  "));
    assert!(s.hovering);
    assert_eq!(s.hover_label(), "View");
    assert_eq!(s.hover_key(), Some(7));
    assert_eq!(s.dot_scale_target(), CURSOR_DOT_SCALE_HOVER);
    assert_eq!(s.ring_size_px(), CURSOR_RING_SIZE_HOVER_PX);
    assert_eq!(s.ring_opacity(), CURSOR_RING_OPACITY_HOVER);
    settle(&mut s);
    assert_eq!(s.dot_scale(), CURSOR_DOT_SCALE_HOVER);

    s.hover_leave(7);
    assert!(!s.hovering);
    assert_eq!(s.hover_label(), "");
    assert_eq!(s.ring_size_px(), CURSOR_RING_SIZE_PX);
    settle(&mut s);
    assert_eq!(s.dot_scale(), 1.0);
}

#[test]
fn click_wins_over_hover() {
    let mut s = CursorState::default();
    s.hover_enter(1, None);
    s.pointer_down();
    assert_eq!(s.dot_scale_target(), CURSOR_DOT_SCALE_CLICK);
    settle(&mut s);
    assert_eq!(s.ring_scale(), CURSOR_RING_SCALE_CLICK);
    s.pointer_up();
    assert_eq!(s.dot_scale_target(), CURSOR_DOT_SCALE_HOVER);
    settle(&mut s);
    assert_eq!(s.ring_scale(), 1.0);
}

#[test]
fn stale_leave_does_not_clear_newer_hover() {
    let mut s = CursorState::default();
    s.hover_enter(1, Some("one"));
    s.hover_enter(2, Some("two"));
    s.hover_leave(1);
    assert!(s.hovering);
    assert_eq!(s.hover_label(), "two");
}

#[test]
fn removed_element_clears_hover() {
    let mut s = CursorState::default();
    s.hover_enter(3, Some("Open"));
    s.forget(&[1, 2]);
    assert!(s.hovering);
    s.forget(&[3]);
    assert!(!s.hovering);
    assert_eq!(s.hover_key(), None);
}

#[test]
fn registry_attaches_new_elements() {
    let live = Rc::new(Cell::new(0));
    let mut reg = HoverRegistry::default();
    let removed = sync_nodes(&mut reg, &pairs(&[1, 2, 3]), &live);
    assert!(removed.is_empty());
    assert_eq!(reg.len(), 3);
    assert_eq!(live.get(), 3);

    // an element added later gets exactly one handle
    sync_nodes(&mut reg, &pairs(&[1, 2, 3, 4]), &live);
    assert!(reg.contains(4));
    assert_eq!(live.get(), 4);
}

#[test]
fn registry_does_not_leak_across_churn() {
    let live = Rc::new(Cell::new(0));
    let mut reg = HoverRegistry::default();
    for round in 0..1000u32 {
        sync_nodes(&mut reg, &pairs(&[0, round + 1, round + 2]), &live);
        assert_eq!(reg.len(), 3);
        assert_eq!(live.get(), 3);
    }
    let removed = sync_nodes(&mut reg, &[], &live);
    assert_eq!(removed.len(), 3);
    assert_eq!(live.get(), 0);
    assert!(reg.is_empty());
}

#[test]
fn key_moved_to_another_node_is_reattached() {
    let live = Rc::new(Cell::new(0));
    let mut reg = HoverRegistry::default();
    sync_nodes(&mut reg, &[(5, 100)], &live);

    // markup re-serialised: a new node now carries key 5
    let removed = sync_nodes(&mut reg, &[(5, 200)], &live);
    assert_eq!(removed, vec![5]);
    assert!(reg.contains(5));
    assert_eq!(live.get(), 1);

    // the next scan finds it bound correctly and leaves it alone
    assert!(sync_nodes(&mut reg, &[(5, 200)], &live).is_empty());
    assert_eq!(live.get(), 1);
}

#[test]
fn cloned_node_before_source_gets_its_own_handle() {
    let live = Rc::new(Cell::new(0));
    let mut reg = HoverRegistry::default();
    let mut next = 1;
    let first = assign_keys([None], &mut next);
    assert_eq!(first, vec![(1, true)]);
    sync_nodes(&mut reg, &[(1, 100)], &live);

    // clone (node 101) inserted ahead of its source, both carrying key 1
    let keys = assign_keys([Some(1), Some(1)], &mut next);
    assert_eq!(keys, vec![(1, false), (2, true)]);
    let removed = sync_nodes(&mut reg, &[(keys[0].0, 101), (keys[1].0, 100)], &live);
    assert_eq!(removed, vec![1]);
    assert_eq!(reg.len(), 2);
    assert_eq!(live.get(), 2);
}

#[test]
fn assign_keys_keeps_unique_carried_keys() {
    let mut next = 10;
    let keys = assign_keys([Some(3), None, Some(7), Some(3), Some(0)], &mut next);
    assert_eq!(keys, vec![(3, false), (10, true), (7, false), (11, true), (12, true)]);
    assert_eq!(next, 13);
}

#[test]
fn assign_keys_skips_keys_claimed_in_the_scan() {
    let mut next = 4;
    let keys = assign_keys([Some(4), None], &mut next);
    assert_eq!(keys, vec![(4, false), (5, true)]);
}

#[test]
fn registry_reports_removed_keys_sorted() {
    let mut reg: HoverRegistry<()> = HoverRegistry::default();
    reg.sync(pairs(&[5, 1, 9, 3]), is_self, |_, _| Some(()));
    let removed = reg.sync(pairs(&[3]), is_self, |_, _| Some(()));
    assert_eq!(removed, vec![1, 5, 9]);
}

#[test]
fn registry_skips_declined_attach_and_retries_later() {
    let mut reg: HoverRegistry<()> = HoverRegistry::default();
    reg.sync(pairs(&[1, 2]), is_self, |k, _| (k != 2).then_some(()));
    assert!(!reg.contains(2));
    reg.sync(pairs(&[1, 2]), is_self, |_, _| Some(()));
    assert!(reg.contains(2));
}

#[test]
fn clear_drops_every_handle() {
    let live = Rc::new(Cell::new(0));
    let mut reg = HoverRegistry::default();
    sync_nodes(&mut reg, &pairs(&[1, 2]), &live);
    reg.clear();
    assert_eq!(live.get(), 0);
}
