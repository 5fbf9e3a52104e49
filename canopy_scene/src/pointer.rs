// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-event dispatch over the scene.
//!
//! Events enter at any item (conventionally the root the embedder maintains)
//! and are dispatched depth-first to spatial descendants. Before recursing,
//! each item subtracts its own screen position from the local position, so
//! every item sees pointer coordinates in its own local space. [`Item::Group`]
//! nodes are traversed through transparently and contribute no offset.
//!
//! Acceptance is the logical OR over the item and its descendants; the host
//! can use it to decide whether an event was consumed by the overlay.
//!
//! Per-embedder behavior (custom hit shapes, drag payloads, drag policies) is
//! injected through [`PointerHooks`]; the plain `mouse_*` methods use
//! [`DefaultHooks`].
//!
//! [`Item::Group`]: crate::Item::Group

use glam::DVec3;
use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use canopy_tree::NodeId;

use crate::item::{Capability, ItemFlags, ItemState};
use crate::scene::Scene;
use crate::viewport::Viewport;

/// Pointer buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Middle button or wheel press.
    Middle,
    /// Secondary button.
    Right,
}

bitflags::bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift: extend the selection instead of replacing it.
        const SHIFT = 1 << 0;
        /// Ctrl: toggle selection membership.
        const CTRL = 1 << 1;
        /// Alt.
        const ALT = 1 << 2;
    }
}

/// Overridable pointer behavior, injected per dispatch call.
///
/// Every method has a default mirroring the stock behavior; embedders
/// override what they need (a custom hit shape, a richer drag payload, a
/// constrained drag policy) and leave the rest.
pub trait PointerHooks {
    /// Is this screen position on top of the item?
    ///
    /// Default: point-in-[`Scene::screen_rect`] (for point items, a
    /// [`POINT_HIT_SIZE`](crate::POINT_HIT_SIZE) square centered on the item).
    fn hit_test(
        &mut self,
        scene: &Scene,
        id: NodeId,
        viewport: &dyn Viewport,
        local: Point,
        screen: Point,
    ) -> bool {
        let _ = local;
        scene
            .screen_rect(id, viewport)
            .is_some_and(|rect| rect.contains_point(screen))
    }

    /// The position snapshot taken when a drag starts.
    ///
    /// Default: the item's current position.
    fn drag_data(&mut self, scene: &Scene, id: NodeId) -> DVec3 {
        scene.point(id).map_or(DVec3::ZERO, |point| point.position)
    }

    /// Applies a drag update.
    ///
    /// `start` is the snapshot from [`PointerHooks::drag_data`]; `delta` is
    /// the local-space offset from the drag origin, so the default policy is
    /// absolute repositioning against the snapshot, not incremental movement.
    fn drag_moved(
        &mut self,
        scene: &mut Scene,
        id: NodeId,
        viewport: &dyn Viewport,
        start: DVec3,
        delta: Vec2,
        modifiers: Modifiers,
    ) {
        let _ = (viewport, modifiers);
        if let Some(point) = scene.point_mut(id) {
            point.position = start + DVec3::new(delta.x, delta.y, 0.0);
        }
    }
}

/// The stock [`PointerHooks`] behavior.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultHooks;

impl PointerHooks for DefaultHooks {}

impl Scene {
    /// Dispatches a button press. Returns whether the item or any descendant
    /// accepted it.
    ///
    /// A group entry forwards to its nearest spatial descendants without
    /// translating `local`. A disabled item rejects the event outright and
    /// its descendants are never visited. The item itself only becomes a
    /// target while hovered: a selectable item runs the selection update, a
    /// draggable item starts a drag (snapshotting the local position as the
    /// drag origin).
    pub fn mouse_pressed(
        &mut self,
        id: NodeId,
        viewport: &dyn Viewport,
        local: Point,
        screen: Point,
        button: MouseButton,
        modifiers: Modifiers,
    ) -> bool {
        self.mouse_pressed_with(id, viewport, local, screen, button, modifiers, &mut DefaultHooks)
    }

    /// [`Scene::mouse_pressed`] with caller-provided hooks.
    #[expect(clippy::too_many_arguments, reason = "full pointer event surface")]
    pub fn mouse_pressed_with(
        &mut self,
        id: NodeId,
        viewport: &dyn Viewport,
        local: Point,
        screen: Point,
        button: MouseButton,
        modifiers: Modifiers,
        hooks: &mut dyn PointerHooks,
    ) -> bool {
        let Some(item) = self.get(id) else {
            return false;
        };
        let Some(point) = item.as_point() else {
            // Group entry: carries no state and no offset of its own.
            let mut accepted = false;
            for child in self.spatial_child_ids(id) {
                if self.mouse_pressed_with(child, viewport, local, screen, button, modifiers, hooks)
                {
                    accepted = true;
                }
            }
            return accepted;
        };
        if !point.state.contains(ItemState::ENABLED) {
            return false;
        }
        let Some(origin) = self.screen_position(id, viewport) else {
            return false;
        };
        let child_local = local - origin.to_vec2();
        let mut accepted = false;
        for child in self.spatial_child_ids(id) {
            if self.mouse_pressed_with(child, viewport, child_local, screen, button, modifiers, hooks)
            {
                accepted = true;
            }
        }

        let Some(point) = self.point(id) else {
            return accepted;
        };
        if !point.state.contains(ItemState::HOVERED) {
            return accepted;
        }
        let flags = point.flags;
        if flags.contains(ItemFlags::SELECTABLE) {
            self.update_selection(id, modifiers);
            accepted = true;
        }
        if flags.contains(ItemFlags::DRAGGABLE) {
            let start = hooks.drag_data(self, id);
            if let Some(point) = self.point_mut(id) {
                point.state.insert(ItemState::DRAGGING);
                point.drag_origin = local;
                point.drag_start = start;
            }
            accepted = true;
        }
        accepted
    }

    /// Dispatches a button release.
    ///
    /// Always clears the item's dragging state first, even when disabled;
    /// then, if enabled, propagates to descendants without re-checking hover
    /// or flags. A group entry forwards without translating `local`.
    pub fn mouse_released(
        &mut self,
        id: NodeId,
        viewport: &dyn Viewport,
        local: Point,
        screen: Point,
        button: MouseButton,
        modifiers: Modifiers,
    ) -> bool {
        self.mouse_released_with(id, viewport, local, screen, button, modifiers, &mut DefaultHooks)
    }

    /// [`Scene::mouse_released`] with caller-provided hooks.
    #[expect(clippy::too_many_arguments, reason = "full pointer event surface")]
    pub fn mouse_released_with(
        &mut self,
        id: NodeId,
        viewport: &dyn Viewport,
        local: Point,
        screen: Point,
        button: MouseButton,
        modifiers: Modifiers,
        hooks: &mut dyn PointerHooks,
    ) -> bool {
        let Some(item) = self.get(id) else {
            return false;
        };
        if item.as_point().is_none() {
            let mut accepted = false;
            for child in self.spatial_child_ids(id) {
                if self
                    .mouse_released_with(child, viewport, local, screen, button, modifiers, hooks)
                {
                    accepted = true;
                }
            }
            return accepted;
        }
        let Some(point) = self.point_mut(id) else {
            return false;
        };
        point.state.remove(ItemState::DRAGGING);
        if !point.state.contains(ItemState::ENABLED) {
            return false;
        }
        let Some(origin) = self.screen_position(id, viewport) else {
            return false;
        };
        let child_local = local - origin.to_vec2();
        let mut accepted = false;
        for child in self.spatial_child_ids(id) {
            if self
                .mouse_released_with(child, viewport, child_local, screen, button, modifiers, hooks)
            {
                accepted = true;
            }
        }
        accepted
    }

    /// Dispatches pointer movement.
    ///
    /// Stores the local position as the item's last-known pointer position,
    /// recomputes hover via the hit test, recurses into all spatial
    /// descendants (hovered or not, so position tracking stays current), and
    /// finally applies the drag policy when a drag is in progress. A group
    /// entry forwards without translating `local`.
    pub fn mouse_moved(
        &mut self,
        id: NodeId,
        viewport: &dyn Viewport,
        local: Point,
        screen: Point,
        modifiers: Modifiers,
    ) {
        self.mouse_moved_with(id, viewport, local, screen, modifiers, &mut DefaultHooks);
    }

    /// [`Scene::mouse_moved`] with caller-provided hooks.
    pub fn mouse_moved_with(
        &mut self,
        id: NodeId,
        viewport: &dyn Viewport,
        local: Point,
        screen: Point,
        modifiers: Modifiers,
        hooks: &mut dyn PointerHooks,
    ) {
        let Some(item) = self.get(id) else {
            return;
        };
        let Some(point) = item.as_point() else {
            for child in self.spatial_child_ids(id) {
                self.mouse_moved_with(child, viewport, local, screen, modifiers, hooks);
            }
            return;
        };
        if !point.state.contains(ItemState::ENABLED) {
            return;
        }
        if let Some(point) = self.point_mut(id) {
            point.local_mouse = local;
        }
        let under = hooks.hit_test(self, id, viewport, local, screen);
        if let Some(point) = self.point_mut(id) {
            point.state.set(ItemState::HOVERED, under);
        }

        let Some(origin) = self.screen_position(id, viewport) else {
            return;
        };
        let child_local = local - origin.to_vec2();
        for child in self.spatial_child_ids(id) {
            self.mouse_moved_with(child, viewport, child_local, screen, modifiers, hooks);
        }

        let Some(point) = self.point(id) else {
            return;
        };
        if point.flags.contains(ItemFlags::DRAGGABLE) && point.state.contains(ItemState::DRAGGING) {
            let delta = point.local_mouse - point.drag_origin;
            let start = point.drag_start;
            hooks.drag_moved(self, id, viewport, start, delta, modifiers);
        }
    }

    /// Tree-wide exclusive selection update, run for a selectable item on
    /// press while hovered.
    ///
    /// Without Shift, `SELECTED` is first cleared on the entire tree from the
    /// root down (the root itself only when it is selectable). Ctrl toggles
    /// the pressed item's selection; otherwise it is force-set.
    fn update_selection(&mut self, id: NodeId, modifiers: Modifiers) {
        let root = self.root_of(id);
        if !modifiers.contains(Modifiers::SHIFT) {
            if let Some(point) = self.point_mut(root)
                && point.flags.contains(ItemFlags::SELECTABLE)
            {
                point.state.remove(ItemState::SELECTED);
            }
            let all: SmallVec<[NodeId; 16]> = self.descendants(root).collect();
            for node in all {
                if let Some(point) = self.point_mut(node) {
                    point.state.remove(ItemState::SELECTED);
                }
            }
        }
        if let Some(point) = self.point_mut(id) {
            if modifiers.contains(Modifiers::CTRL) {
                point.state.toggle(ItemState::SELECTED);
            } else {
                point.state.insert(ItemState::SELECTED);
            }
        }
    }

    /// Nearest spatial descendants of `id`, snapshotted for dispatch.
    ///
    /// Group nodes are descended through; once a spatial item is found its
    /// subtree is pruned (its own dispatch recurses further).
    fn spatial_child_ids(&self, id: NodeId) -> SmallVec<[NodeId; 8]> {
        let mut out = SmallVec::new();
        let mut walk = self.descendants(id);
        while let Some(node) = walk.next() {
            if self
                .get(node)
                .is_some_and(|item| item.has_capability(Capability::Spatial))
            {
                out.push(node);
                walk.skip_subtree();
            }
        }
        out
    }
}
