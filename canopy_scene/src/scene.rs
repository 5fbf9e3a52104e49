// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene container: hierarchy plus coordinate and layout resolution.

use alloc::string::String;

use canopy_geometry::{Align, Rect};
use canopy_tree::{Ancestors, Descendants, NodeId, Tree};
use glam::DVec3;
use kurbo::{Point, Vec2};

use crate::item::{Capability, HudItem, Item, PointItem};
use crate::viewport::Viewport;

/// Edge length of the default screen-space hit square for point items.
pub const POINT_HIT_SIZE: f64 = 20.0;

/// A scene of overlay items.
///
/// Wraps a [`Tree`] of [`Item`] payloads and layers the spatial semantics on
/// top: recursive global-position resolution, alignment-based layout for HUD
/// items, and pointer dispatch (see the `mouse_*` methods in this crate's
/// [`pointer`](crate::pointer) module docs).
///
/// Hierarchy operations are forwarded from the tree with identical semantics;
/// the raw tree remains reachable through [`Scene::tree`] for anything not
/// forwarded.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    tree: Tree<Item>,
}

impl Scene {
    /// An empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// The underlying hierarchy.
    #[must_use]
    pub fn tree(&self) -> &Tree<Item> {
        &self.tree
    }

    /// Mutable access to the underlying hierarchy.
    pub fn tree_mut(&mut self) -> &mut Tree<Item> {
        &mut self.tree
    }

    // --- Hierarchy forwards -------------------------------------------------

    /// Inserts a detached item with the default name.
    pub fn insert(&mut self, item: Item) -> NodeId {
        self.tree.insert(item)
    }

    /// Inserts a detached, named item.
    pub fn insert_named(&mut self, name: impl Into<String>, item: Item) -> NodeId {
        self.tree.insert_named(name, item)
    }

    /// See [`Tree::remove`].
    pub fn remove(&mut self, id: NodeId) {
        self.tree.remove(id);
    }

    /// See [`Tree::remove_subtree`].
    pub fn remove_subtree(&mut self, id: NodeId) {
        self.tree.remove_subtree(id);
    }

    /// See [`Tree::contains`].
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.tree.contains(id)
    }

    /// See [`Tree::set_parent`].
    pub fn set_parent(&mut self, id: NodeId, new_parent: Option<NodeId>) {
        self.tree.set_parent(id, new_parent);
    }

    /// See [`Tree::append`].
    pub fn append(&mut self, parent: NodeId, ids: &[NodeId]) {
        self.tree.append(parent, ids);
    }

    /// See [`Tree::insert_children`].
    pub fn insert_children(&mut self, parent: NodeId, index: usize, ids: &[NodeId]) {
        self.tree.insert_children(parent, index, ids);
    }

    /// See [`Tree::clear_children`].
    pub fn clear_children(&mut self, parent: NodeId) {
        self.tree.clear_children(parent);
    }

    /// See [`Tree::parent`].
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.parent(id)
    }

    /// See [`Tree::children`].
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.tree.children(id)
    }

    /// See [`Tree::root_of`].
    #[must_use]
    pub fn root_of(&self, id: NodeId) -> NodeId {
        self.tree.root_of(id)
    }

    /// See [`Tree::path`].
    #[must_use]
    pub fn path(&self, id: NodeId) -> String {
        self.tree.path(id)
    }

    /// See [`Tree::name`].
    #[must_use]
    pub fn name(&self, id: NodeId) -> &str {
        self.tree.name(id)
    }

    /// See [`Tree::set_name`].
    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) {
        self.tree.set_name(id, name);
    }

    /// See [`Tree::descendants`].
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Descendants<'_, Item> {
        self.tree.descendants(id)
    }

    /// See [`Tree::ancestors`].
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, Item> {
        self.tree.ancestors(id)
    }

    // --- Item access --------------------------------------------------------

    /// The item payload, or `None` for a stale id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Item> {
        self.tree.get(id)
    }

    /// Mutable item payload, or `None` for a stale id.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Item> {
        self.tree.get_mut(id)
    }

    /// Spatial state of the item, for point and HUD items.
    #[must_use]
    pub fn point(&self, id: NodeId) -> Option<&PointItem> {
        self.tree.get(id)?.as_point()
    }

    /// Mutable variant of [`Scene::point`].
    pub fn point_mut(&mut self, id: NodeId) -> Option<&mut PointItem> {
        self.tree.get_mut(id)?.as_point_mut()
    }

    /// Layout state of the item, for HUD items.
    #[must_use]
    pub fn hud(&self, id: NodeId) -> Option<&HudItem> {
        self.tree.get(id)?.as_hud()
    }

    /// Mutable variant of [`Scene::hud`].
    pub fn hud_mut(&mut self, id: NodeId) -> Option<&mut HudItem> {
        self.tree.get_mut(id)?.as_hud_mut()
    }

    /// Nearest ancestor with the given capability.
    #[must_use]
    pub fn capable_ancestor(&self, id: NodeId, capability: Capability) -> Option<NodeId> {
        self.tree
            .ancestors(id)
            .find(|&node| self.tree[node].has_capability(capability))
    }

    /// Nearest spatial ancestor (point or HUD).
    #[must_use]
    pub fn spatial_ancestor(&self, id: NodeId) -> Option<NodeId> {
        self.capable_ancestor(id, Capability::Spatial)
    }

    /// Nearest layout (HUD) ancestor.
    #[must_use]
    pub fn hud_ancestor(&self, id: NodeId) -> Option<NodeId> {
        self.capable_ancestor(id, Capability::Layout)
    }

    // --- Coordinate resolution ----------------------------------------------

    /// Position composed from the root down to this item.
    ///
    /// Resolution is pull-based and walks spatial ancestors bottom-up:
    ///
    /// - No spatial ancestor: the item's own position.
    /// - The nearest spatial ancestor lives in the other coordinate space
    ///   (2D vs 3D): the item's own position, unmodified. Parenting across
    ///   the boundary is structurally permitted but deliberately inert.
    /// - HUD item under a HUD ancestor: the ancestor's margin-adjusted global
    ///   rect is anchored at this item's alignment, plus the local position.
    /// - Otherwise: the ancestor's global position plus the local position.
    ///   Composition is pure translation; rotation and scale are not part of
    ///   the current model.
    ///
    /// Returns `None` for non-spatial items.
    #[must_use]
    pub fn global_position(&self, id: NodeId) -> Option<DVec3> {
        let point = self.point(id)?;
        let Some(ancestor) = self.spatial_ancestor(id) else {
            return Some(point.position);
        };
        let ancestor_point = self.point(ancestor)?;
        if point.is_2d != ancestor_point.is_2d {
            return Some(point.position);
        }
        if let (Some(hud), Some(ancestor_hud)) = (self.hud(id), self.hud(ancestor)) {
            let rect = self.global_rect(ancestor)?.adjusted(ancestor_hud.margins);
            let pivot = rect.point_at(hud.align);
            return Some(DVec3::new(pivot.x, pivot.y, 0.0) + point.position);
        }
        Some(self.global_position(ancestor)? + point.position)
    }

    /// Screen-space position of the item.
    ///
    /// 2D items drop the z component of their global position; 3D items are
    /// projected through the viewport.
    #[must_use]
    pub fn screen_position(&self, id: NodeId, viewport: &dyn Viewport) -> Option<Point> {
        let point = self.point(id)?;
        let global = self.global_position(id)?;
        if point.is_2d {
            Some(Point::new(global.x, global.y))
        } else {
            Some(viewport.world_to_screen(global))
        }
    }

    /// Screen-space rect of the item, as used by the default hit test.
    ///
    /// HUD items use their [`Scene::global_rect`]; point items use a fixed
    /// [`POINT_HIT_SIZE`] square centered on their screen position.
    #[must_use]
    pub fn screen_rect(&self, id: NodeId, viewport: &dyn Viewport) -> Option<Rect> {
        if self.hud(id).is_some() {
            return self.global_rect(id);
        }
        let center = self.screen_position(id, viewport)?;
        Some(Rect::aligned(
            center,
            Vec2::new(POINT_HIT_SIZE, POINT_HIT_SIZE),
            Align::CENTER,
        ))
    }

    // --- HUD layout ---------------------------------------------------------

    /// The HUD item's rect in its parent's space: its 2D position and size,
    /// anchored by its alignment. `None` for non-HUD items.
    #[must_use]
    pub fn local_rect(&self, id: NodeId) -> Option<Rect> {
        let hud = self.hud(id)?;
        Some(Rect::aligned(
            Point::new(hud.point.position.x, hud.point.position.y),
            hud.size,
            hud.align,
        ))
    }

    /// The HUD item's rect in global 2D space.
    ///
    /// Alignment is not applied again here: it was already consumed while
    /// resolving the global position.
    #[must_use]
    pub fn global_rect(&self, id: NodeId) -> Option<Rect> {
        let hud = self.hud(id)?;
        let global = self.global_position(id)?;
        Some(Rect::new(Point::new(global.x, global.y), hud.size))
    }

    /// The rect HUD children of this item anchor against: the nearest HUD
    /// ancestor's local rect, margin-adjusted when that ancestor declares
    /// margins. Falls back to the item's own local rect at the top of a HUD
    /// subtree.
    #[must_use]
    pub fn parent_rect(&self, id: NodeId) -> Option<Rect> {
        self.hud(id)?;
        match self.hud_ancestor(id) {
            None => self.local_rect(id),
            Some(ancestor) => {
                let mut rect = self.local_rect(ancestor)?;
                let margins = self.hud(ancestor)?.margins;
                if !margins.is_zero() {
                    rect.adjust(margins);
                }
                Some(rect)
            }
        }
    }

    /// Maps a global-space rect into this HUD item's local space.
    ///
    /// The rect is translated by the local/global position delta; its size is
    /// preserved. Without a HUD ancestor the value is returned unchanged.
    #[must_use]
    pub fn map_from_global_rect(&self, id: NodeId, value: Rect) -> Option<Rect> {
        self.hud(id)?;
        if self.hud_ancestor(id).is_none() {
            return Some(value);
        }
        let local = self.local_rect(id)?;
        let global = self.global_rect(id)?;
        Some(Rect::new(
            local.position + (value.position - global.position),
            value.size,
        ))
    }

    /// Maps a global-space point into this HUD item's local space.
    ///
    /// Composes through the local-rect mapping of [`Scene::map_from_global_rect`].
    #[must_use]
    pub fn map_from_global_point(&self, id: NodeId, value: Point) -> Option<Point> {
        let local = self.local_rect(id)?;
        let mapped = self.map_from_global_rect(id, local)?;
        Some(mapped.position + value.to_vec2())
    }

    /// Maps a local-space rect into global space.
    ///
    /// Unlike the inverse mapping this folds in the alignment pivot of the
    /// nearest HUD ancestor, the same math as [`Scene::global_position`].
    /// Without a HUD ancestor the value is returned unchanged.
    #[must_use]
    pub fn map_to_global_rect(&self, id: NodeId, value: Rect) -> Option<Rect> {
        let hud = self.hud(id)?;
        let Some(ancestor) = self.hud_ancestor(id) else {
            return Some(value);
        };
        let pivot = self.alignment_pivot(id, ancestor)?;
        Some(Rect::aligned(
            pivot + value.position.to_vec2(),
            value.size,
            hud.align,
        ))
    }

    /// Maps a local-space point into global space. See
    /// [`Scene::map_to_global_rect`].
    #[must_use]
    pub fn map_to_global_point(&self, id: NodeId, value: Point) -> Option<Point> {
        let hud = self.hud(id)?;
        let Some(ancestor) = self.hud_ancestor(id) else {
            return Some(value);
        };
        let pivot = self.alignment_pivot(id, ancestor)?;
        let local = self.local_rect(id)?;
        let anchored = Rect::aligned(pivot + local.position.to_vec2(), local.size, hud.align);
        Some(anchored.position + value.to_vec2())
    }

    /// This item's alignment anchor on the ancestor's margin-adjusted global
    /// rect.
    fn alignment_pivot(&self, id: NodeId, ancestor: NodeId) -> Option<Point> {
        let align = self.hud(id)?.align;
        let margins = self.hud(ancestor)?.margins;
        let mut rect = self.global_rect(ancestor)?;
        if !margins.is_zero() {
            rect.adjust(margins);
        }
        Some(rect.point_at(align))
    }
}
