// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item payloads and their flag vocabulary.

use canopy_geometry::{Align, Margins};
use glam::DVec3;
use kurbo::{Point, Vec2};

bitflags::bitflags! {
    /// Interaction capabilities an item opts into.
    ///
    /// Empty means the item never accepts pointer events for itself (it still
    /// forwards them to descendants).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// The item participates in selection.
        const SELECTABLE = 1 << 0;
        /// The item can be dragged.
        const DRAGGABLE = 1 << 1;
    }
}

bitflags::bitflags! {
    /// Live interaction state of an item. Any subset may be set at once.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ItemState: u8 {
        /// The item (and its subtree) receives pointer events.
        const ENABLED = 1 << 0;
        /// The item is drawn. Not consulted by dispatch.
        const VISIBLE = 1 << 1;
        /// The item is currently selected.
        const SELECTED = 1 << 2;
        /// A drag gesture on the item is in progress.
        const DRAGGING = 1 << 3;
        /// The pointer is currently over the item.
        const HOVERED = 1 << 4;
    }
}

impl Default for ItemState {
    fn default() -> Self {
        Self::ENABLED | Self::VISIBLE
    }
}

/// Capability tags used to filter hierarchy traversal by item kind.
///
/// This replaces open-ended runtime type dispatch: every [`Item`] answers
/// [`Item::has_capability`] with a fixed mapping from its variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// The item carries a position and takes part in pointer dispatch
    /// ([`Item::Point`] and [`Item::Hud`]).
    Spatial,
    /// The item additionally carries alignment-based layout ([`Item::Hud`]).
    Layout,
}

/// A spatial item: a positioned point in the scene with interaction state.
///
/// The coordinate space is 3D by default; setting [`PointItem::is_2d`] flags
/// the position as screen-space instead. An item's effective space must match
/// its nearest spatial ancestor's: across a 2D/3D boundary, global-position
/// resolution stops and the local position is used unmodified.
#[derive(Clone, Debug)]
pub struct PointItem {
    /// Position relative to the nearest spatial ancestor.
    pub position: DVec3,
    /// Whether `position` is screen-space (z ignored) rather than world-space.
    pub is_2d: bool,
    /// Interaction capabilities.
    pub flags: ItemFlags,
    /// Live interaction state.
    pub state: ItemState,
    pub(crate) local_mouse: Point,
    pub(crate) drag_origin: Point,
    pub(crate) drag_start: DVec3,
}

impl PointItem {
    /// A 3D point item with default flags and state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: DVec3::ZERO,
            is_2d: false,
            flags: ItemFlags::empty(),
            state: ItemState::default(),
            local_mouse: Point::ZERO,
            drag_origin: Point::ZERO,
            drag_start: DVec3::ZERO,
        }
    }

    /// Last local-space pointer position seen by `mouse_moved`.
    ///
    /// May be out of date when an ancestor was disabled while the pointer
    /// moved.
    #[must_use]
    pub fn local_mouse(&self) -> Point {
        self.local_mouse
    }
}

impl Default for PointItem {
    fn default() -> Self {
        Self::new()
    }
}

/// A layout item: a 2D, screen-anchored box using alignment-pivot layout.
///
/// Embeds a [`PointItem`] whose `is_2d` is set on construction; the item's
/// position is interpreted relative to the `align` anchor of its nearest
/// layout ancestor's margin-adjusted rect.
#[derive(Clone, Debug)]
pub struct HudItem {
    /// Spatial state; `point.is_2d` is `true` for HUD items.
    pub point: PointItem,
    /// Which anchor of the parent rect this item's position is relative to,
    /// and which anchor of its own box the position names.
    pub align: Align,
    /// Insets applied to this item's rect before children anchor to it.
    pub margins: Margins,
    /// Extent of the item's box.
    pub size: Vec2,
}

impl HudItem {
    /// A HUD item with center alignment, zero margins, and zero size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            point: PointItem {
                is_2d: true,
                ..PointItem::new()
            },
            align: Align::CENTER,
            margins: Margins::ZERO,
            size: Vec2::ZERO,
        }
    }
}

impl Default for HudItem {
    fn default() -> Self {
        Self::new()
    }
}

/// Payload of a scene node.
#[derive(Clone, Debug, Default)]
pub enum Item {
    /// A plain grouping node: no spatial data, transparent to dispatch and
    /// coordinate resolution.
    #[default]
    Group,
    /// A spatial (point) item.
    Point(PointItem),
    /// A layout (HUD) item.
    Hud(HudItem),
}

impl Item {
    /// A grouping node.
    #[must_use]
    pub fn group() -> Self {
        Self::Group
    }

    /// A default 3D point item.
    #[must_use]
    pub fn point() -> Self {
        Self::Point(PointItem::new())
    }

    /// A default HUD item.
    #[must_use]
    pub fn hud() -> Self {
        Self::Hud(HudItem::new())
    }

    /// The spatial state of this item, for point *and* HUD items.
    #[must_use]
    pub fn as_point(&self) -> Option<&PointItem> {
        match self {
            Self::Group => None,
            Self::Point(point) => Some(point),
            Self::Hud(hud) => Some(&hud.point),
        }
    }

    /// Mutable variant of [`Item::as_point`].
    pub fn as_point_mut(&mut self) -> Option<&mut PointItem> {
        match self {
            Self::Group => None,
            Self::Point(point) => Some(point),
            Self::Hud(hud) => Some(&mut hud.point),
        }
    }

    /// The layout state of this item, for HUD items only.
    #[must_use]
    pub fn as_hud(&self) -> Option<&HudItem> {
        match self {
            Self::Hud(hud) => Some(hud),
            _ => None,
        }
    }

    /// Mutable variant of [`Item::as_hud`].
    pub fn as_hud_mut(&mut self) -> Option<&mut HudItem> {
        match self {
            Self::Hud(hud) => Some(hud),
            _ => None,
        }
    }

    /// Whether this item answers to the given capability tag.
    #[must_use]
    pub fn has_capability(&self, capability: Capability) -> bool {
        match capability {
            Capability::Spatial => self.as_point().is_some(),
            Capability::Layout => self.as_hud().is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let point = PointItem::new();
        assert!(!point.is_2d);
        assert_eq!(point.flags, ItemFlags::empty());
        assert_eq!(point.state, ItemState::ENABLED | ItemState::VISIBLE);
        assert_eq!(point.position, DVec3::ZERO);

        let hud = HudItem::new();
        assert!(hud.point.is_2d);
        assert_eq!(hud.align, Align::CENTER);
        assert!(hud.margins.is_zero());
        assert_eq!(hud.size, Vec2::ZERO);
    }

    #[test]
    fn capabilities() {
        assert!(!Item::group().has_capability(Capability::Spatial));
        assert!(Item::point().has_capability(Capability::Spatial));
        assert!(!Item::point().has_capability(Capability::Layout));
        assert!(Item::hud().has_capability(Capability::Spatial));
        assert!(Item::hud().has_capability(Capability::Layout));
    }

    #[test]
    fn hud_exposes_embedded_point() {
        let mut item = Item::hud();
        item.as_point_mut()
            .expect("hud has a point")
            .position = DVec3::new(1.0, 2.0, 0.0);
        assert_eq!(
            item.as_hud().expect("hud").point.position,
            DVec3::new(1.0, 2.0, 0.0)
        );
    }
}
