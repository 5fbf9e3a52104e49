// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Scene: mixed 2D/3D overlay items with alignment layout and pointer
//! dispatch.
//!
//! A [`Scene`] is a [`canopy_tree::Tree`] of [`Item`] payloads with spatial
//! semantics layered on top:
//!
//! - **Coordinate resolution.** Items hold positions relative to their nearest
//!   spatial ancestor; [`Scene::global_position`] composes them root-down.
//!   Point items live in 3D world space by default, HUD items in 2D screen
//!   space; parenting across the 2D/3D boundary is permitted but inert.
//! - **Alignment layout.** A HUD item's position is relative to an anchor
//!   ([`canopy_geometry::Align`]) of its nearest HUD ancestor's
//!   margin-adjusted rect, so overlay panels track their parent's edges
//!   without per-frame layout passes.
//! - **Pointer dispatch.** `mouse_pressed` / `mouse_released` / `mouse_moved`
//!   walk the hierarchy, translate coordinates into each item's local space,
//!   and maintain hover, drag, and selection state.
//!
//! Projection between screen and world is the host's job, abstracted as the
//! [`Viewport`] trait.
//!
//! ## Example: pressing and dragging a HUD panel
//!
//! ```
//! use canopy_geometry::{Align, Rect};
//! use canopy_scene::{
//!     Item, ItemFlags, ItemState, Modifiers, MouseButton, Scene, Viewport,
//! };
//! use glam::DVec3;
//! use kurbo::{Point, Vec2};
//!
//! // A fixed orthographic host: screen space is world space.
//! struct Flat;
//!
//! impl Viewport for Flat {
//!     fn rect(&self) -> Rect {
//!         Rect::new(Point::ZERO, Vec2::new(800.0, 600.0))
//!     }
//!     fn screen_to_world(&self, screen: Point, _depth: DVec3) -> DVec3 {
//!         DVec3::new(screen.x, screen.y, 0.0)
//!     }
//!     fn screen_to_ray(&self, screen: Point) -> (DVec3, DVec3) {
//!         (DVec3::new(screen.x, screen.y, 0.0), DVec3::NEG_Z)
//!     }
//!     fn world_to_screen(&self, world: DVec3) -> Point {
//!         Point::new(world.x, world.y)
//!     }
//! }
//!
//! let mut scene = Scene::new();
//! let panel = scene.insert_named("panel", Item::hud());
//! {
//!     let hud = scene.hud_mut(panel).unwrap();
//!     hud.align = Align::BOTTOM_LEFT;
//!     hud.size = Vec2::new(100.0, 50.0);
//!     hud.point.flags = ItemFlags::DRAGGABLE;
//! }
//!
//! let viewport = Flat;
//! let over = Point::new(40.0, 20.0);
//! scene.mouse_moved(panel, &viewport, over, over, Modifiers::empty());
//! assert!(scene.point(panel).unwrap().state.contains(ItemState::HOVERED));
//!
//! scene.mouse_pressed(
//!     panel, &viewport, over, over, MouseButton::Left, Modifiers::empty(),
//! );
//! let dragged = Point::new(70.0, 30.0);
//! scene.mouse_moved(panel, &viewport, dragged, dragged, Modifiers::empty());
//! assert_eq!(
//!     scene.point(panel).unwrap().position,
//!     DVec3::new(30.0, 10.0, 0.0),
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod item;
mod pointer;
mod scene;
mod viewport;

pub use canopy_tree::NodeId;
pub use item::{Capability, HudItem, Item, ItemFlags, ItemState, PointItem};
pub use pointer::{DefaultHooks, Modifiers, MouseButton, PointerHooks};
pub use scene::{POINT_HIT_SIZE, Scene};
pub use viewport::Viewport;
