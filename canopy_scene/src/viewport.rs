// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host viewport capability.

use canopy_geometry::Rect;
use glam::DVec3;
use kurbo::Point;

/// Projection capability provided by the embedding host.
///
/// The scene never performs screen↔world projection itself; it consumes this
/// trait as an opaque capability. Implementations wrap whatever camera or
/// draw context the host application exposes.
///
/// The core dispatch and layout paths only call [`Viewport::world_to_screen`]
/// and [`Viewport::rect`]; the inverse mappings are part of the capability
/// contract because embedders use them to place 3D items from pointer input.
pub trait Viewport {
    /// Viewport bounds in screen space.
    fn rect(&self) -> Rect;

    /// Project a screen position into the world, at the depth of
    /// `depth_reference`.
    fn screen_to_world(&self, screen: Point, depth_reference: DVec3) -> DVec3;

    /// The world-space ray (origin, direction) under a screen position.
    fn screen_to_ray(&self, screen: Point) -> (DVec3, DVec3);

    /// Project a world position onto the screen.
    fn world_to_screen(&self, world: DVec3) -> Point;
}
