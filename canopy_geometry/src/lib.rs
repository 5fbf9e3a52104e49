// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Geometry: alignment-aware rectangles and margins for overlay layout.
//!
//! This crate provides the small geometry vocabulary shared by the Canopy
//! overlay crates:
//!
//! - [`Align`]: anchor flags describing which point of a box a position refers to.
//! - [`Margins`]: per-edge insets used to shrink (or, negated, expand) a box.
//! - [`Rect`]: an axis-aligned box stored as bottom-left position plus size,
//!   with a y-up screen convention.
//!
//! Positions and sizes use [`kurbo`]'s `f64` types ([`kurbo::Point`],
//! [`kurbo::Vec2`]).
//!
//! ## Alignment is consumed, not stored
//!
//! [`Rect::aligned`] shifts the given position so that it becomes the requested
//! anchor of the box; after construction a rect is always position + size and
//! carries no memory of the alignment it was built with. [`Rect::point_at`]
//! performs the mirror-image query: the anchor point of an existing rect.
//!
//! ```
//! use canopy_geometry::{Align, Rect};
//! use kurbo::{Point, Vec2};
//!
//! let r = Rect::aligned(Point::new(60.0, 45.0), Vec2::new(100.0, 50.0), Align::CENTER);
//! assert_eq!(r.position, Point::new(10.0, 20.0));
//! assert_eq!(r.point_at(Align::CENTER), Point::new(60.0, 45.0));
//! ```
//!
//! ## Degenerate results over errors
//!
//! Geometry operations are total: out-of-range input produces degenerate
//! output (for example [`Rect::intersect`] on disjoint rects yields a rect
//! whose [`Rect::is_valid`] is `false`), never an error.
//!
//! This crate is `no_std`.

#![no_std]

mod align;
mod margins;
mod rect;

pub use align::Align;
pub use margins::Margins;
pub use rect::{EdgeMode, Rect};
