// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An axis-aligned box with a y-up screen convention.

use kurbo::{Point, Vec2};

use crate::{Align, Margins};

/// How an edge setter treats the opposite edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeMode {
    /// Translate the whole rect so the edge lands on the requested value.
    Move,
    /// Keep the opposite edge fixed, extending or shrinking the size. The
    /// affected size component is clamped to zero when the edges would invert.
    Resize,
}

/// An axis-aligned rectangle stored as bottom-left position plus size.
///
/// The coordinate convention is y-up: [`Rect::bottom`] is `position.y` and
/// [`Rect::top`] is `position.y + size.y`.
///
/// Size components are conceptually non-negative for a *valid* rect
/// ([`Rect::is_valid`] requires both to be `> 0`), but construction and
/// adjustment may produce degenerate or negative-size rects. That is policy,
/// not an error: operations like [`Rect::intersect`] report "no overlap" by
/// returning an invalid rect for the caller to check.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Bottom-left corner.
    pub position: Point,
    /// Extent; `x` is width, `y` is height.
    pub size: Vec2,
}

impl Rect {
    /// Default absolute tolerance for [`Rect::is_approx`].
    pub const APPROX_TOLERANCE: f64 = 1e-8;

    /// A rect from its bottom-left corner and size.
    #[must_use]
    pub const fn new(position: Point, size: Vec2) -> Self {
        Self { position, size }
    }

    /// A rect positioned so that `position` is the `align` anchor of the box.
    ///
    /// The alignment only affects this one-time construction offset; it is not
    /// stored. `Rect::aligned(p, s, Align::BOTTOM_LEFT)` is `Rect::new(p, s)`.
    #[must_use]
    pub fn aligned(position: Point, size: Vec2, align: Align) -> Self {
        Self {
            position: position - align.anchor_offset(size),
            size,
        }
    }

    /// Left edge, `position.x`.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.position.x
    }

    /// Right edge, `position.x + size.x`.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.position.x + self.size.x
    }

    /// Top edge, `position.y + size.y`.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.position.y + self.size.y
    }

    /// Bottom edge, `position.y`.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.position.y
    }

    /// Width, `size.x`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    /// Height, `size.y`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// The top-left corner.
    #[must_use]
    pub fn top_left(&self) -> Point {
        Point::new(self.left(), self.top())
    }

    /// The top-right corner.
    #[must_use]
    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top())
    }

    /// The bottom-left corner.
    #[must_use]
    pub fn bottom_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    /// The bottom-right corner.
    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// The center of the rect.
    #[must_use]
    pub fn center(&self) -> Point {
        self.position + self.size / 2.0
    }

    /// The anchor point named by `pivot`, on a copy.
    ///
    /// Mirror image of the [`Rect::aligned`] construction offset:
    /// `Rect::aligned(p, s, a).point_at(a) == p`.
    #[must_use]
    pub fn point_at(&self, pivot: Align) -> Point {
        self.position + pivot.anchor_offset(self.size)
    }

    /// Set the left edge.
    pub fn set_left(&mut self, left: f64, mode: EdgeMode) {
        match mode {
            EdgeMode::Move => self.position.x = left,
            EdgeMode::Resize => {
                let offset = self.position.x - left;
                self.position.x = left;
                self.size.x = (self.size.x + offset).max(0.0);
            }
        }
    }

    /// Set the right edge.
    pub fn set_right(&mut self, right: f64, mode: EdgeMode) {
        match mode {
            EdgeMode::Move => self.position.x = right - self.size.x,
            EdgeMode::Resize => {
                if self.position.x > right {
                    self.position.x = right;
                    self.size.x = 0.0;
                } else {
                    self.size.x = right - self.position.x;
                }
            }
        }
    }

    /// Set the top edge.
    pub fn set_top(&mut self, top: f64, mode: EdgeMode) {
        match mode {
            EdgeMode::Move => self.position.y = top - self.size.y,
            EdgeMode::Resize => {
                if self.position.y > top {
                    self.position.y = top;
                    self.size.y = 0.0;
                } else {
                    self.size.y = top - self.position.y;
                }
            }
        }
    }

    /// Set the bottom edge.
    pub fn set_bottom(&mut self, bottom: f64, mode: EdgeMode) {
        match mode {
            EdgeMode::Move => self.position.y = bottom,
            EdgeMode::Resize => {
                let offset = self.position.y - bottom;
                self.position.y = bottom;
                self.size.y = (self.size.y + offset).max(0.0);
            }
        }
    }

    /// Set the top-left corner.
    pub fn set_top_left(&mut self, corner: Point, mode: EdgeMode) {
        self.set_top(corner.y, mode);
        self.set_left(corner.x, mode);
    }

    /// Set the top-right corner.
    pub fn set_top_right(&mut self, corner: Point, mode: EdgeMode) {
        self.set_top(corner.y, mode);
        self.set_right(corner.x, mode);
    }

    /// Set the bottom-left corner.
    pub fn set_bottom_left(&mut self, corner: Point, mode: EdgeMode) {
        self.set_bottom(corner.y, mode);
        self.set_left(corner.x, mode);
    }

    /// Set the bottom-right corner.
    pub fn set_bottom_right(&mut self, corner: Point, mode: EdgeMode) {
        self.set_bottom(corner.y, mode);
        self.set_right(corner.x, mode);
    }

    /// Translate the rect so its center lands on `center`.
    pub fn set_center(&mut self, center: Point) {
        self.position = center - self.size / 2.0;
    }

    /// Returns `true` when both size components are strictly positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }

    /// Inclusive bounds test on both axes.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.left() <= point.x
            && point.x <= self.right()
            && self.bottom() <= point.y
            && point.y <= self.top()
    }

    /// Returns `true` when `other` overlaps this rect at all.
    ///
    /// This is `intersect(other).is_valid()`: a *partial* overlap test, not
    /// full containment. There is deliberately no full-containment test.
    #[must_use]
    pub fn contains_rect(&self, other: &Self) -> bool {
        self.intersect(other).is_valid()
    }

    /// The rect covering the overlapping extents of `self` and `other`.
    ///
    /// May be invalid (non-positive size) when there is no overlap; callers
    /// check [`Rect::is_valid`].
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let left = self.left().max(other.left());
        let right = self.right().min(other.right());
        let bottom = self.bottom().max(other.bottom());
        let top = self.top().min(other.top());
        Self::new(
            Point::new(left, bottom),
            Vec2::new(right - left, top - bottom),
        )
    }

    /// Shrink in place by `margins`: the position moves by `(left, bottom)`
    /// and the size shrinks by `(left + right, top + bottom)`.
    ///
    /// Negative margins (see [`Margins::negated`]) expand instead.
    pub fn adjust(&mut self, margins: Margins) {
        self.position += Vec2::new(margins.left, margins.bottom);
        self.size -= Vec2::new(margins.left + margins.right, margins.top + margins.bottom);
    }

    /// Return-copy variant of [`Rect::adjust`].
    #[must_use]
    pub fn adjusted(&self, margins: Margins) -> Self {
        let mut rect = *self;
        rect.adjust(margins);
        rect
    }

    /// Component-wise approximate equality with the default tolerance,
    /// [`Rect::APPROX_TOLERANCE`].
    #[must_use]
    pub fn is_approx(&self, other: &Self) -> bool {
        self.is_approx_with(other, Self::APPROX_TOLERANCE)
    }

    /// Component-wise approximate equality with an absolute per-axis tolerance.
    #[must_use]
    pub fn is_approx_with(&self, other: &Self, tolerance: f64) -> bool {
        (self.position.x - other.position.x).abs() <= tolerance
            && (self.position.y - other.position.y).abs() <= tolerance
            && (self.size.x - other.size.x).abs() <= tolerance
            && (self.size.y - other.size.y).abs() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::new(Point::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn accessors() {
        let r = rect(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.top(), 70.0);
        assert_eq!(r.bottom(), 20.0);
        assert_eq!(r.center(), Point::new(60.0, 45.0));
        assert_eq!(r.top_left(), Point::new(10.0, 70.0));
        assert_eq!(r.top_right(), Point::new(110.0, 70.0));
        assert_eq!(r.bottom_left(), Point::new(10.0, 20.0));
        assert_eq!(r.bottom_right(), Point::new(110.0, 20.0));
    }

    #[test]
    fn aligned_construction_offsets_position() {
        let size = Vec2::new(100.0, 50.0);
        let p = Point::new(60.0, 45.0);
        assert_eq!(
            Rect::aligned(p, size, Align::BOTTOM_LEFT),
            Rect::new(p, size)
        );
        assert_eq!(
            Rect::aligned(p, size, Align::CENTER).position,
            Point::new(10.0, 20.0)
        );
        assert_eq!(
            Rect::aligned(p, size, Align::TOP_RIGHT).position,
            Point::new(-40.0, -5.0)
        );
    }

    #[test]
    fn alignment_round_trip() {
        let p = Point::new(33.5, -12.25);
        let size = Vec2::new(64.0, 18.0);
        for align in [
            Align::CENTER,
            Align::TOP_LEFT,
            Align::BOTTOM_RIGHT,
            Align::LEFT_CENTER,
            Align::TOP_CENTER,
        ] {
            let r = Rect::aligned(p, size, align);
            let back = r.point_at(align);
            assert!((back.x - p.x).abs() <= Rect::APPROX_TOLERANCE);
            assert!((back.y - p.y).abs() <= Rect::APPROX_TOLERANCE);
        }
    }

    #[test]
    fn point_at_does_not_mutate() {
        let r = rect(10.0, 20.0, 100.0, 50.0);
        let _ = r.point_at(Align::TOP_RIGHT);
        assert_eq!(r.position, Point::new(10.0, 20.0));
    }

    #[test]
    fn edge_setters_move() {
        let mut r = rect(10.0, 20.0, 100.0, 50.0);
        r.set_left(0.0, EdgeMode::Move);
        assert_eq!((r.left(), r.width()), (0.0, 100.0));
        r.set_right(50.0, EdgeMode::Move);
        assert_eq!((r.left(), r.right()), (-50.0, 50.0));
        r.set_top(0.0, EdgeMode::Move);
        assert_eq!((r.bottom(), r.top()), (-50.0, 0.0));
        r.set_bottom(5.0, EdgeMode::Move);
        assert_eq!((r.bottom(), r.top()), (5.0, 55.0));
        assert_eq!(r.size, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn edge_setters_resize() {
        let mut r = rect(10.0, 20.0, 100.0, 50.0);
        r.set_left(0.0, EdgeMode::Resize);
        assert_eq!((r.left(), r.width()), (0.0, 110.0));
        r.set_right(60.0, EdgeMode::Resize);
        assert_eq!((r.left(), r.width()), (0.0, 60.0));
        r.set_top(100.0, EdgeMode::Resize);
        assert_eq!((r.bottom(), r.height()), (20.0, 80.0));
        r.set_bottom(0.0, EdgeMode::Resize);
        assert_eq!((r.bottom(), r.height()), (0.0, 100.0));
    }

    #[test]
    fn resize_clamps_size_to_zero_when_edges_invert() {
        let mut r = rect(10.0, 20.0, 100.0, 50.0);
        r.set_right(0.0, EdgeMode::Resize);
        assert_eq!((r.left(), r.width()), (0.0, 0.0));

        let mut r = rect(10.0, 20.0, 100.0, 50.0);
        r.set_left(500.0, EdgeMode::Resize);
        assert_eq!((r.left(), r.width()), (500.0, 0.0));

        let mut r = rect(10.0, 20.0, 100.0, 50.0);
        r.set_top(0.0, EdgeMode::Resize);
        assert_eq!((r.bottom(), r.height()), (0.0, 0.0));
    }

    #[test]
    fn corner_setters() {
        let mut r = rect(0.0, 0.0, 10.0, 10.0);
        r.set_top_left(Point::new(-5.0, 20.0), EdgeMode::Resize);
        assert_eq!(r.top_left(), Point::new(-5.0, 20.0));
        assert_eq!(r.bottom_right(), Point::new(10.0, 0.0));

        let mut r = rect(0.0, 0.0, 10.0, 10.0);
        r.set_bottom_right(Point::new(30.0, -2.0), EdgeMode::Resize);
        assert_eq!(r.bottom_right(), Point::new(30.0, -2.0));
        assert_eq!(r.top_left(), Point::new(0.0, 10.0));
    }

    #[test]
    fn set_center_translates() {
        let mut r = rect(0.0, 0.0, 10.0, 20.0);
        r.set_center(Point::new(0.0, 0.0));
        assert_eq!(r.position, Point::new(-5.0, -10.0));
        assert_eq!(r.size, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn validity() {
        assert!(rect(0.0, 0.0, 1.0, 1.0).is_valid());
        assert!(!rect(0.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!rect(0.0, 0.0, 1.0, 0.0).is_valid());
        assert!(!rect(0.0, 0.0, -1.0, 1.0).is_valid());
    }

    #[test]
    fn contains_point_is_inclusive() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(Point::new(5.0, 5.0)));
        assert!(r.contains_point(Point::new(0.0, 0.0)));
        assert!(r.contains_point(Point::new(10.0, 10.0)));
        assert!(!r.contains_point(Point::new(15.0, 15.0)));
        assert!(!r.contains_point(Point::new(5.0, -0.001)));
    }

    #[test]
    fn intersect_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        let i = a.intersect(&b);
        assert!(i.is_valid());
        assert_eq!(i, rect(5.0, 5.0, 5.0, 5.0));
        assert!(a.contains_rect(&b));
    }

    #[test]
    fn intersect_disjoint_is_invalid() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersect(&rect(20.0, 0.0, 5.0, 5.0)).is_valid());
        assert!(!a.intersect(&rect(0.0, 20.0, 5.0, 5.0)).is_valid());
        assert!(!a.contains_rect(&rect(20.0, 20.0, 5.0, 5.0)));
    }

    #[test]
    fn adjust_by_margins() {
        let mut r = rect(10.0, 20.0, 100.0, 50.0);
        r.adjust(Margins::uniform(5.0));
        assert_eq!(r.position, Point::new(15.0, 25.0));
        assert_eq!(r.size, Vec2::new(90.0, 40.0));
    }

    #[test]
    fn negated_margins_expand() {
        let r = rect(10.0, 20.0, 100.0, 50.0);
        let m = Margins::new(1.0, 2.0, 3.0, 4.0);
        assert!(r.adjusted(m).adjusted(m.negated()).is_approx(&r));
    }

    #[test]
    fn approx_equality() {
        let a = rect(1.0, 2.0, 3.0, 4.0);
        let b = rect(1.0 + 1e-9, 2.0 - 1e-9, 3.0, 4.0);
        assert!(a.is_approx(&b));
        assert!(!a.is_approx(&rect(1.1, 2.0, 3.0, 4.0)));
        assert!(a.is_approx_with(&rect(1.1, 2.0, 3.0, 4.0), 0.2));
    }
}
