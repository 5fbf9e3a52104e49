// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-edge insets.

/// Per-edge insets applied to shrink (or, negated, expand) a rectangle.
///
/// See [`Rect::adjust`](crate::Rect::adjust) for how a rect consumes margins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    /// Inset from the left edge.
    pub left: f64,
    /// Inset from the top edge.
    pub top: f64,
    /// Inset from the right edge.
    pub right: f64,
    /// Inset from the bottom edge.
    pub bottom: f64,
}

impl Margins {
    /// Zero insets on all edges.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Margins with the given per-edge insets.
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same inset on every edge.
    #[must_use]
    pub const fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Returns `true` when every inset is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.left == 0.0 && self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0
    }

    /// Per-component sign flip. Adjusting a rect by negated margins expands it
    /// by the amount the original margins would have shrunk it.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::new(-self.left, -self.top, -self.right, -self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_detection() {
        assert!(Margins::ZERO.is_zero());
        assert!(Margins::default().is_zero());
        assert!(!Margins::new(0.0, 0.0, 0.0, 1.0).is_zero());
        assert!(!Margins::uniform(-2.0).is_zero());
    }

    #[test]
    fn negated_flips_every_component() {
        let m = Margins::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(m.negated(), Margins::new(-1.0, 2.0, -3.0, 4.0));
        assert_eq!(m.negated().negated(), m);
    }
}
