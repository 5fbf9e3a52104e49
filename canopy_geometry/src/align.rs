// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor alignment flags.

use kurbo::Vec2;

bitflags::bitflags! {
    /// Flags describing which point of a box a position refers to.
    ///
    /// Exactly one horizontal flag (`LEFT`, `RIGHT`, or `H_CENTER`) and one
    /// vertical flag (`TOP`, `BOTTOM`, or `V_CENTER`) is meaningful at a time.
    /// The behavior of conflicting combinations such as `LEFT | RIGHT` is
    /// unspecified and not guarded against; resolution order is documented on
    /// [`Align::anchor_offset`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Align: u8 {
        /// Anchor at the left edge.
        const LEFT = 1 << 0;
        /// Anchor at the right edge.
        const RIGHT = 1 << 1;
        /// Anchor at the horizontal center.
        const H_CENTER = 1 << 2;
        /// Anchor at the top edge.
        const TOP = 1 << 3;
        /// Anchor at the bottom edge.
        const BOTTOM = 1 << 4;
        /// Anchor at the vertical center.
        const V_CENTER = 1 << 5;

        /// Anchor at the center of the box.
        const CENTER = Self::H_CENTER.bits() | Self::V_CENTER.bits();
        /// Anchor at the top-left corner.
        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        /// Anchor at the top-right corner.
        const TOP_RIGHT = Self::TOP.bits() | Self::RIGHT.bits();
        /// Anchor at the bottom-left corner.
        const BOTTOM_LEFT = Self::BOTTOM.bits() | Self::LEFT.bits();
        /// Anchor at the bottom-right corner.
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
        /// Anchor at the middle of the left edge.
        const LEFT_CENTER = Self::LEFT.bits() | Self::V_CENTER.bits();
        /// Anchor at the middle of the right edge.
        const RIGHT_CENTER = Self::RIGHT.bits() | Self::V_CENTER.bits();
        /// Anchor at the middle of the top edge.
        const TOP_CENTER = Self::TOP.bits() | Self::H_CENTER.bits();
        /// Anchor at the middle of the bottom edge.
        const BOTTOM_CENTER = Self::BOTTOM.bits() | Self::H_CENTER.bits();
    }
}

impl Default for Align {
    fn default() -> Self {
        Self::BOTTOM_LEFT
    }
}

impl Align {
    /// Offset from a box's bottom-left corner to the anchor this alignment names.
    ///
    /// Horizontal resolution order: `RIGHT`, else `H_CENTER`, else left.
    /// Vertical resolution order: `TOP`, else `V_CENTER`, else bottom.
    #[must_use]
    pub fn anchor_offset(self, size: Vec2) -> Vec2 {
        let x = if self.contains(Self::RIGHT) {
            size.x
        } else if self.contains(Self::H_CENTER) {
            size.x / 2.0
        } else {
            0.0
        };
        let y = if self.contains(Self::TOP) {
            size.y
        } else if self.contains(Self::V_CENTER) {
            size.y / 2.0
        } else {
            0.0
        };
        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bottom_left() {
        assert_eq!(Align::default(), Align::BOTTOM_LEFT);
    }

    #[test]
    fn anchor_offsets() {
        let size = Vec2::new(100.0, 50.0);
        assert_eq!(Align::BOTTOM_LEFT.anchor_offset(size), Vec2::ZERO);
        assert_eq!(Align::TOP_RIGHT.anchor_offset(size), Vec2::new(100.0, 50.0));
        assert_eq!(Align::CENTER.anchor_offset(size), Vec2::new(50.0, 25.0));
        assert_eq!(Align::TOP_CENTER.anchor_offset(size), Vec2::new(50.0, 50.0));
        assert_eq!(Align::LEFT_CENTER.anchor_offset(size), Vec2::new(0.0, 25.0));
    }
}
