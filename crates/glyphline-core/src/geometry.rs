//! Axis-aligned bounding boxes reported by fonts and accumulated by layouts.

use std::ops::{BitOr, BitOrAssign};

use crate::math::Vec3;

/// An axis-aligned box spanning `lower` to `upper`.
///
/// The default box is empty: both corners sit at the origin.
/// Union with an empty box yields the other operand, so an accumulator can start
/// from `BoundingBox::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub lower: Vec3,
    pub upper: Vec3,
}

impl BoundingBox {
    pub fn new(lower: Vec3, upper: Vec3) -> Self {
        Self { lower, upper }
    }

    /// Build a box from 2D extents with zero depth.
    pub fn from_extents(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            lower: Vec3::new(min_x, min_y, 0.0),
            upper: Vec3::new(max_x, max_y, 0.0),
        }
    }

    pub fn width(&self) -> f32 {
        self.upper.x - self.lower.x
    }

    pub fn height(&self) -> f32 {
        self.upper.y - self.lower.y
    }

    /// True when the box is degenerate on both the x and y axes.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 && self.height() <= 0.0
    }

    /// Move both corners by `offset`.
    pub fn translate(self, offset: Vec3) -> Self {
        Self {
            lower: self.lower + offset,
            upper: self.upper + offset,
        }
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Self {
            lower: self.lower.min(other.lower),
            upper: self.upper.max(other.upper),
        }
    }

    /// Whether `point` lies inside the box on the x and y axes (edges included).
    pub fn contains_xy(&self, x: f32, y: f32) -> bool {
        x >= self.lower.x && x <= self.upper.x && y >= self.lower.y && y <= self.upper.y
    }
}

impl BitOr for BoundingBox {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for BoundingBox {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}
