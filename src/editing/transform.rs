// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Quarter-turn rotations and mirror flips about the grid centre
//!
//! Symbol space has y pointing down, so a left rotation turns points
//! counter-clockwise as seen on screen.

use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};

/// A whole-symbol transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    RotateLeft,
    RotateRight,
    FlipHorizontal,
    FlipVertical,
}

impl Transform {
    /// The transform that undoes this one
    pub const fn inverse(self) -> Self {
        match self {
            Transform::RotateLeft => Transform::RotateRight,
            Transform::RotateRight => Transform::RotateLeft,
            Transform::FlipHorizontal => Transform::FlipHorizontal,
            Transform::FlipVertical => Transform::FlipVertical,
        }
    }

    /// Undo description
    pub const fn description(self) -> &'static str {
        match self {
            Transform::RotateLeft => "Rotate Left",
            Transform::RotateRight => "Rotate Right",
            Transform::FlipHorizontal => "Flip Horizontal",
            Transform::FlipVertical => "Flip Vertical",
        }
    }

    /// The affine map about `center`
    ///
    /// Coefficients are exact (0 and ±1), so no trigonometric rounding
    /// creeps in.
    pub fn affine(self, center: Point) -> Affine {
        let (cx, cy) = (center.x, center.y);
        match self {
            // x' = cx + (y - cy), y' = cy - (x - cx)
            Transform::RotateLeft => Affine::new([0.0, -1.0, 1.0, 0.0, cx - cy, cx + cy]),
            // x' = cx - (y - cy), y' = cy + (x - cx)
            Transform::RotateRight => Affine::new([0.0, 1.0, -1.0, 0.0, cx + cy, cy - cx]),
            Transform::FlipHorizontal => Affine::new([-1.0, 0.0, 0.0, 1.0, 2.0 * cx, 0.0]),
            Transform::FlipVertical => Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, 2.0 * cy]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(0.5, 0.5);

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-12
    }

    #[test]
    fn rotate_left_turns_right_of_center_upwards() {
        let p = Transform::RotateLeft.affine(CENTER) * Point::new(1.0, 0.5);
        assert!(close(p, Point::new(0.5, 0.0)));
    }

    #[test]
    fn rotate_right_turns_right_of_center_downwards() {
        let p = Transform::RotateRight.affine(CENTER) * Point::new(1.0, 0.5);
        assert!(close(p, Point::new(0.5, 1.0)));
    }

    #[test]
    fn flips_mirror_about_center_axes() {
        let p = Point::new(0.2, 0.9);
        assert!(close(
            Transform::FlipHorizontal.affine(CENTER) * p,
            Point::new(0.8, 0.9)
        ));
        assert!(close(
            Transform::FlipVertical.affine(CENTER) * p,
            Point::new(0.2, 0.1)
        ));
    }

    #[test]
    fn inverse_restores_points() {
        let p = Point::new(0.13, 0.71);
        for t in [
            Transform::RotateLeft,
            Transform::RotateRight,
            Transform::FlipHorizontal,
            Transform::FlipVertical,
        ] {
            let there = t.affine(CENTER) * p;
            let back = t.inverse().affine(CENTER) * there;
            assert!(close(back, p), "{t:?}");
        }
    }

    #[test]
    fn four_left_turns_are_identity() {
        let p = Point::new(0.3, 0.1);
        let mut q = p;
        for _ in 0..4 {
            q = Transform::RotateLeft.affine(CENTER) * q;
        }
        assert!(close(p, q));
    }
}
