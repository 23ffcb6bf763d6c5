// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Mapping between screen pixels and symbol space
//!
//! The symbol square `[0, extent]²` is drawn into a square widget of
//! `size` pixels with its origin at the widget's top-left corner. Both
//! spaces have y pointing down, so the mapping is a plain scale.

use kurbo::{Affine, Point};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPort {
    /// Widget edge length in pixels
    pub size: f64,
    /// Symbol space edge length
    pub extent: f64,
}

impl ViewPort {
    pub fn new(size: f64, extent: f64) -> Self {
        Self { size, extent }
    }

    /// Pixels per symbol unit
    pub fn zoom(&self) -> f64 {
        self.size / self.extent
    }

    /// Screen to symbol space
    pub fn to_symbol(&self, screen: Point) -> Point {
        self.inverse_affine() * screen
    }

    /// Symbol space to screen
    pub fn to_screen(&self, symbol: Point) -> Point {
        self.affine() * symbol
    }

    /// A pixel distance expressed in symbol units
    pub fn screen_to_symbol_distance(&self, pixels: f64) -> f64 {
        pixels / self.zoom()
    }

    /// Transform for drawing symbol-space geometry on screen
    pub fn affine(&self) -> Affine {
        Affine::scale(self.zoom())
    }

    pub fn inverse_affine(&self) -> Affine {
        Affine::scale(self.zoom().recip())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_both_ways() {
        let vp = ViewPort::new(400.0, 1.0);
        assert_eq!(vp.to_screen(Point::new(0.25, 0.5)), Point::new(100.0, 200.0));
        let back = vp.to_symbol(Point::new(100.0, 200.0));
        assert!(back.distance(Point::new(0.25, 0.5)) < 1e-12);
        assert!((vp.screen_to_symbol_distance(8.0) - 0.02).abs() < 1e-12);
    }
}
