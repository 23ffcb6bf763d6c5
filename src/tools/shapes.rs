// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Rectangle and ellipse tools
//!
//! Both shapes are broken down into plain path segments: a rectangle into a
//! move and four lines, an ellipse into a move and four quarter-arc cubics.
//! Each shape starts its own subpath and ends where it began.

use crate::path::Segment;
use kurbo::{Point, Rect};

/// Control point distance for a quarter circle of radius 1
const KAPPA: f64 = 0.552_284_749_830_793_6;

/// Segments for the rectangle spanned by two opposite corners
pub fn rectangle(from: Point, to: Point) -> Vec<Segment> {
    let rect = Rect::from_points(from, to);
    let p0 = Point::new(rect.min_x(), rect.min_y());
    let p1 = Point::new(rect.max_x(), rect.min_y());
    let p2 = Point::new(rect.max_x(), rect.max_y());
    let p3 = Point::new(rect.min_x(), rect.max_y());

    vec![
        Segment::MoveTo(p0),
        Segment::LineTo(p1),
        Segment::LineTo(p2),
        Segment::LineTo(p3),
        Segment::LineTo(p0),
    ]
}

/// Segments for the ellipse inscribed in the rectangle spanned by two
/// opposite corners
///
/// Starts at the rightmost point and runs through the top, left and bottom
/// extremes back to the start.
pub fn ellipse(from: Point, to: Point) -> Vec<Segment> {
    let rect = Rect::from_points(from, to);
    let c = rect.center();
    let rx = rect.width() / 2.0;
    let ry = rect.height() / 2.0;
    let kx = rx * KAPPA;
    let ky = ry * KAPPA;

    let right = Point::new(c.x + rx, c.y);
    let top = Point::new(c.x, c.y - ry);
    let left = Point::new(c.x - rx, c.y);
    let bottom = Point::new(c.x, c.y + ry);

    vec![
        Segment::MoveTo(right),
        Segment::CubicTo(
            Point::new(c.x + rx, c.y - ky),
            Point::new(c.x + kx, c.y - ry),
            top,
        ),
        Segment::CubicTo(
            Point::new(c.x - kx, c.y - ry),
            Point::new(c.x - rx, c.y - ky),
            left,
        ),
        Segment::CubicTo(
            Point::new(c.x - rx, c.y + ky),
            Point::new(c.x - kx, c.y + ry),
            bottom,
        ),
        Segment::CubicTo(
            Point::new(c.x + kx, c.y + ry),
            Point::new(c.x + rx, c.y + ky),
            right,
        ),
    ]
}
