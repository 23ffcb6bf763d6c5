// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Path element tags and the segments they describe.

use kurbo::{Affine, Point};

/// Tag identifying how many trailing points a path element consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// Start a new subpath (1 point)
    MoveTo,
    /// Straight line to a point (1 point)
    LineTo,
    /// Cubic curve: control 1, control 2, end point (3 points)
    CubicTo,
}

impl Element {
    /// Number of points this element consumes from the point sequence
    pub const fn point_count(self) -> usize {
        match self {
            Element::MoveTo | Element::LineTo => 1,
            Element::CubicTo => 3,
        }
    }
}

/// One element together with its points
///
/// The variant fixes the point count, so a sequence of segments can never
/// disagree with its element tags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
}

impl Segment {
    /// The element tag for this segment
    pub fn element(&self) -> Element {
        match self {
            Segment::MoveTo(_) => Element::MoveTo,
            Segment::LineTo(_) => Element::LineTo,
            Segment::CubicTo(..) => Element::CubicTo,
        }
    }

    /// The point where this segment leaves the pen
    pub fn end(&self) -> Point {
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) | Segment::CubicTo(_, _, p) => p,
        }
    }

    /// Append this segment's points, in order, to `out`
    pub fn extend_points(&self, out: &mut Vec<Point>) {
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) => out.push(p),
            Segment::CubicTo(c1, c2, p) => out.extend([c1, c2, p]),
        }
    }

    /// Rebuild a segment from an element tag and exactly its points
    pub(crate) fn from_parts(element: Element, points: &[Point]) -> Self {
        match (element, points) {
            (Element::MoveTo, [p]) => Segment::MoveTo(*p),
            (Element::LineTo, [p]) => Segment::LineTo(*p),
            (Element::CubicTo, [c1, c2, p]) => Segment::CubicTo(*c1, *c2, *p),
            _ => unreachable!("point count does not match {element:?}"),
        }
    }

    /// Apply an affine transform to every point
    pub fn transformed(&self, affine: Affine) -> Self {
        match *self {
            Segment::MoveTo(p) => Segment::MoveTo(affine * p),
            Segment::LineTo(p) => Segment::LineTo(affine * p),
            Segment::CubicTo(c1, c2, p) => Segment::CubicTo(affine * c1, affine * c2, affine * p),
        }
    }
}
