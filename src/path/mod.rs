// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Path abstraction for symbols: the editable representation.
//!
//! A `SymbolPath` stores the element tags and the flat point list side by
//! side. Both vectors are private; the only ways to change them are whole
//! segment pushes, whole-path replacement via [`SymbolPath::deconstruct`],
//! and the copy-producing helpers below. That keeps the point count equal to
//! the sum of the element point counts at all times.
//!
//! [`SymbolPath::construct`] converts to a `kurbo::BezPath` for rendering,
//! and [`SymbolPath::deconstruct`] converts any `BezPath` back.

pub mod element;

pub use element::{Element, Segment};

use kurbo::{Affine, BezPath, PathEl, Point, QuadBez};

/// The committed geometry of a symbol
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolPath {
    elements: Vec<Element>,
    points: Vec<Point>,
}

impl SymbolPath {
    /// Create an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a path from a sequence of segments
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        let mut path = Self::new();
        for segment in segments {
            path.push(segment);
        }
        path
    }

    /// The element tags, in order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The flat point list consumed by the elements
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Where the pen currently rests, if anywhere
    pub fn current_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Append one segment
    ///
    /// A path always begins with a `MoveTo`. Pushing a line or curve onto an
    /// empty path starts the path with an implicit `MoveTo` at the segment's
    /// end point instead.
    pub fn push(&mut self, segment: Segment) {
        let segment = if self.is_empty() && segment.element() != Element::MoveTo {
            Segment::MoveTo(segment.end())
        } else {
            segment
        };
        self.elements.push(segment.element());
        segment.extend_points(&mut self.points);
    }

    /// Iterate over segments, pairing each element with its points
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let mut offset = 0;
        self.elements.iter().map(move |&element| {
            let count = element.point_count();
            let segment = Segment::from_parts(element, &self.points[offset..offset + count]);
            offset += count;
            segment
        })
    }

    /// Produce a renderable path from the elements and points
    pub fn construct(&self) -> BezPath {
        let mut path = BezPath::new();
        for segment in self.segments() {
            match segment {
                Segment::MoveTo(p) => path.move_to(p),
                Segment::LineTo(p) => path.line_to(p),
                Segment::CubicTo(c1, c2, p) => path.curve_to(c1, c2, p),
            }
        }
        path
    }

    /// Repopulate elements and points from a renderable path
    ///
    /// Quadratic segments are raised to cubics. A `ClosePath` becomes an
    /// explicit line back to the subpath start, unless the pen is already
    /// there.
    pub fn deconstruct(path: &BezPath) -> Self {
        let mut result = Self::new();
        let mut start = Point::ZERO;
        let mut current = Point::ZERO;

        for el in path.elements() {
            match *el {
                PathEl::MoveTo(p) => {
                    result.push(Segment::MoveTo(p));
                    start = p;
                    current = p;
                }
                PathEl::LineTo(p) => {
                    result.push(Segment::LineTo(p));
                    current = p;
                }
                PathEl::QuadTo(p1, p2) => {
                    let cubic = QuadBez::new(current, p1, p2).raise();
                    result.push(Segment::CubicTo(cubic.p1, cubic.p2, cubic.p3));
                    current = p2;
                }
                PathEl::CurveTo(p1, p2, p3) => {
                    result.push(Segment::CubicTo(p1, p2, p3));
                    current = p3;
                }
                PathEl::ClosePath => {
                    if current != start {
                        result.push(Segment::LineTo(start));
                        current = start;
                    }
                }
            }
        }
        result
    }

    /// A copy of this path without its final element
    ///
    /// The final instruction is dropped from the constructed path and the
    /// result deconstructed again. An empty path stays empty.
    pub fn without_last(&self) -> Self {
        let mut elements: Vec<PathEl> = self.construct().elements().to_vec();
        elements.pop();
        Self::deconstruct(&BezPath::from_vec(elements))
    }

    /// A copy of this path with every point transformed
    pub fn transformed(&self, affine: Affine) -> Self {
        Self::from_segments(self.segments().map(|seg| seg.transformed(affine)))
    }

    /// A copy of this path with the point at `index` moved to `to`
    ///
    /// Returns `None` if `index` is out of range.
    pub fn with_point_moved(&self, index: usize, to: Point) -> Option<Self> {
        if index >= self.points.len() {
            return None;
        }
        let mut moved = self.clone();
        moved.points[index] = to;
        Some(moved)
    }

    /// Check the point count matches the element tags
    pub fn is_consistent(&self) -> bool {
        let expected: usize = self.elements.iter().map(|e| e.point_count()).sum();
        expected == self.points.len()
            && self.elements.first().is_none_or(|e| *e == Element::MoveTo)
    }
}
