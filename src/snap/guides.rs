// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Alignment guides derived from existing points.

use crate::geometry::{self, EPSILON};
use kurbo::{Circle, Line, Point, Rect};

/// A single alignment guide
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Guide {
    /// Infinite line through an existing point at an allowed angle
    Line(Line),
    /// Circle about the grid centre through an existing point
    Circle(Circle),
}

impl Guide {
    /// Distance from `p` to the guide
    pub fn distance(&self, p: Point) -> f64 {
        match *self {
            Guide::Line(line) => geometry::distance_to_line(line, p),
            Guide::Circle(circle) => geometry::distance_to_circle(circle, p),
        }
    }

    /// Closest point on the guide to `p`
    pub fn nearest(&self, p: Point) -> Point {
        match *self {
            Guide::Line(line) => geometry::project_onto_line(line, p),
            Guide::Circle(circle) => geometry::nearest_on_circle(circle, p),
        }
    }

    /// Points where this guide meets another
    pub fn intersections(&self, other: &Guide) -> Vec<Point> {
        match (*self, *other) {
            (Guide::Line(a), Guide::Line(b)) => {
                geometry::line_line_intersection(a, b).into_iter().collect()
            }
            (Guide::Line(line), Guide::Circle(circle))
            | (Guide::Circle(circle), Guide::Line(line)) => {
                geometry::line_circle_intersections(line, circle)
            }
            (Guide::Circle(a), Guide::Circle(b)) => geometry::circle_circle_intersections(a, b),
        }
    }

    /// Whether two guides describe the same set of points
    fn coincides_with(&self, other: &Guide) -> bool {
        match (*self, *other) {
            (Guide::Line(a), Guide::Line(b)) => {
                geometry::line_line_intersection(a, b).is_none()
                    && geometry::distance_to_line(a, b.p0) < EPSILON
            }
            (Guide::Circle(a), Guide::Circle(b)) => {
                a.center.distance(b.center) < EPSILON && (a.radius - b.radius).abs() < EPSILON
            }
            _ => false,
        }
    }
}

/// Guides and snap candidates computed for one pointer position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuideState {
    /// Guides within tolerance of the pointer, in the order they were found
    pub guides: Vec<Guide>,
    /// Intersections of those guides with each other and with the grid
    /// edges, limited to the visible area
    pub snap_points: Vec<Point>,
}

impl GuideState {
    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }

    /// Guide lines as visible segments clipped to `bounds`
    pub fn clipped_lines(&self, bounds: Rect) -> Vec<Line> {
        self.guides
            .iter()
            .filter_map(|guide| match guide {
                Guide::Line(line) => geometry::clip_line_to_rect(*line, bounds),
                Guide::Circle(_) => None,
            })
            .collect()
    }

    /// Guide circles
    pub fn circles(&self) -> Vec<Circle> {
        self.guides
            .iter()
            .filter_map(|guide| match guide {
                Guide::Circle(circle) => Some(*circle),
                Guide::Line(_) => None,
            })
            .collect()
    }
}

/// Build every guide passing within `tolerance` of `pointer`
///
/// For each source point, in order, the lines at each angle come first and
/// the circle about `center` last. Duplicate guides keep their first
/// occurrence.
pub fn guides_near(
    pointer: Point,
    sources: &[Point],
    angles: &[f64],
    center: Point,
    tolerance: f64,
) -> Vec<Guide> {
    let mut kept: Vec<Guide> = Vec::new();
    let mut keep = |guide: Guide| {
        if guide.distance(pointer) <= tolerance && !kept.iter().any(|g| g.coincides_with(&guide)) {
            kept.push(guide);
        }
    };

    for &source in sources {
        for &angle in angles {
            keep(Guide::Line(geometry::line_at_angle(source, angle)));
        }
        let radius = source.distance(center);
        if radius > EPSILON {
            keep(Guide::Circle(Circle::new(center, radius)));
        }
    }
    kept
}

/// Intersections of guides with each other and with the edges of `bounds`
///
/// Only points inside `bounds` are returned.
pub fn intersections(guides: &[Guide], bounds: Rect) -> Vec<Point> {
    let edges = geometry::rect_edges(bounds).map(Guide::Line);
    let mut points = Vec::new();

    for (i, guide) in guides.iter().enumerate() {
        for other in &guides[i + 1..] {
            points.extend(guide.intersections(other));
        }
        for edge in &edges {
            points.extend(guide.intersections(edge));
        }
    }

    points.retain(|p| geometry::rect_contains(bounds, *p));
    points
}
