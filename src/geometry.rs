// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Geometry primitives used by snapping and guides.
//!
//! Lines here are `kurbo::Line` values interpreted as *infinite* lines
//! through `p0` and `p1`; the segment endpoints only fix the direction.
//! Circles are plain `kurbo::Circle`s.

use kurbo::{Circle, Line, Point, Rect, Vec2};

/// Below this, direction vectors are treated as parallel and distances as
/// zero
pub const EPSILON: f64 = 1e-9;

/// An infinite line through `origin` at `degrees` from the positive x axis
pub fn line_at_angle(origin: Point, degrees: f64) -> Line {
    let theta = degrees.to_radians();
    Line::new(origin, origin + Vec2::new(theta.cos(), theta.sin()))
}

/// Unit direction of a line, or `None` for a degenerate line
fn direction(line: Line) -> Option<Vec2> {
    let d = line.p1 - line.p0;
    let len = d.hypot();
    (len > EPSILON).then(|| d / len)
}

/// Orthogonal projection of `p` onto the infinite line
pub fn project_onto_line(line: Line, p: Point) -> Point {
    match direction(line) {
        Some(dir) => line.p0 + dir * (p - line.p0).dot(dir),
        None => line.p0,
    }
}

/// Perpendicular distance from `p` to the infinite line
pub fn distance_to_line(line: Line, p: Point) -> f64 {
    p.distance(project_onto_line(line, p))
}

/// Closest point to `p` on the circle's circumference
pub fn nearest_on_circle(circle: Circle, p: Point) -> Point {
    let offset = p - circle.center;
    let len = offset.hypot();
    if len < EPSILON {
        return circle.center + Vec2::new(circle.radius, 0.0);
    }
    circle.center + offset * (circle.radius / len)
}

/// Distance from `p` to the circle's circumference
pub fn distance_to_circle(circle: Circle, p: Point) -> f64 {
    (p.distance(circle.center) - circle.radius).abs()
}

/// Intersection of two infinite lines, `None` when they are parallel
pub fn line_line_intersection(a: Line, b: Line) -> Option<Point> {
    let da = direction(a)?;
    let db = direction(b)?;
    let denom = da.cross(db);
    if denom.abs() < EPSILON {
        return None;
    }
    let t = (b.p0 - a.p0).cross(db) / denom;
    Some(a.p0 + da * t)
}

/// Intersections of an infinite line with a circle (zero, one or two points)
pub fn line_circle_intersections(line: Line, circle: Circle) -> Vec<Point> {
    let Some(dir) = direction(line) else {
        return Vec::new();
    };
    let foot = project_onto_line(line, circle.center);
    let dist = foot.distance(circle.center);
    if dist > circle.radius + EPSILON {
        return Vec::new();
    }
    let half_chord = (circle.radius * circle.radius - dist * dist).max(0.0).sqrt();
    if half_chord < EPSILON {
        return vec![foot];
    }
    vec![foot - dir * half_chord, foot + dir * half_chord]
}

/// Intersections of two circles
///
/// Concentric circles never intersect (coincident ones are treated the same
/// way since they share no isolated point).
pub fn circle_circle_intersections(a: Circle, b: Circle) -> Vec<Point> {
    let offset = b.center - a.center;
    let d = offset.hypot();
    if d < EPSILON || d > a.radius + b.radius + EPSILON || d < (a.radius - b.radius).abs() - EPSILON
    {
        return Vec::new();
    }
    let along = (a.radius * a.radius - b.radius * b.radius + d * d) / (2.0 * d);
    let h = (a.radius * a.radius - along * along).max(0.0).sqrt();
    let unit = offset / d;
    let base = a.center + unit * along;
    if h < EPSILON {
        return vec![base];
    }
    let perp = Vec2::new(-unit.y, unit.x);
    vec![base + perp * h, base - perp * h]
}

/// Whether `p` lies in `rect`, allowing `EPSILON` of slack on every side
pub fn rect_contains(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 - EPSILON
        && p.x <= rect.x1 + EPSILON
        && p.y >= rect.y0 - EPSILON
        && p.y <= rect.y1 + EPSILON
}

/// The four edges of a rectangle: top, bottom, left, right
pub fn rect_edges(rect: Rect) -> [Line; 4] {
    [
        Line::new((rect.x0, rect.y0), (rect.x1, rect.y0)),
        Line::new((rect.x0, rect.y1), (rect.x1, rect.y1)),
        Line::new((rect.x0, rect.y0), (rect.x0, rect.y1)),
        Line::new((rect.x1, rect.y0), (rect.x1, rect.y1)),
    ]
}

/// Clip an infinite line to a rectangle, returning the visible segment
pub fn clip_line_to_rect(line: Line, rect: Rect) -> Option<Line> {
    let mut hits: Vec<Point> = Vec::with_capacity(4);
    for edge in rect_edges(rect) {
        if let Some(p) = line_line_intersection(line, edge)
            && rect_contains(rect, p)
            && !hits.iter().any(|h| h.distance(p) < EPSILON)
        {
            hits.push(p);
        }
    }
    // An edge-aligned line is parallel to two edges and crosses the other
    // two at the corners.
    match hits.as_slice() {
        [first, .., last] => Some(Line::new(*first, *last)),
        _ => None,
    }
}

/// Nearest grid intersection for a grid of the given spacing anchored at
/// the origin
pub fn nearest_grid_point(p: Point, spacing: f64) -> Point {
    Point::new(
        (p.x / spacing).round() * spacing,
        (p.y / spacing).round() * spacing,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn horizontal_line_projection() {
        let line = line_at_angle(Point::new(0.0, 0.0), 0.0);
        let p = Point::new(1.0, 0.02);
        assert!(close(project_onto_line(line, p), Point::new(1.0, 0.0)));
        assert!((distance_to_line(line, p) - 0.02).abs() < 1e-12);
    }

    #[test]
    fn diagonal_lines_cross() {
        let a = line_at_angle(Point::new(0.0, 0.0), 45.0);
        let b = line_at_angle(Point::new(2.0, 0.0), 135.0);
        let hit = line_line_intersection(a, b).unwrap();
        assert!(close(hit, Point::new(1.0, 1.0)));
    }

    #[test]
    fn parallel_lines_do_not_cross() {
        let a = line_at_angle(Point::new(0.0, 0.0), 0.0);
        let b = line_at_angle(Point::new(0.0, 1.0), 0.0);
        assert!(line_line_intersection(a, b).is_none());
    }

    #[test]
    fn line_through_circle_has_two_hits() {
        let circle = Circle::new((0.0, 0.0), 1.0);
        let line = line_at_angle(Point::new(-5.0, 0.0), 0.0);
        let hits = line_circle_intersections(line, circle);
        assert_eq!(hits.len(), 2);
        assert!(close(hits[0], Point::new(-1.0, 0.0)));
        assert!(close(hits[1], Point::new(1.0, 0.0)));
    }

    #[test]
    fn tangent_line_has_one_hit() {
        let circle = Circle::new((0.0, 0.0), 1.0);
        let line = line_at_angle(Point::new(0.0, 1.0), 0.0);
        let hits = line_circle_intersections(line, circle);
        assert_eq!(hits.len(), 1);
        assert!(close(hits[0], Point::new(0.0, 1.0)));
    }

    #[test]
    fn concentric_circles_do_not_intersect() {
        let a = Circle::new((0.5, 0.5), 0.2);
        let b = Circle::new((0.5, 0.5), 0.3);
        assert!(circle_circle_intersections(a, b).is_empty());
    }

    #[test]
    fn overlapping_circles_intersect_twice() {
        let a = Circle::new((0.0, 0.0), 1.0);
        let b = Circle::new((1.0, 0.0), 1.0);
        let hits = circle_circle_intersections(a, b);
        assert_eq!(hits.len(), 2);
        for hit in hits {
            assert!((hit.distance(a.center) - 1.0).abs() < 1e-9);
            assert!((hit.distance(b.center) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn nearest_point_on_circle() {
        let circle = Circle::new((0.0, 0.0), 2.0);
        let p = nearest_on_circle(circle, Point::new(0.0, 3.0));
        assert!(close(p, Point::new(0.0, 2.0)));
        assert!((distance_to_circle(circle, Point::new(0.0, 3.0)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn clip_diagonal_to_unit_square() {
        let rect = Rect::new(0.0, 0.0, 1.0, 1.0);
        let line = line_at_angle(Point::new(0.5, 0.5), 45.0);
        let clipped = clip_line_to_rect(line, rect).unwrap();
        assert!(close(clipped.p0, Point::new(0.0, 0.0)) || close(clipped.p0, Point::new(1.0, 1.0)));
        assert!((clipped.p0.distance(clipped.p1) - 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn clip_misses_rect() {
        let rect = Rect::new(0.0, 0.0, 1.0, 1.0);
        let line = line_at_angle(Point::new(0.0, 5.0), 0.0);
        assert!(clip_line_to_rect(line, rect).is_none());
    }

    #[test]
    fn grid_rounding() {
        let p = nearest_grid_point(Point::new(0.96, 2.03), 1.0);
        assert_eq!(p, Point::new(1.0, 2.0));
    }
}
