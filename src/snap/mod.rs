// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Snapping of pointer positions to the grid and to alignment guides.
//!
//! Snapping is a pure function of the pointer position, the existing points
//! and the configuration, so the same inputs always give the same result.
//!
//! Order of preference:
//! 1. the nearest grid intersection, when grid snapping is on and it is
//!    within tolerance;
//! 2. the nearest guide intersection within tolerance;
//! 3. the nearest point on the closest guide within tolerance;
//! 4. the pointer position unchanged.

pub mod guides;

pub use guides::{Guide, GuideState};

use crate::geometry;
use crate::settings::{GridConfig, SnapConfig};
use kurbo::Point;

/// What a snapped position was aligned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapKind {
    /// Nothing in range; the position is unchanged
    None,
    /// A grid intersection
    Grid,
    /// An intersection of guides, or of a guide with a grid edge
    Intersection,
    /// The closest point on a single guide
    Guide,
}

/// A snapped position plus the guides that were considered
#[derive(Debug, Clone, PartialEq)]
pub struct SnapResult {
    pub point: Point,
    pub kind: SnapKind,
    /// Guides near the pointer, for display; empty after a grid snap
    pub guides: GuideState,
}

impl SnapResult {
    fn unchanged(point: Point, guides: GuideState) -> Self {
        Self {
            point,
            kind: SnapKind::None,
            guides,
        }
    }
}

/// Snap engine over a fixed grid and snap configuration
#[derive(Debug, Clone, Copy)]
pub struct SnapEngine<'a> {
    grid: &'a GridConfig,
    config: &'a SnapConfig,
}

impl<'a> SnapEngine<'a> {
    pub fn new(grid: &'a GridConfig, config: &'a SnapConfig) -> Self {
        Self { grid, config }
    }

    /// Snap `pointer` against `sources`, the points guides are derived from
    pub fn snap(&self, pointer: Point, sources: &[Point], snap_to_grid: bool) -> SnapResult {
        if snap_to_grid && let Some(point) = self.snap_to_grid(pointer) {
            return SnapResult {
                point,
                kind: SnapKind::Grid,
                guides: GuideState::default(),
            };
        }
        self.snap_to_guides(pointer, sources)
    }

    /// The nearest grid intersection inside the grid, if it is within
    /// tolerance
    pub fn snap_to_grid(&self, pointer: Point) -> Option<Point> {
        let bounds = self.grid.bounds();
        let nearest = geometry::nearest_grid_point(pointer, self.grid.spacing());
        let candidate = Point::new(
            nearest.x.clamp(bounds.x0, bounds.x1),
            nearest.y.clamp(bounds.y0, bounds.y1),
        );
        (candidate.distance(pointer) <= self.config.grid_tolerance).then_some(candidate)
    }

    /// Snap to alignment guides only
    pub fn snap_to_guides(&self, pointer: Point, sources: &[Point]) -> SnapResult {
        let tolerance = self.config.guide_tolerance;
        let bounds = self.grid.bounds();
        let near = guides::guides_near(
            pointer,
            sources,
            &self.config.guide_angles,
            self.grid.center(),
            tolerance,
        );
        let state = GuideState {
            snap_points: guides::intersections(&near, bounds),
            guides: near,
        };

        if let Some(point) = nearest_within(pointer, state.snap_points.iter().copied(), tolerance)
        {
            tracing::trace!("Snapped {:?} to guide intersection {:?}", pointer, point);
            return SnapResult {
                point,
                kind: SnapKind::Intersection,
                guides: state,
            };
        }

        let on_guides = state.guides.iter().map(|guide| guide.nearest(pointer));
        if let Some(point) = nearest_within(pointer, on_guides, tolerance) {
            tracing::trace!("Snapped {:?} to guide at {:?}", pointer, point);
            return SnapResult {
                point,
                kind: SnapKind::Guide,
                guides: state,
            };
        }

        SnapResult::unchanged(pointer, state)
    }
}

/// The candidate closest to `target` within `tolerance`; the earliest wins a
/// tie
fn nearest_within(
    target: Point,
    candidates: impl Iterator<Item = Point>,
    tolerance: f64,
) -> Option<Point> {
    let mut best: Option<(f64, Point)> = None;
    for candidate in candidates {
        let dist = candidate.distance(target);
        if dist > tolerance {
            continue;
        }
        if best.is_none_or(|(best_dist, _)| dist < best_dist) {
            best = Some((dist, candidate));
        }
    }
    best.map(|(_, point)| point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid4() -> GridConfig {
        GridConfig {
            elements: 4,
            extent: 4.0,
        }
    }

    fn snap_config(tolerance: f64) -> SnapConfig {
        SnapConfig {
            grid_tolerance: tolerance,
            guide_tolerance: tolerance,
            ..SnapConfig::default()
        }
    }

    #[test]
    fn grid_snap_to_nearest_intersection() {
        let grid = grid4();
        let config = snap_config(0.1);
        let engine = SnapEngine::new(&grid, &config);
        let result = engine.snap(Point::new(0.96, 2.03), &[], true);
        assert_eq!(result.kind, SnapKind::Grid);
        assert_eq!(result.point, Point::new(1.0, 2.0));
    }

    #[test]
    fn grid_snap_out_of_tolerance_falls_through() {
        let grid = grid4();
        let config = snap_config(0.1);
        let engine = SnapEngine::new(&grid, &config);
        let result = engine.snap(Point::new(0.5, 0.5), &[], true);
        assert_eq!(result.kind, SnapKind::None);
        assert_eq!(result.point, Point::new(0.5, 0.5));
    }

    #[test]
    fn grid_snap_stays_inside_the_grid() {
        let grid = grid4();
        let config = snap_config(0.8);
        let engine = SnapEngine::new(&grid, &config);
        let result = engine.snap(Point::new(-0.55, 4.55), &[], true);
        assert_eq!(result.kind, SnapKind::Grid);
        assert_eq!(result.point, Point::new(0.0, 4.0));

        let config = snap_config(0.5);
        let engine = SnapEngine::new(&grid, &config);
        assert_eq!(engine.snap_to_grid(Point::new(-0.6, 2.0)), None);
    }

    #[test]
    fn snap_to_nearest_point_on_guide() {
        let grid = grid4();
        let config = snap_config(0.05);
        let engine = SnapEngine::new(&grid, &config);
        let sources = [Point::new(0.0, 0.0), Point::new(2.0, 0.0)];
        let result = engine.snap(Point::new(1.0, 0.02), &sources, false);
        assert_eq!(result.kind, SnapKind::Guide);
        assert!(result.point.distance(Point::new(1.0, 0.0)) < 1e-9);
        assert_eq!(result.guides.guides.len(), 1);
    }

    #[test]
    fn intersection_beats_single_guide() {
        let grid = grid4();
        let config = snap_config(0.05);
        let engine = SnapEngine::new(&grid, &config);
        // Vertical guide through (1, 0) and horizontal guide through (3, 3)
        // cross at (1, 3).
        let sources = [Point::new(1.0, 0.0), Point::new(3.0, 3.0)];
        let result = engine.snap(Point::new(1.02, 2.99), &sources, false);
        assert_eq!(result.kind, SnapKind::Intersection);
        assert!(result.point.distance(Point::new(1.0, 3.0)) < 1e-9);
    }

    #[test]
    fn grid_snap_has_priority_over_guides() {
        let grid = grid4();
        let config = snap_config(0.1);
        let engine = SnapEngine::new(&grid, &config);
        // The pointer sits exactly on a guide intersection but also near the
        // grid point (1, 3).
        let sources = [Point::new(1.05, 0.0), Point::new(3.0, 3.0)];
        let pointer = Point::new(1.05, 3.0);
        assert_eq!(engine.snap(pointer, &sources, false).kind, SnapKind::Intersection);

        let result = engine.snap(pointer, &sources, true);
        assert_eq!(result.kind, SnapKind::Grid);
        assert_eq!(result.point, Point::new(1.0, 3.0));
        assert!(result.guides.is_empty());
    }

    #[test]
    fn far_from_everything_is_unchanged() {
        let grid = grid4();
        let config = snap_config(0.05);
        let engine = SnapEngine::new(&grid, &config);
        let sources = [Point::new(0.0, 0.0)];
        let pointer = Point::new(1.3, 2.9);
        let result = engine.snap(pointer, &sources, false);
        assert_eq!(result.kind, SnapKind::None);
        assert_eq!(result.point, pointer);
    }

    #[test]
    fn snapping_is_deterministic() {
        let grid = GridConfig::default();
        let config = SnapConfig::default();
        let engine = SnapEngine::new(&grid, &config);
        let sources = [
            Point::new(0.25, 0.25),
            Point::new(0.75, 0.25),
            Point::new(0.5, 0.8),
        ];
        let pointer = Point::new(0.26, 0.74);
        let first = engine.snap(pointer, &sources, false);
        for _ in 0..10 {
            assert_eq!(engine.snap(pointer, &sources, false), first);
        }
    }

    #[test]
    fn ties_go_to_the_first_candidate() {
        let target = Point::new(0.0, 0.0);
        let candidates = [Point::new(1.0, 0.0), Point::new(-1.0, 0.0)];
        let best = nearest_within(target, candidates.into_iter(), 2.0);
        assert_eq!(best, Some(Point::new(1.0, 0.0)));
        assert_eq!(nearest_within(target, candidates.into_iter(), 0.5), None);
    }
}
