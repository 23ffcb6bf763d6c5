// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Tool system for symbol editing
//!
//! Every tool collects a fixed number of points and then commits them as one
//! or more path segments. The points collected so far are the *active
//! points*; they are shown to the user but are not part of the symbol until
//! the tool commits.

pub mod shapes;

use crate::path::Segment;
use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};

// ===== Tool Identifier =====

/// Tool identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolId {
    /// Start a new subpath
    MoveTo,
    /// Draw a straight line from the current point
    #[default]
    LineTo,
    /// Draw a cubic curve from the current point
    CubicTo,
    /// Rectangle from two corners
    Rectangle,
    /// Ellipse inscribed in a rectangle from two corners
    Ellipse,
}

impl ToolId {
    /// Points needed before the tool commits
    pub const fn required_points(self) -> usize {
        match self {
            ToolId::MoveTo | ToolId::LineTo => 1,
            ToolId::CubicTo => 3,
            ToolId::Rectangle | ToolId::Ellipse => 2,
        }
    }

    /// Whether the tool continues from the current point of the path
    ///
    /// Such tools need an existing path; on an empty path their first point
    /// becomes an implicit `MoveTo`.
    pub const fn continues_path(self) -> bool {
        matches!(self, ToolId::LineTo | ToolId::CubicTo)
    }

    /// Human-readable tool name, also used for undo descriptions
    pub const fn name(self) -> &'static str {
        match self {
            ToolId::MoveTo => "Move To",
            ToolId::LineTo => "Line To",
            ToolId::CubicTo => "Cubic To",
            ToolId::Rectangle => "Rectangle",
            ToolId::Ellipse => "Ellipse",
        }
    }

    /// Status prompt describing the next point the tool expects
    pub fn prompt(self, collected: usize, path_is_empty: bool) -> String {
        let next = if path_is_empty && self.continues_path() && collected == 0 {
            "select the start point"
        } else {
            match (self, collected) {
                (ToolId::MoveTo, _) => "select the start of a new subpath",
                (ToolId::LineTo, _) => "select the end point",
                (ToolId::CubicTo, 0) => "select the first control point",
                (ToolId::CubicTo, 1) => "select the second control point",
                (ToolId::CubicTo, _) => "select the end point",
                (ToolId::Rectangle | ToolId::Ellipse, 0) => "select the first corner",
                (ToolId::Rectangle | ToolId::Ellipse, _) => "select the opposite corner",
            }
        };
        format!("{}: {}", self.name(), next)
    }
}

// ===== Commit =====

/// Segments produced when a tool has collected all its points
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    /// Undo description
    pub description: &'static str,
    pub segments: Vec<Segment>,
}

// ===== ActiveTool =====

/// The selected tool and the points it has collected so far
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveTool {
    id: ToolId,
    points: Vec<Point>,
}

impl ActiveTool {
    pub fn new(id: ToolId) -> Self {
        Self {
            id,
            points: Vec::new(),
        }
    }

    pub fn id(&self) -> ToolId {
        self.id
    }

    /// Points collected but not yet committed
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Switch tools, discarding any collected points
    pub fn select(&mut self, id: ToolId) {
        self.id = id;
        self.points.clear();
    }

    /// Discard collected points; returns true if there were any
    pub fn cancel(&mut self) -> bool {
        let had_points = !self.points.is_empty();
        self.points.clear();
        had_points
    }

    /// Accept a point, committing when the tool has all it needs
    ///
    /// `path_is_empty` tells the tool whether there is a current point to
    /// continue from. Line and curve tools on an empty path commit their
    /// first point as a `MoveTo`.
    pub fn add_point(&mut self, point: Point, path_is_empty: bool) -> Option<Commit> {
        if path_is_empty && self.id.continues_path() && self.points.is_empty() {
            tracing::debug!("{}: implicit move to {:?}", self.id.name(), point);
            return Some(Commit {
                description: ToolId::MoveTo.name(),
                segments: vec![Segment::MoveTo(point)],
            });
        }

        self.points.push(point);
        if self.points.len() < self.id.required_points() {
            return None;
        }

        let segments = match (self.id, self.points.as_slice()) {
            (ToolId::MoveTo, [p]) => vec![Segment::MoveTo(*p)],
            (ToolId::LineTo, [p]) => vec![Segment::LineTo(*p)],
            (ToolId::CubicTo, [c1, c2, p]) => vec![Segment::CubicTo(*c1, *c2, *p)],
            (ToolId::Rectangle, [from, to]) => shapes::rectangle(*from, *to),
            (ToolId::Ellipse, [from, to]) => shapes::ellipse(*from, *to),
            _ => unreachable!("{:?} collected {} points", self.id, self.points.len()),
        };
        self.points.clear();
        Some(Commit {
            description: self.id.name(),
            segments,
        })
    }

    /// Move one collected point
    pub fn move_point(&mut self, index: usize, to: Point) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                *point = to;
                true
            }
            None => false,
        }
    }

    /// Apply a transform to every collected point
    pub fn transform(&mut self, affine: Affine) {
        for point in &mut self.points {
            *point = affine * *point;
        }
    }

    /// Replace the collected points
    pub fn set_points(&mut self, points: &[Point]) {
        self.points.clear();
        self.points.extend_from_slice(points);
    }
}
