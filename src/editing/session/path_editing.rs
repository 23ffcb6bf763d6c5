// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Path editing methods for EditSession: tool commits, point moves,
//! transforms and attribute changes. Every change here is recorded in the
//! undo history.

use super::{EditSession, Notification};
use crate::editing::edit_types::{AttributeValue, EditCommand};
use crate::editing::transform::Transform;
use crate::editing::undo::Command;
use crate::geometry::EPSILON;
use crate::model::{CapStyle, FillRule, JoinStyle};
use crate::tools::Commit;
use kurbo::Point;

impl EditSession {
    /// Apply a command and push it onto the history
    fn execute(&mut self, command: EditCommand) {
        tracing::debug!("Edit: {}", command.description());
        self.history.push(command, &mut self.document);
    }

    /// Feed a point to the current tool, committing when it is complete
    pub fn add_point(&mut self, point: Point) {
        self.abort_drag();
        let path_is_empty = self.document.path.is_empty();
        if let Some(commit) = self.document.tool.add_point(point, path_is_empty) {
            self.commit(commit);
        }
        self.notify_prompt();
    }

    fn commit(&mut self, commit: Commit) {
        let mut after = self.document.path.clone();
        for segment in commit.segments {
            after.push(segment);
        }
        let command = EditCommand::replace_path(commit.description, &self.document, after);
        self.execute(command);
    }

    /// Remove the most recently committed element
    pub fn remove_last(&mut self) {
        self.abort_drag();
        if self.document.path.is_empty() {
            return;
        }
        let after = self.document.path.without_last();
        let command = EditCommand::replace_path("Remove Last", &self.document, after);
        self.execute(command);
    }

    /// Move a committed point
    ///
    /// Out-of-range indices and moves to the same place are ignored.
    pub fn move_point(&mut self, index: usize, to: Point) {
        self.abort_drag();
        let Some(after) = self.document.path.with_point_moved(index, to) else {
            tracing::debug!("No committed point {} to move", index);
            return;
        };
        if after == self.document.path {
            return;
        }
        let command = EditCommand::replace_path("Move Point", &self.document, after);
        self.execute(command);
    }

    /// Rotate or flip the path and active points about the grid centre
    pub fn apply_transform(&mut self, transform: Transform) {
        self.abort_drag();
        let command = EditCommand::transform(&self.document, transform, self.config.grid.center());
        self.execute(command);
    }

    pub fn rotate_left(&mut self) {
        self.apply_transform(Transform::RotateLeft);
    }

    pub fn rotate_right(&mut self) {
        self.apply_transform(Transform::RotateRight);
    }

    pub fn flip_horizontal(&mut self) {
        self.apply_transform(Transform::FlipHorizontal);
    }

    pub fn flip_vertical(&mut self) {
        self.apply_transform(Transform::FlipVertical);
    }

    /// Record an attribute change; setting the current value is a no-op
    fn set_attribute(&mut self, value: AttributeValue) {
        self.abort_drag();
        if value.read_same(&self.document.attributes) == value {
            return;
        }
        let command = EditCommand::set_attribute(&self.document, value);
        self.execute(command);
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.set_attribute(AttributeValue::Filled(filled));
    }

    pub fn set_fill_rule(&mut self, rule: FillRule) {
        self.set_attribute(AttributeValue::FillRule(rule));
    }

    pub fn set_cap_style(&mut self, style: CapStyle) {
        self.set_attribute(AttributeValue::CapStyle(style));
    }

    pub fn set_join_style(&mut self, style: JoinStyle) {
        self.set_attribute(AttributeValue::JoinStyle(style));
    }

    /// Set the line width, clamped to the configured range
    ///
    /// Every call reports whether the width now sits at either bound.
    pub fn set_line_width(&mut self, width: f64) {
        let clamped = self.config.line_width.clamp(width);
        if clamped != width {
            tracing::debug!("Line width {} clamped to {}", width, clamped);
        }
        self.set_attribute(AttributeValue::LineWidth(clamped));
        self.notify_line_width_bounds();
    }

    pub fn increase_line_width(&mut self) {
        let width = self.document.attributes.line_width + self.config.line_width.step;
        self.set_line_width(width);
    }

    pub fn decrease_line_width(&mut self) {
        let width = self.document.attributes.line_width - self.config.line_width.step;
        self.set_line_width(width);
    }

    pub(super) fn notify_line_width_bounds(&mut self) {
        let width = self.document.attributes.line_width;
        let limits = self.config.line_width;
        self.notify(Notification::MinLineWidth(width <= limits.min + EPSILON));
        self.notify(Notification::MaxLineWidth(width >= limits.max - EPSILON));
    }
}
