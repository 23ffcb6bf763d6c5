// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit types recorded in the undo history

use super::transform::Transform;
use super::undo::Command;
use crate::model::{Attributes, CapStyle, FillRule, JoinStyle};
use crate::path::SymbolPath;
use crate::tools::ActiveTool;
use kurbo::Point;

/// The state every edit command operates on
///
/// Active points live here too because transforms move them along with
/// the committed path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub path: SymbolPath,
    pub attributes: Attributes,
    pub tool: ActiveTool,
}

/// A single attribute and its value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue {
    Filled(bool),
    FillRule(FillRule),
    CapStyle(CapStyle),
    JoinStyle(JoinStyle),
    LineWidth(f64),
}

impl AttributeValue {
    /// The current value of the same attribute in `attributes`
    pub fn read_same(self, attributes: &Attributes) -> Self {
        match self {
            AttributeValue::Filled(_) => AttributeValue::Filled(attributes.filled),
            AttributeValue::FillRule(_) => AttributeValue::FillRule(attributes.fill_rule),
            AttributeValue::CapStyle(_) => AttributeValue::CapStyle(attributes.cap_style),
            AttributeValue::JoinStyle(_) => AttributeValue::JoinStyle(attributes.join_style),
            AttributeValue::LineWidth(_) => AttributeValue::LineWidth(attributes.line_width),
        }
    }

    pub fn apply(self, attributes: &mut Attributes) {
        match self {
            AttributeValue::Filled(v) => attributes.filled = v,
            AttributeValue::FillRule(v) => attributes.fill_rule = v,
            AttributeValue::CapStyle(v) => attributes.cap_style = v,
            AttributeValue::JoinStyle(v) => attributes.join_style = v,
            AttributeValue::LineWidth(v) => attributes.line_width = v,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            AttributeValue::Filled(_) => "Set Filled",
            AttributeValue::FillRule(_) => "Set Fill Rule",
            AttributeValue::CapStyle(_) => "Set Cap Style",
            AttributeValue::JoinStyle(_) => "Set Join Style",
            AttributeValue::LineWidth(_) => "Set Line Width",
        }
    }
}

/// One undoable editing step
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    /// Swap the whole committed path: tool commits, remove last, point moves
    ReplacePath {
        description: &'static str,
        before: SymbolPath,
        after: SymbolPath,
    },
    /// Rotate or flip the path and active points about `center`
    ///
    /// The active points are only swapped while they are still the set the
    /// transform was recorded against.
    Transform {
        transform: Transform,
        center: Point,
        active_before: Vec<Point>,
        active_after: Vec<Point>,
    },
    /// Change one attribute
    SetAttribute {
        before: AttributeValue,
        after: AttributeValue,
    },
}

impl EditCommand {
    /// A command replacing `document`'s path with `after`
    pub fn replace_path(description: &'static str, document: &Document, after: SymbolPath) -> Self {
        EditCommand::ReplacePath {
            description,
            before: document.path.clone(),
            after,
        }
    }

    /// A command setting one attribute, remembering the current value
    pub fn set_attribute(document: &Document, after: AttributeValue) -> Self {
        EditCommand::SetAttribute {
            before: after.read_same(&document.attributes),
            after,
        }
    }

    /// A command rotating or flipping `document` about `center`
    pub fn transform(document: &Document, transform: Transform, center: Point) -> Self {
        let affine = transform.affine(center);
        let active_before = document.tool.points().to_vec();
        let active_after = active_before.iter().map(|p| affine * *p).collect();
        EditCommand::Transform {
            transform,
            center,
            active_before,
            active_after,
        }
    }

    fn apply_transform(
        document: &mut Document,
        transform: Transform,
        center: Point,
        from: &[Point],
        to: &[Point],
    ) {
        document.path = document.path.transformed(transform.affine(center));
        if document.tool.points() == from {
            document.tool.set_points(to);
        }
    }
}

impl Command<Document> for EditCommand {
    fn redo(&self, document: &mut Document) {
        match self {
            EditCommand::ReplacePath { after, .. } => document.path = after.clone(),
            EditCommand::Transform {
                transform,
                center,
                active_before,
                active_after,
            } => Self::apply_transform(
                document,
                *transform,
                *center,
                active_before,
                active_after,
            ),
            EditCommand::SetAttribute { after, .. } => after.apply(&mut document.attributes),
        }
    }

    fn undo(&self, document: &mut Document) {
        match self {
            EditCommand::ReplacePath { before, .. } => document.path = before.clone(),
            EditCommand::Transform {
                transform,
                center,
                active_before,
                active_after,
            } => Self::apply_transform(
                document,
                transform.inverse(),
                *center,
                active_after,
                active_before,
            ),
            EditCommand::SetAttribute { before, .. } => before.apply(&mut document.attributes),
        }
    }

    fn description(&self) -> &str {
        match self {
            EditCommand::ReplacePath { description, .. } => *description,
            EditCommand::Transform { transform, .. } => transform.description(),
            EditCommand::SetAttribute { after, .. } => after.description(),
        }
    }
}
