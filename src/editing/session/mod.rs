// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - manages editing state for a single symbol

mod path_editing;
mod pointer;

use super::command::UiCommand;
use super::edit_types::{AttributeValue, Document, EditCommand};
use super::mouse::Gesture;
use super::undo::{Command, UndoStack};
use super::undo_group::Undoable;
use crate::model::{Attributes, PathStyle, Symbol, SymbolIndex, UNSAVED};
use crate::path::SymbolPath;
use crate::settings::EditorConfig;
use crate::snap::GuideState;
use crate::tools::{ActiveTool, ToolId};
use kurbo::{BezPath, Circle, Line, Point, Rect};

/// Something the host should tell the user
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// Status bar text
    Message(String),
    /// Whether the line width sits at its minimum
    MinLineWidth(bool),
    /// Whether the line width sits at its maximum
    MaxLineWidth(bool),
}

/// Feedback geometry drawn over the symbol, in symbol space
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    /// Guide lines clipped to the grid square
    pub guide_lines: Vec<Line>,
    pub guide_circles: Vec<Circle>,
    /// Snap candidates derived from the guides
    pub snap_points: Vec<Point>,
    /// Outline of a rectangle or ellipse being placed
    pub rubber_band: Option<Rect>,
    /// Committed points, for drawing handles
    pub nodes: Vec<Point>,
    /// Points collected by the current tool
    pub active_nodes: Vec<Point>,
    /// Last (snapped) pointer position
    pub pointer: Option<Point>,
}

/// Everything a host surface needs to paint one frame
#[derive(Debug, Clone)]
pub struct RenderFrame {
    pub path: BezPath,
    pub style: PathStyle,
    pub overlay: Overlay,
}

/// Editing session for one symbol
///
/// All mutations of the committed path and attributes go through the undo
/// history. Pointer state, guides and notifications are transient. Editing
/// operations abort a drag in progress first, so the dragged point never
/// ends up in a history entry it did not start from.
///
/// Notifications queue up until the host drains them with
/// [`take_notifications`](Self::take_notifications), normally once per
/// event.
#[derive(Debug, Clone)]
pub struct EditSession {
    config: EditorConfig,

    /// Library slot of the symbol being edited
    index: SymbolIndex,

    /// Path, attributes and active tool points
    document: Document,

    history: UndoStack<EditCommand>,

    /// Whether pointer positions snap to grid intersections
    snap_to_grid: bool,

    gesture: Gesture,

    /// Last snapped pointer position
    tracking: Option<Point>,

    /// Guides found at the last pointer position
    guides: GuideState,

    notifications: Vec<Notification>,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditSession {
    /// Start a session on a new, empty symbol
    pub fn new(config: EditorConfig) -> Self {
        let attributes = Attributes::with_line_width(config.line_width.default);
        Self {
            config,
            index: UNSAVED,
            document: Document {
                attributes,
                ..Document::default()
            },
            history: UndoStack::new(),
            snap_to_grid: false,
            gesture: Gesture::Idle,
            tracking: None,
            guides: GuideState::default(),
            notifications: Vec::new(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn index(&self) -> SymbolIndex {
        self.index
    }

    pub fn path(&self) -> &SymbolPath {
        &self.document.path
    }

    pub fn attributes(&self) -> &Attributes {
        &self.document.attributes
    }

    pub fn tool(&self) -> ToolId {
        self.document.tool.id()
    }

    /// Points collected by the current tool and not yet committed
    pub fn active_points(&self) -> &[Point] {
        self.document.tool.points()
    }

    pub fn snap_to_grid(&self) -> bool {
        self.snap_to_grid
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn history(&self) -> &UndoStack<EditCommand> {
        &self.history
    }

    /// The symbol being edited, for saving
    pub fn symbol(&self) -> (SymbolIndex, Symbol) {
        (
            self.index,
            Symbol::new(self.document.path.construct(), self.document.attributes),
        )
    }

    /// Replace the symbol being edited, forgetting history
    pub fn set_symbol(&mut self, (index, symbol): (SymbolIndex, Symbol)) {
        let tool = self.document.tool.id();
        self.document = Document {
            path: SymbolPath::deconstruct(&symbol.path),
            attributes: symbol.attributes,
            tool: ActiveTool::new(tool),
        };
        self.index = index;
        self.reset_transient_state();
        tracing::info!(
            "Loaded symbol {} with {} elements",
            index,
            self.document.path.len()
        );
        self.notify_line_width_bounds();
    }

    /// Record that the symbol was saved under `index`
    pub fn mark_saved(&mut self, index: SymbolIndex) {
        self.index = index;
        self.history.set_clean();
        tracing::info!("Symbol saved as {}", index);
    }

    /// Start a fresh symbol
    ///
    /// This is not an edit and cannot be undone; the history is dropped.
    pub fn clear(&mut self) {
        let tool = self.document.tool.id();
        self.document = Document {
            path: SymbolPath::new(),
            attributes: Attributes::with_line_width(self.config.line_width.default),
            tool: ActiveTool::new(tool),
        };
        self.index = UNSAVED;
        self.reset_transient_state();
        tracing::info!("Symbol cleared");
        self.notify_prompt();
    }

    fn reset_transient_state(&mut self) {
        self.history.clear();
        self.gesture = Gesture::Idle;
        self.tracking = None;
        self.guides = GuideState::default();
    }

    /// Switch tools, dropping any collected points
    pub fn select_tool(&mut self, tool: ToolId) {
        if self.document.tool.id() != tool {
            tracing::debug!("Tool changed to {}", tool.name());
        }
        self.abort_drag();
        self.document.tool.select(tool);
        self.gesture = Gesture::Idle;
        self.tracking = None;
        self.notify_prompt();
    }

    pub fn set_snap_to_grid(&mut self, enabled: bool) {
        self.snap_to_grid = enabled;
    }

    /// Handle a menu, toolbar or shortcut command
    pub fn dispatch(&mut self, command: UiCommand) {
        tracing::debug!("Dispatch {:?}", command);
        match command {
            UiCommand::SelectTool { tool } => self.select_tool(tool),
            UiCommand::EnableSnap { enabled } => self.set_snap_to_grid(enabled),
            UiCommand::SelectFilled { filled } => self.set_filled(filled),
            UiCommand::SelectFillRule { rule } => self.set_fill_rule(rule),
            UiCommand::SelectCapStyle { style } => self.set_cap_style(style),
            UiCommand::SelectJoinStyle { style } => self.set_join_style(style),
            UiCommand::IncreaseLineWidth => self.increase_line_width(),
            UiCommand::DecreaseLineWidth => self.decrease_line_width(),
            UiCommand::Transform { transform } => self.apply_transform(transform),
            UiCommand::RemoveLast => self.remove_last(),
            UiCommand::Cancel => self.cancel(),
            UiCommand::Undo => {
                self.undo();
            }
            UiCommand::Redo => {
                self.redo();
            }
            UiCommand::Clear => self.clear(),
        }
    }

    /// Drain pending notifications, oldest first
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Tell the user what the current tool wants next
    fn notify_prompt(&mut self) {
        let tool = &self.document.tool;
        let prompt = tool
            .id()
            .prompt(tool.points().len(), self.document.path.is_empty());
        self.notify(Notification::Message(prompt));
    }

    /// Paint data for the current state
    pub fn render(&self) -> RenderFrame {
        let bounds = self.config.grid.bounds();
        let tool = &self.document.tool;
        let rubber_band = match (tool.id(), tool.points(), self.tracking) {
            (ToolId::Rectangle | ToolId::Ellipse, [corner], Some(pointer)) => {
                Some(Rect::from_points(*corner, pointer))
            }
            _ => None,
        };

        RenderFrame {
            path: self.document.path.construct(),
            style: self.document.attributes.style(),
            overlay: Overlay {
                guide_lines: self.guides.clipped_lines(bounds),
                guide_circles: self.guides.circles(),
                snap_points: self.guides.snap_points.clone(),
                rubber_band,
                nodes: self.document.path.points().to_vec(),
                active_nodes: tool.points().to_vec(),
                pointer: self.tracking,
            },
        }
    }

    /// Whether the entry `undo` or `redo` would touch changes the line width
    fn touches_line_width(command: Option<&EditCommand>) -> bool {
        matches!(
            command,
            Some(EditCommand::SetAttribute {
                after: AttributeValue::LineWidth(_),
                ..
            })
        )
    }
}

impl Undoable for EditSession {
    fn undo(&mut self) -> bool {
        self.abort_drag();
        let touches_width = Self::touches_line_width(self.history.undo_entry());
        if !self.history.undo(&mut self.document) {
            return false;
        }
        self.gesture = Gesture::Idle;
        if touches_width {
            self.notify_line_width_bounds();
        }
        true
    }

    fn redo(&mut self) -> bool {
        self.abort_drag();
        let touches_width = Self::touches_line_width(self.history.redo_entry());
        if !self.history.redo(&mut self.document) {
            return false;
        }
        self.gesture = Gesture::Idle;
        if touches_width {
            self.notify_line_width_bounds();
        }
        true
    }

    fn undo_text(&self) -> Option<String> {
        self.history
            .undo_entry()
            .map(|command| format!("Undo {}", command.description()))
    }

    fn redo_text(&self) -> Option<String> {
        self.history
            .redo_entry()
            .map(|command| format!("Redo {}", command.description()))
    }

    fn is_clean(&self) -> bool {
        self.history.is_clean()
    }

    fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::transform::Transform;
    use crate::model::{FillRule, MemoryStore, SymbolStore};
    use crate::path::Element;

    fn session_with_line() -> EditSession {
        let mut session = EditSession::default();
        session.select_tool(ToolId::LineTo);
        session.add_point(Point::new(0.25, 0.25));
        session.add_point(Point::new(0.75, 0.25));
        session
    }

    #[test]
    fn new_session_is_empty_and_clean() {
        let session = EditSession::default();
        assert!(session.path().is_empty());
        assert_eq!(session.index(), UNSAVED);
        assert!(session.is_clean());
        assert!(session.undo_text().is_none());
        assert!(session.attributes().filled);
    }

    #[test]
    fn symbol_round_trips_through_store() {
        let mut session = session_with_line();
        session.set_fill_rule(FillRule::EvenOdd);

        let mut store = MemoryStore::new();
        let (index, symbol) = session.symbol();
        let saved = store.save(index, symbol);
        session.mark_saved(saved);
        assert!(session.is_clean());
        assert_eq!(session.index(), 1);

        let mut other = EditSession::default();
        other.set_symbol((saved, store.load(saved).unwrap()));
        assert_eq!(other.path(), session.path());
        assert_eq!(other.attributes().fill_rule, FillRule::EvenOdd);
        assert!(other.is_clean());
        assert!(!other.can_undo());
    }

    #[test]
    fn edits_after_save_are_dirty_until_undone() {
        let mut session = session_with_line();
        session.mark_saved(3);
        session.rotate_left();
        assert!(!session.is_clean());
        session.undo();
        assert!(session.is_clean());
    }

    #[test]
    fn clear_resets_everything() {
        let mut session = session_with_line();
        session.set_filled(false);
        session.clear();
        assert!(session.path().is_empty());
        assert!(session.attributes().filled);
        assert!(!session.can_undo());
        assert!(session.is_clean());
        assert_eq!(session.index(), UNSAVED);
    }

    #[test]
    fn undo_text_names_the_edit() {
        let mut session = session_with_line();
        assert_eq!(session.undo_text().as_deref(), Some("Undo Line To"));
        session.apply_transform(Transform::FlipVertical);
        assert_eq!(session.undo_text().as_deref(), Some("Undo Flip Vertical"));
        session.undo();
        assert_eq!(session.redo_text().as_deref(), Some("Redo Flip Vertical"));
    }

    #[test]
    fn dispatch_routes_commands() {
        let mut session = EditSession::default();
        session.dispatch(UiCommand::SelectTool {
            tool: ToolId::Rectangle,
        });
        session.dispatch(UiCommand::EnableSnap { enabled: true });
        assert_eq!(session.tool(), ToolId::Rectangle);
        assert!(session.snap_to_grid());

        session.add_point(Point::new(0.25, 0.25));
        session.add_point(Point::new(0.75, 0.5));
        assert_eq!(session.path().len(), 5);

        session.dispatch(UiCommand::RemoveLast);
        assert_eq!(session.path().len(), 4);
        session.dispatch(UiCommand::Undo);
        assert_eq!(session.path().len(), 5);
        session.dispatch(UiCommand::Redo);
        assert_eq!(session.path().len(), 4);
        assert_eq!(session.path().elements()[0], Element::MoveTo);
    }

    #[test]
    fn render_reports_path_and_nodes() {
        let session = session_with_line();
        let frame = session.render();
        assert_eq!(frame.path.elements().len(), 2);
        assert_eq!(frame.overlay.nodes.len(), 2);
        assert!(frame.overlay.active_nodes.is_empty());
        assert!(frame.overlay.rubber_band.is_none());
        assert_eq!(frame.style.stroke.width, session.attributes().line_width);
    }

    #[test]
    fn notifications_queue_until_taken() {
        let mut session = EditSession::default();
        session.select_tool(ToolId::LineTo);
        session.increase_line_width();
        assert_eq!(
            session.take_notifications(),
            vec![
                Notification::Message("Line To: select the start point".to_string()),
                Notification::MinLineWidth(false),
                Notification::MaxLineWidth(false),
            ]
        );
        assert!(session.take_notifications().is_empty());
    }

    #[test]
    fn selecting_a_tool_prompts() {
        let mut session = EditSession::default();
        session.select_tool(ToolId::CubicTo);
        assert_eq!(
            session.take_notifications(),
            vec![Notification::Message(
                "Cubic To: select the start point".to_string()
            )]
        );
        assert!(session.take_notifications().is_empty());
    }
}
