// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer handling for EditSession
//!
//! Positions are in symbol space; hosts convert screen positions with
//! [`ViewPort::to_symbol`](crate::editing::viewport::ViewPort::to_symbol)
//! first. Moves and releases are snapped before they reach the gesture
//! machine; presses are hit-tested against the raw position.

use super::EditSession;
use crate::editing::hit_test::{self, DragTarget};
use crate::editing::mouse::{self, Effect, Gesture, Transition};
use crate::snap::SnapEngine;
use kurbo::Point;

impl EditSession {
    /// Button pressed
    pub fn pointer_down(&mut self, pos: Point) {
        let hit = hit_test::find_node(
            pos,
            self.document.path.points(),
            self.document.tool.points(),
            self.config.snap.node_tolerance,
        );
        if let Some(hit) = hit {
            tracing::debug!("Drag started on {:?}", hit.target);
        }
        let transition = mouse::on_press(self.gesture, hit, pos);
        self.apply_transition(transition);
    }

    /// Pointer moved, with or without a button held
    pub fn pointer_move(&mut self, pos: Point) {
        let snapped = self.snap(pos);
        let transition = mouse::on_move(self.gesture, snapped);
        self.apply_transition(transition);
    }

    /// Button released
    pub fn pointer_up(&mut self, pos: Point) {
        let snapped = self.snap(pos);
        let transition = mouse::on_release(self.gesture, snapped);
        self.apply_transition(transition);
    }

    /// Escape: abort a drag, or drop the tool's collected points
    pub fn cancel(&mut self) {
        let transition = mouse::on_cancel(self.gesture);
        self.apply_transition(transition);
    }

    /// Put a dragged point back before anything else edits the symbol
    pub(super) fn abort_drag(&mut self) {
        if let Gesture::Dragging { .. } = self.gesture {
            let transition = mouse::on_cancel(self.gesture);
            self.apply_transition(transition);
        }
    }

    /// Snap `pos` and remember the guides for the overlay
    fn snap(&mut self, pos: Point) -> Point {
        let sources = self.snap_sources(self.gesture.drag_target());
        let result = SnapEngine::new(&self.config.grid, &self.config.snap).snap(
            pos,
            &sources,
            self.snap_to_grid,
        );
        tracing::trace!("Snap {:?} -> {:?} ({:?})", pos, result.point, result.kind);
        self.guides = result.guides;
        result.point
    }

    /// Points guides are drawn through: committed points then active
    /// points, leaving out the one being dragged
    fn snap_sources(&self, dragged: Option<DragTarget>) -> Vec<Point> {
        let committed = self
            .document
            .path
            .points()
            .iter()
            .enumerate()
            .filter(|(i, _)| dragged != Some(DragTarget::CommittedPoint(*i)))
            .map(|(_, p)| *p);
        let active = self
            .document
            .tool
            .points()
            .iter()
            .enumerate()
            .filter(|(i, _)| dragged != Some(DragTarget::ActivePoint(*i)))
            .map(|(_, p)| *p);
        committed.chain(active).collect()
    }

    fn apply_transition(&mut self, transition: Transition) {
        self.gesture = transition.next;
        for effect in transition.effects {
            match effect {
                Effect::Track(pos) => self.tracking = Some(pos),
                Effect::AddPoint(pos) => {
                    self.tracking = Some(pos);
                    self.add_point(pos);
                }
                Effect::MovePoint { target, to } => self.drag_point_to(target, to),
                Effect::FinishDrag { target, origin, to } => self.finish_drag(target, origin, to),
                Effect::RestorePoint { target, origin } => {
                    tracing::debug!("Drag of {:?} cancelled", target);
                    self.drag_point_to(target, origin);
                }
                Effect::CancelTool => {
                    if self.document.tool.cancel() {
                        self.notify_prompt();
                    }
                }
            }
        }
    }

    /// Move the dragged point without touching history
    fn drag_point_to(&mut self, target: DragTarget, to: Point) {
        match target {
            DragTarget::ActivePoint(i) => {
                self.document.tool.move_point(i, to);
            }
            DragTarget::CommittedPoint(i) => {
                if let Some(moved) = self.document.path.with_point_moved(i, to) {
                    self.document.path = moved;
                }
            }
        }
    }

    /// End a drag; a committed point's move becomes one undoable edit
    fn finish_drag(&mut self, target: DragTarget, origin: Point, to: Point) {
        match target {
            DragTarget::ActivePoint(i) => {
                self.document.tool.move_point(i, to);
            }
            DragTarget::CommittedPoint(i) => {
                // Put the point back so the history entry starts from the
                // pre-drag path.
                self.drag_point_to(target, origin);
                self.move_point(i, to);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::undo_group::Undoable;
    use crate::settings::{EditorConfig, GridConfig, SnapConfig};
    use crate::tools::ToolId;
    use kurbo::Rect;

    fn unit_grid_session(tolerance: f64) -> EditSession {
        EditSession::new(EditorConfig {
            grid: GridConfig {
                elements: 4,
                extent: 4.0,
            },
            snap: SnapConfig {
                grid_tolerance: tolerance,
                guide_tolerance: tolerance,
                ..SnapConfig::default()
            },
            ..EditorConfig::default()
        })
    }

    fn click(session: &mut EditSession, pos: Point) {
        session.pointer_down(pos);
        session.pointer_up(pos);
    }

    #[test]
    fn click_snaps_to_grid() {
        let mut session = unit_grid_session(0.1);
        session.set_snap_to_grid(true);
        click(&mut session, Point::new(0.96, 2.03));
        assert_eq!(session.path().points(), &[Point::new(1.0, 2.0)]);
    }

    #[test]
    fn click_snaps_to_guide_through_points() {
        let mut session = unit_grid_session(0.05);
        click(&mut session, Point::new(0.0, 0.0));
        click(&mut session, Point::new(2.0, 0.0));
        click(&mut session, Point::new(1.0, 0.02));
        let last = session.path().current_point().unwrap();
        assert!(last.distance(Point::new(1.0, 0.0)) < 1e-9);
    }

    #[test]
    fn hover_shows_guides() {
        let mut session = unit_grid_session(0.05);
        click(&mut session, Point::new(1.0, 1.0));
        session.pointer_move(Point::new(1.01, 3.0));
        let frame = session.render();
        assert!(!frame.overlay.guide_lines.is_empty());
        assert!(frame.overlay.pointer.is_some());
    }

    #[test]
    fn dragging_a_committed_point_records_one_move() {
        let mut session = EditSession::default();
        session.add_point(Point::new(0.1, 0.1));
        session.add_point(Point::new(0.9, 0.1));
        let depth = session.history().index();

        session.pointer_down(Point::new(0.9, 0.1));
        assert!(matches!(session.gesture(), Gesture::Dragging { .. }));
        session.pointer_move(Point::new(0.8, 0.5));
        session.pointer_move(Point::new(0.63, 0.81));
        assert_eq!(session.history().index(), depth);
        session.pointer_up(Point::new(0.63, 0.81));

        assert_eq!(session.history().index(), depth + 1);
        assert_eq!(session.path().points()[1], Point::new(0.63, 0.81));
        assert_eq!(session.undo_text().as_deref(), Some("Undo Move Point"));

        session.undo();
        assert_eq!(session.path().points()[1], Point::new(0.9, 0.1));
    }

    #[test]
    fn escape_restores_dragged_point() {
        let mut session = EditSession::default();
        session.add_point(Point::new(0.3, 0.3));
        session.pointer_down(Point::new(0.3, 0.3));
        session.pointer_move(Point::new(0.6, 0.6));
        assert_eq!(session.path().points()[0], Point::new(0.6, 0.6));

        session.cancel();
        assert_eq!(session.path().points()[0], Point::new(0.3, 0.3));
        assert_eq!(session.gesture(), Gesture::Idle);
        assert!(!session.history().can_redo());
        assert_eq!(session.history().index(), 1);
    }

    /// Two committed points, saved, with the second one dragged away
    fn session_mid_drag() -> EditSession {
        let mut session = EditSession::default();
        session.add_point(Point::new(0.1, 0.1));
        session.add_point(Point::new(0.9, 0.1));
        session.mark_saved(1);
        session.pointer_down(Point::new(0.9, 0.1));
        session.pointer_move(Point::new(0.63, 0.81));
        assert_ne!(session.path().points()[1], Point::new(0.9, 0.1));
        session
    }

    #[test]
    fn switching_tools_mid_drag_restores_the_point() {
        let mut session = session_mid_drag();
        session.select_tool(ToolId::CubicTo);
        assert_eq!(session.gesture(), Gesture::Idle);
        session.pointer_up(Point::new(0.63, 0.81));

        assert_eq!(
            session.path().points(),
            &[Point::new(0.1, 0.1), Point::new(0.9, 0.1)]
        );
        assert!(session.is_clean());
        assert!(!session.can_redo());
    }

    #[test]
    fn transform_mid_drag_undoes_to_the_original() {
        let mut session = session_mid_drag();
        let depth = session.history().index();
        session.rotate_left();
        session.pointer_up(Point::new(0.3, 0.3));
        assert_eq!(session.history().index(), depth + 1);

        session.undo();
        let original = [Point::new(0.1, 0.1), Point::new(0.9, 0.1)];
        for (p, q) in session.path().points().iter().zip(original) {
            assert!(p.distance(q) < 1e-9);
        }
        assert!(session.is_clean());
    }

    #[test]
    fn undo_mid_drag_starts_from_the_undragged_path() {
        let mut session = session_mid_drag();
        assert!(session.undo());
        assert_eq!(session.path().points(), &[Point::new(0.1, 0.1)]);
        session.pointer_up(Point::new(0.63, 0.81));
        assert_eq!(session.path().points(), &[Point::new(0.1, 0.1)]);

        assert!(session.redo());
        assert_eq!(
            session.path().points(),
            &[Point::new(0.1, 0.1), Point::new(0.9, 0.1)]
        );
        assert!(session.is_clean());
    }

    #[test]
    fn attribute_change_mid_drag_keeps_the_path() {
        let mut session = session_mid_drag();
        session.set_filled(false);
        assert_eq!(session.path().points()[1], Point::new(0.9, 0.1));
        session.undo();
        assert!(session.is_clean());
    }

    #[test]
    fn escape_drops_active_points() {
        let mut session = EditSession::default();
        session.select_tool(ToolId::CubicTo);
        session.add_point(Point::new(0.5, 0.5));
        session.add_point(Point::new(0.2, 0.6));
        assert_eq!(session.active_points().len(), 1);

        session.cancel();
        assert!(session.active_points().is_empty());
        assert_eq!(session.path().len(), 1);
    }

    #[test]
    fn dragging_an_active_point_leaves_history_alone() {
        let mut session = EditSession::default();
        session.select_tool(ToolId::Rectangle);
        click(&mut session, Point::new(0.2, 0.2));
        assert_eq!(session.active_points().len(), 1);

        session.pointer_down(Point::new(0.2, 0.2));
        session.pointer_move(Point::new(0.3, 0.35));
        session.pointer_up(Point::new(0.3, 0.35));
        assert!(session.active_points()[0].distance(Point::new(0.3, 0.35)) < 1e-9);
        assert!(!session.can_undo());
    }

    #[test]
    fn rubber_band_follows_pointer() {
        let mut session = EditSession::default();
        session.select_tool(ToolId::Ellipse);
        click(&mut session, Point::new(0.2, 0.2));
        session.pointer_move(Point::new(0.63, 0.71));
        let band = session.render().overlay.rubber_band.unwrap();
        assert_eq!(band.x0, 0.2);
        assert_eq!(band.y0, 0.2);
        assert!(band.x1 > 0.6 && band.y1 > 0.7);

        click(&mut session, Point::new(0.63, 0.71));
        assert!(session.render().overlay.rubber_band.is_none());
        assert_eq!(session.path().len(), 5);
    }

    #[test]
    fn rubber_band_starts_at_the_first_corner() {
        let mut session = EditSession::default();
        session.pointer_move(Point::new(0.9, 0.9));
        session.select_tool(ToolId::Rectangle);
        assert!(session.render().overlay.pointer.is_none());

        click(&mut session, Point::new(0.2, 0.2));
        let band = session.render().overlay.rubber_band.unwrap();
        assert_eq!(band, Rect::new(0.2, 0.2, 0.2, 0.2));
    }

    #[test]
    fn release_without_press_does_nothing() {
        let mut session = EditSession::default();
        session.pointer_up(Point::new(0.5, 0.5));
        assert!(session.path().is_empty());
    }
}
