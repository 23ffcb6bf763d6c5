// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer gesture state machine
//!
//! The functions here take the current gesture and an event and return the
//! next gesture plus the effects the session should carry out. They never
//! touch the symbol themselves, so gestures can be driven and checked
//! without a display.
//!
//! Positions passed in are already in symbol space. Move and release
//! positions are expected to be snapped by the caller.

use super::hit_test::{DragTarget, NodeHit};
use kurbo::Point;

/// Where a pointer gesture stands
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// Button down over empty space; releasing adds a point
    Pressed { at: Point },
    /// Button down over a point; moves update it until release
    Dragging { target: DragTarget, origin: Point },
}

impl Gesture {
    /// The point being dragged, if any
    pub fn drag_target(&self) -> Option<DragTarget> {
        match self {
            Gesture::Dragging { target, .. } => Some(*target),
            _ => None,
        }
    }
}

/// Something the session must do in response to a gesture event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Update the pointer overlay (guides, rubber band) at this position
    Track(Point),
    /// Feed a point to the active tool
    AddPoint(Point),
    /// Move the dragged point without recording history
    MovePoint { target: DragTarget, to: Point },
    /// The drag is over; record it if the point actually moved
    FinishDrag {
        target: DragTarget,
        origin: Point,
        to: Point,
    },
    /// Put the dragged point back where the drag began
    RestorePoint { target: DragTarget, origin: Point },
    /// Drop the tool's uncommitted points
    CancelTool,
}

/// Result of feeding one event to the gesture machine
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: Gesture,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(next: Gesture) -> Self {
        Self {
            next,
            effects: Vec::new(),
        }
    }

    fn with(next: Gesture, effects: Vec<Effect>) -> Self {
        Self { next, effects }
    }
}

/// Button pressed at `pos`; `hit` is the point under the cursor, if any
pub fn on_press(gesture: Gesture, hit: Option<NodeHit>, pos: Point) -> Transition {
    if gesture != Gesture::Idle {
        tracing::debug!("Ignoring press during {:?}", gesture);
        return Transition::to(gesture);
    }
    match hit {
        Some(hit) => Transition::to(Gesture::Dragging {
            target: hit.target,
            origin: hit.position,
        }),
        None => Transition::to(Gesture::Pressed { at: pos }),
    }
}

/// Pointer moved to `pos`
pub fn on_move(gesture: Gesture, pos: Point) -> Transition {
    match gesture {
        Gesture::Idle => Transition::with(gesture, vec![Effect::Track(pos)]),
        Gesture::Pressed { .. } => {
            Transition::with(Gesture::Pressed { at: pos }, vec![Effect::Track(pos)])
        }
        Gesture::Dragging { target, .. } => Transition::with(
            gesture,
            vec![Effect::MovePoint { target, to: pos }, Effect::Track(pos)],
        ),
    }
}

/// Button released at `pos`
pub fn on_release(gesture: Gesture, pos: Point) -> Transition {
    match gesture {
        Gesture::Idle => {
            tracing::warn!("Release at {:?} without a press", pos);
            Transition::to(Gesture::Idle)
        }
        Gesture::Pressed { .. } => Transition::with(Gesture::Idle, vec![Effect::AddPoint(pos)]),
        Gesture::Dragging { target, origin } => Transition::with(
            Gesture::Idle,
            vec![Effect::FinishDrag {
                target,
                origin,
                to: pos,
            }],
        ),
    }
}

/// Escape pressed
///
/// Aborts a drag in progress; otherwise drops the tool's collected points.
pub fn on_cancel(gesture: Gesture) -> Transition {
    match gesture {
        Gesture::Dragging { target, origin } => Transition::with(
            Gesture::Idle,
            vec![Effect::RestorePoint { target, origin }],
        ),
        Gesture::Pressed { .. } => Transition::to(Gesture::Idle),
        Gesture::Idle => Transition::with(Gesture::Idle, vec![Effect::CancelTool]),
    }
}
