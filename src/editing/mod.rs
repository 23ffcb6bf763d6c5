// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod command;
pub mod edit_types;
pub mod mouse;
pub mod session;
pub mod transform;
pub mod undo;
pub mod undo_group;
pub mod viewport;

pub use command::UiCommand;
pub use edit_types::{AttributeValue, Document, EditCommand};
pub use hit_test::DragTarget;
pub use mouse::{Effect, Gesture};
pub use session::{EditSession, Notification, Overlay, RenderFrame};
pub use transform::Transform;
pub use undo::{Command, UndoStack};
pub use undo_group::{ActiveStack, UndoGroup, Undoable};
pub use viewport::ViewPort;
