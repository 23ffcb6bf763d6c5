// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Commands sent by menus, toolbars and shortcuts

use super::transform::Transform;
use crate::model::{CapStyle, FillRule, JoinStyle};
use crate::tools::ToolId;
use serde::{Deserialize, Serialize};

/// A UI request for the edit session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum UiCommand {
    SelectTool { tool: ToolId },
    EnableSnap { enabled: bool },
    SelectFilled { filled: bool },
    SelectFillRule { rule: FillRule },
    SelectCapStyle { style: CapStyle },
    SelectJoinStyle { style: JoinStyle },
    IncreaseLineWidth,
    DecreaseLineWidth,
    Transform { transform: Transform },
    RemoveLast,
    /// Escape: abort a drag or drop collected points
    Cancel,
    Undo,
    Redo,
    /// Start a fresh symbol, forgetting history
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_json() {
        let cmd: UiCommand =
            serde_json::from_str(r#"{"command": "select_tool", "tool": "cubic_to"}"#).unwrap();
        assert_eq!(cmd, UiCommand::SelectTool { tool: ToolId::CubicTo });

        let cmd: UiCommand =
            serde_json::from_str(r#"{"command": "transform", "transform": "rotate_left"}"#)
                .unwrap();
        assert_eq!(
            cmd,
            UiCommand::Transform {
                transform: Transform::RotateLeft
            }
        );

        let cmd: UiCommand = serde_json::from_str(r#"{"command": "undo"}"#).unwrap();
        assert_eq!(cmd, UiCommand::Undo);
    }
}
