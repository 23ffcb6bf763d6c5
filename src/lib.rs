// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Symbol Editor: a path editing engine for small grid-based vector symbols
//!
//! The engine keeps a symbol's path as parallel element and point lists,
//! turns pointer input into path segments through a set of tools, snaps
//! positions to the grid and to guides through existing points, and records
//! every change in an undo history. Drawing is left to the host: it asks
//! [`EditSession::render`] for a `kurbo::BezPath`, a stroke/fill style and
//! overlay geometry.

pub mod editing;
pub mod geometry;
pub mod model;
pub mod path;
pub mod settings;
pub mod snap;
pub mod tools;

pub use editing::{EditSession, Notification, RenderFrame, Transform, UiCommand, Undoable};
pub use model::{Attributes, Symbol, SymbolIndex, SymbolStore};
pub use path::{Element, SymbolPath};
pub use settings::{ConfigError, EditorConfig};
pub use tools::ToolId;

use tracing_subscriber::EnvFilter;

/// Install the logging subscriber
///
/// Filtering is controlled by `RUST_LOG`; without it only this crate's
/// `info` events and above are shown.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("symbol_editor=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
