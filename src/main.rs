// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Symbol Editor: replay an editing script headlessly
//!
//! Usage: `symbol-editor <script.json> [config.toml]`
//!
//! The script is a JSON object with a `steps` array. Each step is either a
//! UI command (`{"command": "select_tool", "tool": "cubic_to"}`), a pointer
//! event in symbol space (`{"pointer": "down", "x": 0.25, "y": 0.5}`), a
//! save (`{"save": true}`) or a load from the in-memory library
//! (`{"load": 1}`). The final symbol and library are printed as JSON.

use anyhow::{Context, Result, bail};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use symbol_editor::model::MemoryStore;
use symbol_editor::{
    EditSession, EditorConfig, Notification, Symbol, SymbolIndex, SymbolStore, UiCommand,
    Undoable,
};

#[derive(Debug, Deserialize)]
struct Script {
    steps: Vec<Step>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum PointerAction {
    Down,
    Move,
    Up,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Step {
    Command(UiCommand),
    Pointer {
        pointer: PointerAction,
        x: f64,
        y: f64,
    },
    Save {
        save: bool,
    },
    Load {
        load: SymbolIndex,
    },
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    index: SymbolIndex,
    clean: bool,
    symbol: Symbol,
    library: BTreeMap<SymbolIndex, &'a Symbol>,
}

fn main() -> Result<()> {
    symbol_editor::init_tracing();

    let (script_path, config_path) = parse_args()?;
    let config = match config_path {
        Some(path) => EditorConfig::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EditorConfig::default(),
    };

    let text = std::fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let script: Script = serde_json::from_str(&text)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;
    tracing::info!(
        "Replaying {} steps from {}",
        script.steps.len(),
        script_path.display()
    );

    let mut session = EditSession::new(config);
    let mut store = MemoryStore::new();
    for (number, step) in script.steps.into_iter().enumerate() {
        run_step(&mut session, &mut store, step).with_context(|| format!("Step {number}"))?;
        report_notifications(&mut session);
    }

    let (index, symbol) = session.symbol();
    let report = Report {
        index,
        clean: session.is_clean(),
        symbol,
        library: store.iter().collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Read the script path and optional config path from the command line
fn parse_args() -> Result<(PathBuf, Option<PathBuf>)> {
    let mut args = std::env::args_os().skip(1);
    let Some(script) = args.next() else {
        bail!("Usage: symbol-editor <script.json> [config.toml]");
    };
    Ok((PathBuf::from(script), args.next().map(PathBuf::from)))
}

fn run_step(session: &mut EditSession, store: &mut MemoryStore, step: Step) -> Result<()> {
    match step {
        Step::Command(command) => session.dispatch(command),
        Step::Pointer { pointer, x, y } => {
            let pos = Point::new(x, y);
            match pointer {
                PointerAction::Down => session.pointer_down(pos),
                PointerAction::Move => session.pointer_move(pos),
                PointerAction::Up => session.pointer_up(pos),
            }
        }
        Step::Save { save: false } => {}
        Step::Save { save: true } => {
            let (index, symbol) = session.symbol();
            let saved = store.save(index, symbol);
            session.mark_saved(saved);
        }
        Step::Load { load } => {
            let Some(symbol) = store.load(load) else {
                bail!("No symbol saved at index {load}");
            };
            session.set_symbol((load, symbol));
        }
    }
    Ok(())
}

fn report_notifications(session: &mut EditSession) {
    for notification in session.take_notifications() {
        match notification {
            Notification::Message(text) => tracing::info!("{}", text),
            Notification::MinLineWidth(true) => tracing::info!("Line width at minimum"),
            Notification::MaxLineWidth(true) => tracing::info!("Line width at maximum"),
            Notification::MinLineWidth(false) | Notification::MaxLineWidth(false) => {}
        }
    }
}
