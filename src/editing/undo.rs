// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Linear undo/redo history.
//!
//! Each entry is a command that knows how to apply and reverse itself on a
//! target. The stack keeps a cursor: entries below it are applied, entries
//! above it have been undone and can be redone. Pushing a new command drops
//! everything above the cursor.

/// An undoable edit applied to a target of type `T`
pub trait Command<T> {
    /// Apply (or re-apply) the edit
    fn redo(&self, target: &mut T);

    /// Reverse the edit
    fn undo(&self, target: &mut T);

    /// Short description for Undo/Redo menu labels
    fn description(&self) -> &str;
}

/// Undo/redo stack with a clean marker
#[derive(Debug, Clone)]
pub struct UndoStack<C> {
    entries: Vec<C>,
    /// Number of entries currently applied
    cursor: usize,
    /// Cursor position at the last save; `None` once that state can no
    /// longer be reached
    clean: Option<usize>,
}

impl<C> Default for UndoStack<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> UndoStack<C> {
    /// Create an empty, clean stack
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            clean: Some(0),
        }
    }

    /// Apply `command` to `target` and record it
    pub fn push<T>(&mut self, command: C, target: &mut T)
    where
        C: Command<T>,
    {
        command.redo(target);
        self.record(command);
    }

    /// Record an already applied command
    pub fn record(&mut self, command: C) {
        if self.clean.is_some_and(|clean| clean > self.cursor) {
            self.clean = None;
        }
        self.entries.truncate(self.cursor);
        self.entries.push(command);
        self.cursor = self.entries.len();
    }

    /// Reverse the entry below the cursor; returns false if there is none
    pub fn undo<T>(&mut self, target: &mut T) -> bool
    where
        C: Command<T>,
    {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.entries[self.cursor].undo(target);
        true
    }

    /// Re-apply the entry above the cursor; returns false if there is none
    pub fn redo<T>(&mut self, target: &mut T) -> bool
    where
        C: Command<T>,
    {
        if self.cursor == self.entries.len() {
            return false;
        }
        self.entries[self.cursor].redo(target);
        self.cursor += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// Number of recorded entries, applied or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current cursor position
    pub fn index(&self) -> usize {
        self.cursor
    }

    /// Whether the cursor sits where it was at the last save
    pub fn is_clean(&self) -> bool {
        self.clean == Some(self.cursor)
    }

    /// Mark the current position as saved
    pub fn set_clean(&mut self) {
        self.clean = Some(self.cursor);
    }

    /// Forget all entries and mark the empty stack clean
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
        self.clean = Some(0);
    }

    /// The entry that `undo` would reverse
    pub fn undo_entry(&self) -> Option<&C> {
        self.cursor.checked_sub(1).map(|i| &self.entries[i])
    }

    /// The entry that `redo` would re-apply
    pub fn redo_entry(&self) -> Option<&C> {
        self.entries.get(self.cursor)
    }
}
