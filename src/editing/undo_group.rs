// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Undo routing between the symbol editor and the symbol library.
//!
//! Each side owns its history. The group only remembers which side has
//! focus and forwards Undo/Redo there.

/// Anything with its own undo history
pub trait Undoable {
    /// Reverse the latest edit; returns false if there was nothing to undo
    fn undo(&mut self) -> bool;

    /// Re-apply the next edit; returns false if there was nothing to redo
    fn redo(&mut self) -> bool;

    /// Description of the edit `undo` would reverse
    fn undo_text(&self) -> Option<String>;

    /// Description of the edit `redo` would re-apply
    fn redo_text(&self) -> Option<String>;

    /// Whether the history sits at its last saved position
    fn is_clean(&self) -> bool;

    fn can_undo(&self) -> bool {
        self.undo_text().is_some()
    }

    fn can_redo(&self) -> bool {
        self.redo_text().is_some()
    }
}

/// Which history receives Undo/Redo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveStack {
    #[default]
    Editor,
    Library,
}

/// Two independent histories behind one Undo/Redo facade
#[derive(Debug, Clone)]
pub struct UndoGroup<E, L> {
    editor: E,
    library: L,
    active: ActiveStack,
}

impl<E: Undoable, L: Undoable> UndoGroup<E, L> {
    /// Group two histories; the editor starts active
    pub fn new(editor: E, library: L) -> Self {
        Self {
            editor,
            library,
            active: ActiveStack::Editor,
        }
    }

    pub fn active(&self) -> ActiveStack {
        self.active
    }

    /// Route subsequent Undo/Redo to `stack`
    pub fn set_active(&mut self, stack: ActiveStack) {
        if self.active != stack {
            tracing::debug!("Undo focus moved to {:?}", stack);
        }
        self.active = stack;
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    pub fn library(&self) -> &L {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut L {
        &mut self.library
    }

    pub fn into_parts(self) -> (E, L) {
        (self.editor, self.library)
    }

    fn active_stack(&self) -> &dyn Undoable {
        match self.active {
            ActiveStack::Editor => &self.editor,
            ActiveStack::Library => &self.library,
        }
    }

    fn active_stack_mut(&mut self) -> &mut dyn Undoable {
        match self.active {
            ActiveStack::Editor => &mut self.editor,
            ActiveStack::Library => &mut self.library,
        }
    }

    pub fn undo(&mut self) -> bool {
        self.active_stack_mut().undo()
    }

    pub fn redo(&mut self) -> bool {
        self.active_stack_mut().redo()
    }

    pub fn can_undo(&self) -> bool {
        self.active_stack().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.active_stack().can_redo()
    }

    /// Menu label for Undo on the active history
    pub fn undo_text(&self) -> Option<String> {
        self.active_stack().undo_text()
    }

    /// Menu label for Redo on the active history
    pub fn redo_text(&self) -> Option<String> {
        self.active_stack().redo_text()
    }

    /// Clean flag of one history
    pub fn is_clean(&self, stack: ActiveStack) -> bool {
        match stack {
            ActiveStack::Editor => self.editor.is_clean(),
            ActiveStack::Library => self.library.is_clean(),
        }
    }

    /// Whether both histories are at their saved positions
    pub fn all_clean(&self) -> bool {
        self.editor.is_clean() && self.library.is_clean()
    }
}
