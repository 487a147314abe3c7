use crate::action::{ActionKind, CellAction, Coordinate};
use crate::canvas::Canvas;
use crate::undo::ActionStack;

/// Outcome of an undo or redo request.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Replay {
    Applied(CellAction),
    Empty,
}

/// Owns the undo and redo stacks. Every fresh edit clears redo, so the redo
/// stack only ever holds the actions most recently undone from the current
/// undo stack.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HistoryController {
    undo: ActionStack,
    redo: ActionStack,
}

impl HistoryController {
    pub fn new() -> HistoryController {
        HistoryController {
            undo: ActionStack::new(),
            redo: ActionStack::new(),
        }
    }

    pub fn record<C: Canvas>(&mut self, canvas: &mut C, coordinate: Coordinate, kind: ActionKind) {
        canvas.set_cell(coordinate, kind.visual());
        self.redo.clear();
        self.undo.push(CellAction::new(coordinate, kind));
    }

    /// Reverses the newest action and parks it, unchanged, on the redo stack.
    pub fn undo<C: Canvas>(&mut self, canvas: &mut C) -> Replay {
        match self.undo.pop() {
            Some(action) => {
                canvas.set_cell(action.coordinate(), action.kind().visual().invert());
                self.redo.push(action);
                Replay::Applied(action)
            }
            None => Replay::Empty,
        }
    }

    pub fn redo<C: Canvas>(&mut self, canvas: &mut C) -> Replay {
        match self.redo.pop() {
            Some(action) => {
                canvas.set_cell(action.coordinate(), action.kind().visual());
                self.undo.push(action);
                Replay::Applied(action)
            }
            None => Replay::Empty,
        }
    }

    pub fn undo_stack(&self) -> &ActionStack {
        &self.undo
    }

    pub fn redo_stack(&self) -> &ActionStack {
        &self.redo
    }
}
