use crate::canvas::CellState;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Coordinate {
    pub column: u16,
    pub row: u16,
}

impl Coordinate {
    pub fn new(column: u16, row: u16) -> Coordinate {
        Coordinate { column, row }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActionKind {
    Paint,
    Erase,
}

impl ActionKind {
    /// Visual state a cell ends up in when this kind is applied.
    pub fn visual(self) -> CellState {
        match self {
            ActionKind::Paint => CellState::Filled,
            ActionKind::Erase => CellState::Empty,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ActionKind::Paint => "paint",
            ActionKind::Erase => "erase",
        }
    }
}

/// What a primary edit did to one cell. The kind always records the
/// original intent; undo and redo derive the visual direction from it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CellAction {
    coordinate: Coordinate,
    kind: ActionKind,
}

impl CellAction {
    pub fn new(coordinate: Coordinate, kind: ActionKind) -> CellAction {
        CellAction { coordinate, kind }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_to_visual_state() {
        assert_eq!(ActionKind::Paint.visual(), CellState::Filled);
        assert_eq!(ActionKind::Erase.visual(), CellState::Empty);
        assert_eq!(ActionKind::Paint.visual().invert(), CellState::Empty);
        assert_eq!(ActionKind::Erase.visual().invert(), CellState::Filled);
    }

    #[test]
    fn action_keeps_what_it_was_built_with() {
        let action = CellAction::new(Coordinate::new(2, 3), ActionKind::Erase);
        assert_eq!(action.coordinate(), Coordinate::new(2, 3));
        assert_eq!(action.kind(), ActionKind::Erase);
    }
}
