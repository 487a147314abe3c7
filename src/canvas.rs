use crate::action::Coordinate;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CellState {
    Filled,
    Empty,
}

impl CellState {
    pub fn invert(self) -> CellState {
        match self {
            CellState::Filled => CellState::Empty,
            CellState::Empty => CellState::Filled,
        }
    }
}

/// Surface the history replays onto.
pub trait Canvas {
    fn set_cell(&mut self, coordinate: Coordinate, state: CellState);
}

#[derive(Clone, Eq, PartialEq)]
pub struct Grid {
    pub columns: u16,
    pub rows: u16,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn new(columns: u16, rows: u16) -> Grid {
        Grid {
            columns,
            rows,
            cells: vec![CellState::Empty; columns as usize * rows as usize],
        }
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.column < self.columns && coordinate.row < self.rows
    }

    fn index(&self, coordinate: Coordinate) -> Option<usize> {
        if self.contains(coordinate) {
            Some(coordinate.row as usize * self.columns as usize + coordinate.column as usize)
        } else {
            None
        }
    }

    pub fn get(&self, coordinate: Coordinate) -> CellState {
        match self.index(coordinate) {
            Some(i) => self.cells[i],
            None => CellState::Empty,
        }
    }

    pub fn filled(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == CellState::Filled)
            .count()
    }
}

impl Canvas for Grid {
    fn set_cell(&mut self, coordinate: Coordinate, state: CellState) {
        if let Some(i) = self.index(coordinate) {
            self.cells[i] = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let grid = Grid::new(3, 2);
        assert_eq!(grid.filled(), 0);
        assert_eq!(grid.get(Coordinate::new(2, 1)), CellState::Empty);
    }

    #[test]
    fn set_and_clear_cell() {
        let mut grid = Grid::new(3, 2);
        grid.set_cell(Coordinate::new(2, 1), CellState::Filled);
        assert_eq!(grid.get(Coordinate::new(2, 1)), CellState::Filled);
        assert_eq!(grid.get(Coordinate::new(1, 2)), CellState::Empty);
        assert_eq!(grid.filled(), 1);
        grid.set_cell(Coordinate::new(2, 1), CellState::Empty);
        assert_eq!(grid.filled(), 0);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut grid = Grid::new(3, 2);
        grid.set_cell(Coordinate::new(3, 0), CellState::Filled);
        grid.set_cell(Coordinate::new(0, 2), CellState::Filled);
        assert_eq!(grid.filled(), 0);
        assert!(!grid.contains(Coordinate::new(3, 0)));
        assert!(grid.contains(Coordinate::new(2, 1)));
    }
}
