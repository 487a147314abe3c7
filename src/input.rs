use crate::action::{ActionKind, Coordinate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Record(Coordinate, ActionKind),
    Undo,
    Redo,
}

/// Where the grid sits on screen and how many terminal cells one grid
/// cell covers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CellLayout {
    pub x: u16,
    pub y: u16,
    pub cell_width: u16,
    pub cell_height: u16,
    pub columns: u16,
    pub rows: u16,
    /// On-screen extent in terminal cells; the grid may be cut off.
    pub width: u16,
    pub height: u16,
}

impl CellLayout {
    pub fn to_cell(&self, x: u16, y: u16) -> Option<Coordinate> {
        if x < self.x || y < self.y || self.cell_width == 0 || self.cell_height == 0 {
            return None;
        }
        if x - self.x >= self.width || y - self.y >= self.height {
            return None;
        }
        let column = (x - self.x) / self.cell_width;
        let row = (y - self.y) / self.cell_height;
        if column < self.columns && row < self.rows {
            Some(Coordinate::new(column, row))
        } else {
            None
        }
    }
}

pub fn translate_mouse(layout: &CellLayout, event: MouseEvent) -> Option<Command> {
    let kind = match event.kind {
        MouseEventKind::Down(MouseButton::Left) => ActionKind::Paint,
        MouseEventKind::Down(MouseButton::Right) => ActionKind::Erase,
        _ => return None,
    };
    layout
        .to_cell(event.column, event.row)
        .map(|coordinate| Command::Record(coordinate, kind))
}

pub fn translate_key(key: KeyEvent) -> Option<Command> {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'z' => Some(Command::Undo),
            'r' | 'y' => Some(Command::Redo),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> CellLayout {
        CellLayout {
            x: 1,
            y: 1,
            cell_width: 4,
            cell_height: 2,
            columns: 15,
            rows: 10,
            width: 60,
            height: 20,
        }
    }

    fn click(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn to_cell_divides_by_cell_size() {
        let l = layout();
        assert_eq!(l.to_cell(1, 1), Some(Coordinate::new(0, 0)));
        assert_eq!(l.to_cell(4, 2), Some(Coordinate::new(0, 0)));
        assert_eq!(l.to_cell(5, 3), Some(Coordinate::new(1, 1)));
        assert_eq!(l.to_cell(60, 20), Some(Coordinate::new(14, 9)));
    }

    #[test]
    fn to_cell_rejects_outside() {
        let l = layout();
        assert_eq!(l.to_cell(0, 5), None);
        assert_eq!(l.to_cell(5, 0), None);
        assert_eq!(l.to_cell(61, 5), None);
        assert_eq!(l.to_cell(5, 21), None);
    }

    #[test]
    fn to_cell_rejects_hidden_part() {
        let l = CellLayout {
            width: 10,
            height: 5,
            ..layout()
        };
        assert_eq!(l.to_cell(10, 5), Some(Coordinate::new(2, 2)));
        assert_eq!(l.to_cell(11, 5), None);
        assert_eq!(l.to_cell(10, 6), None);
    }

    #[test]
    fn mouse_buttons_map_to_kinds() {
        let l = layout();
        assert_eq!(
            translate_mouse(&l, click(MouseEventKind::Down(MouseButton::Left), 9, 7)),
            Some(Command::Record(Coordinate::new(2, 3), ActionKind::Paint))
        );
        assert_eq!(
            translate_mouse(&l, click(MouseEventKind::Down(MouseButton::Right), 9, 7)),
            Some(Command::Record(Coordinate::new(2, 3), ActionKind::Erase))
        );
        assert_eq!(
            translate_mouse(&l, click(MouseEventKind::Down(MouseButton::Middle), 9, 7)),
            None
        );
        assert_eq!(
            translate_mouse(&l, click(MouseEventKind::Up(MouseButton::Left), 9, 7)),
            None
        );
        assert_eq!(
            translate_mouse(&l, click(MouseEventKind::Down(MouseButton::Left), 0, 0)),
            None
        );
    }

    #[test]
    fn control_chords() {
        let ctrl = KeyModifiers::CONTROL;
        assert_eq!(
            translate_key(KeyEvent::new(KeyCode::Char('z'), ctrl)),
            Some(Command::Undo)
        );
        assert_eq!(
            translate_key(KeyEvent::new(KeyCode::Char('r'), ctrl)),
            Some(Command::Redo)
        );
        assert_eq!(
            translate_key(KeyEvent::new(KeyCode::Char('y'), ctrl)),
            Some(Command::Redo)
        );
        assert_eq!(
            translate_key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(translate_key(KeyEvent::new(KeyCode::Char('q'), ctrl)), None);
    }
}
