use crate::action::{ActionKind, Coordinate};
use crate::canvas::{Canvas, Grid};
use crate::history::{HistoryController, Replay};
use crate::input::{translate_key, translate_mouse, CellLayout, Command};
use crate::log::Log;
use crate::theme::Theme;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use tui::text::{Span, Spans};

use tui_textarea::TextArea;

/// Grid origin on screen: the title line sits above it.
const GRID_X: u16 = 0;
const GRID_Y: u16 = 1;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub columns: u16,
    pub rows: u16,
    pub cell_width: u16,
    pub cell_height: u16,
    pub history: bool,
    pub grid_lines: bool,
}

impl Config {
    pub fn default() -> Config {
        Config {
            columns: 15,
            rows: 10,
            cell_width: 4,
            cell_height: 2,
            history: true,
            grid_lines: true,
        }
    }
}

pub struct App<'a> {
    pub title: &'a str,
    pub should_quit: bool,
    pub enter_prompt: bool,
    pub show_log: bool,
    pub show_help: bool,
    pub show_grid: bool,
    pub grid: Grid,
    pub history: Option<HistoryController>,
    pub layout: CellLayout,
    pub hovered: Option<Coordinate>,
    pub textarea: TextArea<'a>,
    pub log: Log<'a>,
    pub theme: Theme,
}

impl<'a> App<'a> {
    pub fn new(title: &'a str, config: Config) -> App<'a> {
        App {
            title,
            should_quit: false,
            enter_prompt: false,
            show_log: false,
            show_help: false,
            show_grid: config.grid_lines,
            grid: Grid::new(config.columns, config.rows),
            history: if config.history {
                Some(HistoryController::new())
            } else {
                None
            },
            layout: CellLayout {
                x: GRID_X,
                y: GRID_Y,
                cell_width: config.cell_width,
                cell_height: config.cell_height,
                columns: config.columns,
                rows: config.rows,
                width: config.columns.saturating_mul(config.cell_width),
                height: config.rows.saturating_mul(config.cell_height),
            },
            hovered: None,
            textarea: TextArea::default(),
            log: Log::default(),
            theme: Theme::default(),
        }
    }

    /// Returns false when an undo or redo had nothing to replay.
    pub fn dispatch(&mut self, command: Command) -> bool {
        match command {
            Command::Record(coordinate, kind) => {
                self.do_record(coordinate, kind);
                true
            }
            Command::Undo => self.do_undo(),
            Command::Redo => self.do_redo(),
        }
    }

    fn do_record(&mut self, coordinate: Coordinate, kind: ActionKind) {
        match self.history.as_mut() {
            Some(history) => history.record(&mut self.grid, coordinate, kind),
            None => self.grid.set_cell(coordinate, kind.visual()),
        }
    }

    fn do_undo(&mut self) -> bool {
        let ret = match self.history.as_mut() {
            Some(history) => history.undo(&mut self.grid),
            None => {
                self.history_disabled();
                return false;
            }
        };
        self.report("undo", ret)
    }

    fn do_redo(&mut self) -> bool {
        let ret = match self.history.as_mut() {
            Some(history) => history.redo(&mut self.grid),
            None => {
                self.history_disabled();
                return false;
            }
        };
        self.report("redo", ret)
    }

    fn report(&mut self, what: &str, ret: Replay) -> bool {
        let msg = match ret {
            Replay::Applied(action) => format!(
                "{} {} at ({},{})",
                what,
                action.kind().name(),
                action.coordinate().column,
                action.coordinate().row
            ),
            Replay::Empty => format!("no {}", what),
        };
        self.log.print(self.theme.text, msg);
        ret != Replay::Empty
    }

    /// Visible extent of the grid area for a terminal of the given size:
    /// everything between the title line and the status/prompt rows.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.layout.width = width.saturating_sub(self.layout.x);
        self.layout.height = height.saturating_sub(self.layout.y + 2);
    }

    fn history_disabled(&mut self) {
        self.log
            .print(self.theme.error, "history disabled".to_string());
    }

    fn on_up(&mut self) {
        if self.show_log {
            self.log.scroll_up(1);
        }
    }

    fn on_down(&mut self) {
        if self.show_log {
            self.log.scroll_down(1);
        }
    }

    fn on_pageup(&mut self) {
        if self.show_log {
            self.log.scroll_up(20);
        }
    }

    fn on_pagedown(&mut self) {
        if self.show_log {
            self.log.scroll_down(20);
        }
    }

    fn on_f1(&mut self) {
        self.show_help = !self.show_help;
    }

    fn on_tab(&mut self) {
        self.show_log = !self.show_log;
    }

    fn on_esc(&mut self) {
        if self.show_help {
            self.show_help = false;
        } else if self.show_log {
            self.show_log = false;
        } else {
            self.should_quit = true;
        }
    }

    fn on_key(&mut self, c: char) {
        match c {
            'q' | 'Q' => {
                self.should_quit = true;
            }
            ':' => {
                self.enter_prompt = true;
            }
            'g' => {
                self.show_grid = !self.show_grid;
            }
            _ => {}
        }
    }

    fn repeat_count(input: Option<&&str>) -> Option<usize> {
        match input {
            Some(n) => n.parse::<usize>().ok(),
            None => Some(1),
        }
    }

    pub fn on_command(&mut self) {
        let line = self.textarea.lines()[0].clone();
        let inputs: Vec<&str> = line.split_whitespace().collect();
        if inputs.is_empty() {
            return;
        }
        match inputs[0] {
            "undo" | "redo" => match Self::repeat_count(inputs.get(1)) {
                Some(count) => {
                    let command = if inputs[0] == "undo" {
                        Command::Undo
                    } else {
                        Command::Redo
                    };
                    for _i in 0..count {
                        if !self.dispatch(command) {
                            break;
                        }
                    }
                }
                None => {
                    self.log
                        .print(self.theme.error, format!("bad count: {}", line.trim()));
                }
            },
            "grid" => match inputs.get(1) {
                Some(&"on") => self.show_grid = true,
                Some(&"off") => self.show_grid = false,
                _ => self.show_grid = !self.show_grid,
            },
            "quit" | "q" => {
                self.should_quit = true;
            }
            _ => {
                self.log
                    .print(self.theme.error, format!("unknown command: {}", line.trim()));
            }
        }
    }

    fn reset_prompt(&mut self) {
        self.textarea = TextArea::default();
        self.enter_prompt = false;
    }

    pub fn handle_input(&mut self, key: KeyEvent) {
        if self.enter_prompt {
            match key.code {
                KeyCode::Enter => {
                    self.on_command();
                    self.reset_prompt();
                }
                KeyCode::Esc => self.reset_prompt(),
                _ => {
                    self.textarea.input(key);
                }
            }
            return;
        }
        if let Some(command) = translate_key(key) {
            self.dispatch(command);
            return;
        }
        match key.code {
            KeyCode::Char(c) => self.on_key(c),
            KeyCode::Up => self.on_up(),
            KeyCode::Down => self.on_down(),
            KeyCode::PageUp => self.on_pageup(),
            KeyCode::PageDown => self.on_pagedown(),
            KeyCode::Tab => self.on_tab(),
            KeyCode::Esc => self.on_esc(),
            KeyCode::F(1) => self.on_f1(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if self.show_help || self.show_log || self.enter_prompt {
            return;
        }
        if let MouseEventKind::Moved | MouseEventKind::Down(_) = event.kind {
            self.hovered = self.layout.to_cell(event.column, event.row);
        }
        if let Some(command) = translate_mouse(&self.layout, event) {
            self.dispatch(command);
        }
    }

    pub fn get_status(&self) -> Spans<'a> {
        let mut spans = Vec::new();
        let cell = match self.hovered {
            Some(c) => format!("cell ({},{})", c.column, c.row),
            None => "cell (-,-)".to_string(),
        };
        spans.push(Span::styled(cell, self.theme.status));
        let depth = match &self.history {
            Some(history) => format!(
                "  undo {}  redo {}",
                history.undo_stack().len(),
                history.redo_stack().len()
            ),
            None => "  history off".to_string(),
        };
        spans.push(Span::styled(depth, self.theme.status));
        if let Some(next) = self.history.as_ref().and_then(|h| h.undo_stack().peek()) {
            spans.push(Span::styled(
                format!(
                    "  last {} ({},{})",
                    next.kind().name(),
                    next.coordinate().column,
                    next.coordinate().row
                ),
                self.theme.status,
            ));
        }
        spans.push(Span::styled(
            format!("  filled {}", self.grid.filled()),
            self.theme.status,
        ));
        if let Some(last) = self.log.last() {
            spans.push(Span::raw("  "));
            spans.extend(last.0.iter().cloned());
        }
        Spans::from(spans)
    }

    pub fn get_help(&self) -> Vec<Spans<'a>> {
        vec![
            Spans::from("Help"),
            Spans::from("left click   paint cell"),
            Spans::from("right click  erase cell"),
            Spans::from("Ctrl+z       undo"),
            Spans::from("Ctrl+r       redo"),
            Spans::from("Ctrl+y       redo"),
            Spans::from("g            toggle grid lines"),
            Spans::from("':'          enter command line"),
            Spans::from("tab          toggle message log"),
            Spans::from("up/down      scroll message log"),
            Spans::from("F1           toggle help"),
            Spans::from("esc          close view / exit"),
            Spans::from("q            exit"),
            Spans::from(""),
            Spans::from("Commands"),
            Spans::from("undo [n]     undo n actions"),
            Spans::from("redo [n]     redo n actions"),
            Spans::from("grid on|off  show or hide grid lines"),
            Spans::from("quit         exit"),
        ]
    }
}
