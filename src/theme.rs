use tui::style::Color;
use tui::style::Modifier;
use tui::style::Style;

#[derive(Copy, Clone)]
pub struct Theme {
    pub empty: Style,
    pub error: Style,
    pub filled: Style,
    pub grid_line: Style,
    pub header: Style,
    pub hovered: Style,
    pub status: Style,
    pub text: Style,
}

impl Theme {
    pub fn default() -> Theme {
        Theme {
            empty: Style::default().bg(Color::Black),
            error: Style::default().fg(Color::Black).bg(Color::Red),
            filled: Style::default().bg(Color::White),
            grid_line: Style::default().fg(Color::Red),
            header: Style::default()
                .fg(Color::Green)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
            hovered: Style::default().fg(Color::Yellow),
            status: Style::default().fg(Color::Cyan).bg(Color::Black),
            text: Style::default().fg(Color::White).bg(Color::Black),
        }
    }
}
