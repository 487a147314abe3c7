use tui::style::Style;
use tui::text::Span;
use tui::text::Spans;

/// Scrollable message log shown with `Tab`; the last line doubles as the
/// status message.
#[derive(Clone)]
pub struct Log<'a> {
    pub lines: Vec<Spans<'a>>,
    pub scroll: usize,
}

impl<'a> Log<'a> {
    pub fn default() -> Log<'a> {
        Log {
            lines: Vec::new(),
            scroll: 0,
        }
    }

    pub fn print(&mut self, style: Style, msg: String) {
        self.lines.push(Spans::from(vec![Span::styled(msg, style)]));
    }

    pub fn last(&self) -> Option<&Spans<'a>> {
        self.lines.last()
    }

    pub fn scroll_up(&mut self, amount: usize) {
        let max = self.lines.len().saturating_sub(1);
        self.scroll = std::cmp::min(self.scroll + amount, max);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_sub(amount);
    }
}
