use crate::action::Coordinate;
use crate::app::App;
use crate::canvas::{CellState, Grid};
use crate::input::CellLayout;
use crate::theme::Theme;
use tui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    text::{Span, Spans},
    widgets::{Paragraph, Widget, Wrap},
    Frame,
};

pub struct GridView<'g> {
    grid: &'g Grid,
    layout: CellLayout,
    theme: Theme,
    lines: bool,
    hovered: Option<Coordinate>,
}

impl<'g> GridView<'g> {
    pub fn new(app: &'g App) -> GridView<'g> {
        GridView {
            grid: &app.grid,
            layout: app.layout,
            theme: app.theme,
            lines: app.show_grid,
            hovered: app.hovered,
        }
    }

    fn symbol(&self, dx: u16, dy: u16) -> Option<&'static str> {
        if !self.lines {
            return None;
        }
        let right = self.layout.cell_width > 1 && dx == self.layout.cell_width - 1;
        let bottom = self.layout.cell_height > 1 && dy == self.layout.cell_height - 1;
        match (right, bottom) {
            (true, true) => Some("┼"),
            (true, false) => Some("│"),
            (false, true) => Some("─"),
            (false, false) => None,
        }
    }
}

impl<'g> Widget for GridView<'g> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cw = self.layout.cell_width;
        let ch = self.layout.cell_height;
        for row in 0..self.grid.rows {
            for column in 0..self.grid.columns {
                let coordinate = Coordinate::new(column, row);
                let style = match self.grid.get(coordinate) {
                    CellState::Filled => self.theme.filled,
                    CellState::Empty => self.theme.empty,
                };
                let hovered = self.hovered == Some(coordinate);
                for dy in 0..ch {
                    for dx in 0..cw {
                        let x = area.x as u32 + column as u32 * cw as u32 + dx as u32;
                        let y = area.y as u32 + row as u32 * ch as u32 + dy as u32;
                        if x >= area.right() as u32 || y >= area.bottom() as u32 {
                            continue;
                        }
                        let cell = buf.get_mut(x as u16, y as u16);
                        match self.symbol(dx, dy) {
                            Some(symbol) => {
                                let line = if hovered {
                                    self.theme.hovered
                                } else {
                                    self.theme.grid_line
                                };
                                cell.set_symbol(symbol).set_style(style.patch(line));
                            }
                            None => {
                                cell.set_symbol(" ").set_style(style);
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn draw<B: Backend>(f: &mut Frame<B>, app: &mut App) {
    let size = f.size();
    app.resize(size.width, size.height);
    if app.show_help {
        draw_help(f, app);
    } else if app.show_log {
        draw_log(f, app);
    } else {
        let title = Spans::from(Span::styled(app.title, app.theme.header));
        let rect = Rect::new(0, 0, size.width, 1);
        f.render_widget(Paragraph::new(title), rect);

        let rect = Rect::new(
            app.layout.x,
            app.layout.y,
            app.layout.width,
            app.layout.height,
        );
        f.render_widget(GridView::new(app), rect);

        if size.height >= 2 {
            let rect = Rect::new(0, size.height - 2, size.width, 1);
            f.render_widget(Paragraph::new(app.get_status()), rect);
        }
    }

    if app.enter_prompt && size.height >= 1 {
        let rect = Rect::new(0, size.height - 1, size.width, 1);
        let widget = app.textarea.widget();
        f.render_widget(widget, rect);
    }
}

fn draw_help<B>(f: &mut Frame<B>, app: &mut App)
where
    B: Backend,
{
    let area = Rect::new(0, 0, f.size().width, f.size().height.saturating_sub(1));
    let paragraph = Paragraph::new(app.get_help())
        .wrap(Wrap { trim: true })
        .scroll((0, 0));
    f.render_widget(paragraph, area);
}

fn draw_log<B>(f: &mut Frame<B>, app: &mut App)
where
    B: Backend,
{
    let area = Rect::new(0, 0, f.size().width, f.size().height.saturating_sub(1));
    let mut last_lines = Vec::new();
    for l in app
        .log
        .lines
        .iter()
        .rev()
        .skip(app.log.scroll)
        .take(area.height as usize)
        .rev()
    {
        last_lines.push(l.clone());
    }
    let paragraph = Paragraph::new(last_lines)
        .wrap(Wrap { trim: true })
        .scroll((0, 0));
    f.render_widget(paragraph, area);
}
