// Views module - screen-level rendering
//
// One screen: title bar on top, form and product list side by side, the
// activity panel and status bar below. Modals are drawn last, over all of it.

mod modal;

use super::app::App;
use crate::tui::components::{form_panel, logs_panel, status_bar, title_bar};
use crate::tui::app::Focus;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Width of the form column
const FORM_WIDTH: u16 = 42;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(8),
            Constraint::Length(2),
        ])
        .split(f.area());

    title_bar::render(f, rows[0], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FORM_WIDTH), Constraint::Min(20)])
        .split(rows[1]);

    form_panel::render(f, columns[0], &app.form, &app.theme);
    let list_focused = app.focus() == Focus::List;
    app.list.render(f, columns[1], &app.theme, list_focused);

    logs_panel::render(f, rows[2], &app.log_buffer, &app.theme);
    status_bar::render(f, rows[3], app);

    if let Some(active) = app.notifications.active() {
        modal::render(f, active, &app.theme);
    }
}
