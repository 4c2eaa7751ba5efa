// Status bar component
//
// Renders product count, form mode, pending requests and key hints.

use crate::tui::app::{App, Focus};
use crate::tui::form::EditState;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar at the bottom of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let status = Paragraph::new(status_text(app))
        .style(Style::default().fg(app.theme.muted))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}

fn status_text(app: &App) -> String {
    let mode = match app.form.state() {
        EditState::Creating => "＋ new".to_string(),
        EditState::Editing(id) => format!("✎ editing #{}", id),
    };

    let pending = if app.in_flight > 0 {
        format!(" │ ⟳ {} pending", app.in_flight)
    } else {
        String::new()
    };

    let hints = match app.focus() {
        Focus::List => "↑↓:select  e:edit  d:delete  a:add  r:reload  ?:help  q:quit",
        Focus::Form(_) => "Tab:next field  Enter:submit  Esc:back",
    };

    let count = if app.cache.is_empty() {
        "no products".to_string()
    } else {
        app.cache.len().to_string()
    };

    format!(
        " 📦 {} │ {}{} │ {}",
        count,
        mode,
        pending,
        hints
    )
}
