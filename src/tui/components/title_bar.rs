// Title bar component
//
// Renders the app name, the catalog being administered and a busy spinner.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let busy = if app.in_flight > 0 {
        format!(" {}", SPINNER[app.tick % SPINNER.len()])
    } else {
        String::new()
    };

    let title = Paragraph::new(format!(" 🛒 Catalog Admin{} ──── {}", busy, app.api_url))
        .style(
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.highlight))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
