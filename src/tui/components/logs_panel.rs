//! Activity panel
//!
//! Shows the newest entries of the shared log buffer, so request traffic and
//! failures stay visible while the TUI owns the terminal.

use crate::logging::{LogBuffer, LogEntry};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use tracing::Level;

/// Render the last entries that fit in `area`
pub fn render(f: &mut Frame, area: Rect, buffer: &LogBuffer, theme: &Theme) {
    let height = area.height.saturating_sub(2) as usize;
    let entries = buffer.recent(height);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(format_entry(entry, theme)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" Activity ({}) ", buffer.len())),
    );

    f.render_widget(list, area);
}

fn format_entry<'a>(entry: &'a LogEntry, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("[{}] ", entry.timestamp.format("%H:%M:%S")),
            Style::default().fg(theme.muted),
        ),
        Span::styled(
            format!("{:5} ", entry.level_label()),
            level_style(entry.level, theme),
        ),
        Span::raw(entry.message.as_str()),
    ])
}

fn level_style(level: Level, theme: &Theme) -> Style {
    match level {
        Level::ERROR => Style::default()
            .fg(theme.error)
            .add_modifier(Modifier::BOLD),
        Level::WARN => Style::default().fg(theme.warning),
        Level::INFO => Style::default().fg(theme.success),
        _ => Style::default().fg(theme.muted),
    }
}
