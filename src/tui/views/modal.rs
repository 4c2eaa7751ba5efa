// Modal rendering
//
// Draws the topmost modal of the notification layer as a centered overlay.

use crate::tui::modal::{Modal, NoticeKind};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, theme: &Theme) {
    match modal {
        Modal::Help => render_help(f, theme),
        Modal::Notice {
            kind,
            title,
            message,
        } => render_notice(f, *kind, title, message, theme),
        Modal::ConfirmDelete {
            title,
            message,
            confirm_label,
            ..
        } => render_confirm(f, title, message, confirm_label, theme),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn kind_color(kind: NoticeKind, theme: &Theme) -> ratatui::style::Color {
    match kind {
        NoticeKind::Success => theme.success,
        NoticeKind::Error => theme.error,
        NoticeKind::Warning => theme.warning,
    }
}

fn render_notice(f: &mut Frame, kind: NoticeKind, title: &str, message: &str, theme: &Theme) {
    let color = kind_color(kind, theme);
    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("{}  {}", kind.icon(), title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(message, Style::default().fg(theme.foreground))),
    ]);

    let area = centered_rect(46, 8, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(color))
                .title_bottom(Line::from(" Enter: OK ").centered()),
        );

    f.render_widget(paragraph, area);
}

fn render_confirm(f: &mut Frame, title: &str, message: &str, confirm_label: &str, theme: &Theme) {
    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("{}  {}", NoticeKind::Warning.icon(), title),
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(message, Style::default().fg(theme.foreground))),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[y] ", Style::default().fg(theme.muted)),
            Span::styled(
                confirm_label,
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("[n] ", Style::default().fg(theme.muted)),
            Span::styled("Cancel", Style::default().fg(theme.foreground)),
        ]),
    ]);

    let area = centered_rect(46, 10, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.warning)),
        );

    f.render_widget(paragraph, area);
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, theme: &Theme) {
    let key_style = Style::default().fg(theme.warning);
    let desc_style = Style::default().fg(theme.foreground);
    let header_style = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Products", header_style)),
        kb("↑/↓, j/k", "Select product"),
        kb("e", "Edit selected"),
        kb("d", "Delete selected"),
        kb("a", "Add a product"),
        kb("r", "Reload from server"),
        Line::raw(""),
        Line::from(Span::styled("  Form", header_style)),
        kb("Tab/↓", "Next field"),
        kb("Shift+Tab/↑", "Previous field"),
        kb("Enter", "Add / update"),
        kb("Esc", "Back to products"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        kb("Ctrl+C", "Quit from anywhere"),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(theme.name, key_style),
        ]),
    ]);

    let area = centered_rect(44, 24, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.highlight))
                .border_type(theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductId;
    use crate::tui::modal::NotificationLayer;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 30, 10);
        assert_eq!(centered_rect(20, 4, area), Rect::new(5, 3, 20, 4));
        assert_eq!(centered_rect(50, 20, area), Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn test_confirm_prompt_text() {
        let mut layer = NotificationLayer::new();
        layer.confirm_delete(ProductId(2));

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| render(f, layer.active().unwrap(), &Theme::dark()))
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Are you sure?"));
        assert!(screen.contains("This product will be deleted!"));
        assert!(screen.contains("Yes, delete it!"));
    }
}
