//! Product form panel
//!
//! Three bordered inputs stacked above the submit label. The label reads
//! "Add Product" or "Update Product" depending on the controller's mode.

use crate::tui::form::{EditState, FormController, FormField};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, area: Rect, form: &FormController, theme: &Theme) {
    let title = match form.state() {
        EditState::Creating => " New Product ".to_string(),
        EditState::Editing(id) => format!(" Edit Product #{} ", id),
    };
    let border_color = if form.focus().is_some() {
        theme.highlight
    } else {
        theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    for (field, input_area) in FormField::ALL.into_iter().zip(chunks.iter()) {
        render_input(f, *input_area, form, field, theme);
    }

    let button_style = if form.is_editing() {
        Style::default().fg(theme.warning)
    } else {
        Style::default().fg(theme.success)
    };
    let button = Paragraph::new(Line::from(vec![
        Span::styled(" [Enter] ", Style::default().fg(theme.muted)),
        Span::styled(
            form.submit_label(),
            button_style.add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(button, chunks[3]);
}

fn render_input(f: &mut Frame, area: Rect, form: &FormController, field: FormField, theme: &Theme) {
    let focused = form.focus() == Some(field);
    let value = form.value(field);
    let inner_width = area.width.saturating_sub(2) as usize;

    // Keep the end of long values visible while typing
    let shown = tail(value, inner_width.saturating_sub(1));

    let border_color = if focused { theme.highlight } else { theme.border };
    let input = Paragraph::new(shown.as_str())
        .style(Style::default().fg(theme.foreground))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(border_color))
                .title(format!(" {} ", field.label())),
        );
    f.render_widget(input, area);

    if focused {
        let x = area.x + 1 + shown.width() as u16;
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// Longest suffix of `text` that fits in `max` columns
fn tail(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut start = 0;
    for (idx, _) in text.char_indices() {
        if text[idx..].width() <= max {
            start = idx;
            break;
        }
    }
    text[start..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, ProductId};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(form: &FormController) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 14)).unwrap();
        terminal
            .draw(|f| render(f, f.area(), form, &Theme::dark()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_label_follows_mode() {
        let mut form = FormController::new();
        let screen = draw(&form);
        assert!(screen.contains("Add Product"));
        assert!(screen.contains("Name"));
        assert!(screen.contains("Description"));

        form.begin_edit(&Product {
            id: ProductId(3),
            title: "Chair".to_string(),
            price: "40".to_string(),
            description: "oak".to_string(),
            image: "i".to_string(),
        });
        let screen = draw(&form);
        assert!(screen.contains("Update Product"));
        assert!(screen.contains("Edit Product #3"));
        assert!(screen.contains("Chair"));
    }

    #[test]
    fn test_tail_keeps_end_of_long_values() {
        assert_eq!(tail("abc", 5), "abc");
        assert_eq!(tail("abcdefgh", 3), "fgh");
    }
}
