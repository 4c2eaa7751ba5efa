//! Product list panel
//!
//! Holds the currently mounted card set. `remount` swaps the whole set at
//! once, and key handling only ever looks at the mounted cards, so actions
//! from an older render cannot fire.

use crate::tui::render::{CardAction, CardButton, ProductCard};
use crate::tui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Result of a key press on the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListKey {
    /// Selection moved or nothing to do
    Handled,
    /// A card button was pressed
    Invoke(CardButton),
    /// Not a list key, let the caller try
    Ignored,
}

#[derive(Debug, Default)]
pub struct ProductListPanel {
    cards: Vec<ProductCard>,
    state: ListState,
}

impl ProductListPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every mounted card, keeping the selection in range
    pub fn remount(&mut self, cards: Vec<ProductCard>) {
        self.cards = cards;

        let selected = match (self.state.selected(), self.cards.len()) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(idx), len) => Some(idx.min(len - 1)),
        };
        self.state.select(selected);
    }

    #[cfg(test)]
    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    #[cfg(test)]
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn selected_card(&self) -> Option<&ProductCard> {
        self.state.selected().and_then(|idx| self.cards.get(idx))
    }

    pub fn select_next(&mut self) {
        if let Some(idx) = self.state.selected() {
            if idx + 1 < self.cards.len() {
                self.state.select(Some(idx + 1));
            }
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(idx) = self.state.selected() {
            self.state.select(Some(idx.saturating_sub(1)));
        }
    }

    /// Press a button on the selected card
    pub fn press(&self, action: CardAction) -> Option<CardButton> {
        self.selected_card()
            .and_then(|card| card.button(action))
            .cloned()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ListKey {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                ListKey::Handled
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                ListKey::Handled
            }
            KeyCode::Home | KeyCode::Char('g') => {
                if !self.cards.is_empty() {
                    self.state.select(Some(0));
                }
                ListKey::Handled
            }
            KeyCode::End | KeyCode::Char('G') => {
                if let Some(last) = self.cards.len().checked_sub(1) {
                    self.state.select(Some(last));
                }
                ListKey::Handled
            }
            KeyCode::Char(c) if c == CardAction::Delete.key() => self.invoke(CardAction::Delete),
            KeyCode::Char(c) if c == CardAction::Edit.key() => self.invoke(CardAction::Edit),
            _ => ListKey::Ignored,
        }
    }

    fn invoke(&self, action: CardAction) -> ListKey {
        match self.press(action) {
            Some(button) => ListKey::Invoke(button),
            None => ListKey::Handled,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let border_color = if focused { theme.highlight } else { theme.border };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border_color))
            .title(format!(" Products ({}) ", self.cards.len()));

        if self.cards.is_empty() {
            let empty = Paragraph::new("No products")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.muted))
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .cards
            .iter()
            .map(|card| card_item(card, theme, inner_width))
            .collect();

        let list = List::new(items)
            .block(block)
            .style(Style::default().fg(theme.foreground))
            .highlight_style(
                Style::default()
                    .bg(theme.selection)
                    .fg(theme.selection_fg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▌");

        f.render_stateful_widget(list, area, &mut self.state);
    }
}

fn card_item<'a>(card: &'a ProductCard, theme: &Theme, width: usize) -> ListItem<'a> {
    let muted = Style::default().fg(theme.muted);

    let buttons: Vec<Span> = card
        .buttons
        .iter()
        .flat_map(|b| {
            let color = match b.action {
                CardAction::Delete => theme.error,
                CardAction::Edit => theme.warning,
            };
            [
                Span::styled(format!("[{}] ", b.action.key()), muted),
                Span::styled(b.action.label(), Style::default().fg(color)),
                Span::raw("  "),
            ]
        })
        .collect();

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                truncate(&card.title, width.saturating_sub(card.tag.len() + 2)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" #{}", card.tag), muted),
        ]),
        Line::from(vec![
            Span::raw("Price: "),
            Span::styled(card.price.clone(), Style::default().fg(theme.price)),
        ]),
        Line::raw(truncate(&card.description, width)),
        Line::styled(truncate(&card.image, width), muted),
        Line::from(buttons),
        Line::raw(""),
    ])
}

/// Cut `text` to fit `max` display columns, flattening newlines
fn truncate(text: &str, max: usize) -> String {
    let flat = text.replace(['\n', '\r'], " ");
    if flat.width() <= max {
        return flat;
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in flat.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
