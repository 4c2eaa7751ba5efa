// Notification layer - modal overlays for messages and confirmations
//
// Modals stack: the newest one captures input and is drawn on top. Each modal
// handles its own keys and returns a ModalAction for the caller to execute.

use crate::catalog::ProductId;
use crossterm::event::KeyCode;

/// Severity of a one-shot notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
}

impl NoticeKind {
    pub fn icon(self) -> &'static str {
        match self {
            NoticeKind::Success => "✓",
            NoticeKind::Error => "✗",
            NoticeKind::Warning => "!",
        }
    }
}

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, nothing else to do
    None,
    /// Dismiss the top modal
    Close,
    /// User accepted the delete confirmation
    Confirmed(ProductId),
    /// User declined the delete confirmation
    Declined(ProductId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Key binding overview
    Help,
    Notice {
        kind: NoticeKind,
        title: String,
        message: String,
    },
    /// Destructive-action prompt, answered asynchronously with y/n
    ConfirmDelete {
        target: ProductId,
        title: String,
        message: String,
        confirm_label: String,
    },
}

impl Modal {
    pub fn handle_input(&self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter => {
                    ModalAction::Close
                }
                _ => ModalAction::None,
            },
            Modal::Notice { .. } => match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('q') => {
                    ModalAction::Close
                }
                _ => ModalAction::None,
            },
            Modal::ConfirmDelete { target, .. } => match key {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    ModalAction::Confirmed(*target)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    ModalAction::Declined(*target)
                }
                _ => ModalAction::None,
            },
        }
    }
}

/// Stack of open modals
#[derive(Debug, Default)]
pub struct NotificationLayer {
    stack: Vec<Modal>,
}

impl NotificationLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a one-shot message
    pub fn notify(&mut self, kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) {
        self.stack.push(Modal::Notice {
            kind,
            title: title.into(),
            message: message.into(),
        });
    }

    /// Ask before deleting `target`; the answer arrives later through `handle_input`
    pub fn confirm_delete(&mut self, target: ProductId) {
        self.stack.push(Modal::ConfirmDelete {
            target,
            title: "Are you sure?".to_string(),
            message: "This product will be deleted!".to_string(),
            confirm_label: "Yes, delete it!".to_string(),
        });
    }

    pub fn show_help(&mut self) {
        self.stack.push(Modal::Help);
    }

    pub fn active(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn is_open(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Route a key to the top modal, popping it when it is answered or closed
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        let Some(top) = self.stack.last() else {
            return ModalAction::None;
        };

        let action = top.handle_input(key);
        if action != ModalAction::None {
            self.stack.pop();
        }
        action
    }
}
