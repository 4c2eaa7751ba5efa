// TUI application state
//
// App is the single owner of the product cache, the form, the mounted cards
// and the open modals. It never performs I/O: user input produces Requests,
// and finished Requests come back as Outcomes through `apply`.

use super::components::product_list::{ListKey, ProductListPanel};
use super::form::{FormController, FormField, Submission};
use super::modal::{ModalAction, NoticeKind, NotificationLayer};
use super::render::{render, CardAction, CardButton};
use super::theme::{Theme, ThemeKind};
use crate::catalog::{FetchError, ProductCache, ProductId};
use crate::config::Config;
use crate::events::{Outcome, Request};
use crate::logging::LogBuffer;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Form(FormField),
}

/// Main application state for the TUI
pub struct App {
    pub cache: ProductCache,
    pub form: FormController,
    pub list: ProductListPanel,
    pub notifications: NotificationLayer,
    pub theme: Theme,
    pub log_buffer: LogBuffer,

    /// Catalog root shown in the title bar
    pub api_url: String,

    /// Requests spawned but not yet applied
    pub in_flight: usize,

    pub should_quit: bool,

    /// Animation frame counter, advanced by the event loop
    pub tick: usize,

    currency_symbol: String,
    placeholder_image: String,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        Self {
            cache: ProductCache::new(),
            form: FormController::new(),
            list: ProductListPanel::new(),
            notifications: NotificationLayer::new(),
            theme: ThemeKind::from_name(&config.theme).theme(),
            log_buffer,
            api_url: config.api_url.clone(),
            in_flight: 0,
            should_quit: false,
            tick: 0,
            currency_symbol: config.currency_symbol.clone(),
            placeholder_image: config.placeholder_image.clone(),
        }
    }

    /// The first request issued after startup
    pub fn initial_request(&self) -> Request {
        Request::List
    }

    pub fn focus(&self) -> Focus {
        match self.form.focus() {
            None => Focus::List,
            Some(field) => Focus::Form(field),
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.form.set_focus(match focus {
            Focus::List => None,
            Focus::Form(field) => Some(field),
        });
    }

    /// List → Name → Price → Description → List
    pub fn focus_next(&mut self) {
        let next = match self.focus() {
            Focus::List => Focus::Form(FormField::Title),
            Focus::Form(FormField::Title) => Focus::Form(FormField::Price),
            Focus::Form(FormField::Price) => Focus::Form(FormField::Description),
            Focus::Form(FormField::Description) => Focus::List,
        };
        self.set_focus(next);
    }

    pub fn focus_prev(&mut self) {
        let prev = match self.focus() {
            Focus::List => Focus::Form(FormField::Description),
            Focus::Form(FormField::Title) => Focus::List,
            Focus::Form(FormField::Price) => Focus::Form(FormField::Title),
            Focus::Form(FormField::Description) => Focus::Form(FormField::Price),
        };
        self.set_focus(prev);
    }

    /// Record that a request was handed off to a task
    pub fn track(&mut self, request: &Request) {
        self.in_flight += 1;
        tracing::debug!("Dispatching {}", request.describe());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────

    /// Handle keyboard input. Layered dispatch: Modal → Global → Focused area.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Request> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // Layer 1: modals capture all input while open
        if self.notifications.is_open() {
            let action = self.notifications.handle_input(key.code);
            return self.handle_modal_action(action);
        }

        // Layer 2: global keys
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return None;
        }
        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                return None;
            }
            KeyCode::BackTab => {
                self.focus_prev();
                return None;
            }
            _ => {}
        }

        // Layer 3: focused area
        match self.focus() {
            Focus::List => self.handle_list_key(key),
            Focus::Form(_) => self.handle_form_key(key),
        }
    }

    fn handle_modal_action(&mut self, action: ModalAction) -> Option<Request> {
        match action {
            ModalAction::None | ModalAction::Close => None,
            ModalAction::Confirmed(id) => Some(Request::Delete(id)),
            ModalAction::Declined(id) => {
                tracing::debug!("Delete of product {} cancelled", id);
                None
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Option<Request> {
        match self.list.handle_key(key) {
            ListKey::Invoke(button) => return self.press_card_button(&button),
            ListKey::Handled => return None,
            ListKey::Ignored => {}
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.notifications.show_help(),
            KeyCode::Char('a') | KeyCode::Right => self.set_focus(Focus::Form(FormField::Title)),
            KeyCode::Char('r') => return Some(Request::List),
            _ => {}
        }
        None
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Option<Request> {
        match key.code {
            KeyCode::Esc => self.set_focus(Focus::List),
            KeyCode::Enter => return self.submit(),
            KeyCode::Down => {
                if self.focus() != Focus::Form(FormField::Description) {
                    self.focus_next();
                }
            }
            KeyCode::Up => {
                if self.focus() != Focus::Form(FormField::Title) {
                    self.focus_prev();
                }
            }
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.push_char(c)
            }
            _ => {}
        }
        None
    }

    /// Run a card button's action. The tag is normalized before any cache access.
    pub fn press_card_button(&mut self, button: &CardButton) -> Option<Request> {
        match button.action {
            CardAction::Edit => {
                if let Some(product) = self.cache.get_by_tag(&button.tag) {
                    tracing::debug!("Editing product {}", product.id);
                    self.form.begin_edit(product);
                }
            }
            CardAction::Delete => match ProductId::from_tag(&button.tag) {
                Ok(id) => self.notifications.confirm_delete(id),
                Err(e) => tracing::warn!("Ignoring delete action: {}", e),
            },
        }
        None
    }

    /// Submit the form in its current mode
    pub fn submit(&mut self) -> Option<Request> {
        match self.form.submit(&self.placeholder_image) {
            Ok(Submission::Create(draft)) => Some(Request::Create(draft)),
            Ok(Submission::Update(id, draft)) => Some(Request::Update(id, draft)),
            Err(e) => {
                tracing::debug!("Form rejected: {}", e);
                self.notifications
                    .notify(NoticeKind::Error, "Error", "Please fill out all fields");
                None
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Outcomes
    // ─────────────────────────────────────────────────────────────────────

    /// Apply a finished request. Failures leave the cache and form untouched.
    pub fn apply(&mut self, outcome: Outcome) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match outcome {
            Outcome::Listed(Ok(products)) => {
                self.cache.set_all(products);
                self.rerender();
            }
            Outcome::Listed(Err(e)) => self.report_failure(&e, "Failed to fetch products"),

            Outcome::Created(Ok(product)) => {
                self.cache.append(product);
                self.rerender();
                self.form.reset();
                self.notifications
                    .notify(NoticeKind::Success, "Success", "Product added successfully");
            }
            Outcome::Created(Err(e)) => self.report_failure(&e, "Failed to add product"),

            Outcome::Updated {
                id,
                draft,
                result: Ok(()),
            } => {
                // The local draft is authoritative; the PUT response is not read
                self.cache.replace_by_id(id, draft.into());
                self.rerender();
                self.form.reset();
                self.notifications.notify(
                    NoticeKind::Success,
                    "Success",
                    "Product updated successfully",
                );
            }
            Outcome::Updated { result: Err(e), .. } => {
                self.report_failure(&e, "Failed to update product")
            }

            Outcome::Deleted { id, result: Ok(()) } => {
                self.cache.remove_by_id(id);
                self.rerender();
                self.notifications
                    .notify(NoticeKind::Success, "Deleted!", "Product has been deleted.");
            }
            Outcome::Deleted { result: Err(e), .. } => {
                self.report_failure(&e, "Failed to delete product")
            }
        }
    }

    /// Remount the whole card set from the cache
    pub fn rerender(&mut self) {
        self.list
            .remount(render(self.cache.products(), &self.currency_symbol));
    }

    fn report_failure(&mut self, error: &FetchError, message: &str) {
        tracing::warn!(operation = %error.operation(), "{}", error);
        self.notifications.notify(NoticeKind::Error, "Error", message);
    }
}
