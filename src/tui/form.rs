//! Product form controller
//!
//! Two-state machine: `Creating` (initial) and `Editing(id)`. The state owns
//! the edit target, so "editing id is set iff editing" holds by construction.
//!
//! ```text
//!            begin_edit(p)               begin_edit(q)
//!  Creating ─────────────▶ Editing(p) ─────────────▶ Editing(q)
//!      ▲                        │
//!      └──────── reset() ───────┘   (after a successful submit)
//! ```

use crate::catalog::{Product, ProductDraft, ProductId};
use std::fmt;

/// Primary action label while creating
pub const ADD_LABEL: &str = "Add Product";
/// Primary action label while editing
pub const UPDATE_LABEL: &str = "Update Product";

/// Whether the form creates a new product or updates an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Creating,
    Editing(ProductId),
}

/// The three text inputs, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Price,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Title, FormField::Price, FormField::Description];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Name",
            FormField::Price => "Price",
            FormField::Description => "Description",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One or more required fields were left empty
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required fields: {}", join_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<FormField>,
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// What a submit should send to the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(ProductDraft),
    Update(ProductId, ProductDraft),
}

#[derive(Debug, Default)]
pub struct FormController {
    title: String,
    price: String,
    description: String,
    /// Image of the product being edited, sent back unchanged on update
    edit_image: String,
    state: EditState,
    focus: Option<FormField>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing(_))
    }

    pub fn submit_label(&self) -> &'static str {
        match self.state {
            EditState::Creating => ADD_LABEL,
            EditState::Editing(_) => UPDATE_LABEL,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Price => &self.price,
            FormField::Description => &self.description,
        }
    }

    #[cfg(test)]
    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Price => &mut self.price,
            FormField::Description => &mut self.description,
        }
    }

    /// Focused input, if the form has focus at all
    pub fn focus(&self) -> Option<FormField> {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Option<FormField>) {
        self.focus = focus;
    }

    /// Type a character into the focused field
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.focus {
            self.value_mut(field).push(c);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.focus {
            self.value_mut(field).pop();
        }
    }

    /// Load a product into the form and switch to update mode.
    /// Any edit already in progress is overwritten.
    pub fn begin_edit(&mut self, product: &Product) {
        if let EditState::Editing(previous) = self.state {
            if previous != product.id {
                tracing::debug!("Abandoning edit of product {}", previous);
            }
        }

        self.title = product.title.clone();
        self.price = product.price.clone();
        self.description = product.description.clone();
        self.edit_image = product.image.clone();
        self.state = EditState::Editing(product.id);
        self.focus = Some(FormField::Title);
    }

    /// Clear fields, restore the add label, drop the edit target
    pub fn reset(&mut self) {
        self.title.clear();
        self.price.clear();
        self.description.clear();
        self.edit_image.clear();
        self.state = EditState::Creating;
    }

    /// Build the request for the current mode.
    ///
    /// Creating requires all three fields and attaches `placeholder_image`.
    /// Editing sends whatever the fields hold (they were populated from the
    /// cached product) together with that product's own image.
    pub fn submit(&self, placeholder_image: &str) -> Result<Submission, ValidationError> {
        let draft = |image: &str| ProductDraft {
            title: self.title.clone(),
            price: self.price.clone(),
            description: self.description.clone(),
            image: image.to_string(),
        };

        match self.state {
            EditState::Editing(id) => Ok(Submission::Update(id, draft(&self.edit_image))),
            EditState::Creating => {
                let missing: Vec<_> = FormField::ALL
                    .into_iter()
                    .filter(|f| self.value(*f).is_empty())
                    .collect();

                if missing.is_empty() {
                    Ok(Submission::Create(draft(placeholder_image)))
                } else {
                    Err(ValidationError { missing })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: &str = "https://picsum.photos/200";

    fn product() -> Product {
        Product {
            id: ProductId(1),
            title: "A".to_string(),
            price: "10".to_string(),
            description: "d".to_string(),
            image: "i".to_string(),
        }
    }

    fn filled() -> FormController {
        let mut form = FormController::new();
        form.set_value(FormField::Title, "Lamp");
        form.set_value(FormField::Price, "12");
        form.set_value(FormField::Description, "bright");
        form
    }

    #[test]
    fn test_initial_state_is_creating() {
        let form = FormController::new();
        assert_eq!(form.state(), EditState::Creating);
        assert_eq!(form.submit_label(), ADD_LABEL);
    }

    #[test]
    fn test_create_requires_all_fields() {
        for field in FormField::ALL {
            let mut form = filled();
            form.set_value(field, "");

            let err = form.submit(IMAGE).unwrap_err();
            assert_eq!(err.missing, vec![field]);
        }
    }

    #[test]
    fn test_whitespace_only_is_not_missing() {
        let mut form = filled();
        form.set_value(FormField::Title, " ");

        let Ok(Submission::Create(draft)) = form.submit(IMAGE) else {
            panic!("whitespace title should be accepted");
        };
        assert_eq!(draft.title, " ");
        assert_eq!(draft.price, "12");
        assert_eq!(draft.description, "bright");
    }

    #[test]
    fn test_error_names_every_missing_field() {
        let mut form = filled();
        form.set_value(FormField::Price, "");
        form.set_value(FormField::Description, "");

        let err = form.submit(IMAGE).unwrap_err();
        assert_eq!(err.missing, vec![FormField::Price, FormField::Description]);
        assert_eq!(err.to_string(), "missing required fields: Price, Description");
    }

    #[test]
    fn test_create_submission_carries_placeholder_image() {
        let form = filled();
        let Submission::Create(draft) = form.submit(IMAGE).unwrap() else {
            panic!("expected create");
        };
        assert_eq!(draft.title, "Lamp");
        assert_eq!(draft.image, IMAGE);
    }

    #[test]
    fn test_begin_edit_populates_fields_and_label() {
        let mut form = FormController::new();
        form.begin_edit(&product());

        assert_eq!(form.state(), EditState::Editing(ProductId(1)));
        assert_eq!(form.value(FormField::Title), "A");
        assert_eq!(form.value(FormField::Price), "10");
        assert_eq!(form.value(FormField::Description), "d");
        assert_eq!(form.submit_label(), UPDATE_LABEL);
    }

    #[test]
    fn test_edit_submission_skips_validation() {
        let mut form = FormController::new();
        form.begin_edit(&product());
        form.set_value(FormField::Description, "");

        assert!(matches!(
            form.submit(IMAGE),
            Ok(Submission::Update(ProductId(1), _))
        ));
    }

    #[test]
    fn test_edit_submission_keeps_product_image() {
        let mut form = FormController::new();
        form.begin_edit(&product());

        let Ok(Submission::Update(_, draft)) = form.submit(IMAGE) else {
            panic!("expected update");
        };
        assert_eq!(draft.image, "i");
    }

    #[test]
    fn test_new_edit_overwrites_previous_target() {
        let mut form = FormController::new();
        form.begin_edit(&product());

        let mut other = product();
        other.id = ProductId(2);
        other.title = "Other".to_string();
        form.begin_edit(&other);

        assert_eq!(form.state(), EditState::Editing(ProductId(2)));
        assert_eq!(form.value(FormField::Title), "Other");
    }

    #[test]
    fn test_reset_returns_to_creating() {
        let mut form = FormController::new();
        form.begin_edit(&product());
        form.reset();

        assert_eq!(form.state(), EditState::Creating);
        assert_eq!(form.submit_label(), ADD_LABEL);
        for field in FormField::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn test_typing_goes_to_focused_field_only() {
        let mut form = FormController::new();
        form.push_char('x');
        assert_eq!(form.value(FormField::Title), "");

        form.set_focus(Some(FormField::Price));
        for c in "9.5".chars() {
            form.push_char(c);
        }
        form.backspace();
        assert_eq!(form.value(FormField::Price), "9.");
        assert_eq!(form.value(FormField::Title), "");
    }
}
