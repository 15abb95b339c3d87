//! New-match form state.
//!
//! `FormModel` holds the draft, the latest validation result and which fields
//! the user has visited. `FormState` wraps it in signals for the view.

use std::collections::BTreeSet;

use crickboard_shared::validation::validate_draft;
use crickboard_shared::{Field, MatchCategory, MatchDraft, ValidationErrors};
use leptos::logging::log;
use leptos::prelude::*;

use crate::error::ClientError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormModel {
    pub draft: MatchDraft,
    errors: ValidationErrors,
    touched: BTreeSet<Field>,
    submitted: bool,
}

impl FormModel {
    fn revalidate(&mut self) {
        self.errors = validate_draft(&self.draft);
    }

    /// Field edit.
    pub fn set_input(&mut self, field: Field, value: &str) {
        self.draft.set_input(field, value);
        self.revalidate();
    }

    pub fn set_status(&mut self, status: MatchCategory) {
        self.draft.status = status;
    }

    /// Field lost focus; its error becomes visible from now on.
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate();
    }

    /// Message to show under `field`. Untouched fields stay quiet until the
    /// first submit attempt.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.submitted || self.touched.contains(&field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Validates unconditionally. Returns the draft to send when it is
    /// valid; the draft itself is kept until [`Self::reset`].
    pub fn submit(&mut self) -> Result<MatchDraft, ClientError> {
        self.submitted = true;
        self.revalidate();
        if self.errors.is_empty() {
            Ok(self.draft.clone())
        } else {
            Err(ClientError::Validation(self.errors.clone()))
        }
    }

    /// Applies the server's answer to a submitted draft. Success clears the
    /// form; failure leaves the user's input and error display as they were.
    pub fn finish(&mut self, result: Result<(), ClientError>) -> Result<(), ClientError> {
        if result.is_ok() {
            self.reset();
        }
        result
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Signals behind the new-match page.
///
/// `RwSignal` is `Copy`, so the state can be handed to child components as
/// a prop.
#[derive(Clone, Copy)]
pub struct FormState {
    pub model: RwSignal<FormModel>,
    pub submitting: RwSignal<bool>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            model: RwSignal::new(FormModel::default()),
            submitting: RwSignal::new(false),
        }
    }

    pub fn input(&self, field: Field) -> String {
        self.model.with(|m| m.draft.input(field))
    }

    pub fn set_input(&self, field: Field, value: &str) {
        self.model.update(|m| m.set_input(field, value));
    }

    pub fn blur(&self, field: Field) {
        self.model.update(|m| m.blur(field));
    }

    pub fn error(&self, field: Field) -> Option<String> {
        self.model.with(|m| m.visible_error(field).map(str::to_string))
    }

    pub fn submit(&self) -> Option<MatchDraft> {
        match self.model.try_update(|m| m.submit())? {
            Ok(draft) => Some(draft),
            Err(e) => {
                log!("[MatchForm] {}", e);
                None
            }
        }
    }

    /// `None` once the page is gone; the caller then has nothing to show.
    pub fn finish(&self, result: Result<(), ClientError>) -> Option<Result<(), ClientError>> {
        self.submitting.try_set(false);
        self.model.try_update(|m| m.finish(result))
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
