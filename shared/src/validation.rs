//! Field validation for the credential and new-match forms.
//!
//! Every call returns a fresh [`ValidationErrors`]; callers replace their
//! previous errors with the result instead of merging.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::draft::{MatchDraft, NumericField, Side};

pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
pub const MSG_EMAIL_INVALID: &str = "Invalid email format";
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required";
pub const MSG_DATE_INVALID: &str = "Date is invalid";

/// A validated form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    TeamName(Side),
    Score(Side),
    Wickets(Side),
    Overs(Side),
    Location,
    Date,
}

impl Field {
    /// Human label used in messages, e.g. `Score B`.
    pub fn label(&self) -> String {
        match self {
            Field::Email => "Email".to_string(),
            Field::Password => "Password".to_string(),
            Field::TeamName(side) => format!("Team {}", side.letter()),
            Field::Score(side) => format!("Score {}", side.letter()),
            Field::Wickets(side) => format!("Wickets {}", side.letter()),
            Field::Overs(side) => format!("Overs {}", side.letter()),
            Field::Location => "Location".to_string(),
            Field::Date => "Date".to_string(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Field → message. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, msg)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, msg)?;
        }
        Ok(())
    }
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Login and registration share the same rules.
pub fn validate_credentials(email: &str, password: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if email.is_empty() {
        errors.insert(Field::Email, MSG_EMAIL_REQUIRED);
    } else if !is_valid_email(email) {
        errors.insert(Field::Email, MSG_EMAIL_INVALID);
    }

    if password.is_empty() {
        errors.insert(Field::Password, MSG_PASSWORD_REQUIRED);
    }

    errors
}

fn required(errors: &mut ValidationErrors, field: Field, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, format!("{} is required", field));
    }
}

fn required_number(errors: &mut ValidationErrors, field: Field, value: &NumericField) {
    match value {
        NumericField::Empty => errors.insert(field, format!("{} is required", field)),
        NumericField::Invalid(_) => {
            errors.insert(field, format!("{} must be a whole number", field))
        }
        NumericField::Value(_) => {}
    }
}

pub fn validate_draft(draft: &MatchDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for side in [Side::A, Side::B] {
        let team = draft.team(side);
        required(&mut errors, Field::TeamName(side), &team.name);
        required_number(&mut errors, Field::Score(side), &team.score);
        required_number(&mut errors, Field::Wickets(side), &team.wickets);
        required(&mut errors, Field::Overs(side), &team.overs);
    }

    required(&mut errors, Field::Location, &draft.location);

    if draft.date.trim().is_empty() {
        required(&mut errors, Field::Date, &draft.date);
    } else if draft.parsed_date().is_none() {
        errors.insert(Field::Date, MSG_DATE_INVALID);
    }

    errors
}
