//! New-match form model.
//!
//! The API takes parallel two-element arrays (`teams`, `scores`, `wickets`,
//! `overs`). Internally the draft keeps a named pair of [`TeamFields`] so a
//! field can never be written to the wrong side; arrays only appear when the
//! draft is turned into a [`CreateMatchRequest`].

use chrono::{NaiveDate, SecondsFormat};
use serde::{Serialize, Serializer};

use crate::MatchCategory;
use crate::protocol::CreateMatchRequest;
use crate::validation::Field;

/// Date format produced by `<input type="date">`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn letter(&self) -> char {
        match self {
            Side::A => 'A',
            Side::B => 'B',
        }
    }
}

/// A numeric form input.
///
/// An untouched field stays `Empty` and goes over the wire as `""`, so it is
/// never confused with a real zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NumericField {
    #[default]
    Empty,
    Value(u32),
    /// Non-empty input that is not a whole number. Kept so the user sees
    /// what they typed; validation rejects it.
    Invalid(String),
}

impl NumericField {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return NumericField::Empty;
        }
        match trimmed.parse::<u32>() {
            Ok(n) => NumericField::Value(n),
            Err(_) => NumericField::Invalid(input.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, NumericField::Empty)
    }

    /// Text to put back into the `<input>`.
    pub fn as_input(&self) -> String {
        match self {
            NumericField::Empty => String::new(),
            NumericField::Value(n) => n.to_string(),
            NumericField::Invalid(raw) => raw.clone(),
        }
    }
}

impl Serialize for NumericField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NumericField::Empty => serializer.serialize_str(""),
            NumericField::Value(n) => serializer.serialize_u32(*n),
            NumericField::Invalid(raw) => serializer.serialize_str(raw),
        }
    }
}

/// Everything entered for one side.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeamFields {
    pub name: String,
    pub score: NumericField,
    pub wickets: NumericField,
    pub overs: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchDraft {
    pub team_a: TeamFields,
    pub team_b: TeamFields,
    pub location: String,
    pub status: MatchCategory,
    /// `YYYY-MM-DD`
    pub date: String,
}

impl Default for MatchDraft {
    fn default() -> Self {
        Self {
            team_a: TeamFields::default(),
            team_b: TeamFields::default(),
            location: String::new(),
            status: MatchCategory::Upcoming,
            date: String::new(),
        }
    }
}

impl MatchDraft {
    pub fn team(&self, side: Side) -> &TeamFields {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    pub fn team_mut(&mut self, side: Side) -> &mut TeamFields {
        match side {
            Side::A => &mut self.team_a,
            Side::B => &mut self.team_b,
        }
    }

    /// Parsed `date`, if it is a valid calendar date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    /// Midnight UTC of `date` as RFC 3339 with milliseconds.
    pub fn start_time(&self) -> Option<String> {
        let midnight = self.parsed_date()?.and_hms_opt(0, 0, 0)?;
        Some(
            midnight
                .and_utc()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        )
    }

    /// Text currently shown in the input for `field`. Credential fields are
    /// not part of a draft and read as empty.
    pub fn input(&self, field: Field) -> String {
        match field {
            Field::TeamName(side) => self.team(side).name.clone(),
            Field::Score(side) => self.team(side).score.as_input(),
            Field::Wickets(side) => self.team(side).wickets.as_input(),
            Field::Overs(side) => self.team(side).overs.clone(),
            Field::Location => self.location.clone(),
            Field::Date => self.date.clone(),
            Field::Email | Field::Password => String::new(),
        }
    }

    /// Stores raw input for `field`; score and wickets are parsed.
    pub fn set_input(&mut self, field: Field, value: &str) {
        match field {
            Field::TeamName(side) => self.team_mut(side).name = value.to_string(),
            Field::Score(side) => self.team_mut(side).score = NumericField::parse(value),
            Field::Wickets(side) => self.team_mut(side).wickets = NumericField::parse(value),
            Field::Overs(side) => self.team_mut(side).overs = value.to_string(),
            Field::Location => self.location = value.to_string(),
            Field::Date => self.date = value.to_string(),
            Field::Email | Field::Password => {}
        }
    }

    pub fn to_request(&self) -> CreateMatchRequest {
        let (a, b) = (&self.team_a, &self.team_b);
        CreateMatchRequest {
            teams: [a.name.clone(), b.name.clone()],
            scores: [a.score.clone(), b.score.clone()],
            wickets: [a.wickets.clone(), b.wickets.clone()],
            overs: [a.overs.clone(), b.overs.clone()],
            location: self.location.clone(),
            status: self.status,
            date: self.date.clone(),
            start_time: self.start_time(),
        }
    }
}
