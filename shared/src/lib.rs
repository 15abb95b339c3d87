use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub mod draft;
pub mod outcome;
pub mod protocol;
pub mod serde_helper;
pub mod validation;

pub use draft::{MatchDraft, NumericField, Side, TeamFields};
pub use outcome::{ClassFilter, Outcome, TournamentClass};
pub use validation::{Field, ValidationErrors};

// =========================================================
// Constants
// =========================================================

/// LocalStorage key holding the auth token.
pub const STORAGE_TOKEN_KEY: &str = "token";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
/// Score sent by the API for a side that has not batted yet.
pub const PLACEHOLDER_SCORE: &str = "-";

// =========================================================
// Domain Models
// =========================================================

/// Which listing endpoint to query.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchCategory {
    #[default]
    Live,
    Recent,
    Upcoming,
}

impl MatchCategory {
    pub fn label(&self) -> &'static str {
        match self {
            MatchCategory::Live => "Live",
            MatchCategory::Recent => "Recent",
            MatchCategory::Upcoming => "Upcoming",
        }
    }
}

/// One side of a match as reported by the API.
///
/// Wickets and overs show up as either JSON strings or numbers depending on
/// the feed, so everything is normalized to text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamScore {
    #[serde(deserialize_with = "serde_helper::text")]
    pub name: String,
    #[serde(deserialize_with = "serde_helper::text")]
    pub score: String,
    #[serde(deserialize_with = "serde_helper::text")]
    pub wickets: String,
    #[serde(deserialize_with = "serde_helper::text")]
    pub overs: String,
}

impl TeamScore {
    pub fn has_batted(&self) -> bool {
        self.score != PLACEHOLDER_SCORE
    }
}

/// A match listing. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Match {
    #[serde(deserialize_with = "serde_helper::text")]
    pub external_id: String,
    #[serde(deserialize_with = "serde_helper::null_default")]
    pub team1: TeamScore,
    #[serde(deserialize_with = "serde_helper::null_default")]
    pub team2: TeamScore,
    #[serde(deserialize_with = "serde_helper::text")]
    pub tournament: String,
    #[serde(deserialize_with = "serde_helper::text")]
    pub status: String,
    #[serde(deserialize_with = "serde_helper::null_default")]
    pub is_live: bool,
    #[serde(deserialize_with = "serde_helper::optional_text")]
    pub start_time: Option<String>,
    #[serde(deserialize_with = "serde_helper::text")]
    pub venue: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_wire_names() {
        assert_eq!(MatchCategory::Upcoming.to_string(), "upcoming");
        assert_eq!(MatchCategory::from_str("recent").unwrap(), MatchCategory::Recent);
        assert_eq!(
            serde_json::to_string(&MatchCategory::Live).unwrap(),
            "\"live\""
        );
    }

    #[test]
    fn test_match_decodes_api_shape() {
        let json = r#"{
            "externalId": 9912,
            "team1": { "name": "India", "score": "245/6", "wickets": 6, "overs": 50 },
            "team2": { "name": "Australia", "score": "-", "wickets": "0", "overs": "0.0" },
            "tournament": "Border-Gavaskar Trophy",
            "status": "Match complete",
            "isLive": false,
            "startTime": "2024-11-22T04:00:00.000Z",
            "venue": "Perth"
        }"#;
        let m: Match = serde_json::from_str(json).unwrap();

        assert_eq!(m.external_id, "9912");
        assert_eq!(m.team1.wickets, "6");
        assert_eq!(m.team1.overs, "50");
        assert_eq!(m.team2.overs, "0.0");
        assert!(!m.team2.has_batted());
        assert_eq!(m.start_time.as_deref(), Some("2024-11-22T04:00:00.000Z"));
    }

    #[test]
    fn test_match_tolerates_missing_and_null_fields() {
        let m: Match = serde_json::from_str(r#"{ "team1": null, "isLive": null }"#).unwrap();
        assert_eq!(m.team1, TeamScore::default());
        assert!(!m.is_live);
        assert!(m.start_time.is_none());
        assert!(m.venue.is_empty());
    }
}
