use crate::draft::NumericField;
use crate::{Match, MatchCategory, serde_helper};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The URL path, relative to the API base.
    fn path(&self) -> String;
}

// =========================================================
// Auth
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/api/auth/login".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for RegisterRequest {
    // Any 2xx is success; the body is ignored.
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/api/auth/register".to_string()
    }
}

// =========================================================
// Matches
// =========================================================

/// List one category of matches.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ListMatchesRequest {
    #[serde(skip)]
    pub category: MatchCategory,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMatchesResponse {
    #[serde(default, deserialize_with = "serde_helper::null_default")]
    pub matches: Vec<Match>,
}

impl ApiRequest for ListMatchesRequest {
    type Response = ListMatchesResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/api/matches/{}", self.category)
    }
}

/// Wire payload for a new match.
///
/// Index 0 of every array is team A, index 1 is team B. Build it through
/// [`crate::MatchDraft::to_request`] rather than by hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchRequest {
    pub teams: [String; 2],
    pub scores: [NumericField; 2],
    pub wickets: [NumericField; 2],
    pub overs: [String; 2],
    pub location: String,
    pub status: MatchCategory,
    pub date: String,
    /// `null` when `date` does not parse.
    pub start_time: Option<String>,
}

impl ApiRequest for CreateMatchRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/api/matches".to_string()
    }
}

/// Error body returned by the API on rejected requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_path_uses_category() {
        let req = ListMatchesRequest {
            category: MatchCategory::Upcoming,
        };
        assert_eq!(req.path(), "/api/matches/upcoming");
    }

    #[test]
    fn test_list_response_null_matches() {
        let res: ListMatchesResponse = serde_json::from_str(r#"{ "matches": null }"#).unwrap();
        assert!(res.matches.is_empty());
        let res: ListMatchesResponse = serde_json::from_str("{}").unwrap();
        assert!(res.matches.is_empty());
    }
}
