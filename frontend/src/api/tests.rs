use super::*;
use crate::web::MockHttpClient;
use crickboard_shared::{NumericField, TeamFields};
use serde_json::json;

const BASE: &str = "https://api.test";

// =========================================================
// Helpers
// =========================================================

fn api(token: Option<&str>) -> CricketApi<MockHttpClient> {
    CricketApi::new(
        "https://api.test/",
        token.map(Token::new),
        MockHttpClient::new(),
    )
}

fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

fn draft() -> MatchDraft {
    MatchDraft {
        team_a: TeamFields {
            name: "Kent".into(),
            score: NumericField::Value(301),
            wickets: NumericField::Value(8),
            overs: "50".into(),
        },
        team_b: TeamFields {
            name: "Essex".into(),
            score: NumericField::Value(299),
            wickets: NumericField::Value(10),
            overs: "49.4".into(),
        },
        location: "Canterbury".into(),
        status: MatchCategory::Recent,
        date: "2025-06-01".into(),
    }
}

// =========================================================
// login / register
// =========================================================

#[tokio::test]
async fn test_login_returns_token() {
    let api = api(None);
    api.client
        .mock_response(&url("/api/auth/login"), 200, json!({ "token": "jwt-123" }));

    let token = api.login("a@b.co", "pw").await.unwrap();
    assert_eq!(token.as_str(), "jwt-123");

    let requests = api.client.requests.borrow();
    assert_eq!(requests[0].method, HttpMethod::Post);
    let body: serde_json::Value =
        serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "email": "a@b.co", "password": "pw" }));
}

#[tokio::test]
async fn test_login_rejection_uses_server_message() {
    let api = api(None);
    api.client.mock_response(
        &url("/api/auth/login"),
        401,
        json!({ "error": "Invalid email or password" }),
    );

    let err = api.login("a@b.co", "bad").await.unwrap_err();
    assert_eq!(err, ClientError::Auth("Invalid email or password".into()));
}

#[tokio::test]
async fn test_login_network_failure_uses_fallback() {
    let api = api(None);
    api.client.mock_unreachable(&url("/api/auth/login"));

    let err = api.login("a@b.co", "pw").await.unwrap_err();
    assert_eq!(err, ClientError::Auth(MSG_LOGIN_FAILED.into()));
}

#[tokio::test]
async fn test_login_missing_token_is_auth_error() {
    let api = api(None);
    api.client
        .mock_response(&url("/api/auth/login"), 200, json!({ "ok": true }));

    let err = api.login("a@b.co", "pw").await.unwrap_err();
    assert_eq!(err, ClientError::Auth(MSG_LOGIN_FAILED.into()));
}

#[tokio::test]
async fn test_register_accepts_empty_body() {
    let api = api(None);
    api.client.mock_raw(&url("/api/auth/register"), 201, "");

    assert!(api.register("new@user.io", "pw").await.is_ok());
}

#[tokio::test]
async fn test_register_failure() {
    let api = api(None);
    api.client
        .mock_raw(&url("/api/auth/register"), 500, "<html>oops</html>");

    let err = api.register("new@user.io", "pw").await.unwrap_err();
    assert_eq!(err, ClientError::Auth(MSG_REGISTER_FAILED.into()));
}

// =========================================================
// Authorization header
// =========================================================

#[tokio::test]
async fn test_authorization_attached_when_token_present() {
    let api = api(Some("tok"));
    api.client
        .mock_response(&url("/api/matches/live"), 200, json!({ "matches": [] }));

    api.list_matches(MatchCategory::Live).await;

    let requests = api.client.requests.borrow();
    assert_eq!(
        requests[0].headers.get(HEADER_AUTHORIZATION).map(String::as_str),
        Some("Bearer tok")
    );
    assert!(requests[0].body.is_none());
}

#[tokio::test]
async fn test_no_authorization_without_token() {
    let api = api(None);
    api.list_matches(MatchCategory::Live).await;

    let requests = api.client.requests.borrow();
    assert!(!requests[0].headers.contains_key(HEADER_AUTHORIZATION));
}

// =========================================================
// list_matches
// =========================================================

#[tokio::test]
async fn test_list_matches_decodes() {
    let api = api(Some("tok"));
    api.client.mock_response(
        &url("/api/matches/recent"),
        200,
        json!({ "matches": [
            { "externalId": "m1", "team1": { "name": "A", "score": "120/3" },
              "team2": { "name": "B", "score": "-" }, "tournament": "Big Bash League",
              "status": "Live", "isLive": true, "venue": "MCG" }
        ]}),
    );

    let matches = api.list_matches(MatchCategory::Recent).await;
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].external_id, "m1");
    assert!(matches[0].is_live);
}

#[tokio::test]
async fn test_list_matches_failure_degrades_to_empty() {
    let api = api(Some("tok"));
    api.client.mock_unreachable(&url("/api/matches/live"));
    assert!(api.list_matches(MatchCategory::Live).await.is_empty());

    api.client
        .mock_response(&url("/api/matches/upcoming"), 503, json!({ "error": "down" }));
    assert!(api.list_matches(MatchCategory::Upcoming).await.is_empty());

    api.client.mock_raw(&url("/api/matches/recent"), 200, "not json");
    assert!(api.list_matches(MatchCategory::Recent).await.is_empty());
}

#[tokio::test]
async fn test_try_list_matches_keeps_error() {
    let api = api(None);
    let err = api.try_list_matches(MatchCategory::Live).await.unwrap_err();
    assert!(matches!(err, ClientError::Fetch(_)));
}

// =========================================================
// create_match
// =========================================================

#[tokio::test]
async fn test_create_match_posts_arrays() {
    let api = api(Some("tok"));
    api.client
        .mock_response(&url("/api/matches"), 201, json!({ "_id": "x" }));

    let draft = draft();
    api.create_match(&draft).await.unwrap();

    let requests = api.client.requests.borrow();
    let body: serde_json::Value =
        serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["teams"], json!(["Kent", "Essex"]));
    assert_eq!(body["scores"], json!([301, 299]));
    assert_eq!(body["overs"], json!(["50", "49.4"]));
    assert_eq!(body["location"], json!("Canterbury"));
    assert_eq!(body["startTime"], json!("2025-06-01T00:00:00.000Z"));
}

#[tokio::test]
async fn test_create_match_failure_is_not_retried() {
    let api = api(Some("tok"));
    api.client
        .mock_response(&url("/api/matches"), 400, json!({ "error": "bad" }));

    let err = api.create_match(&draft()).await.unwrap_err();
    assert_eq!(err, ClientError::Submission(MSG_SUBMIT_FAILED.into()));
    assert_eq!(api.client.request_count(), 1);
}
