use crickboard_shared::protocol::{
    ApiRequest, ErrorResponse, HttpMethod, ListMatchesRequest, LoginRequest, RegisterRequest,
};
use crickboard_shared::{HEADER_AUTHORIZATION, Match, MatchCategory, MatchDraft};
use leptos::logging::warn;

use crate::auth::AuthContext;
use crate::config::AppConfig;
use crate::error::{ApiError, ClientError};
use crate::session::Token;
use crate::web::{FetchHttpClient, HttpClient, HttpRequest, HttpResponse};

pub const MSG_LOGIN_FAILED: &str = "Login failed. Check your credentials.";
pub const MSG_REGISTER_FAILED: &str = "Registration failed.";
pub const MSG_SUBMIT_FAILED: &str = "Error adding match";

/// Client for the cricket score API.
#[derive(Clone, Debug)]
pub struct CricketApi<C> {
    base_url: String,
    token: Option<Token>,
    client: C,
}

impl<C: HttpClient> CricketApi<C> {
    pub fn new(base_url: &str, token: Option<Token>, client: C) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            token,
            client,
        }
    }

    #[cfg(test)]
    pub fn client(&self) -> &C {
        &self.client
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn build<R: ApiRequest>(&self, req: &R) -> Result<HttpRequest, ApiError> {
        let mut http = HttpRequest::new(&self.url(&req.path()), R::METHOD);
        if let Some(token) = &self.token {
            http = http.with_header(HEADER_AUTHORIZATION, &token.bearer());
        }
        if R::METHOD != HttpMethod::Get {
            let body = serde_json::to_string(req).map_err(|e| ApiError::Decode(e.to_string()))?;
            http = http
                .with_header("Content-Type", "application/json")
                .with_body(body);
        }
        Ok(http)
    }

    /// Sends the request and rejects non-2xx responses.
    async fn execute<R: ApiRequest>(&self, req: &R) -> Result<HttpResponse, ApiError> {
        let response = self.client.send(self.build(req)?).await?;
        if !response.ok() {
            let message = serde_json::from_str::<ErrorResponse>(&response.body)
                .ok()
                .and_then(|e| e.error);
            return Err(ApiError::Status {
                status: response.status,
                message,
            });
        }
        Ok(response)
    }

    async fn call<R: ApiRequest>(&self, req: &R) -> Result<R::Response, ApiError> {
        let response = self.execute(req).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Token, ClientError> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.call(&req)
            .await
            .map(|res| Token::new(res.token))
            .map_err(|e| ClientError::auth(&e, MSG_LOGIN_FAILED))
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<(), ClientError> {
        let req = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.execute(&req)
            .await
            .map(|_| ())
            .map_err(|e| ClientError::auth(&e, MSG_REGISTER_FAILED))
    }

    /// Like [`Self::list_matches`] but keeps the failure.
    pub async fn try_list_matches(
        &self,
        category: MatchCategory,
    ) -> Result<Vec<Match>, ClientError> {
        self.call(&ListMatchesRequest { category })
            .await
            .map(|res| res.matches)
            .map_err(|e| ClientError::Fetch(e.to_string()))
    }

    /// Any failure degrades to an empty list.
    pub async fn list_matches(&self, category: MatchCategory) -> Vec<Match> {
        self.try_list_matches(category).await.unwrap_or_else(|e| {
            warn!("[Api] listing {} matches: {}", category, e);
            Vec::new()
        })
    }

    /// Submits the draft. The draft is only borrowed so the caller keeps the
    /// user's input when this fails.
    pub async fn create_match(&self, draft: &MatchDraft) -> Result<(), ClientError> {
        self.execute(&draft.to_request())
            .await
            .map(|_| ())
            .map_err(|e| {
                warn!("[Api] creating match: {}", e);
                ClientError::Submission(MSG_SUBMIT_FAILED.to_string())
            })
    }
}

/// Browser API client carrying the session's current token.
///
/// Build it when the request is made, not when the component is set up, so
/// a login or logout in between is picked up.
pub fn api_client(config: &AppConfig, auth: &AuthContext) -> CricketApi<FetchHttpClient> {
    CricketApi::new(&config.api_base, auth.token(), FetchHttpClient)
}

#[cfg(test)]
mod tests;
