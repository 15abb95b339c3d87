//! Auth module
//!
//! Wraps the [`SessionStore`] in a signal so views and the router react to
//! login/logout. The router only receives a derived `Signal<bool>`.

use crate::api::CricketApi;
use crate::error::ClientError;
use crate::session::{SessionStore, Token};
use crate::web::{HttpClient, LocalTokenStore};
use leptos::logging::log;
use leptos::prelude::*;

/// Auth context, shared through Leptos context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<SessionStore<LocalTokenStore>>,
}

impl AuthContext {
    /// Restores the persisted session from LocalStorage.
    pub fn initialize() -> Self {
        let store = SessionStore::initialize(LocalTokenStore);
        log!(
            "[Auth] startup: {}",
            if store.is_authenticated() {
                "restored session"
            } else {
                "signed out"
            }
        );
        Self {
            session: RwSignal::new(store),
        }
    }

    /// Derived signal injected into the router.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.is_authenticated()))
    }

    /// Current token, without subscribing.
    pub fn token(&self) -> Option<Token> {
        self.session.with_untracked(|s| s.token().cloned())
    }

    pub fn sign_in(&self, token: Token) {
        self.session.update(|s| s.login(token));
        log!("[Auth] signed in");
    }

    /// Navigation is handled by the router watching the auth signal.
    pub fn sign_out(&self) {
        self.session.update(|s| s.logout());
        log!("[Auth] signed out");
    }
}

/// Get the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// Exchanges credentials for a token and starts the session.
pub async fn login<C: HttpClient>(
    ctx: &AuthContext,
    api: &CricketApi<C>,
    email: &str,
    password: &str,
) -> Result<(), ClientError> {
    let token = api.login(email, password).await?;
    ctx.sign_in(token);
    Ok(())
}

pub fn logout(ctx: &AuthContext) {
    ctx.sign_out();
}
