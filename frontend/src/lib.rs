//! Crickboard frontend
//!
//! Context-driven layout:
//! - `web::route`: routes and the access guard (pure)
//! - `web::router`: history-backed router service
//! - `session` / `auth`: token persistence and the reactive auth context
//! - `api`: remote client over an injectable HTTP transport
//! - `board`: match list tab/filter state
//! - `components`: UI

mod api;
mod auth;
mod board;
mod config;
mod error;
mod session;
mod components {
    pub mod credentials;
    pub mod login;
    pub mod match_form;
    pub mod matches;
    pub mod register;
}

use crate::auth::AuthContext;
use crate::components::login::LoginPage;
use crate::components::match_form::MatchFormPage;
use crate::components::matches::MatchesPage;
use crate::components::register::RegisterPage;
use crate::config::AppConfig;

use leptos::prelude::*;

// Browser API wrappers
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::{FetchHttpClient, HttpClient, HttpRequest, HttpResponse};
    #[cfg(test)]
    pub use http::MockHttpClient;
    pub use storage::LocalTokenStore;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// Maps the (already guarded) route to its page.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Matches => view! { <MatchesPage /> }.into_any(),
        AppRoute::AddMatch => view! { <MatchFormPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="min-h-screen flex items-center justify-center bg-gray-100">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-red-600">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::from_build_env());

    // Session restored from LocalStorage before the first route is resolved
    let auth_ctx = AuthContext::initialize();
    provide_context(auth_ctx);

    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
