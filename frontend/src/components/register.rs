use crate::api::api_client;
use crate::auth::use_auth;
use crate::components::credentials::{CredentialFields, CredentialsState, RouteLink};
use crate::config::use_config;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let config = use_config();
    let router = use_router();
    let state = CredentialsState::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        state.server_error.set(None);
        if !state.validate() {
            return;
        }

        state.submitting.set(true);
        let api = api_client(&config, &auth);
        let email = state.email.get_untracked();
        let password = state.password.get_untracked();

        spawn_local(async move {
            match api.register(&email, &password).await {
                Ok(()) => {
                    state.submitting.try_set(false);
                    let _ = window().alert_with_message("Registration successful! Please login.");
                    router.navigate_to(AppRoute::Login);
                }
                Err(e) => {
                    log!("[Register] rejected: {}", e);
                    state.server_error.try_set(Some(e.to_string()));
                    state.submitting.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-100">
            <div class="bg-white p-8 rounded-lg shadow-md w-full max-w-sm">
                <h2 class="text-2xl font-bold mb-6 text-center">"Create account"</h2>
                <form on:submit=on_submit novalidate>
                    <CredentialFields state=state />
                    <button
                        type="submit"
                        class="w-full py-3 rounded bg-green-600 text-white font-bold text-lg hover:bg-green-700 transition-colors"
                        disabled=move || state.submitting.get()
                    >
                        "Create new account"
                    </button>
                </form>

                <p class="mt-4 text-center text-sm">
                    "Already have an account? "
                    <RouteLink to=AppRoute::Login>"Log in"</RouteLink>
                </p>
            </div>
        </div>
    }
}
