use crate::api::api_client;
use crate::auth::{login, use_auth};
use crate::components::credentials::{CredentialFields, CredentialsState, RouteLink};
use crate::config::use_config;
use crate::web::route::AppRoute;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let config = use_config();
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
            match login(&auth, &api, &email, &password).await {
                // The router sees the auth change and leaves this page.
                Ok(()) => {}
                Err(e) => {
                    log!("[Login] rejected: {}", e);
                    state.server_error.try_set(Some(e.to_string()));
                    state.submitting.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-100">
            <div class="bg-white p-8 rounded-lg shadow-md w-full max-w-sm">
                <h2 class="text-2xl font-bold mb-6 text-center">"Login"</h2>
                <form on:submit=on_submit novalidate>
                    <CredentialFields state=state />
                    <button
                        type="submit"
                        class="w-full py-3 rounded bg-blue-600 text-white font-bold text-lg hover:bg-blue-700 transition-colors"
                        disabled=move || state.submitting.get()
                    >
                        {move || if state.submitting.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>

                <p class="mt-4 text-center text-sm">
                    "Don't have an account? "
                    <RouteLink to=AppRoute::Register>"Create new account"</RouteLink>
                </p>
            </div>
        </div>
    }
}
