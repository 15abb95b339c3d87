//! Email/password form pieces shared by the login and register pages.

use crickboard_shared::validation::validate_credentials;
use crickboard_shared::{Field, ValidationErrors};
use leptos::prelude::*;

use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// Signals behind a credentials form.
#[derive(Clone, Copy)]
pub struct CredentialsState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub errors: RwSignal<ValidationErrors>,
    /// Message from the server (bad credentials, unreachable endpoint).
    pub server_error: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
}

impl CredentialsState {
    pub fn new() -> Self {
        Self {
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            errors: RwSignal::new(ValidationErrors::new()),
            server_error: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    /// Replaces the field errors; `true` when the form may be submitted.
    pub fn validate(&self) -> bool {
        let errors = validate_credentials(
            &self.email.get_untracked(),
            &self.password.get_untracked(),
        );
        let ok = errors.is_empty();
        self.errors.set(errors);
        ok
    }

    fn error(&self, field: Field) -> Option<String> {
        self.errors.with(|e| e.get(field).map(str::to_string))
    }
}

impl Default for CredentialsState {
    fn default() -> Self {
        Self::new()
    }
}

fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "w-full mb-3 px-4 py-2 border rounded-md focus:outline-none focus:ring-2 border-red-500"
    } else {
        "w-full mb-3 px-4 py-2 border rounded-md focus:outline-none focus:ring-2 border-gray-300"
    }
}

/// Email and password inputs with inline errors. Blur re-validates.
#[component]
pub fn CredentialFields(state: CredentialsState) -> impl IntoView {
    let on_blur = move |_| {
        state.validate();
    };

    view! {
        <input
            type="email"
            placeholder="Email address"
            class=move || input_class(state.error(Field::Email).is_some())
            prop:value=state.email
            on:input=move |ev| state.email.set(event_target_value(&ev))
            on:blur=on_blur
            aria-invalid=move || state.error(Field::Email).is_some().to_string()
            required
        />
        {move || {
            state
                .error(Field::Email)
                .map(|msg| view! { <div class="text-red-600 text-xs mb-2">{msg}</div> })
        }}

        <input
            type="password"
            placeholder="Password"
            class=move || input_class(state.error(Field::Password).is_some())
            prop:value=state.password
            on:input=move |ev| state.password.set(event_target_value(&ev))
            on:blur=on_blur
            aria-invalid=move || state.error(Field::Password).is_some().to_string()
            required
        />
        {move || {
            state
                .error(Field::Password)
                .map(|msg| view! { <div class="text-red-600 text-xs mb-2">{msg}</div> })
        }}

        {move || {
            state
                .server_error
                .get()
                .map(|msg| view! { <div class="mb-2 text-red-700 text-sm">{msg}</div> })
        }}
    }
}

/// In-app link that goes through the router instead of reloading the page.
#[component]
pub fn RouteLink(to: AppRoute, children: Children) -> impl IntoView {
    let router = use_router();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate_to(to);
    };

    view! {
        <a href=to.to_path() class="text-green-600 hover:underline" on:click=on_click>
            {children()}
        </a>
    }
}
