//! Router service
//!
//! All `window.history` access lives here. Every navigation, `popstate` and
//! auth change runs through [`guard`] before the route signal is updated.

use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, GuardDecision, guard, resolve};

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Router service
///
/// The auth state is injected as a signal so the router does not depend on
/// the auth module.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let requested = AppRoute::from_path(&current_path());
        let initial = guard(is_authenticated.get_untracked(), requested);
        if let GuardDecision::Redirect(target) = initial {
            replace_history_state(target.to_path());
        }
        let (current_route, set_route) = signal(initial.route());

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn is_authenticated(&self) -> Signal<bool> {
        self.is_authenticated
    }

    pub fn navigate_to(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    /// `use_push` picks pushState over replaceState.
    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let decision = guard(self.is_authenticated.get_untracked(), target_route);
        if let GuardDecision::Redirect(to) = decision {
            log!("[Router] {} -> redirect to {}", target_route, to);
        }

        let route = decision.route();
        if use_push {
            push_history_state(route.to_path());
        } else {
            replace_history_state(route.to_path());
        }
        self.set_route.set(route);
    }

    /// Back/forward buttons
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            router.navigate_to_route(target_route, false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Lives as long as the page.
        closure.forget();
    }

    /// Re-runs the guard on the current route whenever auth state flips,
    /// e.g. a logout while a protected page is open.
    fn setup_auth_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let route = router.current_route.get_untracked();

            if let GuardDecision::Redirect(to) = guard(is_auth, route) {
                log!("[Router] auth changed (signed in: {}), redirecting to {}", is_auth, to);
                push_history_state(to.to_path());
                router.set_route.set(to);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI components
// ============================================================================

/// Provides the router context. Place at the root of the app.
#[component]
pub fn Router(is_authenticated: Signal<bool>, children: Children) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// Renders the current route.
///
/// The guard runs again on every change, so a protected view is never drawn
/// for a signed-out session even before the redirect effect fires. The
/// resolved route is memoized: when the effect then moves `current_route`
/// to the same target, the page is not rebuilt.
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();
    let shown = Memo::new(move |_| {
        resolve(router.is_authenticated().get(), router.current_route().get())
    });

    move || matcher(shown.get())
}
