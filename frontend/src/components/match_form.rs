mod form_state;

use crate::api::api_client;
use crate::auth::use_auth;
use crate::config::use_config;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crickboard_shared::{Field, MatchCategory, Side};
use form_state::FormState;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::str::FromStr;

const STATUSES: [MatchCategory; 3] = [
    MatchCategory::Upcoming,
    MatchCategory::Live,
    MatchCategory::Recent,
];

/// One labelled input bound to a draft field.
#[component]
fn FieldInput(
    state: FormState,
    field: Field,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let border = move || {
        if state.error(field).is_some() {
            "w-full px-3 py-2 border rounded-md border-red-500"
        } else {
            "w-full px-3 py-2 border rounded-md border-gray-300"
        }
    };

    view! {
        <div class="mb-3">
            <label class="block text-sm font-medium mb-1">{field.label()}</label>
            <input
                type=input_type
                class=border
                prop:value=move || state.input(field)
                on:input=move |ev| state.set_input(field, &event_target_value(&ev))
                on:blur=move |_| state.blur(field)
            />
            {move || {
                state
                    .error(field)
                    .map(|msg| view! { <p class="text-red-600 text-xs mt-1">{msg}</p> })
            }}
        </div>
    }
}

#[component]
fn TeamSection(state: FormState, side: Side) -> impl IntoView {
    view! {
        <fieldset class="border rounded-md p-4">
            <legend class="px-1 font-semibold">{format!("Team {}", side.letter())}</legend>
            <FieldInput state=state field=Field::TeamName(side) />
            <div class="grid grid-cols-3 gap-2">
                <FieldInput state=state field=Field::Score(side) input_type="number" />
                <FieldInput state=state field=Field::Wickets(side) input_type="number" />
                <FieldInput state=state field=Field::Overs(side) />
            </div>
        </fieldset>
    }
}

#[component]
pub fn MatchFormPage() -> impl IntoView {
    let auth = use_auth();
    let config = use_config();
    let router = use_router();
    let state = FormState::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.submitting.get_untracked() {
            return;
        }
        let Some(draft) = state.submit() else {
            return;
        };

        state.submitting.set(true);
        let api = api_client(&config, &auth);

        spawn_local(async move {
            let result = api.create_match(&draft).await;
            match state.finish(result) {
                Some(Ok(())) => {
                    log!("[MatchForm] match created");
                    router.navigate_to(AppRoute::Matches);
                }
                Some(Err(e)) => {
                    log!("[MatchForm] submit failed: {}", e);
                    let _ = window().alert_with_message(&e.to_string());
                }
                None => {}
            }
        });
    };

    let on_status = move |ev: leptos::ev::Event| {
        if let Ok(status) = MatchCategory::from_str(&event_target_value(&ev)) {
            state.model.update(|m| m.set_status(status));
        }
    };

    view! {
        <div class="min-h-screen bg-gray-100 p-4 md:p-8">
            <div class="max-w-2xl mx-auto bg-white rounded-lg shadow p-6">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-2xl font-bold">"Add Match"</h2>
                    <button
                        type="button"
                        class="text-sm text-blue-600 hover:underline"
                        on:click=move |_| router.navigate_to(AppRoute::Matches)
                    >
                        "Back to matches"
                    </button>
                </div>

                <form on:submit=on_submit novalidate class="space-y-4">
                    <div class="grid gap-4 md:grid-cols-2">
                        <TeamSection state=state side=Side::A />
                        <TeamSection state=state side=Side::B />
                    </div>

                    <FieldInput state=state field=Field::Location />
                    <FieldInput state=state field=Field::Date input_type="date" />

                    <div class="mb-3">
                        <label class="block text-sm font-medium mb-1">"Status"</label>
                        <select class="w-full px-3 py-2 border rounded-md border-gray-300" on:change=on_status>
                            {STATUSES
                                .into_iter()
                                .map(move |status| {
                                    view! {
                                        <option
                                            value=status.to_string()
                                            selected=move || {
                                                state.model.with(|m| m.draft.status == status)
                                            }
                                        >
                                            {status.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <button
                        type="submit"
                        class="w-full py-3 rounded bg-green-600 text-white font-bold hover:bg-green-700"
                        disabled=move || state.submitting.get()
                    >
                        {move || if state.submitting.get() { "Adding..." } else { "Add Match" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
