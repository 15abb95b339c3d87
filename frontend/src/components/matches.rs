use crate::api::api_client;
use crate::auth::{logout, use_auth};
use crate::board::{MatchBoard, MatchView, TabState, fetch_for};
use crate::config::use_config;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crickboard_shared::{ClassFilter, MatchCategory};
use leptos::prelude::*;
use leptos::task::spawn_local;

const TABS: [MatchCategory; 3] = [
    MatchCategory::Live,
    MatchCategory::Recent,
    MatchCategory::Upcoming,
];

fn tab_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-md bg-blue-600 text-white font-semibold"
    } else {
        "px-4 py-2 rounded-md bg-white text-gray-700 hover:bg-gray-200"
    }
}

fn chip_class(active: bool) -> &'static str {
    if active {
        "px-3 py-1 rounded-full text-sm bg-gray-800 text-white"
    } else {
        "px-3 py-1 rounded-full text-sm bg-gray-200 text-gray-700 hover:bg-gray-300"
    }
}

#[component]
pub fn MatchesPage() -> impl IntoView {
    let auth = use_auth();
    let config = use_config();
    let router = use_router();
    let board = RwSignal::new(MatchBoard::new());

    // Every tab click refetches. Late results for an abandoned tab are
    // dropped by the board.
    let open_tab = Callback::new(move |category: MatchCategory| {
        let Some(ticket) = board.try_update(|b| b.select(category)) else {
            return;
        };
        let api = api_client(&config, &auth);
        spawn_local(async move {
            let (ticket, matches) = fetch_for(&api, ticket).await;
            board.try_update(|b| b.complete(ticket, matches));
        });
    });

    open_tab.run(MatchCategory::Live);

    let selected = move || board.with(|b| b.selected());
    let on_logout = move |_| logout(&auth);

    view! {
        <div class="min-h-screen bg-gray-100 p-4 md:p-8">
            <div class="max-w-5xl mx-auto space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-3xl font-bold">"Cricket Matches"</h1>
                    <button
                        class="px-4 py-2 rounded-md border border-red-500 text-red-600 hover:bg-red-50"
                        on:click=on_logout
                    >
                        "Logout"
                    </button>
                </div>

                <div class="flex flex-wrap gap-2">
                    {TABS
                        .into_iter()
                        .map(move |category| {
                            view! {
                                <button
                                    class=move || tab_class(selected() == category)
                                    on:click=move |_| open_tab.run(category)
                                >
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button
                        class="px-4 py-2 rounded-md bg-green-600 text-white font-semibold hover:bg-green-700 ml-auto"
                        on:click=move |_| router.navigate_to(AppRoute::AddMatch)
                    >
                        "Add Match"
                    </button>
                </div>

                <div class="flex flex-wrap gap-2">
                    {ClassFilter::tabs()
                        .map(move |filter| {
                            view! {
                                <button
                                    class=move || chip_class(board.with(|b| b.filter()) == filter)
                                    on:click=move |_| board.update(|b| b.set_filter(filter))
                                >
                                    {filter.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <MatchList board=board />
            </div>
        </div>
    }
}

#[component]
fn MatchList(board: RwSignal<MatchBoard>) -> impl IntoView {
    let show_result = move || board.with(|b| b.selected() == MatchCategory::Recent);

    move || {
        let (loading, loaded) = board.with(|b| {
            (
                b.is_loading(),
                matches!(b.state(), TabState::Loaded(_)),
            )
        });
        if loading || !loaded {
            return view! {
                <p class="text-center text-gray-500 py-8">"Loading matches..."</p>
            }
            .into_any();
        }

        let cards: Vec<(usize, MatchView)> =
            board.with(|b| b.visible()).into_iter().enumerate().collect();
        if cards.is_empty() {
            return view! {
                <p class="text-center text-gray-500 py-8">"No matches available"</p>
            }
            .into_any();
        }

        view! {
            <div class="grid gap-4 md:grid-cols-2">
                <For
                    each=move || cards.clone()
                    key=|(i, card)| format!("{}-{}", i, card.key)
                    children=move |(_, card)| {
                        view! { <MatchCard card=card show_result=show_result() /> }
                    }
                />
            </div>
        }
        .into_any()
    }
}

#[component]
fn MatchCard(card: MatchView, show_result: bool) -> impl IntoView {
    let live_badge = card.is_live.then(|| {
        view! {
            <span class="px-2 py-0.5 rounded bg-red-600 text-white text-xs font-bold">"LIVE"</span>
        }
    });
    let result = (show_result && !card.result.is_empty()).then(|| {
        view! { <p class="mt-2 font-semibold text-green-700">{card.result.clone()}</p> }
    });

    view! {
        <div class="bg-white rounded-lg shadow p-4">
            <div class="flex items-center justify-between mb-1">
                <span class="text-sm text-gray-500">{card.tournament}</span>
                {live_badge}
            </div>
            <h3 class="font-bold text-lg">{card.title}</h3>
            <p class="text-xs text-gray-400 mb-2">{card.class.to_string()}</p>
            <p>{card.team1_line}</p>
            <p>{card.team2_line}</p>
            {result}
            <p class="mt-2 text-sm text-gray-600">{card.status}</p>
            <p class="text-sm text-gray-600">"Start: " {card.start}</p>
            <p class="text-sm text-gray-600">"Venue: " {card.venue}</p>
        </div>
    }
}
