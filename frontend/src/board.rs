//! Match board: the tab/filter state behind the match list page.
//!
//! Fetches are never cancelled. Each one carries a [`FetchTicket`] and the
//! board drops any result whose ticket no longer matches the selected tab,
//! so a slow `recent` response cannot overwrite the `live` view the user
//! switched to in the meantime.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};
use crickboard_shared::{ClassFilter, Match, MatchCategory, TeamScore, TournamentClass};
use leptos::logging::log;

use crate::api::CricketApi;
use crate::web::HttpClient;

/// Lifecycle of the selected tab.
///
/// Failed fetches arrive as empty lists and land in `Loaded` too.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TabState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Match>),
}

/// Tag for one outstanding fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub category: MatchCategory,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchBoard {
    selected: MatchCategory,
    filter: ClassFilter,
    state: TabState,
    issued: u64,
    applied: u64,
}

impl MatchBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> MatchCategory {
        self.selected
    }

    pub fn filter(&self) -> ClassFilter {
        self.filter
    }

    pub fn state(&self) -> &TabState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, TabState::Loading)
    }

    /// Enters a tab. The caller must fetch for the returned ticket and hand
    /// the result to [`Self::complete`].
    pub fn select(&mut self, category: MatchCategory) -> FetchTicket {
        self.issued += 1;
        self.selected = category;
        self.state = TabState::Loading;
        FetchTicket {
            category,
            generation: self.issued,
        }
    }

    /// Applies a fetch result. Returns `false` when it was stale and dropped.
    pub fn complete(&mut self, ticket: FetchTicket, matches: Vec<Match>) -> bool {
        if ticket.category != self.selected || ticket.generation <= self.applied {
            log!(
                "[Board] dropping stale {} response (showing {})",
                ticket.category,
                self.selected
            );
            return false;
        }
        self.applied = ticket.generation;
        self.state = TabState::Loaded(matches);
        true
    }

    /// View-only; never triggers a refetch.
    pub fn set_filter(&mut self, filter: ClassFilter) {
        self.filter = filter;
    }

    /// The loaded matches that pass the filter, with display fields.
    pub fn visible(&self) -> Vec<MatchView> {
        let TabState::Loaded(matches) = &self.state else {
            return Vec::new();
        };
        matches
            .iter()
            .map(MatchView::new)
            .filter(|view| self.filter.accepts(view.class))
            .collect()
    }
}

/// Runs the fetch for `ticket`. Listing failures are already empty lists.
pub async fn fetch_for<C: HttpClient>(
    api: &CricketApi<C>,
    ticket: FetchTicket,
) -> (FetchTicket, Vec<Match>) {
    (ticket, api.list_matches(ticket.category).await)
}

// =========================================================
// Display projection
// =========================================================

/// Everything a match card shows.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchView {
    pub key: String,
    pub title: String,
    pub team1_line: String,
    pub team2_line: String,
    pub result: String,
    pub tournament: String,
    pub status: String,
    pub start: String,
    pub venue: String,
    pub is_live: bool,
    pub class: TournamentClass,
}

fn team_name(team: &TeamScore, fallback: &str) -> String {
    if team.name.is_empty() {
        fallback.to_string()
    } else {
        team.name.clone()
    }
}

/// `245/6 (50)`, or `Yet to bat` for a placeholder score.
pub fn score_line(team: &TeamScore) -> String {
    if team.has_batted() {
        format!("{}/{} ({})", team.score, team.wickets, team.overs)
    } else {
        "Yet to bat".to_string()
    }
}

/// `22 Nov, 09:30` in the browser's time zone, or `N/A`.
pub fn start_line(start_time: Option<&str>) -> String {
    start_line_in(start_time, &Local)
}

pub fn start_line_in<Tz>(start_time: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    start_time
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.with_timezone(tz).format("%d %b, %H:%M").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

impl MatchView {
    pub fn new(m: &Match) -> Self {
        Self::in_zone(m, &Local)
    }

    /// Like [`Self::new`] with the start time shown in `tz`.
    pub fn in_zone<Tz>(m: &Match, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            key: m.external_id.clone(),
            title: format!(
                "{} vs {}",
                team_name(&m.team1, "Team 1"),
                team_name(&m.team2, "Team 2")
            ),
            team1_line: score_line(&m.team1),
            team2_line: score_line(&m.team2),
            result: m.result_line(),
            tournament: m.tournament.clone(),
            status: m.status.clone(),
            start: start_line_in(m.start_time.as_deref(), tz),
            venue: m.venue.clone(),
            is_live: m.is_live,
            class: m.classification(),
        }
    }
}
