//! Presentation fields derived from a [`Match`]: tournament class and result.

use std::sync::LazyLock;

use regex::Regex;
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::Match;

/// Display grouping inferred from the tournament name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TournamentClass {
    International,
    League,
    Domestic,
    Women,
}

/// Case-insensitive substring rules, first match wins.
///
/// Order matters: "Women's Premier League" is Women, not League.
pub fn classify(tournament: &str) -> TournamentClass {
    let name = tournament.to_lowercase();
    if name.contains("women") {
        TournamentClass::Women
    } else if name.contains("league") {
        TournamentClass::League
    } else if ["cup", "trophy", "tour of"]
        .iter()
        .any(|needle| name.contains(needle))
    {
        TournamentClass::International
    } else {
        TournamentClass::Domestic
    }
}

/// Filter bar selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClassFilter {
    #[default]
    All,
    Only(TournamentClass),
}

impl ClassFilter {
    /// Filter tabs in display order.
    pub fn tabs() -> impl Iterator<Item = ClassFilter> {
        std::iter::once(ClassFilter::All).chain(TournamentClass::iter().map(ClassFilter::Only))
    }

    pub fn label(&self) -> String {
        match self {
            ClassFilter::All => "All".to_string(),
            ClassFilter::Only(class) => class.to_string(),
        }
    }

    pub fn accepts(&self, class: TournamentClass) -> bool {
        match self {
            ClassFilter::All => true,
            ClassFilter::Only(wanted) => *wanted == class,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Winner(String),
    Draw,
}

static RUNS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)").expect("runs pattern compiles"));

/// Leading run count of a score such as `245/6`. `-` and scores that do not
/// start with a digit have none.
pub fn parse_runs(score: &str) -> Option<u64> {
    RUNS_RE.captures(score)?.get(1)?.as_str().parse().ok()
}

pub fn is_complete(status: &str) -> bool {
    status.to_lowercase().contains("complete")
}

/// Winner by higher run count. `None` when the match is not complete or a
/// score cannot be read; the caller then shows the raw status.
pub fn derive_outcome(m: &Match) -> Option<Outcome> {
    if !is_complete(&m.status) {
        return None;
    }
    let runs1 = parse_runs(&m.team1.score)?;
    let runs2 = parse_runs(&m.team2.score)?;
    Some(match runs1.cmp(&runs2) {
        std::cmp::Ordering::Greater => Outcome::Winner(m.team1.name.clone()),
        std::cmp::Ordering::Less => Outcome::Winner(m.team2.name.clone()),
        std::cmp::Ordering::Equal => Outcome::Draw,
    })
}

impl Match {
    pub fn classification(&self) -> TournamentClass {
        classify(&self.tournament)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        derive_outcome(self)
    }

    /// Result line: `"<team> Won"`, `"Draw"`, or the raw status.
    pub fn result_line(&self) -> String {
        match self.outcome() {
            Some(Outcome::Winner(name)) => format!("{} Won", name),
            Some(Outcome::Draw) => "Draw".to_string(),
            None => self.status.clone(),
        }
    }
}
