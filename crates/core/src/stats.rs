// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;

use matchday_domain::{Club, Match};

/// Name used when an opponent id no longer resolves to a club.
pub const UNKNOWN_CLUB: &str = "unknown club";

/// Win/draw/loss and goal accumulator from one club's perspective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Tally {
    pub games: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: i64,
    pub goals_against: i64,
}

impl Tally {
    /// Records one match outcome given own and opponent goals.
    pub fn record(&mut self, goals_for: i32, goals_against: i32) {
        self.games += 1;
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => self.wins += 1,
            std::cmp::Ordering::Equal => self.draws += 1,
            std::cmp::Ordering::Less => self.losses += 1,
        }
        self.goals_for += i64::from(goals_for);
        self.goals_against += i64::from(goals_against);
    }

    pub const fn goal_difference(&self) -> i64 {
        self.goals_for - self.goals_against
    }

    /// League points: three per win, one per draw.
    pub const fn points(&self) -> u32 {
        self.wins * 3 + self.draws
    }
}

/// Aggregate win/draw/loss and goal record for one club across all its
/// matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retrospective {
    pub club_id: i64,
    pub club_name: String,
    pub games: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: i64,
    pub goals_against: i64,
    pub goal_difference: i64,
}

impl Retrospective {
    fn from_tally(club_id: i64, club_name: String, tally: &Tally) -> Self {
        Self {
            club_id,
            club_name,
            games: tally.games,
            wins: tally.wins,
            draws: tally.draws,
            losses: tally.losses,
            goals_for: tally.goals_for,
            goals_against: tally.goals_against,
            goal_difference: tally.goal_difference(),
        }
    }
}

/// Aggregate record of the matches between exactly two clubs, from the first
/// club's perspective, with the underlying matches listed kickoff-descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadToHead {
    pub first_club_id: i64,
    pub first_club_name: String,
    pub second_club_id: i64,
    pub second_club_name: String,
    pub games: u32,
    pub first_wins: u32,
    pub draws: u32,
    pub second_wins: u32,
    pub first_goals: i64,
    pub second_goals: i64,
    pub matches: Vec<Match>,
}

/// One club's aggregate record against a single opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentRetrospective {
    pub opponent_id: i64,
    pub opponent_name: String,
    pub games: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: i64,
    pub goals_against: i64,
    pub goal_difference: i64,
}

/// Computes a club's full retrospective over the given matches.
///
/// Matches not involving the club are ignored, so callers may pass either a
/// pre-filtered list or the full history. A club with no matches yields
/// all-zero counters.
#[must_use]
pub fn retrospective(club: &Club, matches: &[Match]) -> Retrospective {
    let mut tally: Tally = Tally::default();
    for m in matches.iter().filter(|m| m.involves(club.id)) {
        tally.record(m.goals_for(club.id), m.goals_against(club.id));
    }
    Retrospective::from_tally(club.id, club.name.clone(), &tally)
}

/// Computes the head-to-head record between two clubs.
///
/// Only matches where both clubs appear (in either home/away order) count.
/// The returned match list is ordered by kickoff descending; swapping the
/// argument order swaps the win counters and goal totals but leaves the draw
/// count and match list identical.
#[must_use]
pub fn head_to_head(first: &Club, second: &Club, matches: &[Match]) -> HeadToHead {
    let mut between: Vec<Match> = matches
        .iter()
        .filter(|m| m.involves(first.id) && m.involves(second.id))
        .cloned()
        .collect();
    between.sort_by(|a, b| b.kickoff.cmp(&a.kickoff));

    let mut tally: Tally = Tally::default();
    for m in &between {
        tally.record(m.goals_for(first.id), m.goals_against(first.id));
    }

    HeadToHead {
        first_club_id: first.id,
        first_club_name: first.name.clone(),
        second_club_id: second.id,
        second_club_name: second.name.clone(),
        games: tally.games,
        first_wins: tally.wins,
        draws: tally.draws,
        second_wins: tally.losses,
        first_goals: tally.goals_for,
        second_goals: tally.goals_against,
        matches: between,
    }
}

/// Groups a club's match history by opponent and computes one record per
/// opponent, sorted by opponent name ascending.
///
/// Opponent ids absent from `names` get the [`UNKNOWN_CLUB`] sentinel.
#[must_use]
pub fn opponent_breakdown(
    club: &Club,
    matches: &[Match],
    names: &HashMap<i64, String>,
) -> Vec<OpponentRetrospective> {
    let mut per_opponent: HashMap<i64, Tally> = HashMap::new();
    for m in matches.iter().filter(|m| m.involves(club.id)) {
        let Some(opponent_id) = m.opponent_of(club.id) else {
            continue;
        };
        per_opponent
            .entry(opponent_id)
            .or_default()
            .record(m.goals_for(club.id), m.goals_against(club.id));
    }

    let mut breakdown: Vec<OpponentRetrospective> = per_opponent
        .into_iter()
        .map(|(opponent_id, tally)| OpponentRetrospective {
            opponent_id,
            opponent_name: names
                .get(&opponent_id)
                .cloned()
                .unwrap_or_else(|| String::from(UNKNOWN_CLUB)),
            games: tally.games,
            wins: tally.wins,
            draws: tally.draws,
            losses: tally.losses,
            goals_for: tally.goals_for,
            goals_against: tally.goals_against,
            goal_difference: tally.goal_difference(),
        })
        .collect();

    breakdown.sort_by(|a, b| {
        a.opponent_name
            .cmp(&b.opponent_name)
            .then_with(|| a.opponent_id.cmp(&b.opponent_id))
    });
    breakdown
}
