// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use matchday_domain::{Club, DomainError, Match};

use crate::stats::{Tally, UNKNOWN_CLUB};

/// The sort criterion for the league ranking.
///
/// Wire values are the Portuguese names (`pontos`, `gols`, `vitorias`,
/// `jogos`); the English equivalents are accepted too. Anything else is
/// rejected, never silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingCriterion {
    /// Points, then wins, goal difference, goals for, name.
    #[default]
    Points,
    /// Goals scored, then name.
    Goals,
    /// Wins, then points, goal difference, name.
    Wins,
    /// Games played, then name.
    Games,
}

impl FromStr for RankingCriterion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pontos" | "points" => Ok(Self::Points),
            "gols" | "goals" => Ok(Self::Goals),
            "vitorias" | "wins" => Ok(Self::Wins),
            "jogos" | "games" => Ok(Self::Games),
            _ => Err(DomainError::UnknownRankingCriterion(s.to_string())),
        }
    }
}

/// One row of the league ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    /// Rank position, 1-based, strictly consecutive. Ties are broken by the
    /// criterion's chain, so no two rows share a position.
    pub position: u32,
    pub club_id: i64,
    pub club_name: String,
    pub points: u32,
    pub games: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: i64,
    pub goals_against: i64,
    pub goal_difference: i64,
}

/// Computes the league ranking from the full match history.
///
/// Clubs with zero recorded matches are excluded. The result is a total
/// order: every criterion ends its tie-break chain with the club name, so
/// re-running over the same data yields the identical sequence.
#[must_use]
pub fn ranking(criterion: RankingCriterion, clubs: &[Club], matches: &[Match]) -> Vec<RankingEntry> {
    let names: HashMap<i64, &str> = clubs
        .iter()
        .map(|club| (club.id, club.name.as_str()))
        .collect();

    let mut tallies: HashMap<i64, Tally> = HashMap::new();
    for m in matches {
        tallies
            .entry(m.home_club_id)
            .or_default()
            .record(m.home_goals, m.away_goals);
        tallies
            .entry(m.away_club_id)
            .or_default()
            .record(m.away_goals, m.home_goals);
    }

    let mut entries: Vec<RankingEntry> = tallies
        .into_iter()
        .filter(|(_, tally)| tally.games > 0)
        .map(|(club_id, tally)| RankingEntry {
            position: 0,
            club_id,
            club_name: names
                .get(&club_id)
                .map_or_else(|| String::from(UNKNOWN_CLUB), ToString::to_string),
            points: tally.points(),
            games: tally.games,
            wins: tally.wins,
            draws: tally.draws,
            losses: tally.losses,
            goals_for: tally.goals_for,
            goals_against: tally.goals_against,
            goal_difference: tally.goal_difference(),
        })
        .collect();

    entries.sort_by(|a, b| compare(criterion, a, b));

    for (index, entry) in entries.iter_mut().enumerate() {
        entry.position = u32::try_from(index + 1).unwrap_or(u32::MAX);
    }
    entries
}

/// The tie-break chain for one criterion. Every chain terminates with the
/// club name and id (ascending) so the order is total even when two clubs
/// share a name across regions.
fn compare(criterion: RankingCriterion, a: &RankingEntry, b: &RankingEntry) -> Ordering {
    let by_criterion: Ordering = match criterion {
        RankingCriterion::Points => b
            .points
            .cmp(&a.points)
            .then_with(|| b.wins.cmp(&a.wins))
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
            .then_with(|| b.goals_for.cmp(&a.goals_for)),
        RankingCriterion::Goals => b.goals_for.cmp(&a.goals_for),
        RankingCriterion::Wins => b
            .wins
            .cmp(&a.wins)
            .then_with(|| b.points.cmp(&a.points))
            .then_with(|| b.goal_difference.cmp(&a.goal_difference)),
        RankingCriterion::Games => b.games.cmp(&a.games),
    };
    by_criterion
        .then_with(|| a.club_name.cmp(&b.club_name))
        .then_with(|| a.club_id.cmp(&b.club_id))
}
