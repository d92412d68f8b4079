// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API boundary.
//!
//! Requests carry optional fields so that field presence can be checked
//! explicitly and reported per field. Dates and timestamps cross the wire
//! as ISO 8601 strings; parsing happens in the handlers.

use serde::{Deserialize, Serialize};

use matchday::{HeadToHead, OpponentRetrospective, RankingEntry, Retrospective};
use matchday_domain::{Club, Match, Stadium, format_date, format_datetime};
use matchday_persistence::PageResult;

/// Request to create or update a club.
#[derive(Debug, Clone, Deserialize)]
pub struct ClubRequest {
    /// The club name.
    pub name: Option<String>,
    /// The two-letter region code.
    pub region: Option<String>,
    /// The founding date, `YYYY-MM-DD`.
    pub founded: Option<String>,
    /// Whether the club is active. Defaults to `true` on creation.
    pub active: Option<bool>,
}

/// A club as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClubResponse {
    pub id: i64,
    pub name: String,
    pub region: String,
    pub founded: String,
    pub active: bool,
}

impl From<Club> for ClubResponse {
    fn from(club: Club) -> Self {
        Self {
            id: club.id,
            name: club.name,
            region: club.region,
            founded: format_date(club.founded),
            active: club.active,
        }
    }
}

/// Query parameters accepted by the club list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClubListQuery {
    /// Substring filter on the name.
    pub name: Option<String>,
    /// Exact region code filter.
    pub region: Option<String>,
    /// Active flag filter.
    pub active: Option<bool>,
    /// Exact founding date filter, `YYYY-MM-DD`.
    pub founded: Option<String>,
    /// Sort column: `id`, `name`, `region`, or `founded`.
    pub sort: Option<String>,
    /// Sort direction: `asc` or `desc`.
    pub direction: Option<String>,
    /// Zero-based page number.
    pub page: Option<i64>,
    /// Page size, capped server-side.
    pub size: Option<i64>,
}

/// Request to create or rename a stadium.
#[derive(Debug, Clone, Deserialize)]
pub struct StadiumRequest {
    /// The stadium name.
    pub name: Option<String>,
}

/// A stadium as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StadiumResponse {
    pub id: i64,
    pub name: String,
}

impl From<Stadium> for StadiumResponse {
    fn from(stadium: Stadium) -> Self {
        Self {
            id: stadium.id,
            name: stadium.name,
        }
    }
}

/// Query parameters accepted by the stadium list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StadiumListQuery {
    /// Zero-based page number.
    pub page: Option<i64>,
    /// Page size, capped server-side.
    pub size: Option<i64>,
}

/// Request to create or update a match.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    /// The home club id.
    pub home_club_id: Option<i64>,
    /// The away club id.
    pub away_club_id: Option<i64>,
    /// Goals scored by the home club.
    pub home_goals: Option<i32>,
    /// Goals scored by the away club.
    pub away_goals: Option<i32>,
    /// The stadium name.
    pub stadium: Option<String>,
    /// The kickoff, `YYYY-MM-DDTHH:MM:SS`.
    pub kickoff: Option<String>,
}

/// A match as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResponse {
    pub id: i64,
    pub home_club_id: i64,
    pub away_club_id: i64,
    pub home_goals: i32,
    pub away_goals: i32,
    pub stadium: String,
    pub kickoff: String,
}

impl From<Match> for MatchResponse {
    fn from(m: Match) -> Self {
        Self {
            id: m.id,
            home_club_id: m.home_club_id,
            away_club_id: m.away_club_id,
            home_goals: m.home_goals,
            away_goals: m.away_goals,
            stadium: m.stadium,
            kickoff: format_datetime(m.kickoff),
        }
    }
}

/// Query parameters accepted by the match list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchListQuery {
    /// Substring filter on the stadium name.
    pub stadium: Option<String>,
    /// Exact home score filter.
    pub home_goals: Option<i32>,
    /// Exact away score filter.
    pub away_goals: Option<i32>,
    /// Exact kickoff filter, `YYYY-MM-DDTHH:MM:SS`.
    pub kickoff: Option<String>,
    /// Zero-based page number.
    pub page: Option<i64>,
    /// Page size, capped server-side.
    pub size: Option<i64>,
}

/// One page of results plus paging metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total: i64,
}

impl<T> PageResponse<T> {
    /// Converts a store page into a response page, mapping each item.
    pub fn from_page<S>(page: PageResult<S>, convert: impl Fn(S) -> T) -> Self {
        Self {
            items: page.items.into_iter().map(convert).collect(),
            page: page.page,
            size: page.size,
            total: page.total,
        }
    }
}

/// A club's all-time record across every match it played.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetrospectiveResponse {
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

impl From<Retrospective> for RetrospectiveResponse {
    fn from(r: Retrospective) -> Self {
        Self {
            club_id: r.club_id,
            club_name: r.club_name,
            games: r.games,
            wins: r.wins,
            draws: r.draws,
            losses: r.losses,
            goals_for: r.goals_for,
            goals_against: r.goals_against,
            goal_difference: r.goal_difference,
        }
    }
}

/// A club's record against one opponent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpponentRecordResponse {
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

impl From<OpponentRetrospective> for OpponentRecordResponse {
    fn from(r: OpponentRetrospective) -> Self {
        Self {
            opponent_id: r.opponent_id,
            opponent_name: r.opponent_name,
            games: r.games,
            wins: r.wins,
            draws: r.draws,
            losses: r.losses,
            goals_for: r.goals_for,
            goals_against: r.goals_against,
            goal_difference: r.goal_difference,
        }
    }
}

/// The direct record between two clubs, with the matches behind it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeadToHeadResponse {
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
    pub matches: Vec<MatchResponse>,
}

impl From<HeadToHead> for HeadToHeadResponse {
    fn from(h: HeadToHead) -> Self {
        Self {
            first_club_id: h.first_club_id,
            first_club_name: h.first_club_name,
            second_club_id: h.second_club_id,
            second_club_name: h.second_club_name,
            games: h.games,
            first_wins: h.first_wins,
            draws: h.draws,
            second_wins: h.second_wins,
            first_goals: h.first_goals,
            second_goals: h.second_goals,
            matches: h.matches.into_iter().map(MatchResponse::from).collect(),
        }
    }
}

/// One row of the league ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankingEntryResponse {
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

impl From<RankingEntry> for RankingEntryResponse {
    fn from(e: RankingEntry) -> Self {
        Self {
            position: e.position,
            club_id: e.club_id,
            club_name: e.club_name,
            points: e.points,
            games: e.games,
            wins: e.wins,
            draws: e.draws,
            losses: e.losses,
            goals_for: e.goals_for,
            goals_against: e.goals_against,
            goal_difference: e.goal_difference,
        }
    }
}

/// Query parameters accepted by the ranking endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankingQuery {
    /// Ranking criterion; defaults to points.
    pub criterion: Option<String>,
}
