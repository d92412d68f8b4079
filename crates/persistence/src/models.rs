// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types bridging the SQLite schema and the domain model.
//!
//! Dates and timestamps live in the database as fixed-width ISO 8601 text,
//! so range filters can compare them lexicographically. Parsing back into
//! typed values happens here; a failure means the row was written by
//! something other than this crate and surfaces as `CorruptRecord`.

use diesel::prelude::Queryable;
use matchday_domain::{Club, Match, Stadium, parse_date, parse_datetime};

use crate::error::PersistenceError;

/// A row of the `clubs` table.
#[derive(Debug, Queryable)]
pub struct ClubRow {
    pub id: i64,
    pub name: String,
    pub region: String,
    pub founded: String,
    pub active: i32,
}

impl ClubRow {
    pub fn into_domain(self) -> Result<Club, PersistenceError> {
        let founded = parse_date(&self.founded).map_err(|e| PersistenceError::CorruptRecord {
            table: "clubs",
            id: self.id,
            reason: e.to_string(),
        })?;
        Ok(Club {
            id: self.id,
            name: self.name,
            region: self.region,
            founded,
            active: self.active != 0,
        })
    }
}

/// A row of the `stadiums` table.
#[derive(Debug, Queryable)]
pub struct StadiumRow {
    pub id: i64,
    pub name: String,
}

impl StadiumRow {
    pub fn into_domain(self) -> Stadium {
        Stadium {
            id: self.id,
            name: self.name,
        }
    }
}

/// A row of the `matches` table.
#[derive(Debug, Queryable)]
pub struct MatchRow {
    pub id: i64,
    pub home_club_id: i64,
    pub away_club_id: i64,
    pub home_goals: i32,
    pub away_goals: i32,
    pub stadium: String,
    pub kickoff: String,
}

impl MatchRow {
    pub fn into_domain(self) -> Result<Match, PersistenceError> {
        let kickoff =
            parse_datetime(&self.kickoff).map_err(|e| PersistenceError::CorruptRecord {
                table: "matches",
                id: self.id,
                reason: e.to_string(),
            })?;
        Ok(Match {
            id: self.id,
            home_club_id: self.home_club_id,
            away_club_id: self.away_club_id,
            home_goals: self.home_goals,
            away_goals: self.away_goals,
            stadium: self.stadium,
            kickoff,
        })
    }
}

/// Converts a loaded row set, failing on the first corrupt record.
pub fn rows_into_domain<R, T>(
    rows: Vec<R>,
    convert: impl Fn(R) -> Result<T, PersistenceError>,
) -> Result<Vec<T>, PersistenceError> {
    rows.into_iter().map(convert).collect()
}
