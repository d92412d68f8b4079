// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, PrimitiveDateTime};

/// A registered football club.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Club {
    /// The store-assigned identifier.
    pub id: i64,
    /// The club name, unique within its region.
    pub name: String,
    /// The two-letter region code, stored uppercase.
    pub region: String,
    /// The founding date. No match involving the club may kick off on or
    /// before this date.
    pub founded: Date,
    /// Whether the club may participate in new matches. Deactivation is the
    /// soft-delete path; the record itself is retained.
    pub active: bool,
}

/// The mutable fields of a club, as accepted on create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubFields {
    pub name: String,
    pub region: String,
    pub founded: Date,
    pub active: bool,
}

/// A registered stadium. Stadiums carry only a unique name; deletion is hard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stadium {
    /// The store-assigned identifier.
    pub id: i64,
    /// The stadium name, globally unique.
    pub name: String,
}

/// A recorded or scheduled match between two clubs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The store-assigned identifier.
    pub id: i64,
    /// The home club id.
    pub home_club_id: i64,
    /// The away club id.
    pub away_club_id: i64,
    /// Goals scored by the home club.
    pub home_goals: i32,
    /// Goals scored by the away club.
    pub away_goals: i32,
    /// The stadium name.
    pub stadium: String,
    /// The kickoff timestamp.
    pub kickoff: PrimitiveDateTime,
}

/// The mutable fields of a match, as accepted on create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchFields {
    pub home_club_id: i64,
    pub away_club_id: i64,
    pub home_goals: i32,
    pub away_goals: i32,
    pub stadium: String,
    pub kickoff: PrimitiveDateTime,
}

impl Match {
    /// Whether the given club plays in this match, home or away.
    #[must_use]
    pub const fn involves(&self, club_id: i64) -> bool {
        self.home_club_id == club_id || self.away_club_id == club_id
    }

    /// The id of the opposing club, if the given club plays in this match.
    #[must_use]
    pub const fn opponent_of(&self, club_id: i64) -> Option<i64> {
        if self.home_club_id == club_id {
            Some(self.away_club_id)
        } else if self.away_club_id == club_id {
            Some(self.home_club_id)
        } else {
            None
        }
    }

    /// Goals scored by the given club in this match.
    #[must_use]
    pub const fn goals_for(&self, club_id: i64) -> i32 {
        if self.home_club_id == club_id {
            self.home_goals
        } else {
            self.away_goals
        }
    }

    /// Goals conceded by the given club in this match.
    #[must_use]
    pub const fn goals_against(&self, club_id: i64) -> i32 {
        if self.home_club_id == club_id {
            self.away_goals
        } else {
            self.home_goals
        }
    }
}
