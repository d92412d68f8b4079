// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test module for the persistence crate.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use time::macros::date;

use matchday_domain::{ClubFields, MatchFields};

use crate::SqliteStore;

pub fn create_test_store() -> SqliteStore {
    SqliteStore::new_in_memory().unwrap()
}

pub fn create_test_club_fields(name: &str, region: &str) -> ClubFields {
    ClubFields {
        name: String::from(name),
        region: String::from(region),
        founded: date!(2000 - 01 - 01),
        active: true,
    }
}

pub fn create_test_match_fields(
    home_club_id: i64,
    away_club_id: i64,
    kickoff: time::PrimitiveDateTime,
) -> MatchFields {
    MatchFields {
        home_club_id,
        away_club_id,
        home_goals: 2,
        away_goals: 1,
        stadium: String::from("Maracana"),
        kickoff,
    }
}
