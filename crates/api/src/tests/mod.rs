// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test module for the API crate.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod match_api_tests;
mod stadium_api_tests;

use time::macros::{date, datetime};
use time::{Date, PrimitiveDateTime};

use matchday_persistence::SqliteStore;

use crate::request_response::{ClubRequest, ClubResponse, MatchRequest, StadiumRequest};
use crate::{create_club, create_match, create_stadium};

pub const TODAY: Date = date!(2025 - 01 - 01);
pub const NOW: PrimitiveDateTime = datetime!(2025 - 01 - 01 12:00:00);

pub fn create_test_store() -> SqliteStore {
    SqliteStore::new_in_memory().unwrap()
}

pub fn create_test_club_request(name: &str, region: &str) -> ClubRequest {
    ClubRequest {
        name: Some(String::from(name)),
        region: Some(String::from(region)),
        founded: Some(String::from("2000-01-01")),
        active: Some(true),
    }
}

pub fn create_test_stadium_request(name: &str) -> StadiumRequest {
    StadiumRequest {
        name: Some(String::from(name)),
    }
}

pub fn create_test_match_request(
    home_club_id: i64,
    away_club_id: i64,
    kickoff: &str,
) -> MatchRequest {
    MatchRequest {
        home_club_id: Some(home_club_id),
        away_club_id: Some(away_club_id),
        home_goals: Some(2),
        away_goals: Some(1),
        stadium: Some(String::from("Maracana")),
        kickoff: Some(String::from(kickoff)),
    }
}

/// Seeds a store with two clubs and the Maracana, the baseline most match
/// tests need.
pub fn seeded_store() -> (SqliteStore, ClubResponse, ClubResponse) {
    let mut store: SqliteStore = create_test_store();
    let home: ClubResponse = create_club(
        &mut store,
        create_test_club_request("Flamengo", "RJ"),
        TODAY,
    )
    .unwrap();
    let away: ClubResponse = create_club(
        &mut store,
        create_test_club_request("Palmeiras", "SP"),
        TODAY,
    )
    .unwrap();
    create_stadium(&mut store, create_test_stadium_request("Maracana")).unwrap();
    (store, home, away)
}

/// Seeds a store and registers one match between the two seeded clubs.
pub fn seeded_store_with_match() -> (SqliteStore, ClubResponse, ClubResponse, i64) {
    let (mut store, home, away) = seeded_store();
    let created = create_match(
        &mut store,
        create_test_match_request(home.id, away.id, "2025-06-01T16:00:00"),
        NOW,
    )
    .unwrap();
    (store, home, away, created.id)
}
