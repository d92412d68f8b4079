// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use matchday_persistence::SqliteStore;

use crate::error::ApiError;
use crate::request_response::{MatchListQuery, MatchRequest, MatchResponse, PageResponse};
use crate::tests::{
    NOW, create_test_match_request, create_test_store, seeded_store, seeded_store_with_match,
};
use crate::{create_match, delete_match, get_match, list_matches, update_match};

#[test]
fn create_match_round_trips() {
    let (mut store, home, away) = seeded_store();

    let created: MatchResponse = create_match(
        &mut store,
        create_test_match_request(home.id, away.id, "2025-06-01T16:00:00"),
        NOW,
    )
    .unwrap();

    assert_eq!(created.home_club_id, home.id);
    assert_eq!(created.away_club_id, away.id);
    assert_eq!(created.stadium, "Maracana");
    assert_eq!(created.kickoff, "2025-06-01T16:00:00");

    let fetched: MatchResponse = get_match(&mut store, created.id).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn create_match_rejects_missing_kickoff() {
    let (mut store, home, away) = seeded_store();

    let mut request: MatchRequest =
        create_test_match_request(home.id, away.id, "2025-06-01T16:00:00");
    request.kickoff = None;
    let err: ApiError = create_match(&mut store, request, NOW).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "kickoff"));
}

#[test]
fn create_match_rejects_malformed_kickoff() {
    let (mut store, home, away) = seeded_store();

    let err: ApiError = create_match(
        &mut store,
        create_test_match_request(home.id, away.id, "01/06/2025 16:00"),
        NOW,
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { .. }));
}

#[test]
fn create_match_rejects_same_club_on_both_sides() {
    let (mut store, home, _away) = seeded_store();

    let err: ApiError = create_match(
        &mut store,
        create_test_match_request(home.id, home.id, "2025-06-01T16:00:00"),
        NOW,
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { .. }));
}

#[test]
fn create_match_rejects_unknown_club() {
    let (mut store, home, _away) = seeded_store();

    let err: ApiError = create_match(
        &mut store,
        create_test_match_request(home.id, 999, "2025-06-01T16:00:00"),
        NOW,
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "club_id"));
}

#[test]
fn create_match_rejects_unknown_stadium() {
    let (mut store, home, away) = seeded_store();

    let mut request: MatchRequest =
        create_test_match_request(home.id, away.id, "2025-06-01T16:00:00");
    request.stadium = Some(String::from("Nowhere"));
    let err: ApiError = create_match(&mut store, request, NOW).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "stadium"));
}

#[test]
fn create_match_rejects_inactive_club() {
    let (mut store, home, away) = seeded_store();
    crate::deactivate_club(&mut store, away.id).unwrap();

    let err: ApiError = create_match(
        &mut store,
        create_test_match_request(home.id, away.id, "2025-06-01T16:00:00"),
        NOW,
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::DomainRuleViolation { .. }));
}

#[test]
fn create_match_rejects_negative_score() {
    let (mut store, home, away) = seeded_store();

    let mut request: MatchRequest =
        create_test_match_request(home.id, away.id, "2025-06-01T16:00:00");
    request.away_goals = Some(-1);
    let err: ApiError = create_match(&mut store, request, NOW).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "goals"));
}

#[test]
fn create_match_rejects_kickoff_before_founding() {
    let (mut store, home, away) = seeded_store();

    // Seeded clubs are founded 2000-01-01; admission time is pinned before
    // the kickoff under test.
    let err: ApiError = create_match(
        &mut store,
        create_test_match_request(home.id, away.id, "1999-06-01T16:00:00"),
        time::macros::datetime!(1999 - 01 - 01 00:00:00),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::DomainRuleViolation { .. }));
}

#[test]
fn create_match_rejects_past_kickoff() {
    let (mut store, home, away) = seeded_store();

    let err: ApiError = create_match(
        &mut store,
        create_test_match_request(home.id, away.id, "2024-12-31T16:00:00"),
        NOW,
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "kickoff"));
}

#[test]
fn create_match_rejects_double_booked_stadium() {
    let (mut store, home, _away, _match_id) = seeded_store_with_match();

    let third = crate::create_club(
        &mut store,
        crate::tests::create_test_club_request("Santos", "SP"),
        crate::tests::TODAY,
    )
    .unwrap();

    let err: ApiError = create_match(
        &mut store,
        create_test_match_request(third.id, home.id, "2025-06-01T16:00:00"),
        NOW,
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::DomainRuleViolation { rule, .. }
        if rule == "one_match_per_stadium_kickoff"));
}

#[test]
fn create_match_rejects_insufficient_rest() {
    let (mut store, home, _away, _match_id) = seeded_store_with_match();

    let third = crate::create_club(
        &mut store,
        crate::tests::create_test_club_request("Santos", "SP"),
        crate::tests::TODAY,
    )
    .unwrap();
    crate::create_stadium(
        &mut store,
        crate::tests::create_test_stadium_request("Morumbi"),
    )
    .unwrap();

    // Different stadium, 24 hours after the seeded match: the home club
    // has not rested.
    let mut request: MatchRequest =
        create_test_match_request(home.id, third.id, "2025-06-02T16:00:00");
    request.stadium = Some(String::from("Morumbi"));
    let err: ApiError = create_match(&mut store, request, NOW).unwrap_err();

    assert!(matches!(err, ApiError::DomainRuleViolation { rule, .. } if rule == "rest_period"));
}

#[test]
fn create_match_accepts_exactly_rested_clubs() {
    let (mut store, home, away, _match_id) = seeded_store_with_match();

    crate::create_stadium(
        &mut store,
        crate::tests::create_test_stadium_request("Morumbi"),
    )
    .unwrap();

    // Exactly 48 hours later is allowed.
    let mut request: MatchRequest =
        create_test_match_request(away.id, home.id, "2025-06-03T16:00:00");
    request.stadium = Some(String::from("Morumbi"));
    let created: MatchResponse = create_match(&mut store, request, NOW).unwrap();

    assert_eq!(created.kickoff, "2025-06-03T16:00:00");
}

#[test]
fn update_match_does_not_conflict_with_itself() {
    let (mut store, home, away, match_id) = seeded_store_with_match();

    // Same stadium and kickoff, only the score changes.
    let mut request: MatchRequest =
        create_test_match_request(home.id, away.id, "2025-06-01T16:00:00");
    request.home_goals = Some(5);
    let updated: MatchResponse = update_match(&mut store, match_id, request, NOW).unwrap();

    assert_eq!(updated.home_goals, 5);
}

#[test]
fn update_match_reports_not_found() {
    let (mut store, home, away) = seeded_store();

    let err: ApiError = update_match(
        &mut store,
        77,
        create_test_match_request(home.id, away.id, "2025-06-01T16:00:00"),
        NOW,
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn update_match_still_runs_admission() {
    let (mut store, home, _away, match_id) = seeded_store_with_match();

    let err: ApiError = update_match(
        &mut store,
        match_id,
        create_test_match_request(home.id, home.id, "2025-06-01T16:00:00"),
        NOW,
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { .. }));
}

#[test]
fn delete_match_removes_row() {
    let (mut store, _home, _away, match_id) = seeded_store_with_match();

    delete_match(&mut store, match_id).unwrap();
    let err: ApiError = get_match(&mut store, match_id).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn delete_match_reports_not_found() {
    let mut store: SqliteStore = create_test_store();

    let err: ApiError = delete_match(&mut store, 1).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn list_matches_filters_by_stadium() {
    let (mut store, _home, _away, _match_id) = seeded_store_with_match();

    let query: MatchListQuery = MatchListQuery {
        stadium: Some(String::from("Marac")),
        ..MatchListQuery::default()
    };
    let page: PageResponse<MatchResponse> = list_matches(&mut store, query).unwrap();
    assert_eq!(page.total, 1);

    let query: MatchListQuery = MatchListQuery {
        stadium: Some(String::from("Morumbi")),
        ..MatchListQuery::default()
    };
    let empty: PageResponse<MatchResponse> = list_matches(&mut store, query).unwrap();
    assert_eq!(empty.total, 0);
}

#[test]
fn list_matches_rejects_malformed_kickoff_filter() {
    let mut store: SqliteStore = create_test_store();

    let query: MatchListQuery = MatchListQuery {
        kickoff: Some(String::from("yesterday")),
        ..MatchListQuery::default()
    };
    let err: ApiError = list_matches(&mut store, query).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { .. }));
}
