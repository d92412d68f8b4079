// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use matchday_persistence::SqliteStore;

use crate::error::ApiError;
use crate::request_response::{PageResponse, StadiumListQuery, StadiumRequest, StadiumResponse};
use crate::tests::{create_test_stadium_request, create_test_store};
use crate::{create_stadium, delete_stadium, get_stadium, list_stadiums, update_stadium};

#[test]
fn create_stadium_returns_assigned_id() {
    let mut store: SqliteStore = create_test_store();

    let created: StadiumResponse =
        create_stadium(&mut store, create_test_stadium_request("Maracana")).unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Maracana");
}

#[test]
fn create_stadium_rejects_missing_name() {
    let mut store: SqliteStore = create_test_store();

    let err: ApiError = create_stadium(&mut store, StadiumRequest { name: None }).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "name"));
}

#[test]
fn create_stadium_rejects_short_name() {
    let mut store: SqliteStore = create_test_store();

    let err: ApiError =
        create_stadium(&mut store, create_test_stadium_request("Ab")).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }));
}

#[test]
fn create_stadium_rejects_digits_in_name() {
    let mut store: SqliteStore = create_test_store();

    let err: ApiError =
        create_stadium(&mut store, create_test_stadium_request("Arena 2000")).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }));
}

#[test]
fn create_stadium_rejects_duplicate_name() {
    let mut store: SqliteStore = create_test_store();

    create_stadium(&mut store, create_test_stadium_request("Morumbi")).unwrap();
    let err: ApiError =
        create_stadium(&mut store, create_test_stadium_request("Morumbi")).unwrap_err();

    assert!(matches!(err, ApiError::DomainRuleViolation { .. }));
}

#[test]
fn get_stadium_round_trips() {
    let mut store: SqliteStore = create_test_store();

    let created: StadiumResponse =
        create_stadium(&mut store, create_test_stadium_request("Mineirao")).unwrap();
    let fetched: StadiumResponse = get_stadium(&mut store, created.id).unwrap();

    assert_eq!(fetched, created);
}

#[test]
fn get_stadium_reports_not_found() {
    let mut store: SqliteStore = create_test_store();

    let err: ApiError = get_stadium(&mut store, 99).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn update_stadium_renames() {
    let mut store: SqliteStore = create_test_store();

    let created: StadiumResponse =
        create_stadium(&mut store, create_test_stadium_request("Beira Rio")).unwrap();
    let renamed: StadiumResponse = update_stadium(
        &mut store,
        created.id,
        create_test_stadium_request("Estadio Beira Rio"),
    )
    .unwrap();

    assert_eq!(renamed.id, created.id);
    assert_eq!(renamed.name, "Estadio Beira Rio");
}

#[test]
fn update_stadium_keeps_own_name_without_conflict() {
    let mut store: SqliteStore = create_test_store();

    let created: StadiumResponse =
        create_stadium(&mut store, create_test_stadium_request("Castelao")).unwrap();
    let renamed: StadiumResponse = update_stadium(
        &mut store,
        created.id,
        create_test_stadium_request("Castelao"),
    )
    .unwrap();

    assert_eq!(renamed.name, "Castelao");
}

#[test]
fn update_stadium_rejects_taking_another_name() {
    let mut store: SqliteStore = create_test_store();

    create_stadium(&mut store, create_test_stadium_request("Pacaembu")).unwrap();
    let second: StadiumResponse =
        create_stadium(&mut store, create_test_stadium_request("Arruda")).unwrap();

    let err: ApiError = update_stadium(
        &mut store,
        second.id,
        create_test_stadium_request("Pacaembu"),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::DomainRuleViolation { .. }));
}

#[test]
fn update_stadium_reports_not_found() {
    let mut store: SqliteStore = create_test_store();

    let err: ApiError =
        update_stadium(&mut store, 5, create_test_stadium_request("Arena")).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn delete_stadium_removes_row() {
    let mut store: SqliteStore = create_test_store();

    let created: StadiumResponse =
        create_stadium(&mut store, create_test_stadium_request("Fonte Nova")).unwrap();

    delete_stadium(&mut store, created.id).unwrap();
    let err: ApiError = get_stadium(&mut store, created.id).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn delete_stadium_reports_not_found() {
    let mut store: SqliteStore = create_test_store();

    let err: ApiError = delete_stadium(&mut store, 123).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn list_stadiums_orders_by_name() {
    let mut store: SqliteStore = create_test_store();

    create_stadium(&mut store, create_test_stadium_request("Pacaembu")).unwrap();
    create_stadium(&mut store, create_test_stadium_request("Arruda")).unwrap();

    let page: PageResponse<StadiumResponse> =
        list_stadiums(&mut store, StadiumListQuery::default()).unwrap();

    assert_eq!(page.total, 2);
    assert_eq!(page.items[0].name, "Arruda");
}
