// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for club, stadium, match, and statistics
//! operations.
//!
//! Handlers are plain functions over the store. The current time is an
//! explicit argument so tests can pin it; the server layer passes the wall
//! clock. Each handler validates input, consults the store, and translates
//! every failure into an [`ApiError`].

use std::collections::HashMap;
use std::str::FromStr;

use time::{Date, PrimitiveDateTime};
use tracing::info;

use matchday::{
    AdmissionContext, MatchCandidate, REST_PERIOD, RankingCriterion, admit, head_to_head,
    opponent_breakdown, ranking, retrospective,
};
use matchday_domain::{
    Club, ClubFields, DomainError, Match, MatchFields, Stadium, parse_date, parse_datetime,
    validate_club_fields, validate_stadium_name,
};
use matchday_persistence::{
    ClubFilter, ClubSort, ClubSortField, MatchFilter, PageRequest, SortDirection, SqliteStore,
};

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    ClubListQuery, ClubRequest, ClubResponse, HeadToHeadResponse, MatchListQuery, MatchRequest,
    MatchResponse, OpponentRecordResponse, PageResponse, RankingEntryResponse, RankingQuery,
    RetrospectiveResponse, StadiumListQuery, StadiumRequest, StadiumResponse,
};

/// Creates a new club.
///
/// # Errors
///
/// Returns an error if:
/// - A required field is missing or fails validation
/// - A club with the same name already exists in the region
/// - The store fails
pub fn create_club(
    store: &mut SqliteStore,
    request: ClubRequest,
    today: Date,
) -> Result<ClubResponse, ApiError> {
    let active: bool = request.active.unwrap_or(true);
    let fields: ClubFields = validate_club_request(store, request, today, None, active)?;

    let club: Club = store
        .insert_club(&fields)
        .map_err(|e| translate_persistence_error(&e))?;

    info!("Created club {} ({})", club.name, club.id);
    Ok(ClubResponse::from(club))
}

/// Fetches a club by id.
///
/// # Errors
///
/// Returns an error if the club does not exist or the store fails.
pub fn get_club(store: &mut SqliteStore, club_id: i64) -> Result<ClubResponse, ApiError> {
    let club: Club = require_club(store, club_id)?;
    Ok(ClubResponse::from(club))
}

/// Replaces the stored fields of an existing club.
///
/// # Errors
///
/// Returns an error if:
/// - The club does not exist
/// - A required field is missing or fails validation
/// - The new name collides with another club in the region
/// - The store fails
pub fn update_club(
    store: &mut SqliteStore,
    club_id: i64,
    request: ClubRequest,
    today: Date,
) -> Result<ClubResponse, ApiError> {
    require_club(store, club_id)?;
    let active: bool = request
        .active
        .ok_or(DomainError::MissingField("active"))
        .map_err(translate_domain_error)?;
    let fields: ClubFields = validate_club_request(store, request, today, Some(club_id), active)?;

    let updated: Club = store
        .update_club(club_id, &fields)
        .map_err(|e| translate_persistence_error(&e))?
        .ok_or_else(|| club_not_found(club_id))?;

    info!("Updated club {}", club_id);
    Ok(ClubResponse::from(updated))
}

/// Deactivates a club, keeping its rows and match history.
///
/// # Errors
///
/// Returns an error if the club does not exist or the store fails.
pub fn deactivate_club(store: &mut SqliteStore, club_id: i64) -> Result<(), ApiError> {
    let deactivated: Option<Club> = store
        .deactivate_club(club_id)
        .map_err(|e| translate_persistence_error(&e))?;

    if deactivated.is_none() {
        return Err(club_not_found(club_id));
    }
    info!("Deactivated club {}", club_id);
    Ok(())
}

/// Lists clubs with optional filters, sorting, and paging.
///
/// # Errors
///
/// Returns an error if a query parameter is malformed or the store fails.
pub fn list_clubs(
    store: &mut SqliteStore,
    query: ClubListQuery,
) -> Result<PageResponse<ClubResponse>, ApiError> {
    let founded: Option<Date> = query
        .founded
        .as_deref()
        .map(parse_date)
        .transpose()
        .map_err(translate_domain_error)?;

    let filter: ClubFilter = ClubFilter {
        name: query.name,
        region: query.region.map(|r| r.trim().to_uppercase()),
        active: query.active,
        founded,
    };

    let field: ClubSortField = match query.sort.as_deref() {
        None => ClubSortField::default(),
        Some(value) => ClubSortField::parse(value).ok_or_else(|| ApiError::InvalidInput {
            field: String::from("sort"),
            message: format!("Unknown sort column '{value}'"),
        })?,
    };
    let direction: SortDirection = match query.direction.as_deref() {
        None => SortDirection::default(),
        Some(value) => SortDirection::parse(value).ok_or_else(|| ApiError::InvalidInput {
            field: String::from("direction"),
            message: format!("Unknown sort direction '{value}'"),
        })?,
    };

    let page: PageRequest = page_request(query.page, query.size);
    let result = store
        .list_clubs(&filter, ClubSort { field, direction }, page)
        .map_err(|e| translate_persistence_error(&e))?;

    Ok(PageResponse::from_page(result, ClubResponse::from))
}

/// Creates a new stadium.
///
/// # Errors
///
/// Returns an error if the name is missing or invalid, another stadium
/// already uses it, or the store fails.
pub fn create_stadium(
    store: &mut SqliteStore,
    request: StadiumRequest,
) -> Result<StadiumResponse, ApiError> {
    let name: String = validate_stadium_request(store, request, None)?;

    let stadium: Stadium = store
        .insert_stadium(&name)
        .map_err(|e| translate_persistence_error(&e))?;

    info!("Created stadium {} ({})", stadium.name, stadium.id);
    Ok(StadiumResponse::from(stadium))
}

/// Fetches a stadium by id.
///
/// # Errors
///
/// Returns an error if the stadium does not exist or the store fails.
pub fn get_stadium(store: &mut SqliteStore, stadium_id: i64) -> Result<StadiumResponse, ApiError> {
    let stadium: Stadium = store
        .get_stadium(stadium_id)
        .map_err(|e| translate_persistence_error(&e))?
        .ok_or_else(|| stadium_not_found(stadium_id))?;
    Ok(StadiumResponse::from(stadium))
}

/// Renames an existing stadium.
///
/// # Errors
///
/// Returns an error if the stadium does not exist, the new name is invalid
/// or already taken, or the store fails.
pub fn update_stadium(
    store: &mut SqliteStore,
    stadium_id: i64,
    request: StadiumRequest,
) -> Result<StadiumResponse, ApiError> {
    store
        .get_stadium(stadium_id)
        .map_err(|e| translate_persistence_error(&e))?
        .ok_or_else(|| stadium_not_found(stadium_id))?;

    let name: String = validate_stadium_request(store, request, Some(stadium_id))?;

    let updated: Stadium = store
        .update_stadium(stadium_id, &name)
        .map_err(|e| translate_persistence_error(&e))?
        .ok_or_else(|| stadium_not_found(stadium_id))?;

    info!("Renamed stadium {}", stadium_id);
    Ok(StadiumResponse::from(updated))
}

/// Deletes a stadium. Past matches keep the venue name they were stored
/// with.
///
/// # Errors
///
/// Returns an error if the stadium does not exist or the store fails.
pub fn delete_stadium(store: &mut SqliteStore, stadium_id: i64) -> Result<(), ApiError> {
    let deleted: bool = store
        .delete_stadium(stadium_id)
        .map_err(|e| translate_persistence_error(&e))?;

    if !deleted {
        return Err(stadium_not_found(stadium_id));
    }
    info!("Deleted stadium {}", stadium_id);
    Ok(())
}

/// Lists stadiums ordered by name, one page at a time.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_stadiums(
    store: &mut SqliteStore,
    query: StadiumListQuery,
) -> Result<PageResponse<StadiumResponse>, ApiError> {
    let page: PageRequest = page_request(query.page, query.size);
    let result = store
        .list_stadiums(page)
        .map_err(|e| translate_persistence_error(&e))?;
    Ok(PageResponse::from_page(result, StadiumResponse::from))
}

/// Registers a match after running the full admission pipeline.
///
/// # Errors
///
/// Returns an error if a required field is missing or malformed, any
/// admission rule rejects the candidate, or the store fails.
pub fn create_match(
    store: &mut SqliteStore,
    request: MatchRequest,
    now: PrimitiveDateTime,
) -> Result<MatchResponse, ApiError> {
    let candidate: MatchCandidate = candidate_from_request(request)?;
    let ctx: AdmissionContext = build_admission_context(store, &candidate)?;
    admit(&candidate, &ctx, now, None).map_err(translate_domain_error)?;

    let fields: MatchFields = fields_from_candidate(&candidate);
    let created: Match = store
        .insert_match(&fields)
        .map_err(|e| translate_persistence_error(&e))?;

    info!(
        "Registered match {} ({} vs {})",
        created.id, created.home_club_id, created.away_club_id
    );
    Ok(MatchResponse::from(created))
}

/// Fetches a match by id.
///
/// # Errors
///
/// Returns an error if the match does not exist or the store fails.
pub fn get_match(store: &mut SqliteStore, match_id: i64) -> Result<MatchResponse, ApiError> {
    let m: Match = store
        .get_match(match_id)
        .map_err(|e| translate_persistence_error(&e))?
        .ok_or_else(|| match_not_found(match_id))?;
    Ok(MatchResponse::from(m))
}

/// Replaces a stored match, re-running the full admission pipeline.
///
/// The match being updated is excluded from the conflict checks so it never
/// collides with itself.
///
/// # Errors
///
/// Returns an error if the match does not exist, a field is missing or
/// malformed, any admission rule rejects the candidate, or the store fails.
pub fn update_match(
    store: &mut SqliteStore,
    match_id: i64,
    request: MatchRequest,
    now: PrimitiveDateTime,
) -> Result<MatchResponse, ApiError> {
    store
        .get_match(match_id)
        .map_err(|e| translate_persistence_error(&e))?
        .ok_or_else(|| match_not_found(match_id))?;

    let candidate: MatchCandidate = candidate_from_request(request)?;
    let ctx: AdmissionContext = build_admission_context(store, &candidate)?;
    admit(&candidate, &ctx, now, Some(match_id)).map_err(translate_domain_error)?;

    let fields: MatchFields = fields_from_candidate(&candidate);
    let updated: Match = store
        .update_match(match_id, &fields)
        .map_err(|e| translate_persistence_error(&e))?
        .ok_or_else(|| match_not_found(match_id))?;

    info!("Updated match {}", match_id);
    Ok(MatchResponse::from(updated))
}

/// Deletes a match.
///
/// # Errors
///
/// Returns an error if the match does not exist or the store fails.
pub fn delete_match(store: &mut SqliteStore, match_id: i64) -> Result<(), ApiError> {
    let deleted: bool = store
        .delete_match(match_id)
        .map_err(|e| translate_persistence_error(&e))?;

    if !deleted {
        return Err(match_not_found(match_id));
    }
    info!("Deleted match {}", match_id);
    Ok(())
}

/// Lists matches with optional filters and paging, most recent kickoff
/// first.
///
/// # Errors
///
/// Returns an error if a query parameter is malformed or the store fails.
pub fn list_matches(
    store: &mut SqliteStore,
    query: MatchListQuery,
) -> Result<PageResponse<MatchResponse>, ApiError> {
    let kickoff: Option<PrimitiveDateTime> = query
        .kickoff
        .as_deref()
        .map(parse_datetime)
        .transpose()
        .map_err(translate_domain_error)?;

    let filter: MatchFilter = MatchFilter {
        stadium: query.stadium,
        home_goals: query.home_goals,
        away_goals: query.away_goals,
        kickoff,
    };

    let page: PageRequest = page_request(query.page, query.size);
    let result = store
        .list_matches(&filter, page)
        .map_err(|e| translate_persistence_error(&e))?;
    Ok(PageResponse::from_page(result, MatchResponse::from))
}

/// Computes a club's all-time record across every match it played.
///
/// # Errors
///
/// Returns an error if the club does not exist or the store fails.
pub fn club_retrospective(
    store: &mut SqliteStore,
    club_id: i64,
) -> Result<RetrospectiveResponse, ApiError> {
    let club: Club = require_club(store, club_id)?;
    let matches: Vec<Match> = store
        .matches_for_club(club_id)
        .map_err(|e| translate_persistence_error(&e))?;

    Ok(RetrospectiveResponse::from(retrospective(&club, &matches)))
}

/// Computes a club's record split per opponent, ordered by opponent name.
///
/// # Errors
///
/// Returns an error if the club does not exist or the store fails.
pub fn club_opponent_breakdown(
    store: &mut SqliteStore,
    club_id: i64,
) -> Result<Vec<OpponentRecordResponse>, ApiError> {
    let club: Club = require_club(store, club_id)?;
    let matches: Vec<Match> = store
        .matches_for_club(club_id)
        .map_err(|e| translate_persistence_error(&e))?;
    let names: HashMap<i64, String> = club_names(store)?;

    Ok(opponent_breakdown(&club, &matches, &names)
        .into_iter()
        .map(OpponentRecordResponse::from)
        .collect())
}

/// Computes the direct record between two clubs, with the matches behind
/// it.
///
/// # Errors
///
/// Returns an error if either club does not exist or the store fails.
pub fn club_head_to_head(
    store: &mut SqliteStore,
    first_id: i64,
    second_id: i64,
) -> Result<HeadToHeadResponse, ApiError> {
    let first: Club = require_club(store, first_id)?;
    let second: Club = require_club(store, second_id)?;
    let matches: Vec<Match> = store
        .matches_between(first_id, second_id)
        .map_err(|e| translate_persistence_error(&e))?;

    Ok(HeadToHeadResponse::from(head_to_head(
        &first, &second, &matches,
    )))
}

/// Computes the league ranking under the requested criterion.
///
/// Clubs that have not played any match are left out.
///
/// # Errors
///
/// Returns an error if the criterion is unrecognized or the store fails.
pub fn club_ranking(
    store: &mut SqliteStore,
    query: RankingQuery,
) -> Result<Vec<RankingEntryResponse>, ApiError> {
    let criterion: RankingCriterion = match query.criterion.as_deref() {
        None => RankingCriterion::default(),
        Some(value) => RankingCriterion::from_str(value).map_err(translate_domain_error)?,
    };

    let clubs: Vec<Club> = store
        .all_clubs()
        .map_err(|e| translate_persistence_error(&e))?;
    let matches: Vec<Match> = store
        .all_matches()
        .map_err(|e| translate_persistence_error(&e))?;

    Ok(ranking(criterion, &clubs, &matches)
        .into_iter()
        .map(RankingEntryResponse::from)
        .collect())
}

fn page_request(page: Option<i64>, size: Option<i64>) -> PageRequest {
    PageRequest::new(
        page.unwrap_or(0),
        size.unwrap_or(PageRequest::DEFAULT_SIZE),
    )
}

fn club_not_found(club_id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Club"),
        message: format!("Club {club_id} does not exist"),
    }
}

fn stadium_not_found(stadium_id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Stadium"),
        message: format!("Stadium {stadium_id} does not exist"),
    }
}

fn match_not_found(match_id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Match"),
        message: format!("Match {match_id} does not exist"),
    }
}

fn require_club(store: &mut SqliteStore, club_id: i64) -> Result<Club, ApiError> {
    store
        .get_club(club_id)
        .map_err(|e| translate_persistence_error(&e))?
        .ok_or_else(|| club_not_found(club_id))
}

fn club_names(store: &mut SqliteStore) -> Result<HashMap<i64, String>, ApiError> {
    let clubs: Vec<Club> = store
        .all_clubs()
        .map_err(|e| translate_persistence_error(&e))?;
    Ok(clubs.into_iter().map(|c| (c.id, c.name)).collect())
}

/// Validates a club request and checks the per-region name uniqueness
/// rule. `exclude` skips the club being updated. Callers resolve the
/// `active` flag: creation defaults it to true, updates require it so a
/// replacement body cannot silently reactivate a deactivated club.
fn validate_club_request(
    store: &mut SqliteStore,
    request: ClubRequest,
    today: Date,
    exclude: Option<i64>,
    active: bool,
) -> Result<ClubFields, ApiError> {
    let name: String = request
        .name
        .ok_or(DomainError::MissingField("name"))
        .map_err(translate_domain_error)?;
    let region: String = request
        .region
        .ok_or(DomainError::MissingField("region"))
        .map_err(translate_domain_error)?;
    let founded_raw: String = request
        .founded
        .ok_or(DomainError::MissingField("founded"))
        .map_err(translate_domain_error)?;

    let founded: Date = parse_date(&founded_raw).map_err(translate_domain_error)?;
    let (name, region): (String, String) =
        validate_club_fields(&name, &region, founded, today).map_err(translate_domain_error)?;

    let taken: bool = store
        .club_name_taken(&name, &region, exclude)
        .map_err(|e| translate_persistence_error(&e))?;
    if taken {
        return Err(translate_domain_error(DomainError::DuplicateClub {
            name,
            region,
        }));
    }

    Ok(ClubFields {
        name,
        region,
        founded,
        active,
    })
}

/// Validates a stadium request and checks the global name uniqueness rule.
/// `exclude` skips the stadium being renamed.
fn validate_stadium_request(
    store: &mut SqliteStore,
    request: StadiumRequest,
    exclude: Option<i64>,
) -> Result<String, ApiError> {
    let name: String = request
        .name
        .ok_or(DomainError::MissingField("name"))
        .map_err(translate_domain_error)?;
    let name: String = validate_stadium_name(&name).map_err(translate_domain_error)?;

    let taken: bool = store
        .stadium_name_taken(&name, exclude)
        .map_err(|e| translate_persistence_error(&e))?;
    if taken {
        return Err(translate_domain_error(DomainError::DuplicateStadium {
            name,
        }));
    }

    Ok(name)
}

fn candidate_from_request(request: MatchRequest) -> Result<MatchCandidate, ApiError> {
    let home_club_id: i64 = request
        .home_club_id
        .ok_or(DomainError::MissingField("home_club_id"))
        .map_err(translate_domain_error)?;
    let away_club_id: i64 = request
        .away_club_id
        .ok_or(DomainError::MissingField("away_club_id"))
        .map_err(translate_domain_error)?;
    let home_goals: i32 = request
        .home_goals
        .ok_or(DomainError::MissingField("home_goals"))
        .map_err(translate_domain_error)?;
    let away_goals: i32 = request
        .away_goals
        .ok_or(DomainError::MissingField("away_goals"))
        .map_err(translate_domain_error)?;
    let stadium: String = request
        .stadium
        .ok_or(DomainError::MissingField("stadium"))
        .map_err(translate_domain_error)?;
    let kickoff_raw: String = request
        .kickoff
        .ok_or(DomainError::MissingField("kickoff"))
        .map_err(translate_domain_error)?;
    let kickoff: PrimitiveDateTime = parse_datetime(&kickoff_raw).map_err(translate_domain_error)?;

    Ok(MatchCandidate {
        home_club_id,
        away_club_id,
        home_goals,
        away_goals,
        stadium: stadium.trim().to_string(),
        kickoff,
    })
}

fn fields_from_candidate(candidate: &MatchCandidate) -> MatchFields {
    MatchFields {
        home_club_id: candidate.home_club_id,
        away_club_id: candidate.away_club_id,
        home_goals: candidate.home_goals,
        away_goals: candidate.away_goals,
        stadium: candidate.stadium.clone(),
        kickoff: candidate.kickoff,
    }
}

/// Assembles the store snapshot the admission pipeline runs against.
fn build_admission_context(
    store: &mut SqliteStore,
    candidate: &MatchCandidate,
) -> Result<AdmissionContext, ApiError> {
    let home_club: Option<Club> = store
        .get_club(candidate.home_club_id)
        .map_err(|e| translate_persistence_error(&e))?;
    let away_club: Option<Club> = store
        .get_club(candidate.away_club_id)
        .map_err(|e| translate_persistence_error(&e))?;
    let stadium: Option<Stadium> = store
        .find_stadium_by_name(&candidate.stadium)
        .map_err(|e| translate_persistence_error(&e))?;
    let stadium_matches: Vec<Match> = store
        .matches_at_stadium_kickoff(&candidate.stadium, candidate.kickoff)
        .map_err(|e| translate_persistence_error(&e))?;
    let home_club_matches: Vec<Match> = store
        .matches_for_club_in_window(candidate.home_club_id, candidate.kickoff, REST_PERIOD)
        .map_err(|e| translate_persistence_error(&e))?;
    let away_club_matches: Vec<Match> = store
        .matches_for_club_in_window(candidate.away_club_id, candidate.kickoff, REST_PERIOD)
        .map_err(|e| translate_persistence_error(&e))?;

    Ok(AdmissionContext {
        home_club,
        away_club,
        stadium,
        stadium_matches,
        home_club_matches,
        away_club_matches,
    })
}
