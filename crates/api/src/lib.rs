// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The API boundary layer for the Matchday league service.
//!
//! This crate sits between the HTTP server and the core engines. It owns
//! the request/response types, translates domain and persistence errors
//! into the API error contract, and drives each operation end to end:
//! validate input, assemble whatever store snapshot the core needs, run
//! the core logic, persist the result.
//!
//! Nothing here knows about HTTP. The server crate maps [`ApiError`]
//! variants to status codes and wraps the handlers in routes.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::all,
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    club_head_to_head, club_opponent_breakdown, club_ranking, club_retrospective, create_club,
    create_match, create_stadium, deactivate_club, delete_match, delete_stadium, get_club,
    get_match, get_stadium, list_clubs, list_matches, list_stadiums, update_club, update_match,
    update_stadium,
};
pub use request_response::{
    ClubListQuery, ClubRequest, ClubResponse, HeadToHeadResponse, MatchListQuery, MatchRequest,
    MatchResponse, OpponentRecordResponse, PageResponse, RankingEntryResponse, RankingQuery,
    RetrospectiveResponse, StadiumListQuery, StadiumRequest, StadiumResponse,
};
