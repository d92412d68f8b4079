// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP server for the Matchday league service.
//!
//! The server is a thin layer: it parses the CLI arguments, opens the
//! store, and maps routes onto the handlers in `matchday-api`. Every
//! handler locks the shared store, runs the API operation, and translates
//! the API error contract into HTTP status codes.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{Date, OffsetDateTime, PrimitiveDateTime};
use tokio::sync::Mutex;
use tracing::{error, info};

use matchday_api::{
    ApiError, ClubListQuery, ClubRequest, ClubResponse, HeadToHeadResponse, MatchListQuery,
    MatchRequest, MatchResponse, OpponentRecordResponse, PageResponse, RankingEntryResponse,
    RankingQuery, RetrospectiveResponse, StadiumListQuery, StadiumRequest, StadiumResponse,
};
use matchday_persistence::SqliteStore;

/// Matchday Server - HTTP server for the Matchday league service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the store wrapped in a Mutex to allow safe concurrent
/// access.
#[derive(Clone)]
struct AppState {
    /// The store holding clubs, stadiums, and matches.
    store: Arc<Mutex<SqliteStore>>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::CONFLICT,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// The current wall-clock instant, naive UTC.
fn wall_clock() -> PrimitiveDateTime {
    let utc: OffsetDateTime = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(utc.date(), utc.time())
}

/// Handler for POST `/clubs`.
async fn handle_create_club(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<ClubRequest>,
) -> Result<(StatusCode, Json<ClubResponse>), HttpError> {
    info!("Handling create_club request");

    let today: Date = wall_clock().date();
    let mut store = app_state.store.lock().await;
    let response: ClubResponse = matchday_api::create_club(&mut store, request, today)?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/clubs`.
async fn handle_list_clubs(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ClubListQuery>,
) -> Result<Json<PageResponse<ClubResponse>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let response: PageResponse<ClubResponse> = matchday_api::list_clubs(&mut store, query)?;

    Ok(Json(response))
}

/// Handler for GET `/clubs/{id}`.
async fn handle_get_club(
    AxumState(app_state): AxumState<AppState>,
    Path(club_id): Path<i64>,
) -> Result<Json<ClubResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let response: ClubResponse = matchday_api::get_club(&mut store, club_id)?;

    Ok(Json(response))
}

/// Handler for PUT `/clubs/{id}`.
async fn handle_update_club(
    AxumState(app_state): AxumState<AppState>,
    Path(club_id): Path<i64>,
    Json(request): Json<ClubRequest>,
) -> Result<Json<ClubResponse>, HttpError> {
    info!(club_id = club_id, "Handling update_club request");

    let today: Date = wall_clock().date();
    let mut store = app_state.store.lock().await;
    let response: ClubResponse = matchday_api::update_club(&mut store, club_id, request, today)?;

    Ok(Json(response))
}

/// Handler for DELETE `/clubs/{id}`.
///
/// Clubs are never hard-deleted; this deactivates the club and keeps its
/// match history.
async fn handle_deactivate_club(
    AxumState(app_state): AxumState<AppState>,
    Path(club_id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    info!(club_id = club_id, "Handling deactivate_club request");

    let mut store = app_state.store.lock().await;
    matchday_api::deactivate_club(&mut store, club_id)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET `/clubs/ranking`.
async fn handle_ranking(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<RankingQuery>,
) -> Result<Json<Vec<RankingEntryResponse>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let response: Vec<RankingEntryResponse> = matchday_api::club_ranking(&mut store, query)?;

    Ok(Json(response))
}

/// Handler for GET `/clubs/{id}/retrospective`.
async fn handle_retrospective(
    AxumState(app_state): AxumState<AppState>,
    Path(club_id): Path<i64>,
) -> Result<Json<RetrospectiveResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let response: RetrospectiveResponse = matchday_api::club_retrospective(&mut store, club_id)?;

    Ok(Json(response))
}

/// Handler for GET `/clubs/{id}/retrospective/opponents`.
async fn handle_opponent_breakdown(
    AxumState(app_state): AxumState<AppState>,
    Path(club_id): Path<i64>,
) -> Result<Json<Vec<OpponentRecordResponse>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let response: Vec<OpponentRecordResponse> =
        matchday_api::club_opponent_breakdown(&mut store, club_id)?;

    Ok(Json(response))
}

/// Handler for GET `/clubs/{id}/head-to-head/{other_id}`.
async fn handle_head_to_head(
    AxumState(app_state): AxumState<AppState>,
    Path((club_id, other_id)): Path<(i64, i64)>,
) -> Result<Json<HeadToHeadResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let response: HeadToHeadResponse =
        matchday_api::club_head_to_head(&mut store, club_id, other_id)?;

    Ok(Json(response))
}

/// Handler for POST `/stadiums`.
async fn handle_create_stadium(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<StadiumRequest>,
) -> Result<(StatusCode, Json<StadiumResponse>), HttpError> {
    info!("Handling create_stadium request");

    let mut store = app_state.store.lock().await;
    let response: StadiumResponse = matchday_api::create_stadium(&mut store, request)?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/stadiums`.
async fn handle_list_stadiums(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<StadiumListQuery>,
) -> Result<Json<PageResponse<StadiumResponse>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let response: PageResponse<StadiumResponse> = matchday_api::list_stadiums(&mut store, query)?;

    Ok(Json(response))
}

/// Handler for GET `/stadiums/{id}`.
async fn handle_get_stadium(
    AxumState(app_state): AxumState<AppState>,
    Path(stadium_id): Path<i64>,
) -> Result<Json<StadiumResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let response: StadiumResponse = matchday_api::get_stadium(&mut store, stadium_id)?;

    Ok(Json(response))
}

/// Handler for PUT `/stadiums/{id}`.
async fn handle_update_stadium(
    AxumState(app_state): AxumState<AppState>,
    Path(stadium_id): Path<i64>,
    Json(request): Json<StadiumRequest>,
) -> Result<Json<StadiumResponse>, HttpError> {
    info!(stadium_id = stadium_id, "Handling update_stadium request");

    let mut store = app_state.store.lock().await;
    let response: StadiumResponse = matchday_api::update_stadium(&mut store, stadium_id, request)?;

    Ok(Json(response))
}

/// Handler for DELETE `/stadiums/{id}`.
async fn handle_delete_stadium(
    AxumState(app_state): AxumState<AppState>,
    Path(stadium_id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    info!(stadium_id = stadium_id, "Handling delete_stadium request");

    let mut store = app_state.store.lock().await;
    matchday_api::delete_stadium(&mut store, stadium_id)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST `/matches`.
async fn handle_create_match(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<(StatusCode, Json<MatchResponse>), HttpError> {
    info!("Handling create_match request");

    let now: PrimitiveDateTime = wall_clock();
    let mut store = app_state.store.lock().await;
    let response: MatchResponse = matchday_api::create_match(&mut store, request, now)?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/matches`.
async fn handle_list_matches(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<MatchListQuery>,
) -> Result<Json<PageResponse<MatchResponse>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let response: PageResponse<MatchResponse> = matchday_api::list_matches(&mut store, query)?;

    Ok(Json(response))
}

/// Handler for GET `/matches/{id}`.
async fn handle_get_match(
    AxumState(app_state): AxumState<AppState>,
    Path(match_id): Path<i64>,
) -> Result<Json<MatchResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let response: MatchResponse = matchday_api::get_match(&mut store, match_id)?;

    Ok(Json(response))
}

/// Handler for PUT `/matches/{id}`.
async fn handle_update_match(
    AxumState(app_state): AxumState<AppState>,
    Path(match_id): Path<i64>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, HttpError> {
    info!(match_id = match_id, "Handling update_match request");

    let now: PrimitiveDateTime = wall_clock();
    let mut store = app_state.store.lock().await;
    let response: MatchResponse = matchday_api::update_match(&mut store, match_id, request, now)?;

    Ok(Json(response))
}

/// Handler for DELETE `/matches/{id}`.
async fn handle_delete_match(
    AxumState(app_state): AxumState<AppState>,
    Path(match_id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    info!(match_id = match_id, "Handling delete_match request");

    let mut store = app_state.store.lock().await;
    matchday_api::delete_match(&mut store, match_id)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/clubs", post(handle_create_club))
        .route("/clubs", get(handle_list_clubs))
        .route("/clubs/ranking", get(handle_ranking))
        .route("/clubs/{id}", get(handle_get_club))
        .route("/clubs/{id}", put(handle_update_club))
        .route("/clubs/{id}", delete(handle_deactivate_club))
        .route("/clubs/{id}/retrospective", get(handle_retrospective))
        .route(
            "/clubs/{id}/retrospective/opponents",
            get(handle_opponent_breakdown),
        )
        .route(
            "/clubs/{id}/head-to-head/{other_id}",
            get(handle_head_to_head),
        )
        .route("/stadiums", post(handle_create_stadium))
        .route("/stadiums", get(handle_list_stadiums))
        .route("/stadiums/{id}", get(handle_get_stadium))
        .route("/stadiums/{id}", put(handle_update_stadium))
        .route("/stadiums/{id}", delete(handle_delete_stadium))
        .route("/matches", post(handle_create_match))
        .route("/matches", get(handle_list_matches))
        .route("/matches/{id}", get(handle_get_match))
        .route("/matches/{id}", put(handle_update_match))
        .route("/matches/{id}", delete(handle_delete_match))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Matchday Server");

    // Open the store (in-memory or file-based based on CLI argument)
    let store: SqliteStore = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqliteStore::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqliteStore::new_in_memory()?
    };

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with an in-memory store.
    fn create_test_app_state() -> AppState {
        let store: SqliteStore =
            SqliteStore::new_in_memory().expect("Failed to create in-memory store");
        AppState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn response_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn club_body(name: &str, region: &str) -> serde_json::Value {
        serde_json::json!({
            "name": name,
            "region": region,
            "founded": "2000-01-01",
            "active": true,
        })
    }

    /// Seeds two clubs and a stadium, returning their ids.
    async fn seed_league(app: &Router) -> (i64, i64) {
        let home = app
            .clone()
            .oneshot(json_request("POST", "/clubs", &club_body("Flamengo", "RJ")))
            .await
            .unwrap();
        assert_eq!(home.status(), HttpStatusCode::CREATED);
        let home_id: i64 = response_json(home).await["id"].as_i64().unwrap();

        let away = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/clubs",
                &club_body("Palmeiras", "SP"),
            ))
            .await
            .unwrap();
        assert_eq!(away.status(), HttpStatusCode::CREATED);
        let away_id: i64 = response_json(away).await["id"].as_i64().unwrap();

        let stadium = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/stadiums",
                &serde_json::json!({ "name": "Maracana" }),
            ))
            .await
            .unwrap();
        assert_eq!(stadium.status(), HttpStatusCode::CREATED);

        (home_id, away_id)
    }

    fn match_body(home_id: i64, away_id: i64, kickoff: &str) -> serde_json::Value {
        serde_json::json!({
            "home_club_id": home_id,
            "away_club_id": away_id,
            "home_goals": 2,
            "away_goals": 1,
            "stadium": "Maracana",
            "kickoff": kickoff,
        })
    }

    /// A kickoff safely in the future relative to the test run.
    fn future_kickoff() -> String {
        let bumped: PrimitiveDateTime = wall_clock()
            .checked_add(time::Duration::days(30))
            .expect("kickoff arithmetic");
        matchday_domain::format_datetime(bumped)
    }

    #[tokio::test]
    async fn test_create_club_returns_created() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(json_request("POST", "/clubs", &club_body("Flamengo", "RJ")))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::CREATED);
        let body = response_json(response).await;
        assert_eq!(body["name"], "Flamengo");
        assert_eq!(body["active"], true);
    }

    #[tokio::test]
    async fn test_create_club_with_bad_region_returns_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(json_request("POST", "/clubs", &club_body("Flamengo", "XX")))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["error"], true);
    }

    #[tokio::test]
    async fn test_create_duplicate_club_returns_conflict() {
        let app: Router = build_router(create_test_app_state());

        app.clone()
            .oneshot(json_request("POST", "/clubs", &club_body("Flamengo", "RJ")))
            .await
            .unwrap();
        let response = app
            .oneshot(json_request("POST", "/clubs", &club_body("Flamengo", "RJ")))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_get_unknown_club_returns_not_found() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(empty_request("GET", "/clubs/99"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_club_crud_round_trip() {
        let app: Router = build_router(create_test_app_state());

        let created = app
            .clone()
            .oneshot(json_request("POST", "/clubs", &club_body("Bahia", "BA")))
            .await
            .unwrap();
        let id: i64 = response_json(created).await["id"].as_i64().unwrap();

        let updated = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/clubs/{id}"),
                &club_body("Esporte Clube Bahia", "BA"),
            ))
            .await
            .unwrap();
        assert_eq!(updated.status(), HttpStatusCode::OK);

        let deleted = app
            .clone()
            .oneshot(empty_request("DELETE", &format!("/clubs/{id}")))
            .await
            .unwrap();
        assert_eq!(deleted.status(), HttpStatusCode::NO_CONTENT);

        // Deactivation is soft: the club is still readable, now inactive.
        let fetched = app
            .oneshot(empty_request("GET", &format!("/clubs/{id}")))
            .await
            .unwrap();
        assert_eq!(fetched.status(), HttpStatusCode::OK);
        let body = response_json(fetched).await;
        assert_eq!(body["active"], false);
    }

    #[tokio::test]
    async fn test_list_clubs_filters_by_region() {
        let app: Router = build_router(create_test_app_state());
        seed_league(&app).await;

        let response = app
            .oneshot(empty_request("GET", "/clubs?region=RJ"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["items"][0]["name"], "Flamengo");
    }

    #[tokio::test]
    async fn test_stadium_crud_round_trip() {
        let app: Router = build_router(create_test_app_state());

        let created = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/stadiums",
                &serde_json::json!({ "name": "Morumbi" }),
            ))
            .await
            .unwrap();
        assert_eq!(created.status(), HttpStatusCode::CREATED);
        let id: i64 = response_json(created).await["id"].as_i64().unwrap();

        let fetched = app
            .clone()
            .oneshot(empty_request("GET", &format!("/stadiums/{id}")))
            .await
            .unwrap();
        assert_eq!(fetched.status(), HttpStatusCode::OK);

        let deleted = app
            .clone()
            .oneshot(empty_request("DELETE", &format!("/stadiums/{id}")))
            .await
            .unwrap();
        assert_eq!(deleted.status(), HttpStatusCode::NO_CONTENT);

        let missing = app
            .oneshot(empty_request("GET", &format!("/stadiums/{id}")))
            .await
            .unwrap();
        assert_eq!(missing.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_match_and_ranking_flow() {
        let app: Router = build_router(create_test_app_state());
        let (home_id, away_id) = seed_league(&app).await;

        let kickoff: String = future_kickoff();
        let created = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/matches",
                &match_body(home_id, away_id, &kickoff),
            ))
            .await
            .unwrap();
        assert_eq!(created.status(), HttpStatusCode::CREATED);

        let ranking = app
            .oneshot(empty_request("GET", "/clubs/ranking?criterion=pontos"))
            .await
            .unwrap();
        assert_eq!(ranking.status(), HttpStatusCode::OK);
        let body = response_json(ranking).await;
        assert_eq!(body[0]["club_id"], home_id);
        assert_eq!(body[0]["points"], 3);
    }

    #[tokio::test]
    async fn test_double_booking_returns_conflict() {
        let app: Router = build_router(create_test_app_state());
        let (home_id, away_id) = seed_league(&app).await;

        let third = app
            .clone()
            .oneshot(json_request("POST", "/clubs", &club_body("Santos", "SP")))
            .await
            .unwrap();
        let third_id: i64 = response_json(third).await["id"].as_i64().unwrap();

        let kickoff: String = future_kickoff();
        app.clone()
            .oneshot(json_request(
                "POST",
                "/matches",
                &match_body(home_id, away_id, &kickoff),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(json_request(
                "POST",
                "/matches",
                &match_body(third_id, away_id, &kickoff),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_self_match_returns_bad_request() {
        let app: Router = build_router(create_test_app_state());
        let (home_id, _away_id) = seed_league(&app).await;

        let kickoff: String = future_kickoff();
        let response = app
            .oneshot(json_request(
                "POST",
                "/matches",
                &match_body(home_id, home_id, &kickoff),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_retrospective_and_head_to_head() {
        let app: Router = build_router(create_test_app_state());
        let (home_id, away_id) = seed_league(&app).await;

        let kickoff: String = future_kickoff();
        app.clone()
            .oneshot(json_request(
                "POST",
                "/matches",
                &match_body(home_id, away_id, &kickoff),
            ))
            .await
            .unwrap();

        let retro = app
            .clone()
            .oneshot(empty_request(
                "GET",
                &format!("/clubs/{home_id}/retrospective"),
            ))
            .await
            .unwrap();
        assert_eq!(retro.status(), HttpStatusCode::OK);
        let retro_body = response_json(retro).await;
        assert_eq!(retro_body["wins"], 1);

        let h2h = app
            .oneshot(empty_request(
                "GET",
                &format!("/clubs/{home_id}/head-to-head/{away_id}"),
            ))
            .await
            .unwrap();
        assert_eq!(h2h.status(), HttpStatusCode::OK);
        let h2h_body = response_json(h2h).await;
        assert_eq!(h2h_body["games"], 1);
        assert_eq!(h2h_body["first_wins"], 1);
    }

    #[tokio::test]
    async fn test_unknown_ranking_criterion_returns_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(empty_request("GET", "/clubs/ranking?criterion=fair_play"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_match_removes_it() {
        let app: Router = build_router(create_test_app_state());
        let (home_id, away_id) = seed_league(&app).await;

        let kickoff: String = future_kickoff();
        let created = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/matches",
                &match_body(home_id, away_id, &kickoff),
            ))
            .await
            .unwrap();
        let id: i64 = response_json(created).await["id"].as_i64().unwrap();

        let deleted = app
            .clone()
            .oneshot(empty_request("DELETE", &format!("/matches/{id}")))
            .await
            .unwrap();
        assert_eq!(deleted.status(), HttpStatusCode::NO_CONTENT);

        let missing = app
            .oneshot(empty_request("GET", &format!("/matches/{id}")))
            .await
            .unwrap();
        assert_eq!(missing.status(), HttpStatusCode::NOT_FOUND);
    }
}
