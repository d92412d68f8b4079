// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use matchday_domain::DomainError;
use matchday_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
/// The server layer maps each variant to one HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A domain rule was violated by otherwise well-formed input.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly. Bad-input variants become `InvalidInput`, unresolved references
/// become `ResourceNotFound`, and conflicts with persisted data become
/// `DomainRuleViolation`.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::MissingField(field) => ApiError::InvalidInput {
            field: String::from(field),
            message: format!("Field '{field}' is required"),
        },
        DomainError::InvalidClubName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidRegion(code) => ApiError::InvalidInput {
            field: String::from("region"),
            message: format!("'{code}' is not a recognized region code"),
        },
        DomainError::FoundedInFuture { founded } => ApiError::InvalidInput {
            field: String::from("founded"),
            message: format!("Founding date {founded} cannot be in the future"),
        },
        DomainError::InvalidStadiumName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::DuplicateClub { name, region } => ApiError::DomainRuleViolation {
            rule: String::from("unique_club_per_region"),
            message: format!("A club named '{name}' already exists in region '{region}'"),
        },
        DomainError::DuplicateStadium { name } => ApiError::DomainRuleViolation {
            rule: String::from("unique_stadium"),
            message: format!("A stadium named '{name}' already exists"),
        },
        DomainError::SelfMatch => ApiError::InvalidInput {
            field: String::from("away_club_id"),
            message: String::from("Home and away club must be different"),
        },
        DomainError::ClubNotFound(id) => ApiError::InvalidInput {
            field: String::from("club_id"),
            message: format!("Club {id} does not exist"),
        },
        DomainError::StadiumNotFound(name) => ApiError::InvalidInput {
            field: String::from("stadium"),
            message: format!("Stadium '{name}' does not exist"),
        },
        DomainError::InactiveClub { id, name } => ApiError::DomainRuleViolation {
            rule: String::from("active_clubs_only"),
            message: format!("Club '{name}' ({id}) is inactive and cannot play"),
        },
        DomainError::NegativeScore => ApiError::InvalidInput {
            field: String::from("goals"),
            message: String::from("Scores cannot be negative"),
        },
        DomainError::KickoffBeforeFounding { club, founded } => ApiError::DomainRuleViolation {
            rule: String::from("kickoff_after_founding"),
            message: format!("Kickoff predates the founding date {founded} of club '{club}'"),
        },
        DomainError::KickoffInPast { kickoff } => ApiError::InvalidInput {
            field: String::from("kickoff"),
            message: format!("Kickoff {kickoff} is in the past"),
        },
        DomainError::StadiumOccupied { stadium, kickoff } => ApiError::DomainRuleViolation {
            rule: String::from("one_match_per_stadium_kickoff"),
            message: format!("Stadium '{stadium}' already hosts a match at {kickoff}"),
        },
        DomainError::InsufficientRest { club } => ApiError::DomainRuleViolation {
            rule: String::from("rest_period"),
            message: format!("Club '{club}' already has a match within the 48 hour rest period"),
        },
        DomainError::UnknownRankingCriterion(value) => ApiError::InvalidInput {
            field: String::from("criterion"),
            message: format!(
                "Unknown ranking criterion '{value}'; expected one of pontos, gols, vitorias, jogos"
            ),
        },
        DomainError::DateParse { value, reason } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{value}': {reason}"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Storage failures carry no client-actionable detail, so everything maps
/// to `Internal`.
#[must_use]
pub fn translate_persistence_error(err: &PersistenceError) -> ApiError {
    ApiError::Internal {
        message: format!("Storage failure: {err}"),
    }
}
