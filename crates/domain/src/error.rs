// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, PrimitiveDateTime};

use crate::dates::{format_date, format_datetime};

/// Errors that can occur during domain validation.
///
/// Variants fall into three classes that the API boundary maps to distinct
/// response semantics: bad input, unresolved references, and conflicts with
/// already-persisted data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was absent from the request.
    MissingField(&'static str),
    /// Club name is empty or too short.
    InvalidClubName(String),
    /// Region code is not in the enumerated set.
    InvalidRegion(String),
    /// Club founding date lies in the future.
    FoundedInFuture {
        /// The rejected founding date.
        founded: Date,
    },
    /// Stadium name violates the naming rules.
    InvalidStadiumName(String),
    /// A club with the same name already exists in the region.
    DuplicateClub {
        /// The club name.
        name: String,
        /// The region code.
        region: String,
    },
    /// A stadium with the same name already exists.
    DuplicateStadium {
        /// The stadium name.
        name: String,
    },
    /// Home and away club are the same.
    SelfMatch,
    /// A referenced club id does not resolve.
    ClubNotFound(i64),
    /// A referenced stadium name does not resolve.
    StadiumNotFound(String),
    /// A participating club is inactive.
    InactiveClub {
        /// The club id.
        id: i64,
        /// The club name.
        name: String,
    },
    /// A score is negative.
    NegativeScore,
    /// Kickoff predates a participating club's founding date.
    KickoffBeforeFounding {
        /// The club whose founding date is violated.
        club: String,
        /// The club's founding date.
        founded: Date,
    },
    /// Kickoff lies before the admission time.
    KickoffInPast {
        /// The rejected kickoff.
        kickoff: PrimitiveDateTime,
    },
    /// Another match is already scheduled at the stadium for that kickoff.
    StadiumOccupied {
        /// The stadium name.
        stadium: String,
        /// The contested kickoff.
        kickoff: PrimitiveDateTime,
    },
    /// A club would play two matches within the minimum rest period.
    InsufficientRest {
        /// The club name.
        club: String,
    },
    /// The ranking criterion is not one of the recognized values.
    UnknownRankingCriterion(String),
    /// A date or timestamp string could not be parsed.
    DateParse {
        /// The offending input.
        value: String,
        /// The parser's message.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Field '{field}' is required"),
            Self::InvalidClubName(msg) => write!(f, "Invalid club name: {msg}"),
            Self::InvalidRegion(code) => {
                write!(f, "Region '{code}' is not a recognized region code")
            }
            Self::FoundedInFuture { founded } => {
                write!(
                    f,
                    "Founding date {} cannot be in the future",
                    format_date(*founded)
                )
            }
            Self::InvalidStadiumName(msg) => write!(f, "Invalid stadium name: {msg}"),
            Self::DuplicateClub { name, region } => {
                write!(
                    f,
                    "A club named '{name}' already exists in region '{region}'"
                )
            }
            Self::DuplicateStadium { name } => {
                write!(f, "A stadium named '{name}' already exists")
            }
            Self::SelfMatch => {
                write!(f, "Home and away club must be different")
            }
            Self::ClubNotFound(id) => write!(f, "Club {id} not found"),
            Self::StadiumNotFound(name) => write!(f, "Stadium '{name}' not found"),
            Self::InactiveClub { id, name } => {
                write!(f, "Club '{name}' ({id}) is inactive and cannot play")
            }
            Self::NegativeScore => write!(f, "Scores cannot be negative"),
            Self::KickoffBeforeFounding { club, founded } => {
                write!(
                    f,
                    "Kickoff predates the founding date {} of club '{club}'",
                    format_date(*founded)
                )
            }
            Self::KickoffInPast { kickoff } => {
                write!(
                    f,
                    "Kickoff {} is in the past; matches are scheduled, not backdated",
                    format_datetime(*kickoff)
                )
            }
            Self::StadiumOccupied { stadium, kickoff } => {
                write!(
                    f,
                    "Stadium '{stadium}' already hosts a match at {}",
                    format_datetime(*kickoff)
                )
            }
            Self::InsufficientRest { club } => {
                write!(
                    f,
                    "Club '{club}' already has a match within the 48 hour rest period"
                )
            }
            Self::UnknownRankingCriterion(value) => {
                write!(
                    f,
                    "Unknown ranking criterion '{value}'; expected one of pontos, gols, vitorias, jogos"
                )
            }
            Self::DateParse { value, reason } => {
                write!(f, "Failed to parse date '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
