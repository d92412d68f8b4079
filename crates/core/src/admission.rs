// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use matchday_domain::{Club, DomainError, Match, Stadium};
use time::{Duration, PrimitiveDateTime};

/// Minimum separation between two kickoffs involving the same club.
///
/// Kickoffs exactly `REST_PERIOD` apart are allowed; anything strictly closer
/// is a scheduling conflict.
pub const REST_PERIOD: Duration = Duration::hours(48);

/// A proposed match, after field presence and format checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    pub home_club_id: i64,
    pub away_club_id: i64,
    pub home_goals: i32,
    pub away_goals: i32,
    pub stadium: String,
    pub kickoff: PrimitiveDateTime,
}

/// The store snapshot the admission pipeline validates against.
///
/// The caller assembles this from the store before calling [`admit`]; the
/// engine itself performs no I/O. The match lists may contain the match being
/// updated; `admit` filters it out via its `exclude` argument.
#[derive(Debug, Clone, Default)]
pub struct AdmissionContext {
    /// The home club, if the id resolved.
    pub home_club: Option<Club>,
    /// The away club, if the id resolved.
    pub away_club: Option<Club>,
    /// The stadium, if the name resolved.
    pub stadium: Option<Stadium>,
    /// Matches already scheduled at the candidate's stadium with the
    /// candidate's exact kickoff.
    pub stadium_matches: Vec<Match>,
    /// Matches involving the home club with kickoffs near the candidate's.
    pub home_club_matches: Vec<Match>,
    /// Matches involving the away club with kickoffs near the candidate's.
    pub away_club_matches: Vec<Match>,
}

/// Runs the full admission pipeline over a candidate match.
///
/// Checks run in a fixed order and the first violation wins:
///
/// 1. Self-match (home and away must differ)
/// 2. Both clubs and the stadium must resolve; both clubs must be active
/// 3. Scores must be non-negative
/// 4. Chronology: the kickoff date must be strictly after each club's
///    founding date
/// 5. The kickoff must not be before `now` (`kickoff == now` is accepted)
/// 6. No other match at the same stadium with the same kickoff
/// 7. Rest period: neither club may have another match within
///    [`REST_PERIOD`] of the kickoff
///
/// On update, `exclude` carries the id of the match being replaced so it
/// never conflicts with itself.
///
/// # Errors
///
/// Returns the `DomainError` for the first violated rule. No state is
/// mutated on either path; persistence is the caller's follow-up step.
pub fn admit(
    candidate: &MatchCandidate,
    ctx: &AdmissionContext,
    now: PrimitiveDateTime,
    exclude: Option<i64>,
) -> Result<(), DomainError> {
    if candidate.home_club_id == candidate.away_club_id {
        return Err(DomainError::SelfMatch);
    }

    let home: &Club = ctx
        .home_club
        .as_ref()
        .ok_or(DomainError::ClubNotFound(candidate.home_club_id))?;
    let away: &Club = ctx
        .away_club
        .as_ref()
        .ok_or(DomainError::ClubNotFound(candidate.away_club_id))?;
    let _stadium: &Stadium = ctx
        .stadium
        .as_ref()
        .ok_or_else(|| DomainError::StadiumNotFound(candidate.stadium.clone()))?;

    for club in [home, away] {
        if !club.active {
            return Err(DomainError::InactiveClub {
                id: club.id,
                name: club.name.clone(),
            });
        }
    }

    if candidate.home_goals < 0 || candidate.away_goals < 0 {
        return Err(DomainError::NegativeScore);
    }

    // Chronology rule: a club cannot play before it existed. Date-level
    // comparison; a kickoff on the founding date itself is still rejected.
    for club in [home, away] {
        if candidate.kickoff.date() <= club.founded {
            return Err(DomainError::KickoffBeforeFounding {
                club: club.name.clone(),
                founded: club.founded,
            });
        }
    }

    if candidate.kickoff < now {
        return Err(DomainError::KickoffInPast {
            kickoff: candidate.kickoff,
        });
    }

    let is_other = |m: &Match| exclude != Some(m.id);

    if ctx
        .stadium_matches
        .iter()
        .any(|m| is_other(m) && m.kickoff == candidate.kickoff)
    {
        return Err(DomainError::StadiumOccupied {
            stadium: candidate.stadium.clone(),
            kickoff: candidate.kickoff,
        });
    }

    for (club, matches) in [
        (home, &ctx.home_club_matches),
        (away, &ctx.away_club_matches),
    ] {
        let congested: bool = matches.iter().any(|m| {
            is_other(m)
                && m.involves(club.id)
                && (m.kickoff - candidate.kickoff).abs() < REST_PERIOD
        });
        if congested {
            return Err(DomainError::InsufficientRest {
                club: club.name.clone(),
            });
        }
    }

    Ok(())
}
