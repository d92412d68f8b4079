// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

use crate::error::DomainError;
use crate::regions::is_valid_region;

/// Validates the field-level rules of a club registration or update.
///
/// Uniqueness of name within region requires store context and is checked
/// separately by the caller.
///
/// # Arguments
///
/// * `name` - The club name as submitted
/// * `region` - The region code as submitted
/// * `founded` - The founding date
/// * `today` - The current date, supplied by the caller
///
/// # Returns
///
/// The normalized `(name, region)` pair: name trimmed, region trimmed and
/// uppercased.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or shorter than 2 characters
/// - The region code is not in the allowed set
/// - The founding date lies after `today`
pub fn validate_club_fields(
    name: &str,
    region: &str,
    founded: Date,
    today: Date,
) -> Result<(String, String), DomainError> {
    let name: &str = name.trim();
    if name.is_empty() {
        return Err(DomainError::MissingField("name"));
    }
    // Rule: club names need at least 2 characters
    if name.chars().count() < 2 {
        return Err(DomainError::InvalidClubName(String::from(
            "Club name must have at least 2 characters",
        )));
    }

    let region: String = region.trim().to_uppercase();
    if region.is_empty() {
        return Err(DomainError::MissingField("region"));
    }
    if !is_valid_region(&region) {
        return Err(DomainError::InvalidRegion(region));
    }

    // Rule: a club cannot be founded in the future
    if founded > today {
        return Err(DomainError::FoundedInFuture { founded });
    }

    Ok((name.to_string(), region))
}

/// Validates a stadium name and returns it trimmed.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The name contains anything other than letters and spaces
/// - The name has fewer than 3 letters
pub fn validate_stadium_name(name: &str) -> Result<String, DomainError> {
    let name: &str = name.trim();
    if name.is_empty() {
        return Err(DomainError::MissingField("name"));
    }

    // Rule: letters (accented included) and spaces only
    if !name.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(DomainError::InvalidStadiumName(String::from(
            "Stadium name must contain only letters and spaces",
        )));
    }

    // Rule: at least 3 letters, spaces not counted
    let letters: usize = name.chars().filter(|c| c.is_alphabetic()).count();
    if letters < 3 {
        return Err(DomainError::InvalidStadiumName(String::from(
            "Stadium name must have at least 3 letters",
        )));
    }

    Ok(name.to_string())
}
