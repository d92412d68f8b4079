// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date and timestamp parsing and formatting.
//!
//! Everything on the wire and in the store uses fixed-width ISO 8601 text
//! (`2024-03-01` and `2024-03-01T16:00:00`), so lexicographic comparison of
//! stored values is chronological.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

use crate::error::DomainError;

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

const DATETIME_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Parses a calendar date from `YYYY-MM-DD` text.
///
/// # Errors
///
/// Returns `DomainError::DateParse` if the input does not match the format.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, DATE_FORMAT).map_err(|e| DomainError::DateParse {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Parses a timestamp from `YYYY-MM-DDTHH:MM:SS` text.
///
/// # Errors
///
/// Returns `DomainError::DateParse` if the input does not match the format.
pub fn parse_datetime(value: &str) -> Result<PrimitiveDateTime, DomainError> {
    PrimitiveDateTime::parse(value, DATETIME_FORMAT).map_err(|e| DomainError::DateParse {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Formats a calendar date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS`.
#[must_use]
pub fn format_datetime(datetime: PrimitiveDateTime) -> String {
    datetime
        .format(DATETIME_FORMAT)
        .unwrap_or_else(|_| datetime.to_string())
}
