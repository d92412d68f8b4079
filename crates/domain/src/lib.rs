// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod dates;
mod error;
mod regions;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use dates::{format_date, format_datetime, parse_date, parse_datetime};
pub use error::DomainError;
pub use regions::{REGION_CODES, is_valid_region};
pub use types::{Club, ClubFields, Match, MatchFields, Stadium};
pub use validation::{validate_club_fields, validate_stadium_name};
