// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fixed set of allowed region codes.
//!
//! Clubs are registered under one of the 27 Brazilian federative units.
//! The set is a compile-time constant; there is no runtime registration of
//! new regions.

/// The allowed two-letter region codes, in alphabetical order.
pub const REGION_CODES: [&str; 27] = [
    "AC", "AL", "AM", "AP", "BA", "CE", "DF", "ES", "GO", "MA", "MG", "MS", "MT", "PA", "PB", "PE",
    "PI", "PR", "RJ", "RN", "RO", "RR", "RS", "SC", "SE", "SP", "TO",
];

/// Checks whether a code is one of the allowed region codes.
///
/// The comparison is case-insensitive; callers normalize to uppercase before
/// persisting.
#[must_use]
pub fn is_valid_region(code: &str) -> bool {
    let upper: String = code.trim().to_uppercase();
    REGION_CODES.contains(&upper.as_str())
}
