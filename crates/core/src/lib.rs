// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The Matchday core engines.
//!
//! Two pure engines live here, deliberately free of any store or HTTP
//! dependency:
//!
//! - **Match admission** (`admit`): the fail-fast rule chain a candidate
//!   match must pass before persistence. Callers assemble an
//!   [`AdmissionContext`] snapshot from the store and pass it in; the engine
//!   has no side effects.
//! - **Statistics & ranking** (`retrospective`, `head_to_head`,
//!   `opponent_breakdown`, `ranking`): aggregation over a match history
//!   snapshot. Each call is a pure function of its inputs; nothing is cached
//!   or incrementally maintained.

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

mod admission;
mod ranking;
mod stats;

#[cfg(test)]
mod tests;

pub use admission::{AdmissionContext, MatchCandidate, REST_PERIOD, admit};
pub use ranking::{RankingCriterion, RankingEntry, ranking};
pub use stats::{
    HeadToHead, OpponentRetrospective, Retrospective, UNKNOWN_CLUB, head_to_head,
    opponent_breakdown, retrospective,
};
