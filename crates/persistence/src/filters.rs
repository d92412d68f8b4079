// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The query/filter layer: optional list parameters translated into store
//! queries.

use time::{Date, PrimitiveDateTime};

/// Pagination parameters. Pages are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    /// Largest accepted page size.
    pub const MAX_SIZE: i64 = 100;
    /// Page size used when the caller does not specify one.
    pub const DEFAULT_SIZE: i64 = 20;

    /// Builds a page request, clamping the size into `1..=MAX_SIZE` and the
    /// page to be non-negative.
    #[must_use]
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page: page.max(0),
            size: size.clamp(1, Self::MAX_SIZE),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: Self::DEFAULT_SIZE,
        }
    }
}

/// One page of results plus the unpaged total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total: i64,
}

impl<T> PageResult<T> {
    /// Slices an already-filtered, already-sorted result set down to the
    /// requested page.
    pub(crate) fn paginate(all: Vec<T>, page: &PageRequest) -> Self {
        let total = i64::try_from(all.len()).unwrap_or(i64::MAX);
        let offset = usize::try_from(page.page.saturating_mul(page.size)).unwrap_or(usize::MAX);
        let size = usize::try_from(page.size).unwrap_or(usize::MAX);
        let items: Vec<T> = all.into_iter().skip(offset).take(size).collect();
        Self {
            items,
            page: page.page,
            size: page.size,
            total,
        }
    }
}

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses a direction parameter; `None` for unrecognized input.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Sortable club columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClubSortField {
    #[default]
    Id,
    Name,
    Region,
    Founded,
}

impl ClubSortField {
    /// Parses a sort-field parameter; `None` for unrecognized input.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "region" => Some(Self::Region),
            "founded" => Some(Self::Founded),
            _ => None,
        }
    }
}

/// Club sort specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClubSort {
    pub field: ClubSortField,
    pub direction: SortDirection,
}

/// Optional filters for the club list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClubFilter {
    /// Case-insensitive substring match on the name.
    pub name: Option<String>,
    /// Exact region code.
    pub region: Option<String>,
    /// Active flag.
    pub active: Option<bool>,
    /// Exact founding date.
    pub founded: Option<Date>,
}

/// Optional filters for the match list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilter {
    /// Case-insensitive substring match on the stadium name.
    pub stadium: Option<String>,
    /// Exact home score.
    pub home_goals: Option<i32>,
    /// Exact away score.
    pub away_goals: Option<i32>,
    /// Exact kickoff timestamp.
    pub kickoff: Option<PrimitiveDateTime>,
}
