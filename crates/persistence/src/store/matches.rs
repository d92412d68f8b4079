// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use time::{Duration, PrimitiveDateTime};
use tracing::debug;

use matchday_domain::{Match, MatchFields, format_datetime};

use crate::filters::{MatchFilter, PageRequest, PageResult};
use crate::models::{MatchRow, rows_into_domain};
use crate::schema::matches::dsl::{
    away_club_id, away_goals, home_club_id, home_goals, id, kickoff, matches, stadium,
};
use crate::sqlite::last_insert_rowid;
use crate::{PersistenceError, SqliteStore};

impl SqliteStore {
    /// Inserts a new match and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_match(&mut self, fields: &MatchFields) -> Result<Match, PersistenceError> {
        debug!(
            "Inserting match: {} vs {} at {}",
            fields.home_club_id, fields.away_club_id, fields.stadium
        );

        diesel::insert_into(matches)
            .values((
                home_club_id.eq(fields.home_club_id),
                away_club_id.eq(fields.away_club_id),
                home_goals.eq(fields.home_goals),
                away_goals.eq(fields.away_goals),
                stadium.eq(&fields.stadium),
                kickoff.eq(format_datetime(fields.kickoff)),
            ))
            .execute(&mut self.conn)?;

        let new_id: i64 = last_insert_rowid(&mut self.conn)?;
        Ok(fields_into_match(new_id, fields))
    }

    /// Fetches a match by id, or `None` if no such match exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is corrupt.
    pub fn get_match(&mut self, match_id: i64) -> Result<Option<Match>, PersistenceError> {
        let row: Option<MatchRow> = matches
            .filter(id.eq(match_id))
            .first::<MatchRow>(&mut self.conn)
            .optional()?;

        row.map(MatchRow::into_domain).transpose()
    }

    /// Overwrites the stored fields of an existing match.
    ///
    /// Returns the updated match, or `None` if no match with that id
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_match(
        &mut self,
        match_id: i64,
        fields: &MatchFields,
    ) -> Result<Option<Match>, PersistenceError> {
        debug!("Updating match {}", match_id);

        let updated: usize = diesel::update(matches.filter(id.eq(match_id)))
            .set((
                home_club_id.eq(fields.home_club_id),
                away_club_id.eq(fields.away_club_id),
                home_goals.eq(fields.home_goals),
                away_goals.eq(fields.away_goals),
                stadium.eq(&fields.stadium),
                kickoff.eq(format_datetime(fields.kickoff)),
            ))
            .execute(&mut self.conn)?;

        if updated == 0 {
            return Ok(None);
        }
        Ok(Some(fields_into_match(match_id, fields)))
    }

    /// Removes a match. Returns `true` if a row was deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_match(&mut self, match_id: i64) -> Result<bool, PersistenceError> {
        debug!("Deleting match {}", match_id);

        let deleted: usize =
            diesel::delete(matches.filter(id.eq(match_id))).execute(&mut self.conn)?;
        Ok(deleted > 0)
    }

    /// Lists matches matching `filter`, most recent kickoff first, one
    /// page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is corrupt.
    pub fn list_matches(
        &mut self,
        filter: &MatchFilter,
        page: PageRequest,
    ) -> Result<PageResult<Match>, PersistenceError> {
        let mut query = matches.into_boxed();

        if let Some(stadium_fragment) = &filter.stadium {
            query = query.filter(stadium.like(format!("%{stadium_fragment}%")));
        }
        if let Some(goals) = filter.home_goals {
            query = query.filter(home_goals.eq(goals));
        }
        if let Some(goals) = filter.away_goals {
            query = query.filter(away_goals.eq(goals));
        }
        if let Some(at) = filter.kickoff {
            query = query.filter(kickoff.eq(format_datetime(at)));
        }

        let rows: Vec<MatchRow> = query
            .order(kickoff.desc())
            .load::<MatchRow>(&mut self.conn)?;
        let all: Vec<Match> = rows_into_domain(rows, MatchRow::into_domain)?;
        Ok(PageResult::paginate(all, &page))
    }

    /// Returns every match a club played, home or away, most recent
    /// kickoff first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is corrupt.
    pub fn matches_for_club(&mut self, club_id: i64) -> Result<Vec<Match>, PersistenceError> {
        let rows: Vec<MatchRow> = matches
            .filter(home_club_id.eq(club_id).or(away_club_id.eq(club_id)))
            .order(kickoff.desc())
            .load::<MatchRow>(&mut self.conn)?;
        rows_into_domain(rows, MatchRow::into_domain)
    }

    /// Returns a club's matches with kickoffs inside the closed interval
    /// `center - radius ..= center + radius`.
    ///
    /// Kickoffs are stored as fixed-width ISO 8601 text, so the text
    /// comparison below is chronological.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is corrupt.
    pub fn matches_for_club_in_window(
        &mut self,
        club_id: i64,
        center: PrimitiveDateTime,
        radius: Duration,
    ) -> Result<Vec<Match>, PersistenceError> {
        let lower: String =
            format_datetime(center.checked_sub(radius).unwrap_or(PrimitiveDateTime::MIN));
        let upper: String =
            format_datetime(center.checked_add(radius).unwrap_or(PrimitiveDateTime::MAX));

        let rows: Vec<MatchRow> = matches
            .filter(home_club_id.eq(club_id).or(away_club_id.eq(club_id)))
            .filter(kickoff.ge(lower))
            .filter(kickoff.le(upper))
            .load::<MatchRow>(&mut self.conn)?;
        rows_into_domain(rows, MatchRow::into_domain)
    }

    /// Returns every match played between two clubs, in either home/away
    /// arrangement, most recent kickoff first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is corrupt.
    pub fn matches_between(
        &mut self,
        first: i64,
        second: i64,
    ) -> Result<Vec<Match>, PersistenceError> {
        let rows: Vec<MatchRow> = matches
            .filter(
                home_club_id
                    .eq(first)
                    .and(away_club_id.eq(second))
                    .or(home_club_id.eq(second).and(away_club_id.eq(first))),
            )
            .order(kickoff.desc())
            .load::<MatchRow>(&mut self.conn)?;
        rows_into_domain(rows, MatchRow::into_domain)
    }

    /// Returns the matches scheduled at a stadium for an exact kickoff
    /// instant.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is corrupt.
    pub fn matches_at_stadium_kickoff(
        &mut self,
        stadium_name: &str,
        at: PrimitiveDateTime,
    ) -> Result<Vec<Match>, PersistenceError> {
        let rows: Vec<MatchRow> = matches
            .filter(stadium.eq(stadium_name))
            .filter(kickoff.eq(format_datetime(at)))
            .load::<MatchRow>(&mut self.conn)?;
        rows_into_domain(rows, MatchRow::into_domain)
    }

    /// Returns every match in the store, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is corrupt.
    pub fn all_matches(&mut self) -> Result<Vec<Match>, PersistenceError> {
        let rows: Vec<MatchRow> = matches.order(id.asc()).load::<MatchRow>(&mut self.conn)?;
        rows_into_domain(rows, MatchRow::into_domain)
    }
}

fn fields_into_match(match_id: i64, fields: &MatchFields) -> Match {
    Match {
        id: match_id,
        home_club_id: fields.home_club_id,
        away_club_id: fields.away_club_id,
        home_goals: fields.home_goals,
        away_goals: fields.away_goals,
        stadium: fields.stadium.clone(),
        kickoff: fields.kickoff,
    }
}
