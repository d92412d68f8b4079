// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use tracing::debug;

use matchday_domain::Stadium;

use crate::filters::{PageRequest, PageResult};
use crate::models::StadiumRow;
use crate::schema::stadiums::dsl::{id, name, stadiums};
use crate::sqlite::last_insert_rowid;
use crate::{PersistenceError, SqliteStore};

impl SqliteStore {
    /// Inserts a new stadium and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_stadium(&mut self, stadium_name: &str) -> Result<Stadium, PersistenceError> {
        debug!("Inserting stadium: {}", stadium_name);

        diesel::insert_into(stadiums)
            .values(name.eq(stadium_name))
            .execute(&mut self.conn)?;

        let new_id: i64 = last_insert_rowid(&mut self.conn)?;
        Ok(Stadium {
            id: new_id,
            name: String::from(stadium_name),
        })
    }

    /// Fetches a stadium by id, or `None` if no such stadium exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_stadium(&mut self, stadium_id: i64) -> Result<Option<Stadium>, PersistenceError> {
        let row: Option<StadiumRow> = stadiums
            .filter(id.eq(stadium_id))
            .first::<StadiumRow>(&mut self.conn)
            .optional()?;

        Ok(row.map(StadiumRow::into_domain))
    }

    /// Fetches a stadium by exact name, or `None` if no such stadium
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_stadium_by_name(
        &mut self,
        stadium_name: &str,
    ) -> Result<Option<Stadium>, PersistenceError> {
        let row: Option<StadiumRow> = stadiums
            .filter(name.eq(stadium_name))
            .first::<StadiumRow>(&mut self.conn)
            .optional()?;

        Ok(row.map(StadiumRow::into_domain))
    }

    /// Renames an existing stadium.
    ///
    /// Returns the updated stadium, or `None` if no stadium with that id
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_stadium(
        &mut self,
        stadium_id: i64,
        stadium_name: &str,
    ) -> Result<Option<Stadium>, PersistenceError> {
        debug!("Updating stadium {}: {}", stadium_id, stadium_name);

        let updated: usize = diesel::update(stadiums.filter(id.eq(stadium_id)))
            .set(name.eq(stadium_name))
            .execute(&mut self.conn)?;

        if updated == 0 {
            return Ok(None);
        }
        Ok(Some(Stadium {
            id: stadium_id,
            name: String::from(stadium_name),
        }))
    }

    /// Removes a stadium. Returns `true` if a row was deleted.
    ///
    /// Matches reference stadiums by name, so past matches keep their
    /// venue even when the stadium row goes away.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_stadium(&mut self, stadium_id: i64) -> Result<bool, PersistenceError> {
        debug!("Deleting stadium {}", stadium_id);

        let deleted: usize =
            diesel::delete(stadiums.filter(id.eq(stadium_id))).execute(&mut self.conn)?;
        Ok(deleted > 0)
    }

    /// Lists stadiums ordered by name, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_stadiums(
        &mut self,
        page: PageRequest,
    ) -> Result<PageResult<Stadium>, PersistenceError> {
        let rows: Vec<StadiumRow> = stadiums
            .order(name.asc())
            .load::<StadiumRow>(&mut self.conn)?;
        let all: Vec<Stadium> = rows.into_iter().map(StadiumRow::into_domain).collect();
        Ok(PageResult::paginate(all, &page))
    }

    /// Reports whether another stadium already uses this name. `exclude`
    /// skips a stadium id, so renames do not collide with the stadium
    /// being renamed.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn stadium_name_taken(
        &mut self,
        stadium_name: &str,
        exclude: Option<i64>,
    ) -> Result<bool, PersistenceError> {
        let count: i64 = match exclude {
            Some(excluded_id) => stadiums
                .filter(name.eq(stadium_name))
                .filter(id.ne(excluded_id))
                .count()
                .get_result(&mut self.conn)?,
            None => stadiums
                .filter(name.eq(stadium_name))
                .count()
                .get_result(&mut self.conn)?,
        };
        Ok(count > 0)
    }
}
