// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use tracing::debug;

use matchday_domain::{Club, ClubFields, format_date};

use crate::filters::{ClubFilter, ClubSort, ClubSortField, PageRequest, PageResult, SortDirection};
use crate::models::{ClubRow, rows_into_domain};
use crate::schema::clubs::dsl::{active, clubs, founded, id, name, region};
use crate::sqlite::last_insert_rowid;
use crate::{PersistenceError, SqliteStore};

impl SqliteStore {
    /// Inserts a new club and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_club(&mut self, fields: &ClubFields) -> Result<Club, PersistenceError> {
        debug!("Inserting club: {} ({})", fields.name, fields.region);

        diesel::insert_into(clubs)
            .values((
                name.eq(&fields.name),
                region.eq(&fields.region),
                founded.eq(format_date(fields.founded)),
                active.eq(i32::from(fields.active)),
            ))
            .execute(&mut self.conn)?;

        let new_id: i64 = last_insert_rowid(&mut self.conn)?;
        Ok(Club {
            id: new_id,
            name: fields.name.clone(),
            region: fields.region.clone(),
            founded: fields.founded,
            active: fields.active,
        })
    }

    /// Fetches a club by id, or `None` if no such club exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is corrupt.
    pub fn get_club(&mut self, club_id: i64) -> Result<Option<Club>, PersistenceError> {
        let row: Option<ClubRow> = clubs
            .filter(id.eq(club_id))
            .first::<ClubRow>(&mut self.conn)
            .optional()?;

        row.map(ClubRow::into_domain).transpose()
    }

    /// Overwrites the stored fields of an existing club.
    ///
    /// Returns the updated club, or `None` if no club with that id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_club(
        &mut self,
        club_id: i64,
        fields: &ClubFields,
    ) -> Result<Option<Club>, PersistenceError> {
        debug!("Updating club {}: {}", club_id, fields.name);

        let updated: usize = diesel::update(clubs.filter(id.eq(club_id)))
            .set((
                name.eq(&fields.name),
                region.eq(&fields.region),
                founded.eq(format_date(fields.founded)),
                active.eq(i32::from(fields.active)),
            ))
            .execute(&mut self.conn)?;

        if updated == 0 {
            return Ok(None);
        }
        Ok(Some(Club {
            id: club_id,
            name: fields.name.clone(),
            region: fields.region.clone(),
            founded: fields.founded,
            active: fields.active,
        }))
    }

    /// Marks a club inactive without removing its rows or match history.
    ///
    /// Returns the deactivated club, or `None` if no club with that id
    /// exists. Deactivating an already inactive club is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn deactivate_club(&mut self, club_id: i64) -> Result<Option<Club>, PersistenceError> {
        debug!("Deactivating club {}", club_id);

        let updated: usize = diesel::update(clubs.filter(id.eq(club_id)))
            .set(active.eq(0))
            .execute(&mut self.conn)?;

        if updated == 0 {
            return Ok(None);
        }
        self.get_club(club_id)
    }

    /// Lists clubs matching `filter`, ordered by `sort`, one page at a
    /// time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is corrupt.
    pub fn list_clubs(
        &mut self,
        filter: &ClubFilter,
        sort: ClubSort,
        page: PageRequest,
    ) -> Result<PageResult<Club>, PersistenceError> {
        let mut query = clubs.into_boxed();

        if let Some(name_fragment) = &filter.name {
            query = query.filter(name.like(format!("%{name_fragment}%")));
        }
        if let Some(region_code) = &filter.region {
            query = query.filter(region.eq(region_code.clone()));
        }
        if let Some(is_active) = filter.active {
            query = query.filter(active.eq(i32::from(is_active)));
        }
        if let Some(founded_on) = filter.founded {
            query = query.filter(founded.eq(format_date(founded_on)));
        }

        // Dates are stored as fixed-width ISO 8601 text, so lexicographic
        // ordering is chronological.
        let descending: bool = sort.direction == SortDirection::Desc;
        query = match (sort.field, descending) {
            (ClubSortField::Id, false) => query.order(id.asc()),
            (ClubSortField::Id, true) => query.order(id.desc()),
            (ClubSortField::Name, false) => query.order(name.asc()),
            (ClubSortField::Name, true) => query.order(name.desc()),
            (ClubSortField::Region, false) => query.order(region.asc()),
            (ClubSortField::Region, true) => query.order(region.desc()),
            (ClubSortField::Founded, false) => query.order(founded.asc()),
            (ClubSortField::Founded, true) => query.order(founded.desc()),
        };

        let rows: Vec<ClubRow> = query.load::<ClubRow>(&mut self.conn)?;
        let all: Vec<Club> = rows_into_domain(rows, ClubRow::into_domain)?;
        Ok(PageResult::paginate(all, &page))
    }

    /// Reports whether another club already uses this name within the same
    /// region. `exclude` skips a club id, so updates do not collide with
    /// the club being updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn club_name_taken(
        &mut self,
        club_name: &str,
        region_code: &str,
        exclude: Option<i64>,
    ) -> Result<bool, PersistenceError> {
        let count: i64 = match exclude {
            Some(excluded_id) => clubs
                .filter(name.eq(club_name))
                .filter(region.eq(region_code))
                .filter(id.ne(excluded_id))
                .count()
                .get_result(&mut self.conn)?,
            None => clubs
                .filter(name.eq(club_name))
                .filter(region.eq(region_code))
                .count()
                .get_result(&mut self.conn)?,
        };
        Ok(count > 0)
    }

    /// Returns every club in the store, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is corrupt.
    pub fn all_clubs(&mut self) -> Result<Vec<Club>, PersistenceError> {
        let rows: Vec<ClubRow> = clubs.order(id.asc()).load::<ClubRow>(&mut self.conn)?;
        rows_into_domain(rows, ClubRow::into_domain)
    }
}
