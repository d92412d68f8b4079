// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use matchday_domain::{Club, Match, Stadium};
use time::macros::date;
use time::PrimitiveDateTime;

pub fn create_test_club(id: i64, name: &str) -> Club {
    Club {
        id,
        name: String::from(name),
        region: String::from("RJ"),
        founded: date!(2000 - 01 - 01),
        active: true,
    }
}

pub fn create_test_stadium(name: &str) -> Stadium {
    Stadium {
        id: 1,
        name: String::from(name),
    }
}

pub fn create_test_match(
    id: i64,
    home: i64,
    away: i64,
    home_goals: i32,
    away_goals: i32,
    kickoff: PrimitiveDateTime,
) -> Match {
    Match {
        id,
        home_club_id: home,
        away_club_id: away,
        home_goals,
        away_goals,
        stadium: String::from("Maracana"),
        kickoff,
    }
}
