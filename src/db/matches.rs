use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{params, OptionalExtension, ToSql};
use tracing::debug;

use super::connection::Database;
use super::outcome::{Policy, ReturnValue};
use super::read::or_sentinel;
use crate::models::{Competition, Match};

impl ToSql for Competition {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Competition {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|err| FromSqlError::Other(Box::new(err)))
    }
}

/// Insert a match. Both teams must exist and differ from each other.
pub fn add_match(db: &Database, fixture: &Match) -> ReturnValue {
    debug!(match_id = fixture.match_id, "adding match");
    Policy::InsertEntity.resolve(db.execute(
        "INSERT INTO Matches (match_id, competition, first_team_id, second_team_id)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            fixture.match_id,
            fixture.competition,
            fixture.home_team_id,
            fixture.away_team_id
        ],
    ))
}

/// Look a match up by id, or [`Match::invalid`] when it is unknown.
pub fn get_match_profile(db: &Database, match_id: i64) -> Match {
    let found = db.with_connection(|conn| {
        conn.query_row(
            "SELECT match_id, competition, first_team_id, second_team_id
             FROM Matches
             WHERE match_id = ?1",
            params![match_id],
            |row| {
                Ok(Match {
                    match_id: row.get(0)?,
                    competition: row.get(1)?,
                    home_team_id: row.get(2)?,
                    away_team_id: row.get(3)?,
                })
            },
        )
        .optional()
    });
    or_sentinel(found, Match::invalid, "match")
}

/// Delete a match by id. Goals and the venue record go with it.
pub fn delete_match(db: &Database, fixture: &Match) -> ReturnValue {
    debug!(match_id = fixture.match_id, "deleting match");
    Policy::DeleteEntity.resolve(db.execute(
        "DELETE FROM Matches WHERE match_id = ?1",
        params![fixture.match_id],
    ))
}
