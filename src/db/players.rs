use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{params, OptionalExtension, ToSql};
use tracing::debug;

use super::connection::Database;
use super::outcome::{Policy, ReturnValue};
use super::read::or_sentinel;
use crate::models::{Player, PreferredFoot};

impl ToSql for PreferredFoot {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for PreferredFoot {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|err| FromSqlError::Other(Box::new(err)))
    }
}

/// Insert a player. The owning team must already exist.
pub fn add_player(db: &Database, player: &Player) -> ReturnValue {
    debug!(player_id = player.player_id, team_id = player.team_id, "adding player");
    Policy::InsertEntity.resolve(db.execute(
        "INSERT INTO Players (player_id, team_id, age, height, preferred_foot)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            player.player_id,
            player.team_id,
            player.age,
            player.height,
            player.preferred_foot
        ],
    ))
}

/// Look a player up by id, or [`Player::invalid`] when it is unknown.
pub fn get_player_profile(db: &Database, player_id: i64) -> Player {
    let found = db.with_connection(|conn| {
        conn.query_row(
            "SELECT player_id, team_id, age, height, preferred_foot
             FROM Players
             WHERE player_id = ?1",
            params![player_id],
            |row| {
                Ok(Player {
                    player_id: row.get(0)?,
                    team_id: row.get(1)?,
                    age: row.get(2)?,
                    height: row.get(3)?,
                    preferred_foot: row.get(4)?,
                })
            },
        )
        .optional()
    });
    or_sentinel(found, Player::invalid, "player")
}

/// Delete a player by id. Their goal records cascade.
pub fn delete_player(db: &Database, player: &Player) -> ReturnValue {
    debug!(player_id = player.player_id, "deleting player");
    Policy::DeleteEntity.resolve(db.execute(
        "DELETE FROM Players WHERE player_id = ?1",
        params![player.player_id],
    ))
}
