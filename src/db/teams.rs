use rusqlite::{params, OptionalExtension};
use tracing::debug;

use super::connection::Database;
use super::outcome::{Policy, ReturnValue};
use super::read::or_sentinel;
use crate::models::Team;

/// Register a team. Non-positive ids are rejected by the schema.
pub fn add_team(db: &Database, team_id: i64) -> ReturnValue {
    debug!(team_id, "adding team");
    Policy::InsertEntity.resolve(db.execute(
        "INSERT INTO Teams (team_id) VALUES (?1)",
        params![team_id],
    ))
}

/// Look a team up by id, or [`Team::invalid`] when it is unknown.
pub fn get_team_profile(db: &Database, team_id: i64) -> Team {
    let found = db.with_connection(|conn| {
        conn.query_row(
            "SELECT team_id FROM Teams WHERE team_id = ?1",
            params![team_id],
            |row| Ok(Team::new(row.get(0)?)),
        )
        .optional()
    });
    or_sentinel(found, Team::invalid, "team")
}

/// Remove a team together with its stadium, players and matches, and through
/// those every goal and attendance record that referenced them.
pub fn delete_team(db: &Database, team_id: i64) -> ReturnValue {
    debug!(team_id, "deleting team");
    Policy::DeleteEntity.resolve(db.execute(
        "DELETE FROM Teams WHERE team_id = ?1",
        params![team_id],
    ))
}
