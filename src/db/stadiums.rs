use rusqlite::{params, OptionalExtension};
use tracing::debug;

use super::connection::Database;
use super::outcome::{Policy, ReturnValue};
use super::read::or_sentinel;
use crate::models::Stadium;

/// Insert a stadium. An owning team may hold only one stadium; `None` stores
/// a neutral venue.
pub fn add_stadium(db: &Database, stadium: &Stadium) -> ReturnValue {
    debug!(stadium_id = stadium.stadium_id, "adding stadium");
    Policy::InsertEntity.resolve(db.execute(
        "INSERT INTO Stadiums (stadium_id, capacity, team_id) VALUES (?1, ?2, ?3)",
        params![stadium.stadium_id, stadium.capacity, stadium.team_id],
    ))
}

/// Look a stadium up by id, or [`Stadium::invalid`] when it is unknown.
pub fn get_stadium_profile(db: &Database, stadium_id: i64) -> Stadium {
    let found = db.with_connection(|conn| {
        conn.query_row(
            "SELECT stadium_id, capacity, team_id FROM Stadiums WHERE stadium_id = ?1",
            params![stadium_id],
            |row| {
                Ok(Stadium {
                    stadium_id: row.get(0)?,
                    capacity: row.get(1)?,
                    team_id: row.get(2)?,
                })
            },
        )
        .optional()
    });
    or_sentinel(found, Stadium::invalid, "stadium")
}

/// Delete a stadium by id. Attendance records for it cascade.
pub fn delete_stadium(db: &Database, stadium: &Stadium) -> ReturnValue {
    debug!(stadium_id = stadium.stadium_id, "deleting stadium");
    Policy::DeleteEntity.resolve(db.execute(
        "DELETE FROM Stadiums WHERE stadium_id = ?1",
        params![stadium.stadium_id],
    ))
}
