use rusqlite::params;
use tracing::debug;

use super::connection::Database;
use super::outcome::{Policy, ReturnValue};
use super::read::or_fallback;
use crate::models::{Match, Stadium};

/// Returned by [`average_attendance_in_stadium`] when the query fails.
pub const ATTENDANCE_QUERY_FAILED: f64 = -1.0;
/// Returned by [`stadium_total_goals`] when the query fails.
pub const GOALS_QUERY_FAILED: i64 = -1;

/// Record that `fixture` was played in `stadium` in front of `attendance`
/// spectators. A match has at most one venue.
pub fn match_in_stadium(
    db: &Database,
    fixture: &Match,
    stadium: &Stadium,
    attendance: i64,
) -> ReturnValue {
    debug!(
        match_id = fixture.match_id,
        stadium_id = stadium.stadium_id,
        attendance,
        "recording venue"
    );
    Policy::InsertAssociation.resolve(db.execute(
        "INSERT INTO Played_In (match_id, stadium_id, audience_number) VALUES (?1, ?2, ?3)",
        params![fixture.match_id, stadium.stadium_id, attendance],
    ))
}

/// Remove the venue record of `fixture`, but only if it names `stadium`.
pub fn match_not_in_stadium(db: &Database, fixture: &Match, stadium: &Stadium) -> ReturnValue {
    debug!(
        match_id = fixture.match_id,
        stadium_id = stadium.stadium_id,
        "removing venue"
    );
    Policy::DeleteAssociation.resolve(db.execute(
        "DELETE FROM Played_In WHERE match_id = ?1 AND stadium_id = ?2",
        params![fixture.match_id, stadium.stadium_id],
    ))
}

/// Mean attendance over every match recorded in the stadium, `0.0` if none.
pub fn average_attendance_in_stadium(db: &Database, stadium_id: i64) -> f64 {
    let average = db.with_connection(|conn| {
        conn.query_row(
            "SELECT COALESCE(AVG(audience_number), 0.0) FROM Played_In WHERE stadium_id = ?1",
            params![stadium_id],
            |row| row.get::<_, f64>(0),
        )
    });
    or_fallback(average, ATTENDANCE_QUERY_FAILED, "average attendance")
}

/// Goals scored across every match played in the stadium, `0` if none.
pub fn stadium_total_goals(db: &Database, stadium_id: i64) -> i64 {
    let total = db.with_connection(|conn| {
        conn.query_row(
            "SELECT COALESCE(SUM(S.num_of_goals), 0)
             FROM Player_Scored_In S
             INNER JOIN Played_In P ON P.match_id = S.match_id
             WHERE P.stadium_id = ?1",
            params![stadium_id],
            |row| row.get::<_, i64>(0),
        )
    });
    or_fallback(total, GOALS_QUERY_FAILED, "stadium goals")
}
