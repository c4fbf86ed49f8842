use rusqlite::{params, OptionalExtension};
use tracing::debug;

use super::connection::Database;
use super::outcome::{Policy, ReturnValue};
use super::read::or_fallback;
use crate::models::{Match, Player};

/// Record that `player` scored `amount` goals in `fixture`. A player has at
/// most one goal record per match, and the count must be positive.
pub fn player_scored_in_match(
    db: &Database,
    fixture: &Match,
    player: &Player,
    amount: i64,
) -> ReturnValue {
    debug!(
        player_id = player.player_id,
        match_id = fixture.match_id,
        amount,
        "recording goals"
    );
    Policy::InsertAssociation.resolve(db.execute(
        "INSERT INTO Player_Scored_In (player_id, match_id, num_of_goals) VALUES (?1, ?2, ?3)",
        params![player.player_id, fixture.match_id, amount],
    ))
}

/// Remove the goal record of `player` in `fixture`.
pub fn player_didnt_score_in_match(db: &Database, fixture: &Match, player: &Player) -> ReturnValue {
    debug!(
        player_id = player.player_id,
        match_id = fixture.match_id,
        "removing goals"
    );
    Policy::DeleteAssociation.resolve(db.execute(
        "DELETE FROM Player_Scored_In WHERE player_id = ?1 AND match_id = ?2",
        params![player.player_id, fixture.match_id],
    ))
}

/// Whether the player scored at least half of the match's goals, rounding the
/// half up: with 5 goals in the match the player needs 3. A player with no
/// goal record in the match is never a winner.
pub fn player_is_winner(db: &Database, player_id: i64, match_id: i64) -> bool {
    let found = db.with_connection(|conn| {
        conn.query_row(
            "SELECT 1
             FROM Player_Scored_In P
             INNER JOIN Goals_Per_Match G ON G.match_id = P.match_id
             WHERE P.player_id = ?1
               AND P.match_id = ?2
               AND P.num_of_goals >= (G.goals + 1) / 2",
            params![player_id, match_id],
            |_| Ok(()),
        )
        .optional()
        .map(|row| row.is_some())
    });
    or_fallback(found, false, "winner check")
}
