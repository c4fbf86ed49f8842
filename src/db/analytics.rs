//! Ordered id reports over the derived views. Every function returns an empty
//! list when nothing qualifies or when the store fails.

use rusqlite::params;

use super::connection::Database;
use super::read::id_list;

/// Teams with two players taller than 190 cm that have played at least one
/// match, highest id first, at most 5.
pub fn get_active_tall_teams(db: &Database) -> Vec<i64> {
    id_list(
        db,
        "active tall teams",
        "SELECT team_id
         FROM ActiveTallTeams
         ORDER BY team_id DESC
         LIMIT 5",
        [],
    )
}

/// Active tall teams owning a stadium with more than 55000 seats, lowest id
/// first, at most 5.
pub fn get_active_tall_rich_teams(db: &Database) -> Vec<i64> {
    id_list(
        db,
        "active tall rich teams",
        "SELECT A.team_id
         FROM ActiveTallTeams A
         INNER JOIN Stadiums S ON S.team_id = A.team_id
         WHERE S.capacity > 55000
         ORDER BY A.team_id ASC
         LIMIT 5",
        [],
    )
}

/// Teams that never hosted a match, plus teams whose every recorded home
/// match drew more than 40000 spectators. Highest id first, at most 10.
pub fn popular_teams(db: &Database) -> Vec<i64> {
    id_list(
        db,
        "popular teams",
        "SELECT team_id FROM DidntPlayAtHome
         UNION
         SELECT first_team_id FROM PopularNotEmptyWay
         ORDER BY team_id DESC
         LIMIT 10",
        [],
    )
}

/// Every stadium, most goals first and lowest id among ties. Stadiums that
/// never saw a goal are kept with a total of zero.
pub fn get_most_attractive_stadiums(db: &Database) -> Vec<i64> {
    id_list(
        db,
        "most attractive stadiums",
        "SELECT S.stadium_id
         FROM Stadiums S
         LEFT JOIN GoalsInStadium G ON G.stadium_id = S.stadium_id
         ORDER BY COALESCE(G.goals, 0) DESC, S.stadium_id ASC",
        [],
    )
}

/// Top scorers of a team, most goals first and highest id among ties, at
/// most 5. Players who never scored still appear with zero goals.
pub fn most_goals_for_team(db: &Database, team_id: i64) -> Vec<i64> {
    id_list(
        db,
        "team top scorers",
        "SELECT player_id
         FROM PlayerGoalsInTeam
         WHERE team_id = ?1
         ORDER BY goals DESC, player_id DESC
         LIMIT 5",
        params![team_id],
    )
}

/// Players who also scored in at least half of the matches `player_id`
/// scored in, lowest id first, at most 10.
///
/// A player with no goals has an empty requirement, so every other player
/// qualifies.
pub fn get_close_players(db: &Database, player_id: i64) -> Vec<i64> {
    id_list(
        db,
        "close players",
        "SELECT O.player_id
         FROM Players O
         LEFT JOIN (
             SELECT G.player_id AS player_id, COUNT(*) AS shared
             FROM Player_Scored_In P
             INNER JOIN Player_Scored_In G ON G.match_id = P.match_id
             WHERE P.player_id = ?1 AND G.player_id <> ?1
             GROUP BY G.player_id
         ) C ON C.player_id = O.player_id
         WHERE O.player_id <> ?1
           AND 2 * COALESCE(C.shared, 0) >=
               (SELECT COUNT(*) FROM Player_Scored_In WHERE player_id = ?1)
         ORDER BY O.player_id ASC
         LIMIT 10",
        params![player_id],
    )
}
