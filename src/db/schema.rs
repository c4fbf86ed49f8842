//! Table and view definitions plus the setup/teardown operations built on them.
//!
//! Domain invariants live in the DDL: every id is positive, enum-like columns
//! are restricted to their literals, and deleting a team cascades to its
//! stadium, players and matches (and from there to goals and attendances).

use anyhow::{Context, Result};
use tracing::info;

use super::connection::Database;

/// Base tables in creation order. Parents come before the tables that
/// reference them.
const TABLES: &[(&str, &str)] = &[
    (
        "Teams",
        "CREATE TABLE IF NOT EXISTS Teams (
            team_id INTEGER NOT NULL PRIMARY KEY,
            CHECK (team_id > 0)
        )",
    ),
    (
        "Stadiums",
        "CREATE TABLE IF NOT EXISTS Stadiums (
            stadium_id INTEGER NOT NULL PRIMARY KEY,
            capacity INTEGER NOT NULL,
            team_id INTEGER UNIQUE REFERENCES Teams(team_id) ON DELETE CASCADE,
            CHECK (stadium_id > 0),
            CHECK (capacity > 0),
            CHECK (team_id > 0)
        )",
    ),
    (
        "Players",
        "CREATE TABLE IF NOT EXISTS Players (
            player_id INTEGER NOT NULL PRIMARY KEY,
            team_id INTEGER NOT NULL REFERENCES Teams(team_id) ON DELETE CASCADE,
            age INTEGER NOT NULL,
            height INTEGER NOT NULL,
            preferred_foot TEXT NOT NULL,
            CHECK (player_id > 0),
            CHECK (team_id > 0),
            CHECK (age > 0),
            CHECK (height > 0),
            CHECK (preferred_foot IN ('Left', 'Right'))
        )",
    ),
    (
        "Matches",
        "CREATE TABLE IF NOT EXISTS Matches (
            match_id INTEGER NOT NULL PRIMARY KEY,
            competition TEXT NOT NULL,
            first_team_id INTEGER NOT NULL REFERENCES Teams(team_id) ON DELETE CASCADE,
            second_team_id INTEGER NOT NULL REFERENCES Teams(team_id) ON DELETE CASCADE,
            CHECK (match_id > 0),
            CHECK (first_team_id > 0),
            CHECK (second_team_id > 0),
            CHECK (first_team_id <> second_team_id),
            CHECK (competition IN ('International', 'Domestic'))
        )",
    ),
    (
        "Player_Scored_In",
        "CREATE TABLE IF NOT EXISTS Player_Scored_In (
            player_id INTEGER NOT NULL REFERENCES Players(player_id) ON DELETE CASCADE,
            match_id INTEGER NOT NULL REFERENCES Matches(match_id) ON DELETE CASCADE,
            num_of_goals INTEGER NOT NULL,
            PRIMARY KEY (player_id, match_id),
            CHECK (num_of_goals > 0)
        )",
    ),
    (
        "Played_In",
        "CREATE TABLE IF NOT EXISTS Played_In (
            match_id INTEGER NOT NULL PRIMARY KEY REFERENCES Matches(match_id) ON DELETE CASCADE,
            stadium_id INTEGER NOT NULL REFERENCES Stadiums(stadium_id) ON DELETE CASCADE,
            audience_number INTEGER NOT NULL,
            CHECK (audience_number >= 0)
        )",
    ),
];

/// Derived relations in creation order. Later views build on earlier ones.
const VIEWS: &[(&str, &str)] = &[
    (
        "Goals_Per_Match",
        "CREATE VIEW IF NOT EXISTS Goals_Per_Match AS
         SELECT match_id, SUM(num_of_goals) AS goals
         FROM Player_Scored_In
         GROUP BY match_id",
    ),
    (
        "Played_At_Least_One_Match",
        "CREATE VIEW IF NOT EXISTS Played_At_Least_One_Match AS
         SELECT DISTINCT T.team_id AS team_id
         FROM Teams T, Matches M
         WHERE T.team_id = M.first_team_id OR T.team_id = M.second_team_id",
    ),
    (
        "Played_At_Least_One_Home_Match",
        "CREATE VIEW IF NOT EXISTS Played_At_Least_One_Home_Match AS
         SELECT M.first_team_id AS first_team_id, P.audience_number AS audience_number
         FROM Matches M
         INNER JOIN Played_In P ON P.match_id = M.match_id",
    ),
    (
        "TallTeams",
        "CREATE VIEW IF NOT EXISTS TallTeams AS
         SELECT DISTINCT P1.team_id AS team_id
         FROM Players P1
         INNER JOIN Players P2 ON P1.team_id = P2.team_id
         WHERE P1.player_id <> P2.player_id AND P1.height > 190 AND P2.height > 190",
    ),
    (
        "ActiveTallTeams",
        "CREATE VIEW IF NOT EXISTS ActiveTallTeams AS
         SELECT DISTINCT A.team_id AS team_id
         FROM TallTeams T
         INNER JOIN Played_At_Least_One_Match A ON T.team_id = A.team_id",
    ),
    (
        "HomeDidntHaveFortyAudience",
        "CREATE VIEW IF NOT EXISTS HomeDidntHaveFortyAudience AS
         SELECT DISTINCT first_team_id
         FROM Played_At_Least_One_Home_Match
         WHERE NOT (audience_number > 40000)",
    ),
    (
        "DidntPlayAtHome",
        "CREATE VIEW IF NOT EXISTS DidntPlayAtHome AS
         SELECT DISTINCT T.team_id AS team_id
         FROM Teams T
         LEFT OUTER JOIN Matches M ON T.team_id = M.first_team_id
         WHERE M.first_team_id IS NULL",
    ),
    (
        "GoalsInMatch",
        "CREATE VIEW IF NOT EXISTS GoalsInMatch AS
         SELECT match_id, SUM(num_of_goals) AS goals
         FROM Player_Scored_In
         GROUP BY match_id",
    ),
    (
        "GoalsInStadium",
        "CREATE VIEW IF NOT EXISTS GoalsInStadium AS
         SELECT P.stadium_id AS stadium_id, SUM(G.goals) AS goals
         FROM Played_In P
         INNER JOIN GoalsInMatch G ON P.match_id = G.match_id
         GROUP BY P.stadium_id",
    ),
    (
        "PopularNotEmptyWay",
        "CREATE VIEW IF NOT EXISTS PopularNotEmptyWay AS
         SELECT H.first_team_id AS first_team_id
         FROM Played_At_Least_One_Home_Match H
         LEFT OUTER JOIN HomeDidntHaveFortyAudience D ON H.first_team_id = D.first_team_id
         WHERE D.first_team_id IS NULL",
    ),
    (
        "PlayerGoalsInTeam",
        "CREATE VIEW IF NOT EXISTS PlayerGoalsInTeam AS
         SELECT P.player_id AS player_id, P.team_id AS team_id, COALESCE(S.total, 0) AS goals
         FROM Players P
         LEFT JOIN (
             SELECT player_id, SUM(num_of_goals) AS total
             FROM Player_Scored_In
             GROUP BY player_id
         ) S ON S.player_id = P.player_id",
    ),
];

/// Create every table and view. Safe to call on an existing schema.
pub fn create_tables(db: &Database) -> Result<()> {
    let conn = db.connect().context("failed to open league database")?;

    for (name, ddl) in TABLES {
        conn.execute(ddl, [])
            .with_context(|| format!("failed to create {name} table"))?;
    }
    for (name, ddl) in VIEWS {
        conn.execute(ddl, [])
            .with_context(|| format!("failed to create {name} view"))?;
    }

    info!(path = %db.path().display(), "league schema ready");
    Ok(())
}

/// Delete every row, children before parents.
pub fn clear_tables(db: &Database) -> Result<()> {
    let conn = db.connect().context("failed to open league database")?;

    for (name, _) in TABLES.iter().rev() {
        conn.execute(&format!("DELETE FROM {name}"), [])
            .with_context(|| format!("failed to clear {name} table"))?;
    }

    info!("league tables cleared");
    Ok(())
}

/// Drop every view and table. Views go first since they depend on tables.
pub fn drop_tables(db: &Database) -> Result<()> {
    let conn = db.connect().context("failed to open league database")?;

    for (name, _) in VIEWS.iter().rev() {
        conn.execute(&format!("DROP VIEW IF EXISTS {name}"), [])
            .with_context(|| format!("failed to drop {name} view"))?;
    }
    for (name, _) in TABLES.iter().rev() {
        conn.execute(&format!("DROP TABLE IF EXISTS {name}"), [])
            .with_context(|| format!("failed to drop {name} table"))?;
    }

    info!("league schema dropped");
    Ok(())
}
