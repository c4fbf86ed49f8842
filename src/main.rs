//! Binary entry point that seeds a sample league, prints the outcome of every
//! access function and every report, then tears the data down again.
//!
//! The store location comes from `LEAGUE_DB_PATH` (or the default under the
//! home directory). Pass `--verbose` for debug logging.
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use league_stats::logging::init_tracing;
use league_stats::{
    add_match, add_player, add_stadium, add_team, average_attendance_in_stadium, create_tables,
    delete_match, delete_player, delete_stadium, drop_tables, get_active_tall_rich_teams,
    get_active_tall_teams, get_close_players, get_match_profile, get_most_attractive_stadiums,
    get_player_profile, get_stadium_profile, match_in_stadium, match_not_in_stadium,
    most_goals_for_team, player_didnt_score_in_match, player_is_winner, player_scored_in_match,
    popular_teams, stadium_total_goals, Database, Match, Player, Stadium,
};

use league_stats::Competition::{Domestic, International};
use league_stats::PreferredFoot::{Left, Right};

#[derive(Parser, Debug)]
#[command(
    name = "league-stats",
    version,
    about = "Seed a sample league and print every league report"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, short)]
    verbose: bool,
}

/// Team ids to register. `0` and the second `6` are rejected.
const TEAMS: &[i64] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0, 6];

fn matches() -> Vec<Match> {
    [
        (1, Domestic, 1, 2),
        (2, International, 1, 3),
        (3, International, 1, 4),
        (4, Domestic, 1, 5),
        (5, Domestic, 1, 6),
        (6, International, 2, 3),
        (7, International, 2, 4),
        (8, International, 2, 1),
        (9, International, 3, 4),
        (10, International, 3, 5),
        (11, International, 3, 6),
        (12, International, 1, 10),
        (13, International, 6, 7),
        (14, International, 7, 8),
        (15, Domestic, 1, 2),
        // rejected: duplicate id, duplicate id, same team twice, unknown team
        (1, Domestic, 2, 3),
        (1, International, 4, 5),
        (101, Domestic, 2, 2),
        (102, Domestic, 1, 42),
    ]
    .into_iter()
    .map(|(id, competition, home, away)| Match::new(id, competition, home, away))
    .collect()
}

fn players() -> Vec<Player> {
    [
        (1, 1, 10, 150, Left),
        (2, 1, 10, 191, Left),
        (3, 1, 11, 190, Left),
        (4, 1, 22, 170, Left),
        (5, 1, 23, 160, Right),
        (6, 2, 10, 200, Left),
        (7, 2, 10, 130, Left),
        (8, 2, 10, 200, Left),
        (9, 2, 11, 200, Left),
        (10, 3, 11, 180, Left),
        (11, 3, 11, 184, Left),
        (12, 4, 11, 165, Right),
        (13, 4, 11, 200, Left),
        (14, 5, 11, 200, Right),
        (15, 5, 11, 135, Right),
        (16, 5, 11, 200, Left),
        (17, 9, 11, 200, Right),
        (18, 6, 11, 180, Left),
        (19, 7, 11, 180, Left),
        (20, 8, 11, 180, Left),
        (21, 10, 11, 200, Left),
        (22, 10, 11, 200, Left),
        // rejected: negative age, zero height
        (101, 1, -1, 150, Left),
        (102, 1, 10, 0, Right),
    ]
    .into_iter()
    .map(|(id, team, age, height, foot)| Player::new(id, team, age, height, foot))
    .collect()
}

fn stadiums() -> Vec<Stadium> {
    vec![
        Stadium::new(1, 1, Some(1)),
        Stadium::new(2, 2, Some(2)),
        Stadium::new(5, 5, None),
        Stadium::new(6, 60000, Some(5)),
        Stadium::new(7, 60000, Some(4)),
        Stadium::new(8, 100000, Some(3)),
        Stadium::new(9, 100000, Some(6)),
        Stadium::new(10, 99999, Some(7)),
        // rejected: team 1 and team 2 already own a stadium, id 1 is taken
        Stadium::new(3, 3, Some(1)),
        Stadium::new(4, 4, Some(2)),
        Stadium::new(1, 5, Some(5)),
    ]
}

/// (match id, player id, goals). The last entry is rejected.
const GOALS: &[(i64, i64, i64)] = &[
    (1, 2, 2),
    (1, 3, 1),
    (2, 4, 3),
    (2, 10, 4),
    (3, 2, 1),
    (3, 13, 2),
    (4, 2, 1),
    (4, 3, 1),
    (5, 18, 2),
    (6, 3, 5),
    (8, 3, 2),
    (10, 11, 1),
    (11, 11, 1),
    (15, 3, 1),
    (1, 2, -3),
];

/// (match id, stadium id, attendance). The last three entries are rejected.
const VENUES: &[(i64, i64, i64)] = &[
    (1, 1, 10000),
    (2, 1, 80000),
    (3, 8, 45000),
    (6, 6, 50000),
    (7, 7, 50000),
    (8, 8, 13000),
    (9, 2, 23000),
    (10, 6, 12000),
    (11, 9, 99999),
    (12, 6, 1000),
    (13, 10, 130000),
    (14, 10, 98000),
    (15, 9, 98000),
    (4, 3, -5),
    (3, 5, 3),
    (100, 9, 98000),
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let db = Database::from_env()?;
    info!(path = %db.path().display(), "using league database");

    drop_tables(&db).context("failed to reset league schema")?;
    create_tables(&db)?;

    let matches = matches();
    let players = players();
    let stadiums = stadiums();

    println!("ADDING TEAMS");
    for team in TEAMS {
        println!("team {team}: {}", add_team(&db, *team));
    }

    println!("ADDING MATCHES");
    for fixture in &matches {
        println!("{fixture}: {}", add_match(&db, fixture));
    }

    println!("ADDING PLAYERS");
    for player in &players {
        println!("{player}: {}", add_player(&db, player));
    }

    println!("ADDING STADIUMS");
    for stadium in &stadiums {
        println!("{stadium}: {}", add_stadium(&db, stadium));
    }

    println!("PROFILES");
    for fixture in &matches {
        println!("{:?}", get_match_profile(&db, fixture.match_id));
    }
    for player in &players {
        println!("{:?}", get_player_profile(&db, player.player_id));
    }
    for stadium in &stadiums {
        println!("{:?}", get_stadium_profile(&db, stadium.stadium_id));
    }

    println!("ADDING PLAYER SCORES");
    for &(match_id, player_id, goals) in GOALS {
        let outcome = player_scored_in_match(&db, &fixture_ref(match_id), &player_ref(player_id), goals);
        println!("player {player_id} scored {goals} in match {match_id}: {outcome}");
    }

    println!("ADDING MATCHES IN STADIUMS");
    for &(match_id, stadium_id, attendance) in VENUES {
        let outcome =
            match_in_stadium(&db, &fixture_ref(match_id), &stadium_ref(stadium_id), attendance);
        println!("match {match_id} in stadium {stadium_id} ({attendance}): {outcome}");
    }

    println!("STADIUM REPORTS");
    for stadium in &stadiums {
        let id = stadium.stadium_id;
        println!(
            "stadium {id}: average attendance {}, total goals {}",
            average_attendance_in_stadium(&db, id),
            stadium_total_goals(&db, id)
        );
    }

    println!("WINNERS");
    for player in &players {
        for fixture in &matches {
            if player_is_winner(&db, player.player_id, fixture.match_id) {
                println!("player {} won match {}", player.player_id, fixture.match_id);
            }
        }
    }

    println!("active tall teams: {:?}", get_active_tall_teams(&db));
    println!("active tall rich teams: {:?}", get_active_tall_rich_teams(&db));
    println!("popular teams: {:?}", popular_teams(&db));
    println!("most attractive stadiums: {:?}", get_most_attractive_stadiums(&db));
    for team in TEAMS {
        println!("top scorers of team {team}: {:?}", most_goals_for_team(&db, *team));
    }
    for player in players.iter().filter(|p| p.player_id < 100) {
        println!(
            "close players of {}: {:?}",
            player.player_id,
            get_close_players(&db, player.player_id)
        );
    }

    println!("REMOVING PLAYER SCORES");
    for &(match_id, player_id, _) in GOALS {
        let outcome = player_didnt_score_in_match(&db, &fixture_ref(match_id), &player_ref(player_id));
        println!("player {player_id} in match {match_id}: {outcome}");
    }

    println!("REMOVING MATCHES FROM STADIUMS");
    for &(match_id, stadium_id, _) in VENUES {
        let outcome = match_not_in_stadium(&db, &fixture_ref(match_id), &stadium_ref(stadium_id));
        println!("match {match_id} in stadium {stadium_id}: {outcome}");
    }

    println!("TEARING DOWN");
    for fixture in &matches {
        println!("delete match {}: {}", fixture.match_id, delete_match(&db, fixture));
    }
    for player in &players {
        println!("delete player {}: {}", player.player_id, delete_player(&db, player));
    }
    for stadium in &stadiums {
        println!("delete stadium {}: {}", stadium.stadium_id, delete_stadium(&db, stadium));
    }

    drop_tables(&db)?;
    Ok(())
}

/// The association functions only look at ids, so the remaining fields of
/// these references are placeholders.
fn fixture_ref(match_id: i64) -> Match {
    Match::new(match_id, Domestic, 0, 0)
}

fn player_ref(player_id: i64) -> Player {
    Player::new(player_id, 0, 0, 0, Left)
}

fn stadium_ref(stadium_id: i64) -> Stadium {
    Stadium::new(stadium_id, 0, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_flag_has_long_and_short_forms() {
        assert!(!Cli::try_parse_from(["league-stats"]).unwrap().verbose);
        assert!(Cli::try_parse_from(["league-stats", "--verbose"]).unwrap().verbose);
        assert!(Cli::try_parse_from(["league-stats", "-v"]).unwrap().verbose);
        assert!(Cli::try_parse_from(["league-stats", "--loud"]).is_err());
    }
}
