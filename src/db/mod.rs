//! Persistence module split across logical submodules: one per table group,
//! plus the schema lifecycle and the analytical reports.

mod analytics;
mod connection;
mod matches;
mod outcome;
mod players;
mod read;
mod schema;
mod scores;
mod stadiums;
mod teams;
mod venues;

pub use analytics::{
    get_active_tall_rich_teams, get_active_tall_teams, get_close_players,
    get_most_attractive_stadiums, most_goals_for_team, popular_teams,
};
pub use connection::{Database, DB_PATH_ENV};
pub use matches::{add_match, delete_match, get_match_profile};
pub use outcome::ReturnValue;
pub use players::{add_player, delete_player, get_player_profile};
pub use schema::{clear_tables, create_tables, drop_tables};
pub use scores::{player_didnt_score_in_match, player_is_winner, player_scored_in_match};
pub use stadiums::{add_stadium, delete_stadium, get_stadium_profile};
pub use teams::{add_team, delete_team, get_team_profile};
pub use venues::{
    average_attendance_in_stadium, match_in_stadium, match_not_in_stadium, stadium_total_goals,
    ATTENDANCE_QUERY_FAILED, GOALS_QUERY_FAILED,
};
