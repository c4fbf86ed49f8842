use league_stats::*;
use tempfile::TempDir;

use league_stats::Competition::{Domestic, International};
use league_stats::PreferredFoot::{Left, Right};

/// A fresh league schema in a throw-away directory. The directory must outlive
/// the database handle.
fn league() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db = Database::open(dir.path().join("league.sqlite"));
    create_tables(&db).unwrap();
    (dir, db)
}

fn teams(db: &Database, ids: impl IntoIterator<Item = i64>) {
    for id in ids {
        assert_eq!(add_team(db, id), ReturnValue::Ok);
    }
}

fn player(db: &Database, player_id: i64, team_id: i64, height: i64) -> Player {
    let player = Player::new(player_id, team_id, 25, height, Right);
    assert_eq!(add_player(db, &player), ReturnValue::Ok);
    player
}

fn fixture(db: &Database, match_id: i64, home: i64, away: i64) -> Match {
    let fixture = Match::new(match_id, International, home, away);
    assert_eq!(add_match(db, &fixture), ReturnValue::Ok);
    fixture
}

fn stadium(db: &Database, stadium_id: i64, capacity: i64, team_id: Option<i64>) -> Stadium {
    let stadium = Stadium::new(stadium_id, capacity, team_id);
    assert_eq!(add_stadium(db, &stadium), ReturnValue::Ok);
    stadium
}

fn scored(db: &Database, fixture: &Match, player: &Player, goals: i64) {
    assert_eq!(player_scored_in_match(db, fixture, player, goals), ReturnValue::Ok);
}

#[test]
fn added_team_can_be_read_back() {
    let (_dir, db) = league();

    assert_eq!(add_team(&db, 7), ReturnValue::Ok);
    assert_eq!(get_team_profile(&db, 7), Team::new(7));
    assert_eq!(get_team_profile(&db, 8), Team::invalid());
}

#[test]
fn team_ids_must_be_positive_and_unique() {
    let (_dir, db) = league();

    assert_eq!(add_team(&db, 0), ReturnValue::BadParams);
    assert_eq!(add_team(&db, -4), ReturnValue::BadParams);
    assert_eq!(add_team(&db, 3), ReturnValue::Ok);
    assert_eq!(add_team(&db, 3), ReturnValue::AlreadyExists);
}

#[test]
fn profiles_round_trip_field_for_field() {
    let (_dir, db) = league();
    teams(&db, [1, 2]);

    let home_match = Match::new(10, Domestic, 1, 2);
    let player = Player::new(4, 2, 31, 188, Left);
    let owned = Stadium::new(5, 42000, Some(1));
    let neutral = Stadium::new(6, 900, None);

    assert_eq!(add_match(&db, &home_match), ReturnValue::Ok);
    assert_eq!(add_player(&db, &player), ReturnValue::Ok);
    assert_eq!(add_stadium(&db, &owned), ReturnValue::Ok);
    assert_eq!(add_stadium(&db, &neutral), ReturnValue::Ok);

    assert_eq!(get_match_profile(&db, 10), home_match);
    assert_eq!(get_player_profile(&db, 4), player);
    assert_eq!(get_stadium_profile(&db, 5), owned);
    assert_eq!(get_stadium_profile(&db, 6), neutral);
}

#[test]
fn entity_inserts_reject_bad_params() {
    let (_dir, db) = league();
    teams(&db, [1, 2]);

    assert_eq!(add_match(&db, &Match::new(1, Domestic, 1, 1)), ReturnValue::BadParams);
    assert_eq!(add_match(&db, &Match::new(1, Domestic, 1, 99)), ReturnValue::BadParams);
    assert_eq!(add_match(&db, &Match::new(0, Domestic, 1, 2)), ReturnValue::BadParams);
    assert_eq!(add_player(&db, &Player::new(1, 1, -1, 180, Left)), ReturnValue::BadParams);
    assert_eq!(add_player(&db, &Player::new(1, 99, 20, 180, Left)), ReturnValue::BadParams);
    assert_eq!(add_stadium(&db, &Stadium::new(1, 0, None)), ReturnValue::BadParams);
    assert_eq!(add_stadium(&db, &Stadium::new(1, 10, Some(99))), ReturnValue::BadParams);
}

#[test]
fn entity_inserts_reject_duplicates() {
    let (_dir, db) = league();
    teams(&db, [1, 2]);
    fixture(&db, 1, 1, 2);
    player(&db, 1, 1, 180);
    stadium(&db, 1, 100, Some(1));

    assert_eq!(add_match(&db, &Match::new(1, Domestic, 2, 1)), ReturnValue::AlreadyExists);
    assert_eq!(add_player(&db, &Player::new(1, 2, 20, 170, Left)), ReturnValue::AlreadyExists);
    assert_eq!(add_stadium(&db, &Stadium::new(1, 5, None)), ReturnValue::AlreadyExists);
    // a team owns at most one stadium
    assert_eq!(add_stadium(&db, &Stadium::new(2, 5, Some(1))), ReturnValue::AlreadyExists);
}

#[test]
fn deleting_missing_entities_reports_not_exists() {
    let (_dir, db) = league();

    assert_eq!(delete_match(&db, &Match::new(1, Domestic, 1, 2)), ReturnValue::NotExists);
    assert_eq!(delete_player(&db, &Player::new(1, 1, 20, 180, Left)), ReturnValue::NotExists);
    assert_eq!(delete_stadium(&db, &Stadium::new(1, 10, None)), ReturnValue::NotExists);
    assert_eq!(delete_team(&db, 1), ReturnValue::NotExists);
}

#[test]
fn deleted_entities_read_as_sentinels() {
    let (_dir, db) = league();
    teams(&db, [1, 2]);
    let m = fixture(&db, 1, 1, 2);
    let p = player(&db, 1, 1, 180);
    let s = stadium(&db, 1, 100, None);

    assert_eq!(delete_match(&db, &m), ReturnValue::Ok);
    assert_eq!(delete_player(&db, &p), ReturnValue::Ok);
    assert_eq!(delete_stadium(&db, &s), ReturnValue::Ok);

    assert_eq!(get_match_profile(&db, 1), Match::invalid());
    assert_eq!(get_player_profile(&db, 1), Player::invalid());
    assert_eq!(get_stadium_profile(&db, 1), Stadium::invalid());
    assert_eq!(delete_match(&db, &m), ReturnValue::NotExists);
}

#[test]
fn deleting_a_team_cascades() {
    let (_dir, db) = league();
    teams(&db, [1, 2, 3]);
    let m = fixture(&db, 1, 1, 2);
    fixture(&db, 2, 2, 3);
    let p = player(&db, 1, 1, 180);
    player(&db, 2, 2, 180);
    let neutral = stadium(&db, 9, 500, None);
    stadium(&db, 1, 100, Some(1));
    scored(&db, &m, &p, 2);
    assert_eq!(match_in_stadium(&db, &m, &neutral, 300), ReturnValue::Ok);

    assert_eq!(delete_team(&db, 1), ReturnValue::Ok);

    assert!(!get_team_profile(&db, 1).is_valid());
    assert!(!get_match_profile(&db, 1).is_valid());
    assert!(!get_player_profile(&db, 1).is_valid());
    assert!(!get_stadium_profile(&db, 1).is_valid());

    // unrelated rows survive, associations through the deleted rows do not
    assert!(get_match_profile(&db, 2).is_valid());
    assert!(get_player_profile(&db, 2).is_valid());
    assert!(get_stadium_profile(&db, 9).is_valid());
    assert_eq!(stadium_total_goals(&db, 9), 0);
    assert_eq!(average_attendance_in_stadium(&db, 9), 0.0);
}

#[test]
fn recording_goals_maps_constraint_failures() {
    let (_dir, db) = league();
    teams(&db, [1, 2]);
    let m = fixture(&db, 1, 1, 2);
    let p = player(&db, 1, 1, 180);
    let ghost_player = Player::new(50, 1, 20, 180, Left);
    let ghost_match = Match::new(50, Domestic, 1, 2);

    assert_eq!(player_scored_in_match(&db, &m, &p, 0), ReturnValue::BadParams);
    assert_eq!(player_scored_in_match(&db, &m, &p, -2), ReturnValue::BadParams);
    assert_eq!(player_scored_in_match(&db, &m, &ghost_player, 1), ReturnValue::NotExists);
    assert_eq!(player_scored_in_match(&db, &ghost_match, &p, 1), ReturnValue::NotExists);
    assert_eq!(player_scored_in_match(&db, &m, &p, 1), ReturnValue::Ok);
    assert_eq!(player_scored_in_match(&db, &m, &p, 3), ReturnValue::AlreadyExists);

    assert_eq!(player_didnt_score_in_match(&db, &m, &p), ReturnValue::Ok);
    assert_eq!(player_didnt_score_in_match(&db, &m, &p), ReturnValue::NotExists);
}

#[test]
fn venue_records_map_constraint_failures() {
    let (_dir, db) = league();
    teams(&db, [1, 2]);
    let m = fixture(&db, 1, 1, 2);
    let other = fixture(&db, 2, 2, 1);
    let s = stadium(&db, 1, 1000, None);
    let t = stadium(&db, 2, 1000, None);
    let ghost_stadium = Stadium::new(77, 10, None);

    assert_eq!(match_in_stadium(&db, &m, &s, -5), ReturnValue::BadParams);
    assert_eq!(match_in_stadium(&db, &m, &ghost_stadium, 10), ReturnValue::NotExists);
    assert_eq!(match_in_stadium(&db, &m, &s, 10), ReturnValue::Ok);
    // a match has at most one venue
    assert_eq!(match_in_stadium(&db, &m, &t, 10), ReturnValue::AlreadyExists);
    assert_eq!(match_in_stadium(&db, &other, &t, 0), ReturnValue::Ok);

    assert_eq!(match_not_in_stadium(&db, &m, &t), ReturnValue::NotExists);
    assert_eq!(match_not_in_stadium(&db, &m, &s), ReturnValue::Ok);
    assert_eq!(match_not_in_stadium(&db, &m, &s), ReturnValue::NotExists);
}

#[test]
fn average_attendance() {
    let (_dir, db) = league();
    teams(&db, [1, 2]);
    let s = stadium(&db, 1, 100000, None);
    let empty = stadium(&db, 2, 100000, None);
    let m1 = fixture(&db, 1, 1, 2);
    let m2 = fixture(&db, 2, 2, 1);

    assert_eq!(average_attendance_in_stadium(&db, 1), 0.0);

    assert_eq!(match_in_stadium(&db, &m1, &s, 10000), ReturnValue::Ok);
    assert_eq!(match_in_stadium(&db, &m2, &s, 80000), ReturnValue::Ok);

    assert_eq!(average_attendance_in_stadium(&db, 1), 45000.0);
    assert_eq!(average_attendance_in_stadium(&db, empty.stadium_id), 0.0);
    assert_eq!(average_attendance_in_stadium(&db, 99), 0.0);
}

#[test]
fn stadium_goal_totals() {
    let (_dir, db) = league();
    teams(&db, [1, 2]);
    let s = stadium(&db, 1, 1000, None);
    let m1 = fixture(&db, 1, 1, 2);
    let m2 = fixture(&db, 2, 2, 1);
    let m3 = fixture(&db, 3, 1, 2);
    let p1 = player(&db, 1, 1, 180);
    let p2 = player(&db, 2, 2, 180);

    assert_eq!(stadium_total_goals(&db, 1), 0);

    scored(&db, &m1, &p1, 2);
    scored(&db, &m1, &p2, 1);
    scored(&db, &m2, &p2, 4);
    scored(&db, &m3, &p1, 9);
    assert_eq!(match_in_stadium(&db, &m1, &s, 10), ReturnValue::Ok);
    assert_eq!(match_in_stadium(&db, &m2, &s, 10), ReturnValue::Ok);

    assert_eq!(stadium_total_goals(&db, 1), 7);
}

#[test]
fn winner_needs_half_of_the_goals_rounded_up() {
    let (_dir, db) = league();
    teams(&db, [1, 2]);
    let odd = fixture(&db, 1, 1, 2);
    let even = fixture(&db, 2, 1, 2);
    let p1 = player(&db, 1, 1, 180);
    let p2 = player(&db, 2, 2, 180);
    player(&db, 3, 2, 180);

    scored(&db, &odd, &p1, 3);
    scored(&db, &odd, &p2, 2);
    scored(&db, &even, &p1, 1);
    scored(&db, &even, &p2, 1);

    assert!(player_is_winner(&db, 1, 1));
    assert!(!player_is_winner(&db, 2, 1));
    assert!(player_is_winner(&db, 1, 2));
    assert!(player_is_winner(&db, 2, 2));
    assert!(!player_is_winner(&db, 3, 1));
    assert!(!player_is_winner(&db, 1, 99));
}

#[test]
fn active_tall_teams_and_rich_ones() {
    let (_dir, db) = league();
    teams(&db, [1, 2, 3, 4]);
    // team 1 and 4: two players above 190 and at least one match
    player(&db, 1, 1, 200);
    player(&db, 2, 1, 195);
    // team 2: tall but never played
    player(&db, 3, 2, 200);
    player(&db, 4, 2, 201);
    // team 3: 190 is not tall
    player(&db, 5, 3, 191);
    player(&db, 6, 3, 190);
    player(&db, 7, 4, 192);
    player(&db, 8, 4, 193);
    fixture(&db, 1, 1, 3);
    fixture(&db, 2, 3, 4);
    stadium(&db, 1, 60000, Some(1));
    stadium(&db, 2, 55000, Some(4));
    stadium(&db, 3, 90000, Some(2));

    assert_eq!(get_active_tall_teams(&db), vec![4, 1]);
    assert_eq!(get_active_tall_rich_teams(&db), vec![1]);
}

#[test]
fn active_tall_teams_are_capped_at_five() {
    let (_dir, db) = league();
    teams(&db, 1..=7);
    for team in 1..=7 {
        player(&db, team * 10, team, 200);
        player(&db, team * 10 + 1, team, 200);
        stadium(&db, team, 60000, Some(team));
    }
    for team in 1..=6 {
        fixture(&db, team, team, team + 1);
    }

    assert_eq!(get_active_tall_teams(&db), vec![7, 6, 5, 4, 3]);
    assert_eq!(get_active_tall_rich_teams(&db), vec![1, 2, 3, 4, 5]);
}

#[test]
fn popular_teams_never_hosted_or_always_drew_crowds() {
    let (_dir, db) = league();
    teams(&db, [1, 2, 3, 4]);
    let s = stadium(&db, 1, 100000, None);
    let packed = fixture(&db, 1, 1, 2);
    let sparse = fixture(&db, 2, 2, 1);
    fixture(&db, 3, 1, 3);
    assert_eq!(match_in_stadium(&db, &packed, &s, 50000), ReturnValue::Ok);
    assert_eq!(match_in_stadium(&db, &sparse, &s, 40000), ReturnValue::Ok);

    assert_eq!(popular_teams(&db), vec![4, 3, 1]);
}

#[test]
fn popular_teams_need_every_recorded_home_crowd_above_forty_thousand() {
    let (_dir, db) = league();
    teams(&db, [1, 2, 3]);
    let s = stadium(&db, 1, 100000, None);
    let crowds = [(1, 1, 2, 50000), (2, 1, 3, 60000), (3, 2, 1, 50000), (4, 2, 3, 30000)];
    for (match_id, home, away, attendance) in crowds {
        let m = fixture(&db, match_id, home, away);
        assert_eq!(match_in_stadium(&db, &m, &s, attendance), ReturnValue::Ok);
    }

    // team 1 hosted twice but is listed once, team 2 had one sparse home match
    assert_eq!(popular_teams(&db), vec![3, 1]);
}

#[test]
fn popular_teams_are_capped_at_ten() {
    let (_dir, db) = league();
    teams(&db, 1..=15);
    let s = stadium(&db, 1, 100000, None);
    let crowds = [(1, 1, 2, 50000), (2, 1, 3, 60000), (3, 2, 1, 50000), (4, 2, 3, 30000)];
    for (match_id, home, away, attendance) in crowds {
        let m = fixture(&db, match_id, home, away);
        assert_eq!(match_in_stadium(&db, &m, &s, attendance), ReturnValue::Ok);
    }

    assert_eq!(popular_teams(&db), (6..=15).rev().collect::<Vec<_>>());
}

#[test]
fn most_attractive_stadiums_keep_goalless_venues() {
    let (_dir, db) = league();
    teams(&db, [1, 2]);
    stadium(&db, 1, 100, None);
    stadium(&db, 2, 100, None);
    let c = stadium(&db, 3, 100, None);
    let m = fixture(&db, 1, 1, 2);
    let p = player(&db, 1, 1, 180);
    scored(&db, &m, &p, 5);
    assert_eq!(match_in_stadium(&db, &m, &c, 100), ReturnValue::Ok);

    assert_eq!(get_most_attractive_stadiums(&db), vec![3, 1, 2]);
}

#[test]
fn most_attractive_stadiums_order_by_goals_then_id() {
    let (_dir, db) = league();
    teams(&db, [1, 2]);
    let venues: Vec<_> = (1..=4).map(|id| stadium(&db, id, 100, None)).collect();
    let p = player(&db, 1, 1, 180);
    // stadium totals: 1 -> 7, 2 -> 3, 3 -> 0, 4 -> 3
    for (match_id, venue, goals) in [(1, 0, 7), (2, 1, 3), (3, 3, 3)] {
        let m = fixture(&db, match_id, 1, 2);
        scored(&db, &m, &p, goals);
        assert_eq!(match_in_stadium(&db, &m, &venues[venue], 100), ReturnValue::Ok);
    }

    assert_eq!(get_most_attractive_stadiums(&db), vec![1, 2, 4, 3]);
}

#[test]
fn most_attractive_stadiums_are_not_capped() {
    let (_dir, db) = league();
    for id in 1..=12 {
        stadium(&db, id, 100, None);
    }

    assert_eq!(get_most_attractive_stadiums(&db), (1..=12).collect::<Vec<_>>());
}

#[test]
fn most_goals_for_team_orders_by_goals_then_id() {
    let (_dir, db) = league();
    teams(&db, [1, 2]);
    let m1 = fixture(&db, 1, 1, 2);
    let m2 = fixture(&db, 2, 2, 1);
    let p1 = player(&db, 1, 1, 180);
    let p2 = player(&db, 2, 1, 180);
    let p3 = player(&db, 3, 1, 180);
    player(&db, 4, 1, 180);
    let outsider = player(&db, 9, 2, 180);
    scored(&db, &m1, &p1, 5);
    scored(&db, &m1, &p2, 3);
    scored(&db, &m1, &p3, 1);
    scored(&db, &m2, &p3, 2);
    scored(&db, &m2, &outsider, 7);

    assert_eq!(most_goals_for_team(&db, 1), vec![1, 3, 2, 4]);

    player(&db, 5, 1, 180);
    player(&db, 6, 1, 180);
    assert_eq!(most_goals_for_team(&db, 1), vec![1, 3, 2, 6, 5]);
    assert!(most_goals_for_team(&db, 42).is_empty());
}

#[test]
fn everyone_is_close_to_a_player_who_never_scored() {
    let (_dir, db) = league();
    teams(&db, [1]);
    for id in 1..=12 {
        player(&db, id, 1, 180);
    }

    assert_eq!(get_close_players(&db, 1), (2..=11).collect::<Vec<_>>());
}

#[test]
fn close_players_share_at_least_half_of_the_scored_matches() {
    let (_dir, db) = league();
    teams(&db, [1, 2]);
    let matches: Vec<_> = (1..=4).map(|id| fixture(&db, id, 1, 2)).collect();
    let p1 = player(&db, 1, 1, 180);
    let p2 = player(&db, 2, 1, 180);
    let p3 = player(&db, 3, 2, 180);
    player(&db, 4, 2, 180);
    let p5 = player(&db, 5, 2, 180);

    for m in &matches {
        scored(&db, m, &p1, 1);
    }
    scored(&db, &matches[0], &p2, 1);
    scored(&db, &matches[1], &p2, 1);
    scored(&db, &matches[0], &p3, 1);
    for m in &matches[..3] {
        scored(&db, m, &p5, 2);
    }

    assert_eq!(get_close_players(&db, 1), vec![2, 5]);
}

#[test]
fn unreachable_store_degrades_quietly() {
    let dir = TempDir::new().unwrap();
    let db = Database::open(dir.path().join("missing").join("league.sqlite"));

    assert_eq!(add_team(&db, 1), ReturnValue::Error);
    assert_eq!(delete_match(&db, &Match::new(1, Domestic, 1, 2)), ReturnValue::Error);
    assert_eq!(get_player_profile(&db, 1), Player::invalid());
    assert!(popular_teams(&db).is_empty());
    assert!(!player_is_winner(&db, 1, 1));
    assert_eq!(average_attendance_in_stadium(&db, 1), ATTENDANCE_QUERY_FAILED);
    assert_eq!(stadium_total_goals(&db, 1), GOALS_QUERY_FAILED);
    assert!(create_tables(&db).is_err());
}

#[test]
fn clearing_and_recreating_the_schema() {
    let (_dir, db) = league();
    teams(&db, [1, 2]);
    fixture(&db, 1, 1, 2);

    clear_tables(&db).unwrap();
    assert!(!get_match_profile(&db, 1).is_valid());
    assert_eq!(add_team(&db, 1), ReturnValue::Ok);

    drop_tables(&db).unwrap();
    assert_eq!(add_team(&db, 2), ReturnValue::Error);
    create_tables(&db).unwrap();
    assert_eq!(add_team(&db, 2), ReturnValue::Ok);
}
