//! Entity value objects mirroring the league tables. They stay plain data so
//! the persistence layer can hand them around freely; every type also carries
//! an "invalid" sentinel that profile reads return instead of an error.
//!
//! Sentinels use `0` for their identifiers. The schema constrains every id to
//! be strictly positive, so a sentinel can never collide with a stored row.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Raised when text read back from the store is not one of the closed literals.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownLiteral {
    kind: &'static str,
    value: String,
}

/// Which kind of competition a match belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Competition {
    International,
    Domestic,
}

impl Competition {
    /// Text form stored in the `competition` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Competition::International => "International",
            Competition::Domestic => "Domestic",
        }
    }
}

impl fmt::Display for Competition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Competition {
    type Err = UnknownLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "International" => Ok(Competition::International),
            "Domestic" => Ok(Competition::Domestic),
            other => Err(UnknownLiteral {
                kind: "competition",
                value: other.to_string(),
            }),
        }
    }
}

/// A player's stronger foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferredFoot {
    Left,
    Right,
}

impl PreferredFoot {
    /// Text form stored in the `preferred_foot` column.
    pub fn as_str(self) -> &'static str {
        match self {
            PreferredFoot::Left => "Left",
            PreferredFoot::Right => "Right",
        }
    }
}

impl fmt::Display for PreferredFoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferredFoot {
    type Err = UnknownLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Left" => Ok(PreferredFoot::Left),
            "Right" => Ok(PreferredFoot::Right),
            other => Err(UnknownLiteral {
                kind: "preferred foot",
                value: other.to_string(),
            }),
        }
    }
}

/// A team only matters through its id; everything else references it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Team {
    pub team_id: i64,
}

impl Team {
    pub fn new(team_id: i64) -> Self {
        Self { team_id }
    }

    /// Returned by profile reads that found nothing.
    pub fn invalid() -> Self {
        Self { team_id: 0 }
    }

    pub fn is_valid(&self) -> bool {
        *self != Self::invalid()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A fixture between two distinct teams. The home side is stored as
/// `first_team_id`, which is what the "home match" reports key on.
pub struct Match {
    pub match_id: i64,
    pub competition: Competition,
    pub home_team_id: i64,
    pub away_team_id: i64,
}

impl Match {
    pub fn new(
        match_id: i64,
        competition: Competition,
        home_team_id: i64,
        away_team_id: i64,
    ) -> Self {
        Self {
            match_id,
            competition,
            home_team_id,
            away_team_id,
        }
    }

    /// Returned by profile reads that found nothing. The competition is
    /// arbitrary; callers should test [`Match::is_valid`] instead.
    pub fn invalid() -> Self {
        Self {
            match_id: 0,
            competition: Competition::Domestic,
            home_team_id: 0,
            away_team_id: 0,
        }
    }

    pub fn is_valid(&self) -> bool {
        *self != Self::invalid()
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Match {} ({}): {} vs {}",
            self.match_id, self.competition, self.home_team_id, self.away_team_id
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub player_id: i64,
    /// Every player belongs to exactly one team.
    pub team_id: i64,
    pub age: i64,
    /// Height in centimetres. Anything above 190 counts as "tall".
    pub height: i64,
    pub preferred_foot: PreferredFoot,
}

impl Player {
    pub fn new(
        player_id: i64,
        team_id: i64,
        age: i64,
        height: i64,
        preferred_foot: PreferredFoot,
    ) -> Self {
        Self {
            player_id,
            team_id,
            age,
            height,
            preferred_foot,
        }
    }

    /// Returned by profile reads that found nothing.
    pub fn invalid() -> Self {
        Self {
            player_id: 0,
            team_id: 0,
            age: 0,
            height: 0,
            preferred_foot: PreferredFoot::Left,
        }
    }

    pub fn is_valid(&self) -> bool {
        *self != Self::invalid()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player {} (team {}, age {}, {} cm, {} foot)",
            self.player_id, self.team_id, self.age, self.height, self.preferred_foot
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A venue. `team_id` is `None` for neutral grounds; a team owns at most one
/// stadium.
pub struct Stadium {
    pub stadium_id: i64,
    pub capacity: i64,
    pub team_id: Option<i64>,
}

impl Stadium {
    pub fn new(stadium_id: i64, capacity: i64, team_id: Option<i64>) -> Self {
        Self {
            stadium_id,
            capacity,
            team_id,
        }
    }

    /// Returned by profile reads that found nothing.
    pub fn invalid() -> Self {
        Self {
            stadium_id: 0,
            capacity: 0,
            team_id: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        *self != Self::invalid()
    }
}

impl fmt::Display for Stadium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.team_id {
            Some(team) => write!(
                f,
                "Stadium {} (capacity {}, home of team {})",
                self.stadium_id, self.capacity, team
            ),
            None => write!(
                f,
                "Stadium {} (capacity {}, neutral)",
                self.stadium_id, self.capacity
            ),
        }
    }
}
