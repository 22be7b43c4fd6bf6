use serde::{Deserialize, Serialize};

use super::player::{
    BenchPosition, PerformanceRecord, PitchSpot, Placement, Player, PlayerId,
};

/// Which of the two squads a team is. Exactly two exist for the lifetime of a
/// session; only the active-side pointer moves between them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn other(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }

    /// Canonical side code string ("home" / "away").
    pub fn code(&self) -> &'static str {
        match self {
            TeamSide::Home => "home",
            TeamSide::Away => "away",
        }
    }
}

/// One squad: 11 position-placed starters plus the bench.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub side: TeamSide,
    pub name: String,
    pub color: String,
    pub starters: Vec<Player>,
    pub substitutes: Vec<Player>,
}

impl Team {
    /// Look a player up by id, starters first, then substitutes. Ids are only
    /// meaningful within this team; a miss means the id belongs to no one
    /// here and the caller is expected to treat that as a no-op.
    pub fn find_player(&self, id: PlayerId) -> Option<&Player> {
        self.starters.iter().chain(self.substitutes.iter()).find(|p| p.id == id)
    }

    pub fn find_player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.starters.iter_mut().chain(self.substitutes.iter_mut()).find(|p| p.id == id)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.starters.len() != 11 {
            return Err(format!("Team must have 11 starters, found {}", self.starters.len()));
        }

        let mut seen = std::collections::HashSet::new();
        for player in self.starters.iter().chain(self.substitutes.iter()) {
            if !seen.insert(player.id) {
                return Err(format!("Duplicate player id {} in {}", player.id, self.name));
            }
        }

        if self.starters.iter().any(|p| !matches!(p.placement, Placement::Pitch { .. })) {
            return Err("Every starter needs a pitch coordinate".to_string());
        }
        if self.substitutes.iter().any(|p| !matches!(p.placement, Placement::Bench { .. })) {
            return Err("Every substitute needs a bench position".to_string());
        }

        Ok(())
    }

    /// The two fixed squads of a session, home attacking upward and away
    /// mirrored. Shirt numbers and role names follow the standard 4-4-2.
    pub fn default_pair() -> [Team; 2] {
        [
            Team {
                side: TeamSide::Home,
                name: "Team A".to_string(),
                color: "#ff0000".to_string(),
                starters: vec![
                    starter(1, 1, "GK", 85.0, 50.0),
                    starter(2, 2, "RB", 70.0, 80.0),
                    starter(3, 5, "CB", 70.0, 65.0),
                    starter(4, 6, "CB", 70.0, 35.0),
                    starter(5, 3, "LB", 70.0, 20.0),
                    starter(6, 4, "CM", 55.0, 50.0),
                    starter(7, 8, "RM", 40.0, 80.0),
                    starter(8, 10, "CAM", 40.0, 50.0)
                        .with_record(record(29, 8, 12, "Leads the squad in assists")),
                    starter(9, 7, "LM", 40.0, 20.0),
                    starter(10, 9, "ST", 20.0, 35.0)
                        .with_record(record(31, 18, 4, "Opened the scoring in the cup final")),
                    starter(11, 11, "ST", 20.0, 65.0)
                        .with_record(record(27, 11, 7, "Four goals in his last five games")),
                ],
                substitutes: default_bench(),
            },
            Team {
                side: TeamSide::Away,
                name: "Team B".to_string(),
                color: "#0000ff".to_string(),
                starters: vec![
                    starter(1, 1, "GK", 15.0, 50.0),
                    starter(2, 2, "RB", 30.0, 20.0),
                    starter(3, 5, "CB", 30.0, 35.0),
                    starter(4, 6, "CB", 30.0, 65.0),
                    starter(5, 3, "LB", 30.0, 80.0),
                    starter(6, 4, "CM", 45.0, 50.0),
                    starter(7, 8, "RM", 60.0, 20.0),
                    starter(8, 10, "CAM", 60.0, 50.0)
                        .with_record(record(30, 6, 10, "Assisted in six straight matches")),
                    starter(9, 7, "LM", 60.0, 80.0),
                    starter(10, 9, "ST", 80.0, 35.0)
                        .with_record(record(28, 15, 3, "Hat-trick on the opening day")),
                    starter(11, 11, "ST", 80.0, 65.0),
                ],
                substitutes: default_bench(),
            },
        ]
    }
}

fn starter(id: PlayerId, number: u8, name: &str, top: f32, left: f32) -> Player {
    Player::new(id, number, name, Placement::Pitch { spot: PitchSpot { top, left } })
}

fn substitute(id: PlayerId, number: u8, name: &str, position: BenchPosition) -> Player {
    Player::new(id, number, name, Placement::Bench { position })
}

fn record(matches_played: u16, season_goals: u16, season_assists: u16, highlight: &str) -> PerformanceRecord {
    PerformanceRecord {
        matches_played,
        season_goals,
        season_assists,
        highlight: highlight.to_string(),
    }
}

fn default_bench() -> Vec<Player> {
    vec![
        substitute(12, 12, "SUB GK", BenchPosition::Gk),
        substitute(13, 13, "SUB DEF", BenchPosition::Def),
        substitute(14, 14, "SUB MID", BenchPosition::Mid),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pair_shape() {
        let [home, away] = Team::default_pair();

        assert_eq!(home.side, TeamSide::Home);
        assert_eq!(away.side, TeamSide::Away);
        assert_eq!(home.starters.len(), 11);
        assert_eq!(home.substitutes.len(), 3);
        assert_eq!(away.starters.len(), 11);
        assert_eq!(away.substitutes.len(), 3);

        home.validate().unwrap();
        away.validate().unwrap();

        // Ids repeat across the two squads; only (side, id) is unambiguous.
        assert!(home.find_player(1).is_some());
        assert!(away.find_player(1).is_some());
    }

    #[test]
    fn test_find_player_checks_starters_then_bench() {
        let [home, _] = Team::default_pair();

        let starter = home.find_player(10).unwrap();
        assert_eq!(starter.name, "ST");
        assert!(matches!(starter.placement, Placement::Pitch { .. }));

        let sub = home.find_player(13).unwrap();
        assert_eq!(sub.name, "SUB DEF");
        assert!(matches!(
            sub.placement,
            Placement::Bench { position: BenchPosition::Def }
        ));

        assert!(home.find_player(99).is_none());
    }

    #[test]
    fn test_side_toggle() {
        assert_eq!(TeamSide::Home.other(), TeamSide::Away);
        assert_eq!(TeamSide::Away.other(), TeamSide::Home);
        assert_eq!(TeamSide::Home.code(), "home");
    }
}
