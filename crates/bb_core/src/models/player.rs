use serde::{Deserialize, Serialize};

/// Player id, unique only within one team's roster (starters 1..=11,
/// substitutes 12..=14). The same ids repeat on both squads, so a player is
/// only identified unambiguously by the pair (team side, player id).
pub type PlayerId = u8;

/// The five wagerable in-match statistics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Statistic {
    Goals,
    Assists,
    Shots,
    YellowCards,
    RedCards,
}

impl Statistic {
    pub const ALL: [Statistic; 5] = [
        Statistic::Goals,
        Statistic::Assists,
        Statistic::Shots,
        Statistic::YellowCards,
        Statistic::RedCards,
    ];

    /// Display label used by the bet slip.
    pub fn label(&self) -> &'static str {
        match self {
            Statistic::Goals => "Goals",
            Statistic::Assists => "Assists",
            Statistic::Shots => "Shots",
            Statistic::YellowCards => "Yellow Cards",
            Statistic::RedCards => "Red Cards",
        }
    }
}

/// Five independent non-negative counters.
///
/// The stepper UI clamps decrements at zero before sending, and `u32` rules
/// out negative values entirely; the engine never re-validates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatLine {
    pub goals: u32,
    pub assists: u32,
    pub shots: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
}

impl StatLine {
    pub fn get(&self, statistic: Statistic) -> u32 {
        match statistic {
            Statistic::Goals => self.goals,
            Statistic::Assists => self.assists,
            Statistic::Shots => self.shots,
            Statistic::YellowCards => self.yellow_cards,
            Statistic::RedCards => self.red_cards,
        }
    }

    pub fn set(&mut self, statistic: Statistic, value: u32) {
        match statistic {
            Statistic::Goals => self.goals = value,
            Statistic::Assists => self.assists = value,
            Statistic::Shots => self.shots = value,
            Statistic::YellowCards => self.yellow_cards = value,
            Statistic::RedCards => self.red_cards = value,
        }
    }

    /// True when every counter is zero, i.e. no active wager on this player.
    pub fn is_empty(&self) -> bool {
        Statistic::ALL.iter().all(|s| self.get(*s) == 0)
    }
}

/// Pitch coordinate for layout, as percentages of the pitch height/width.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PitchSpot {
    pub top: f32,
    pub left: f32,
}

/// Coarse position label carried by substitutes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum BenchPosition {
    Gk,
    Def,
    Mid,
}

/// Where a player sits in the squad view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role", rename_all = "camelCase")]
pub enum Placement {
    /// Starter with a pitch coordinate.
    Pitch { spot: PitchSpot },
    /// Substitute with a coarse position label.
    Bench { position: BenchPosition },
}

/// Season-to-date record shown in the detail view. Display-only; the engine
/// never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    pub matches_played: u16,
    pub season_goals: u16,
    pub season_assists: u16,
    pub highlight: String,
}

/// One squad member, starter or substitute. Both share the same statistical
/// shape; only the placement differs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub number: u8,
    pub name: String,
    pub placement: Placement,
    #[serde(flatten)]
    pub stats: StatLine,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<PerformanceRecord>,
}

impl Player {
    pub fn new(id: PlayerId, number: u8, name: &str, placement: Placement) -> Self {
        Self {
            id,
            number,
            name: name.to_string(),
            placement,
            stats: StatLine::default(),
            record: None,
        }
    }

    pub fn with_record(mut self, record: PerformanceRecord) -> Self {
        self.record = Some(record);
        self
    }

    pub fn stat(&self, statistic: Statistic) -> u32 {
        self.stats.get(statistic)
    }

    pub fn set_stat(&mut self, statistic: Statistic, value: u32) {
        self.stats.set(statistic, value);
    }
}
