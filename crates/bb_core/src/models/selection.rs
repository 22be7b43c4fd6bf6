use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::player::{PlayerId, Statistic};
use super::team::TeamSide;

/// Ledger key. At most one selection may exist per key at any time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct SelectionKey {
    pub team: TeamSide,
    pub player_id: PlayerId,
    pub statistic: Statistic,
}

/// One active wager: a player's statistic at a magnitude, with the price
/// derived from it. Player name and number ride along for slip rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub team: TeamSide,
    pub player_id: PlayerId,
    pub player_name: String,
    pub player_number: u8,
    pub statistic: Statistic,
    pub magnitude: u32,
    pub price: Decimal,
}

impl Selection {
    pub fn key(&self) -> SelectionKey {
        SelectionKey {
            team: self.team,
            player_id: self.player_id,
            statistic: self.statistic,
        }
    }
}
