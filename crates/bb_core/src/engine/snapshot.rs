//! Detail-view price snapshot for a single player.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::engine::odds;
use crate::models::{Player, Statistic};

/// Per-statistic prices for one player plus their combined price.
///
/// The combined price multiplies the non-zero per-statistic prices only. With
/// nothing selected the product stays at the multiplicative identity and is
/// reported as 1: the neutral "combined odds so far" the detail view shows
/// before any wager. Zero is reserved for a single statistic with no wager,
/// and for the ledger-wide total of an empty slip.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceSnapshot {
    pub goals: Decimal,
    pub assists: Decimal,
    pub shots: Decimal,
    pub yellow_cards: Decimal,
    pub red_cards: Decimal,
    pub combined: Decimal,
}

impl PriceSnapshot {
    /// Derive the snapshot from the player's current counters. Always
    /// recomputed on demand, never cached, so it cannot drift from the roster
    /// whether the player was just opened or changed while open.
    pub fn of(player: &Player) -> Self {
        let price_of = |statistic| odds::price(statistic, player.stat(statistic));

        let mut combined = Decimal::ONE;
        for statistic in Statistic::ALL {
            let price = price_of(statistic);
            if price > Decimal::ZERO {
                combined *= price;
            }
        }
        combined = odds::round_to_cents(combined);
        if combined <= Decimal::ONE {
            combined = Decimal::ONE;
        }

        Self {
            goals: price_of(Statistic::Goals),
            assists: price_of(Statistic::Assists),
            shots: price_of(Statistic::Shots),
            yellow_cards: price_of(Statistic::YellowCards),
            red_cards: price_of(Statistic::RedCards),
            combined,
        }
    }

    pub fn price(&self, statistic: Statistic) -> Decimal {
        match statistic {
            Statistic::Goals => self.goals,
            Statistic::Assists => self.assists,
            Statistic::Shots => self.shots,
            Statistic::YellowCards => self.yellow_cards,
            Statistic::RedCards => self.red_cards,
        }
    }
}
