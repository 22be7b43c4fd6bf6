//! The set of active selections.
//!
//! Entries stay in insertion order (the order the slip renders) and are
//! deduplicated by (team, player, statistic). The ledger spans both squads;
//! bets survive team switches.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::odds;
use crate::models::{Selection, SelectionKey};

/// Active selections across both teams.
///
/// Bounded by statistics x players, so a linear scan is fine for lookups.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SelectionLedger {
    entries: Vec<Selection>,
}

impl SelectionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Selection> {
        self.entries.iter()
    }

    pub fn get(&self, key: &SelectionKey) -> Option<&Selection> {
        self.entries.iter().find(|s| s.key() == *key)
    }

    /// Mirror one roster counter into the ledger: a positive magnitude
    /// overwrites the keyed entry in place or appends a new one; zero removes
    /// the key if present and is a no-op otherwise.
    pub fn sync(
        &mut self,
        key: SelectionKey,
        player_name: &str,
        player_number: u8,
        magnitude: u32,
        price: Decimal,
    ) {
        if magnitude == 0 {
            self.remove(&key);
            return;
        }

        if let Some(existing) = self.entries.iter_mut().find(|s| s.key() == key) {
            existing.magnitude = magnitude;
            existing.price = price;
        } else {
            self.entries.push(Selection {
                team: key.team,
                player_id: key.player_id,
                player_name: player_name.to_string(),
                player_number,
                statistic: key.statistic,
                magnitude,
                price,
            });
        }
    }

    pub fn remove(&mut self, key: &SelectionKey) -> Option<Selection> {
        let index = self.entries.iter().position(|s| s.key() == *key)?;
        Some(self.entries.remove(index))
    }

    /// Take every entry out, leaving the ledger empty.
    pub fn drain(&mut self) -> Vec<Selection> {
        std::mem::take(&mut self.entries)
    }

    /// Product of all active prices, to the cent. An empty ledger totals zero:
    /// "nothing to bet", as opposed to the per-player snapshot's neutral 1.
    pub fn total_price(&self) -> Decimal {
        if self.entries.is_empty() {
            return Decimal::ZERO;
        }
        let product = self.entries.iter().fold(Decimal::ONE, |acc, s| acc * s.price);
        odds::round_to_cents(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Statistic, TeamSide};
    use rust_decimal_macros::dec;

    fn key(statistic: Statistic) -> SelectionKey {
        SelectionKey { team: TeamSide::Home, player_id: 10, statistic }
    }

    #[test]
    fn test_sync_appends_then_overwrites() {
        let mut ledger = SelectionLedger::new();

        ledger.sync(key(Statistic::Goals), "ST", 9, 1, dec!(5.25));
        ledger.sync(key(Statistic::Goals), "ST", 9, 2, dec!(7.00));

        assert_eq!(ledger.len(), 1);
        let entry = ledger.get(&key(Statistic::Goals)).unwrap();
        assert_eq!(entry.magnitude, 2);
        assert_eq!(entry.price, dec!(7.00));
    }

    #[test]
    fn test_sync_zero_magnitude_removes() {
        let mut ledger = SelectionLedger::new();

        ledger.sync(key(Statistic::Goals), "ST", 9, 2, dec!(7.00));
        ledger.sync(key(Statistic::Goals), "ST", 9, 0, Decimal::ZERO);
        assert!(ledger.is_empty());

        // Removing an absent key is a no-op.
        ledger.sync(key(Statistic::Shots), "ST", 9, 0, Decimal::ZERO);
        assert!(ledger.is_empty());
        assert!(ledger.remove(&key(Statistic::Shots)).is_none());
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut ledger = SelectionLedger::new();

        ledger.sync(key(Statistic::Goals), "ST", 9, 2, dec!(7.00));
        ledger.sync(key(Statistic::Shots), "ST", 9, 1, dec!(2.70));
        // Overwriting the first entry must not move it to the back.
        ledger.sync(key(Statistic::Goals), "ST", 9, 3, dec!(8.75));

        let statistics: Vec<Statistic> = ledger.iter().map(|s| s.statistic).collect();
        assert_eq!(statistics, vec![Statistic::Goals, Statistic::Shots]);
    }

    #[test]
    fn test_total_price_is_product_of_entries() {
        let mut ledger = SelectionLedger::new();
        assert_eq!(ledger.total_price(), Decimal::ZERO);

        ledger.sync(key(Statistic::Goals), "ST", 9, 2, dec!(7.00));
        assert_eq!(ledger.total_price(), dec!(7.00));

        ledger.sync(key(Statistic::Assists), "ST", 9, 1, dec!(6.30));
        assert_eq!(ledger.total_price(), dec!(44.10));
    }

    #[test]
    fn test_drain_empties_the_ledger() {
        let mut ledger = SelectionLedger::new();
        ledger.sync(key(Statistic::Goals), "ST", 9, 2, dec!(7.00));
        ledger.sync(key(Statistic::Shots), "ST", 9, 1, dec!(2.70));

        let drained = ledger.drain();
        assert_eq!(drained.len(), 2);
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_price(), Decimal::ZERO);
    }
}
