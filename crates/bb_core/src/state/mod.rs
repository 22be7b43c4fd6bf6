//! Bet-builder session state.
//!
//! `BetState` owns the two rosters, the active-team pointer, the selection
//! ledger, and the stake, and exposes the only operations that may mutate
//! them. Every derived figure (total price, projected return, per-player
//! snapshot) is recomputed from this owned state on demand; nothing is cached
//! that could drift. A global singleton carries the state across JSON API
//! calls, the same way the game state travels between engine and UI in a
//! session.

use std::str::FromStr;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::engine::ledger::SelectionLedger;
use crate::engine::odds;
use crate::engine::snapshot::PriceSnapshot;
use crate::error::EngineError;
use crate::models::{Player, PlayerId, Selection, SelectionKey, Statistic, Team, TeamSide};

/// Seconds the bet-placed confirmation stays visible.
pub const BET_CONFIRMATION_SECS: i64 = 3;

/// Global bet-builder state singleton
pub static BET_STATE: Lazy<Arc<RwLock<BetState>>> =
    Lazy::new(|| Arc::new(RwLock::new(BetState::default())));

/// Runtime session state.
///
/// Fields are private: the presentation layer must never touch counters or
/// selections directly, only request mutations through the operations below.
#[derive(Debug, Clone)]
pub struct BetState {
    /// The two fixed squads; never created or destroyed at runtime.
    teams: [Team; 2],

    /// Which squad statistic mutations and inspection currently target.
    active_side: TeamSide,

    /// Active selections across both squads.
    ledger: SelectionLedger,

    /// User-entered stake; `None` until a valid amount is typed.
    stake: Option<Decimal>,

    /// Player open in the detail view. Always an id of the active team;
    /// cleared whenever the active side changes.
    inspected: Option<PlayerId>,

    /// When the last bet was placed; drives the confirmation window.
    bet_placed_at: Option<DateTime<Utc>>,
}

impl Default for BetState {
    fn default() -> Self {
        Self::new()
    }
}

impl BetState {
    /// Fresh session: default squads, home side active, empty slip.
    pub fn new() -> Self {
        Self {
            teams: Team::default_pair(),
            active_side: TeamSide::Home,
            ledger: SelectionLedger::new(),
            stake: None,
            inspected: None,
            bet_placed_at: None,
        }
    }

    // ========================
    // Team Access
    // ========================

    pub fn active_side(&self) -> TeamSide {
        self.active_side
    }

    pub fn active_team(&self) -> &Team {
        self.team(self.active_side)
    }

    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::Home => &self.teams[0],
            TeamSide::Away => &self.teams[1],
        }
    }

    fn team_mut(&mut self, side: TeamSide) -> &mut Team {
        match side {
            TeamSide::Home => &mut self.teams[0],
            TeamSide::Away => &mut self.teams[1],
        }
    }

    // ========================
    // Roster Mutations
    // ========================

    /// Apply "set player P's statistic S to V" against the active team.
    ///
    /// The player is looked up among the active team's starters, then its
    /// substitutes. An id with no match in either collection returns `None`
    /// and changes nothing; ids are only valid within the currently active
    /// team. On a match, the counter, the derived price, and the ledger entry
    /// all update before this returns, so no observer sees them disagree.
    pub fn set_statistic(
        &mut self,
        player_id: PlayerId,
        statistic: Statistic,
        value: u32,
    ) -> Option<Decimal> {
        let side = self.active_side;
        let (player_name, player_number) = {
            let player = match self.team_mut(side).find_player_mut(player_id) {
                Some(player) => player,
                None => {
                    log::debug!(
                        "ignoring statistic update for unknown player {} on {}",
                        player_id,
                        side.code()
                    );
                    return None;
                }
            };
            player.set_stat(statistic, value);
            (player.name.clone(), player.number)
        };

        let price = odds::price(statistic, value);
        self.ledger.sync(
            SelectionKey { team: side, player_id, statistic },
            &player_name,
            player_number,
            value,
            price,
        );
        Some(price)
    }

    /// Toggle between the two squads. The inspected player is cleared so the
    /// detail view cannot keep showing someone from the previous squad; the
    /// ledger is untouched, bets persist across switches.
    pub fn switch_active_team(&mut self) -> TeamSide {
        self.active_side = self.active_side.other();
        self.inspected = None;
        self.active_side
    }

    // ========================
    // Inspection
    // ========================

    /// Open a player of the active team in the detail view. An id absent from
    /// the active team is a no-op returning `false`.
    pub fn open_player(&mut self, player_id: PlayerId) -> bool {
        if self.active_team().find_player(player_id).is_none() {
            log::debug!(
                "ignoring inspection of unknown player {} on {}",
                player_id,
                self.active_side.code()
            );
            return false;
        }
        self.inspected = Some(player_id);
        true
    }

    pub fn close_player(&mut self) {
        self.inspected = None;
    }

    pub fn inspected_player(&self) -> Option<&Player> {
        self.inspected.and_then(|id| self.active_team().find_player(id))
    }

    /// Price snapshot for the player currently open in the detail view,
    /// recomputed from the live counters on every call.
    pub fn inspected_snapshot(&self) -> Option<PriceSnapshot> {
        self.inspected_player().map(PriceSnapshot::of)
    }

    // ========================
    // Selection Ledger
    // ========================

    pub fn ledger(&self) -> &SelectionLedger {
        &self.ledger
    }

    /// Discard a selection directly from the slip.
    ///
    /// Also resets the corresponding counter to zero: a selection exists iff
    /// its counter is positive, and that holds from either direction. The key
    /// names its team explicitly, since bets persist across switches, so the
    /// target may belong to the inactive squad.
    pub fn remove_selection(&mut self, key: &SelectionKey) -> Option<Selection> {
        let removed = self.ledger.remove(key)?;
        if let Some(player) = self.team_mut(key.team).find_player_mut(key.player_id) {
            player.set_stat(key.statistic, 0);
        }
        log::debug!(
            "removed selection {} #{} {:?}",
            key.team.code(),
            key.player_id,
            key.statistic
        );
        Some(removed)
    }

    // ========================
    // Stake & Returns
    // ========================

    /// Parse and store the stake. Non-numeric or negative input coerces to
    /// "no stake" rather than surfacing an error.
    pub fn set_stake(&mut self, input: &str) {
        self.stake = parse_stake(input);
    }

    pub fn stake(&self) -> Option<Decimal> {
        self.stake
    }

    /// Combined price of every active selection; an empty slip totals zero.
    pub fn total_price(&self) -> Decimal {
        self.ledger.total_price()
    }

    /// Stake times total price, to the cent. Absent stake and empty slip both
    /// project zero.
    pub fn projected_return(&self) -> Decimal {
        match self.stake {
            Some(stake) => odds::round_to_cents(stake * self.ledger.total_price()),
            None => Decimal::ZERO,
        }
    }

    // ========================
    // Bet Placement
    // ========================

    /// Submit the slip: clears the ledger and the stake as one transition and
    /// starts the confirmation window. Every counter behind a cleared
    /// selection resets to zero so the rosters and the now-empty ledger stay
    /// consistent.
    pub fn place_bet(&mut self, now: DateTime<Utc>) -> Result<(), EngineError> {
        if self.ledger.is_empty() {
            return Err(EngineError::EmptySlip);
        }
        if self.stake.is_none() {
            return Err(EngineError::MissingStake);
        }

        let total = self.ledger.total_price();
        let selections = self.ledger.drain();
        let count = selections.len();
        for selection in selections {
            if let Some(player) =
                self.team_mut(selection.team).find_player_mut(selection.player_id)
            {
                player.set_stat(selection.statistic, 0);
            }
        }
        self.stake = None;
        self.bet_placed_at = Some(now);

        log::info!("bet placed: {} selections at total price {}", count, total);
        Ok(())
    }

    /// Whether the bet-placed confirmation is still inside its display
    /// window. The flag clears itself by comparison against `now`; no
    /// background work runs.
    pub fn bet_placed(&self, now: DateTime<Utc>) -> bool {
        match self.bet_placed_at {
            Some(at) => now.signed_duration_since(at) < Duration::seconds(BET_CONFIRMATION_SECS),
            None => false,
        }
    }
}

fn parse_stake(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = Decimal::from_str(trimmed).ok()?;
    if value.is_sign_negative() {
        return None;
    }
    Some(value)
}

// ========================
// Global State Access Functions
// ========================

/// Get a read lock on the global session state
pub fn get_state() -> std::sync::RwLockReadGuard<'static, BetState> {
    BET_STATE.read().expect("BET_STATE lock poisoned")
}

/// Get a write lock on the global session state
pub fn get_state_mut() -> std::sync::RwLockWriteGuard<'static, BetState> {
    BET_STATE.write().expect("BET_STATE lock poisoned")
}

/// Reset the global state to a fresh session
pub fn reset_state() {
    *BET_STATE.write().expect("BET_STATE lock poisoned") = BetState::new();
}

/// Replace the entire global state
pub fn set_state(new_state: BetState) {
    *BET_STATE.write().expect("BET_STATE lock poisoned") = new_state;
}
