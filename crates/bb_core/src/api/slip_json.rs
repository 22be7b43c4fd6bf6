//! Bet-builder JSON API.
//!
//! Request/response contract consumed by the presentation layer. Every
//! request runs against the engine state as one unit: mutation, odds
//! derivation, ledger synchronization, and aggregate recomputation all finish
//! before the response snapshot is taken, so the UI never observes a roster
//! change without its ledger update or vice versa.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::odds::format_price;
use crate::engine::snapshot::PriceSnapshot;
use crate::error::EngineError;
use crate::models::{PlayerId, Selection, SelectionKey, Statistic, Team, TeamSide};
use crate::state::{self, BetState};
use crate::SCHEMA_VERSION;

/// Slip request, sent by the presentation layer.
#[derive(Debug, Deserialize)]
pub struct SlipRequest {
    pub schema_version: u8,
    pub request_type: SlipRequestType,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum SlipRequestType {
    /// Set one statistic counter on a player of the active team. The stepper
    /// clamps decrements at zero before sending, so `value` is already valid.
    SetStatistic { player_id: PlayerId, statistic: Statistic, value: u32 },

    /// Toggle between the two squads.
    SwitchTeam,

    /// Open a player of the active team in the detail view.
    OpenPlayer { player_id: PlayerId },

    /// Close the detail view.
    ClosePlayer,

    /// Discard one selection straight from the slip.
    RemoveSelection { team: TeamSide, player_id: PlayerId, statistic: Statistic },

    /// Set the stake from raw input text.
    SetStake { amount: String },

    /// Submit the slip.
    PlaceBet,

    /// Read the current state without mutating anything.
    GetState,
}

/// Slip response: the full engine-to-presentation view after the request.
/// Domain refusals (empty slip, missing stake) come back as `success = false`
/// with the untouched state attached.
#[derive(Debug, Serialize)]
pub struct SlipResponse {
    pub schema_version: u8,
    pub success: bool,
    pub state: StateView,
    pub error_message: Option<String>,
}

/// Everything the UI renders: the active squad with live counters, the slip,
/// the aggregate figures, and the detail view of the inspected player.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateView {
    pub active_team: Team,
    pub selections: Vec<SelectionView>,
    pub total_price: String,
    pub stake: Option<String>,
    pub projected_return: String,
    pub bet_placed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspected: Option<InspectionView>,
}

/// One slip row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionView {
    pub team: TeamSide,
    pub player_id: PlayerId,
    pub player_name: String,
    pub player_number: u8,
    pub statistic: Statistic,
    pub statistic_label: String,
    pub magnitude: u32,
    pub price: String,
}

/// Detail view of the inspected player: per-statistic prices plus the
/// combined price, which reads "1" in the neutral no-wager state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionView {
    pub player_id: PlayerId,
    pub player_number: u8,
    pub player_name: String,
    pub prices: SnapshotPrices,
    pub combined: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPrices {
    pub goals: String,
    pub assists: String,
    pub shots: String,
    pub yellow_cards: String,
    pub red_cards: String,
}

/// Apply one request against an explicit state and build the response view.
pub fn apply_slip_request(state: &mut BetState, request_type: SlipRequestType) -> SlipResponse {
    debug!(?request_type, "processing slip request");

    let mut success = true;
    let mut error_message = None;

    match request_type {
        SlipRequestType::SetStatistic { player_id, statistic, value } => {
            // A miss is a silent no-op, not a failure: the id simply names
            // nobody in the active team.
            let _ = state.set_statistic(player_id, statistic, value);
        }
        SlipRequestType::SwitchTeam => {
            state.switch_active_team();
        }
        SlipRequestType::OpenPlayer { player_id } => {
            let _ = state.open_player(player_id);
        }
        SlipRequestType::ClosePlayer => {
            state.close_player();
        }
        SlipRequestType::RemoveSelection { team, player_id, statistic } => {
            let _ = state.remove_selection(&SelectionKey { team, player_id, statistic });
        }
        SlipRequestType::SetStake { amount } => {
            state.set_stake(&amount);
        }
        SlipRequestType::PlaceBet => {
            if let Err(err) = state.place_bet(Utc::now()) {
                success = false;
                error_message = Some(err.to_string());
            }
        }
        SlipRequestType::GetState => {}
    }

    SlipResponse {
        schema_version: SCHEMA_VERSION,
        success,
        state: state_view(state),
        error_message,
    }
}

/// Main entry point for the JSON API. Processes one request and returns the
/// JSON response. Holds the global state lock for the whole request, so each
/// user action is one critical section.
pub fn process_slip_request_json(request_json: &str) -> Result<String, String> {
    process_request(request_json).map_err(|e| e.to_string())
}

fn process_request(request_json: &str) -> crate::error::Result<String> {
    let request: SlipRequest = serde_json::from_str(request_json)?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(EngineError::UnsupportedSchemaVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let mut state = state::get_state_mut();
    let response = apply_slip_request(&mut state, request.request_type);
    Ok(serde_json::to_string(&response)?)
}

fn state_view(state: &BetState) -> StateView {
    StateView {
        active_team: state.active_team().clone(),
        selections: state.ledger().iter().map(selection_view).collect(),
        total_price: format_price(state.total_price()),
        stake: state.stake().map(format_price),
        projected_return: format_price(state.projected_return()),
        bet_placed: state.bet_placed(Utc::now()),
        inspected: inspection_view(state),
    }
}

fn selection_view(selection: &Selection) -> SelectionView {
    SelectionView {
        team: selection.team,
        player_id: selection.player_id,
        player_name: selection.player_name.clone(),
        player_number: selection.player_number,
        statistic: selection.statistic,
        statistic_label: selection.statistic.label().to_string(),
        magnitude: selection.magnitude,
        price: format_price(selection.price),
    }
}

fn inspection_view(state: &BetState) -> Option<InspectionView> {
    let player = state.inspected_player()?;
    let snapshot = PriceSnapshot::of(player);

    Some(InspectionView {
        player_id: player.id,
        player_number: player.number,
        player_name: player.name.clone(),
        prices: SnapshotPrices {
            goals: format_price(snapshot.price(Statistic::Goals)),
            assists: format_price(snapshot.price(Statistic::Assists)),
            shots: format_price(snapshot.price(Statistic::Shots)),
            yellow_cards: format_price(snapshot.price(Statistic::YellowCards)),
            red_cards: format_price(snapshot.price(Statistic::RedCards)),
        },
        combined: format_combined(snapshot.combined),
    })
}

/// The neutral combined price renders as a bare "1", every real price to the
/// cent; two observably different empty states.
fn format_combined(combined: Decimal) -> String {
    if combined == Decimal::ONE {
        "1".to_string()
    } else {
        format_price(combined)
    }
}
