//! # bb_core - Bet Builder Wagering Engine
//!
//! This library provides the wagering domain engine behind a two-squad bet
//! builder: per-player statistic adjustments, a deterministic odds function,
//! a deduplicated ledger of active selections, and combined price / projected
//! return, with a JSON API for easy integration with UI layers.
//!
//! ## Features
//! - Deterministic price derivation (same statistic and magnitude, same price)
//! - Roster counters and selection ledger kept consistent in both directions
//! - Single-threaded, synchronous mutations: each action completes as one unit
//! - JSON API for easy integration

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod state;

// Re-export main API functions
pub use api::{
    apply_slip_request, process_slip_request_json, SlipRequest, SlipRequestType, SlipResponse,
    StateView,
};
pub use error::{EngineError, Result};

// Re-export domain types
pub use engine::{PriceSnapshot, SelectionLedger};
pub use models::{
    BenchPosition, PerformanceRecord, PitchSpot, Placement, Player, PlayerId, Selection,
    SelectionKey, StatLine, Statistic, Team, TeamSide,
};

// Re-export state management
pub use state::{get_state, get_state_mut, reset_state, set_state, BetState, BET_STATE};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
