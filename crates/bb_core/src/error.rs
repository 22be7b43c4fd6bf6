use thiserror::Error;

/// Engine-level failures surfaced to the presentation layer.
///
/// Roster lookups that miss are deliberately not errors: the contract treats
/// a statistic mutation against an id outside the active team as a silent
/// no-op (see `BetState::set_statistic`), and a non-numeric stake coerces to
/// "no stake" rather than failing.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchemaVersion { found: u8, expected: u8 },

    #[error("Bet slip is empty")]
    EmptySlip,

    #[error("No stake entered")]
    MissingStake,
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            EngineError::Deserialization(err.to_string())
        } else {
            EngineError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
