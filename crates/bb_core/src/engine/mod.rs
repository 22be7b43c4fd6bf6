pub mod ledger;
pub mod odds;
pub mod snapshot;

pub use ledger::SelectionLedger;
pub use odds::{base_price, format_price, price, round_to_cents};
pub use snapshot::PriceSnapshot;
