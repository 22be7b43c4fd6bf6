pub mod player;
pub mod selection;
pub mod team;

pub use player::{
    BenchPosition, PerformanceRecord, PitchSpot, Placement, Player, PlayerId, StatLine, Statistic,
};
pub use selection::{Selection, SelectionKey};
pub use team::{Team, TeamSide};
