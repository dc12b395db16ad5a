//! One client per remote service. Each builds its request values, picks the
//! status mapping for the operation and hands the call to the core.

mod competition;
mod event;
mod fixture;
mod player;
mod result;
mod season;
mod team;
mod team_stat;

pub use competition::CompetitionClient;
pub use event::EventClient;
pub use fixture::FixtureClient;
pub use player::{PlayerClient, PlayerStatsClient};
pub use result::ResultClient;
pub use season::SeasonClient;
pub use team::TeamClient;
pub use team_stat::TeamStatClient;
