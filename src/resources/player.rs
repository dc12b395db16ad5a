use tonic::Code;

use crate::classify::{CallContext, StatusMapping};
use crate::dispatch::unary;
use crate::error::{Error, ErrorKind};
use crate::service::{PlayerService, PlayerStatsService};
use crate::types::{FixtureRequest, Player, PlayerRequest, PlayerStatsResponse};

const BY_ID: StatusMapping = StatusMapping::new(&[(Code::NotFound, ErrorKind::NotFound)]);
const FIXTURE_STATS: StatusMapping = StatusMapping::new(&[
    (Code::InvalidArgument, ErrorKind::InvalidArgument),
    (Code::Internal, ErrorKind::InternalServer),
]);

#[derive(Clone, Debug)]
pub struct PlayerClient<S> {
    service: S,
}

impl<S: PlayerService> PlayerClient<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub async fn by_id(&self, player_id: u64) -> Result<Player, Error> {
        let ctx = CallContext::new("player.by_id").with_resource(player_id);
        let req = PlayerRequest { player_id };
        unary(ctx, &BY_ID, self.service.player_by_id(req)).await
    }
}

#[derive(Clone, Debug)]
pub struct PlayerStatsClient<S> {
    service: S,
}

impl<S: PlayerStatsService> PlayerStatsClient<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Per-player statistics for both sides of a fixture.
    pub async fn fixture_stats(&self, req: FixtureRequest) -> Result<PlayerStatsResponse, Error> {
        let ctx = CallContext::new("player_stats.fixture_stats");
        unary(ctx, &FIXTURE_STATS, self.service.player_stats_for_fixture(req)).await
    }
}
