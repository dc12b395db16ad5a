use tonic::Code;

use crate::classify::{CallContext, StatusMapping};
use crate::collect::drain;
use crate::error::{ErrorKind, Incomplete};
use crate::service::TeamStatsService;
use crate::types::{TeamStat, TeamStatRequest};

const STATS: StatusMapping = StatusMapping::new(&[
    (Code::InvalidArgument, ErrorKind::InvalidArgument),
    (Code::Internal, ErrorKind::InternalServer),
]);

#[derive(Clone, Debug)]
pub struct TeamStatClient<S> {
    service: S,
}

impl<S: TeamStatsService> TeamStatClient<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub async fn stats(
        &self,
        req: TeamStatRequest,
    ) -> Result<Vec<TeamStat>, Incomplete<TeamStat>> {
        let ctx = CallContext::new("team_stat.stats");
        drain(ctx, &STATS, self.service.stat_for_team(req)).await
    }
}
