use tokio::sync::mpsc;
use tonic::Code;

use crate::classify::{CallContext, StatusMapping};
use crate::collect::{drain, drain_channel};
use crate::dispatch::unary;
use crate::error::{Error, ErrorKind, Incomplete};
use crate::service::ResultService;
use crate::types::{MatchResult, ResultRequest, TeamResultRequest};

const BY_ID: StatusMapping = StatusMapping::new(&[
    (Code::NotFound, ErrorKind::NotFound),
    (Code::Internal, ErrorKind::InternalServer),
]);
const BY_TEAM: StatusMapping = StatusMapping::new(&[
    (Code::InvalidArgument, ErrorKind::InvalidArgument),
    (Code::Internal, ErrorKind::InternalServer),
]);

#[derive(Clone, Debug)]
pub struct ResultClient<S> {
    service: S,
}

impl<S: ResultService> ResultClient<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub async fn by_id(&self, fixture_id: u64) -> Result<MatchResult, Error> {
        let ctx = CallContext::new("result.by_id").with_resource(fixture_id);
        let req = ResultRequest { fixture_id };
        unary(ctx, &BY_ID, self.service.result_by_id(req)).await
    }

    pub async fn by_team(
        &self,
        req: TeamResultRequest,
    ) -> Result<Vec<MatchResult>, Incomplete<MatchResult>> {
        let ctx = CallContext::new("result.by_team");
        drain(ctx, &BY_TEAM, self.service.results_for_team(req)).await
    }

    /// Streams a team's results over a channel as they arrive instead of
    /// collecting them. A failure is the last message before the channel
    /// closes.
    pub fn by_team_channel(
        &self,
        req: TeamResultRequest,
        buffer: usize,
    ) -> mpsc::Receiver<Result<MatchResult, Error>>
    where
        S: Clone + 'static,
    {
        let service = self.service.clone();
        let open = async move { service.results_for_team(req).await };
        drain_channel(CallContext::new("result.by_team_channel"), &BY_TEAM, open, buffer)
    }
}
