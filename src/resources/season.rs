use tonic::Code;

use crate::classify::{CallContext, StatusMapping};
use crate::collect::drain;
use crate::dispatch::unary;
use crate::error::{Error, ErrorKind, Incomplete};
use crate::service::SeasonService;
use crate::types::{Season, SeasonCompetitionRequest, TeamSeasonsRequest};

const SEASONS: StatusMapping = StatusMapping::new(&[(Code::Internal, ErrorKind::InternalServer)]);

#[derive(Clone, Debug)]
pub struct SeasonClient<S> {
    service: S,
}

impl<S: SeasonService> SeasonClient<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Seasons the team played in. `sort` is passed to the service as is,
    /// e.g. `name_asc` or `name_desc`.
    pub async fn by_team_id(&self, team_id: u64, sort: &str) -> Result<Vec<Season>, Error> {
        let ctx = CallContext::new("season.by_team_id");
        let req = TeamSeasonsRequest {
            team_id,
            sort: Some(sort.into()),
        };
        let response = unary(ctx, &SEASONS, self.service.seasons_for_team(req)).await?;
        Ok(response.seasons)
    }

    pub async fn by_competition_id(
        &self,
        competition_id: u64,
        sort: &str,
    ) -> Result<Vec<Season>, Incomplete<Season>> {
        let ctx = CallContext::new("season.by_competition_id");
        let req = SeasonCompetitionRequest {
            competition_id,
            sort: Some(sort.into()),
        };
        drain(ctx, &SEASONS, self.service.seasons_for_competition(req)).await
    }
}
