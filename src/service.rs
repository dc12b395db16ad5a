//! Transport-facing service interfaces. Each trait mirrors one remote
//! service; [`crate::grpc::GrpcTransport`] implements all of them over tonic.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::TransportError;
use crate::types::*;

/// Server-streaming response; `None` marks the end of the stream.
pub type ItemStream<T> = BoxStream<'static, Result<T, TransportError>>;

#[async_trait]
pub trait CompetitionService: Send + Sync {
    async fn list_competitions(
        &self,
        req: CompetitionRequest,
    ) -> Result<ItemStream<Competition>, TransportError>;
}

#[async_trait]
pub trait EventService: Send + Sync {
    async fn fixture_events(
        &self,
        req: FixtureRequest,
    ) -> Result<FixtureEventsResponse, TransportError>;
}

#[async_trait]
pub trait FixtureService: Send + Sync {
    async fn fixture_by_id(&self, req: FixtureRequest) -> Result<Fixture, TransportError>;
    async fn search(
        &self,
        req: FixtureSearchRequest,
    ) -> Result<ItemStream<Fixture>, TransportError>;
}

#[async_trait]
pub trait PlayerService: Send + Sync {
    async fn player_by_id(&self, req: PlayerRequest) -> Result<Player, TransportError>;
}

#[async_trait]
pub trait PlayerStatsService: Send + Sync {
    async fn player_stats_for_fixture(
        &self,
        req: FixtureRequest,
    ) -> Result<PlayerStatsResponse, TransportError>;
}

#[async_trait]
pub trait ResultService: Send + Sync {
    async fn result_by_id(&self, req: ResultRequest) -> Result<MatchResult, TransportError>;
    async fn results_for_team(
        &self,
        req: TeamResultRequest,
    ) -> Result<ItemStream<MatchResult>, TransportError>;
}

#[async_trait]
pub trait SeasonService: Send + Sync {
    async fn seasons_for_team(
        &self,
        req: TeamSeasonsRequest,
    ) -> Result<TeamSeasonsResponse, TransportError>;
    async fn seasons_for_competition(
        &self,
        req: SeasonCompetitionRequest,
    ) -> Result<ItemStream<Season>, TransportError>;
}

#[async_trait]
pub trait TeamService: Send + Sync {
    async fn team_by_id(&self, req: TeamRequest) -> Result<Team, TransportError>;
    async fn teams_by_season_id(
        &self,
        req: SeasonTeamsRequest,
    ) -> Result<ItemStream<Team>, TransportError>;
}

#[async_trait]
pub trait TeamStatsService: Send + Sync {
    async fn stat_for_team(
        &self,
        req: TeamStatRequest,
    ) -> Result<ItemStream<TeamStat>, TransportError>;
}
