//! tonic-backed implementation of the service interfaces.

use async_trait::async_trait;
use futures::StreamExt;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tonic::{Request, Status};
use tracing::info;

use crate::config::Config;
use crate::error::{ConnectError, TransportError};
use crate::resources::{
    CompetitionClient, EventClient, FixtureClient, PlayerClient, PlayerStatsClient, ResultClient,
    SeasonClient, TeamClient, TeamStatClient,
};
use crate::service::*;
use crate::types::*;

const LIST_COMPETITIONS: &str = "/statistico.CompetitionService/ListCompetitions";
const FIXTURE_EVENTS: &str = "/statistico.EventService/FixtureEvents";
const FIXTURE_BY_ID: &str = "/statistico.FixtureService/FixtureByID";
const FIXTURE_SEARCH: &str = "/statistico.FixtureService/Search";
const PLAYER_BY_ID: &str = "/statistico.PlayerService/GetPlayerByID";
const PLAYER_STATS_FOR_FIXTURE: &str = "/statistico.PlayerStatsService/GetPlayerStatsForFixture";
const RESULT_BY_ID: &str = "/statistico.ResultService/GetById";
const RESULTS_FOR_TEAM: &str = "/statistico.ResultService/GetResultsForTeam";
const SEASONS_FOR_TEAM: &str = "/statistico.SeasonService/GetSeasonsForTeam";
const SEASONS_FOR_COMPETITION: &str = "/statistico.SeasonService/GetSeasonsForCompetition";
const TEAM_BY_ID: &str = "/statistico.TeamService/GetTeamByID";
const TEAMS_BY_SEASON_ID: &str = "/statistico.TeamService/GetTeamsBySeasonId";
const STAT_FOR_TEAM: &str = "/statistico.TeamStatsService/GetStatForTeam";

/// Status for a channel that failed before a request was sent. The service
/// never answered, so this is a locally made `Unknown`, the same code
/// tonic's generated clients use. No mapping lists `Unknown`, which leaves
/// it to the `BadGateway` fallback.
fn not_ready(err: impl std::fmt::Display) -> Status {
    Status::unknown(format!("service was not ready: {err}"))
}

/// One channel to the data service, shared by every service interface.
#[derive(Clone, Debug)]
pub struct GrpcTransport {
    inner: tonic::client::Grpc<Channel>,
}

impl GrpcTransport {
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    pub async fn connect(config: &Config) -> Result<Self, ConnectError> {
        let endpoint = Endpoint::from_shared(config.endpoint.clone())
            .map_err(|source| ConnectError::Endpoint {
                endpoint: config.endpoint.clone(),
                source,
            })?
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout);

        let channel = endpoint.connect().await?;
        info!(endpoint = %config.endpoint, "connected to data service");
        Ok(Self::from_channel(channel))
    }

    async fn ready(&self) -> Result<tonic::client::Grpc<Channel>, Status> {
        let mut grpc = self.inner.clone();
        grpc.ready().await.map_err(not_ready)?;
        Ok(grpc)
    }

    async fn unary<Req, Resp>(&self, path: &'static str, req: Req) -> Result<Resp, TransportError>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let mut grpc = self.ready().await?;
        let codec: ProstCodec<Req, Resp> = ProstCodec::default();
        let response = grpc
            .unary(Request::new(req), PathAndQuery::from_static(path), codec)
            .await?;
        Ok(response.into_inner())
    }

    async fn server_streaming<Req, Resp>(
        &self,
        path: &'static str,
        req: Req,
    ) -> Result<ItemStream<Resp>, TransportError>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let mut grpc = self.ready().await?;
        let codec: ProstCodec<Req, Resp> = ProstCodec::default();
        let response = grpc
            .server_streaming(Request::new(req), PathAndQuery::from_static(path), codec)
            .await?;
        Ok(response
            .into_inner()
            .map(|item| item.map_err(TransportError::from))
            .boxed())
    }
}

#[async_trait]
impl CompetitionService for GrpcTransport {
    async fn list_competitions(
        &self,
        req: CompetitionRequest,
    ) -> Result<ItemStream<Competition>, TransportError> {
        self.server_streaming(LIST_COMPETITIONS, req).await
    }
}

#[async_trait]
impl EventService for GrpcTransport {
    async fn fixture_events(
        &self,
        req: FixtureRequest,
    ) -> Result<FixtureEventsResponse, TransportError> {
        self.unary(FIXTURE_EVENTS, req).await
    }
}

#[async_trait]
impl FixtureService for GrpcTransport {
    async fn fixture_by_id(&self, req: FixtureRequest) -> Result<Fixture, TransportError> {
        self.unary(FIXTURE_BY_ID, req).await
    }

    async fn search(
        &self,
        req: FixtureSearchRequest,
    ) -> Result<ItemStream<Fixture>, TransportError> {
        self.server_streaming(FIXTURE_SEARCH, req).await
    }
}

#[async_trait]
impl PlayerService for GrpcTransport {
    async fn player_by_id(&self, req: PlayerRequest) -> Result<Player, TransportError> {
        self.unary(PLAYER_BY_ID, req).await
    }
}

#[async_trait]
impl PlayerStatsService for GrpcTransport {
    async fn player_stats_for_fixture(
        &self,
        req: FixtureRequest,
    ) -> Result<PlayerStatsResponse, TransportError> {
        self.unary(PLAYER_STATS_FOR_FIXTURE, req).await
    }
}

#[async_trait]
impl ResultService for GrpcTransport {
    async fn result_by_id(&self, req: ResultRequest) -> Result<MatchResult, TransportError> {
        self.unary(RESULT_BY_ID, req).await
    }

    async fn results_for_team(
        &self,
        req: TeamResultRequest,
    ) -> Result<ItemStream<MatchResult>, TransportError> {
        self.server_streaming(RESULTS_FOR_TEAM, req).await
    }
}

#[async_trait]
impl SeasonService for GrpcTransport {
    async fn seasons_for_team(
        &self,
        req: TeamSeasonsRequest,
    ) -> Result<TeamSeasonsResponse, TransportError> {
        self.unary(SEASONS_FOR_TEAM, req).await
    }

    async fn seasons_for_competition(
        &self,
        req: SeasonCompetitionRequest,
    ) -> Result<ItemStream<Season>, TransportError> {
        self.server_streaming(SEASONS_FOR_COMPETITION, req).await
    }
}

#[async_trait]
impl TeamService for GrpcTransport {
    async fn team_by_id(&self, req: TeamRequest) -> Result<Team, TransportError> {
        self.unary(TEAM_BY_ID, req).await
    }

    async fn teams_by_season_id(
        &self,
        req: SeasonTeamsRequest,
    ) -> Result<ItemStream<Team>, TransportError> {
        self.server_streaming(TEAMS_BY_SEASON_ID, req).await
    }
}

#[async_trait]
impl TeamStatsService for GrpcTransport {
    async fn stat_for_team(
        &self,
        req: TeamStatRequest,
    ) -> Result<ItemStream<TeamStat>, TransportError> {
        self.server_streaming(STAT_FOR_TEAM, req).await
    }
}

/// Every resource client, wired to a single [`GrpcTransport`].
#[derive(Clone)]
pub struct DataClients {
    pub competitions: CompetitionClient<GrpcTransport>,
    pub events: EventClient<GrpcTransport>,
    pub fixtures: FixtureClient<GrpcTransport>,
    pub players: PlayerClient<GrpcTransport>,
    pub player_stats: PlayerStatsClient<GrpcTransport>,
    pub results: ResultClient<GrpcTransport>,
    pub seasons: SeasonClient<GrpcTransport>,
    pub teams: TeamClient<GrpcTransport>,
    pub team_stats: TeamStatClient<GrpcTransport>,
}

impl DataClients {
    pub async fn connect(config: &Config) -> Result<Self, ConnectError> {
        Ok(Self::new(GrpcTransport::connect(config).await?))
    }

    pub fn new(transport: GrpcTransport) -> Self {
        Self {
            competitions: CompetitionClient::new(transport.clone()),
            events: EventClient::new(transport.clone()),
            fixtures: FixtureClient::new(transport.clone()),
            players: PlayerClient::new(transport.clone()),
            player_stats: PlayerStatsClient::new(transport.clone()),
            results: ResultClient::new(transport.clone()),
            seasons: SeasonClient::new(transport.clone()),
            teams: TeamClient::new(transport.clone()),
            team_stats: TeamStatClient::new(transport),
        }
    }
}
