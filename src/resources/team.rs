use tonic::Code;

use crate::classify::{CallContext, StatusMapping};
use crate::collect::drain;
use crate::dispatch::unary;
use crate::error::{Error, ErrorKind, Incomplete};
use crate::service::TeamService;
use crate::types::{SeasonTeamsRequest, Team, TeamRequest};

const BY_ID: StatusMapping = StatusMapping::new(&[(Code::NotFound, ErrorKind::NotFound)]);
const BY_SEASON_ID: StatusMapping =
    StatusMapping::new(&[(Code::Internal, ErrorKind::InternalServer)]);

#[derive(Clone, Debug)]
pub struct TeamClient<S> {
    service: S,
}

impl<S: TeamService> TeamClient<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub async fn by_id(&self, team_id: u64) -> Result<Team, Error> {
        let ctx = CallContext::new("team.by_id").with_resource(team_id);
        unary(ctx, &BY_ID, self.service.team_by_id(TeamRequest { team_id })).await
    }

    /// Every team that took part in the season.
    pub async fn by_season_id(&self, season_id: u64) -> Result<Vec<Team>, Incomplete<Team>> {
        let ctx = CallContext::new("team.by_season_id");
        let req = SeasonTeamsRequest { season_id };
        drain(ctx, &BY_SEASON_ID, self.service.teams_by_season_id(req)).await
    }
}

#[cfg(test)]
mod test {
    use async_trait::async_trait;
    use tonic::Status;

    use super::*;
    use crate::error::TransportError;
    use crate::service::ItemStream;
    use crate::testing::{Reply, Requests};

    struct FakeTeams {
        team: Reply<Team>,
        season: Reply<ItemStream<Team>>,
        requests: Requests<u64>,
    }

    impl FakeTeams {
        fn team(team: Reply<Team>) -> Self {
            Self {
                team,
                season: Reply::pulls(vec![]),
                requests: Requests::default(),
            }
        }

        fn season(season: Reply<ItemStream<Team>>) -> Self {
            Self {
                team: Reply::ok(Team::default()),
                season,
                requests: Requests::default(),
            }
        }
    }

    #[async_trait]
    impl TeamService for FakeTeams {
        async fn team_by_id(&self, req: TeamRequest) -> Result<Team, TransportError> {
            self.requests.record(req.team_id);
            self.team.take()
        }

        async fn teams_by_season_id(
            &self,
            req: SeasonTeamsRequest,
        ) -> Result<ItemStream<Team>, TransportError> {
            self.requests.record(req.season_id);
            self.season.take()
        }
    }

    fn west_ham() -> Team {
        Team {
            id: 1,
            name: "West Ham United".into(),
            short_code: Some("WHU".into()),
            country_id: 8,
            is_national_team: false,
            founded: Some(1895),
            logo: Some("logo".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_by_id() {
        let client = TeamClient::new(FakeTeams::team(Reply::ok(west_ham())));

        let team = client.by_id(1).await.unwrap();

        assert_eq!(team, west_ham());
        assert_eq!(client.service.requests.all(), vec![1]);
    }

    #[tokio::test]
    async fn test_by_id_not_found() {
        let client = TeamClient::new(FakeTeams::team(Reply::status(Status::not_found(
            "not found",
        ))));

        let err = client.by_id(1).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "resource with ID '1' does not exist: not found (code: NotFound)"
        );
    }

    #[tokio::test]
    async fn test_by_id_other_status_is_bad_gateway() {
        let client = TeamClient::new(FakeTeams::team(Reply::status(Status::internal(
            "internal error",
        ))));

        let err = client.by_id(1).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::BadGateway);
        assert_eq!(
            err.to_string(),
            "error connecting to the data service: internal error (code: Internal)"
        );
    }

    #[tokio::test]
    async fn test_by_season_id() {
        let teams = vec![west_ham(), Team { id: 2, ..west_ham() }];
        let pulls = teams.iter().cloned().map(Ok).collect();
        let client = TeamClient::new(FakeTeams::season(Reply::pulls(pulls)));

        let fetched = client.by_season_id(16036).await.unwrap();

        assert_eq!(fetched, teams);
        assert_eq!(client.service.requests.all(), vec![16036]);
    }

    #[tokio::test]
    async fn test_by_season_id_connection_failure() {
        let client = TeamClient::new(FakeTeams::season(Reply::status(Status::internal(
            "internal error",
        ))));

        let partial = client.by_season_id(16036).await.unwrap_err();

        assert!(partial.items.is_empty());
        assert_eq!(partial.kind(), ErrorKind::InternalServer);
    }

    #[tokio::test]
    async fn test_by_season_id_stream_failure() {
        let pulls = vec![Ok(west_ham()), Err(TransportError::other("decode failed"))];
        let client = TeamClient::new(FakeTeams::season(Reply::pulls(pulls)));

        let partial = client.by_season_id(16036).await.unwrap_err();

        assert_eq!(partial.items, vec![west_ham()]);
        assert_eq!(partial.to_string(), "decode failed");
    }
}
