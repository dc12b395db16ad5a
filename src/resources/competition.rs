use tonic::Code;

use crate::classify::{CallContext, StatusMapping};
use crate::collect::drain;
use crate::error::{ErrorKind, Incomplete};
use crate::service::CompetitionService;
use crate::types::{Competition, CompetitionRequest};

const BY_COUNTRY_ID: StatusMapping =
    StatusMapping::new(&[(Code::Internal, ErrorKind::InternalServer)]);

#[derive(Clone, Debug)]
pub struct CompetitionClient<S> {
    service: S,
}

impl<S: CompetitionService> CompetitionClient<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub async fn by_country_id(
        &self,
        country_id: u64,
    ) -> Result<Vec<Competition>, Incomplete<Competition>> {
        let req = CompetitionRequest {
            country_ids: vec![country_id],
            ..Default::default()
        };
        self.list(req).await
    }

    /// Competitions matching an arbitrary filter.
    pub async fn list(
        &self,
        req: CompetitionRequest,
    ) -> Result<Vec<Competition>, Incomplete<Competition>> {
        let ctx = CallContext::new("competition.list");
        drain(ctx, &BY_COUNTRY_ID, self.service.list_competitions(req)).await
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

    struct FakeCompetitions {
        reply: Reply<ItemStream<Competition>>,
        requests: Requests<CompetitionRequest>,
    }

    impl FakeCompetitions {
        fn new(reply: Reply<ItemStream<Competition>>) -> Self {
            Self {
                reply,
                requests: Requests::default(),
            }
        }
    }

    #[async_trait]
    impl CompetitionService for FakeCompetitions {
        async fn list_competitions(
            &self,
            req: CompetitionRequest,
        ) -> Result<ItemStream<Competition>, TransportError> {
            self.requests.record(req);
            self.reply.take()
        }
    }

    fn competition(id: u64, name: &str) -> Competition {
        Competition {
            id,
            name: name.into(),
            is_cup: false,
            country_id: 462,
        }
    }

    #[tokio::test]
    async fn test_by_country_id() {
        let pulls = vec![
            Ok(competition(8, "Premier League")),
            Ok(competition(9, "Championship")),
        ];
        let client = CompetitionClient::new(FakeCompetitions::new(Reply::pulls(pulls)));

        let competitions = client.by_country_id(462).await.unwrap();

        assert_eq!(competitions.len(), 2);
        assert_eq!(competitions[0].name, "Premier League");
        let requests = client.service.requests.all();
        assert_eq!(requests[0].country_ids, vec![462]);
    }

    #[tokio::test]
    async fn test_by_country_id_internal() {
        let client = CompetitionClient::new(FakeCompetitions::new(Reply::status(
            Status::internal("internal error"),
        )));

        let partial = client.by_country_id(462).await.unwrap_err();

        assert_eq!(
            partial.to_string(),
            "internal server error returned from the data service: internal error (code: Internal)"
        );
    }

    #[tokio::test]
    async fn test_by_country_id_unavailable() {
        let client = CompetitionClient::new(FakeCompetitions::new(Reply::status(
            Status::unavailable("service unavailable"),
        )));

        let partial = client.by_country_id(462).await.unwrap_err();

        assert_eq!(
            partial.to_string(),
            "error connecting to the data service: service unavailable (code: Unavailable)"
        );
    }

    #[tokio::test]
    async fn test_by_country_id_stream_error() {
        let pulls = vec![
            Ok(competition(8, "Premier League")),
            Err(TransportError::other("oh damn")),
        ];
        let client = CompetitionClient::new(FakeCompetitions::new(Reply::pulls(pulls)));

        let partial = client.by_country_id(462).await.unwrap_err();

        assert_eq!(partial.items, vec![competition(8, "Premier League")]);
        assert_eq!(partial.to_string(), "oh damn");
    }
}
