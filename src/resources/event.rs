use tonic::Code;

use crate::classify::{CallContext, StatusMapping};
use crate::dispatch::unary;
use crate::error::{Error, ErrorKind};
use crate::service::EventService;
use crate::types::{FixtureEventsResponse, FixtureRequest};

const FIXTURE_EVENTS: StatusMapping = StatusMapping::new(&[
    (Code::NotFound, ErrorKind::NotFound),
    (Code::Internal, ErrorKind::InternalServer),
]);

#[derive(Clone, Debug)]
pub struct EventClient<S> {
    service: S,
}

impl<S: EventService> EventClient<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Goals, cards and substitutions recorded for a fixture.
    pub async fn fixture_events(&self, fixture_id: u64) -> Result<FixtureEventsResponse, Error> {
        let ctx = CallContext::new("event.fixture_events").with_resource(fixture_id);
        let req = FixtureRequest { fixture_id };
        unary(ctx, &FIXTURE_EVENTS, self.service.fixture_events(req)).await
    }
}

#[cfg(test)]
mod test {
    use async_trait::async_trait;
    use tonic::Status;

    use super::*;
    use crate::error::TransportError;
    use crate::testing::{Reply, Requests};
    use crate::types::{CardEvent, GoalEvent};

    struct FakeEvents {
        reply: Reply<FixtureEventsResponse>,
        requests: Requests<u64>,
    }

    impl FakeEvents {
        fn new(reply: Reply<FixtureEventsResponse>) -> Self {
            Self {
                reply,
                requests: Requests::default(),
            }
        }
    }

    #[async_trait]
    impl EventService for FakeEvents {
        async fn fixture_events(
            &self,
            req: FixtureRequest,
        ) -> Result<FixtureEventsResponse, TransportError> {
            self.requests.record(req.fixture_id);
            self.reply.take()
        }
    }

    #[tokio::test]
    async fn test_fixture_events() {
        let events = FixtureEventsResponse {
            fixture_id: 78102,
            goal_events: vec![GoalEvent {
                id: 1,
                team_id: 1,
                player_id: 77,
                player_assist_id: Some(78),
                minute: 34,
                score: "1-0".into(),
            }],
            card_events: vec![CardEvent {
                id: 2,
                team_id: 10,
                r#type: "yellowcard".into(),
                player_id: 99,
                minute: 60,
            }],
            substitution_events: vec![],
        };
        let client = EventClient::new(FakeEvents::new(Reply::ok(events.clone())));

        assert_eq!(client.fixture_events(78102).await.unwrap(), events);
        assert_eq!(client.service.requests.all(), vec![78102]);
    }

    #[tokio::test]
    async fn test_fixture_events_not_found() {
        let client = EventClient::new(FakeEvents::new(Reply::status(Status::not_found(
            "not found",
        ))));

        let err = client.fixture_events(78102).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "resource with ID '78102' does not exist: not found (code: NotFound)"
        );
    }

    #[tokio::test]
    async fn test_fixture_events_internal() {
        let client = EventClient::new(FakeEvents::new(Reply::status(Status::internal(
            "internal server error",
        ))));

        let err = client.fixture_events(78102).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InternalServer);
    }

    #[tokio::test]
    async fn test_fixture_events_aborted() {
        let client = EventClient::new(FakeEvents::new(Reply::status(Status::aborted(
            "internal server error",
        ))));

        let err = client.fixture_events(78102).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "error connecting to the data service: internal server error (code: Aborted)"
        );
    }
}
