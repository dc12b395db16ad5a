use tonic::Code;

use crate::classify::{CallContext, StatusMapping};
use crate::collect::drain;
use crate::dispatch::unary;
use crate::error::{Error, ErrorKind, Incomplete};
use crate::service::FixtureService;
use crate::types::{Fixture, FixtureRequest, FixtureSearchRequest};

const BY_ID: StatusMapping = StatusMapping::new(&[
    (Code::NotFound, ErrorKind::NotFound),
    (Code::Internal, ErrorKind::InternalServer),
]);
const SEARCH: StatusMapping = StatusMapping::new(&[
    (Code::InvalidArgument, ErrorKind::InvalidArgument),
    (Code::Internal, ErrorKind::InternalServer),
]);

#[derive(Clone, Debug)]
pub struct FixtureClient<S> {
    service: S,
}

impl<S: FixtureService> FixtureClient<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub async fn by_id(&self, fixture_id: u64) -> Result<Fixture, Error> {
        let ctx = CallContext::new("fixture.by_id").with_resource(fixture_id);
        let req = FixtureRequest { fixture_id };
        unary(ctx, &BY_ID, self.service.fixture_by_id(req)).await
    }

    /// Fixtures matching the filters in `req`, in the order the service
    /// returns them.
    pub async fn search(
        &self,
        req: FixtureSearchRequest,
    ) -> Result<Vec<Fixture>, Incomplete<Fixture>> {
        let ctx = CallContext::new("fixture.search");
        drain(ctx, &SEARCH, self.service.search(req)).await
    }
}
