//! Translation of raw transport failures into domain [`Error`]s.

use std::fmt;

use tonic::{Code, Status};
use tracing::debug;

use crate::error::{Error, ErrorKind, TransportError};

/// Ordered table from gRPC status code to [`ErrorKind`]. The first matching
/// entry wins; codes not listed map to the fallback kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusMapping {
    entries: &'static [(Code, ErrorKind)],
    fallback: ErrorKind,
}

impl StatusMapping {
    pub const fn new(entries: &'static [(Code, ErrorKind)]) -> Self {
        Self {
            entries,
            fallback: ErrorKind::BadGateway,
        }
    }

    pub const fn with_fallback(self, fallback: ErrorKind) -> Self {
        Self {
            entries: self.entries,
            fallback,
        }
    }

    pub fn kind_for(&self, code: Code) -> ErrorKind {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, kind)| *kind)
            .unwrap_or(self.fallback)
    }
}

/// Auxiliary data about the call being made, used for logging and for
/// building errors that name the requested resource.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallContext {
    pub operation: &'static str,
    pub resource_id: Option<u64>,
}

impl CallContext {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            resource_id: None,
        }
    }

    pub fn with_resource(mut self, id: u64) -> Self {
        self.resource_id = Some(id);
        self
    }
}

/// Extracts the gRPC status from a raw error, handing the error back
/// unchanged when it carries none.
pub trait StatusInspector: fmt::Display + Sized {
    fn into_status(self) -> Result<Status, Self>;
}

impl StatusInspector for Status {
    fn into_status(self) -> Result<Status, Self> {
        Ok(self)
    }
}

impl StatusInspector for TransportError {
    fn into_status(self) -> Result<Status, Self> {
        match self {
            TransportError::Status(status) => Ok(status),
            other => Err(other),
        }
    }
}

impl StatusInspector for anyhow::Error {
    fn into_status(self) -> Result<Status, Self> {
        self.downcast::<Status>()
    }
}

pub fn classify<E>(raw: E, mapping: &StatusMapping, ctx: &CallContext) -> Error
where
    E: StatusInspector,
{
    match raw.into_status() {
        Ok(status) => {
            let kind = mapping.kind_for(status.code());
            debug!(
                operation = ctx.operation,
                code = ?status.code(),
                ?kind,
                "classified rpc failure"
            );
            Error::from_kind(kind, status, ctx.resource_id)
        }
        Err(raw) => {
            debug!(operation = ctx.operation, error = %raw, "rpc failure without status");
            Error::Unclassified(raw.to_string())
        }
    }
}
