use std::fmt;

use tonic::{Code, Status};

/// Kind of a domain [`Error`], independent of the transport status code that
/// produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    InternalServer,
    BadGateway,
}

/// Failure of a call to the data service, after classification.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{} does not exist: {}", resource(.id), describe(.source))]
    NotFound {
        id: Option<u64>,
        #[source]
        source: Status,
    },

    #[error("invalid argument provided: {}", describe(.0))]
    InvalidArgument(#[source] Status),

    #[error("internal server error returned from the data service: {}", describe(.0))]
    InternalServer(#[source] Status),

    #[error("error connecting to the data service: {}", describe(.0))]
    BadGateway(#[source] Status),

    /// An error that carried no gRPC status, such as a decode failure. The
    /// message is kept verbatim.
    #[error("{0}")]
    Unclassified(String),
}

fn resource(id: &Option<u64>) -> String {
    match id {
        Some(id) => format!("resource with ID '{id}'"),
        None => "requested resource".into(),
    }
}

fn describe(status: &Status) -> String {
    format!("{} (code: {:?})", status.message(), status.code())
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::InternalServer(_) | Error::Unclassified(_) => ErrorKind::InternalServer,
            Error::BadGateway(_) => ErrorKind::BadGateway,
        }
    }

    /// The status returned by the service, if the failure carried one.
    pub fn status(&self) -> Option<&Status> {
        match self {
            Error::NotFound { source, .. } => Some(source),
            Error::InvalidArgument(s) | Error::InternalServer(s) | Error::BadGateway(s) => Some(s),
            Error::Unclassified(_) => None,
        }
    }

    pub fn code(&self) -> Option<Code> {
        self.status().map(Status::code)
    }

    pub(crate) fn from_kind(kind: ErrorKind, status: Status, id: Option<u64>) -> Self {
        match kind {
            ErrorKind::NotFound => Error::NotFound { id, source: status },
            ErrorKind::InvalidArgument => Error::InvalidArgument(status),
            ErrorKind::InternalServer => Error::InternalServer(status),
            ErrorKind::BadGateway => Error::BadGateway(status),
        }
    }
}

/// A stream that failed before reaching its end. `items` holds everything
/// received before the failure, in arrival order.
#[derive(Debug)]
pub struct Incomplete<T> {
    pub items: Vec<T>,
    pub error: Error,
}

impl<T> Incomplete<T> {
    pub fn new(items: Vec<T>, error: Error) -> Self {
        Self { items, error }
    }

    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    pub fn into_error(self) -> Error {
        self.error
    }
}

impl<T> fmt::Display for Incomplete<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<T: fmt::Debug> std::error::Error for Incomplete<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.error)
    }
}

/// Raw error surfaced by a transport before classification.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error(transparent)]
    Status(#[from] Status),

    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    pub fn other<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        TransportError::Other(err.into())
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({var})")]
pub struct EnvVarError {
    var: String,
    #[source]
    source: std::env::VarError,
}

impl EnvVarError {
    pub fn new(var: &str, source: std::env::VarError) -> Self {
        Self {
            var: var.into(),
            source,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    EnvVar(#[from] EnvVarError),

    #[error("invalid value '{value}' for {var}: {reason}")]
    InvalidValue {
        var: String,
        value: String,
        reason: String,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum ConnectError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid endpoint '{endpoint}': {source}")]
    Endpoint {
        endpoint: String,
        #[source]
        source: tonic::transport::Error,
    },

    #[error("failed to connect to the data service: {0}")]
    Transport(#[from] tonic::transport::Error),
}
