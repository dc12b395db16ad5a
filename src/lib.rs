//! Client for the football data gRPC service.
//!
//! Every call goes through the same small core: [`dispatch`] issues it,
//! [`classify`](classify::classify) turns a failed call's status into an
//! [`Error`], and [`collect`] drains server-streaming responses. The
//! [`resources`] clients are thin wrappers that pick the request and the
//! status mapping for each operation.

pub mod classify;
pub mod collect;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod grpc;
pub mod resources;
pub mod service;
pub mod types;

#[cfg(test)]
mod testing;

pub use classify::{classify, CallContext, StatusInspector, StatusMapping};
pub use collect::{drain, drain_channel, Collector, DrainState};
pub use config::Config;
pub use dispatch::{dispatch, unary};
pub use error::{ConfigError, ConnectError, Error, ErrorKind, Incomplete, TransportError};
pub use grpc::{DataClients, GrpcTransport};
