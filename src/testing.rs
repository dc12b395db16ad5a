//! Scripted stand-ins for the data service.

use std::sync::Mutex;

use futures::StreamExt;
use tonic::Status;

use crate::error::TransportError;
use crate::service::ItemStream;

/// A single canned reply, handed out once.
pub(crate) struct Reply<T>(Mutex<Option<Result<T, TransportError>>>);

impl<T> Reply<T> {
    pub(crate) fn ok(value: T) -> Self {
        Self(Mutex::new(Some(Ok(value))))
    }

    pub(crate) fn status(status: Status) -> Self {
        Self(Mutex::new(Some(Err(status.into()))))
    }

    pub(crate) fn other(message: &str) -> Self {
        Self(Mutex::new(Some(Err(TransportError::other(message.to_string())))))
    }

    pub(crate) fn take(&self) -> Result<T, TransportError> {
        self.0
            .lock()
            .unwrap()
            .take()
            .expect("reply should only be taken once")
    }
}

impl<T: Send + 'static> Reply<ItemStream<T>> {
    pub(crate) fn pulls(pulls: Vec<Result<T, TransportError>>) -> Self {
        Self::ok(futures::stream::iter(pulls).boxed())
    }
}

/// Records the requests a fake received.
pub(crate) struct Requests<R>(Mutex<Vec<R>>);

impl<R> Default for Requests<R> {
    fn default() -> Self {
        Self(Mutex::new(Vec::new()))
    }
}

impl<R: Clone> Requests<R> {
    pub(crate) fn record(&self, req: R) {
        self.0.lock().unwrap().push(req);
    }

    pub(crate) fn all(&self) -> Vec<R> {
        self.0.lock().unwrap().clone()
    }
}
