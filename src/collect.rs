//! Draining of server-streaming responses.
//!
//! Both [`drain`] and [`drain_channel`] run the same [`Collector`], which
//! walks a call through [`DrainState`]:
//!
//! ```text
//! NotStarted -> AwaitingConnection -> Streaming -> Completed
//!                       |                 |
//!                       +---> Failed <----+
//! ```
//!
//! A connection failure is terminal; nothing is pulled after it.

use std::future::Future;

use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use crate::classify::{classify, CallContext, StatusInspector, StatusMapping};
use crate::error::{Error, Incomplete};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrainState {
    NotStarted,
    AwaitingConnection,
    Streaming,
    Completed,
    Failed,
}

impl DrainState {
    pub fn is_terminal(self) -> bool {
        matches!(self, DrainState::Completed | DrainState::Failed)
    }

    fn can_become(self, next: DrainState) -> bool {
        use DrainState::*;
        matches!(
            (self, next),
            (NotStarted, AwaitingConnection)
                | (AwaitingConnection, Streaming)
                | (AwaitingConnection, Failed)
                | (Streaming, Completed)
                | (Streaming, Failed)
        )
    }
}

/// Owns one stream handle for the lifetime of a call and pulls from it until
/// it ends or fails.
pub struct Collector<S> {
    ctx: CallContext,
    mapping: StatusMapping,
    stream: Option<S>,
    state: DrainState,
    pulled: usize,
}

impl<S, T, E> Collector<S>
where
    S: Stream<Item = Result<T, E>> + Unpin,
    E: StatusInspector,
{
    pub fn new(ctx: CallContext, mapping: StatusMapping) -> Self {
        Self {
            ctx,
            mapping,
            stream: None,
            state: DrainState::NotStarted,
            pulled: 0,
        }
    }

    pub fn state(&self) -> DrainState {
        self.state
    }

    /// Waits for the call to be established. A collector opens once; later
    /// calls fail without touching its state or its stream.
    pub async fn open<F>(&mut self, open: F) -> Result<(), Error>
    where
        F: Future<Output = Result<S, E>>,
    {
        if self.state != DrainState::NotStarted {
            return Err(Error::Unclassified(format!(
                "{} was already opened (state: {:?})",
                self.ctx.operation, self.state
            )));
        }
        self.advance(DrainState::AwaitingConnection);

        match open.await {
            Ok(stream) => {
                self.stream = Some(stream);
                self.advance(DrainState::Streaming);
                Ok(())
            }
            Err(e) => {
                self.advance(DrainState::Failed);
                Err(classify(e, &self.mapping, &self.ctx))
            }
        }
    }

    /// Pulls the next item. Returns `None` at end of stream and on every
    /// call after the collector reached a terminal state.
    pub async fn pull(&mut self) -> Option<Result<T, Error>> {
        if self.state != DrainState::Streaming {
            return None;
        }
        let next = self.stream.as_mut()?.next().await;

        match next {
            Some(Ok(item)) => {
                self.pulled += 1;
                Some(Ok(item))
            }
            Some(Err(e)) => {
                self.stream = None;
                self.advance(DrainState::Failed);
                Some(Err(classify(e, &self.mapping, &self.ctx)))
            }
            None => {
                self.stream = None;
                self.advance(DrainState::Completed);
                None
            }
        }
    }

    fn advance(&mut self, next: DrainState) {
        debug_assert!(
            self.state.can_become(next),
            "illegal drain transition {:?} -> {:?}",
            self.state,
            next
        );
        trace!(
            operation = self.ctx.operation,
            from = ?self.state,
            to = ?next,
            pulled = self.pulled,
            "drain transition"
        );
        self.state = next;
    }
}

/// Opens a stream and collects every item it yields.
///
/// On failure the items received so far are returned inside the error.
pub async fn drain<S, T, E, F>(
    ctx: CallContext,
    mapping: &StatusMapping,
    open: F,
) -> Result<Vec<T>, Incomplete<T>>
where
    F: Future<Output = Result<S, E>>,
    S: Stream<Item = Result<T, E>> + Unpin,
    E: StatusInspector,
{
    let mut collector: Collector<S> = Collector::new(ctx, *mapping);
    if let Err(error) = collector.open(open).await {
        return Err(Incomplete::new(Vec::new(), error));
    }

    let mut items = Vec::new();
    while let Some(next) = collector.pull().await {
        match next {
            Ok(item) => items.push(item),
            Err(error) => return Err(Incomplete::new(items, error)),
        }
    }

    debug!(operation = ctx.operation, count = items.len(), "stream drained");
    Ok(items)
}

/// Opens a stream on a background task and forwards its items, in order,
/// over the returned channel. A failure is sent as the final message; the
/// channel closes once the task ends.
///
/// Must be called from within a tokio runtime. The task stops pulling as soon
/// as the receiver is dropped.
pub fn drain_channel<S, T, E, F>(
    ctx: CallContext,
    mapping: &StatusMapping,
    open: F,
    buffer: usize,
) -> mpsc::Receiver<Result<T, Error>>
where
    F: Future<Output = Result<S, E>> + Send + 'static,
    S: Stream<Item = Result<T, E>> + Unpin + Send + 'static,
    T: Send + 'static,
    E: StatusInspector + Send + 'static,
{
    let (tx, rx) = mpsc::channel(buffer.max(1));
    let mapping = *mapping;

    tokio::spawn(async move {
        let mut collector: Collector<S> = Collector::new(ctx, mapping);
        if let Err(error) = collector.open(open).await {
            let _ = tx.send(Err(error)).await;
            return;
        }

        while let Some(next) = collector.pull().await {
            if tx.send(next).await.is_err() {
                warn!(operation = ctx.operation, "receiver dropped, abandoning stream");
                return;
            }
        }
        debug!(operation = ctx.operation, state = ?collector.state(), "stream forwarded");
    });

    rx
}
