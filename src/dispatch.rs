use std::future::Future;

use tracing::{debug, trace};

use crate::classify::{classify, CallContext, StatusInspector, StatusMapping};
use crate::error::Error;

/// Issues a remote call and hands back its raw outcome.
pub async fn dispatch<T, E, F>(ctx: &CallContext, call: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: StatusInspector,
{
    trace!(operation = ctx.operation, resource_id = ?ctx.resource_id, "dispatching rpc");
    let outcome = call.await;
    if let Err(ref e) = outcome {
        debug!(operation = ctx.operation, error = %e, "rpc failed");
    }
    outcome
}

/// Issues a unary call, classifying any failure against `mapping`.
pub async fn unary<T, E, F>(ctx: CallContext, mapping: &StatusMapping, call: F) -> Result<T, Error>
where
    F: Future<Output = Result<T, E>>,
    E: StatusInspector,
{
    dispatch(&ctx, call)
        .await
        .map_err(|e| classify(e, mapping, &ctx))
}
