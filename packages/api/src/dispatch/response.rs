//! Dispatch of an in-flight request's response

use std::fmt;
use std::sync::Arc;

use eddy_client::error::{self, CallSite, Error, Result};
use eddy_client::{ClientResponse, MessageWorker};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::Dispatcher;
use super::completion::Completion;
use crate::binding::Attribute;
use crate::capture::Capture;
use crate::router::RoutingTree;

/// A request after issuance.
pub(crate) enum InFlight {
    /// Submitted to the transport, running on the runtime.
    Submitted(JoinHandle<Result<ClientResponse>>),
    /// Never submitted because building it failed.
    Failed(Error),
}

/// The [`Dispatcher`] for a request that has been issued.
///
/// Once the call settles, the tree runs against the response on the runtime and the
/// [`Completion`] receives the capture or the failure. Every failure carries the
/// [`CallSite`] of the code that issued the request.
pub struct ResponseDispatcher {
    in_flight: InFlight,
    worker: Arc<MessageWorker>,
    call_site: Arc<CallSite>,
    runtime: Handle,
}

impl ResponseDispatcher {
    pub(crate) fn new(
        in_flight: InFlight,
        worker: Arc<MessageWorker>,
        call_site: Arc<CallSite>,
        runtime: Handle,
    ) -> Self {
        Self {
            in_flight,
            worker,
            call_site,
            runtime,
        }
    }

    /// Where the request was issued.
    #[must_use]
    pub fn call_site(&self) -> &CallSite {
        &self.call_site
    }
}

impl Dispatcher for ResponseDispatcher {
    fn call<A: Attribute>(self, tree: RoutingTree<A>) -> Completion {
        let (completer, completion) = Completion::channel();
        let Self {
            in_flight,
            worker,
            call_site,
            runtime,
        } = self;

        runtime.spawn(async move {
            let outcome = match in_flight {
                InFlight::Failed(error) => Err(error),
                InFlight::Submitted(call) => match call.await {
                    Ok(Ok(response)) => settle(&tree, response, &worker),
                    Ok(Err(error)) => Err(error),
                    Err(join) => Err(error::canceled(join)),
                },
            };

            if let Err(ref error) = outcome {
                tracing::debug!(%error, issued_at = %call_site.location(), "dispatch failed");
            }

            let outcome = outcome.map_err(|error| error.with_call_site(call_site));
            if completer.send(outcome).is_err() {
                tracing::warn!("completion dropped before its response was dispatched");
            }
        });

        completion
    }
}

fn settle<A: Attribute>(
    tree: &RoutingTree<A>,
    response: ClientResponse,
    worker: &MessageWorker,
) -> Result<Capture> {
    tracing::debug!(status = response.status().as_u16(), "dispatching response");

    tree.route(&response, worker)
        .map_err(|error| error.into_no_route(response))
}

impl fmt::Debug for ResponseDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.in_flight {
            InFlight::Submitted(_) => "submitted",
            InFlight::Failed(_) => "failed",
        };
        f.debug_struct("ResponseDispatcher")
            .field("state", &state)
            .field("issued_at", &self.call_site.location())
            .finish()
    }
}
