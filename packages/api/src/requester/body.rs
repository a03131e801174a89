//! Terminal operations: writing the body and issuing the request

use std::sync::Arc;

use bytes::Bytes;
use eddy_client::error::{CallSite, Result};
use eddy_client::http::prepare_request_url;
use eddy_client::ClientRequest;
use serde::Serialize;

use super::Requester;
use crate::binding::Attribute;
use crate::dispatch::{Completion, Dispatcher, InFlight, ResponseDispatcher};
use crate::router::RoutingTree;

impl Requester {
    /// Serialize `entity` as the request body and issue the request.
    ///
    /// The codec is chosen by the `Content-Type` set on this requester; without one the
    /// worker's first codec is used and its media type is sent. The request is submitted
    /// before this returns; route its response with the returned dispatcher.
    #[track_caller]
    pub fn body<T: Serialize + ?Sized>(mut self, entity: &T) -> ResponseDispatcher {
        let body = match self.worker.write(&mut self.headers, entity) {
            Ok(body) => Some(body),
            Err(error) => {
                self.fail(error);
                None
            }
        };
        self.issue(body)
    }

    /// Issue the request without a body.
    #[track_caller]
    pub fn send(self) -> ResponseDispatcher {
        self.issue(None)
    }

    #[track_caller]
    fn issue(self, body: Option<Bytes>) -> ResponseDispatcher {
        let call_site = Arc::new(if self.capture_backtrace {
            CallSite::capture()
        } else {
            CallSite::location_only()
        });

        let Requester {
            transport,
            worker,
            runtime,
            method,
            url,
            query,
            headers,
            error,
            debug_enabled,
            ..
        } = self;

        let request = match error {
            Some(error) => Err(error),
            None => url.map(|url| {
                ClientRequest::new(method, prepare_request_url(url, &query), headers, body)
            }),
        };

        let in_flight = match request {
            Ok(request) => {
                if debug_enabled {
                    log::debug!("eddy Requester: {} {}", request.method(), request.url());
                    if let Some(body) = request.body() {
                        log::debug!("eddy Requester: Request body size: {} bytes", body.len());
                    }
                    log::debug!("eddy Requester: Issued at {}", call_site.location());
                }
                InFlight::Submitted(runtime.spawn(transport.submit(request)))
            }
            Err(error) => {
                if debug_enabled {
                    log::debug!("eddy Requester: not issued: {error}");
                }
                InFlight::Failed(error)
            }
        };

        ResponseDispatcher::new(in_flight, worker, call_site, runtime)
    }

    /// Target URL with the accumulated query merged, as it would be sent.
    ///
    /// # Errors
    ///
    /// Returns the error the request would fail with if it were issued now.
    pub fn request_url(&self) -> Result<url::Url> {
        match (&self.error, &self.url) {
            (Some(_), _) | (None, Err(_)) => Err(eddy_client::error::builder(
                "request is invalid and would not be issued",
            )),
            (None, Ok(url)) => Ok(prepare_request_url(url.clone(), &self.query)),
        }
    }
}

impl Dispatcher for Requester {
    fn call<A: Attribute>(self, tree: RoutingTree<A>) -> Completion {
        self.issue(None).call(tree)
    }
}
