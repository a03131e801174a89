//! Scripted in-memory transport shared by the pipeline tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bytes::Bytes;
use eddy::prelude::*;
use eddy::{ClientRequest, Transport};
use futures::future::BoxFuture;
use http::header::{CONTENT_TYPE, HeaderValue};

/// What the transport does with the next submitted request.
pub enum Reply {
    Respond(ClientResponse),
    Fail(Error),
    After(Duration, ClientResponse),
}

#[derive(Default)]
struct Script {
    replies: VecDeque<Reply>,
    requests: Vec<ClientRequest>,
}

/// Replays scripted replies in order and records every request it receives.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
    settled: Arc<AtomicUsize>,
}

impl ScriptedTransport {
    pub fn replying(replies: impl IntoIterator<Item = Reply>) -> Self {
        let transport = Self::default();
        transport
            .script
            .lock()
            .expect("script lock")
            .replies
            .extend(replies);
        transport
    }

    pub fn requests(&self) -> Vec<ClientRequest> {
        self.script.lock().expect("script lock").requests.clone()
    }

    /// Number of submitted calls that have run to completion.
    pub fn settled(&self) -> usize {
        self.settled.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for ScriptedTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ScriptedTransport")
    }
}

impl Transport for ScriptedTransport {
    fn submit(&self, request: ClientRequest) -> BoxFuture<'static, Result<ClientResponse>> {
        let reply = {
            let mut script = self.script.lock().expect("script lock");
            script.requests.push(request);
            script.replies.pop_front()
        };
        let settled = Arc::clone(&self.settled);

        Box::pin(async move {
            let outcome = match reply {
                Some(Reply::Respond(response)) => Ok(response),
                Some(Reply::Fail(error)) => Err(error),
                Some(Reply::After(delay, response)) => {
                    tokio::time::sleep(delay).await;
                    Ok(response)
                }
                None => Err(eddy_client::error::transport("no reply scripted")),
            };
            settled.fetch_add(1, Ordering::SeqCst);
            outcome
        })
    }
}

pub fn response(status: u16) -> ClientResponse {
    ClientResponse::new(
        StatusCode::from_u16(status).expect("valid status"),
        HeaderMap::new(),
        Bytes::new(),
    )
}

pub fn json(status: u16, body: &'static str) -> ClientResponse {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    ClientResponse::new(
        StatusCode::from_u16(status).expect("valid status"),
        headers,
        Bytes::from_static(body.as_bytes()),
    )
}

/// A client on the current runtime talking to `transport`.
pub fn rest(transport: &ScriptedTransport) -> Rest {
    env_logger::try_init().ok();
    Rest::builder()
        .base_url("http://api.test/v1/")
        .transport(transport.clone())
        .build()
        .expect("valid client")
}
