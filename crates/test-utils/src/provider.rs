//! Mocked providers, answering RPC requests from a queue of canned
//! responses.
use alloy::{
    eips::BlockId,
    providers::{Provider, ProviderBuilder},
    rpc::{
        client::RpcClient,
        json_rpc::{RequestPacket, ResponsePacket, SerializedRequest},
        types::TransactionRequest,
    },
    transports::{
        mock::{Asserter, MockTransport},
        TransportError, TransportFut,
    },
};
use std::{
    sync::{Arc, Mutex},
    task::{Context, Poll},
};
use tower::Service;

/// Create a provider backed by a mocked transport.
///
/// Responses are pushed onto the returned [`Asserter`] and consumed in
/// order, one per RPC request. A request made while the queue is empty
/// fails.
pub fn mock_provider() -> (impl Provider + Clone, Asserter) {
    let asserter = Asserter::new();
    let provider =
        ProviderBuilder::new().disable_recommended_fillers().connect_mocked_client(asserter.clone());
    (provider, asserter)
}

/// Create a mocked provider like [`mock_provider`], which also records every
/// request it sends.
pub fn recording_provider() -> (impl Provider + Clone, Asserter, RequestLog) {
    let asserter = Asserter::new();
    let log = RequestLog::default();
    let transport =
        RecordingTransport { inner: MockTransport::new(asserter.clone()), log: log.clone() };
    let provider = ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_client(RpcClient::new(transport, true));
    (provider, asserter, log)
}

/// Requests sent through a [`recording_provider`], in order.
#[derive(Debug, Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<SerializedRequest>>>);

impl RequestLog {
    fn record(&self, packet: &RequestPacket) {
        let mut requests = self.0.lock().unwrap();
        match packet {
            RequestPacket::Single(req) => requests.push(req.clone()),
            RequestPacket::Batch(reqs) => requests.extend(reqs.iter().cloned()),
        }
    }

    /// All recorded requests.
    pub fn requests(&self) -> Vec<SerializedRequest> {
        self.0.lock().unwrap().clone()
    }

    /// The transaction and block of every recorded `eth_call`.
    pub fn eth_calls(&self) -> Vec<(TransactionRequest, Option<BlockId>)> {
        self.requests()
            .iter()
            .filter(|req| req.method() == "eth_call")
            .map(|req| {
                let params: Vec<serde_json::Value> =
                    serde_json::from_str(req.params().unwrap().get()).unwrap();
                let tx = serde_json::from_value(params[0].clone()).unwrap();
                let block = params.get(1).map(|b| serde_json::from_value(b.clone()).unwrap());
                (tx, block)
            })
            .collect()
    }
}

/// A [`MockTransport`] that logs each request before answering it.
#[derive(Clone)]
struct RecordingTransport {
    inner: MockTransport,
    log: RequestLog,
}

impl Service<RequestPacket> for RecordingTransport {
    type Response = ResponsePacket;
    type Error = TransportError;
    type Future = TransportFut<'static>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: RequestPacket) -> Self::Future {
        self.log.record(&req);
        Box::pin(self.inner.call(req))
    }
}
