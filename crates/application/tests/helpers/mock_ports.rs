#![allow(dead_code)]

use async_trait::async_trait;
use rootwalk_application::ports::{
    DnsConnection, MessageCodec, NameserverConnector, RecordResolver,
};
use rootwalk_domain::{DnsMessage, DnsQuery, DomainError, RecordType, ResourceRecord, ServerSet};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Stand-in for the network: replies travel as an index into this table.
#[derive(Default)]
pub struct MockWire {
    messages: Mutex<Vec<DnsMessage>>,
}

impl MockWire {
    fn encode(&self, message: DnsMessage) -> Vec<u8> {
        let mut messages = self.messages.lock().unwrap();
        messages.push(message);
        ((messages.len() - 1) as u32).to_be_bytes().to_vec()
    }

    fn decode(&self, bytes: &[u8]) -> Option<DnsMessage> {
        let index: [u8; 4] = bytes.try_into().ok()?;
        let messages = self.messages.lock().unwrap();
        messages.get(u32::from_be_bytes(index) as usize).cloned()
    }
}

pub struct MockMessageCodec {
    wire: Arc<MockWire>,
    packed: Mutex<Vec<DnsQuery>>,
}

impl MockMessageCodec {
    pub fn new(wire: Arc<MockWire>) -> Self {
        Self {
            wire,
            packed: Mutex::new(Vec::new()),
        }
    }

    pub fn packed(&self) -> Vec<DnsQuery> {
        self.packed.lock().unwrap().clone()
    }
}

impl MessageCodec for MockMessageCodec {
    fn pack(&self, query: &DnsQuery) -> Result<Vec<u8>, DomainError> {
        self.packed.lock().unwrap().push(query.clone());
        Ok(format!("{}|{}|{}", query.id, query.domain, query.record_type).into_bytes())
    }

    fn unpack(&self, bytes: &[u8]) -> Result<DnsMessage, DomainError> {
        self.wire
            .decode(bytes)
            .ok_or_else(|| DomainError::CodecFailure("malformed message".into()))
    }
}

#[derive(Clone)]
pub enum Hop {
    Reply(DnsMessage),
    Garbage,
    ExchangeError(DomainError),
    ConnectError(DomainError),
}

pub struct MockNameserverConnector {
    wire: Arc<MockWire>,
    script: Mutex<VecDeque<Hop>>,
    repeat: Mutex<Option<Hop>>,
    dialed: Mutex<Vec<ServerSet>>,
    requests: Arc<Mutex<Vec<Vec<u8>>>>,
    closed: Arc<AtomicUsize>,
}

impl MockNameserverConnector {
    pub fn new(wire: Arc<MockWire>) -> Self {
        Self {
            wire,
            script: Mutex::new(VecDeque::new()),
            repeat: Mutex::new(None),
            dialed: Mutex::new(Vec::new()),
            requests: Arc::new(Mutex::new(Vec::new())),
            closed: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Queues the outcome of the next hop.
    pub fn push(&self, hop: Hop) {
        self.script.lock().unwrap().push_back(hop);
    }

    /// Outcome used once the queued hops are exhausted.
    pub fn repeat(&self, hop: Hop) {
        *self.repeat.lock().unwrap() = Some(hop);
    }

    pub fn dialed(&self) -> Vec<ServerSet> {
        self.dialed.lock().unwrap().clone()
    }

    pub fn requests(&self) -> Vec<Vec<u8>> {
        self.requests.lock().unwrap().clone()
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NameserverConnector for MockNameserverConnector {
    async fn connect(&self, servers: &ServerSet) -> Result<Box<dyn DnsConnection>, DomainError> {
        if servers.is_empty() {
            return Err(DomainError::InvalidInput("empty server set".into()));
        }
        self.dialed.lock().unwrap().push(servers.clone());

        let next = self.script.lock().unwrap().pop_front();
        let hop = next
            .or_else(|| self.repeat.lock().unwrap().clone())
            .ok_or_else(|| DomainError::InvalidInput("mock script exhausted".into()))?;

        let reply = match hop {
            Hop::Reply(message) => Ok(self.wire.encode(message)),
            Hop::Garbage => Ok(vec![0xde, 0xad]),
            Hop::ExchangeError(e) => Err(e),
            Hop::ConnectError(e) => return Err(e),
        };

        Ok(Box::new(MockConnection {
            peer: servers.iter().next().unwrap_or_default().to_string(),
            reply: Some(reply),
            requests: Arc::clone(&self.requests),
            closed: Arc::clone(&self.closed),
        }))
    }
}

struct MockConnection {
    peer: String,
    reply: Option<Result<Vec<u8>, DomainError>>,
    requests: Arc<Mutex<Vec<Vec<u8>>>>,
    closed: Arc<AtomicUsize>,
}

#[async_trait]
impl DnsConnection for MockConnection {
    async fn exchange(&mut self, request: &[u8]) -> Result<Vec<u8>, DomainError> {
        self.requests.lock().unwrap().push(request.to_vec());
        self.reply
            .take()
            .unwrap_or_else(|| Err(DomainError::TransportFailure("already used".into())))
    }

    async fn close(&mut self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }

    fn peer(&self) -> &str {
        &self.peer
    }
}

pub struct MockRecordResolver {
    answers: Result<Vec<ResourceRecord>, DomainError>,
    asked: Mutex<Vec<(String, RecordType)>>,
}

impl MockRecordResolver {
    pub fn answering(answers: Vec<ResourceRecord>) -> Self {
        Self {
            answers: Ok(answers),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            answers: Err(error),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<(String, RecordType)> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordResolver for MockRecordResolver {
    async fn resolve(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        self.asked
            .lock()
            .unwrap()
            .push((domain.to_string(), record_type));
        self.answers.clone()
    }
}

pub fn answer(records: Vec<ResourceRecord>) -> DnsMessage {
    DnsMessage {
        answers: records,
        ..Default::default()
    }
}

pub fn referral(nameservers: &[&str]) -> DnsMessage {
    DnsMessage {
        authorities: nameservers
            .iter()
            .map(|ns| ResourceRecord::Ns(ns.to_string()))
            .collect(),
        ..Default::default()
    }
}
