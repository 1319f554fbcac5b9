#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// What the mock nameserver sends back for one connection.
#[derive(Clone, Debug)]
pub enum MockReply {
    Answer(Vec<Ipv4Addr>),
    Referral(Vec<&'static str>),
    Empty,
}

/// Length-prefixed TCP nameserver on 127.0.0.1 with a scripted reply per
/// connection. The last reply repeats once the script runs out.
pub struct MockDnsServer {
    addr: SocketAddr,
    connections: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(script: Vec<MockReply>) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let connections = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&connections);
        let script = Arc::new(script);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    accepted = listener.accept() => {
                        let Ok((mut stream, _)) = accepted else { continue };
                        let index = counter.fetch_add(1, Ordering::SeqCst);
                        let reply = script
                            .get(index)
                            .or_else(|| script.last())
                            .cloned()
                            .unwrap_or(MockReply::Empty);

                        tokio::spawn(async move {
                            let mut len_buf = [0u8; 2];
                            if stream.read_exact(&mut len_buf).await.is_err() {
                                return;
                            }
                            let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                            if stream.read_exact(&mut query).await.is_err() {
                                return;
                            }

                            let response = build_response(&query, &reply);
                            let mut frame = (response.len() as u16).to_be_bytes().to_vec();
                            frame.extend_from_slice(&response);
                            let _ = stream.write_all(&frame).await;

                            let mut rest = Vec::new();
                            let _ = stream.read_to_end(&mut rest).await;
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            connections,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Echoes the header id and question of `query` and appends the scripted records.
pub fn build_response(query: &[u8], reply: &MockReply) -> Vec<u8> {
    if query.len() < 12 {
        return vec![];
    }

    let (answers, authorities): (Vec<Vec<u8>>, Vec<Vec<u8>>) = match reply {
        MockReply::Answer(addrs) => (addrs.iter().map(|ip| a_record(*ip)).collect(), vec![]),
        MockReply::Referral(names) => (vec![], names.iter().map(|ns| ns_record(ns)).collect()),
        MockReply::Empty => (vec![], vec![]),
    };

    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&query[0..2]);
    response.push(0x80);
    response.push(0x00);
    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&(authorities.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&query[12..]);

    for record in answers.iter().chain(authorities.iter()) {
        response.extend_from_slice(record);
    }

    response
}

fn a_record(ip: Ipv4Addr) -> Vec<u8> {
    let mut record = vec![
        0xc0, 0x0c,
        0x00, 0x01,
        0x00, 0x01,
        0x00, 0x00, 0x00, 0x3c,
        0x00, 0x04,
    ];
    record.extend_from_slice(&ip.octets());
    record
}

fn ns_record(target: &str) -> Vec<u8> {
    let rdata = encode_name(target);
    let mut record = vec![
        0x00,
        0x00, 0x02,
        0x00, 0x01,
        0x00, 0x02, 0xa3, 0x00,
    ];
    record.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    record.extend_from_slice(&rdata);
    record
}

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut encoded = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        encoded.push(label.len() as u8);
        encoded.extend_from_slice(label.as_bytes());
    }
    encoded.push(0);
    encoded
}

/// An address nothing listens on.
pub async fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr.to_string()
}
