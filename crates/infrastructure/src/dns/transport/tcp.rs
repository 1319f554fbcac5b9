//! Length-prefixed DNS message exchange over TCP (RFC 1035 §4.2.2).

use async_trait::async_trait;
use rootwalk_application::ports::DnsConnection;
use rootwalk_domain::DomainError;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

pub const MAX_TCP_MESSAGE_SIZE: usize = 65535;

/// A connected nameserver stream carrying one query per hop.
pub struct TcpConnection {
    stream: TcpStream,
    peer: String,
    io_timeout: Duration,
}

impl TcpConnection {
    pub fn new(stream: TcpStream, peer: impl Into<String>, io_timeout: Duration) -> Self {
        Self {
            stream,
            peer: peer.into(),
            io_timeout,
        }
    }
}

#[async_trait]
impl DnsConnection for TcpConnection {
    async fn exchange(&mut self, request: &[u8]) -> Result<Vec<u8>, DomainError> {
        let response = tokio::time::timeout(self.io_timeout, exchange(&mut self.stream, request))
            .await
            .map_err(|_| {
                DomainError::TransportFailure(format!(
                    "Timeout waiting for TCP response from {}",
                    self.peer
                ))
            })??;

        debug!(
            server = %self.peer,
            message_len = request.len(),
            response_len = response.len(),
            "TCP exchange complete"
        );

        Ok(response)
    }

    async fn close(&mut self) {
        if let Err(e) = self.stream.shutdown().await {
            debug!(server = %self.peer, error = %e, "TCP shutdown failed");
        }
    }

    fn peer(&self) -> &str {
        &self.peer
    }
}

/// Writes one framed request and reads back one framed response.
pub async fn exchange<S>(stream: &mut S, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError>
where
    S: AsyncReadExt + AsyncWriteExt + Unpin,
{
    send_with_length_prefix(stream, message_bytes).await?;
    read_with_length_prefix(stream).await
}

/// Prepends the 2-byte big-endian length.
pub fn encode_frame(message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        DomainError::TransportFailure(format!(
            "Message too large: {} bytes (max {})",
            message_bytes.len(),
            MAX_TCP_MESSAGE_SIZE
        ))
    })?;

    let mut frame = Vec::with_capacity(2 + message_bytes.len());
    frame.extend_from_slice(&length.to_be_bytes());
    frame.extend_from_slice(message_bytes);
    Ok(frame)
}

pub async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), DomainError>
where
    S: AsyncWriteExt + Unpin,
{
    let frame = encode_frame(message_bytes)?;

    stream.write_all(&frame).await.map_err(|e| {
        DomainError::TransportFailure(format!("Failed to write DNS message: {}", e))
    })?;
    stream
        .flush()
        .await
        .map_err(|e| DomainError::TransportFailure(format!("Failed to flush stream: {}", e)))?;

    Ok(())
}

pub async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, DomainError>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await.map_err(|e| {
        DomainError::TransportFailure(format!("Failed to read response length: {}", e))
    })?;

    let response_len = u16::from_be_bytes(len_buf) as usize;

    let mut response = vec![0u8; response_len];
    stream.read_exact(&mut response).await.map_err(|e| {
        DomainError::TransportFailure(format!("Failed to read response body: {}", e))
    })?;

    Ok(response)
}
