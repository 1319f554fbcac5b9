use crate::dns::transport::TcpConnection;
use async_trait::async_trait;
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use rootwalk_application::ports::{DnsConnection, NameserverConnector};
use rootwalk_domain::{DomainError, ServerSet};
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

const DEFAULT_DIAL_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(10);

/// Dials every candidate at once and keeps the first connection to succeed.
///
/// All attempts share one deadline measured from the start of the race. The
/// winner cancels the remaining attempts; connections that still complete
/// afterwards are closed. The race only returns once every attempt has
/// finished.
pub struct RacingConnector {
    dial_timeout: Duration,
    io_timeout: Duration,
}

impl RacingConnector {
    pub fn new(dial_timeout: Duration, io_timeout: Duration) -> Self {
        Self {
            dial_timeout,
            io_timeout,
        }
    }

    /// Returns the winning endpoint and its stream, or the first dial error.
    pub async fn race(&self, servers: &ServerSet) -> Result<(String, TcpStream), DomainError> {
        self.race_with(servers, connect_tcp).await
    }

    /// Races `connect` over every endpoint of `servers`.
    ///
    /// A connection produced after the winner is dropped.
    pub async fn race_with<S, C, F>(
        &self,
        servers: &ServerSet,
        connect: C,
    ) -> Result<(String, S), DomainError>
    where
        S: Send + 'static,
        C: Fn(String) -> F,
        F: Future<Output = io::Result<S>> + Send + 'static,
    {
        if servers.is_empty() {
            return Err(DomainError::InvalidInput(
                "No nameserver candidates to dial".into(),
            ));
        }

        debug!(
            strategy = "race",
            candidates = servers.len(),
            "Racing nameserver connections"
        );

        let deadline = Instant::now() + self.dial_timeout;
        let cancel = CancellationToken::new();
        let mut attempts = FuturesUnordered::new();

        for server in servers.iter() {
            let server = server.to_string();
            let attempt = connect(server.clone());
            let cancel = cancel.clone();
            attempts.push(tokio::spawn(async move {
                let result = dial(&server, attempt, deadline, &cancel).await;
                (server, result)
            }));
        }

        let mut winner: Option<(String, S)> = None;
        let mut first_error: Option<DomainError> = None;

        while let Some(joined) = attempts.next().await {
            match joined {
                Ok((server, Ok(stream))) => {
                    if winner.is_none() {
                        debug!(server = %server, "Connection won race");
                        winner = Some((server, stream));
                        cancel.cancel();
                    } else {
                        debug!(server = %server, "Closing late connection");
                        drop(stream);
                    }
                }
                Ok((server, Err(e))) => {
                    debug!(server = %server, error = %e, "Dial failed");
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Dial task panicked");
                }
            }
        }

        match winner {
            Some(won) => Ok(won),
            None => Err(first_error.unwrap_or_else(|| DomainError::DialFailure {
                server: servers.to_string(),
                reason: "all dial attempts aborted".into(),
            })),
        }
    }
}

impl Default for RacingConnector {
    fn default() -> Self {
        Self::new(DEFAULT_DIAL_TIMEOUT, DEFAULT_IO_TIMEOUT)
    }
}

#[async_trait]
impl NameserverConnector for RacingConnector {
    async fn connect(&self, servers: &ServerSet) -> Result<Box<dyn DnsConnection>, DomainError> {
        let (server, stream) = self.race(servers).await?;
        Ok(Box::new(TcpConnection::new(stream, server, self.io_timeout)))
    }
}

async fn connect_tcp(server: String) -> io::Result<TcpStream> {
    let stream = TcpStream::connect(server.as_str()).await?;
    stream.set_nodelay(true)?;
    Ok(stream)
}

async fn dial<S, F>(
    server: &str,
    attempt: F,
    deadline: Instant,
    cancel: &CancellationToken,
) -> Result<S, DomainError>
where
    F: Future<Output = io::Result<S>>,
{
    let failure = |reason: String| DomainError::DialFailure {
        server: server.to_string(),
        reason,
    };

    tokio::select! {
        _ = cancel.cancelled() => Err(failure("race already won".into())),
        result = tokio::time::timeout_at(deadline, attempt) => {
            result
                .map_err(|_| failure("timed out".into()))?
                .map_err(|e| failure(e.to_string()))
        }
    }
}
