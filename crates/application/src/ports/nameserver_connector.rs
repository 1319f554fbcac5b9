use async_trait::async_trait;
use rootwalk_domain::{DomainError, ServerSet};

/// An established stream connection to one nameserver.
#[async_trait]
pub trait DnsConnection: Send {
    /// Sends one request and reads back exactly one response.
    async fn exchange(&mut self, request: &[u8]) -> Result<Vec<u8>, DomainError>;

    /// Releases the connection. Errors while closing are not reported.
    async fn close(&mut self);

    /// Endpoint this connection was dialed to, for diagnostics.
    fn peer(&self) -> &str;
}

#[async_trait]
pub trait NameserverConnector: Send + Sync {
    /// Returns a connection to one server of `servers`.
    ///
    /// Fails with `InvalidInput` when `servers` is empty.
    async fn connect(&self, servers: &ServerSet) -> Result<Box<dyn DnsConnection>, DomainError>;
}
