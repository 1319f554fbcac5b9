use crate::ports::{MessageCodec, NameserverConnector, RecordResolver};
use async_trait::async_trait;
use rootwalk_domain::{
    DnsMessage, DnsQuery, DomainError, QueryIdSequence, RecordType, ResourceRecord, ServerSet,
    DEFAULT_DNS_PORT,
};
use std::sync::Arc;
use tracing::{debug, warn};

const DEFAULT_MAX_DEPTH: usize = 10;

/// Walks the delegation chain from the root servers down to an answer.
///
/// Every hop races the current server set for a connection, replays the same
/// packed query and either returns the answer section or follows the NS
/// referral in the authority section. Hops `0..=max_depth` are attempted.
pub struct ResolveIterativelyUseCase {
    connector: Arc<dyn NameserverConnector>,
    codec: Arc<dyn MessageCodec>,
    ids: Arc<QueryIdSequence>,
    root_servers: ServerSet,
    max_depth: usize,
    nameserver_port: u16,
}

impl ResolveIterativelyUseCase {
    pub fn new(
        connector: Arc<dyn NameserverConnector>,
        codec: Arc<dyn MessageCodec>,
        ids: Arc<QueryIdSequence>,
    ) -> Self {
        Self {
            connector,
            codec,
            ids,
            root_servers: ServerSet::root(),
            max_depth: DEFAULT_MAX_DEPTH,
            nameserver_port: DEFAULT_DNS_PORT,
        }
    }

    pub fn with_root_servers(mut self, root_servers: ServerSet) -> Self {
        self.root_servers = root_servers;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_nameserver_port(mut self, port: u16) -> Self {
        self.nameserver_port = port;
        self
    }

    pub async fn execute(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        let query = DnsQuery::new(domain, record_type, self.ids.next_id());
        let request = self.codec.pack(&query)?;

        let mut servers = self.root_servers.clone();

        for depth in 0..=self.max_depth {
            debug!(
                domain = %query.domain,
                record_type = %record_type,
                depth,
                candidates = servers.len(),
                "Querying nameservers"
            );

            let response = self.query_hop(&servers, &request).await?;

            if response.has_answers() {
                debug!(
                    domain = %query.domain,
                    depth,
                    answers = response.answers.len(),
                    "Answer received"
                );
                return Ok(response.answers);
            }

            servers = ServerSet::from_referral(response.referral_targets(), self.nameserver_port)
                .inspect_err(|_| {
                    debug!(
                        domain = %query.domain,
                        depth,
                        authority = response.authorities.len(),
                        rcode = response.response_code,
                        "No answer and no referral"
                    );
                })?;

            debug!(domain = %query.domain, depth, next = %servers, "Following referral");
        }

        warn!(
            domain = %query.domain,
            max_depth = self.max_depth,
            "Referral chain too deep"
        );
        Err(DomainError::MaxDepthExceeded {
            max_depth: self.max_depth,
        })
    }

    async fn query_hop(
        &self,
        servers: &ServerSet,
        request: &[u8],
    ) -> Result<DnsMessage, DomainError> {
        let mut connection = self.connector.connect(servers).await?;

        let exchanged = connection.exchange(request).await;
        connection.close().await;

        let reply = exchanged.inspect_err(|e| {
            debug!(server = %connection.peer(), error = %e, "Exchange failed");
        })?;

        self.codec.unpack(&reply)
    }
}

#[async_trait]
impl RecordResolver for ResolveIterativelyUseCase {
    async fn resolve(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        self.execute(domain, record_type).await
    }
}
