use super::broker::RacingConnector;
use super::codec::HickoryMessageCodec;
use rootwalk_application::use_cases::{LookupRecordsUseCase, ResolveIterativelyUseCase};
use rootwalk_domain::{DomainError, MxRecord, QueryIdSequence, ResolverConfig};
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};
use tracing::info;

/// Iterative resolver wired onto TCP racing and the hickory codec.
pub struct IterativeLookup {
    records: LookupRecordsUseCase,
}

impl IterativeLookup {
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::with_ids(config, Arc::new(QueryIdSequence::new()))
    }

    /// Builds a resolver drawing query ids from an existing sequence.
    pub fn with_ids(config: &ResolverConfig, ids: Arc<QueryIdSequence>) -> Self {
        let connector = Arc::new(RacingConnector::new(
            config.dial_timeout(),
            config.io_timeout(),
        ));
        let codec = Arc::new(HickoryMessageCodec::new());

        let resolver = ResolveIterativelyUseCase::new(connector, codec, ids)
            .with_root_servers(config.root_server_set())
            .with_max_depth(config.max_depth)
            .with_nameserver_port(config.nameserver_port);

        info!(
            root_servers = config.root_servers.len(),
            max_depth = config.max_depth,
            "Iterative resolver ready"
        );

        Self {
            records: LookupRecordsUseCase::new(Arc::new(resolver)),
        }
    }

    pub async fn lookup_a(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        self.records.lookup_a(domain).await
    }

    pub async fn lookup_soa(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        self.records.lookup_soa(domain).await
    }

    pub async fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        self.records.lookup_ns(domain).await
    }

    pub async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        self.records.lookup_txt(domain).await
    }

    pub async fn lookup_cname(&self, domain: &str) -> Result<String, DomainError> {
        self.records.lookup_cname(domain).await
    }

    pub async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, DomainError> {
        self.records.lookup_mx(domain).await
    }
}

/// Synchronous facade that drives [`IterativeLookup`] on its own
/// current-thread runtime. Must not be used from inside another runtime.
pub struct BlockingLookup {
    runtime: Runtime,
    inner: IterativeLookup,
}

impl BlockingLookup {
    pub fn from_config(config: &ResolverConfig) -> Result<Self, DomainError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                DomainError::InvalidInput(format!("Failed to start resolver runtime: {}", e))
            })?;

        Ok(Self {
            runtime,
            inner: IterativeLookup::from_config(config),
        })
    }

    pub fn lookup_a(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        self.runtime.block_on(self.inner.lookup_a(domain))
    }

    pub fn lookup_soa(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        self.runtime.block_on(self.inner.lookup_soa(domain))
    }

    pub fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        self.runtime.block_on(self.inner.lookup_ns(domain))
    }

    pub fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        self.runtime.block_on(self.inner.lookup_txt(domain))
    }

    pub fn lookup_cname(&self, domain: &str) -> Result<String, DomainError> {
        self.runtime.block_on(self.inner.lookup_cname(domain))
    }

    pub fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, DomainError> {
        self.runtime.block_on(self.inner.lookup_mx(domain))
    }
}
