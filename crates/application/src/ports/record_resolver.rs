use async_trait::async_trait;
use rootwalk_domain::{DomainError, RecordType, ResourceRecord};

#[async_trait]
pub trait RecordResolver: Send + Sync {
    /// Answer records for `domain`; never an empty list on success.
    async fn resolve(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<ResourceRecord>, DomainError>;
}
