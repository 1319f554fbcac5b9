use super::projection;
use crate::ports::RecordResolver;
use rootwalk_domain::{DomainError, MxRecord, RecordType};
use std::sync::Arc;

/// Record-kind specific lookups on top of a [`RecordResolver`].
///
/// Resolution errors pass through unchanged; an answer with nothing of the
/// requested kind is `NotFound`.
pub struct LookupRecordsUseCase {
    resolver: Arc<dyn RecordResolver>,
}

impl LookupRecordsUseCase {
    pub fn new(resolver: Arc<dyn RecordResolver>) -> Self {
        Self { resolver }
    }

    pub async fn lookup_a(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        let answers = self.resolver.resolve(domain, RecordType::A).await?;
        projection::project_a(&answers)
    }

    pub async fn lookup_soa(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        let answers = self.resolver.resolve(domain, RecordType::SOA).await?;
        projection::project_soa(&answers)
    }

    pub async fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        let answers = self.resolver.resolve(domain, RecordType::NS).await?;
        projection::project_ns(&answers)
    }

    pub async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        let answers = self.resolver.resolve(domain, RecordType::TXT).await?;
        projection::project_txt(&answers)
    }

    pub async fn lookup_cname(&self, domain: &str) -> Result<String, DomainError> {
        let answers = self.resolver.resolve(domain, RecordType::CNAME).await?;
        projection::project_cname(&answers)
    }

    /// See [`MxRecord`] for the ordering of the result.
    pub async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, DomainError> {
        let answers = self.resolver.resolve(domain, RecordType::MX).await?;
        projection::project_mx(&answers)
    }
}
