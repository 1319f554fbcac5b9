use rootwalk_domain::{DnsMessage, DnsQuery, DomainError};

/// Wire-format encoding of queries and decoding of responses.
pub trait MessageCodec: Send + Sync {
    fn pack(&self, query: &DnsQuery) -> Result<Vec<u8>, DomainError>;

    fn unpack(&self, bytes: &[u8]) -> Result<DnsMessage, DomainError>;
}
