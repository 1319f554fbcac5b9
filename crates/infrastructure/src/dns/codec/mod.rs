pub mod message_builder;
pub mod record_type_map;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use record_type_map::RecordTypeMapper;
pub use response_parser::ResponseParser;

use rootwalk_application::ports::MessageCodec;
use rootwalk_domain::{DnsMessage, DnsQuery, DomainError};

/// [`MessageCodec`] backed by `hickory-proto`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HickoryMessageCodec;

impl HickoryMessageCodec {
    pub fn new() -> Self {
        Self
    }
}

impl MessageCodec for HickoryMessageCodec {
    fn pack(&self, query: &DnsQuery) -> Result<Vec<u8>, DomainError> {
        MessageBuilder::build_query(query)
    }

    fn unpack(&self, bytes: &[u8]) -> Result<DnsMessage, DomainError> {
        ResponseParser::parse(bytes)
    }
}
