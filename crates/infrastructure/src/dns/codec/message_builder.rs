//! DNS Message Builder
//!
//! Encodes a [`DnsQuery`] as a wire-format message using `hickory-proto`.
//! Queries are iterative: the RD flag stays clear and no EDNS record is added.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use rootwalk_domain::{DnsQuery, DomainError};
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a single-question query and serialize it to wire format bytes
    pub fn build_query(query: &DnsQuery) -> Result<Vec<u8>, DomainError> {
        let name = Name::from_str(&query.domain).map_err(|e| {
            DomainError::CodecFailure(format!("Invalid domain '{}': {}", query.domain, e))
        })?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordTypeMapper::to_hickory(&query.record_type));
        question.set_query_class(DNSClass::IN);

        let mut message = Message::new(query.id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(false);
        message.add_query(question);

        Self::serialize_message(&message)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::CodecFailure(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
