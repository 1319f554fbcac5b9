//! Rootwalk Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod server_set;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use dns_message::DnsMessage;
pub use dns_query::{normalize_domain, DnsQuery, QueryIdSequence};
pub use dns_record::{MxRecord, RecordType, ResourceRecord};
pub use errors::DomainError;
pub use server_set::{ServerSet, DEFAULT_DNS_PORT, ROOT_SERVERS};
