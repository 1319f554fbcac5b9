mod message_codec;
mod nameserver_connector;
mod record_resolver;

pub use message_codec::MessageCodec;
pub use nameserver_connector::{DnsConnection, NameserverConnector};
pub use record_resolver::RecordResolver;

// Re-export for convenience
pub use rootwalk_domain::{DnsMessage, DnsQuery, ServerSet};
