use super::RecordType;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// A single-question query ready to be packed by the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub id: u16,
}

impl DnsQuery {
    /// Builds a query for `domain`, coercing it to absolute (dot-terminated) form.
    pub fn new(domain: &str, record_type: RecordType, id: u16) -> Self {
        Self {
            domain: normalize_domain(domain).into(),
            record_type,
            id,
        }
    }
}

/// Appends the trailing root dot if it is missing.
pub fn normalize_domain(domain: &str) -> String {
    if domain.ends_with('.') {
        domain.to_string()
    } else {
        format!("{}.", domain)
    }
}

/// Monotonic source of transaction identifiers.
///
/// Owned by whoever builds queries and shared through an `Arc`; ids only need
/// to be distinct between in-flight exchanges, not unpredictable.
#[derive(Debug, Default)]
pub struct QueryIdSequence {
    counter: AtomicU32,
}

impl QueryIdSequence {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// The first id handed out is `start + 1`.
    pub fn starting_at(start: u32) -> Self {
        Self {
            counter: AtomicU32::new(start),
        }
    }

    pub fn next_id(&self) -> u16 {
        self.counter.fetch_add(1, Ordering::Relaxed).wrapping_add(1) as u16
    }
}
