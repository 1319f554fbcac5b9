//! Typed views over the answer section returned by the resolver.
//!
//! Each projection keeps only the records of its own kind. An empty result is
//! reported as `NotFound`, never as an empty success.

use rootwalk_domain::{DomainError, MxRecord, ResourceRecord};

/// Dotted-decimal IPv4 addresses.
pub fn project_a(answers: &[ResourceRecord]) -> Result<Vec<String>, DomainError> {
    let addresses = answers
        .iter()
        .filter_map(|record| match record {
            ResourceRecord::A(addr) => Some(addr.to_string()),
            _ => None,
        })
        .collect();
    non_empty(addresses, "A")
}

/// Primary nameserver of each SOA record, without the trailing dot.
pub fn project_soa(answers: &[ResourceRecord]) -> Result<Vec<String>, DomainError> {
    let names = answers
        .iter()
        .filter_map(|record| match record {
            ResourceRecord::Soa { mname, .. } => Some(strip_root(mname)),
            _ => None,
        })
        .collect();
    non_empty(names, "SOA")
}

/// Nameserver hosts, without the trailing dot.
pub fn project_ns(answers: &[ResourceRecord]) -> Result<Vec<String>, DomainError> {
    let names = answers
        .iter()
        .filter_map(|record| match record {
            ResourceRecord::Ns(host) => Some(strip_root(host)),
            _ => None,
        })
        .collect();
    non_empty(names, "NS")
}

/// All character strings of all TXT records, flattened in answer order.
pub fn project_txt(answers: &[ResourceRecord]) -> Result<Vec<String>, DomainError> {
    let segments = answers
        .iter()
        .filter_map(|record| match record {
            ResourceRecord::Txt(segments) => Some(segments.iter().cloned()),
            _ => None,
        })
        .flatten()
        .collect();
    non_empty(segments, "TXT")
}

/// First non-empty canonical name, returned as rendered (trailing dot kept).
pub fn project_cname(answers: &[ResourceRecord]) -> Result<String, DomainError> {
    answers
        .iter()
        .find_map(|record| match record {
            ResourceRecord::Cname(target) if !target.is_empty() => Some(target.clone()),
            _ => None,
        })
        .ok_or_else(|| DomainError::NotFound("no CNAME record in answer".into()))
}

/// Mail exchangers ordered by descending preference, then ascending host.
pub fn project_mx(answers: &[ResourceRecord]) -> Result<Vec<MxRecord>, DomainError> {
    let mut exchangers: Vec<MxRecord> = answers
        .iter()
        .filter_map(|record| match record {
            ResourceRecord::Mx {
                preference,
                exchange,
            } => Some(MxRecord::new(exchange.clone(), *preference)),
            _ => None,
        })
        .collect();

    exchangers.sort_by(|a, b| {
        b.preference
            .cmp(&a.preference)
            .then_with(|| a.host.cmp(&b.host))
    });
    non_empty(exchangers, "MX")
}

fn strip_root(name: &str) -> String {
    name.strip_suffix('.').unwrap_or(name).to_string()
}

fn non_empty<T>(items: Vec<T>, kind: &str) -> Result<Vec<T>, DomainError> {
    if items.is_empty() {
        return Err(DomainError::NotFound(format!("no {} record in answer", kind)));
    }
    Ok(items)
}
