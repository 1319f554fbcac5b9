use super::ResourceRecord;

/// Logical shape of a decoded DNS response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsMessage {
    pub id: u16,
    pub response_code: u16,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
}

impl DnsMessage {
    pub fn has_answers(&self) -> bool {
        !self.answers.is_empty()
    }

    /// NS targets from the authority section, in message order.
    pub fn referral_targets(&self) -> impl Iterator<Item = &str> {
        self.authorities.iter().filter_map(ResourceRecord::ns_target)
    }
}
