use std::fmt;
use std::net::Ipv4Addr;

/// A resource record classified once at the codec boundary.
///
/// Names are kept in absolute form, trailing dot included, the way the codec
/// renders them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRecord {
    A(Ipv4Addr),
    Ns(String),
    Soa {
        mname: String,
        rname: String,
        serial: u32,
    },
    Txt(Vec<String>),
    Cname(String),
    Mx {
        preference: u16,
        exchange: String,
    },
    /// Any record kind the resolver does not project.
    Other(u16),
}

impl ResourceRecord {
    /// Target host of an NS record, used to follow referrals.
    pub fn ns_target(&self) -> Option<&str> {
        match self {
            ResourceRecord::Ns(host) => Some(host),
            _ => None,
        }
    }
}

/// A mail exchanger with its preference value.
///
/// Lookups return these ordered by *descending* preference number, with
/// equal preferences ordered by ascending host. This is the reverse of the
/// usual "lowest preference first" reading of MX records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxRecord {
    pub host: String,
    pub preference: u16,
}

impl MxRecord {
    pub fn new(host: impl Into<String>, preference: u16) -> Self {
        Self {
            host: host.into(),
            preference,
        }
    }
}

impl fmt::Display for MxRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.host)
    }
}
