use super::DomainError;
use std::fmt;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// IANA root server addresses (a through m).
pub const ROOT_SERVERS: [&str; 13] = [
    "198.41.0.4:53",
    "170.247.170.2:53",
    "192.33.4.12:53",
    "199.7.91.13:53",
    "192.203.230.10:53",
    "192.5.5.241:53",
    "192.112.36.4:53",
    "198.97.190.53:53",
    "192.36.148.17:53",
    "192.58.128.30:53",
    "193.0.14.129:53",
    "199.7.83.42:53",
    "202.12.27.33:53",
];

/// Candidate nameserver endpoints (`host:port`) for one resolution hop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSet {
    endpoints: Vec<String>,
}

impl ServerSet {
    pub fn new(endpoints: Vec<String>) -> Self {
        Self { endpoints }
    }

    pub fn root() -> Self {
        Self::new(ROOT_SERVERS.iter().map(|s| s.to_string()).collect())
    }

    /// Builds the next hop's set from referral NS targets.
    ///
    /// Fails with `NotFound` when there is no target to follow.
    pub fn from_referral<'a>(
        targets: impl IntoIterator<Item = &'a str>,
        port: u16,
    ) -> Result<Self, DomainError> {
        let endpoints: Vec<String> = targets
            .into_iter()
            .map(|host| format!("{}:{}", host.trim_end_matches('.'), port))
            .collect();

        if endpoints.is_empty() {
            return Err(DomainError::NotFound(
                "no nameserver referral in authority section".into(),
            ));
        }
        Ok(Self { endpoints })
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.endpoints.iter().map(String::as_str)
    }
}

impl Default for ServerSet {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for ServerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.endpoints.join(", "))
    }
}
