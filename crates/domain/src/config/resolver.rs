use crate::server_set::{ServerSet, DEFAULT_DNS_PORT, ROOT_SERVERS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Endpoints the referral walk starts from.
    #[serde(default = "default_root_servers")]
    pub root_servers: Vec<String>,

    /// Highest hop index that still issues a query; hops 0..=max_depth run.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Deadline shared by all connection attempts of one hop.
    #[serde(default = "default_dial_timeout_secs")]
    pub dial_timeout_secs: u64,

    /// Bound on one query/response exchange over an established connection.
    #[serde(default = "default_io_timeout_secs")]
    pub io_timeout_secs: u64,

    /// Port appended to nameserver hosts learned from referrals.
    #[serde(default = "default_nameserver_port")]
    pub nameserver_port: u16,
}

impl ResolverConfig {
    pub fn root_server_set(&self) -> ServerSet {
        ServerSet::new(self.root_servers.clone())
    }

    pub fn dial_timeout(&self) -> Duration {
        Duration::from_secs(self.dial_timeout_secs)
    }

    pub fn io_timeout(&self) -> Duration {
        Duration::from_secs(self.io_timeout_secs)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_servers: default_root_servers(),
            max_depth: default_max_depth(),
            dial_timeout_secs: default_dial_timeout_secs(),
            io_timeout_secs: default_io_timeout_secs(),
            nameserver_port: default_nameserver_port(),
        }
    }
}

fn default_root_servers() -> Vec<String> {
    ROOT_SERVERS.iter().map(|s| s.to_string()).collect()
}

fn default_max_depth() -> usize {
    10
}

fn default_dial_timeout_secs() -> u64 {
    10
}

fn default_io_timeout_secs() -> u64 {
    10
}

fn default_nameserver_port() -> u16 {
    DEFAULT_DNS_PORT
}
