use crate::shared::Result;
use std::collections::HashSet;
use std::net::Ipv4Addr;

/// Service name used when the report does not identify the service
pub const UNKNOWN_SERVICE: &str = "unknown";

/// NewType wrapper for a host's IPv4 address
///
/// The original textual form is kept because output files are sorted
/// lexicographically on it, not numerically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostAddress(String);

impl HostAddress {
    pub fn new(address: String) -> Result<Self> {
        if address.is_empty() {
            anyhow::bail!("Host address cannot be empty");
        }

        if address.parse::<Ipv4Addr>().is_err() {
            anyhow::bail!("'{}' is not a valid IPv4 address", address);
        }

        Ok(Self(address))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HostAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An open port together with the service name reported for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenPort {
    port: u16,
    service: String,
}

impl OpenPort {
    /// Creates an open port; an absent or blank service name becomes `unknown`
    pub fn new(port: u16, service: Option<String>) -> Self {
        let service = service
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN_SERVICE.to_string());
        Self { port, service }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn service(&self) -> &str {
        &self.service
    }
}

/// A host that was reported "up" with an IPv4 address
///
/// Holds only its open ports, each (port, service) pair at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct HostRecord {
    address: HostAddress,
    open_ports: Vec<OpenPort>,
}

impl HostRecord {
    /// Creates a host record, keeping the first occurrence of each (port, service) pair
    pub fn new(address: HostAddress, open_ports: Vec<OpenPort>) -> Self {
        let mut seen = HashSet::new();
        let open_ports = open_ports
            .into_iter()
            .filter(|p| seen.insert((p.port(), p.service().to_string())))
            .collect();

        Self {
            address,
            open_ports,
        }
    }

    pub fn address(&self) -> &HostAddress {
        &self.address
    }

    pub fn open_ports(&self) -> &[OpenPort] {
        &self.open_ports
    }

    /// Flattens the record into one entry per open port, in report order
    pub fn port_entries(&self) -> impl Iterator<Item = PortEntry> + '_ {
        self.open_ports.iter().map(|p| PortEntry {
            address: self.address.clone(),
            port: p.port(),
            service: p.service().to_string(),
        })
    }
}

/// One (address, port, service) tuple, the unit the classifier works on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortEntry {
    pub address: HostAddress,
    pub port: u16,
    pub service: String,
}

impl PortEntry {
    pub fn new(address: HostAddress, port: u16, service: impl Into<String>) -> Self {
        Self {
            address,
            port,
            service: service.into(),
        }
    }
}

/// Renders the `all_ports.txt` line form: "address port service"
impl std::fmt::Display for PortEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.address, self.port, self.service)
    }
}
