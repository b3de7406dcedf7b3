use crate::ports::outbound::ScanReportReader;
use crate::scan_classification::domain::{HostAddress, HostRecord, OpenPort};
use crate::shared::error::ListsError;
use crate::shared::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Maximum report size accepted (512 MiB)
const MAX_REPORT_SIZE: u64 = 512 * 1024 * 1024;

#[derive(Debug, Deserialize)]
struct NmapRun {
    #[serde(rename = "host", default)]
    hosts: Vec<XmlHost>,
}

#[derive(Debug, Deserialize)]
struct XmlHost {
    #[serde(default)]
    status: Option<XmlStatus>,
    #[serde(rename = "address", default)]
    addresses: Vec<XmlAddress>,
    #[serde(default)]
    ports: Option<XmlPorts>,
}

#[derive(Debug, Deserialize)]
struct XmlStatus {
    #[serde(rename = "@state", default)]
    state: Option<String>,
}

#[derive(Debug, Deserialize)]
struct XmlAddress {
    #[serde(rename = "@addr")]
    addr: String,
    #[serde(rename = "@addrtype", default)]
    addrtype: Option<String>,
}

#[derive(Debug, Deserialize)]
struct XmlPorts {
    #[serde(rename = "port", default)]
    ports: Vec<XmlPort>,
}

#[derive(Debug, Deserialize)]
struct XmlPort {
    #[serde(rename = "@portid")]
    portid: String,
    #[serde(default)]
    state: Option<XmlPortState>,
    #[serde(default)]
    service: Option<XmlService>,
}

#[derive(Debug, Deserialize)]
struct XmlPortState {
    #[serde(rename = "@state")]
    state: String,
}

#[derive(Debug, Deserialize)]
struct XmlService {
    #[serde(rename = "@name", default)]
    name: Option<String>,
}

impl XmlHost {
    fn is_up(&self) -> bool {
        match &self.status {
            Some(status) => status.state.as_deref() == Some("up"),
            None => true,
        }
    }

    fn ipv4_address(&self) -> Option<&str> {
        self.addresses
            .iter()
            .find(|a| a.addrtype.as_deref() == Some("ipv4"))
            .map(|a| a.addr.as_str())
    }
}

impl XmlPort {
    fn is_open(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.state == "open")
    }
}

/// Parses the content of an Nmap XML report into host records
///
/// Hosts that are not up, have no IPv4 address, or have no ports section
/// are skipped. Only open ports are kept.
///
/// # Errors
/// Returns an error if the XML is not well-formed, an IPv4 address is not a
/// valid dotted quad, or a port id is not a number in 0..=65535
pub fn parse_nmap_xml(content: &str) -> Result<Vec<HostRecord>> {
    let run: NmapRun = quick_xml::de::from_str(content)
        .map_err(|e| anyhow::anyhow!("Invalid XML: {}", e))?;

    let mut records = Vec::new();

    for host in run.hosts {
        if !host.is_up() {
            continue;
        }

        let Some(ip) = host.ipv4_address() else {
            continue;
        };

        let Some(ports) = &host.ports else {
            continue;
        };

        let address = HostAddress::new(ip.to_string())?;

        let mut open_ports = Vec::new();
        for port in ports.ports.iter().filter(|p| p.is_open()) {
            let number: u16 = port.portid.trim().parse().map_err(|_| {
                anyhow::anyhow!(
                    "Host {}: port id '{}' is not a valid port number",
                    address,
                    port.portid
                )
            })?;

            let service = port.service.as_ref().and_then(|s| s.name.clone());
            open_ports.push(OpenPort::new(number, service));
        }

        records.push(HostRecord::new(address, open_ports));
    }

    Ok(records)
}

/// NmapXmlReader adapter for reading Nmap XML reports from the file system
pub struct NmapXmlReader;

impl NmapXmlReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a report with size and file type checks
    fn read_report(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ListsError::NotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let metadata = fs::metadata(path).map_err(|e| ListsError::MalformedInput {
            path: path.to_path_buf(),
            details: format!("Failed to read file metadata: {}", e),
        })?;

        if !metadata.is_file() {
            return Err(ListsError::NotAFile {
                path: path.to_path_buf(),
            }
            .into());
        }

        if metadata.len() > MAX_REPORT_SIZE {
            return Err(ListsError::MalformedInput {
                path: path.to_path_buf(),
                details: format!(
                    "Report is too large ({} bytes). Maximum allowed size is {} bytes.",
                    metadata.len(),
                    MAX_REPORT_SIZE
                ),
            }
            .into());
        }

        fs::read_to_string(path).map_err(|e| {
            ListsError::MalformedInput {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for NmapXmlReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanReportReader for NmapXmlReader {
    fn read_hosts(&self, path: &Path) -> Result<Vec<HostRecord>> {
        let content = self.read_report(path)?;

        parse_nmap_xml(&content).map_err(|e| {
            ListsError::MalformedInput {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE nmaprun>
<?xml-stylesheet href="file:///usr/bin/../share/nmap/nmap.xsl" type="text/xsl"?>
<nmaprun scanner="nmap" args="nmap -sV -oX scan.xml 10.0.0.0/24" start="1700000000" version="7.94" xmloutputversion="1.05">
<scaninfo type="syn" protocol="tcp" numservices="1000" services="1-1000"/>
<verbose level="0"/>
<host starttime="1700000001" endtime="1700000002"><status state="up" reason="arp-response" reason_ttl="0"/>
<address addr="10.0.0.5" addrtype="ipv4"/>
<address addr="00:11:22:33:44:55" addrtype="mac" vendor="Acme"/>
<hostnames></hostnames>
<ports><extraports state="closed" count="997"><extrareasons reason="resets" count="997"/></extraports>
<port protocol="tcp" portid="22"><state state="open" reason="syn-ack" reason_ttl="64"/><service name="ssh" product="OpenSSH" method="probed" conf="10"/></port>
<port protocol="tcp" portid="25"><state state="filtered" reason="no-response" reason_ttl="0"/><service name="smtp" method="table" conf="3"/></port>
<port protocol="tcp" portid="9999"><state state="open" reason="syn-ack" reason_ttl="64"/></port>
</ports>
</host>
<taskprogress task="Service scan" time="1700000003" percent="50.00"/>
<host><status state="down" reason="no-response" reason_ttl="0"/>
<address addr="10.0.0.6" addrtype="ipv4"/>
<ports><port protocol="tcp" portid="80"><state state="open" reason="syn-ack" reason_ttl="64"/><service name="http"/></port></ports>
</host>
<host><status state="up" reason="echo-reply" reason_ttl="64"/>
<address addr="10.0.0.7" addrtype="ipv4"/>
</host>
<host><status state="up" reason="echo-reply" reason_ttl="64"/>
<address addr="fe80::1" addrtype="ipv6"/>
<ports><port protocol="tcp" portid="80"><state state="open" reason="syn-ack" reason_ttl="64"/><service name="http"/></port></ports>
</host>
<runstats><finished time="1700000010" elapsed="10.00" exit="success"/><hosts up="3" down="1" total="4"/></runstats>
</nmaprun>
"#;

    #[test]
    fn test_parse_keeps_only_up_ipv4_hosts_with_ports() {
        let hosts = parse_nmap_xml(SAMPLE).unwrap();

        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].address().as_str(), "10.0.0.5");
    }

    #[test]
    fn test_parse_keeps_only_open_ports() {
        let hosts = parse_nmap_xml(SAMPLE).unwrap();
        let ports: Vec<(u16, &str)> = hosts[0]
            .open_ports()
            .iter()
            .map(|p| (p.port(), p.service()))
            .collect();

        assert_eq!(ports, vec![(22, "ssh"), (9999, "unknown")]);
    }

    #[test]
    fn test_parse_host_without_status_is_kept() {
        let xml = r#"<nmaprun><host><address addr="10.1.1.1" addrtype="ipv4"/>
<ports><port protocol="tcp" portid="21"><state state="open"/><service name="ftp"/></port></ports>
</host></nmaprun>"#;

        let hosts = parse_nmap_xml(xml).unwrap();
        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].open_ports()[0].service(), "ftp");
    }

    #[test]
    fn test_parse_service_without_name_is_unknown() {
        let xml = r#"<nmaprun><host><status state="up"/><address addr="10.1.1.1" addrtype="ipv4"/>
<ports><port protocol="tcp" portid="4444"><state state="open"/><service method="table" conf="3"/></port></ports>
</host></nmaprun>"#;

        let hosts = parse_nmap_xml(xml).unwrap();
        assert_eq!(hosts[0].open_ports()[0].service(), "unknown");
    }

    #[test]
    fn test_parse_port_without_state_is_skipped() {
        let xml = r#"<nmaprun><host><status state="up"/><address addr="10.1.1.1" addrtype="ipv4"/>
<ports><port protocol="tcp" portid="80"><service name="http"/></port></ports>
</host></nmaprun>"#;

        let hosts = parse_nmap_xml(xml).unwrap();
        assert!(hosts[0].open_ports().is_empty());
    }

    #[test]
    fn test_parse_non_numeric_port_is_error() {
        let xml = r#"<nmaprun><host><status state="up"/><address addr="10.1.1.1" addrtype="ipv4"/>
<ports><port protocol="tcp" portid="eighty"><state state="open"/></port></ports>
</host></nmaprun>"#;

        let err = parse_nmap_xml(xml).unwrap_err();
        assert!(err.to_string().contains("eighty"));
    }

    #[test]
    fn test_parse_malformed_xml_is_error() {
        assert!(parse_nmap_xml("<nmaprun><host></nmaprun>").is_err());
    }

    #[test]
    fn test_parse_empty_run() {
        let hosts = parse_nmap_xml(r#"<nmaprun scanner="nmap"></nmaprun>"#).unwrap();
        assert!(hosts.is_empty());
    }

    #[test]
    fn test_read_hosts_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let reader = NmapXmlReader::new();

        let err = reader
            .read_hosts(&temp_dir.path().join("missing.xml"))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ListsError>(),
            Some(ListsError::NotFound { .. })
        ));
    }

    #[test]
    fn test_read_hosts_directory_is_not_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let reader = NmapXmlReader::new();

        let err = reader.read_hosts(temp_dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ListsError>(),
            Some(ListsError::NotAFile { .. })
        ));
    }

    #[test]
    fn test_read_hosts_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.xml");
        fs::write(&path, "<nmaprun><host><ports></host></nmaprun>").unwrap();

        let err = NmapXmlReader::new().read_hosts(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ListsError>(),
            Some(ListsError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_read_hosts_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scan.xml");
        fs::write(&path, SAMPLE).unwrap();

        let hosts = NmapXmlReader::new().read_hosts(&path).unwrap();
        assert_eq!(hosts.len(), 1);
    }
}
