use std::collections::BTreeSet;

/// Name of the synthetic category for hosts that match no rule
pub const OTHER_CATEGORY: &str = "other";

/// A named grouping rule keyed by port numbers and service names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    ports: BTreeSet<u16>,
    services: BTreeSet<String>,
}

impl Category {
    pub fn new<P, S>(name: impl Into<String>, ports: P, services: S) -> Self
    where
        P: IntoIterator<Item = u16>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            name: name.into(),
            ports: ports.into_iter().collect(),
            services: services.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if either the port or the (case-sensitive) service name matches
    pub fn matches(&self, port: u16, service: &str) -> bool {
        self.ports.contains(&port) || self.services.contains(service)
    }
}

/// The category rule table, in a fixed iteration order
///
/// Built once at start-up and handed to the classifier; it is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRules {
    categories: Vec<Category>,
}

impl CategoryRules {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The built-in table of well-known service categories
    pub fn builtin() -> Self {
        Self::new(vec![
            Category::new("web", [80, 443, 8080, 8443], ["http", "https"]),
            Category::new("windows_smb", [139, 445], ["microsoft-ds", "netbios-ssn"]),
            Category::new("mssql", [1433], ["ms-sql-s"]),
            Category::new("mysql", [3306], ["mysql"]),
            Category::new("vnc", [5800, 5900], ["vnc"]),
            Category::new("ssh", [22, 2222], ["ssh"]),
            Category::new("ftp", [21, 2121], ["ftp"]),
            Category::new("rdp", [3389], ["ms-wbt-server"]),
            Category::new("smtp", [25, 465, 587], ["smtp"]),
            Category::new("dns", [53], ["domain"]),
            Category::new("snmp", [161], ["snmp"]),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Categories matching a single open port, in table order
    pub fn matching<'a>(
        &'a self,
        port: u16,
        service: &'a str,
    ) -> impl Iterator<Item = &'a Category> + 'a {
        self.categories
            .iter()
            .filter(move |c| c.matches(port, service))
    }
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self::builtin()
    }
}
