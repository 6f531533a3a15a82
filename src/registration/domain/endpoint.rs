use crate::ports::outbound::Configuration;
use crate::shared::Result;
use std::path::PathBuf;

/// Public SUSE Customer Center
pub const DEFAULT_REGISTRATION_URL: &str = "https://scc.suse.com";

/// Default locations of the SUSEConnect file, highest priority first
pub const ENDPOINT_LOCATIONS: [&str; 2] = ["/etc/SUSEConnect", "/run/secrets/SUSEConnect"];

/// Environment variables consulted when no SUSEConnect file exists
pub const URL_ENV: &str = "SCC_URL";
pub const INSECURE_ENV: &str = "SCC_INSECURE";

/// Where the registration server lives and how to talk to it
///
/// A missing SUSEConnect file is not an error: the public registration
/// server with TLS verification is used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationEndpoint {
    url: String,
    insecure: bool,
    locations: Vec<PathBuf>,
}

impl Default for RegistrationEndpoint {
    fn default() -> Self {
        Self {
            url: DEFAULT_REGISTRATION_URL.to_string(),
            insecure: false,
            locations: ENDPOINT_LOCATIONS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl RegistrationEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locations(locations: Vec<PathBuf>) -> Self {
        Self {
            locations,
            ..Self::default()
        }
    }

    /// Endpoint announced by the region server sidecar
    pub fn from_server_fqdn(fqdn: &str) -> Self {
        Self {
            url: format!("https://{}", fqdn),
            insecure: false,
            locations: Vec::new(),
        }
    }

    /// Endpoint pointing at an explicit URL, mostly useful for tests
    pub fn from_url(url: impl Into<String>, insecure: bool) -> Self {
        Self {
            url: url.into(),
            insecure,
            locations: Vec::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn insecure(&self) -> bool {
        self.insecure
    }

    /// Applies the environment fallback. Always succeeds.
    pub fn load_from_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.url = lookup(URL_ENV)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_REGISTRATION_URL.to_string());
        self.insecure = lookup(INSECURE_ENV).as_deref() == Some("true");
    }
}

impl Configuration for RegistrationEndpoint {
    fn separator(&self) -> char {
        ':'
    }

    fn locations(&self) -> Vec<PathBuf> {
        self.locations.clone()
    }

    fn on_locations_not_found(&mut self) -> bool {
        self.load_from_env(|key| std::env::var(key).ok());
        true
    }

    fn set_value(&mut self, key: &str, value: &str) {
        match key {
            "url" => self.url = value.to_string(),
            "insecure" => self.insecure = value == "true",
            _ => log::warn!("Warning: Unknown key '{}'", key),
        }
    }

    fn after_parse_check(&mut self) -> Result<()> {
        if self.url.is_empty() {
            self.url = DEFAULT_REGISTRATION_URL.to_string();
        }
        Ok(())
    }
}
