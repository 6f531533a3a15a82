use crate::ports::outbound::Configuration;
use crate::shared::error::{logged_error, SuseConnectError};
use crate::shared::Result;
use std::path::PathBuf;

/// Default locations of the SCC credentials file, highest priority first
pub const CREDENTIALS_LOCATIONS: [&str; 3] = [
    "/etc/zypp/credentials.d/SCCcredentials",
    "/run/secrets/SCCcredentials",
    "/run/secrets/credentials.d/SCCcredentials",
];

/// Environment variables consulted when no credentials file exists
pub const USERNAME_ENV: &str = "SCC_USERNAME";
pub const PASSWORD_ENV: &str = "SCC_PASSWORD";
pub const SYSTEM_TOKEN_ENV: &str = "SCC_SYSTEM_TOKEN";

/// Host credentials used to talk to the registration server
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
    system_token: Option<String>,
    instance_data: Option<String>,
    locations: Vec<PathBuf>,
}

impl Credentials {
    /// Creates empty credentials searching the standard locations
    pub fn new() -> Self {
        Self::with_locations(CREDENTIALS_LOCATIONS.iter().map(PathBuf::from).collect())
    }

    /// Creates empty credentials searching the given locations
    pub fn with_locations(locations: Vec<PathBuf>) -> Self {
        Self {
            locations,
            ..Self::default()
        }
    }

    /// Builds credentials handed out by the region server sidecar
    pub fn from_region_server(
        username: impl Into<String>,
        password: impl Into<String>,
        instance_data: impl Into<String>,
    ) -> Self {
        let instance_data = instance_data.into();
        Self {
            username: username.into(),
            password: password.into(),
            instance_data: (!instance_data.is_empty()).then_some(instance_data),
            ..Self::default()
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn system_token(&self) -> Option<&str> {
        self.system_token.as_deref()
    }

    pub fn instance_data(&self) -> Option<&str> {
        self.instance_data.as_deref()
    }

    /// Fills the credentials from an environment lookup.
    ///
    /// Username and password must both be present; the system token is
    /// optional. Returns whether the credentials were found.
    pub fn load_from_env<F>(&mut self, lookup: F) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        match (non_empty(USERNAME_ENV), non_empty(PASSWORD_ENV)) {
            (Some(username), Some(password)) => {
                log::info!("Using credentials from the {} environment variable", USERNAME_ENV);
                self.username = username;
                self.password = password;
                self.system_token = non_empty(SYSTEM_TOKEN_ENV);
                true
            }
            _ => false,
        }
    }
}

impl Configuration for Credentials {
    fn separator(&self) -> char {
        '='
    }

    fn locations(&self) -> Vec<PathBuf> {
        self.locations.clone()
    }

    fn on_locations_not_found(&mut self) -> bool {
        self.load_from_env(|key| std::env::var(key).ok())
    }

    fn set_value(&mut self, key: &str, value: &str) {
        match key {
            "username" => self.username = value.to_string(),
            "password" => self.password = value.to_string(),
            "system_token" => {
                self.system_token = (!value.is_empty()).then(|| value.to_string())
            }
            _ => log::warn!("Warning: Unknown key '{}'", key),
        }
    }

    fn after_parse_check(&mut self) -> Result<()> {
        if self.username.is_empty() {
            return Err(logged_error(SuseConnectError::InvalidCredentials(
                "Can't find username".to_string(),
            )));
        }
        if self.password.is_empty() {
            return Err(logged_error(SuseConnectError::InvalidCredentials(
                "Can't find password".to_string(),
            )));
        }
        Ok(())
    }
}
