use crate::ports::outbound::RegionServer;
use crate::registration::domain::ContainerBuildConfig;
use crate::shared::error::{logged_error, SuseConnectError};
use crate::shared::Result;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

pub const BUILD_IP_ENV: &str = "CONTAINER_BUILD_IP";
pub const BUILD_PORT_ENV: &str = "CONTAINER_BUILD_PORT";
pub const DEFAULT_BUILD_IP: &str = "0.0.0.0";
pub const DEFAULT_BUILD_PORT: &str = "7956";

/// Client for the containerbuild-regionsrv sidecar running on the host
///
/// The sidecar writes one JSON object per connection and closes it.
pub struct RegionServerClient {
    address: String,
}

impl RegionServerClient {
    const CONNECT_TIMEOUT_SECONDS: u64 = 2;
    const READ_TIMEOUT_SECONDS: u64 = 10;

    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    /// Address taken from `CONTAINER_BUILD_IP` and `CONTAINER_BUILD_PORT`
    pub fn from_env() -> Self {
        Self::new(address_from(|key| std::env::var(key).ok()))
    }

    fn connect(&self) -> std::io::Result<TcpStream> {
        let addr: SocketAddr = self.address.to_socket_addrs()?.next().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no address found for {}", self.address),
            )
        })?;
        TcpStream::connect_timeout(&addr, Duration::from_secs(Self::CONNECT_TIMEOUT_SECONDS))
    }
}

/// Builds `ip:port`, using the defaults for unset or empty variables
pub fn address_from<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let ip = lookup(BUILD_IP_ENV)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_BUILD_IP.to_string());
    let port = lookup(BUILD_PORT_ENV)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_BUILD_PORT.to_string());
    format!("{}:{}", ip, port)
}

impl RegionServer for RegionServerClient {
    fn ensure_reachable(&self) -> Result<()> {
        self.connect()
            .map(drop)
            .map_err(|e| SuseConnectError::RegionServer(e.to_string()).into())
    }

    fn read_config(&self) -> Result<ContainerBuildConfig> {
        log::info!("Trying to reach suse build server at '{}'", self.address);
        let stream = self
            .connect()
            .map_err(|e| logged_error(SuseConnectError::RegionServer(e.to_string())))?;
        stream
            .set_read_timeout(Some(Duration::from_secs(Self::READ_TIMEOUT_SECONDS)))
            .map_err(|e| logged_error(SuseConnectError::RegionServer(e.to_string())))?;

        log::info!("Reading from containerbuild-regionsrv ...");
        let config = serde_json::Deserializer::from_reader(stream)
            .into_iter::<ContainerBuildConfig>()
            .next()
            .unwrap_or_else(|| Ok(ContainerBuildConfig::default()))
            .map_err(|e| logged_error(SuseConnectError::RegionServer(e.to_string())))?;

        if config.is_empty() {
            return Err(logged_error(SuseConnectError::RegionServer(
                "empty response from the server".to_string(),
            )));
        }

        Ok(config)
    }
}
