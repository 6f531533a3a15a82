use container_suseconnect::prelude::*;

/// Mock RegionServer for testing
///
/// Without a configuration the sidecar behaves as if nothing listened on
/// its port.
pub struct MockRegionServer {
    pub config: Option<ContainerBuildConfig>,
}

impl MockRegionServer {
    pub fn new(config: ContainerBuildConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    pub fn unreachable() -> Self {
        Self { config: None }
    }
}

impl RegionServer for MockRegionServer {
    fn ensure_reachable(&self) -> Result<()> {
        if self.config.is_none() {
            anyhow::bail!("Connection refused (os error 111)");
        }
        Ok(())
    }

    fn read_config(&self) -> Result<ContainerBuildConfig> {
        match &self.config {
            Some(config) if config.is_empty() => Err(SuseConnectError::RegionServer(
                "empty response from the server".to_string(),
            )
            .into()),
            Some(config) => Ok(config.clone()),
            None => anyhow::bail!("Connection refused (os error 111)"),
        }
    }
}
