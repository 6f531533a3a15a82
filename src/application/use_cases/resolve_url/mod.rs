use crate::application::dto::ResolvedUrl;
use crate::ports::inbound::UrlResolutionPort;
use crate::ports::outbound::{HostEnvironment, RegionServer};
use crate::shared::error::{logged_error, SuseConnectError};
use crate::shared::Result;

/// ResolveUrlUseCase - Turns a repository path into a URL carrying the
/// credentials handed out by the containerbuild-regionsrv sidecar
pub struct ResolveUrlUseCase<RS, HE> {
    region_server: RS,
    host_environment: HE,
}

impl<RS, HE> ResolveUrlUseCase<RS, HE>
where
    RS: RegionServer,
    HE: HostEnvironment,
{
    pub fn new(region_server: RS, host_environment: HE) -> Self {
        Self {
            region_server,
            host_environment,
        }
    }

    pub fn execute(&self, path: &str) -> Result<ResolvedUrl> {
        self.region_server.ensure_reachable().map_err(|e| {
            logged_error(SuseConnectError::UrlResolver(format!(
                "could not reach build server from the host: {}",
                e
            )))
        })?;

        let config = self.region_server.read_config()?;
        if !config.has_credentials() {
            return Err(logged_error(SuseConnectError::UrlResolver(
                "no credentials given".to_string(),
            )));
        }

        if !config.ca.is_empty() {
            self.host_environment.install_ca_certificate(&config.ca)?;
        }

        let resolved = ResolvedUrl {
            server_fqdn: config.server_fqdn,
            username: config.username,
            password: config.password,
            path: path.to_string(),
            instance_data: config.instance_data,
        };

        log::info!("Received X-Instance-Data");
        log::info!("Resulting URL: {}", resolved.masked_url()?);

        Ok(resolved)
    }
}

impl<RS, HE> UrlResolutionPort for ResolveUrlUseCase<RS, HE>
where
    RS: RegionServer,
    HE: HostEnvironment,
{
    fn resolve_url(&self, path: &str) -> Result<ResolvedUrl> {
        self.execute(path)
    }
}
