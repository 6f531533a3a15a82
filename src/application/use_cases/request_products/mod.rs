use crate::adapters::outbound::filesystem::read_configuration;
use crate::application::dto::{ProductsRequest, ProductsResponse};
use crate::ports::inbound::ProductQueryPort;
use crate::ports::outbound::{
    HostEnvironment, InstalledProductReader, RegionServer, RegistrationServerFactory,
};
use crate::registration::domain::{Credentials, RegistrationEndpoint};
use crate::registration::services::ProductResolver;
use crate::shared::Result;

/// RequestProductsUseCase - Resolves the products available to the host
///
/// Credentials come from the containerbuild-regionsrv sidecar when it is
/// reachable (public cloud instances), from the credentials and SUSEConnect
/// files otherwise.
///
/// # Type Parameters
/// * `RS` - RegionServer implementation
/// * `HE` - HostEnvironment implementation
/// * `IPR` - InstalledProductReader implementation
/// * `SF` - RegistrationServerFactory implementation
pub struct RequestProductsUseCase<RS, HE, IPR, SF> {
    region_server: RS,
    host_environment: HE,
    product_reader: IPR,
    server_factory: SF,
}

impl<RS, HE, IPR, SF> RequestProductsUseCase<RS, HE, IPR, SF>
where
    RS: RegionServer,
    HE: HostEnvironment,
    IPR: InstalledProductReader,
    SF: RegistrationServerFactory,
{
    /// Creates a new RequestProductsUseCase with injected dependencies
    pub fn new(region_server: RS, host_environment: HE, product_reader: IPR, server_factory: SF) -> Self {
        Self {
            region_server,
            host_environment,
            product_reader,
            server_factory,
        }
    }

    /// Executes the use case
    pub fn execute(&self, request: &ProductsRequest) -> Result<ProductsResponse> {
        let (credentials, endpoint) = self.load_connection(request)?;

        let installed = self.product_reader.read_installed_product()?;
        log::info!("Installed product: {}", installed);
        log::info!("Registration server set to {}", endpoint.url());

        let server = self.server_factory.connect(&endpoint)?;
        let products = ProductResolver::resolve_products(&server, &credentials, &installed)?;

        Ok(ProductsResponse::new(
            installed,
            endpoint.url().to_string(),
            products,
        ))
    }

    fn load_connection(
        &self,
        request: &ProductsRequest,
    ) -> Result<(Credentials, RegistrationEndpoint)> {
        match self.region_server.ensure_reachable() {
            Ok(()) => {
                log::info!("containerbuild-regionsrv reachable, reading config");
                self.load_from_region_server()
            }
            Err(e) => {
                log::debug!("containerbuild-regionsrv not reachable: {}", e);
                Self::load_from_files(request)
            }
        }
    }

    fn load_from_region_server(&self) -> Result<(Credentials, RegistrationEndpoint)> {
        let config = self.region_server.read_config()?;

        let credentials =
            Credentials::from_region_server(&config.username, &config.password, &config.instance_data);
        let endpoint = RegistrationEndpoint::from_server_fqdn(&config.server_fqdn);

        // A broken trust store or hosts file shows up as a connection error later
        if !config.ca.is_empty() {
            if let Err(e) = self.host_environment.install_ca_certificate(&config.ca) {
                log::warn!("Can't install CA certificate of the registration server: {}", e);
            }
        }
        if let Err(e) = self
            .host_environment
            .update_hosts_entry(&config.server_fqdn, &config.server_ip)
        {
            log::warn!("Can't update hosts entry for {}: {}", config.server_fqdn, e);
        }

        Ok((credentials, endpoint))
    }

    fn load_from_files(request: &ProductsRequest) -> Result<(Credentials, RegistrationEndpoint)> {
        let mut credentials = Credentials::with_locations(request.credentials_locations.clone());
        read_configuration(&mut credentials)?;

        let mut endpoint = RegistrationEndpoint::with_locations(request.endpoint_locations.clone());
        read_configuration(&mut endpoint)?;

        Ok((credentials, endpoint))
    }
}

impl<RS, HE, IPR, SF> ProductQueryPort for RequestProductsUseCase<RS, HE, IPR, SF>
where
    RS: RegionServer,
    HE: HostEnvironment,
    IPR: InstalledProductReader,
    SF: RegistrationServerFactory,
{
    fn request_products(&self, request: &ProductsRequest) -> Result<ProductsResponse> {
        self.execute(request)
    }
}
