use crate::ports::outbound::{
    ProductQuery, RegistrationServer, RegistrationServerFactory, ServerResponse,
};
use crate::registration::domain::{Credentials, InstalledProduct, RegistrationEndpoint};
use crate::shared::error::{logged_error, SuseConnectError};
use crate::shared::Result;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::Url;
use std::time::Duration;

const SUBSCRIPTIONS_PATH: &str = "/connect/systems/subscriptions";
const SUBSCRIPTION_PRODUCTS_PATH: &str = "/connect/subscriptions/products";
const SYSTEM_PRODUCTS_PATH: &str = "/connect/systems/products";

/// SCC API client for SUSE Customer Center and RMT/SMT mirrors
///
/// One client is built per run. Proxies are taken from the environment and
/// TLS verification is skipped only for endpoints marked insecure.
pub struct SccClient {
    client: Client,
    base_url: Url,
}

impl SccClient {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client for the given endpoint
    ///
    /// # Errors
    /// Returns a network error if the endpoint URL is malformed or the HTTP
    /// client cannot be built
    pub fn new(endpoint: &RegistrationEndpoint) -> Result<Self> {
        let base_url = Url::parse(endpoint.url())
            .ok()
            .filter(|url| url.has_host())
            .ok_or_else(|| {
                logged_error(SuseConnectError::Network(format!(
                    "Could not connect with registration server: invalid URL '{}'",
                    endpoint.url()
                )))
            })?;

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("container-suseconnect/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .danger_accept_invalid_certs(endpoint.insecure())
            .build()
            .map_err(|e| {
                logged_error(SuseConnectError::Network(format!(
                    "Could not connect with registration server: {}",
                    e
                )))
            })?;

        Ok(Self { client, base_url })
    }

    fn url_for(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url.set_query(None);
        url
    }

    fn send(&self, request: RequestBuilder) -> Result<ServerResponse> {
        let response = request.send().map_err(|e| {
            logged_error(SuseConnectError::Network(format!(
                "Could not connect with registration server: {}",
                e
            )))
        })?;

        let status = response.status();
        let body = response.text().map_err(|e| {
            logged_error(SuseConnectError::Network(format!(
                "Could not read answer of registration server: {}",
                e
            )))
        })?;

        Ok(ServerResponse::new(status.as_u16(), status.to_string(), body))
    }
}

impl RegistrationServer for SccClient {
    fn fetch_subscriptions(&self, credentials: &Credentials) -> Result<ServerResponse> {
        let url = self.url_for(SUBSCRIPTIONS_PATH);
        log::debug!("Requesting subscriptions from {}", url);

        let request = self
            .client
            .get(url)
            .basic_auth(credentials.username(), Some(credentials.password()));
        self.send(request)
    }

    fn fetch_products(
        &self,
        query: ProductQuery<'_>,
        installed: &InstalledProduct,
    ) -> Result<ServerResponse> {
        let path = match query {
            ProductQuery::Regcode(_) => SUBSCRIPTION_PRODUCTS_PATH,
            ProductQuery::System(_) => SYSTEM_PRODUCTS_PATH,
        };

        let mut url = self.url_for(path);
        url.query_pairs_mut()
            .append_pair("identifier", &installed.identifier)
            .append_pair("version", &installed.version)
            .append_pair("arch", &installed.arch);
        log::debug!("Requesting products from {}", url);

        let request = match query {
            ProductQuery::Regcode(regcode) => self
                .client
                .get(url)
                .header("Authorization", format!("Token token={}", regcode)),
            ProductQuery::System(credentials) => {
                let request = self
                    .client
                    .get(url)
                    .basic_auth(credentials.username(), Some(credentials.password()));
                match credentials.system_token() {
                    Some(token) if !token.is_empty() => request.header("System-Token", token),
                    _ => request,
                }
            }
        };

        self.send(request)
    }
}

/// Builds an [`SccClient`] per endpoint
#[derive(Debug, Default, Clone, Copy)]
pub struct SccClientFactory;

impl RegistrationServerFactory for SccClientFactory {
    type Server = SccClient;

    fn connect(&self, endpoint: &RegistrationEndpoint) -> Result<SccClient> {
        SccClient::new(endpoint)
    }
}
