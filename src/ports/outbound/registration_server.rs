use crate::registration::domain::{Credentials, InstalledProduct, RegistrationEndpoint};
use crate::shared::Result;

/// Raw answer of the registration server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerResponse {
    /// Numeric HTTP status code
    pub status: u16,
    /// Human readable status, e.g. `404 Not Found`
    pub status_line: String,
    pub body: String,
}

impl ServerResponse {
    pub fn new(status: u16, status_line: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_line: status_line.into(),
            body: body.into(),
        }
    }
}

/// How a product tree request is authenticated
#[derive(Debug, Clone, Copy)]
pub enum ProductQuery<'a> {
    /// `/connect/subscriptions/products` with `Authorization: Token token=<regcode>`
    Regcode(&'a str),
    /// `/connect/systems/products` with HTTP Basic auth and an optional
    /// `System-Token` header. Used against RMT/SMT mirrors.
    System(&'a Credentials),
}

/// RegistrationServer port for talking to SCC or an RMT/SMT mirror
///
/// Implementations only perform transport; interpreting status codes and
/// bodies is left to the resolvers in `registration::services`.
pub trait RegistrationServer {
    /// Issues `GET /connect/systems/subscriptions` with Basic auth.
    ///
    /// # Errors
    /// Returns an error only on transport failures; non-200 answers are
    /// returned as a regular [`ServerResponse`].
    fn fetch_subscriptions(&self, credentials: &Credentials) -> Result<ServerResponse>;

    /// Requests the product tree for the installed product.
    ///
    /// # Errors
    /// Returns an error only on transport failures.
    fn fetch_products(
        &self,
        query: ProductQuery<'_>,
        installed: &InstalledProduct,
    ) -> Result<ServerResponse>;
}

/// Builds a [`RegistrationServer`] once the endpoint is known
pub trait RegistrationServerFactory {
    type Server: RegistrationServer;

    fn connect(&self, endpoint: &RegistrationEndpoint) -> Result<Self::Server>;
}
