use crate::ports::outbound::{ProductQuery, RegistrationServer};
use crate::registration::domain::{Credentials, InstalledProduct, Product};
use crate::registration::services::SubscriptionResolver;
use crate::shared::error::{logged_error, SuseConnectError};
use crate::shared::Result;
use serde::Deserialize;

/// Error payload the registration server may attach to non-200 answers
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: serde_json::Value,
}

/// Resolves the product trees available for the installed product
pub struct ProductResolver;

impl ProductResolver {
    /// Requests the products for every usable regcode
    ///
    /// Regcodes are processed in order. A failure on one regcode does not
    /// stop the others: as soon as any request succeeds the collected
    /// products are returned, otherwise the last error is.
    ///
    /// # Errors
    /// Returns an error if the regcodes cannot be resolved, or if every
    /// product request failed
    pub fn resolve_products<S>(
        server: &S,
        credentials: &Credentials,
        installed: &InstalledProduct,
    ) -> Result<Vec<Product>>
    where
        S: RegistrationServer + ?Sized,
    {
        let regcodes = SubscriptionResolver::resolve_regcodes(server, credentials)?;

        let mut products = Vec::new();
        let mut last_error = None;

        for regcode in &regcodes {
            match Self::request_products(server, regcode, credentials, installed) {
                Ok(resolved) => products.extend(resolved),
                Err(e) => last_error = Some(e),
            }
        }

        match last_error {
            Some(e) if products.is_empty() => Err(e),
            _ => Ok(products),
        }
    }

    /// Requests the product tree with one regcode, or with the system
    /// credentials when the regcode is empty
    pub fn request_products<S>(
        server: &S,
        regcode: &str,
        credentials: &Credentials,
        installed: &InstalledProduct,
    ) -> Result<Vec<Product>>
    where
        S: RegistrationServer + ?Sized,
    {
        let query = if regcode.is_empty() {
            ProductQuery::System(credentials)
        } else {
            ProductQuery::Regcode(regcode)
        };

        let response = server.fetch_products(query, installed)?;

        if response.status != 200 {
            if let Some(message) = server_error_message(&response.body) {
                log::error!("{}", message);
            }
            return Err(logged_error(SuseConnectError::SubscriptionServer(format!(
                "Unexpected error while retrieving products with regCode {}: {}",
                regcode, response.status_line
            ))));
        }

        Self::parse_products(&response.body)
    }

    /// Parses a product answer
    ///
    /// `/connect/subscriptions/products` answers with a list of products,
    /// `/connect/systems/products` (RMT) with a single one. The list shape is
    /// tried first, `null` counting as an empty list; a single product gets
    /// the mirror credentials parameter added to its repository URLs.
    ///
    /// # Errors
    /// Returns a repository error if the body matches neither shape
    pub fn parse_products(body: &str) -> Result<Vec<Product>> {
        if let Ok(products) = serde_json::from_str::<Option<Vec<Product>>>(body) {
            return Ok(products.unwrap_or_default());
        }

        match serde_json::from_str::<Product>(body) {
            Ok(mut product) => {
                product.add_mirror_credentials();
                Ok(vec![product])
            }
            Err(e) => Err(logged_error(SuseConnectError::Repository(format!(
                "Can't read product information: {} - {}",
                e, body
            )))),
        }
    }
}

/// The `error` field of a failed answer, strings without their JSON quotes
fn server_error_message(body: &str) -> Option<String> {
    let payload = serde_json::from_str::<ErrorPayload>(body).ok()?;
    Some(match payload.error.as_str() {
        Some(message) => message.to_string(),
        None => payload.error.to_string(),
    })
}
