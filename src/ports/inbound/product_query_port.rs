use crate::application::dto::{ProductsRequest, ProductsResponse};
use crate::shared::Result;

/// ProductQueryPort - Inbound port for resolving the products available to
/// the host
pub trait ProductQueryPort {
    /// Resolves the product trees for the installed product
    ///
    /// # Errors
    /// Returns an error if:
    /// - Neither the sidecar nor the credentials files provide credentials
    /// - The installed product cannot be detected
    /// - The registration server cannot be reached or answers unexpectedly
    fn request_products(&self, request: &ProductsRequest) -> Result<ProductsResponse>;
}
