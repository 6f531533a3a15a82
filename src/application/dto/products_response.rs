use crate::registration::domain::{InstalledProduct, Product};

/// Products resolved for the installed product
#[derive(Debug, Clone)]
pub struct ProductsResponse {
    pub installed: InstalledProduct,
    /// Registration server that answered
    pub registration_url: String,
    pub products: Vec<Product>,
}

impl ProductsResponse {
    pub fn new(installed: InstalledProduct, registration_url: String, products: Vec<Product>) -> Self {
        Self {
            installed,
            registration_url,
            products,
        }
    }
}
