use crate::registration::domain::Product;

/// ProductFormatter port for rendering resolved products
///
/// This port abstracts the different renderings of a product tree
/// (zypper repository definitions, human readable listings).
pub trait ProductFormatter {
    /// Renders the given products
    ///
    /// # Arguments
    /// * `products` - Resolved products, each owning its extension tree
    ///
    /// # Returns
    /// The rendered text, ready to be presented as-is
    fn format(&self, products: &[Product]) -> String;
}
