use crate::registration::domain::InstalledProduct;
use crate::shared::Result;

/// InstalledProductReader port for locating the installed base product
pub trait InstalledProductReader {
    /// Reads the descriptor of the installed base product
    ///
    /// # Errors
    /// Returns an error if:
    /// - No base product descriptor exists
    /// - The descriptor cannot be opened
    /// - The descriptor is not well-formed XML
    fn read_installed_product(&self) -> Result<InstalledProduct>;
}
