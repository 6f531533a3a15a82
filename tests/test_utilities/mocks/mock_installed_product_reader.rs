use container_suseconnect::prelude::*;

/// Mock InstalledProductReader for testing
pub struct MockInstalledProductReader {
    pub product: InstalledProduct,
    pub should_fail: bool,
}

impl MockInstalledProductReader {
    pub fn new(product: InstalledProduct) -> Self {
        Self {
            product,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            product: InstalledProduct::default(),
            should_fail: true,
        }
    }
}

impl InstalledProductReader for MockInstalledProductReader {
    fn read_installed_product(&self) -> Result<InstalledProduct> {
        if self.should_fail {
            return Err(
                SuseConnectError::InstalledProduct("No base product detected".to_string()).into(),
            );
        }
        Ok(self.product.clone())
    }
}
