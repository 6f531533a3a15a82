use crate::ports::outbound::ModuleSelector;
use std::fs;
use std::path::PathBuf;

/// Directory holding the product descriptors of installed products
pub const PRODUCTS_DIR: &str = "/etc/products.d";

/// ProductMarkerSelector adapter enabling modules that are installed locally
///
/// A module counts as installed when `<dir>/<identifier>.prod` is a regular
/// file. Symbolic links are ignored, `baseproduct` is one of them.
pub struct ProductMarkerSelector {
    products_dir: PathBuf,
}

impl ProductMarkerSelector {
    pub fn new() -> Self {
        Self::with_dir(PathBuf::from(PRODUCTS_DIR))
    }

    pub fn with_dir(products_dir: PathBuf) -> Self {
        Self { products_dir }
    }
}

impl Default for ProductMarkerSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleSelector for ProductMarkerSelector {
    fn is_enabled(&self, identifier: &str) -> bool {
        if identifier.is_empty() || identifier.contains('/') {
            return false;
        }

        let marker = self.products_dir.join(format!("{}.prod", identifier));
        // Do not follow symlinks
        match fs::symlink_metadata(&marker) {
            Ok(metadata) => metadata.is_file(),
            Err(_) => false,
        }
    }
}
