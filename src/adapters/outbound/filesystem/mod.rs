/// Filesystem adapters for configuration files, product descriptors and stdout
mod configuration_reader;
mod module_markers;
mod product_file_reader;
mod stdout_presenter;

pub use configuration_reader::{parse_configuration, read_configuration};
pub use module_markers::{ProductMarkerSelector, PRODUCTS_DIR};
pub use product_file_reader::{parse_installed_product, ProductFileReader, BASE_PRODUCT_LOCATION};
pub use stdout_presenter::StdoutPresenter;
