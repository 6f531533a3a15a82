/// Mock implementations for testing
mod mock_host_environment;
mod mock_installed_product_reader;
mod mock_output_presenter;
mod mock_region_server;
mod mock_registration_server;

pub use mock_host_environment::MockHostEnvironment;
pub use mock_installed_product_reader::MockInstalledProductReader;
pub use mock_output_presenter::MockOutputPresenter;
pub use mock_region_server::MockRegionServer;
pub use mock_registration_server::{MockRegistrationServer, MockRegistrationServerFactory};
