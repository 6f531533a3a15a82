/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, host, console).
pub mod configuration;
pub mod formatter;
pub mod host_environment;
pub mod installed_product_reader;
pub mod module_selector;
pub mod output_presenter;
pub mod region_server;
pub mod registration_server;

pub use configuration::Configuration;
pub use formatter::ProductFormatter;
pub use host_environment::HostEnvironment;
pub use installed_product_reader::InstalledProductReader;
pub use module_selector::ModuleSelector;
pub use output_presenter::OutputPresenter;
pub use region_server::RegionServer;
pub use registration_server::{
    ProductQuery, RegistrationServer, RegistrationServerFactory, ServerResponse,
};
