/// System adapters changing the container environment
mod ca_certificate;
mod host_environment;
mod hosts_file;
mod module_selection;

pub use ca_certificate::{CaCertificateInstaller, CommandRunner, UpdateCaCertificates};
pub use host_environment::SystemHostEnvironment;
pub use hosts_file::{update_hosts_content, HostsFile};
pub use module_selection::{AnyModuleSelector, DefaultModuleSelector, EnvModuleSelector};
