/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (CLI, zypper
/// plugin protocol) use to interact with the application core.
pub mod product_query_port;
pub mod url_resolution_port;

pub use product_query_port::ProductQueryPort;
pub use url_resolution_port::UrlResolutionPort;
