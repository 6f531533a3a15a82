/// Network adapters for the registration server and the region server sidecar
mod region_server_client;
mod scc_client;

pub use region_server_client::{address_from, RegionServerClient};
pub use scc_client::{SccClient, SccClientFactory};
