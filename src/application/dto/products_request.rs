use crate::registration::domain::{CREDENTIALS_LOCATIONS, ENDPOINT_LOCATIONS};
use std::path::PathBuf;

/// Request for resolving the products available to the host
///
/// The locations only matter when no region server sidecar is reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductsRequest {
    /// Candidate credentials files, highest priority first
    pub credentials_locations: Vec<PathBuf>,
    /// Candidate SUSEConnect files, highest priority first
    pub endpoint_locations: Vec<PathBuf>,
}

impl ProductsRequest {
    pub fn new(credentials_locations: Vec<PathBuf>, endpoint_locations: Vec<PathBuf>) -> Self {
        Self {
            credentials_locations,
            endpoint_locations,
        }
    }
}

impl Default for ProductsRequest {
    fn default() -> Self {
        Self::new(
            CREDENTIALS_LOCATIONS.iter().map(PathBuf::from).collect(),
            ENDPOINT_LOCATIONS.iter().map(PathBuf::from).collect(),
        )
    }
}
