use crate::registration::domain::ContainerBuildConfig;
use crate::shared::Result;

/// RegionServer port for the containerbuild-regionsrv sidecar
///
/// When the sidecar runs on the host (public cloud instances) it hands out
/// the registration server and credentials instead of mounted files.
pub trait RegionServer {
    /// Checks whether the sidecar accepts connections
    ///
    /// # Errors
    /// Returns the connection error if it cannot be reached
    fn ensure_reachable(&self) -> Result<()>;

    /// Reads the configuration object served by the sidecar
    ///
    /// # Errors
    /// Returns an error if the connection fails, the payload is not valid
    /// JSON, or every relevant field is empty
    fn read_config(&self) -> Result<ContainerBuildConfig>;
}
