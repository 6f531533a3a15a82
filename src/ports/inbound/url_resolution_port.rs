use crate::application::dto::ResolvedUrl;
use crate::shared::Result;

/// UrlResolutionPort - Inbound port for the zypper URL resolver plugin
pub trait UrlResolutionPort {
    /// Resolves the repository `path` against the registration server
    /// announced by the sidecar
    ///
    /// # Errors
    /// Returns an error if the sidecar is unreachable or hands out no
    /// credentials
    fn resolve_url(&self, path: &str) -> Result<ResolvedUrl>;
}
