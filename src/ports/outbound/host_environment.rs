use crate::shared::Result;

/// HostEnvironment port for the system changes needed to reach a
/// sidecar-provided registration server
pub trait HostEnvironment {
    /// Installs the given PEM contents as a trusted CA certificate
    fn install_ca_certificate(&self, contents: &str) -> Result<()>;

    /// Makes `hostname` resolve to `ip`
    fn update_hosts_entry(&self, hostname: &str, ip: &str) -> Result<()>;
}
