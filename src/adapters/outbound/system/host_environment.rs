use super::ca_certificate::{CaCertificateInstaller, CommandRunner, UpdateCaCertificates};
use super::hosts_file::HostsFile;
use crate::ports::outbound::HostEnvironment;
use crate::shared::Result;

/// SystemHostEnvironment adapter applying sidecar settings to the container
pub struct SystemHostEnvironment<C: CommandRunner = UpdateCaCertificates> {
    ca_installer: CaCertificateInstaller<C>,
    hosts_file: HostsFile,
}

impl SystemHostEnvironment {
    pub fn new() -> Self {
        Self::with_parts(CaCertificateInstaller::new(), HostsFile::new())
    }
}

impl Default for SystemHostEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CommandRunner> SystemHostEnvironment<C> {
    pub fn with_parts(ca_installer: CaCertificateInstaller<C>, hosts_file: HostsFile) -> Self {
        Self {
            ca_installer,
            hosts_file,
        }
    }
}

impl<C: CommandRunner> HostEnvironment for SystemHostEnvironment<C> {
    fn install_ca_certificate(&self, contents: &str) -> Result<()> {
        self.ca_installer.install(contents)
    }

    fn update_hosts_entry(&self, hostname: &str, ip: &str) -> Result<()> {
        self.hosts_file.update(hostname, ip)
    }
}
