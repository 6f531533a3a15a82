use crate::shared::error::{logged_error, SuseConnectError};
use crate::shared::Result;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;
use std::process::Command;

pub const CA_FILE: &str = "/etc/pki/trust/anchors/containerbuild-regionsrv.pem";
pub const CHECKSUM_FILE: &str = "/etc/pki/containerbuild-regionsrv.sha256";

/// Runs the command refreshing the system trust store
pub trait CommandRunner {
    fn run(&self) -> Result<()>;
}

/// Runs `update-ca-certificates`
#[derive(Debug, Default, Clone, Copy)]
pub struct UpdateCaCertificates;

impl CommandRunner for UpdateCaCertificates {
    fn run(&self) -> Result<()> {
        let status = Command::new("update-ca-certificates").status().map_err(|e| {
            logged_error(SuseConnectError::RegionServer(format!(
                "Failed to run update-ca-certificates: {}",
                e
            )))
        })?;

        if !status.success() {
            return Err(logged_error(SuseConnectError::RegionServer(format!(
                "update-ca-certificates failed: {}",
                status
            ))));
        }
        Ok(())
    }
}

/// Installs the CA certificate of the registration server into the trust
/// store, skipping the work when the recorded checksum already matches
pub struct CaCertificateInstaller<C: CommandRunner> {
    runner: C,
    ca_path: PathBuf,
    checksum_path: PathBuf,
}

impl CaCertificateInstaller<UpdateCaCertificates> {
    pub fn new() -> Self {
        Self::with_paths(
            UpdateCaCertificates,
            PathBuf::from(CA_FILE),
            PathBuf::from(CHECKSUM_FILE),
        )
    }
}

impl Default for CaCertificateInstaller<UpdateCaCertificates> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CommandRunner> CaCertificateInstaller<C> {
    pub fn with_paths(runner: C, ca_path: PathBuf, checksum_path: PathBuf) -> Self {
        Self {
            runner,
            ca_path,
            checksum_path,
        }
    }

    fn update_needed(&self, checksum: &str) -> bool {
        match fs::read_to_string(&self.checksum_path) {
            Ok(recorded) => recorded.trim() != checksum,
            Err(_) => true,
        }
    }

    /// Writes `contents` as CA file and refreshes the trust store
    ///
    /// # Errors
    /// Returns an error if the CA file cannot be written or the refresh
    /// command fails. The checksum is only recorded after a successful
    /// refresh.
    pub fn install(&self, contents: &str) -> Result<()> {
        let checksum = checksum(contents);
        if !self.update_needed(&checksum) {
            log::debug!("CA certificate is up to date");
            return Ok(());
        }

        // Stale files must not survive a failed update
        let _ = fs::remove_file(&self.checksum_path);
        let _ = fs::remove_file(&self.ca_path);

        fs::write(&self.ca_path, contents).map_err(|e| {
            logged_error(SuseConnectError::RegionServer(format!(
                "Can't write CA file {}: {}",
                self.ca_path.display(),
                e
            )))
        })?;

        self.runner.run()?;

        if let Err(e) = fs::write(&self.checksum_path, format!("{}\n", checksum)) {
            log::warn!(
                "Can't record CA checksum in {}: {}",
                self.checksum_path.display(),
                e
            );
        }

        log::info!("Installed CA certificate {}", self.ca_path.display());
        Ok(())
    }
}

fn checksum(contents: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contents.as_bytes());
    hex::encode(hasher.finalize())
}
