use crate::shared::error::{logged_error, SuseConnectError};
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

pub const HOSTS_FILE: &str = "/etc/hosts";

/// HostsFile adapter pinning the registration server name to its address
pub struct HostsFile {
    path: PathBuf,
}

impl HostsFile {
    pub fn new() -> Self {
        Self::with_path(PathBuf::from(HOSTS_FILE))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Maps `hostname` (and its short name) to `ip`
    ///
    /// An entry for `hostname` pointing elsewhere is rewritten, a missing one
    /// appended. Every other line is kept as it is.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or written
    pub fn update(&self, hostname: &str, ip: &str) -> Result<()> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            logged_error(SuseConnectError::RegionServer(format!(
                "can't read {} file: {}",
                self.path.display(),
                e
            )))
        })?;

        let updated = update_hosts_content(&content, hostname, ip);
        if updated == content {
            return Ok(());
        }

        fs::write(&self.path, updated).map_err(|e| {
            logged_error(SuseConnectError::RegionServer(format!(
                "can't write {} file: {}",
                self.path.display(),
                e
            )))
        })
    }
}

impl Default for HostsFile {
    fn default() -> Self {
        Self::new()
    }
}

fn hosts_entry(hostname: &str, ip: &str) -> String {
    let short = hostname.split('.').next().unwrap_or(hostname);
    format!("{} {} {}", ip, hostname, short)
}

/// Returns the hosts file content with `hostname` resolving to `ip`
pub fn update_hosts_content(content: &str, hostname: &str, ip: &str) -> String {
    let mut found = false;
    let mut output = String::with_capacity(content.len() + 64);

    for line in content.lines() {
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next()) {
            (Some(address), Some(name)) if name == hostname => {
                found = true;
                if address == ip {
                    output.push_str(line);
                } else {
                    log::info!("updating hosts entry for {}", hostname);
                    output.push_str(&hosts_entry(hostname, ip));
                }
            }
            _ => output.push_str(line),
        }
        output.push('\n');
    }

    if !found {
        output.push_str(&hosts_entry(hostname, ip));
        output.push('\n');
    }

    output
}
