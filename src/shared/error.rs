use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the requested action completed
    Success = 0,
    /// Application error (credentials, network, registration server, ...)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors.
///
/// The `Display` output of every variant is the raw message, so the text
/// written to the log file and the text shown on the terminal are identical.
#[derive(Debug, Error)]
pub enum SuseConnectError {
    /// None of the candidate configuration files exist and the
    /// configuration could not fall back to a default.
    #[error("Warning: SUSE credentials not found: {} - automatic handling of repositories not done.", format_locations(.locations))]
    CredentialsNotFound { locations: Vec<PathBuf> },

    /// Credentials were found but are incomplete.
    #[error("{0}")]
    InvalidCredentials(String),

    #[error("Can't open {} file: {details}", .path.display())]
    ConfigOpen { path: PathBuf, details: String },

    #[error("Can't parse line: {line}")]
    ConfigParse { line: String },

    #[error("Error when scanning configuration: {0}")]
    ConfigScan(String),

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    InstalledProduct(String),

    /// The registration server answered with something unexpected.
    #[error("{0}")]
    SubscriptionServer(String),

    /// The subscription data itself is unusable.
    #[error("{0}")]
    Subscription(String),

    #[error("{0}")]
    Repository(String),

    /// Talking to the containerbuild-regionsrv sidecar failed.
    #[error("{0}")]
    RegionServer(String),

    /// The zypper URL resolver protocol could not be served.
    #[error("{0}")]
    UrlResolver(String),
}

fn format_locations(locations: &[PathBuf]) -> String {
    let joined = locations
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]", joined)
}

/// Logs the error once at the point of detection and hands it back as an
/// `anyhow::Error` for the caller to propagate.
pub fn logged_error(err: SuseConnectError) -> anyhow::Error {
    log::error!("{}", err);
    err.into()
}
