use clap::{Parser, Subcommand};
use container_suseconnect::application::dto::OutputFormat;
use std::path::Path;

const ZYPPER_SERVICE_BINARY: &str = "container-suseconnect-zypp";
const URL_RESOLVER_BINARY: &str = "susecloud";

const AFTER_HELP: &str = "\
This application can be used to retrieve basic metadata about SLES
related products and module extensions.

Use the 'list-modules' subcommand for listing available modules, where
their 'Identifier' can be used to enable them via the ADDITIONAL_MODULES
environment variable during container creation/run. When enabling multiple
modules the identifiers are expected to be comma-separated.

The 'zypper' subcommand runs the application as zypper plugin and is only
intended to use for debugging purposes.

Environment:
  ADDITIONAL_MODULES                     Comma-separated modules to enable
  SUSECONNECT_LOG_FILE                   Log file (default: /var/log/suseconnect.log)
  CONTAINER_BUILD_IP, CONTAINER_BUILD_PORT
                                         Address of containerbuild-regionsrv
  SCC_USERNAME, SCC_PASSWORD, SCC_SYSTEM_TOKEN
                                         Credentials used without SCCcredentials file
  SCC_URL, SCC_INSECURE                  Registration server used without SUSEConnect file";

/// Access zypper repositories from within containers
#[derive(Parser, Debug)]
#[command(name = "container-suseconnect")]
#[command(version)]
#[command(about = "Access zypper repositories from within containers", long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    /// Obsolete, credential errors are always logged
    #[arg(long = "log-credentials-errors", hide = true, global = true)]
    pub log_credentials_errors: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// List all available products with their repositories (default)
    #[command(name = "list-products", visible_alias = "lp")]
    ListProducts,
    /// List all available modules
    #[command(name = "list-modules", visible_alias = "lm")]
    ListModules,
    /// Dump the zypper repository definitions
    #[command(name = "zypper", visible_aliases = ["zypp", "z"])]
    Zypper,
    /// Run as zypper URL resolver plugin
    #[command(name = "susecloud")]
    Susecloud,
}

/// What a run does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Resolve the products and render them
    Products(OutputFormat),
    /// Answer a zypper URL resolver request on stdin
    ResolveUrl,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The subcommand wins; without one the binary name decides
    pub fn action(&self, program: &str) -> Action {
        match self.command {
            Some(Command::ListProducts) => Action::Products(OutputFormat::ProductList),
            Some(Command::ListModules) => Action::Products(OutputFormat::ModuleList),
            Some(Command::Zypper) => Action::Products(OutputFormat::ZypperRepos),
            Some(Command::Susecloud) => Action::ResolveUrl,
            None => default_action(program),
        }
    }
}

/// Action for a run without subcommand, based on the invoked binary name
pub fn default_action(program: &str) -> Action {
    match Path::new(program).file_name().and_then(|name| name.to_str()) {
        Some(ZYPPER_SERVICE_BINARY) => Action::Products(OutputFormat::ZypperRepos),
        Some(URL_RESOLVER_BINARY) => Action::ResolveUrl,
        _ => Action::Products(OutputFormat::ProductList),
    }
}
