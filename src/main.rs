mod cli;

use cli::{Action, Args};
use container_suseconnect::adapters::inbound::UrlResolverPlugin;
use container_suseconnect::adapters::outbound::filesystem::{ProductFileReader, StdoutPresenter};
use container_suseconnect::adapters::outbound::network::{RegionServerClient, SccClientFactory};
use container_suseconnect::adapters::outbound::system::SystemHostEnvironment;
use container_suseconnect::application::dto::{OutputFormat, ProductsRequest};
use container_suseconnect::application::factories::FormatterFactory;
use container_suseconnect::application::use_cases::{RequestProductsUseCase, ResolveUrlUseCase};
use container_suseconnect::ports::outbound::OutputPresenter;
use container_suseconnect::shared::error::ExitCode;
use container_suseconnect::shared::logging::init_logging;
use container_suseconnect::shared::Result;
use std::io;
use std::process;

fn main() {
    // Parse command-line arguments (clap exits with code 2 on errors)
    let args = Args::parse_args();
    let program = std::env::args().next().unwrap_or_default();

    init_logging();
    if args.log_credentials_errors {
        log::debug!("--log-credentials-errors is obsolete, credential errors are always logged");
    }

    if let Err(e) = run(args.action(&program)) {
        eprintln!("{}", e);
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(action: Action) -> Result<()> {
    match action {
        Action::Products(format) => render_products(format),
        Action::ResolveUrl => resolve_url(),
    }
}

fn render_products(format: OutputFormat) -> Result<()> {
    // Create adapters (Dependency Injection)
    let use_case = RequestProductsUseCase::new(
        RegionServerClient::from_env(),
        SystemHostEnvironment::new(),
        ProductFileReader::new(),
        SccClientFactory,
    );

    let response = use_case.execute(&ProductsRequest::default())?;

    let formatter = FormatterFactory::create(format)?;
    StdoutPresenter::new().present(&formatter.format(&response.products))
}

fn resolve_url() -> Result<()> {
    let use_case = ResolveUrlUseCase::new(RegionServerClient::from_env(), SystemHostEnvironment::new());
    let plugin = UrlResolverPlugin::new(use_case, StdoutPresenter::new());
    plugin.run(io::stdin().lock())
}
