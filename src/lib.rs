//! container-suseconnect - Access zypper repositories from within containers
//!
//! This library reads the SUSE subscription credentials of the host (mounted
//! files or the containerbuild-regionsrv sidecar), asks the registration
//! server which products and repositories the installed product is entitled
//! to, and renders them for zypper or for humans.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`registration`): Credentials, products and the resolution algorithms
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Error types, result alias and logging setup
//!
//! # Example
//!
//! ```no_run
//! use container_suseconnect::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create use case with injected adapters
//! let use_case = RequestProductsUseCase::new(
//!     RegionServerClient::from_env(),
//!     SystemHostEnvironment::new(),
//!     ProductFileReader::new(),
//!     SccClientFactory,
//! );
//!
//! // Execute
//! let response = use_case.execute(&ProductsRequest::default())?;
//!
//! // Format output
//! let formatter = FormatterFactory::create(OutputFormat::ZypperRepos)?;
//! StdoutPresenter::new().present(&formatter.format(&response.products))?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod registration;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::UrlResolverPlugin;
    pub use crate::adapters::outbound::filesystem::{
        read_configuration, ProductFileReader, ProductMarkerSelector, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        ModuleListFormatter, ProductListFormatter, ZypperRepoFormatter,
    };
    pub use crate::adapters::outbound::network::{RegionServerClient, SccClient, SccClientFactory};
    pub use crate::adapters::outbound::system::{
        DefaultModuleSelector, EnvModuleSelector, SystemHostEnvironment,
    };
    pub use crate::application::dto::{OutputFormat, ProductsRequest, ProductsResponse, ResolvedUrl};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::{RequestProductsUseCase, ResolveUrlUseCase};
    pub use crate::ports::inbound::{ProductQueryPort, UrlResolutionPort};
    pub use crate::ports::outbound::{
        Configuration, HostEnvironment, InstalledProductReader, ModuleSelector, OutputPresenter,
        ProductFormatter, ProductQuery, RegionServer, RegistrationServer,
        RegistrationServerFactory, ServerResponse,
    };
    pub use crate::registration::domain::{
        ContainerBuildConfig, Credentials, InstalledProduct, Product, RegistrationEndpoint,
        Repository, Subscription,
    };
    pub use crate::registration::services::{ProductResolver, SubscriptionResolver};
    pub use crate::shared::error::SuseConnectError;
    pub use crate::shared::Result;
}
