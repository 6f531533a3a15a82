pub mod credentials;
pub mod endpoint;
pub mod installed_product;
pub mod product;
pub mod region_config;
pub mod subscription;

pub use credentials::{Credentials, CREDENTIALS_LOCATIONS};
pub use endpoint::{RegistrationEndpoint, ENDPOINT_LOCATIONS};
pub use installed_product::InstalledProduct;
pub use product::{Product, Repository};
pub use region_config::ContainerBuildConfig;
pub use subscription::Subscription;
