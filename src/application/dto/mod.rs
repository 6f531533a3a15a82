/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod products_request;
mod products_response;
mod resolved_url;

pub use output_format::OutputFormat;
pub use products_request::ProductsRequest;
pub use products_response::ProductsResponse;
pub use resolved_url::ResolvedUrl;
