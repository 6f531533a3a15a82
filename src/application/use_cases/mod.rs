/// Use cases module containing application business logic orchestration
mod request_products;
mod resolve_url;

pub use request_products::RequestProductsUseCase;
pub use resolve_url::ResolveUrlUseCase;
