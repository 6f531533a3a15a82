mod product_resolver;
mod subscription_resolver;

pub use product_resolver::ProductResolver;
pub use subscription_resolver::SubscriptionResolver;
