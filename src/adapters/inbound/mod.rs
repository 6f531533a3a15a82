/// Inbound adapters - Protocols driving the application core
mod url_resolver_plugin;

pub use url_resolver_plugin::{read_request, render_response, PluginRequest, UrlResolverPlugin};
