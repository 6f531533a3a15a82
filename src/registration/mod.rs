//! Registration domain: host credentials, the registration endpoint, the
//! installed product and the product/repository tree served by SCC or an
//! RMT/SMT mirror, plus the resolvers walking the server responses.
pub mod domain;
pub mod services;
