//! studyhub-client — `CatalogApi` implementations.
//!
//! [`http::HttpCatalogApi`] talks to the real backend over REST;
//! [`mock::MockCatalogApi`] is an in-memory double for tests and offline
//! development.

pub mod http;
pub mod mock;

pub use http::HttpCatalogApi;
pub use mock::MockCatalogApi;
