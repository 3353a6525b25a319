//! External service interactions
//!
//! - `EntityService` - CRUD contract for one entity type
//! - `HttpEntityService` - JSON-over-HTTP client for the inventory API
//! - `InMemoryEntityService` - in-process store for demo mode
//! - `RequestRunner` - runs service calls off the UI thread

pub mod client;
pub mod http;
pub mod memory;
pub mod request_runner;

pub use client::{EntityService, ServiceError};
pub use http::HttpEntityService;
pub use memory::InMemoryEntityService;
pub use request_runner::{Reply, Request, RequestRunner};
