//! Synchronous client core for the items API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making this crate fully deterministic and
//! testable.
//!
//! # Design
//! - `ItemsClient` is stateless — it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.
//! - Any non-2xx response parses to an error, matching the browser
//!   adapter's promise-rejection behavior.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::ItemsClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateItem, Item, UpdateItem};
