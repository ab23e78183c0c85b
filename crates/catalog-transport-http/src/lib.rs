//! HTTP/JSON transport adapter for the catalog.
//! Exposes item CRUD and filter routes over an `ItemRepository`.

pub mod body;
mod error;
pub mod router;
pub mod server;

pub use body::{coerce_flag, CreateItemRequest, UpdateItemRequest};
pub use error::{ApiError, HttpTransportError};
pub use router::{build_router, AppState};
pub use server::HttpServer;
