//! Client for the BookMeHere backend
//!
//! Every response uses the `{success, data?, error?}` envelope. Non-2xx
//! answers still carry it, so the transport hands back status and body
//! unchanged and [`ApiClient`] decides what counts as a failure.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod transport;

pub use client::{ApiClient, LoginKind};
pub use error::ApiError;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
