//! HTTP layer — request descriptors, outcome classification and the dispatcher.

pub mod executor;
pub mod request;
pub mod response;

#[cfg(feature = "http")]
pub mod client;

#[cfg(feature = "http")]
pub use client::AgileHttp;
pub use executor::RequestExecutor;
pub use request::{Method, QueryValue, RequestDescriptor};
pub use response::ResponseValue;
