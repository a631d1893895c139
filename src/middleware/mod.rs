//! Custom middleware for cross-cutting concerns.

pub mod metrics;
pub mod request_id;

pub use metrics::*;
pub use request_id::*;
