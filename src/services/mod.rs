//! Business logic and service layer modules.
//!
//! Each upstream dependency gets a service that owns its HTTP client and
//! configuration; handlers stay thin request/response translators.

pub mod advice;
pub mod metrics;
pub mod upstream;
pub mod weather;

pub use advice::*;
pub use metrics::*;
pub use upstream::*;
pub use weather::*;
