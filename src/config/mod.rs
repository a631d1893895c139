//! Configuration structures and loading utilities.
//!
//! Each upstream dependency gets its own config struct with environment
//! loading and defaults. Secrets are held as `Option<String>` so the
//! missing-key guard stays explicit, and services receive their config by
//! value at construction; nothing reads ambient environment state while a
//! request is being handled.

pub mod advice;
pub mod metrics;
pub mod weather;

pub use advice::*;
pub use metrics::*;
pub use weather::*;
