//! Data models and schemas for the Skycast API.

pub mod api;

pub use api::*;
