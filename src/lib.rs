//! Skycast API - a proxy API for a weather frontend
//!
//! Two stateless endpoints sit between the browser and third-party HTTP
//! APIs, injecting server-held secret keys and reshaping responses:
//! - `/api/weather` merges current conditions and the daily forecast from
//!   two concurrent weather-provider calls
//! - `/api/advice` forwards a free-text query to a generative-text model
//!   and returns the generated advice
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `models/` - Data structures and request/response models
//! - `handlers/` - HTTP request handlers for each endpoint
//! - `middleware/` - Custom middleware for cross-cutting concerns
//! - `services/` - Upstream API clients and business logic
//! - `config/` - Configuration structures and environment loading
//!
//! ## Quick Start
//!
//! ```no_run
//! use skycast_api::create_base_app;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let app = create_base_app();
//!     // Configure and run the server
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

// Re-export commonly used types and functions for convenience
pub use config::{AdviceConfig, MetricsConfig, WeatherConfig};
pub use handlers::{
    advice, advice_json_config, create_base_app, create_openapi_spec, get_metrics, health, index,
    version, weather,
};
pub use middleware::{MetricsMiddleware, RequestIdMiddleware};
pub use models::{
    AdviceRequest, AdviceResponse, ErrorResponse, HealthResponse, VersionResponse, WeatherBundle,
    WeatherQuery,
};
pub use services::{AdviceService, AppMetrics, UpstreamError, WeatherService, gather, get_json};
