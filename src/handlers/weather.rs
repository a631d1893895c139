//! Weather endpoint handler.

use crate::{
    models::{ErrorResponse, WeatherQuery},
    services::{UpstreamError, WeatherService},
};
use actix_web::{Error, HttpResponse, Result, web};
use paperclip::actix::api_v2_operation;

/// Weather endpoint
///
/// Returns current conditions and the daily forecast for a city, merged
/// from two concurrent upstream calls. The weather API key is held
/// server-side and never reaches the caller.
#[api_v2_operation(
    summary = "Weather Endpoint",
    description = "Returns current conditions and the daily forecast for a given city (e.g., ?city=Lisbon), fetched concurrently from the weather provider and merged into one payload."
)]
pub async fn weather(
    service: web::Data<WeatherService>,
    query: web::Query<WeatherQuery>,
) -> Result<HttpResponse, Error> {
    let city = match query.city.as_deref().map(str::trim) {
        Some(city) if !city.is_empty() => city,
        _ => {
            return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("City is missing")));
        }
    };

    match service.get_weather(city).await {
        Ok(bundle) => Ok(HttpResponse::Ok().json(bundle)),
        Err(err) => Ok(weather_error_response(city, err)),
    }
}

/// Maps an upstream failure to the response the caller is allowed to see.
/// Raw upstream detail is logged server-side only.
fn weather_error_response(city: &str, err: UpstreamError) -> HttpResponse {
    match err {
        UpstreamError::MissingApiKey => {
            tracing::error!("Weather request rejected: weather API key missing");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("API key is not configured on the server."))
        }
        UpstreamError::Status { status, body } => {
            tracing::error!(%city, status = %status, upstream_body = %body, "Weather API error");
            HttpResponse::BadGateway().json(ErrorResponse::new("Failed to fetch weather data"))
        }
        UpstreamError::InvalidBody(detail) => {
            tracing::error!(%city, %detail, "Weather API returned an unusable payload");
            HttpResponse::BadGateway().json(ErrorResponse::new(
                "Received an invalid response from the weather service.",
            ))
        }
        UpstreamError::Network(err) => {
            tracing::error!(%city, error = %err, "Weather API request failed");
            HttpResponse::BadGateway().json(ErrorResponse::new("Failed to fetch weather data"))
        }
        UpstreamError::Url(err) => {
            tracing::error!(%city, error = %err, "Could not build weather API URL");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("An internal error occurred."))
        }
    }
}
