//! Advice endpoint handler.

use crate::{
    models::{AdviceRequest, AdviceResponse, ErrorResponse},
    services::{AdviceService, UpstreamError},
};
use actix_web::{Error, HttpResponse, Result, error::InternalError, http::StatusCode, web};
use paperclip::actix::api_v2_operation;

/// Advice endpoint
///
/// Accepts a free-text query and returns weather-aware advice generated by
/// an AI model, formatted as a simple HTML fragment. The model API key is
/// held server-side and never reaches the caller.
#[api_v2_operation(
    summary = "Advice Endpoint",
    description = "Generates practical, weather-aware advice for a free-text query. The response is a simple HTML fragment using <h3> and <ul>/<li> elements."
)]
pub async fn advice(
    service: web::Data<AdviceService>,
    body: web::Json<AdviceRequest>,
) -> Result<HttpResponse, Error> {
    let query = body.query.trim();
    if query.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Query is missing.")));
    }

    match service.get_advice(query).await {
        Ok(advice) => Ok(HttpResponse::Ok().json(AdviceResponse { advice })),
        Err(err) => Ok(advice_error_response(err)),
    }
}

/// JSON extractor configuration for the advice endpoint, so malformed or
/// incomplete bodies produce the API's uniform error shape instead of the
/// framework default.
pub fn advice_json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse::new("Query is missing."));
        InternalError::from_response(err, response).into()
    })
}

/// Maps an upstream failure to the response the caller is allowed to see.
/// Raw upstream detail is logged server-side only.
fn advice_error_response(err: UpstreamError) -> HttpResponse {
    match err {
        UpstreamError::MissingApiKey => {
            tracing::error!("Advice request rejected: generative-text API key missing");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("API key is not configured on the server."))
        }
        UpstreamError::Status { status, body } => {
            tracing::error!(status = %status, upstream_body = %body, "Generative-text API error");
            let status =
                StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(status)
                .json(ErrorResponse::new("Failed to get advice from the AI model."))
        }
        UpstreamError::InvalidBody(detail) => {
            tracing::error!(%detail, "Generative-text API returned an unusable payload");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Received an invalid response from the AI model.",
            ))
        }
        UpstreamError::Network(err) => {
            tracing::error!(error = %err, "Generative-text API request failed");
            HttpResponse::BadGateway()
                .json(ErrorResponse::new("Failed to get advice from the AI model."))
        }
        UpstreamError::Url(err) => {
            tracing::error!(error = %err, "Could not build generative-text API URL");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("An internal error occurred."))
        }
    }
}
