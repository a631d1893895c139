//! OpenAPI specification generation and app factory.

use crate::{
    config::{AdviceConfig, MetricsConfig, WeatherConfig},
    handlers::{advice, advice_json_config, get_metrics, health, version, weather},
    middleware::{MetricsMiddleware, RequestIdMiddleware},
    services::{AdviceService, AppMetrics, WeatherService},
};
use actix_web::{App, HttpResponse};
use paperclip::actix::{OpenApiExt, api_v2_operation, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Skycast API</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 0;
            background: #eef3f7;
            color: #333;
        }
        .container {
            max-width: 800px;
            margin: 40px auto;
            padding: 20px;
            background: #fff;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
            border-radius: 8px;
        }
        h1 {
            text-align: center;
        }
        code {
            background: #eee;
            padding: 2px 6px;
            border-radius: 4px;
        }
        pre {
            background: #eee;
            padding: 20px;
            border-radius: 4px;
            overflow-x: auto;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Skycast API</h1>
        <ul>
            <li><code>GET /api/weather?city=Lisbon</code> &mdash; current conditions and daily forecast</li>
            <li><code>POST /api/advice</code> with <code>{"query": "..."}</code> &mdash; weather-aware advice</li>
        </ul>
        <pre id="openapi">Loading...</pre>
    </div>
    <script>
        fetch('/api/spec/v2')
            .then(response => response.json())
            .then(data => {
                document.getElementById('openapi').textContent = JSON.stringify(data, null, 2);
            })
            .catch(error => {
                document.getElementById('openapi').textContent = 'Error loading spec: ' + error;
            });
    </script>
</body>
</html>"#;

/// Index page
///
/// Serves a small HTML landing page listing the endpoints and rendering
/// the OpenAPI specification.
#[api_v2_operation(
    summary = "Index Page",
    description = "Returns an HTML landing page that lists the endpoints and renders the OpenAPI specification."
)]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(INDEX_HTML)
}

/// Creates the shared OpenAPI specification for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Skycast API".into(),
            version: "1.0.0".into(),
            description: Some(
                "A small proxy API for a weather frontend. It keeps third-party API keys \
                server-side and reshapes upstream responses for the browser.\n\n\
                ## Endpoints\n\
                - `GET /api/weather?city=<name>`: current conditions and daily forecast for a \
                city, fetched concurrently from the weather provider and merged into \
                `{\"current\": ..., \"daily\": ...}`.\n\
                - `POST /api/advice` with `{\"query\": \"...\"}`: weather-aware advice generated \
                by an AI model, returned as `{\"advice\": \"<html fragment>\"}`.\n\
                \n\
                ## Errors\n\
                Failures always carry a JSON body with a single `error` string field. Upstream \
                error detail is logged server-side and never forwarded to the caller.\n\
                \n\
                ## Configuration\n\
                - `GEMINI_API_KEY`, `GEMINI_BASE_URL`, `GEMINI_MODEL`: generative-text upstream\n\
                - `WEATHER_API_KEY`, `WEATHER_BASE_URL`, `WEATHER_UNITS`: weather upstream\n\
                - `METRICS_ENABLED`: toggle for the Prometheus endpoint"
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates the application with shared configuration
///
/// This factory wires middleware, configuration, upstream services, and
/// routes. It is used both by the server binary and by integration tests so
/// the two never drift apart.
pub fn create_base_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let metrics_config = MetricsConfig::from_env();
    let metrics = AppMetrics::new().expect("Failed to create metrics");
    let advice_service = AdviceService::new(AdviceConfig::from_env());
    let weather_service = WeatherService::new(WeatherConfig::from_env());

    App::new()
        .wrap(RequestIdMiddleware)
        .wrap(MetricsMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(advice_json_config())
        .app_data(web::Data::new(metrics_config))
        .app_data(web::Data::new(metrics))
        .app_data(web::Data::new(advice_service))
        .app_data(web::Data::new(weather_service))
        .service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/advice").route(web::post().to(advice)))
        .service(web::resource("/api/weather").route(web::get().to(weather)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
