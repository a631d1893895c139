//! Upstream-facing behavior tests.
//!
//! A loopback actix server stands in for the third-party APIs, and the
//! services are pointed at it through their injected configuration. This
//! covers status pass-through, fail-fast fan-out, payload merging, and the
//! guarantee that raw upstream detail never reaches the caller.

use actix_web::{App, HttpResponse, HttpServer, http::StatusCode, test, web};
use serde_json::{Value, json};
use skycast_api::{AdviceConfig, AdviceService, WeatherConfig, WeatherService, advice, advice_json_config, weather};
use std::net::TcpListener;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Starts a stub upstream on its own thread that answers every request with
/// the given status and JSON body, counting hits. Returns the base URL.
fn spawn_upstream_stub(status: u16, body: Value, hits: Arc<AtomicUsize>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        actix_web::rt::System::new().block_on(async move {
            HttpServer::new(move || {
                let hits = hits.clone();
                let body = body.clone();
                App::new().default_service(web::to(move || {
                    let hits = hits.clone();
                    let body = body.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        HttpResponse::build(StatusCode::from_u16(status).unwrap()).json(body)
                    }
                }))
            })
            .listen(listener)
            .unwrap()
            .workers(1)
            .run()
            .await
        })
    });

    format!("http://{addr}")
}

/// Starts a stub weather provider with separate `/current` and `/forecast`
/// responses, counting hits across both. Returns the base URL.
fn spawn_weather_stub(
    current: (u16, Value),
    forecast: (u16, Value),
    hits: Arc<AtomicUsize>,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        actix_web::rt::System::new().block_on(async move {
            HttpServer::new(move || {
                let current_hits = hits.clone();
                let forecast_hits = hits.clone();
                let (current_status, current_body) = current.clone();
                let (forecast_status, forecast_body) = forecast.clone();

                App::new()
                    .route(
                        "/current",
                        web::get().to(move || {
                            let hits = current_hits.clone();
                            let body = current_body.clone();
                            async move {
                                hits.fetch_add(1, Ordering::SeqCst);
                                HttpResponse::build(
                                    StatusCode::from_u16(current_status).unwrap(),
                                )
                                .json(body)
                            }
                        }),
                    )
                    .route(
                        "/forecast",
                        web::get().to(move || {
                            let hits = forecast_hits.clone();
                            let body = forecast_body.clone();
                            async move {
                                hits.fetch_add(1, Ordering::SeqCst);
                                HttpResponse::build(
                                    StatusCode::from_u16(forecast_status).unwrap(),
                                )
                                .json(body)
                            }
                        }),
                    )
            })
            .listen(listener)
            .unwrap()
            .workers(1)
            .run()
            .await
        })
    });

    format!("http://{addr}")
}

fn advice_service(base_url: String) -> web::Data<AdviceService> {
    web::Data::new(AdviceService::new(AdviceConfig {
        api_key: Some("test-key".to_string()),
        base_url,
        model: "guide-test".to_string(),
    }))
}

fn weather_service(base_url: String) -> web::Data<WeatherService> {
    web::Data::new(WeatherService::new(WeatherConfig {
        api_key: Some("test-key".to_string()),
        base_url,
        units: "metric".to_string(),
    }))
}

// --- Advice endpoint ---

#[actix_web::test]
async fn test_advice_success_returns_exact_body() {
    let hits = Arc::new(AtomicUsize::new(0));
    let upstream = json!({
        "candidates": [{
            "content": { "parts": [{ "text": "<h3>Hi</h3>" }] }
        }]
    });
    let base_url = spawn_upstream_stub(200, upstream, hits.clone());

    let app = test::init_service(
        App::new()
            .app_data(advice_json_config())
            .app_data(advice_service(base_url))
            .route("/api/advice", web::post().to(advice)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/advice")
        .set_json(json!({ "query": "rainy day in Porto" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "advice": "<h3>Hi</h3>" }));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn test_advice_upstream_status_is_passed_through_without_detail() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base_url = spawn_upstream_stub(
        503,
        json!({ "detail": "quota exhausted for project secret-project-42" }),
        hits,
    );

    let app = test::init_service(
        App::new()
            .app_data(advice_json_config())
            .app_data(advice_service(base_url))
            .route("/api/advice", web::post().to(advice)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/advice")
        .set_json(json!({ "query": "anything" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // The upstream's own status is surfaced, its body is not
    assert_eq!(resp.status(), 503);

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).unwrap();
    assert!(body_str.contains("error"));
    assert!(!body_str.contains("secret-project-42"));
}

#[actix_web::test]
async fn test_advice_invalid_upstream_payload() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base_url = spawn_upstream_stub(200, json!({ "candidates": [] }), hits);

    let app = test::init_service(
        App::new()
            .app_data(advice_json_config())
            .app_data(advice_service(base_url))
            .route("/api/advice", web::post().to(advice)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/advice")
        .set_json(json!({ "query": "anything" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("error").is_some());
}

#[actix_web::test]
async fn test_advice_validation_failures_issue_no_upstream_call() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base_url = spawn_upstream_stub(200, json!({}), hits.clone());

    let app = test::init_service(
        App::new()
            .app_data(advice_json_config())
            .app_data(advice_service(base_url))
            .service(web::resource("/api/advice").route(web::post().to(advice))),
    )
    .await;

    // Wrong method
    let req = test::TestRequest::get().uri("/api/advice").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 405);

    // Missing query
    let req = test::TestRequest::post()
        .uri("/api/advice")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

// --- Weather endpoint ---

#[actix_web::test]
async fn test_weather_success_merges_payloads() {
    let hits = Arc::new(AtomicUsize::new(0));
    let current = json!({ "temperature": { "current": 21 }, "condition": "Clear" });
    let daily = json!([{ "time": 1754265600, "temperature": { "maximum": 24 } }]);
    let forecast = json!({ "daily": daily, "city": "Lisbon" });

    let base_url = spawn_weather_stub((200, current.clone()), (200, forecast), hits.clone());

    let app = test::init_service(
        App::new()
            .app_data(weather_service(base_url))
            .route("/api/weather", web::get().to(weather)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/weather?city=Lisbon")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    // The body is exactly the merged payloads; the forecast wrapper fields
    // outside `daily` are dropped
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "current": current, "daily": daily }));
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[actix_web::test]
async fn test_weather_forecast_failure_yields_bad_gateway() {
    let hits = Arc::new(AtomicUsize::new(0));
    let current = json!({ "temperature": { "current": 21 } });
    let base_url = spawn_weather_stub(
        (200, current),
        (500, json!({ "detail": "forecast backend down" })),
        hits,
    );

    let app = test::init_service(
        App::new()
            .app_data(weather_service(base_url))
            .route("/api/weather", web::get().to(weather)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/weather?city=Lisbon")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 502);

    // No partial data: the body is only the error object
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("error").is_some());
    assert!(body.get("current").is_none());
    assert!(body.get("daily").is_none());
}

#[actix_web::test]
async fn test_weather_current_failure_yields_bad_gateway() {
    let hits = Arc::new(AtomicUsize::new(0));
    let forecast = json!({ "daily": [] });
    let base_url = spawn_weather_stub((404, json!({ "error": "no such city" })), (200, forecast), hits);

    let app = test::init_service(
        App::new()
            .app_data(weather_service(base_url))
            .route("/api/weather", web::get().to(weather)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/weather?city=Nowhere")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 502);
}

#[actix_web::test]
async fn test_weather_missing_daily_field_yields_bad_gateway() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base_url = spawn_weather_stub(
        (200, json!({ "temperature": { "current": 21 } })),
        (200, json!({ "hourly": [] })),
        hits,
    );

    let app = test::init_service(
        App::new()
            .app_data(weather_service(base_url))
            .route("/api/weather", web::get().to(weather)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/weather?city=Lisbon")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 502);

    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("error").is_some());
}

#[actix_web::test]
async fn test_weather_validation_failures_issue_no_upstream_calls() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base_url = spawn_weather_stub(
        (200, json!({})),
        (200, json!({ "daily": [] })),
        hits.clone(),
    );

    let app = test::init_service(
        App::new()
            .app_data(weather_service(base_url))
            .service(web::resource("/api/weather").route(web::get().to(weather))),
    )
    .await;

    // Wrong method
    let req = test::TestRequest::post().uri("/api/weather").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 405);

    // Missing city
    let req = test::TestRequest::get().uri("/api/weather").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    assert_eq!(hits.load(Ordering::SeqCst), 0);
}
