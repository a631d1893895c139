use actix_web::HttpServer;
use skycast_api::create_base_app;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Log filtering follows RUST_LOG (e.g. RUST_LOG=info)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    println!("Server running at http://{bind_addr}");

    HttpServer::new(|| create_base_app()).bind(&bind_addr)?.run().await
}
