use std::net::SocketAddr;

use dotenvy::dotenv;
use http::header::{HeaderValue, CACHE_CONTROL};
use sqlx::sqlite::SqlitePoolOptions;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use rollcall::config::AppConfig;
use rollcall::database::gateway::Gateway;
use rollcall::web;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt::init();

    // 2. Resolve configuration and connect to the store
    let config = AppConfig::from_env();
    println!("Connecting to database: {}", config.database_url);

    let pool = SqlitePoolOptions::new()
        .connect(&config.database_url)
        .await
        .expect("could not connect to the database");

    let gateway = Gateway::new(pool, &config);

    // 3. Build the application
    let app = web::router(gateway)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new());

    // 4. Start the server (with fallback port)
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("could not parse host/port");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!(
                "⚠️  Could not bind {}: {}. Trying fallback {}:{}",
                addr,
                e,
                config.host,
                config.port + 1
            );
            let fallback: SocketAddr = format!("{}:{}", config.host, config.port + 1)
                .parse()
                .expect("could not parse fallback address");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("could not bind fallback port")
        }
    };

    let bound_addr = listener.local_addr().unwrap();
    println!("🚀 Attendance API listening on http://{}", bound_addr);

    axum::serve(listener, app).await.unwrap();
}
