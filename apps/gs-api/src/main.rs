//! Gateway Server 连接统计 HTTP API 与请求追踪 ID。

mod handlers;
mod routes;
mod utils;

use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Request},
    middleware::{self, Next},
    response::Response,
};
use gs_config::{AppConfig, StatsBackend};
use gs_storage::{
    ConnectionStatsRegistry, ConnectionStatsStore, InMemoryKvClient, KvClient, RedisKvClient,
    StatsKeys,
};
use gs_telemetry::{init_tracing, new_request_ids};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{Instrument, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub stats_store: Arc<dyn ConnectionStatsStore>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    let client: Arc<dyn KvClient> = match config.stats_backend {
        StatsBackend::Redis => {
            let client = RedisKvClient::connect(&config.redis_url).await?;
            info!("connection stats backed by redis at {}", config.redis_url);
            Arc::new(client)
        }
        StatsBackend::Memory => {
            warn!("connection stats backed by process memory, not shared across the cluster");
            Arc::new(InMemoryKvClient::new())
        }
    };
    let keys = StatsKeys::new(&config.redis_namespace)?;
    let registry =
        ConnectionStatsRegistry::new(client, keys).with_op_timeout(config.redis_op_timeout);
    let state = AppState {
        stats_store: Arc::new(registry),
    };

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    info!("http api listening on {}", config.http_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_app(state: AppState) -> Router {
    routes::create_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // 注入 request_id/trace_id
        .layer(middleware::from_fn(request_context))
}

async fn request_context(mut req: Request<Body>, next: Next) -> Response {
    // 生成 request_id 与 trace_id，并注入请求扩展与日志
    let ids = new_request_ids();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    req.extensions_mut().insert(ids.clone());

    let span = tracing::info_span!(
        "request",
        request_id = %ids.request_id,
        trace_id = %ids.trace_id,
        method = %method,
        path = %path
    );

    let mut response = next.run(req).instrument(span).await;
    response.headers_mut().insert(
        "x-request-id",
        HeaderValue::from_str(&ids.request_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response.headers_mut().insert(
        "x-trace-id",
        HeaderValue::from_str(&ids.trace_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let client = Arc::new(InMemoryKvClient::new());
        let registry =
            ConnectionStatsRegistry::new(client, StatsKeys::new("gs").expect("keys"));
        build_app(AppState {
            stats_store: Arc::new(registry),
        })
    }

    #[tokio::test]
    async fn responses_carry_request_ids() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        assert!(response.headers().contains_key("x-trace-id"));
    }

    #[tokio::test]
    async fn put_then_get_round_trip_over_http() {
        let app = test_app();
        let body = r#"{"stats":{"uplink":{"uplinkCount":5}},"update":{"up":true}}"#;
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/gateways/gateway-a/connection-stats")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/gateways/gateway-a/connection-stats")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(value["data"]["uplink"]["uplinkCount"], 5);
        assert_eq!(value["data"]["downlink"]["downlinkCount"], 0);
    }

    #[tokio::test]
    async fn unknown_gateway_is_404_over_http() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/gateways/gateway-b/connection-stats")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn metrics_snapshot_counts_lookups() {
        let app = test_app();
        app.clone()
            .oneshot(
                Request::builder()
                    .uri("/api/gateways/gateway-c/connection-stats")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/metrics")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert!(value["data"]["getNotFound"].as_u64().unwrap_or(0) >= 1);
    }
}
