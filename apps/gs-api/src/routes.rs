//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 健康检查：/health
//! - 连接统计：/gateways/{id}/connection-stats
//! - 指标快照：/metrics

use super::AppState;
use super::handlers::*;
use axum::{Router, routing::get};

/// 创建 API 路由
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route(
            "/gateways/:gateway_id/connection-stats",
            get(get_connection_stats)
                .put(set_connection_stats)
                .delete(clear_connection_stats),
        )
        .route("/metrics", get(get_metrics))
}

/// 创建完整路由：/health 与 /api 前缀下的业务接口
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api", create_api_router())
}
