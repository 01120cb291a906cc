//! 网关连接统计 handlers
//!
//! - GET /gateways/{gid}/connection-stats - 读取合并后的统计
//! - PUT /gateways/{gid}/connection-stats - 按选择器写入（stats 缺省则清除）
//! - DELETE /gateways/{gid}/connection-stats - 清除全部分类
//!
//! 所有接口支持可选的 `tenant`（GET/DELETE 为查询参数，PUT 为请求体字段）。

use crate::AppState;
use crate::utils::{
    normalize_gateway_id, normalize_tenant, stats_from_dto, stats_to_dto, storage_error,
    update_from_dto,
};
use api_contract::{ApiResponse, SetConnectionStatsRequest};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{CallContext, GatewayIdentifiers};
use gs_telemetry::RequestIds;

#[derive(serde::Deserialize)]
pub struct GatewayPath {
    gateway_id: String,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct TenantQuery {
    tenant: Option<String>,
}

fn call_context(request_ids: Option<Extension<RequestIds>>) -> CallContext {
    match request_ids {
        Some(Extension(ids)) => CallContext::new(ids.request_id),
        None => CallContext::default(),
    }
}

fn gateway_ids(gateway_id: &str, tenant: Option<String>) -> Result<GatewayIdentifiers, Response> {
    let gateway_id = normalize_gateway_id(gateway_id)?;
    Ok(match normalize_tenant(tenant)? {
        Some(tenant) => GatewayIdentifiers::with_tenant(gateway_id, tenant),
        None => GatewayIdentifiers::new(gateway_id),
    })
}

/// 读取网关连接统计
pub async fn get_connection_stats(
    State(state): State<AppState>,
    Path(path): Path<GatewayPath>,
    Query(query): Query<TenantQuery>,
    request_ids: Option<Extension<RequestIds>>,
) -> Response {
    let ids = match gateway_ids(&path.gateway_id, query.tenant) {
        Ok(ids) => ids,
        Err(response) => return response,
    };
    let ctx = call_context(request_ids);
    match state.stats_store.get(&ctx, &ids).await {
        Ok(stats) => (
            StatusCode::OK,
            Json(ApiResponse::success(stats_to_dto(stats))),
        )
            .into_response(),
        Err(err) => storage_error(err),
    }
}

/// 写入网关连接统计
pub async fn set_connection_stats(
    State(state): State<AppState>,
    Path(path): Path<GatewayPath>,
    request_ids: Option<Extension<RequestIds>>,
    Json(req): Json<SetConnectionStatsRequest>,
) -> Response {
    let ids = match gateway_ids(&path.gateway_id, req.tenant) {
        Ok(ids) => ids,
        Err(response) => return response,
    };
    let ctx = call_context(request_ids);
    let stats = req.stats.map(stats_from_dto);
    let update = update_from_dto(req.update);
    match state
        .stats_store
        .set(&ctx, &ids, stats.as_ref(), update)
        .await
    {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::success(()))).into_response(),
        Err(err) => storage_error(err),
    }
}

/// 清除网关连接统计
pub async fn clear_connection_stats(
    State(state): State<AppState>,
    Path(path): Path<GatewayPath>,
    Query(query): Query<TenantQuery>,
    request_ids: Option<Extension<RequestIds>>,
) -> Response {
    let ids = match gateway_ids(&path.gateway_id, query.tenant) {
        Ok(ids) => ids,
        Err(response) => return response,
    };
    let ctx = call_context(request_ids);
    match state.stats_store.clear(&ctx, &ids).await {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::success(()))).into_response(),
        Err(err) => storage_error(err),
    }
}
