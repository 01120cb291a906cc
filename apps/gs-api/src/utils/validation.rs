//! 输入验证辅助函数
//!
//! - normalize_gateway_id：网关 ID 必填且符合标识规则
//! - normalize_tenant：租户可选，提供时同样符合标识规则
//!
//! 标识规则：3~36 个字符，仅小写字母、数字与 `-`，
//! 首尾不能是 `-`，不能出现连续的 `--`。

use crate::utils::response::bad_request_error;
use axum::response::Response;

const ID_MIN_LEN: usize = 3;
const ID_MAX_LEN: usize = 36;

fn is_valid_id(value: &str) -> bool {
    if value.len() < ID_MIN_LEN || value.len() > ID_MAX_LEN {
        return false;
    }
    if value.starts_with('-') || value.ends_with('-') || value.contains("--") {
        return false;
    }
    value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// 验证网关 ID
pub fn normalize_gateway_id(value: &str) -> Result<String, Response> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(bad_request_error("gateway_id required"));
    }
    if !is_valid_id(trimmed) {
        return Err(bad_request_error(format!("invalid gateway_id: {trimmed}")));
    }
    Ok(trimmed.to_string())
}

/// 验证可选租户，空字符串视为未提供
pub fn normalize_tenant(value: Option<String>) -> Result<Option<String>, Response> {
    let Some(value) = value else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !is_valid_id(trimmed) {
        return Err(bad_request_error(format!("invalid tenant: {trimmed}")));
    }
    Ok(Some(trimmed.to_string()))
}
