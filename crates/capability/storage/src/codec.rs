//! 连接统计编解码（JSON）。

use domain::GatewayConnectionStats;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("encode: {0}")]
    Encode(String),
    #[error("decode: {0}")]
    Decode(String),
}

pub fn encode(stats: &GatewayConnectionStats) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(stats).map_err(|err| CodecError::Encode(err.to_string()))
}

pub fn decode(data: &[u8]) -> Result<GatewayConnectionStats, CodecError> {
    serde_json::from_slice(data).map_err(|err| CodecError::Decode(err.to_string()))
}
