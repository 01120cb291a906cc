//! 内存存储实现模块
//!
//! 仅用于测试和单机演示。
//!
//! 包含以下实现：
//! - KvClient: InMemoryKvClient

pub mod kv;

pub use kv::*;
