//! 核心响应处理模块

use serde::{Deserialize, Serialize};

/// 带 `message` 字段的通用响应体，用于删除确认和错误响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
