//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use super::response::MessageResponse;

/// 核心错误类型
#[derive(Debug)]
pub enum CoreError {
    /// 必填字段缺失或非法
    Validation(String),
    /// 引用的 id 不存在
    NotFound(String),
    /// 其他内部错误
    Internal(String),
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            // 校验和内部错误对外统一为通用 500，细节只进日志
            CoreError::Validation(detail) => {
                error!("校验失败: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong on the server!".to_string(),
                )
            }
            CoreError::Internal(detail) => {
                error!("内部错误: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong on the server!".to_string(),
                )
            }
        };

        (status, axum::Json(MessageResponse::new(message))).into_response()
    }
}
