//! 단순 메시지 응답 DTO

use serde::Serialize;

/// 처리 결과 메시지만 담는 응답 (삭제 성공 등)
#[derive(Debug, Clone, Serialize)]
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
