//! 对外错误码定义
//!
//! 错误码格式: XXYY
//! - XX: 错误类别 (01=语法, 03=验证, 09=系统)
//! - YY: 具体错误

use serde::{Deserialize, Serialize};

/// 对外错误码 - 用于客户端响应
///
/// 错误码一旦定义不应随意修改，调用方可能依赖具体数值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // ==================== 语法错误 (01xx) ====================
    /// 解析错误
    ParseError = 101,
    /// 缺少必要参数
    MissingParameter = 103,

    // ==================== 验证错误 (03xx) ====================
    /// 通用验证错误
    ValidationError = 300,
    /// 类型错误
    TypeError = 301,
    /// 无效输入
    InvalidInput = 302,
    /// 约束违反
    ConstraintViolation = 303,

    // ==================== 系统错误 (09xx) ====================
    /// 内部错误
    InternalError = 900,
}

impl ErrorCode {
    /// 获取错误码的 i32 值
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// 获取错误类别
    pub fn category(&self) -> ErrorCategory {
        match self.as_i32() {
            100..=199 => ErrorCategory::Syntax,
            300..=399 => ErrorCategory::Validation,
            _ => ErrorCategory::System,
        }
    }

    /// 对应的 HTTP 状态码
    ///
    /// 语法和验证错误都属于客户端错误
    pub fn http_status(&self) -> u16 {
        match self.category() {
            ErrorCategory::Syntax | ErrorCategory::Validation => 400,
            ErrorCategory::System => 500,
        }
    }
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    Syntax,
    Validation,
    System,
}

/// 对外暴露的错误结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicError {
    pub code: ErrorCode,
    pub message: String,
}

impl PublicError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

/// 内部错误到对外错误的转换
pub trait ToPublicError {
    fn to_public_error(&self) -> PublicError {
        PublicError::new(self.to_error_code(), self.to_public_message())
    }

    fn to_error_code(&self) -> ErrorCode;

    fn to_public_message(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_by_code_range() {
        assert_eq!(ErrorCode::ParseError.category(), ErrorCategory::Syntax);
        assert_eq!(ErrorCode::ConstraintViolation.category(), ErrorCategory::Validation);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
        assert_eq!(ErrorCode::MissingParameter.as_i32(), 103);
    }

    #[test]
    fn test_http_status_by_category() {
        assert_eq!(ErrorCode::MissingParameter.http_status(), 400);
        assert_eq!(ErrorCode::TypeError.http_status(), 400);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }
}
