//! 错误处理
//!
//! 1. 参数验证失败统一使用 `ValidationError`，每个请求独立，不可重试也不致命
//! 2. 加载 schema、配置文件等外围操作使用 `FilterError`
//! 3. `FilterResult<T>` 提供统一的返回类型

use thiserror::Error;

pub mod codes;
pub mod validation;

pub use codes::{ErrorCategory, ErrorCode, PublicError, ToPublicError};
pub use validation::{ValidationError, ValidationErrorType};

/// 统一的错误类型
#[derive(Error, Debug, Clone)]
pub enum FilterError {
    #[error("验证错误: {0}")]
    Validation(#[from] ValidationError),

    #[error("Schema错误: {0}")]
    Schema(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO错误: {0}")]
    Io(String),
}

/// 统一的结果类型
pub type FilterResult<T> = Result<T, FilterError>;

impl ToPublicError for FilterError {
    fn to_error_code(&self) -> ErrorCode {
        match self {
            FilterError::Validation(ve) => ve.to_error_code(),
            FilterError::Schema(_) | FilterError::Config(_) | FilterError::Io(_) => {
                ErrorCode::InternalError
            }
        }
    }

    fn to_public_message(&self) -> String {
        match self {
            FilterError::Validation(ve) => ve.to_public_message(),
            // 内部错误不暴露细节
            _ => "内部服务器错误".to_string(),
        }
    }
}

// ==================== 外部错误转换实现 ====================

impl From<std::io::Error> for FilterError {
    fn from(err: std::io::Error) -> Self {
        FilterError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for FilterError {
    fn from(err: toml::de::Error) -> Self {
        FilterError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for FilterError {
    fn from(err: toml::ser::Error) -> Self {
        FilterError::Config(err.to_string())
    }
}

impl From<flexi_logger::FlexiLoggerError> for FilterError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        FilterError::Config(err.to_string())
    }
}
