//! 验证错误类型
//!
//! 涵盖 filter / orderBy / limit / offset 参数解析时的全部失败情形

use serde::{Deserialize, Serialize};
use std::fmt;

use super::codes::{ErrorCode, ToPublicError};

/// 验证错误类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationErrorType {
    /// 参数缺失或为空
    MissingParameter,
    /// 同一参数出现多次
    DuplicateParameter,
    /// 字段不属于实体
    UnknownField,
    /// 子句格式错误
    MalformedClause,
    /// 排序方向或 nulls 关键字不受支持
    UnsupportedArgument,
    /// 不是合法数字
    NotANumber,
    /// 数值超出允许范围
    OutOfRange,
}

impl fmt::Display for ValidationErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorType::MissingParameter => write!(f, "missing parameter"),
            ValidationErrorType::DuplicateParameter => write!(f, "duplicate parameter"),
            ValidationErrorType::UnknownField => write!(f, "unknown field"),
            ValidationErrorType::MalformedClause => write!(f, "malformed clause"),
            ValidationErrorType::UnsupportedArgument => write!(f, "unsupported argument"),
            ValidationErrorType::NotANumber => write!(f, "not a number"),
            ValidationErrorType::OutOfRange => write!(f, "out of range"),
        }
    }
}

impl ValidationErrorType {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationErrorType::MissingParameter => ErrorCode::MissingParameter,
            ValidationErrorType::DuplicateParameter => ErrorCode::InvalidInput,
            ValidationErrorType::UnknownField => ErrorCode::ValidationError,
            ValidationErrorType::MalformedClause => ErrorCode::ParseError,
            ValidationErrorType::UnsupportedArgument => ErrorCode::InvalidInput,
            ValidationErrorType::NotANumber => ErrorCode::TypeError,
            ValidationErrorType::OutOfRange => ErrorCode::ConstraintViolation,
        }
    }
}

/// 统一验证错误结构
///
/// `message` 是面向客户端的可读文本，`context` 记录出错的参数名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub message: String,
    pub error_type: ValidationErrorType,
    pub context: Option<String>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, error_type: ValidationErrorType) -> Self {
        Self {
            message: message.into(),
            error_type,
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn missing_parameter(key: &str) -> Self {
        Self::new(
            format!("The value of {} parameter is empty", key),
            ValidationErrorType::MissingParameter,
        )
        .with_context(key)
    }

    pub fn duplicate_parameter(key: &str) -> Self {
        Self::new(
            format!(
                "Multiple {} parameters are provided, only one {} is supported",
                key, key
            ),
            ValidationErrorType::DuplicateParameter,
        )
        .with_context(key)
    }

    pub fn unknown_field(field: &str, entity: &str) -> Self {
        Self::new(
            format!("The {} is not a valid field in the {}", field, entity),
            ValidationErrorType::UnknownField,
        )
    }

    pub fn malformed_clause(clause: &str) -> Self {
        Self::new(
            format!("The {} is not a valid filter", clause),
            ValidationErrorType::MalformedClause,
        )
    }

    pub fn invalid_order_by(param: &str) -> Self {
        Self::new(
            format!("Invalid orderBy parameter: {}", param),
            ValidationErrorType::MalformedClause,
        )
    }

    pub fn unsupported_argument(token: &str, key: &str) -> Self {
        Self::new(
            format!("The {} is not supported in {} parameter", token, key),
            ValidationErrorType::UnsupportedArgument,
        )
        .with_context(key)
    }

    pub fn not_a_number(value: &str) -> Self {
        Self::new(
            format!("The {} is not a valid number", value),
            ValidationErrorType::NotANumber,
        )
    }

    pub fn out_of_range(key: &str, value: &str) -> Self {
        Self::new(
            format!(
                "The {} is not a valid {}, a non-negative integer is required",
                value, key
            ),
            ValidationErrorType::OutOfRange,
        )
        .with_context(key)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl ToPublicError for ValidationError {
    fn to_error_code(&self) -> ErrorCode {
        self.error_type.error_code()
    }

    fn to_public_message(&self) -> String {
        self.message.clone()
    }
}
