//! 请求参数取值
//!
//! 传输层可能把同一参数投递一次或多次，解析器通过取值的形状识别重复参数

use std::fmt;

use crate::core::error::ValidationError;

/// 单个请求参数的取值形状
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParamValue {
    /// 参数未出现
    #[default]
    Missing,
    /// 参数出现一次
    Single(String),
    /// 参数出现多次
    Multiple(Vec<String>),
}

impl ParamValue {
    /// 按出现次数构造取值
    pub fn from_values(mut values: Vec<String>) -> Self {
        match values.len() {
            0 => ParamValue::Missing,
            1 => ParamValue::Single(values.remove(0)),
            _ => ParamValue::Multiple(values),
        }
    }

    /// 取出唯一且非空的取值
    ///
    /// 缺失或空串报告参数为空，多次出现报告重复参数
    pub fn require_single(&self, key: &str) -> Result<&str, ValidationError> {
        match self {
            ParamValue::Missing => Err(ValidationError::missing_parameter(key)),
            ParamValue::Single(value) if value.is_empty() => {
                Err(ValidationError::missing_parameter(key))
            }
            ParamValue::Single(value) => Ok(value),
            ParamValue::Multiple(_) => Err(ValidationError::duplicate_parameter(key)),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

/// 分页参数名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKey {
    Limit,
    Offset,
}

impl PageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::Limit => "limit",
            PageKey::Offset => "offset",
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ValidationErrorType;

    #[test]
    fn test_from_values_by_count() {
        assert_eq!(ParamValue::from_values(vec![]), ParamValue::Missing);
        assert_eq!(
            ParamValue::from_values(vec!["a".into()]),
            ParamValue::Single("a".into())
        );
        assert!(matches!(
            ParamValue::from_values(vec!["a".into(), "b".into()]),
            ParamValue::Multiple(_)
        ));
    }

    #[test]
    fn test_require_single() {
        assert_eq!(ParamValue::from("x").require_single("filter"), Ok("x"));

        let err = ParamValue::from("").require_single("filter").unwrap_err();
        assert_eq!(err.error_type, ValidationErrorType::MissingParameter);

        let err = ParamValue::Missing.require_single("filter").unwrap_err();
        assert_eq!(err.error_type, ValidationErrorType::MissingParameter);

        let err = ParamValue::Multiple(vec!["a".into(), "b".into()])
            .require_single("filter")
            .unwrap_err();
        assert_eq!(err.error_type, ValidationErrorType::DuplicateParameter);
    }

    #[test]
    fn test_page_key_names() {
        assert_eq!(PageKey::Limit.as_str(), "limit");
        assert_eq!(PageKey::Offset.to_string(), "offset");
    }
}
