//! limit / offset 参数解析

use log::debug;
use serde_json::Number;

use crate::config::ParserConfig;
use crate::core::error::ValidationError;
use crate::core::types::{PageKey, ParamValue};

/// 解析 limit 或 offset 参数
///
/// 默认不做范围检查：负数和小数都会原样保留。
/// `strict_bounds` 开启后要求非负整数。
pub fn parse_limit_offset(
    key: PageKey,
    param: &ParamValue,
    config: &ParserConfig,
) -> Result<Number, ValidationError> {
    let raw = param.require_single(key.as_str())?;
    let number =
        parse_number(raw).ok_or_else(|| ValidationError::not_a_number(raw).with_context(key.as_str()))?;

    if config.strict_bounds && number.as_u64().is_none() {
        return Err(ValidationError::out_of_range(key.as_str(), raw));
    }

    debug!("{} = {}", key, number);
    Ok(number)
}

/// 十进制整数或小数字面量，允许前后空白和正负号；整串必须都是数字
fn parse_number(raw: &str) -> Option<Number> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(int) = text.parse::<i64>() {
        return Some(Number::from(int));
    }
    if let Ok(uint) = text.parse::<u64>() {
        return Some(Number::from(uint));
    }
    // f64 解析也接受 inf / NaN，这里只放行数字字面量的字符
    if !text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    text.parse::<f64>().ok().and_then(Number::from_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ValidationErrorType;

    fn parse(key: PageKey, value: &str) -> Result<Number, ValidationError> {
        parse_limit_offset(key, &ParamValue::from(value), &ParserConfig::default())
    }

    fn strict(key: PageKey, value: &str) -> Result<Number, ValidationError> {
        let config = ParserConfig {
            strict_bounds: true,
        };
        parse_limit_offset(key, &ParamValue::from(value), &config)
    }

    #[test]
    fn test_integer() {
        assert_eq!(parse(PageKey::Limit, "10"), Ok(Number::from(10)));
        assert_eq!(parse(PageKey::Offset, " 20 "), Ok(Number::from(20)));
    }

    #[test]
    fn test_negative_and_fractional_pass_through() {
        assert_eq!(parse(PageKey::Limit, "-5"), Ok(Number::from(-5)));
        let value = parse(PageKey::Limit, "1.5").expect("1.5 is a number");
        assert_eq!(value.as_f64(), Some(1.5));
        let value = parse(PageKey::Offset, "1e2").expect("1e2 is a number");
        assert_eq!(value.as_f64(), Some(100.0));
    }

    #[test]
    fn test_not_a_number() {
        for raw in ["abc", "123Abc", "12 3", "inf", "NaN", "-", ".", "1e400", "-1e400"] {
            let err = parse(PageKey::Limit, raw).unwrap_err();
            assert_eq!(err.error_type, ValidationErrorType::NotANumber, "{}", raw);
        }
        let err = parse(PageKey::Limit, "abc").unwrap_err();
        assert_eq!(err.message, "The abc is not a valid number");
        assert_eq!(err.context.as_deref(), Some("limit"));
    }

    #[test]
    fn test_empty_and_multiple() {
        let err = parse(PageKey::Offset, "").unwrap_err();
        assert_eq!(err.error_type, ValidationErrorType::MissingParameter);
        assert_eq!(err.message, "The value of offset parameter is empty");

        let err = parse_limit_offset(
            PageKey::Limit,
            &ParamValue::Multiple(vec!["1".into(), "2".into()]),
            &ParserConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.error_type, ValidationErrorType::DuplicateParameter);
        assert_eq!(
            err.message,
            "Multiple limit parameters are provided, only one limit is supported"
        );
    }

    #[test]
    fn test_strict_bounds() {
        assert_eq!(strict(PageKey::Limit, "10"), Ok(Number::from(10)));
        assert_eq!(strict(PageKey::Offset, "0"), Ok(Number::from(0)));
        for raw in ["-5", "1.5"] {
            let err = strict(PageKey::Limit, raw).unwrap_err();
            assert_eq!(err.error_type, ValidationErrorType::OutOfRange);
        }
    }
}
