//! filter 参数解析
//!
//! 语法: `field<op>value[&field<op>value...]`，op 为 `=`、`<`、`>` 之一。
//! `=` 的取值形如 `in('a','b')` 时解析为列表。

use log::debug;
use regex::Regex;
use std::sync::OnceLock;

use crate::core::error::ValidationError;
use crate::core::schema::FieldSchema;
use crate::core::types::{FilterOperator, ParamValue, Predicate, WhereClause};

/// filter 参数名
pub const FILTER_PARAM: &str = "filter";

/// 子句形状：字段词、操作符、取值（词字符、括号、逗号、单引号）
fn clause_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9_]+([=<>])[A-Za-z0-9_(,)']+").expect("filter clause pattern is valid")
    })
}

fn in_list_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^in\s*\((.*)\)").expect("in-list pattern is valid"))
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '=' | '<' | '>')
}

/// 解析 filter 参数
///
/// 子句按 `&` 切分，逐个校验；遇到第一个无效子句立即返回错误。
/// 同一字段出现多次时后出现的覆盖先出现的。
pub fn parse_filter<S>(schema: &S, param: &ParamValue) -> Result<WhereClause, ValidationError>
where
    S: FieldSchema + ?Sized,
{
    let filter = param.require_single(FILTER_PARAM)?;
    let mut where_clause = WhereClause::new();

    for clause in filter.split('&') {
        if let Some((field, predicate)) = parse_clause(schema, clause)? {
            where_clause.insert(field, predicate);
        }
    }

    Ok(where_clause)
}

/// 解析单个子句，取值为空时跳过
fn parse_clause<S>(schema: &S, clause: &str) -> Result<Option<(String, Predicate)>, ValidationError>
where
    S: FieldSchema + ?Sized,
{
    let symbol = clause_pattern()
        .captures(clause)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| ValidationError::malformed_clause(clause).with_context(FILTER_PARAM))?;

    let mut parts = clause.split(is_operator_char);
    let field = parts.next().unwrap_or_default().trim();
    let value = parts.next().unwrap_or_default().trim();

    if value.is_empty() {
        debug!("filter 子句 {:?} 取值为空，已跳过", clause);
        return Ok(None);
    }

    if !schema.has_field(field) {
        return Err(
            ValidationError::unknown_field(field, schema.entity_name()).with_context(FILTER_PARAM)
        );
    }

    let Some(operator) = FilterOperator::from_symbol(symbol) else {
        unreachable!("filter clause pattern only captures =, < or >, got {:?}", symbol)
    };

    let predicate = build_predicate(operator, value);
    debug!("filter 子句 {:?}: {} {} {:?}", clause, field, operator, predicate);
    Ok(Some((field.to_string(), predicate)))
}

fn build_predicate(operator: FilterOperator, value: &str) -> Predicate {
    match operator {
        FilterOperator::Eq => match in_list_pattern().captures(value).and_then(|caps| caps.get(1)) {
            Some(list) => Predicate::In(
                list.as_str()
                    .split(',')
                    .map(|item| item.replace('\'', "").trim().to_string())
                    .collect(),
            ),
            None => Predicate::Equals(value.replace('\'', "")),
        },
        // `<` 和 `>` 的取值不去除引号
        FilterOperator::Lt => Predicate::LessThan(value.to_string()),
        FilterOperator::Gt => Predicate::GreaterThan(value.to_string()),
    }
}
