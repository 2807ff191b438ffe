//! 请求级解析
//!
//! 从查询字符串收集参数，按 filter -> orderBy -> limit -> offset 的顺序折叠进 QuerySpec

use log::{debug, warn};
use std::collections::BTreeMap;

use crate::config::ParserConfig;
use crate::core::error::ValidationError;
use crate::core::schema::FieldSchema;
use crate::core::types::{PageKey, ParamValue, QuerySpec};
use crate::query::parser::{
    parse_filter, parse_limit_offset, parse_order_by, FILTER_PARAM, ORDER_BY_PARAM,
};

/// 多值请求参数集合
///
/// 同一个键出现多次时全部保留，由解析器判定为重复参数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// 解析 urlencoded 查询字符串，允许带前导 `?`
    ///
    /// filter 取值中的 `&` 需编码为 `%26`
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get(&self, key: &str) -> ParamValue {
        self.values
            .get(key)
            .map_or(ParamValue::Missing, |values| ParamValue::from_values(values.clone()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.push(key, value);
        }
        params
    }
}

/// 解析一个请求的全部查询参数
///
/// 只有出现过的参数才会被解析；出现但为空的参数同样报错。
/// 任一参数失败即返回错误，不产生部分结果。
pub fn parse_query<S>(
    schema: &S,
    params: &QueryParams,
    config: &ParserConfig,
) -> Result<QuerySpec, ValidationError>
where
    S: FieldSchema + ?Sized,
{
    debug!(
        "解析 {} 查询参数: {:?}",
        schema.entity_name(),
        params.keys().collect::<Vec<_>>()
    );
    let result = fold_params(schema, params, config);
    if let Err(e) = &result {
        warn!("{} 查询参数被拒绝: {}", schema.entity_name(), e);
    }
    result
}

fn fold_params<S>(
    schema: &S,
    params: &QueryParams,
    config: &ParserConfig,
) -> Result<QuerySpec, ValidationError>
where
    S: FieldSchema + ?Sized,
{
    let mut spec = QuerySpec::new();

    if params.contains(FILTER_PARAM) {
        spec.apply_filter(parse_filter(schema, &params.get(FILTER_PARAM))?);
    }

    if params.contains(ORDER_BY_PARAM) {
        spec.apply_order(&parse_order_by(schema, &params.get(ORDER_BY_PARAM))?);
    }

    for key in [PageKey::Limit, PageKey::Offset] {
        if params.contains(key.as_str()) {
            let value = parse_limit_offset(key, &params.get(key.as_str()), config)?;
            spec.apply_page(key, value);
        }
    }

    Ok(spec)
}
