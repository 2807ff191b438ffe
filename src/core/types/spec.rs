//! 解析结果聚合
//!
//! 三个解析器各自返回类型化结果，由调用方折叠进同一个 QuerySpec

use serde::Serialize;
use serde_json::Number;

use super::order::OrderClause;
use super::param::PageKey;
use super::predicate::WhereClause;

/// 交给数据访问层的查询条件
///
/// 每个请求创建一个新实例；任一参数解析失败时整个实例应被丢弃
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuerySpec {
    #[serde(rename = "where")]
    pub where_clause: WhereClause,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Number>,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// 合并过滤条件，同名字段后者覆盖前者
    pub fn apply_filter(&mut self, where_clause: WhereClause) {
        self.where_clause.extend(where_clause);
    }

    pub fn apply_order(&mut self, order: &OrderClause) {
        self.order = Some(order.to_string());
    }

    pub fn apply_page(&mut self, key: PageKey, value: Number) {
        match key {
            PageKey::Limit => self.limit = Some(value),
            PageKey::Offset => self.offset = Some(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.where_clause.is_empty()
            && self.order.is_none()
            && self.limit.is_none()
            && self.offset.is_none()
    }
}
