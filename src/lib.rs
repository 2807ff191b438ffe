//! query-filter - 请求查询参数解析器
//!
//! 将 HTTP 查询参数 `filter`、`orderBy`、`limit`、`offset` 转换为
//! 数据访问层可直接使用的结构化查询条件 `QuerySpec`。

pub mod config;
pub mod core;
pub mod query;
pub mod utils;

pub use crate::config::{Config, ParserConfig};
pub use crate::core::{
    EntitySchema, FieldSchema, FilterError, FilterResult, ParamValue, Predicate, QuerySpec,
    SchemaRegistry, ValidationError, ValidationErrorType,
};
pub use crate::query::{parse_filter, parse_limit_offset, parse_order_by, parse_query, QueryParams};
