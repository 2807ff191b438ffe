//! 过滤谓词
//!
//! 每个字段在 where 映射中对应一个谓词

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// 字段名到谓词的映射
pub type WhereClause = BTreeMap<String, Predicate>;

/// 过滤子句中的比较操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    /// `=`，也承载 `in(...)` 列表
    Eq,
    /// `<`
    Lt,
    /// `>`
    Gt,
}

impl FilterOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(FilterOperator::Eq),
            "<" => Some(FilterOperator::Lt),
            ">" => Some(FilterOperator::Gt),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "=",
            FilterOperator::Lt => "<",
            FilterOperator::Gt => ">",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// 单个字段上的过滤条件
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// `field=value`，单引号已去除
    Equals(String),
    /// `field=in('a','b')`，每个元素已去除单引号并裁剪空白
    In(Vec<String>),
    /// `field<value`，原样保留
    LessThan(String),
    /// `field>value`，原样保留
    GreaterThan(String),
}

impl Predicate {
    /// 还原为过滤子句文本
    ///
    /// 等值和列表元素都加上单引号（存储的取值不含单引号），
    /// 因此等值不会被重新解析成 `in(...)` 列表
    pub fn to_clause(&self, field: &str) -> String {
        match self {
            Predicate::Equals(value) => format!("{}='{}'", field, value),
            Predicate::In(values) => {
                let quoted: Vec<String> = values.iter().map(|v| format!("'{}'", v)).collect();
                format!("{}=in({})", field, quoted.join(","))
            }
            Predicate::LessThan(value) => format!("{}<{}", field, value),
            Predicate::GreaterThan(value) => format!("{}>{}", field, value),
        }
    }
}

// 序列化为数据访问层约定的形状:
// "v" / ["a", "b"] / {"lt": "v"} / {"gt": "v"}
impl Serialize for Predicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Predicate::Equals(value) => serializer.serialize_str(value),
            Predicate::In(values) => serializer.collect_seq(values),
            Predicate::LessThan(value) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("lt", value)?;
                map.end()
            }
            Predicate::GreaterThan(value) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("gt", value)?;
                map.end()
            }
        }
    }
}
