//! 排序子句
//!
//! 方向和 nulls 关键字保留原始大小写，渲染结果可直接拼入查询构造器的 order 片段

use serde::{Deserialize, Serialize};
use std::fmt;

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderDirection {
    /// 升序
    Asc,
    /// 降序
    Desc,
}

impl OrderDirection {
    /// 大小写不敏感地识别 `asc` / `desc`
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("asc") {
            Some(OrderDirection::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(OrderDirection::Desc)
        } else {
            None
        }
    }
}

/// 空值位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NullsPlacement {
    First,
    Last,
}

impl NullsPlacement {
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("first") {
            Some(NullsPlacement::First)
        } else if token.eq_ignore_ascii_case("last") {
            Some(NullsPlacement::Last)
        } else {
            None
        }
    }
}

/// 单字段排序子句
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderClause {
    pub field: String,
    pub direction: Option<OrderDirection>,
    pub nulls: Option<NullsPlacement>,
    // 字段之后的原始 token
    suffix: Vec<String>,
}

impl OrderClause {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: None,
            nulls: None,
            suffix: Vec::new(),
        }
    }

    pub fn with_direction(mut self, direction: OrderDirection, token: impl Into<String>) -> Self {
        self.direction = Some(direction);
        self.suffix.push(token.into());
        self
    }

    pub fn with_nulls(
        mut self,
        placement: NullsPlacement,
        keyword: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        self.nulls = Some(placement);
        self.suffix.push(keyword.into());
        self.suffix.push(token.into());
        self
    }
}

impl fmt::Display for OrderClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.field)?;
        for token in &self.suffix {
            write!(f, " {}", token)?;
        }
        Ok(())
    }
}
