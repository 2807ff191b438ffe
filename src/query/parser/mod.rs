//! 请求参数解析器
//!
//! 三个相互独立的纯函数，各自返回类型化结果：
//! - `parse_filter`: filter 参数 -> 字段谓词映射
//! - `parse_order_by`: orderBy 参数 -> 排序子句
//! - `parse_limit_offset`: limit / offset 参数 -> 数值

pub mod filter;
pub mod limit_offset;
pub mod order_by;

pub use filter::{parse_filter, FILTER_PARAM};
pub use limit_offset::parse_limit_offset;
pub use order_by::{parse_order_by, ORDER_BY_PARAM};
