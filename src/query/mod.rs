// 查询参数处理模块
//
// - parser: 三个独立的参数解析器
// - request: 请求级参数收集与折叠

pub mod parser;
pub mod request;

pub use parser::{
    parse_filter, parse_limit_offset, parse_order_by, FILTER_PARAM, ORDER_BY_PARAM,
};
pub use request::{parse_query, QueryParams};
