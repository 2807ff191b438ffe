// 核心类型模块
//
// 包含解析结果的全部类型：谓词、排序子句、请求参数取值和聚合后的 QuerySpec

pub mod order;
pub mod param;
pub mod predicate;
pub mod spec;

// 重新导出常用类型
pub use order::{NullsPlacement, OrderClause, OrderDirection};
pub use param::{PageKey, ParamValue};
pub use predicate::{FilterOperator, Predicate, WhereClause};
pub use spec::QuerySpec;
