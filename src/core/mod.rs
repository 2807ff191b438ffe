pub mod error;
pub mod schema;
pub mod types;

// 错误和结果类型
pub use error::{FilterError, FilterResult, ValidationError, ValidationErrorType};

pub use schema::{EntitySchema, FieldSchema, SchemaRegistry};

pub use types::{
    FilterOperator, NullsPlacement, OrderClause, OrderDirection, PageKey, ParamValue, Predicate,
    QuerySpec, WhereClause,
};
