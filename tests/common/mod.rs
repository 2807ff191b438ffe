//! 集成测试共享工具模块

use query_filter::core::schema::EntitySchema;

/// 测试用实体：User(id, name, age, status)
pub fn user_schema() -> EntitySchema {
    EntitySchema::new("User", ["id", "name", "age", "status"])
}
