//! 字段 schema
//!
//! 解析器只需要判断字段是否属于实体，以及实体的显示名称（用于错误信息）

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::core::error::{FilterError, FilterResult};

/// 字段名注册表
pub trait FieldSchema {
    /// 实体显示名称
    fn entity_name(&self) -> &str;

    fn has_field(&self, field: &str) -> bool;
}

/// 单个实体的字段集合
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySchema {
    pub name: String,
    pub fields: BTreeSet<String>,
}

impl EntitySchema {
    pub fn new<I, F>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        Self {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }
}

impl FieldSchema for EntitySchema {
    fn entity_name(&self) -> &str {
        &self.name
    }

    fn has_field(&self, field: &str) -> bool {
        self.fields.contains(field)
    }
}

/// 多个实体 schema 的集合，可从 TOML 文件加载
///
/// ```toml
/// [[entity]]
/// name = "User"
/// fields = ["id", "name", "age"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRegistry {
    #[serde(rename = "entity", default)]
    entities: Vec<EntitySchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> FilterResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> FilterResult<Self> {
        let parsed: SchemaRegistry = toml::from_str(content)?;
        let mut registry = SchemaRegistry::new();
        for entity in parsed.entities {
            registry.register(entity)?;
        }
        Ok(registry)
    }

    /// 注册实体，名称重复或包含空字段名时报错
    pub fn register(&mut self, entity: EntitySchema) -> FilterResult<()> {
        if entity.name.trim().is_empty() {
            return Err(FilterError::Schema("entity name cannot be empty".to_string()));
        }
        if self.get(&entity.name).is_some() {
            return Err(FilterError::Schema(format!(
                "entity '{}' is defined more than once",
                entity.name
            )));
        }
        if entity.fields.iter().any(|f| f.trim().is_empty()) {
            return Err(FilterError::Schema(format!(
                "entity '{}' contains an empty field name",
                entity.name
            )));
        }
        log::debug!(
            "注册实体 {}，共 {} 个字段",
            entity.name,
            entity.fields.len()
        );
        self.entities.push(entity);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&EntitySchema> {
        self.entities.iter().find(|e| e.name == name)
    }

    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.entities.iter().map(|e| e.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
