use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::FilterResult;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    /// schema 文件路径，命令行未指定时使用
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_path: Option<String>,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub parser: ParserConfig,
}

/// 日志配置
///
/// `dir` 为空时输出到 stderr，否则按大小轮转写入文件
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
            file: "query-filter".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
        }
    }
}

/// 解析器选项
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ParserConfig {
    /// limit / offset 必须是非负整数；关闭时负数和小数原样通过
    pub strict_bounds: bool,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> FilterResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> FilterResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> FilterResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
