// 日志工具模块
//
// 封装 flexi_logger 的初始化和关闭操作，确保异步日志正确 flush

use crate::config::LogConfig;
use crate::core::error::FilterResult;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::sync::Mutex;

/// 全局日志句柄，用于程序退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 初始化日志系统
///
/// 未配置日志目录时输出到 stderr；否则按大小轮转写入文件。
/// 一个进程只能初始化一次。
pub fn init(config: &LogConfig) -> FilterResult<()> {
    let logger = Logger::try_with_str(&config.level)?;

    let handle = match &config.dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().basename(&config.file).directory(dir))
            .rotate(
                Criterion::Size(config.max_file_size),
                Naming::Numbers,
                Cleanup::KeepLogFiles(config.max_files),
            )
            .write_mode(WriteMode::Async)
            .append()
            .start()?,
        None => logger.log_to_stderr().start()?,
    };

    // 保存句柄供后续 flush 使用
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        *guard = Some(handle);
    }

    match &config.dir {
        Some(dir) => log::info!("日志系统初始化完成: {}/{}", dir, config.file),
        None => log::debug!("日志系统初始化完成: stderr"),
    }
    Ok(())
}

/// 刷新并关闭日志系统
///
/// 在程序退出前调用，确保所有异步日志都已写入文件
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
            // handle 在这里被 drop，会等待异步线程完成
        }
    }
}

/// 检查日志系统是否已初始化
pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_init_and_shutdown() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let config = LogConfig {
            dir: Some(dir.path().to_string_lossy().into_owned()),
            ..LogConfig::default()
        };

        let result = init(&config);
        assert!(result.is_ok(), "日志初始化失败: {:?}", result.err());
        assert!(is_initialized());

        log::info!("测试日志消息");

        shutdown();
        assert!(!is_initialized());
    }
}
