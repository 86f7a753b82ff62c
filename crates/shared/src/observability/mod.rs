//! 可观测性模块
//!
//! 提供日志的统一初始化。生成器是一次性批处理任务，只需要结构化日志，
//! 不导出指标和分布式追踪。

pub mod tracing;

use ::tracing::info;
use anyhow::Result;
use serde::Deserialize;

use crate::config::AppConfig;

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// 服务名称，出现在启动日志中
    pub service_name: String,

    /// 日志级别（如 "info", "debug"）
    /// RUST_LOG 环境变量优先于此配置
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// 是否启用 JSON 格式日志
    #[serde(default)]
    pub json_logs: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "seed-gen".to_string(),
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

impl ObservabilityConfig {
    /// 从应用配置构建
    pub fn from_app_config(service_name: &str, config: &AppConfig) -> Self {
        Self {
            service_name: service_name.to_string(),
            log_level: config.log_level.clone(),
            json_logs: config.json_logs,
        }
    }

    /// 覆盖日志级别（命令行参数优先于配置文件）
    pub fn with_log_level(mut self, log_level: Option<&str>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level.to_string();
        }
        self
    }
}

/// 统一初始化可观测性
///
/// # Example
///
/// ```ignore
/// use seed_shared::config::AppConfig;
/// use seed_shared::observability::{init, ObservabilityConfig};
///
/// fn main() -> anyhow::Result<()> {
///     let app_config = AppConfig::load()?;
///     init(&ObservabilityConfig::from_app_config("seed-gen", &app_config))?;
///
///     // 应用逻辑...
///
///     Ok(())
/// }
/// ```
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    tracing::init(config)?;

    info!(
        service = %config.service_name,
        log_level = %config.log_level,
        json_logs = config.json_logs,
        "Observability initialized"
    );

    Ok(())
}
