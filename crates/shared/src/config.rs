//! 配置管理模块
//!
//! 支持多层配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

/// 默认输出目录
pub const DEFAULT_OUTPUT_DIR: &str = "mock_data";

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 夹具文件输出目录
    pub output_dir: PathBuf,
    /// 固定随机种子，为空时每次运行随机生成
    #[serde(default)]
    pub seed: Option<u64>,
    /// 是否转义字符串中的单引号（默认关闭，保持原样输出）
    #[serde(default)]
    pub escape_strings: bool,
    /// 日志级别（如 "info", "debug"）
    pub log_level: String,
    /// 是否启用 JSON 格式日志
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
            escape_strings: false,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl AppConfig {
    /// 从默认配置目录加载配置
    ///
    /// 配置目录由 CONFIG_DIR 环境变量指定，默认为 `config`。
    pub fn load() -> Result<Self> {
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
        Self::load_from(config_dir)
    }

    /// 从指定目录加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. 内置默认值
    /// 2. {config_dir}/default.toml（默认配置）
    /// 3. {config_dir}/{SEED_ENV}.toml（环境特定配置，默认 development）
    /// 4. 环境变量（SEED_ 前缀，如 SEED_OUTPUT_DIR -> output_dir）
    pub fn load_from(config_dir: impl AsRef<Path>) -> Result<Self> {
        let config_dir = config_dir.as_ref();
        let env = std::env::var("SEED_ENV").unwrap_or_else(|_| "development".to_string());
        let defaults = Self::default();

        let builder = Config::builder()
            .set_default("output_dir", DEFAULT_OUTPUT_DIR)?
            .set_default("escape_strings", defaults.escape_strings)?
            .set_default("log_level", defaults.log_level)?
            .set_default("json_logs", defaults.json_logs)?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join(format!("{}.toml", env))).required(false))
            // 扁平配置，不使用嵌套分隔符：SEED_OUTPUT_DIR -> output_dir
            .add_source(Environment::with_prefix("SEED").try_parsing(true));

        Ok(builder.build()?.try_deserialize()?)
    }

    /// 获取夹具文件的完整输出路径
    pub fn output_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
