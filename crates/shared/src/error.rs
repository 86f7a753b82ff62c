//! 统一错误处理模块
//!
//! 定义夹具生成过程中所有共享的错误类型，使用 thiserror 提供良好的错误信息。

use std::path::PathBuf;

use thiserror::Error;

/// 夹具生成错误类型
#[derive(Debug, Error)]
pub enum FixtureError {
    // ==================== I/O 错误 ====================
    #[error("写入夹具文件失败: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ==================== 字段定义错误 ====================
    #[error("整数范围为空: {column} {range}")]
    EmptyRange { column: String, range: String },

    #[error("候选列表为空: {column}")]
    EmptyPool { column: String },

    #[error("顺序字段已耗尽: {column} 第 {index} 条记录，仅有 {len} 个候选值")]
    SequenceExhausted {
        column: String,
        index: usize,
        len: usize,
    },

    // ==================== 模板错误 ====================
    #[error("未知的占位符: {{{placeholder}}}")]
    UnknownPlaceholder { placeholder: String },

    #[error("模板格式错误: {message}")]
    Template { message: String },

    // ==================== 配置错误 ====================
    #[error("夹具定义解析失败: {message}")]
    SpecParse { message: String },

    #[error("配置加载失败: {0}")]
    Config(#[from] config::ConfigError),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, FixtureError>;

impl FixtureError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "IO_ERROR",
            Self::EmptyRange { .. } => "EMPTY_RANGE",
            Self::EmptyPool { .. } => "EMPTY_POOL",
            Self::SequenceExhausted { .. } => "SEQUENCE_EXHAUSTED",
            Self::UnknownPlaceholder { .. } => "UNKNOWN_PLACEHOLDER",
            Self::Template { .. } => "TEMPLATE_ERROR",
            Self::SpecParse { .. } => "SPEC_PARSE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// 是否为夹具定义本身的问题
    ///
    /// 定义错误在生成器构造阶段即可发现，不会触及输出文件。
    pub fn is_spec_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyRange { .. }
                | Self::EmptyPool { .. }
                | Self::SequenceExhausted { .. }
                | Self::UnknownPlaceholder { .. }
                | Self::Template { .. }
                | Self::SpecParse { .. }
        )
    }

    /// 包装 I/O 错误并附带目标路径
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for FixtureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SpecParse {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for FixtureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SpecParse {
            message: err.to_string(),
        }
    }
}
