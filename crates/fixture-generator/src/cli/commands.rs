//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行接口结构。
//! 不带子命令运行时等同于 `generate`，使用默认参数生成全部预定义夹具。

use clap::{Args, Parser, Subcommand, ValueEnum};

/// 种子数据夹具生成工具
///
/// 生成随机模拟数据并输出为 SQL INSERT 语句文件。
/// 使用 `--help` 查看各子命令的详细说明。
#[derive(Parser, Debug)]
#[command(name = "seed-gen")]
#[command(version, about = "种子数据 SQL 夹具生成工具")]
#[command(propagate_version = true)]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)，覆盖配置文件
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// 配置目录（默认读取 CONFIG_DIR 环境变量或 ./config）
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 子命令枚举
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 生成夹具文件
    ///
    /// 默认生成全部预定义夹具；也可以指定单个夹具或从文件加载自定义夹具。
    Generate(GenerateArgs),

    /// 列出所有预定义夹具
    List,

    /// 打印预定义夹具的定义
    ///
    /// 输出可以保存为文件，修改后通过 `generate --spec-file` 使用。
    Show {
        /// 夹具名称
        #[arg(short, long)]
        fixture: String,

        /// 输出格式
        #[arg(long, value_enum, default_value = "yaml")]
        format: SpecFormat,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Generate(GenerateArgs::default())
    }
}

/// generate 子命令参数
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// 夹具名称（使用 "all" 生成全部预定义夹具）
    #[arg(short, long, default_value = "all")]
    pub fixture: String,

    /// 自定义夹具文件路径（JSON/YAML），指定后忽略 --fixture
    #[arg(short, long)]
    pub spec_file: Option<String>,

    /// 输出目录，覆盖配置文件
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// 覆盖每个夹具的记录数
    #[arg(short, long)]
    pub count: Option<usize>,

    /// 随机种子，指定后输出可复现
    #[arg(long)]
    pub seed: Option<u64>,

    /// 转义字符串中的单引号
    #[arg(long)]
    pub escape_strings: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            fixture: "all".to_string(),
            spec_file: None,
            output_dir: None,
            count: None,
            seed: None,
            escape_strings: false,
        }
    }
}

/// 夹具定义的输出格式
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Yaml,
    Json,
}

// ============================================================================
// 单元测试
// ============================================================================
