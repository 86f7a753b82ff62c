//! CLI 模块
//!
//! 提供命令行接口，支持以下功能：
//!
//! - `generate` - 生成夹具文件（不带子命令时的默认行为）
//! - `list` - 列出预定义夹具
//! - `show` - 打印预定义夹具的定义
//!
//! # 使用示例
//!
//! ```bash
//! # 使用默认配置生成全部夹具
//! seed-gen
//!
//! # 以固定种子生成单个夹具
//! seed-gen generate -f bookings --seed 42 -o mock_data
//!
//! # 导出定义，修改后作为自定义夹具使用
//! seed-gen show -f communities > venues.yaml
//! seed-gen generate --spec-file venues.yaml
//! ```

pub mod commands;
pub mod runner;

pub use commands::{Cli, Commands, GenerateArgs, SpecFormat};
pub use runner::{CommandRunner, load_spec_from_file};
