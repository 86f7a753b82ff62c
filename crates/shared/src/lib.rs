//! 共享库
//!
//! 包含夹具生成器共用的配置、错误处理和日志初始化等基础设施代码。

pub mod config;
pub mod error;
pub mod observability;

pub use error::{FixtureError, Result};
