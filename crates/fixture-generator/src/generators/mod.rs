//! 生成器模块
//!
//! 提供字段抽取、模板渲染、SQL 写入和夹具生成的完整流程。

pub mod data_generator;
pub mod field;
pub mod template;
pub mod writer;

pub use data_generator::{FixtureGenerator, GenerationReport};
pub use template::{Substitution, Template};
pub use writer::{BEGIN_TRANSACTION, COMMIT, write_sql_file, write_statements};
