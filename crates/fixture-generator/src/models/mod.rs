//! 夹具数据模型
//!
//! 包含生成记录、字段值和单表记录集合。

pub mod fixture_set;
pub mod record;

pub use fixture_set::FixtureSet;
pub use record::{GeneratedRecord, Value};
