//! Seed Fixture Generator
//!
//! 生成随机种子数据并输出为 SQL INSERT 语句文件，用于填充开发和演示数据库。
//!
//! # 主要模块
//!
//! - `fixtures`: 夹具定义与预定义夹具（预订、社区成员、活动参与者、社区）
//! - `generators`: 字段抽取、模板渲染、去重与文件写入
//! - `models`: 生成记录与记录集合
//! - `cli`: 命令行接口
//!
//! # 使用示例
//!
//! ```rust
//! use fixture_generator::fixtures::FixtureSpec;
//! use fixture_generator::generators::FixtureGenerator;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let spec = FixtureSpec::builder("bookings", "Bookings")
//!     .record_count(5)
//!     .integer_inclusive("EventId", 1..=3)
//!     .integer_inclusive("UserId", 1..=2)
//!     .dedupe(true)
//!     .build();
//!
//! let generator = FixtureGenerator::new(spec).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let set = generator.generate(&mut rng).unwrap();
//!
//! assert!(set.len() <= 5);
//! for statement in generator.render_all(&set) {
//!     assert!(statement.starts_with("INSERT INTO Bookings (EventId, UserId) VALUES ("));
//! }
//! ```

pub mod cli;
pub mod fixtures;
pub mod generators;
pub mod models;
