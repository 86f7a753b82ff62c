//! 夹具定义模块
//!
//! 提供夹具定义（FixtureSpec）、列定义（FieldSpec）和预定义夹具集合。
//!
//! # 使用示例
//!
//! ```rust
//! use fixture_generator::fixtures::{FixtureSpec, PredefinedFixtures};
//!
//! // 方式 1：使用预定义夹具
//! let bookings = PredefinedFixtures::bookings();
//! assert!(bookings.dedupe);
//!
//! // 方式 2：从 YAML 加载自定义夹具
//! let yaml = r#"
//! name: venues
//! table: Venues
//! record_count: 10
//! fields:
//!   - column: Capacity
//!     kind: integer
//!     start: 50
//!     end: 500
//! "#;
//! let venues = FixtureSpec::from_yaml(yaml).unwrap();
//! assert_eq!(venues.columns(), vec!["Capacity"]);
//!
//! // 方式 3：使用构建器
//! let tags = FixtureSpec::builder("tags", "Tags")
//!     .record_count(5)
//!     .choice("Label", ["jazz", "folk"])
//!     .build();
//! assert_eq!(tags.output_file_name(), "tags.sql");
//! ```

mod predefined;
mod spec;

pub use predefined::{DEFAULT_RECORD_COUNT, PredefinedFixtures};
pub use spec::{FieldKind, FieldSpec, FixtureSpec, FixtureSpecBuilder};
