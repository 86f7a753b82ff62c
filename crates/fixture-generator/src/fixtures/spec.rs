//! 夹具定义
//!
//! 描述一张表的夹具如何生成：表名、记录数、各列的取值方式、是否去重、
//! 语句模板和事务包裹。支持序列化为 JSON/YAML，便于从文件加载自定义夹具。

use std::ops::{Range, RangeInclusive};

use serde::{Deserialize, Serialize};

use seed_shared::Result;

/// 夹具定义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSpec {
    /// 夹具名称，用于命令行选择和日志
    pub name: String,
    /// 夹具描述
    #[serde(default)]
    pub description: String,
    /// 目标表名
    pub table: String,
    /// 随机抽取的记录数，去重后实际写入的数量可能更少
    pub record_count: usize,
    /// 列定义，按顺序抽取
    pub fields: Vec<FieldSpec>,
    /// 是否按完整元组去重
    #[serde(default)]
    pub dedupe: bool,
    /// 语句模板，`{列名}` 占位符替换为该列的 SQL 字面量
    ///
    /// 为空时按 `INSERT INTO <table> (<列>...) VALUES (<值>...);` 生成
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// 是否用 BEGIN TRANSACTION / COMMIT 包裹
    #[serde(default)]
    pub wrap_in_transaction: bool,
    /// 输出文件名（相对输出目录），为空时使用 `<name>.sql`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// 是否转义字符串中的单引号
    #[serde(default)]
    pub escape_strings: bool,
}

impl FixtureSpec {
    /// 从 JSON 字符串解析夹具定义
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从 YAML 字符串解析夹具定义
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// 将夹具定义序列化为 JSON 字符串
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 将夹具定义序列化为 YAML 字符串
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// 创建新夹具定义的构建器
    pub fn builder(name: impl Into<String>, table: impl Into<String>) -> FixtureSpecBuilder {
        FixtureSpecBuilder::new(name, table)
    }

    /// 输出文件名
    pub fn output_file_name(&self) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| format!("{}.sql", self.name))
    }

    /// 按顺序排列的列名
    pub fn columns(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.column.as_str()).collect()
    }

    /// 覆盖记录数
    pub fn with_record_count(mut self, record_count: usize) -> Self {
        self.record_count = record_count;
        self
    }
}

/// 列定义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// 列名，同时也是模板中的占位符名
    pub column: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(column: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            column: column.into(),
            kind,
        }
    }
}

/// 列取值方式
///
/// 使用 serde 的 tagged enum 序列化，`kind` 字段指定取值方式。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// 均匀抽取整数，默认左闭右开 `[start, end)`，`inclusive` 时为 `[start, end]`
    Integer {
        start: i64,
        end: i64,
        #[serde(default)]
        inclusive: bool,
    },
    /// 从候选列表中均匀抽取
    Choice { values: Vec<String> },
    /// 第 i 条记录取候选列表的第 i 项
    Sequence { values: Vec<String> },
    /// 随机抽取一个子模板，用同一条记录中前面各列的值替换 `{列名}` 占位符
    Template { templates: Vec<String> },
}

impl FieldKind {
    /// 获取取值方式名称
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer { .. } => "integer",
            Self::Choice { .. } => "choice",
            Self::Sequence { .. } => "sequence",
            Self::Template { .. } => "template",
        }
    }
}

fn to_strings<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

/// 夹具定义构建器
///
/// 提供流式 API 来构建夹具定义，比直接构造 FixtureSpec 更直观。
pub struct FixtureSpecBuilder {
    spec: FixtureSpec,
}

impl FixtureSpecBuilder {
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            spec: FixtureSpec {
                name: name.into(),
                description: String::new(),
                table: table.into(),
                record_count: 0,
                fields: Vec::new(),
                dedupe: false,
                template: None,
                wrap_in_transaction: false,
                output: None,
                escape_strings: false,
            },
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.spec.description = desc.into();
        self
    }

    pub fn record_count(mut self, count: usize) -> Self {
        self.spec.record_count = count;
        self
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.spec.fields.push(field);
        self
    }

    /// 左闭右开整数列
    pub fn integer(self, column: impl Into<String>, range: Range<i64>) -> Self {
        self.field(FieldSpec::new(
            column,
            FieldKind::Integer {
                start: range.start,
                end: range.end,
                inclusive: false,
            },
        ))
    }

    /// 闭区间整数列
    pub fn integer_inclusive(self, column: impl Into<String>, range: RangeInclusive<i64>) -> Self {
        self.field(FieldSpec::new(
            column,
            FieldKind::Integer {
                start: *range.start(),
                end: *range.end(),
                inclusive: true,
            },
        ))
    }

    pub fn choice<I, S>(self, column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field(FieldSpec::new(
            column,
            FieldKind::Choice {
                values: to_strings(values),
            },
        ))
    }

    pub fn sequence<I, S>(self, column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field(FieldSpec::new(
            column,
            FieldKind::Sequence {
                values: to_strings(values),
            },
        ))
    }

    pub fn template<I, S>(self, column: impl Into<String>, templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field(FieldSpec::new(
            column,
            FieldKind::Template {
                templates: to_strings(templates),
            },
        ))
    }

    pub fn dedupe(mut self, dedupe: bool) -> Self {
        self.spec.dedupe = dedupe;
        self
    }

    pub fn wrap_in_transaction(mut self, wrap: bool) -> Self {
        self.spec.wrap_in_transaction = wrap;
        self
    }

    /// 自定义语句模板
    pub fn statement_template(mut self, template: impl Into<String>) -> Self {
        self.spec.template = Some(template.into());
        self
    }

    pub fn output(mut self, file_name: impl Into<String>) -> Self {
        self.spec.output = Some(file_name.into());
        self
    }

    pub fn escape_strings(mut self, escape: bool) -> Self {
        self.spec.escape_strings = escape;
        self
    }

    pub fn build(self) -> FixtureSpec {
        self.spec
    }
}
