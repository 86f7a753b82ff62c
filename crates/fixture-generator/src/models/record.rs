//! 生成记录模型
//!
//! 一条记录就是一组按列顺序排列的标量值，除了字段值本身没有其他身份。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 标量字段值
///
/// 只有整数和字符串两种，分别对应 SQL 中不加引号和加单引号的字面量。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Text(String),
}

impl Value {
    /// 转换为 SQL 字面量
    ///
    /// 整数原样输出，字符串加单引号。`escape_strings` 为 false 时不处理
    /// 字符串中的单引号，含单引号的值会产生非法 SQL，这是已知缺陷；
    /// 为 true 时按 SQL 规则将 `'` 转义为 `''`。
    pub fn to_sql_literal(&self, escape_strings: bool) -> String {
        match self {
            Self::Integer(n) => n.to_string(),
            Self::Text(s) if escape_strings => format!("'{}'", s.replace('\'', "''")),
            Self::Text(s) => format!("'{}'", s),
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

/// 原始值，不加引号，用于字段模板内的替换
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// 生成的一条记录
///
/// 相等性和哈希基于完整的字段元组，去重时以此为键。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedRecord {
    values: Vec<Value>,
}

impl GeneratedRecord {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// 按列顺序排列的字段值
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<Value>> for GeneratedRecord {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}
