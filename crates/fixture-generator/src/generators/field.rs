//! 字段抽取
//!
//! 将列定义编译为可直接抽样的形式。所有定义错误（空范围、空候选列表、
//! 顺序字段不足、模板引用未知列）都在编译阶段报告。

use rand::Rng;
use rand::seq::IndexedRandom;

use seed_shared::{FixtureError, Result};

use super::template::{Substitution, Template};
use crate::fixtures::{FieldKind, FieldSpec};
use crate::models::Value;

#[derive(Debug, Clone)]
enum Sampler {
    /// 闭区间 `[low, high]`
    Integer { low: i64, high: i64 },
    Choice(Vec<String>),
    Sequence(Vec<String>),
    Template(Vec<Template>),
}

/// 编译后的列
#[derive(Debug, Clone)]
pub struct CompiledField {
    column: String,
    sampler: Sampler,
}

impl CompiledField {
    /// 编译列定义
    ///
    /// `earlier_columns` 为本列之前的列名，字段模板只能引用这些列；
    /// `record_count` 用于检查顺序字段的候选值是否足够。
    pub fn compile(
        field: &FieldSpec,
        earlier_columns: &[&str],
        record_count: usize,
    ) -> Result<Self> {
        let column = field.column.clone();

        let sampler = match &field.kind {
            FieldKind::Integer {
                start,
                end,
                inclusive,
            } => {
                let high = if *inclusive {
                    Some(*end)
                } else {
                    end.checked_sub(1)
                };
                match high {
                    Some(high) if *start <= high => Sampler::Integer { low: *start, high },
                    _ => {
                        let close = if *inclusive { ']' } else { ')' };
                        return Err(FixtureError::EmptyRange {
                            column,
                            range: format!("[{}, {}{}", start, end, close),
                        });
                    }
                }
            }
            FieldKind::Choice { values } => {
                if values.is_empty() {
                    return Err(FixtureError::EmptyPool { column });
                }
                Sampler::Choice(values.clone())
            }
            FieldKind::Sequence { values } => {
                if values.is_empty() && record_count > 0 {
                    return Err(FixtureError::EmptyPool { column });
                }
                if values.len() < record_count {
                    return Err(FixtureError::SequenceExhausted {
                        column,
                        index: values.len(),
                        len: values.len(),
                    });
                }
                Sampler::Sequence(values.clone())
            }
            FieldKind::Template { templates } => {
                if templates.is_empty() {
                    return Err(FixtureError::EmptyPool { column });
                }
                let compiled = templates
                    .iter()
                    .map(|t| Template::compile(t, earlier_columns))
                    .collect::<Result<Vec<_>>>()?;
                Sampler::Template(compiled)
            }
        };

        Ok(Self { column, sampler })
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    /// 为第 `index` 条记录抽取本列的值
    ///
    /// `earlier` 是同一条记录中已经抽取的前面各列的值。
    pub fn draw<R: Rng>(&self, index: usize, rng: &mut R, earlier: &[Value]) -> Result<Value> {
        match &self.sampler {
            Sampler::Integer { low, high } => Ok(Value::Integer(rng.random_range(*low..=*high))),
            Sampler::Choice(values) => values
                .choose(rng)
                .map(|v| Value::Text(v.clone()))
                .ok_or_else(|| FixtureError::EmptyPool {
                    column: self.column.clone(),
                }),
            Sampler::Sequence(values) => values
                .get(index)
                .map(|v| Value::Text(v.clone()))
                .ok_or_else(|| FixtureError::SequenceExhausted {
                    column: self.column.clone(),
                    index,
                    len: values.len(),
                }),
            Sampler::Template(templates) => templates
                .choose(rng)
                .map(|t| Value::Text(t.render(earlier, Substitution::Raw)))
                .ok_or_else(|| FixtureError::EmptyPool {
                    column: self.column.clone(),
                }),
        }
    }
}
