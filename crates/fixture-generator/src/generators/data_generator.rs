//! 夹具生成器
//!
//! 按夹具定义抽取记录、按需去重、渲染为 SQL 语句并写入文件。
//! 随机源由调用方注入，固定种子即可得到逐字节相同的输出。

use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, info, instrument, warn};

use seed_shared::Result;

use super::field::CompiledField;
use super::template::{Substitution, Template};
use super::writer::write_sql_file;
use crate::fixtures::FixtureSpec;
use crate::models::{FixtureSet, GeneratedRecord};

/// 夹具生成器
///
/// 构造时校验并编译夹具定义，之后可以用不同的随机源多次生成。
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    spec: FixtureSpec,
    fields: Vec<CompiledField>,
    statement: Template,
}

impl FixtureGenerator {
    /// 创建生成器
    ///
    /// 定义有误时直接返回错误，不会触及输出文件。
    pub fn new(spec: FixtureSpec) -> Result<Self> {
        let columns = spec.columns();

        let fields = spec
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| CompiledField::compile(field, &columns[..i], spec.record_count))
            .collect::<Result<Vec<_>>>()?;

        let statement = match &spec.template {
            Some(source) => Template::compile(source, &columns)?,
            None => Template::insert_statement(&spec.table, &columns),
        };

        Ok(Self {
            spec,
            fields,
            statement,
        })
    }

    /// 获取夹具定义
    pub fn spec(&self) -> &FixtureSpec {
        &self.spec
    }

    /// 抽取一条记录，各列按顺序独立抽取
    fn draw_record<R: Rng>(&self, index: usize, rng: &mut R) -> Result<GeneratedRecord> {
        let mut values = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let value = field.draw(index, rng, &values)?;
            values.push(value);
        }
        Ok(GeneratedRecord::new(values))
    }

    /// 生成记录集合
    ///
    /// 抽取 `record_count` 条记录；去重时保留首次出现的记录，
    /// 因此最终数量可能少于请求数量。
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<FixtureSet> {
        let mut set = FixtureSet::with_capacity(self.spec.dedupe, self.spec.record_count);

        for index in 0..self.spec.record_count {
            let record = self.draw_record(index, rng)?;
            set.push(record);
        }

        debug!(
            fixture = %self.spec.name,
            requested = self.spec.record_count,
            kept = set.len(),
            dropped = set.duplicates_dropped(),
            "记录抽取完成"
        );
        Ok(set)
    }

    /// 将单条记录渲染为 SQL 语句
    pub fn render(&self, record: &GeneratedRecord) -> String {
        self.statement.render(
            record.values(),
            Substitution::SqlLiteral {
                escape_strings: self.spec.escape_strings,
            },
        )
    }

    /// 将整个记录集合渲染为 SQL 语句
    pub fn render_all(&self, set: &FixtureSet) -> Vec<String> {
        set.iter().map(|record| self.render(record)).collect()
    }

    /// 生成并写入文件
    ///
    /// 文件会被覆盖。全部写入并刷新后返回生成报告。
    #[instrument(skip(self, rng), fields(fixture = %self.spec.name))]
    pub fn write_to<R: Rng>(&self, path: &Path, rng: &mut R) -> Result<GenerationReport> {
        let set = self.generate(rng)?;
        let statements = self.render_all(&set);

        let written = write_sql_file(path, &statements, self.spec.wrap_in_transaction)?;

        let report = GenerationReport {
            fixture: self.spec.name.clone(),
            table: self.spec.table.clone(),
            requested: self.spec.record_count,
            written,
            duplicates_dropped: set.duplicates_dropped(),
            path: path.to_path_buf(),
        };

        if report.duplicates_dropped > 0 {
            warn!(
                table = %report.table,
                dropped = report.duplicates_dropped,
                "去重丢弃了重复记录"
            );
        }
        info!(
            table = %report.table,
            written = report.written,
            path = %report.path.display(),
            "夹具已写入"
        );

        Ok(report)
    }
}

/// 单次生成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub fixture: String,
    pub table: String,
    /// 请求抽取的记录数
    pub requested: usize,
    /// 实际写入的语句数
    pub written: usize,
    pub duplicates_dropped: usize,
    pub path: PathBuf,
}
