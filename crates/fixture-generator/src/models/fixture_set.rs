//! 夹具记录集合
//!
//! 一张表的全部生成记录，保持插入顺序。需要唯一性的表使用按插入顺序
//! 排列的集合去重，首次出现的记录保留，之后的重复记录直接丢弃。

use indexmap::IndexSet;

use super::record::GeneratedRecord;

const MAX_PREALLOCATED: usize = 1 << 16;

#[derive(Debug, Clone)]
enum Storage {
    Unique(IndexSet<GeneratedRecord>),
    All(Vec<GeneratedRecord>),
}

/// 单张表的夹具记录集合
#[derive(Debug, Clone)]
pub struct FixtureSet {
    storage: Storage,
    duplicates_dropped: usize,
}

impl FixtureSet {
    /// 创建集合
    ///
    /// `dedupe` 为 true 时按完整元组去重
    pub fn new(dedupe: bool) -> Self {
        Self::with_capacity(dedupe, 0)
    }

    /// 按预期记录数创建集合
    ///
    /// 预分配不超过 `MAX_PREALLOCATED` 条，更大的数量随插入增长。
    pub fn with_capacity(dedupe: bool, capacity: usize) -> Self {
        let capacity = capacity.min(MAX_PREALLOCATED);
        let storage = if dedupe {
            Storage::Unique(IndexSet::with_capacity(capacity))
        } else {
            Storage::All(Vec::with_capacity(capacity))
        };
        Self {
            storage,
            duplicates_dropped: 0,
        }
    }

    /// 追加一条记录
    ///
    /// 返回记录是否被保留。去重模式下重复记录不会替换或合并已有记录。
    pub fn push(&mut self, record: GeneratedRecord) -> bool {
        match &mut self.storage {
            Storage::Unique(set) => {
                let inserted = set.insert(record);
                if !inserted {
                    self.duplicates_dropped += 1;
                }
                inserted
            }
            Storage::All(records) => {
                records.push(record);
                true
            }
        }
    }

    pub fn is_deduplicated(&self) -> bool {
        matches!(self.storage, Storage::Unique(_))
    }

    /// 被丢弃的重复记录数
    pub fn duplicates_dropped(&self) -> usize {
        self.duplicates_dropped
    }

    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Unique(set) => set.len(),
            Storage::All(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 按首次出现顺序遍历记录
    pub fn iter(&self) -> Box<dyn Iterator<Item = &GeneratedRecord> + '_> {
        match &self.storage {
            Storage::Unique(set) => Box::new(set.iter()),
            Storage::All(records) => Box::new(records.iter()),
        }
    }

    pub fn into_records(self) -> Vec<GeneratedRecord> {
        match self.storage {
            Storage::Unique(set) => set.into_iter().collect(),
            Storage::All(records) => records,
        }
    }
}

impl Extend<GeneratedRecord> for FixtureSet {
    fn extend<T: IntoIterator<Item = GeneratedRecord>>(&mut self, iter: T) {
        for record in iter {
            self.push(record);
        }
    }
}
