//! 邻接表
//!
//! 单个顶点的有序邻居序列。逻辑顺序为"最新插入在前"：插入即头插，
//! 遍历时最近插入且尚未删除的条目最先出现。
//!
//! 内部按"最旧在前"存放，头插因此只是一次尾部 push，
//! 所有对外的遍历都反向进行。

use super::vertex::VertexId;
use smallvec::SmallVec;

/// 单个顶点的邻接序列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    /// 邻居条目（最旧在前）
    entries: SmallVec<[VertexId; 4]>,
}

impl AdjacencyList {
    /// 创建空序列
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// 头插一个邻居
    pub fn prepend(&mut self, vertex: VertexId) {
        self.entries.push(vertex);
    }

    /// 按逻辑顺序查找第一个等于 `vertex` 的条目并摘除
    ///
    /// 其余条目的相对顺序不变。未找到时序列保持原样，返回 `false`。
    pub fn remove_first(&mut self, vertex: VertexId) -> bool {
        match self.entries.iter().rposition(|&v| v == vertex) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// 按逻辑顺序（最新在前）遍历
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = VertexId> + ExactSizeIterator + '_ {
        self.entries.iter().rev().copied()
    }

    pub fn to_vec(&self) -> Vec<VertexId> {
        self.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 等于 `vertex` 的条目数（平行边会被重复计数）
    pub fn count(&self, vertex: VertexId) -> usize {
        self.entries.iter().filter(|&&v| v == vertex).count()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.entries.contains(&vertex)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
