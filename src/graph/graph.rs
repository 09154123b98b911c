//! 图数据结构
//!
//! 固定顶点数的无向图，每个顶点持有一条邻接序列

use super::adjacency::AdjacencyList;
use super::options::{GraphOptions, ParallelEdgePolicy, SelfLoopPolicy};
use super::vertex::VertexId;
use crate::error::{Error, Result};
use std::fmt;
use tracing::{debug, trace};

/// 无向图
///
/// 对任意边 (u, v)，u 的序列中有 v，v 的序列中也有 u。
/// 所有修改操作都维持这一对称性。
#[derive(Debug, Clone)]
pub struct Graph {
    /// 每个顶点一条邻接序列，下标即顶点 ID
    lists: Vec<AdjacencyList>,
    /// 平行边与自环策略
    options: GraphOptions,
}

impl Graph {
    /// 创建含 `n` 个孤立顶点的图
    pub fn new(n: usize) -> Self {
        Self::with_options(n, GraphOptions::default())
    }

    /// 按指定配置创建图
    pub fn with_options(n: usize, options: GraphOptions) -> Self {
        Self {
            lists: vec![AdjacencyList::new(); n],
            options,
        }
    }

    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    /// 所有序列的条目总数（每条无向边贡献两个条目）
    pub fn entry_count(&self) -> usize {
        self.lists.iter().map(AdjacencyList::len).sum()
    }

    /// 图中没有任何边
    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(AdjacencyList::is_empty)
    }

    fn check(&self, vertex: VertexId) -> Result<usize> {
        let idx = vertex.index();
        if idx < self.lists.len() {
            Ok(idx)
        } else {
            Err(Error::VertexOutOfRange {
                vertex: idx,
                vertex_count: self.lists.len(),
            })
        }
    }

    // ==================== 边操作 ====================

    /// 添加无向边
    ///
    /// 先把 v 头插进 u 的序列，再把 u 头插进 v 的序列。
    /// 默认不检查重复，重复调用会产生平行条目。
    pub fn add_edge(&mut self, u: impl Into<VertexId>, v: impl Into<VertexId>) -> Result<()> {
        let (u, v) = (u.into(), v.into());
        let ui = self.check(u)?;
        let vi = self.check(v)?;

        if ui == vi && self.options.self_loops == SelfLoopPolicy::Reject {
            return Err(Error::SelfLoop(ui));
        }
        if self.options.parallel_edges == ParallelEdgePolicy::Reject && self.lists[ui].contains(v)
        {
            return Err(Error::DuplicateEdge { u: ui, v: vi });
        }

        self.lists[ui].prepend(v);
        self.lists[vi].prepend(u);

        debug!(u = ui, v = vi, "添加边");
        Ok(())
    }

    /// 删除无向边
    ///
    /// 分别在 u 的序列中摘除第一个 v、在 v 的序列中摘除第一个 u，
    /// 两侧互不依赖。边不存在时什么都不做，不视为错误。
    /// 返回实际摘除的条目数（0、1 或 2）。
    pub fn delete_edge(&mut self, u: impl Into<VertexId>, v: impl Into<VertexId>) -> Result<usize> {
        let (u, v) = (u.into(), v.into());
        let ui = self.check(u)?;
        let vi = self.check(v)?;

        let mut removed = 0;
        if self.lists[ui].remove_first(v) {
            removed += 1;
        }
        if self.lists[vi].remove_first(u) {
            removed += 1;
        }

        if removed == 0 {
            trace!(u = ui, v = vi, "边不存在，忽略删除");
        } else {
            debug!(u = ui, v = vi, removed, "删除边");
        }
        Ok(removed)
    }

    /// u 与 v 之间是否存在边
    pub fn has_edge(&self, u: impl Into<VertexId>, v: impl Into<VertexId>) -> Result<bool> {
        let (u, v) = (u.into(), v.into());
        let ui = self.check(u)?;
        self.check(v)?;
        Ok(self.lists[ui].contains(v))
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻居（最新插入在前）
    pub fn neighbors(&self, vertex: impl Into<VertexId>) -> Result<Vec<VertexId>> {
        Ok(self.adjacency(vertex)?.to_vec())
    }

    /// 获取顶点的邻接序列
    pub fn adjacency(&self, vertex: impl Into<VertexId>) -> Result<&AdjacencyList> {
        let idx = self.check(vertex.into())?;
        Ok(&self.lists[idx])
    }

    /// 获取顶点的度（自环计两次）
    pub fn degree(&self, vertex: impl Into<VertexId>) -> Result<usize> {
        Ok(self.adjacency(vertex)?.len())
    }

    /// 按下标递增遍历所有顶点及其序列
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &AdjacencyList)> {
        self.lists
            .iter()
            .enumerate()
            .map(|(i, list)| (VertexId::new(i), list))
    }

    // ==================== 输出 ====================

    /// 邻接结构的文本转储
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

/// 写出单个顶点的转储行: `Vertex <i>: a -> b -> NULL`
pub(crate) fn write_vertex_line<W: fmt::Write>(
    out: &mut W,
    vertex: VertexId,
    neighbors: impl Iterator<Item = VertexId>,
) -> fmt::Result {
    write!(out, "Vertex {}: ", vertex)?;
    for n in neighbors {
        write!(out, "{} -> ", n)?;
    }
    writeln!(out, "NULL")
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, list) in self.iter() {
            write_vertex_line(f, vertex, list.iter())?;
        }
        Ok(())
    }
}
