//! adjgraph - 基于邻接表的无向图
//!
//! 固定顶点数的无向图，每个顶点持有一条邻接序列：
//! - 添加边（默认允许平行边）
//! - 删除边（边不存在时静默忽略）
//! - 邻居枚举与邻接结构的文本转储
//! - 交互式命令行控制台

pub mod cli;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{
    AdjacencyList, Graph, GraphOptions, ParallelEdgePolicy, SelfLoopPolicy, SharedGraph, VertexId,
};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
