//! 图核心模块
//!
//! 定义顶点、邻接序列和图的核心数据结构

mod adjacency;
mod graph;
mod options;
mod shared;
mod vertex;

pub use adjacency::AdjacencyList;
pub use graph::Graph;
pub(crate) use graph::write_vertex_line;
pub use options::{GraphOptions, ParallelEdgePolicy, SelfLoopPolicy};
pub use shared::SharedGraph;
pub use vertex::VertexId;
