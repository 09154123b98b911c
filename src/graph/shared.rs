//! 共享图
//!
//! 用一把互斥锁保护整个图，读写操作全部串行化

use super::graph::Graph;
use super::options::GraphOptions;
use super::vertex::VertexId;
use crate::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// 可跨线程共享的图句柄
#[derive(Debug, Clone)]
pub struct SharedGraph {
    inner: Arc<Mutex<Graph>>,
}

impl SharedGraph {
    pub fn new(n: usize) -> Self {
        Self::from_graph(Graph::new(n))
    }

    pub fn with_options(n: usize, options: GraphOptions) -> Self {
        Self::from_graph(Graph::with_options(n, options))
    }

    pub fn from_graph(graph: Graph) -> Self {
        Self {
            inner: Arc::new(Mutex::new(graph)),
        }
    }

    /// 在一次加锁内执行只读的复合操作
    pub fn with_graph<R>(&self, f: impl FnOnce(&Graph) -> R) -> R {
        f(&self.inner.lock())
    }

    /// 在一次加锁内执行可变的复合操作
    pub fn with_graph_mut<R>(&self, f: impl FnOnce(&mut Graph) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn add_edge(&self, u: impl Into<VertexId>, v: impl Into<VertexId>) -> Result<()> {
        self.inner.lock().add_edge(u, v)
    }

    pub fn delete_edge(&self, u: impl Into<VertexId>, v: impl Into<VertexId>) -> Result<usize> {
        self.inner.lock().delete_edge(u, v)
    }

    pub fn has_edge(&self, u: impl Into<VertexId>, v: impl Into<VertexId>) -> Result<bool> {
        self.inner.lock().has_edge(u, v)
    }

    pub fn neighbors(&self, vertex: impl Into<VertexId>) -> Result<Vec<VertexId>> {
        self.inner.lock().neighbors(vertex)
    }

    pub fn degree(&self, vertex: impl Into<VertexId>) -> Result<usize> {
        self.inner.lock().degree(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.lock().vertex_count()
    }

    pub fn entry_count(&self) -> usize {
        self.inner.lock().entry_count()
    }

    pub fn dump(&self) -> String {
        self.inner.lock().dump()
    }

    /// 取出当前图的副本
    pub fn snapshot(&self) -> Graph {
        self.inner.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shared_basic() {
        let graph = SharedGraph::new(3);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();

        assert_eq!(graph.neighbors(1).unwrap(), vec![VertexId(2), VertexId(0)]);
        assert_eq!(graph.delete_edge(0, 1).unwrap(), 2);
        assert!(!graph.has_edge(1, 0).unwrap());
        assert_eq!(graph.entry_count(), 2);
    }

    #[test]
    fn test_concurrent_mutation_keeps_symmetry() {
        let graph = SharedGraph::new(6);

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let graph = graph.clone();
                thread::spawn(move || {
                    for i in 0..250usize {
                        let u = (t + i) % 6;
                        let v = (t * 2 + i * 3 + 1) % 6;
                        graph.add_edge(u, v).unwrap();
                        if i % 3 == 0 {
                            graph.delete_edge(u, v).unwrap();
                        }
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        graph.with_graph(|g| {
            for u in 0..6usize {
                for v in 0..6usize {
                    let uv = g.adjacency(u).unwrap().count(VertexId(v));
                    let vu = g.adjacency(v).unwrap().count(VertexId(u));
                    assert_eq!(uv, vu);
                }
            }
        });
        assert_eq!(graph.entry_count() % 2, 0);
    }

    #[test]
    fn test_compound_operation_under_one_lock() {
        let graph = SharedGraph::new(2);
        let added = graph.with_graph_mut(|g| {
            if !g.has_edge(0, 1)? {
                g.add_edge(0, 1)?;
            }
            g.degree(0)
        });
        assert_eq!(added.unwrap(), 1);
        assert_eq!(graph.snapshot().entry_count(), 2);
    }
}
