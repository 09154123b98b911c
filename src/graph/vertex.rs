//! 顶点定义
//!
//! 顶点没有独立对象，身份由 `[0, N)` 内的下标决定

use std::fmt;

/// 顶点 ID（稠密下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id() {
        let v = VertexId::new(3);
        assert_eq!(v.index(), 3);
        assert_eq!(VertexId::from(3), v);
        assert_eq!(v.to_string(), "3");
    }
}
