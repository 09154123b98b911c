//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点越界: {vertex} (顶点数 {vertex_count})")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("边已存在: {u}-{v}")]
    DuplicateEdge { u: usize, v: usize },

    #[error("不允许自环: {0}")]
    SelfLoop(usize),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
