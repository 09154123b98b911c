//! 图配置
//!
//! 默认配置与最初的链表实现行为一致：允许平行边，允许自环。

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// 平行边策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParallelEdgePolicy {
    /// 重复添加产生平行条目
    #[default]
    Allow,
    /// 已存在的点对再次添加时报错
    Reject,
}

/// 自环策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelfLoopPolicy {
    /// `add_edge(u, u)` 在 u 的序列中插入两个条目
    #[default]
    Allow,
    /// 拒绝自环
    Reject,
}

/// 图配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphOptions {
    pub parallel_edges: ParallelEdgePolicy,
    pub self_loops: SelfLoopPolicy,
}

impl GraphOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 简单图：既不允许平行边也不允许自环
    pub fn simple() -> Self {
        Self {
            parallel_edges: ParallelEdgePolicy::Reject,
            self_loops: SelfLoopPolicy::Reject,
        }
    }

    pub fn with_parallel_edges(mut self, policy: ParallelEdgePolicy) -> Self {
        self.parallel_edges = policy;
        self
    }

    pub fn with_self_loops(mut self, policy: SelfLoopPolicy) -> Self {
        self.self_loops = policy;
        self
    }
}

fn parse_policy(s: &str) -> Result<bool, Error> {
    match s.trim().to_lowercase().as_str() {
        "allow" | "allowed" | "yes" => Ok(true),
        "reject" | "rejected" | "no" => Ok(false),
        other => Err(Error::ParseError(format!(
            "未知策略: {} (可选 allow, reject)",
            other
        ))),
    }
}

impl FromStr for ParallelEdgePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if parse_policy(s)? {
            Self::Allow
        } else {
            Self::Reject
        })
    }
}

impl FromStr for SelfLoopPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if parse_policy(s)? {
            Self::Allow
        } else {
            Self::Reject
        })
    }
}

impl fmt::Display for ParallelEdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

impl fmt::Display for SelfLoopPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Reject => write!(f, "reject"),
        }
    }
}
