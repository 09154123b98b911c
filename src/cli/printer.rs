//! 结果打印器
//!
//! 邻接结构转储和统计信息的表格/垂直格式输出

use crate::graph::{write_vertex_line, Graph, VertexId};
use prettytable::{format, row, Table};

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式 (\G)
    Vertical,
}

/// 结果打印器
#[derive(Debug, Clone)]
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印整张图的邻接结构
    pub fn print_graph(&self, graph: &Graph) -> String {
        graph.dump()
    }

    /// 打印单个顶点的邻接序列
    pub fn print_neighbors(&self, vertex: VertexId, neighbors: &[VertexId]) -> String {
        let mut output = String::new();
        // 写入 String 不会失败
        let _ = write_vertex_line(&mut output, vertex, neighbors.iter().copied());
        output
    }

    /// 打印统计信息
    pub fn print_stats(&self, graph: &Graph) -> String {
        self.print_stats_as(graph, self.mode)
    }

    /// 按指定模式打印统计信息
    pub fn print_stats_as(&self, graph: &Graph, mode: PrintMode) -> String {
        let stats = GraphStats::collect(graph);
        let rows = stats.rows();

        match mode {
            PrintMode::Table => {
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
                table.set_titles(row!["Property", "Value"]);
                for (name, value) in &rows {
                    table.add_row(row![name, value]);
                }
                table.to_string()
            }
            PrintMode::Vertical => {
                let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
                let mut output = String::from(
                    "*************************** 1. row ***************************\n",
                );
                for (name, value) in &rows {
                    output.push_str(&format!("{:>width$}: {}\n", name, value, width = width));
                }
                output
            }
        }
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   adjgraph 控制台命令帮助
═══════════════════════════════════════════════════════════════

  help, h, ?             显示帮助
  quit, exit, q          退出程序

  add, a <u> <v>         添加无向边 u-v（默认允许平行边）
                         示例: add 0 1
  delete, del, d <u> <v> 删除边 u-v（不存在时不做修改）
                         示例: delete 1 4
  print, p, show         打印所有顶点的邻接序列
  neighbors, n <u>       打印顶点 u 的邻接序列
  degree <u>             显示顶点 u 的度
  stats, info            显示图统计信息

  多条命令可用 ; 分隔，例如: add 0 1; add 1 2; print
  提示: 在 stats 末尾加 \G 可垂直显示

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}

/// 图统计信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub entry_count: usize,
    pub isolated_vertices: usize,
    pub max_degree: usize,
}

impl GraphStats {
    pub fn collect(graph: &Graph) -> Self {
        let mut isolated_vertices = 0;
        let mut max_degree = 0;
        for (_, list) in graph.iter() {
            if list.is_empty() {
                isolated_vertices += 1;
            }
            max_degree = max_degree.max(list.len());
        }

        Self {
            vertex_count: graph.vertex_count(),
            entry_count: graph.entry_count(),
            isolated_vertices,
            max_degree,
        }
    }

    /// 无向边数（每条边贡献两个条目）
    pub fn edge_count(&self) -> usize {
        self.entry_count / 2
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Vertex Count", self.vertex_count.to_string()),
            ("Edge Count", self.edge_count().to_string()),
            ("Adjacency Entries", self.entry_count.to_string()),
            ("Isolated Vertices", self.isolated_vertices.to_string()),
            ("Max Degree", self.max_degree.to_string()),
        ]
    }
}

/// 检查命令是否以 \G 结尾（垂直显示）
pub fn check_vertical_display(input: &str) -> (String, bool) {
    let trimmed = input.trim();
    if trimmed.ends_with("\\G") || trimmed.ends_with("\\g") {
        let clean = trimmed[..trimmed.len() - 2].trim().to_string();
        (clean, true)
    } else {
        (trimmed.to_string(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph
    }

    #[test]
    fn test_print_neighbors() {
        let printer = Printer::default();
        assert_eq!(
            printer.print_neighbors(VertexId(0), &[VertexId(2), VertexId(1)]),
            "Vertex 0: 2 -> 1 -> NULL\n"
        );
        assert_eq!(printer.print_neighbors(VertexId(3), &[]), "Vertex 3: NULL\n");
    }

    #[test]
    fn test_stats() {
        let stats = GraphStats::collect(&sample());
        assert_eq!(stats.vertex_count, 4);
        assert_eq!(stats.entry_count, 4);
        assert_eq!(stats.edge_count(), 2);
        assert_eq!(stats.isolated_vertices, 1);
        assert_eq!(stats.max_degree, 2);
    }

    #[test]
    fn test_print_stats_modes() {
        let graph = sample();
        let printer = Printer::default();

        let table = printer.print_stats(&graph);
        assert!(table.contains("Vertex Count"));
        assert!(table.contains("Isolated Vertices"));

        let vertical = printer.print_stats_as(&graph, PrintMode::Vertical);
        assert!(vertical.contains("Edge Count: 2"));
        assert!(vertical.starts_with("****"));
    }

    #[test]
    fn test_check_vertical_display() {
        assert_eq!(check_vertical_display("stats\\G"), ("stats".to_string(), true));
        assert_eq!(check_vertical_display(" stats "), ("stats".to_string(), false));
    }
}
