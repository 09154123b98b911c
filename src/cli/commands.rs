//! 控制台命令处理
//!
//! 解析并执行 `add`、`delete`、`print` 等文本命令

use super::printer::{check_vertical_display, PrintMode, Printer};
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use tracing::debug;

/// 演示图的顶点数
pub const DEMO_VERTICES: usize = 7;

/// 演示图的边
pub const DEMO_EDGES: [(usize, usize); 9] = [
    (0, 1),
    (1, 4),
    (2, 3),
    (1, 3),
    (3, 4),
    (5, 2),
    (1, 6),
    (6, 2),
    (6, 3),
];

/// 控制台命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add(usize, usize),
    Delete(usize, usize),
    Print,
    Neighbors(usize),
    Degree(usize),
    Stats { vertical: bool },
    Help,
    Quit,
}

/// 控制台命令执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

fn parse_vertex(arg: Option<&str>, usage: &str) -> Result<usize> {
    let arg = arg.ok_or_else(|| Error::ParseError(format!("用法: {}", usage)))?;
    arg.parse::<usize>()
        .map_err(|_| Error::ParseError(format!("无效的顶点 ID: {}", arg)))
}

impl Command {
    /// 解析一条命令
    pub fn parse(input: &str) -> Result<Self> {
        let (line, vertical) = check_vertical_display(input);
        let mut parts = line.split_whitespace();
        let cmd = match parts.next() {
            Some(cmd) => cmd.to_lowercase(),
            None => return Err(Error::ParseError("空命令".to_string())),
        };

        let command = match cmd.as_str() {
            "add" | "a" => {
                let usage = "add <u> <v>";
                let u = parse_vertex(parts.next(), usage)?;
                let v = parse_vertex(parts.next(), usage)?;
                Command::Add(u, v)
            }
            "delete" | "del" | "d" => {
                let usage = "delete <u> <v>";
                let u = parse_vertex(parts.next(), usage)?;
                let v = parse_vertex(parts.next(), usage)?;
                Command::Delete(u, v)
            }
            "print" | "p" | "show" => Command::Print,
            "neighbors" | "n" => Command::Neighbors(parse_vertex(parts.next(), "neighbors <u>")?),
            "degree" => Command::Degree(parse_vertex(parts.next(), "degree <u>")?),
            "stats" | "info" => Command::Stats { vertical },
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => {
                return Err(Error::ParseError(format!(
                    "未知命令: {}。输入 'help' 查看帮助。",
                    cmd
                )))
            }
        };

        if let Some(extra) = parts.next() {
            return Err(Error::ParseError(format!("多余的参数: {}", extra)));
        }
        Ok(command)
    }
}

/// 执行命令，返回要输出的文本；`None` 表示退出
fn apply(command: &Command, graph: &mut Graph, printer: &Printer) -> Result<Option<String>> {
    debug!(?command, "执行命令");

    let output = match *command {
        Command::Add(u, v) => {
            graph.add_edge(u, v)?;
            format!("已添加边 {}-{}", u, v)
        }
        Command::Delete(u, v) => match graph.delete_edge(u, v)? {
            0 => format!("边 {}-{} 不存在，未做修改", u, v),
            removed => format!("已删除边 {}-{}（摘除 {} 个条目）", u, v, removed),
        },
        Command::Print => printer.print_graph(graph),
        Command::Neighbors(u) => printer.print_neighbors(VertexId(u), &graph.neighbors(u)?),
        Command::Degree(u) => format!("顶点 {} 的度: {}", u, graph.degree(u)?),
        Command::Stats { vertical } => {
            let mode = if vertical {
                PrintMode::Vertical
            } else {
                printer.mode()
            };
            printer.print_stats_as(graph, mode)
        }
        Command::Help => Printer::print_help(),
        Command::Quit => return Ok(None),
    };

    Ok(Some(output))
}

/// 执行一条已解析的命令
pub fn execute(command: &Command, graph: &mut Graph, printer: &Printer) -> CommandResult {
    match apply(command, graph, printer) {
        Ok(Some(output)) if output.is_empty() => CommandResult::Continue,
        Ok(Some(output)) => CommandResult::Message(output),
        Ok(None) => CommandResult::Exit,
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// 解析并执行一行输入
pub fn execute_line(input: &str, graph: &mut Graph, printer: &Printer) -> CommandResult {
    match Command::parse(input) {
        Ok(command) => execute(&command, graph, printer),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn push_line(buf: &mut String, text: &str) {
    buf.push_str(text);
    if !text.ends_with('\n') {
        buf.push('\n');
    }
}

/// 依次执行以 `;` 或换行分隔的命令
///
/// 空行和以 `#` 开头的行被跳过。遇到 `quit` 停止，遇到第一个错误时返回该错误。
pub fn run_script(script: &str, graph: &mut Graph, printer: &Printer) -> Result<String> {
    let mut output = String::new();

    for line in script.split(|c: char| c == ';' || c == '\n') {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let command = Command::parse(line)?;
        match apply(&command, graph, printer)? {
            Some(text) => push_line(&mut output, &text),
            None => break,
        }
    }

    Ok(output)
}

/// 演示脚本：添加九条边、打印、删除 1-4、再打印
pub fn demo_script() -> String {
    let mut script: Vec<String> = DEMO_EDGES
        .iter()
        .map(|(u, v)| format!("add {} {}", u, v))
        .collect();
    script.push("print".to_string());
    script.push("delete 1 4".to_string());
    script.push("print".to_string());
    script.join("\n")
}

/// 运行演示并返回完整输出
pub fn run_demo(printer: &Printer) -> Result<String> {
    let mut graph = Graph::new(DEMO_VERTICES);
    for &(u, v) in DEMO_EDGES.iter() {
        graph.add_edge(u, v)?;
    }

    let mut output = String::from("Graph after adding edges:\n");
    output.push_str(&printer.print_graph(&graph));

    output.push_str("\nDeleting edge 1-4:\n");
    graph.delete_edge(1, 4)?;

    output.push_str("\nGraph after deleting edge 1-4:\n");
    output.push_str(&printer.print_graph(&graph));

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO_OUTPUT: &str = "\
Graph after adding edges:
Vertex 0: 1 -> NULL
Vertex 1: 6 -> 3 -> 4 -> 0 -> NULL
Vertex 2: 6 -> 5 -> 3 -> NULL
Vertex 3: 6 -> 4 -> 1 -> 2 -> NULL
Vertex 4: 3 -> 1 -> NULL
Vertex 5: 2 -> NULL
Vertex 6: 3 -> 2 -> 1 -> NULL

Deleting edge 1-4:

Graph after deleting edge 1-4:
Vertex 0: 1 -> NULL
Vertex 1: 6 -> 3 -> 0 -> NULL
Vertex 2: 6 -> 5 -> 3 -> NULL
Vertex 3: 6 -> 4 -> 1 -> 2 -> NULL
Vertex 4: 3 -> NULL
Vertex 5: 2 -> NULL
Vertex 6: 3 -> 2 -> 1 -> NULL
";

    #[test]
    fn test_demo_output() {
        assert_eq!(run_demo(&Printer::default()).unwrap(), DEMO_OUTPUT);
    }

    #[test]
    fn test_demo_script() {
        let mut graph = Graph::new(DEMO_VERTICES);
        let output = run_script(&demo_script(), &mut graph, &Printer::default()).unwrap();

        assert!(output.contains("Vertex 1: 6 -> 3 -> 4 -> 0 -> NULL"));
        assert!(output.contains("Vertex 1: 6 -> 3 -> 0 -> NULL"));
        assert_eq!(graph.neighbors(4).unwrap(), vec![VertexId(3)]);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("add 0 1").unwrap(), Command::Add(0, 1));
        assert_eq!(Command::parse("  DEL 3 2 ").unwrap(), Command::Delete(3, 2));
        assert_eq!(Command::parse("n 4").unwrap(), Command::Neighbors(4));
        assert_eq!(Command::parse("show").unwrap(), Command::Print);
        assert_eq!(
            Command::parse("stats\\G").unwrap(),
            Command::Stats { vertical: true }
        );
        assert_eq!(Command::parse("q").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Command::parse(""), Err(Error::ParseError(_))));
        assert!(matches!(Command::parse("add 1"), Err(Error::ParseError(_))));
        assert!(matches!(Command::parse("add 1 x"), Err(Error::ParseError(_))));
        assert!(matches!(Command::parse("add 1 2 3"), Err(Error::ParseError(_))));
        assert!(matches!(Command::parse("connect 1 2"), Err(Error::ParseError(_))));
    }

    #[test]
    fn test_execute_reports_noop_and_errors() {
        let mut graph = Graph::new(3);
        let printer = Printer::default();

        assert_eq!(
            execute_line("delete 0 1", &mut graph, &printer),
            CommandResult::Message("边 0-1 不存在，未做修改".to_string())
        );
        assert!(matches!(
            execute_line("add 0 5", &mut graph, &printer),
            CommandResult::Error(_)
        ));
        assert!(graph.is_empty());

        assert_eq!(execute_line("quit", &mut graph, &printer), CommandResult::Exit);
    }

    #[test]
    fn test_run_script_stops_at_error_and_quit() {
        let printer = Printer::default();

        let mut graph = Graph::new(3);
        let err = run_script("add 0 1; add 0 9; add 1 2", &mut graph, &printer).unwrap_err();
        assert!(matches!(err, Error::VertexOutOfRange { vertex: 9, .. }));
        // 出错前的命令已生效，之后的没有执行
        assert_eq!(graph.entry_count(), 2);

        let mut graph = Graph::new(3);
        let output = run_script("# 注释\nadd 0 1\nquit\nadd 1 2", &mut graph, &printer).unwrap();
        assert_eq!(output, "已添加边 0-1\n");
        assert_eq!(graph.entry_count(), 2);
    }
}
