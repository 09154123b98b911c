//! adjgraph CLI 工具
//!
//! 演示模式、脚本模式和交互式控制台

use adjgraph::cli::{
    execute_line, run_demo, run_script, CommandCompleter, CommandResult, Printer,
};
use adjgraph::{Graph, GraphOptions, ParallelEdgePolicy, SelfLoopPolicy};
use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "adjgraph-cli")]
#[command(about = "基于邻接表的无向图命令行工具")]
#[command(version)]
struct Args {
    /// 顶点数
    #[arg(short = 'n', long, default_value = "7")]
    vertices: usize,

    /// 平行边策略: allow, reject
    #[arg(long, default_value = "allow")]
    parallel_edges: ParallelEdgePolicy,

    /// 自环策略: allow, reject
    #[arg(long, default_value = "allow")]
    self_loops: SelfLoopPolicy,

    /// 运行内置演示后退出
    #[arg(long)]
    demo: bool,

    /// 执行命令脚本后退出（命令以 ; 分隔）
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let printer = Printer::default();

    if args.demo {
        print!("{}", run_demo(&printer).context("演示运行失败")?);
        return Ok(());
    }

    let options = GraphOptions::new()
        .with_parallel_edges(args.parallel_edges)
        .with_self_loops(args.self_loops);
    let mut graph = Graph::with_options(args.vertices, options);
    info!(
        vertices = args.vertices,
        parallel_edges = %args.parallel_edges,
        self_loops = %args.self_loops,
        "图已创建"
    );

    // 脚本模式
    if let Some(script) = args.execute {
        let output = run_script(&script, &mut graph, &printer).context("脚本执行失败")?;
        print!("{}", output);
        return Ok(());
    }

    run_console(&mut graph, &printer)
}

fn run_console(graph: &mut Graph, printer: &Printer) -> anyhow::Result<()> {
    println!("adjgraph CLI - 基于邻接表的无向图");
    println!("================================");
    println!("顶点数: {}", graph.vertex_count());
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let mut rl: Editor<CommandCompleter, DefaultHistory> =
        Editor::new().map_err(|e| anyhow::anyhow!("无法初始化行编辑器: {}", e))?;
    rl.set_helper(Some(CommandCompleter::new()));

    loop {
        let line = match rl.readline("adjgraph> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(anyhow::anyhow!("读取输入失败: {}", e)),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line);

        let mut exit = false;
        for stmt in line.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            match execute_line(stmt, graph, printer) {
                CommandResult::Continue => {}
                CommandResult::Exit => {
                    exit = true;
                    break;
                }
                CommandResult::Message(msg) => {
                    print!("{}", msg);
                    if !msg.ends_with('\n') {
                        println!();
                    }
                }
                CommandResult::Error(err) => {
                    println!("{}", format!("错误: {}", err).red());
                    break;
                }
            }
        }
        if exit {
            break;
        }
    }

    println!("再见！");
    Ok(())
}
