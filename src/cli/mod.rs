//! 命令行控制台
//!
//! 命令解析与执行、结果打印和 Tab 补全

pub mod commands;
pub mod completer;
pub mod printer;

pub use commands::{
    demo_script, execute, execute_line, run_demo, run_script, Command, CommandResult,
    DEMO_EDGES, DEMO_VERTICES,
};
pub use completer::CommandCompleter;
pub use printer::{check_vertical_display, GraphStats, PrintMode, Printer};
