//! 控制台命令补全器
//!
//! 基于 rustyline 实现 Tab 补全，只补全行首的命令关键字

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 命令关键字列表
const COMMANDS: &[&str] = &[
    "add", "delete", "print", "show", "neighbors", "degree", "stats", "info", "help", "quit",
    "exit",
];

/// adjgraph 控制台补全器
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }

    /// 返回 (替换起点, 候选列表)
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let line_to_cursor = &line[..pos];

        // 当前语句从最后一个 ; 之后开始
        let stmt_start = line_to_cursor.rfind(';').map(|i| i + 1).unwrap_or(0);
        let stmt = &line_to_cursor[stmt_start..];
        let word = stmt.trim_start();

        // 已经过了命令关键字，参数不做补全
        if word.contains(char::is_whitespace) {
            return (pos, vec![]);
        }

        let start = pos - word.len();
        let lower = word.to_lowercase();
        let completions = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(&lower))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();

        (start, completions)
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(line: &str) -> (usize, Vec<String>) {
        let (start, pairs) = CommandCompleter::new().candidates(line, line.len());
        (start, pairs.into_iter().map(|p| p.replacement).collect())
    }

    #[test]
    fn test_complete_keyword() {
        assert_eq!(names("de"), (0, vec!["delete".to_string(), "degree".to_string()]));
        assert_eq!(names("  ST"), (2, vec!["stats".to_string()]));
    }

    #[test]
    fn test_complete_after_separator() {
        assert_eq!(names("add 0 1; pr"), (9, vec!["print".to_string()]));
    }

    #[test]
    fn test_no_completion_for_arguments() {
        assert_eq!(names("add 0"), (5, vec![]));
        assert_eq!(names("add "), (4, vec![]));
    }
}
