//! # Inventory CLI
//!
//! 文字命令協定：斷詞、命令解析、命令迴圈與報表輸出

pub mod command;
pub mod logging;
pub mod report;
pub mod session;

// Re-export 主要類型
pub use command::{Command, ComponentLine, Verb};
pub use session::{Flow, Session};

/// 命令層錯誤
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("{0}: unknown command")]
    UnknownCommand(String),

    #[error("{command}: missing argument {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{0}: too many arguments")]
    TooManyArguments(&'static str),
}
