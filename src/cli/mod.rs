//! CLI front ends
//!
//! The interactive numbered menu, the one-shot subcommands, and the validated
//! prompt helpers both of them share.

pub mod commands;
pub mod menu;
pub mod prompt;

pub use commands::{handle_expense_command, ExpenseCommands};
pub use menu::{run_menu, MenuChoice};
pub use prompt::{Entry, Prompter, CANCEL};
