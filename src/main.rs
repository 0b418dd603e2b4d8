use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use expense_tracker::cli::{handle_expense_command, run_menu, ExpenseCommands, Prompter};
use expense_tracker::config::{ExpensePaths, DATA_FILE_ENV};
use expense_tracker::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense ledger",
    long_about = "Keeps a list of dated, categorized expenses in a local JSON file. \
                  Run without a subcommand for the interactive menu."
)]
struct Cli {
    /// Path to the expenses JSON file
    #[arg(short, long, global = true, env = DATA_FILE_ENV)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<ExpenseCommands>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let paths = ExpensePaths::resolve(cli.file);
    let mut store = ExpenseStore::open(paths.data_file());

    match cli.command {
        Some(cmd) => {
            let mut stdout = io::stdout().lock();
            handle_expense_command(&mut store, cmd, &mut stdout)?;
        }
        None => {
            let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
            run_menu(&mut store, &mut prompter)?;
        }
    }

    Ok(())
}
