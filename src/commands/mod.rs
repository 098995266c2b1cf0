pub mod init;
pub mod list;
pub mod migrations;
pub mod sync;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Fetch the task feed and merge completed tasks into the database")]
    Sync,
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Display stored tasks")]
    List(list::ListArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database schema migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        // A bare invocation runs the sync batch
        match cli.command.unwrap_or(Commands::Sync) {
            Commands::Sync => sync::cmd().await,
            Commands::Init(args) => init::cmd(args),
            Commands::List(args) => list::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
