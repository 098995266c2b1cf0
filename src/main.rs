use anyhow::Result;
use tsync::commands::Cli;
use tsync::libs::logger::Logger;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    Logger::from_env()?.init()?;

    Cli::menu().await
}
