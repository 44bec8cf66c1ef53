use anyhow::Result;
use voxdo::commands::Cli;
use voxdo::libs::messages::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    Cli::menu().await
}
