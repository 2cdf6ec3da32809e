use anyhow::Result;
use clap::Parser;

use bounded_buffer::{
    cli::{execute_run, Cli, MODE_USAGE},
    core::SimulationError,
    services::ConsoleReporter,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 不正なモードはシミュレーション開始前に終了コード1で抜ける
    let config = match cli.to_config() {
        Ok(config) => config,
        Err(SimulationError::InvalidMode { .. }) => {
            eprintln!("{MODE_USAGE}");
            std::process::exit(1);
        }
        Err(error) => {
            eprintln!("❌ エラー: {error}");
            std::process::exit(1);
        }
    };

    execute_run(config, ConsoleReporter::new()).await?;

    Ok(())
}
