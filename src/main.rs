// StabTerm - Serial test tool for ESP32 stabilization controllers
use anyhow::Context;
use clap::Parser;
use stabterm::cli::args::Args;
use stabterm::cli::commands::execute_command;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    execute_command(args)
        .await
        .context("stabterm exited with an error")?;
    Ok(())
}
