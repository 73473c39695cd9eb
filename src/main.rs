use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;

use term_snake::game::GameConfig;
use term_snake::modes::{PlainMode, TuiMode};

#[derive(Parser)]
#[command(name = "term_snake")]
#[command(version, about = "Snake on a wrap-around terminal board")]
struct Cli {
    /// Frontend to run
    #[arg(long, default_value = "tui")]
    mode: Mode,

    /// Board rows
    #[arg(long, default_value_t = 10)]
    height: i32,

    /// Board columns
    #[arg(long, default_value_t = 20)]
    width: i32,

    /// JSON config file; overrides --height/--width
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Full-screen interactive board
    Tui,
    /// Line-based prompt loop on stdin/stdout
    Plain,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::new(cli.height, cli.width),
    };

    info!("starting {}x{} board", config.height, config.width);

    match cli.mode {
        Mode::Tui => TuiMode::new(config)?.run().await?,
        Mode::Plain => PlainMode::new(&config)?.run()?,
    }

    Ok(())
}
