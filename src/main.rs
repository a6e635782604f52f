use clap::Parser;
use log::Level;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use tictactoe::core::config::{self, CliOverrides, Notice, TicTacToeConfig};
use tictactoe::tui;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Two-player tic-tac-toe with move history")]
struct Args {
    /// Config file (default: ~/.tictactoe/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(short, long)]
    log_level: Option<String>,

    /// Disable mouse capture (keyboard only)
    #[arg(long)]
    no_mouse: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Nothing is logged until the log file is known; collect and replay
    let mut notices = Vec::new();
    let file_config = match config::load_config(args.config.as_deref(), &mut notices) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            notices.push(Notice {
                level: Level::Warn,
                message: format!("{e}, using defaults"),
            });
            TicTacToeConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            log_level: args.log_level,
            no_mouse: args.no_mouse,
        },
        &mut notices,
    );

    // The terminal belongs to the UI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(&resolved.log_file) {
        Ok(log_file) => {
            let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
        }
        Err(e) => eprintln!(
            "Warning: cannot open log file {}: {e}",
            resolved.log_file.display()
        ),
    }

    log::info!("Tic-tac-toe starting up");
    config::replay_notices(&notices);
    log::debug!("Resolved config: {:?}", resolved);

    tui::run(&resolved)
}
