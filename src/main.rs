//! Gomoku - two-player board game
//!
//! Starts the egui board by default, or a plain terminal game with `--console`.
//!
//! # Usage
//!
//! ```bash
//! gomoku
//! gomoku --console
//! gomoku --size 19 --save games/last.txt
//! gomoku --config my.toml --write-config
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gomoku::config::{self, Config, Frontend};
use gomoku::console::Console;
use gomoku::ui::GomokuApp;
use gomoku::GameState;

#[derive(Parser)]
#[command(name = "gomoku")]
#[command(author, version, about = "Two-player Gomoku with threat hints, undo and replay")]
struct Args {
    /// Play in the terminal instead of opening a window
    #[arg(long)]
    console: bool,

    /// Board side length (5-25)
    #[arg(long, short = 's')]
    size: Option<usize>,

    /// Save file used by save/load
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,

    /// Config file (default: platform config dir)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start with threat hints hidden
    #[arg(long)]
    no_threats: bool,

    /// Write the effective config back to the config file and exit
    #[arg(long)]
    write_config: bool,
}

impl Args {
    /// Command-line flags take precedence over the config file
    fn apply(&self, config: &mut Config) {
        if self.console {
            config.frontend = Frontend::Console;
        }
        if let Some(size) = self.size {
            config.board_size = size;
        }
        if let Some(save) = &self.save {
            config.save_path = save.clone();
        }
        if self.no_threats {
            config.show_threats = false;
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config_path = args.config.clone().or_else(config::default_path);
    let mut config = match &config_path {
        Some(path) => config::load_from(path),
        None => Config::default(),
    };
    args.apply(&mut config);

    if args.write_config {
        let path = config_path.context("no config directory available on this platform")?;
        config::save_to(&path, &config)?;
        tracing::info!("Wrote config to {}", path.display());
        return Ok(());
    }

    let game = GameState::with_size(config.board_size)?;
    tracing::info!(size = config.board_size, frontend = ?config.frontend, "starting game");

    match config.frontend {
        Frontend::Console => {
            let stdin = io::stdin();
            let save_path = config.save_path.clone();
            let mut console = Console::new(game, stdin.lock(), io::stdout(), save_path)
                .with_threats(config.show_threats);
            console.run()?;
            Ok(())
        }
        Frontend::Gui => run_gui(game, config),
    }
}

fn run_gui(game: GameState, config: Config) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, game, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}
