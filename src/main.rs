use bevy::prelude::*;
use clap::Parser;

use marble_racer::core::config::GameConfig;
use marble_racer::GamePlugin;

const DEFAULT_CONFIG_PATH: &str = "assets/config/game.ron";

#[derive(Parser, Debug)]
#[command(name = "marble_racer", about = "Keyboard-driven marble race")]
struct Cli {
    /// Path to the RON game configuration (default: assets/config/game.ron).
    #[arg(long)]
    config: Option<String>,
    /// Override the number of obstacle segments.
    #[arg(long)]
    count: Option<u32>,
    /// Fix the level seed (default: random per run).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // An explicitly requested config must load; the shipped default may be
    // absent (fresh checkout) and falls back silently to built-in values.
    let mut cfg = match &cli.config {
        Some(path) => GameConfig::load_from_file(path)
            .map_err(|e| anyhow::anyhow!("config '{path}': {e}"))?,
        None => {
            let (cfg, load_err) = GameConfig::load_or_default(DEFAULT_CONFIG_PATH);
            if let Some(e) = load_err {
                eprintln!("config '{DEFAULT_CONFIG_PATH}' not usable ({e}); using defaults");
            }
            cfg
        }
    };
    if let Some(count) = cli.count {
        cfg.level.count = count;
    }
    if let Some(seed) = cli.seed {
        cfg.level.seed = Some(seed);
    }
    for w in cfg.validate_warnings() {
        eprintln!("config warning: {w}");
    }

    App::new()
        .insert_resource(cfg.clone())
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.window.title.clone(),
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins(GamePlugin)
        .run();
    Ok(())
}
