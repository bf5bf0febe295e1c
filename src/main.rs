//=========================================================================
// aetheric-launcher
//
// Desktop entry point: opens the game in a native window.
//
//   RUST_LOG=debug aetheric-launcher --parent game-container --config game.toml
//
//=========================================================================

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use aetheric_launcher::config::ConfigOverrides;
use aetheric_launcher::core::Size;
use aetheric_launcher::host::DesktopHost;
use aetheric_launcher::launcher::DEFAULT_PARENT;
use aetheric_launcher::{game_config, Game};

/// Launch the game in a desktop window.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Container id; used as the window title.
    #[arg(long, default_value = DEFAULT_PARENT)]
    parent: String,

    /// TOML file overriding size, scaling, colors or fps.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = game_config(&args.parent);
    if let Some(path) = &args.config {
        let overrides = ConfigOverrides::load(path)
            .with_context(|| format!("loading {}", path.display()))?;
        config.apply(&overrides);
    }

    let mut host = DesktopHost::new(Size::new(config.width, config.height));
    let game = Game::new(config, &mut host).context("failed to boot game")?;

    info!("Launching in `{}`", args.parent);
    game.run().context("game runtime failed")?;

    Ok(())
}
