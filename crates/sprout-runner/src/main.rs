mod game;

use anyhow::Result;

use sprout_engine::core::EngineCore;
use sprout_engine::logging::{LoggingConfig, init_logging};
use sprout_engine::window::{Runtime, RuntimeConfig};

use crate::game::Game;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig::default();
    log::info!("starting {}", config.title);

    Runtime::run(config, EngineCore::new(), Game::new())
}
