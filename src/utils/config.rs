use crate::{LifeGrid, Rgb};
use std::time::Duration;

/// The field shown by the application.
pub type Field = LifeGrid<{ Config::GAME_WIDTH }, { Config::GAME_HEIGHT }>;

pub struct Config;

impl Config {
    pub const GAME_WIDTH: usize = 24;
    pub const GAME_HEIGHT: usize = 18;
    pub const BLOCK_SIZE: u32 = 24;
    pub const STEP_INTERVAL: Duration = Duration::from_millis(250);

    pub const BACKGROUND: Rgb = Rgb::new(96, 96, 96);
    pub const FOREGROUND: Rgb = Rgb::new(255, 255, 0);

    pub const APP_NAME: &'static str = "Game of Life";
    pub const APP_VERSION: &'static str = "1.0";
    pub const APP_ID: &'static str = "org.bitstorm.gameoflife";
    pub const APP_METADATA: [(&'static str, &'static str); 4] = [
        ("url", "https://badge.why2025.org/"),
        ("creator", "Badge team"),
        ("copyright", "MIT"),
        ("type", "game"),
    ];

    pub const DEFAULT_LOG_FILTER: &'static str = "info";
    /// Environment variable holding a fixed seed for the field.
    pub const SEED_VAR: &'static str = "GAMEOFLIFE_SEED";

    /// Seed requested through [`Config::SEED_VAR`], if any.
    pub fn seed() -> Option<u64> {
        let value = std::env::var(Self::SEED_VAR).ok()?;
        match value.trim().parse() {
            Ok(seed) => Some(seed),
            Err(err) => {
                log::warn!("ignoring {}={value:?}: {err}", Self::SEED_VAR);
                None
            }
        }
    }
}
