mod driver;
mod engine;
mod error;
mod gui;
mod render;
mod utils;

pub use driver::{Event, Flow, FrameDriver, Key, RunState};
pub use engine::{Cell, LifeGrid};
pub use error::{Error, Result};
pub use gui::App;
pub use render::{draw_grid, Layout, PixelRect, Renderer, Rgb};
pub use utils::{Config, Engine, Field, SimulationClock};
