mod clock;
mod config;
mod traits;

pub use clock::SimulationClock;
pub use config::{Config, Field};
pub use traits::Engine;
