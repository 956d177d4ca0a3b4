mod app;
mod draw;

pub use app::App;
use draw::PainterRenderer;
