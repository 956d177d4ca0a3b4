use thiserror::Error;

/// Failures while bringing the application up. Everything past startup is
/// infallible.
#[derive(Debug, Error)]
pub enum Error {
    #[error("couldn't install the logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("couldn't create the window or renderer: {0}")]
    Toolkit(#[from] eframe::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
