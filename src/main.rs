#![warn(clippy::all)]

use gameoflife::{App, Config, Error, Layout};
use std::process::ExitCode;

fn init_logging() -> gameoflife::Result<()> {
    let env = env_logger::Env::default().default_filter_or(Config::DEFAULT_LOG_FILTER);
    env_logger::Builder::from_env(env).try_init()?;
    Ok(())
}

fn run() -> gameoflife::Result<()> {
    use eframe::egui::ViewportBuilder;

    init_logging()?;

    log::info!(
        "{} {} ({})",
        Config::APP_NAME,
        Config::APP_VERSION,
        Config::APP_ID
    );
    for (key, value) in Config::APP_METADATA {
        log::info!("  {key}: {value}");
    }

    let window_size = Layout::default().window_size(Config::GAME_WIDTH, Config::GAME_HEIGHT);
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(Config::APP_NAME)
            .with_app_id(Config::APP_ID)
            .with_inner_size(window_size)
            .with_resizable(false),
        ..Default::default()
    };
    log::info!("renderer: {:?}", options.renderer);

    let seed = Config::seed();
    eframe::run_native(
        Config::APP_NAME,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(seed)))),
    )?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ Error::Logger(_)) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
