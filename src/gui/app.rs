use super::PainterRenderer;
use crate::{Config, Event, Field, Flow, FrameDriver, Key};
use eframe::egui::{self, CentralPanel, Context, Frame, ViewportCommand};
use std::time::{Duration, Instant};

pub struct App {
    driver: FrameDriver<Field>, // Conway's GoL field together with its clock.
    epoch: Instant,             // Origin of the timestamps fed to the driver.
    display_logged: bool,       // Display properties are reported on the first frame.
}

fn map_key(key: egui::Key) -> Key {
    match key {
        egui::Key::Escape => Key::Escape,
        egui::Key::Q => Key::Q,
        egui::Key::R => Key::R,
        _ => Key::Other,
    }
}

impl App {
    /// `seed` - random seed of the field (if `None`, then random seed is generated)
    pub fn new(seed: Option<u64>) -> Self {
        let epoch = Instant::now();
        let field = Field::random(seed);
        Self {
            driver: FrameDriver::new(field, epoch.elapsed(), Config::STEP_INTERVAL),
            epoch,
            display_logged: false,
        }
    }

    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn log_display(&mut self, ctx: &Context) {
        if self.display_logged {
            return;
        }
        self.display_logged = true;

        let (monitor_size, pixels_per_point) =
            ctx.input(|input| (input.viewport().monitor_size, input.pixels_per_point));
        match monitor_size {
            Some(size) => log::info!(
                "current display: {}x{} points @{pixels_per_point:.2} pixels per point",
                size.x,
                size.y
            ),
            None => log::info!("current display: unknown size @{pixels_per_point:.2} pixels per point"),
        }
    }

    fn poll_events(ctx: &Context) -> Vec<Event> {
        ctx.input(|input| {
            let mut events = vec![];
            if input.viewport().close_requested() {
                events.push(Event::Quit);
            }
            for event in &input.events {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } = event
                {
                    events.push(Event::KeyDown(map_key(*key)));
                }
            }
            events
        })
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.log_display(ctx);

        let mut flow = Flow::Continue;
        for event in Self::poll_events(ctx) {
            flow = self.driver.on_event(event);
        }

        if flow == Flow::Continue {
            let now = self.now();
            CentralPanel::default()
                .frame(Frame::none())
                .show(ctx, |ui| {
                    let origin = ui.max_rect().min;
                    let mut renderer = PainterRenderer::new(ctx, ui.painter(), origin);
                    flow = self.driver.on_frame(now, &mut renderer);
                });
        }

        if flow == Flow::Terminate {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.driver.on_shutdown();
    }
}
