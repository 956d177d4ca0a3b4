use crate::{draw_grid, Engine, Layout, Renderer, SimulationClock};
use std::time::Duration;

/// Toolkit-independent key codes the driver reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Q,
    R,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// The window was asked to close.
    Quit,
    KeyDown(Key),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Terminated,
}

/// What the host loop should do after a callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Terminate,
}

/// Application state handed to every host callback.
///
/// The host creates it once (`new`), then calls `on_event` and `on_frame`
/// from its loop until either returns [`Flow::Terminate`], and finally
/// `on_shutdown`.
pub struct FrameDriver<E: Engine> {
    engine: E,
    clock: SimulationClock,
    state: RunState,
    layout: Layout,
}

impl<E: Engine> FrameDriver<E> {
    /// `now` - current monotonic timestamp; the first generation advance
    /// happens one `step_interval` after it.
    pub fn new(engine: E, now: Duration, step_interval: Duration) -> Self {
        log::info!(
            "starting a {}x{} field with {} live cells, one generation every {:?}",
            engine.width(),
            engine.height(),
            engine.population(),
            step_interval
        );
        Self {
            engine,
            clock: SimulationClock::new(now, step_interval),
            state: RunState::Running,
            layout: Layout::default(),
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    fn flow(&self) -> Flow {
        match self.state {
            RunState::Running => Flow::Continue,
            RunState::Terminated => Flow::Terminate,
        }
    }

    /// Run every generation that is due by `now`, then draw the field once.
    ///
    /// Does nothing once the driver has terminated.
    pub fn on_frame<R: Renderer + ?Sized>(&mut self, now: Duration, renderer: &mut R) -> Flow {
        if self.state == RunState::Terminated {
            return Flow::Terminate;
        }

        let mut steps = 0u64;
        while self.clock.tick(now) {
            self.engine.step();
            steps += 1;
        }
        if steps > 1 {
            log::debug!(
                "caught up {steps} generations (now at {})",
                self.engine.generation()
            );
        }

        draw_grid(&self.engine, renderer, &self.layout);
        self.flow()
    }

    pub fn on_event(&mut self, event: Event) -> Flow {
        if self.state == RunState::Terminated {
            return Flow::Terminate;
        }

        match event {
            Event::Quit | Event::KeyDown(Key::Escape) | Event::KeyDown(Key::Q) => {
                log::info!("quit requested ({event:?})");
                self.state = RunState::Terminated;
            }
            Event::KeyDown(Key::R) => {
                self.engine.initialize();
                log::info!(
                    "field restarted with {} live cells",
                    self.engine.population()
                );
            }
            Event::KeyDown(Key::Other) => {}
        }
        self.flow()
    }

    pub fn on_shutdown(&self) {
        log::info!(
            "shutting down at generation {} with {} live cells",
            self.engine.generation(),
            self.engine.population()
        );
    }
}
