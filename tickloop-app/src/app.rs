//! Application state and start-up wiring

use tickloop_core::{InputPoller, SlotError, SuperLoop, TaskHost, TaskScheduler};
use tickloop_hal::LineWriter;

use crate::config::WiringConfig;
use crate::handlers;

/// Context handed to task callbacks
pub struct Board<W> {
    /// Output lines
    pub io: W,
    /// Wiring table
    pub config: WiringConfig,
}

/// Application state owned by the super-loop
pub struct App<W> {
    /// Lamp and light tasks
    pub tasks: TaskScheduler<Board<W>>,
    /// Task context
    pub board: Board<W>,
}

impl<W: LineWriter> App<W> {
    /// Create the application with an empty task pool
    pub fn new(io: W, config: WiringConfig) -> Self {
        Self {
            tasks: TaskScheduler::new(),
            board: Board { io, config },
        }
    }
}

impl<W> TaskHost for App<W> {
    type Context = Board<W>;

    fn split(&mut self) -> (&mut TaskScheduler<Board<W>>, &mut Board<W>) {
        (&mut self.tasks, &mut self.board)
    }
}

/// Register the board's listeners
///
/// Must run once before the loop starts. Tasks are only created later, by
/// listener callbacks.
pub fn register<W: LineWriter>(lp: &mut SuperLoop<App<W>>) -> Result<(), SlotError> {
    let (app, inputs) = lp.parts();
    let cfg = app.board.config;
    cfg.validate()?;
    bind(inputs, &cfg)
}

fn bind<W: LineWriter>(inputs: &mut InputPoller<App<W>>, cfg: &WiringConfig) -> Result<(), SlotError> {
    inputs.add(handlers::door::<W>, cfg.door_listener, cfg.door_line, false)?;
    inputs.add(handlers::button::<W>, cfg.button_listener, cfg.button_line, false)?;
    inputs.add(handlers::trigger::<W>, cfg.trigger_listener, cfg.trigger_line, false)?;
    inputs.add(handlers::sound::<W>, cfg.sound_listener, cfg.sound_line, true)?;
    Ok(())
}
