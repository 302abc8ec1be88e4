//! Task and listener callbacks
//!
//! Listener callbacks react to input changes by starting or cancelling
//! tasks; task callbacks drive the output lines.

use tickloop_core::{InputPoller, RunLimit, TaskScheduler};
use tickloop_hal::LineWriter;

use crate::app::{App, Board};

/// Toggle the lamp on every firing
pub fn splash<W: LineWriter>(_tasks: &mut TaskScheduler<Board<W>>, board: &mut Board<W>, n: u32) {
    board.io.write_digital(board.config.lamp_line, (n % 2) as i32);
}

/// Hold the light on, then switch it off and retire
pub fn sound_light<W: LineWriter>(
    tasks: &mut TaskScheduler<Board<W>>,
    board: &mut Board<W>,
    n: u32,
) {
    if n < board.config.light_hold_runs {
        board.io.set_high(board.config.light_line);
        return;
    }
    board.io.set_low(board.config.light_line);
    tasks.cancel(board.config.light_task);
}

/// Door closed: slow lamp flashing
pub fn door<W: LineWriter>(_inputs: &mut InputPoller<App<W>>, app: &mut App<W>, value: i32) {
    if value == 0 {
        let interval = app.board.config.slow_splash_interval;
        start_splash(app, interval);
    }
}

/// Trigger pressed: quick lamp flashing
pub fn trigger<W: LineWriter>(_inputs: &mut InputPoller<App<W>>, app: &mut App<W>, value: i32) {
    if value == 0 {
        let interval = app.board.config.fast_splash_interval;
        start_splash(app, interval);
    }
}

/// Button pressed: stop the lamp
pub fn button<W: LineWriter>(_inputs: &mut InputPoller<App<W>>, app: &mut App<W>, value: i32) {
    if value == 0 {
        app.tasks.cancel(app.board.config.splash_task);
    }
}

/// Loud sound: (re)start the light timer
pub fn sound<W: LineWriter>(_inputs: &mut InputPoller<App<W>>, app: &mut App<W>, value: i32) {
    let cfg = app.board.config;
    if value > cfg.sound_threshold {
        // Wiring table was checked by `register`
        let _ = app
            .tasks
            .add(sound_light::<W>, cfg.light_task, cfg.light_interval, RunLimit::Forever);
    }
}

fn start_splash<W: LineWriter>(app: &mut App<W>, interval: u16) {
    let id = app.board.config.splash_task;
    // Wiring table was checked by `register`
    let _ = app.tasks.add(splash::<W>, id, interval, RunLimit::Forever);
}
