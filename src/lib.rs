//! Flappy Gates - a one-button side-scroller
//!
//! Core modules:
//! - `sim`: Game simulation (physics, collisions, spawning, phase machine)
//! - `renderer`: Per-phase draw dispatch over a 2D surface
//! - `config`: Tunable constants with startup validation

pub mod config;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};

/// Layout and default tuning constants
pub mod consts {
    /// Drawing surface size in logical units
    pub const BOARD_WIDTH: f32 = 360.0;
    pub const BOARD_HEIGHT: f32 = 640.0;

    /// Bird defaults
    pub const BIRD_X: f32 = 50.0;
    pub const BIRD_START_Y: f32 = BOARD_HEIGHT / 2.0;
    pub const BIRD_WIDTH: f32 = 40.0;
    pub const BIRD_HEIGHT: f32 = 30.0;

    /// Per-frame physics (units/frame, units/frame²)
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_IMPULSE: f32 = -6.0;
    pub const PIPE_SPEED: f32 = 2.0;

    /// Pipe geometry
    pub const PIPE_WIDTH: f32 = 50.0;
    pub const PIPE_GAP: f32 = 200.0;
    /// Keeps the gap away from the very bottom of the board
    pub const SPAWN_MARGIN: f32 = 50.0;

    /// Wall-clock timers (seconds)
    pub const SPAWN_INTERVAL_SECS: f32 = 1.5;
    pub const INPUT_LOCK_SECS: f32 = 1.0;

    /// Score awarded per pipe; a gate is two pipes
    pub const SCORE_PER_PIPE: f32 = 0.5;

    /// Largest frame delta fed to the timers
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Menu layout
    pub const PLAY_BUTTON_WIDTH: f32 = 115.0;
    pub const PLAY_BUTTON_HEIGHT: f32 = 64.0;
    pub const PLAY_BUTTON_X: f32 = BOARD_WIDTH / 2.0 - 115.5 / 2.0;
    pub const PLAY_BUTTON_Y: f32 = BOARD_HEIGHT / 2.0 - PLAY_BUTTON_HEIGHT / 2.0;
    pub const LOGO_WIDTH: f32 = 300.0;
    pub const LOGO_HEIGHT: f32 = 100.0;
    pub const LOGO_X: f32 = BOARD_WIDTH / 2.0 - LOGO_WIDTH / 2.0;
    pub const LOGO_Y: f32 = BOARD_HEIGHT / 4.0;

    /// Game over layout
    pub const GAME_OVER_WIDTH: f32 = 400.0;
    pub const GAME_OVER_HEIGHT: f32 = 80.0;
    pub const GAME_OVER_Y: f32 = BOARD_HEIGHT / 3.0;

    /// HUD text
    pub const SCORE_FONT: &str = "45px sans-serif";
    pub const SCORE_COLOR: &str = "white";
}

use sim::Rect;

/// Hit box of the menu's play button
pub fn play_button_rect() -> Rect {
    use consts::*;
    Rect::new(PLAY_BUTTON_X, PLAY_BUTTON_Y, PLAY_BUTTON_WIDTH, PLAY_BUTTON_HEIGHT)
}
