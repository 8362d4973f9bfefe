//! Game state and core simulation types
//!
//! Everything the frame loop, input handlers and renderer share lives in one
//! owned `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::spawn;
use super::timer::{OneShotTimer, PeriodicTimer};
use crate::config::{ConfigError, GameConfig};
use crate::consts::SCORE_PER_PIPE;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen with the play button
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended, showing the final score
    GameOver,
}

/// Which way a pipe faces (only affects the sprite)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeKind {
    /// Hangs from the top edge
    Top,
    /// Rises from the bottom edge
    Bottom,
}

/// The bird
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (units/frame, positive is down)
    pub vel_y: f32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.bird_x, config.bird_start_y),
            size: Vec2::new(config.bird_width, config.bird_height),
            vel_y: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            min: self.pos,
            size: self.size,
        }
    }
}

/// One half of a gate
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: PipeKind,
    /// Set once the bird has fully cleared this pipe
    pub passed: bool,
}

impl Pipe {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// x coordinate of the trailing edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    /// Fell below the bottom edge
    Fell,
    /// Hit the pipe at this index in the live sequence
    HitPipe(usize),
}

/// Something observable that happened during a frame or input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Started,
    Jumped,
    GateSpawned { top_height: f32 },
    Scored { score: f32 },
    Crashed { cause: CrashCause, score: f32 },
    ReturnedToMenu,
}

impl GameEvent {
    /// Write the event to the log at a level matching its importance
    pub fn log(&self) {
        match self {
            GameEvent::Started => log::info!("Run started"),
            GameEvent::Jumped => log::trace!("Jump"),
            GameEvent::GateSpawned { top_height } => {
                log::debug!("Gate spawned (top height {})", top_height)
            }
            GameEvent::Scored { score } => log::debug!("Score: {}", score),
            GameEvent::Crashed { cause, score } => {
                log::info!("Game over ({:?}), final score {}", cause, score.floor())
            }
            GameEvent::ReturnedToMenu => log::info!("Back to menu"),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub player: Player,
    /// Live pipes in spawn order (ascending x)
    pub pipes: Vec<Pipe>,
    /// Half a point per pipe passed
    pub score: f32,
    /// Frames simulated while playing
    pub frame_count: u64,
    pub(crate) spawner: PeriodicTimer,
    pub(crate) input_lock: OneShotTimer,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a state in the menu phase. Rejects configs the spawner
    /// cannot work with.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            player: Player::new(&config),
            spawner: PeriodicTimer::new(config.spawn_interval_secs),
            input_lock: OneShotTimer::default(),
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            pipes: Vec::new(),
            score: 0.0,
            frame_count: 0,
            events: Vec::new(),
            config,
        })
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u32 {
        self.score.floor() as u32
    }

    /// True while input is being ignored
    pub fn is_input_locked(&self) -> bool {
        self.input_lock.is_pending()
    }

    /// True while the periodic spawner is armed
    pub fn is_spawner_armed(&self) -> bool {
        self.spawner.is_armed()
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Bird back at the start, no pipes, no score
    fn reset_run(&mut self) {
        self.player = Player::new(&self.config);
        self.pipes.clear();
        self.score = 0.0;
        self.frame_count = 0;
    }

    /// Menu -> Playing
    pub(crate) fn start(&mut self) {
        self.reset_run();
        self.spawner.arm();
        self.phase = GamePhase::Playing;
        self.emit(GameEvent::Started);
    }

    /// Playing -> GameOver
    pub(crate) fn crash(&mut self, cause: CrashCause) {
        self.spawner.cancel();
        self.input_lock.arm(self.config.input_lock_secs);
        self.phase = GamePhase::GameOver;
        let score = self.score;
        self.emit(GameEvent::Crashed { cause, score });
    }

    /// GameOver -> Menu
    pub(crate) fn return_to_menu(&mut self) {
        self.reset_run();
        self.spawner.cancel();
        self.input_lock.arm(self.config.input_lock_secs);
        self.phase = GamePhase::Menu;
        self.emit(GameEvent::ReturnedToMenu);
    }

    pub(crate) fn jump(&mut self) {
        self.player.vel_y = self.config.jump_impulse;
        self.emit(GameEvent::Jumped);
    }

    /// Append a freshly spawned gate to the live pipes
    pub(crate) fn spawn_gate(&mut self) {
        debug_assert_eq!(self.phase, GamePhase::Playing);
        let (top, bottom) = spawn::spawn_gate(&mut self.rng, &self.config);
        let top_height = top.height;
        self.pipes.push(top);
        self.pipes.push(bottom);
        self.emit(GameEvent::GateSpawned { top_height });
    }

    /// Mark a pipe passed and award its half point (once per pipe)
    pub(crate) fn mark_passed(&mut self, index: usize) {
        let pipe = &mut self.pipes[index];
        if pipe.passed {
            return;
        }
        pipe.passed = true;
        self.score += SCORE_PER_PIPE;
        let score = self.score;
        self.emit(GameEvent::Scored { score });
    }
}
