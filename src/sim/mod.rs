//! Game simulation module
//!
//! All gameplay logic lives here, free of rendering and platform code:
//! - Physics advance a fixed amount per frame
//! - Timers are driven by the frame delta handed in by the platform
//! - Spawning uses the state's seeded RNG only

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{Rect, overlaps};
pub use spawn::spawn_gate;
pub use state::{CrashCause, GameEvent, GamePhase, GameState, Pipe, PipeKind, Player};
pub use tick::{InputEvent, StepOutcome, frame, handle_input, prune_offscreen, step};
pub use timer::{OneShotTimer, PeriodicTimer};
