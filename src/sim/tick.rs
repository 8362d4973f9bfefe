//! Frame update and input routing
//!
//! `frame` runs once per display refresh: timers first, then the physics
//! step while playing. Rendering happens after it returns. `handle_input` is
//! called synchronously from the platform's event handlers.

use glam::Vec2;

use super::collision::overlaps;
use super::state::{CrashCause, GamePhase, GameState, Pipe};
use crate::play_button_rect;

/// A player trigger
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The action key (Space)
    Action,
    /// Pointer press at board-local coordinates
    Pointer(Vec2),
}

/// Result of one physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Still flying
    Continue,
    /// Run ended this frame
    Crashed(CrashCause),
}

/// Route a trigger according to the current phase. Ignored while the input
/// lock is engaged.
pub fn handle_input(state: &mut GameState, input: InputEvent) {
    if state.is_input_locked() {
        return;
    }

    match state.phase {
        GamePhase::Menu => match input {
            InputEvent::Action => state.start(),
            InputEvent::Pointer(pos) => {
                if play_button_rect().contains_point(pos) {
                    state.start();
                }
            }
        },
        GamePhase::Playing => state.jump(),
        GamePhase::GameOver => state.return_to_menu(),
    }
}

/// Advance everything by one display frame. `dt` is the wall-clock time
/// since the previous frame in seconds and only drives the timers; physics
/// moves a fixed amount per frame.
pub fn frame(state: &mut GameState, dt: f32) {
    state.input_lock.advance(dt);

    match state.phase {
        GamePhase::Menu | GamePhase::GameOver => {}
        GamePhase::Playing => {
            let gates = state.spawner.advance(dt);
            for _ in 0..gates {
                state.spawn_gate();
            }
            step(state);
        }
    }
}

/// One physics step while playing
pub fn step(state: &mut GameState) -> StepOutcome {
    if state.phase != GamePhase::Playing {
        return StepOutcome::Continue;
    }
    state.frame_count += 1;

    let gravity = state.config.gravity;
    let surface_height = state.config.surface_height;
    let pipe_speed = state.config.pipe_speed;
    let pipe_width = state.config.pipe_width;

    let player = &mut state.player;
    player.vel_y += gravity;
    player.pos.y = (player.pos.y + player.vel_y).max(0.0);

    if player.pos.y > surface_height {
        state.crash(CrashCause::Fell);
        return StepOutcome::Crashed(CrashCause::Fell);
    }

    // Advance/score/collide oldest first, stopping at the first hit
    let bird = state.player.rect();
    let mut hit = None;
    for i in 0..state.pipes.len() {
        state.pipes[i].x -= pipe_speed;

        let pipe = &state.pipes[i];
        if !pipe.passed && bird.left() > pipe.right() {
            state.mark_passed(i);
        }

        if overlaps(&bird, &state.pipes[i].rect()) {
            hit = Some(i);
            break;
        }
    }

    if let Some(index) = hit {
        let cause = CrashCause::HitPipe(index);
        state.crash(cause);
        return StepOutcome::Crashed(cause);
    }

    prune_offscreen(&mut state.pipes, pipe_width);
    StepOutcome::Continue
}

/// Drop the leading pipes that are completely past the left edge. Pipes are
/// sorted by x, so only a prefix is ever removed. Returns how many were
/// dropped.
pub fn prune_offscreen(pipes: &mut Vec<Pipe>, pipe_width: f32) -> usize {
    let gone = pipes.iter().take_while(|p| p.x < -pipe_width).count();
    pipes.drain(..gone);
    gone
}
