//! Per-phase drawing
//!
//! The renderer only knows the `Surface` trait. On the web it is backed by a
//! canvas 2D context (`canvas` module); tests use a recording surface.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::consts::*;
use crate::play_button_rect;
use crate::sim::{GamePhase, GameState, PipeKind, Rect};

/// Image assets the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    Bird,
    TopPipe,
    BottomPipe,
    PlayButton,
    Logo,
    GameOver,
}

impl Sprite {
    pub const ALL: [Sprite; 7] = [
        Sprite::Background,
        Sprite::Bird,
        Sprite::TopPipe,
        Sprite::BottomPipe,
        Sprite::PlayButton,
        Sprite::Logo,
        Sprite::GameOver,
    ];

    /// Path of the image relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            Sprite::Background => "./Images/flappybirdbg.png",
            Sprite::Bird => "./Images/flappybird.png",
            Sprite::TopPipe => "./Images/toppipe.png",
            Sprite::BottomPipe => "./Images/bottompipe.png",
            Sprite::PlayButton => "./Images/flappyBirdPlayButton.png",
            Sprite::Logo => "./Images/flappyBirdLogo.png",
            Sprite::GameOver => "./Images/flappy-gameover.png",
        }
    }

    pub fn for_pipe(kind: PipeKind) -> Self {
        match kind {
            PipeKind::Top => Sprite::TopPipe,
            PipeKind::Bottom => Sprite::BottomPipe,
        }
    }
}

/// Horizontal anchoring of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// A 2D drawing target
pub trait Surface {
    /// Wipe the whole board
    fn clear(&mut self);
    /// Draw a sprite stretched over `rect`
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect);
    /// Draw score text with the HUD font; `pos` is the baseline anchor
    fn fill_text(&mut self, text: &str, pos: Vec2, align: TextAlign);
    /// Natural size of a sprite, if it has finished loading
    fn sprite_size(&self, sprite: Sprite) -> Option<Vec2>;
}

/// Clear the surface and draw the current phase
pub fn render<S: Surface>(state: &GameState, surface: &mut S) {
    surface.clear();
    match state.phase {
        GamePhase::Menu => render_menu(surface),
        GamePhase::Playing => render_playing(state, surface),
        GamePhase::GameOver => render_game_over(state, surface),
    }
}

fn background(surface: &mut impl Surface) {
    surface.draw_sprite(
        Sprite::Background,
        Rect::new(0.0, 0.0, BOARD_WIDTH, BOARD_HEIGHT),
    );
}

/// Logo height follows the image's aspect ratio once it is known
fn logo_height(surface: &impl Surface) -> f32 {
    surface
        .sprite_size(Sprite::Logo)
        .filter(|size| size.x > 0.0)
        .map(|size| size.y / size.x * LOGO_WIDTH)
        .unwrap_or(LOGO_HEIGHT)
}

fn render_menu(surface: &mut impl Surface) {
    background(surface);
    surface.draw_sprite(Sprite::PlayButton, play_button_rect());
    let height = logo_height(&*surface);
    surface.draw_sprite(Sprite::Logo, Rect::new(LOGO_X, LOGO_Y, LOGO_WIDTH, height));
}

fn render_playing(state: &GameState, surface: &mut impl Surface) {
    background(surface);
    surface.draw_sprite(Sprite::Bird, state.player.rect());
    for pipe in &state.pipes {
        surface.draw_sprite(Sprite::for_pipe(pipe.kind), pipe.rect());
    }
    surface.fill_text(
        &state.display_score().to_string(),
        Vec2::new(5.0, 45.0),
        TextAlign::Left,
    );
}

fn render_game_over(state: &GameState, surface: &mut impl Surface) {
    background(surface);
    let x = (BOARD_WIDTH - GAME_OVER_WIDTH) / 2.0;
    surface.draw_sprite(
        Sprite::GameOver,
        Rect::new(x, GAME_OVER_Y, GAME_OVER_WIDTH, GAME_OVER_HEIGHT),
    );
    surface.fill_text(
        &format!("Your score: {}", state.display_score()),
        Vec2::new(BOARD_WIDTH / 2.0, GAME_OVER_Y + GAME_OVER_HEIGHT + 50.0),
        TextAlign::Center,
    );
}
