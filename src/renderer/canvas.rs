//! Canvas 2D surface

use std::collections::HashMap;

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::{Sprite, Surface, TextAlign};
use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH, SCORE_COLOR, SCORE_FONT};
use crate::sim::Rect;

/// Draws onto a `CanvasRenderingContext2d` with preloaded sprites
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    sprites: HashMap<Sprite, HtmlImageElement>,
}

impl CanvasSurface {
    /// Start loading every sprite. Drawing a sprite before it has loaded is
    /// skipped.
    pub fn new(ctx: CanvasRenderingContext2d) -> Result<Self, JsValue> {
        let mut sprites = HashMap::with_capacity(Sprite::ALL.len());
        for sprite in Sprite::ALL {
            let img = HtmlImageElement::new()?;
            img.set_src(sprite.path());
            sprites.insert(sprite, img);
        }
        Ok(Self { ctx, sprites })
    }

    fn loaded(&self, sprite: Sprite) -> Option<&HtmlImageElement> {
        self.sprites
            .get(&sprite)
            .filter(|img| img.complete() && img.natural_width() > 0)
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, BOARD_WIDTH as f64, BOARD_HEIGHT as f64);
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        let Some(img) = self.loaded(sprite) else {
            return;
        };
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            rect.left() as f64,
            rect.top() as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        ) {
            log::warn!("Failed to draw {:?}: {:?}", sprite, e);
        }
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, align: TextAlign) {
        self.ctx.set_fill_style_str(SCORE_COLOR);
        self.ctx.set_font(SCORE_FONT);
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("Failed to draw text: {:?}", e);
        }
    }

    fn sprite_size(&self, sprite: Sprite) -> Option<Vec2> {
        self.loaded(sprite)
            .map(|img| Vec2::new(img.natural_width() as f32, img.natural_height() as f32))
    }
}
