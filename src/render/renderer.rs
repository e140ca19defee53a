use std::cell::Cell;
use std::path::Path;

use anyhow::{anyhow, Result};
use macroquad::color::{Color, BLACK, RED, WHITE};
use macroquad::math::Rect;
use macroquad::shapes::draw_rectangle;
use macroquad::text::{
    draw_text_ex, load_ttf_font, measure_text, Font, TextDimensions, TextParams,
};
use macroquad::texture::FilterMode;
use macroquad::window::clear_background;

use crate::game::{Aabb, GameState};

pub const BACKGROUND_COLOR: Color = BLACK;
pub const HEAD_COLOR: Color = WHITE;
pub const SEGMENT_COLOR: Color = Color::new(200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 1.0);
pub const FOOD_COLOR: Color = RED;
pub const SCORE_COLOR: Color = WHITE;

/// Top-left corner of the score overlay
pub const SCORE_ORIGIN: (f32, f32) = (10.0, 10.0);

/// A filled rectangle to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub rect: Rect,
    pub color: Color,
}

impl Sprite {
    fn new(hitbox: Aabb, color: Color) -> Self {
        Self {
            rect: Rect::new(
                hitbox.x as f32,
                hitbox.y as f32,
                hitbox.width as f32,
                hitbox.height as f32,
            ),
            color,
        }
    }
}

/// Draw list for one frame: head, then body segments, then food
pub fn scene(state: &GameState) -> Vec<Sprite> {
    let mut sprites = Vec::with_capacity(state.segments.len() + 2);
    sprites.push(Sprite::new(state.snake.hitbox(), HEAD_COLOR));
    sprites.extend(
        state
            .segments
            .hitboxes()
            .map(|hitbox| Sprite::new(hitbox, SEGMENT_COLOR)),
    );
    sprites.push(Sprite::new(state.food.hitbox(), FOOD_COLOR));
    sprites
}

pub fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

/// What to do with the score overlay this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayLayout {
    /// Draw with the baseline this far below the overlay origin
    Draw { baseline_offset: f32 },
    /// Skip the overlay; `report` is set only the first time it fails
    Skip { report: bool },
}

/// Decide whether measured score text can be drawn. `failed` latches after the first
/// failure so it is reported once.
pub fn layout_overlay(dims: &TextDimensions, failed: &Cell<bool>) -> OverlayLayout {
    if dims.width > 0.0 && dims.height > 0.0 {
        return OverlayLayout::Draw {
            baseline_offset: dims.offset_y,
        };
    }

    OverlayLayout::Skip {
        report: !failed.replace(true),
    }
}

pub struct Renderer {
    font: Font,
    font_size: u16,
    overlay_failed: Cell<bool>,
}

impl Renderer {
    /// Load the overlay font. Needs a live window.
    pub async fn load(font_path: &Path, font_size: u16) -> Result<Self> {
        let mut font = load_ttf_font(&font_path.to_string_lossy())
            .await
            .map_err(|err| anyhow!("Failed to load font {}: {err:?}", font_path.display()))?;
        // Crisp, unfiltered glyphs
        font.set_filter(FilterMode::Nearest);

        Ok(Self {
            font,
            font_size,
            overlay_failed: Cell::new(false),
        })
    }

    pub fn render(&self, state: &GameState) {
        clear_background(BACKGROUND_COLOR);

        for sprite in scene(state) {
            draw_rectangle(
                sprite.rect.x,
                sprite.rect.y,
                sprite.rect.w,
                sprite.rect.h,
                sprite.color,
            );
        }

        self.render_score(state.score);
    }

    fn render_score(&self, score: u32) {
        let text = score_text(score);
        let dims = measure_text(&text, Some(&self.font), self.font_size, 1.0);

        let baseline_offset = match layout_overlay(&dims, &self.overlay_failed) {
            OverlayLayout::Draw { baseline_offset } => baseline_offset,
            OverlayLayout::Skip { report } => {
                if report {
                    log::error!("Failed to render text: font has no glyphs for {text:?}");
                }
                return;
            }
        };

        let (x, y) = SCORE_ORIGIN;
        // draw_text_ex positions the baseline
        draw_text_ex(
            &text,
            x,
            y + baseline_offset,
            TextParams {
                font: Some(&self.font),
                font_size: self.font_size,
                color: SCORE_COLOR,
                ..Default::default()
            },
        );
    }
}
