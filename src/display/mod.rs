//! Rendering layer.
//!
//! `render` translates a read-only `SimulationState` into calls on a
//! `Presenter`; no game logic is performed here.  The terminal
//! implementation lives in `canvas`.

mod canvas;

pub use canvas::{Canvas, Cell};

use std::io;

use crossterm::style::Color;

use crate::constants::{ARENA_HEIGHT, ARENA_WIDTH, KILLS_TO_WIN, PLAYER_SIZE};
use crate::entities::{GameStatus, ProjectileOwner, SimulationState};
use crate::geometry::{Point, Rect};

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_BACKGROUND: Color = Color::Rgb { r: 0, g: 0, b: 0 };
pub const C_PLAYER: Color = Color::Rgb { r: 0, g: 0, b: 255 };
pub const C_ENEMY: Color = Color::Rgb { r: 255, g: 165, b: 0 };
pub const C_PROJECTILE_PLAYER: Color = Color::Rgb { r: 255, g: 0, b: 0 };
pub const C_PROJECTILE_ENEMY: Color = Color::Rgb { r: 255, g: 165, b: 0 };
pub const C_TEXT: Color = Color::Rgb { r: 255, g: 255, b: 255 };

const SCORE_POSITION: Point = Point::new(10, 10);

/// Drawing primitives the game needs from a graphics backend.  Coordinates
/// are logical arena pixels.
pub trait Presenter {
    fn clear(&mut self, color: Color);
    /// Ship-shaped triangle whose nose points along `angle` (degrees).
    fn draw_filled_triangle(&mut self, center: Point, size: i32, angle: f64, color: Color);
    /// `rect` spun by `angle` degrees about its centre.
    fn draw_rotated_rect(&mut self, rect: Rect, angle: f64, color: Color);
    fn draw_filled_rect(&mut self, rect: Rect, color: Color);
    /// Blit pre-rendered text with its top-left corner at `position`.
    fn draw_text_texture(&mut self, texture: &TextTexture, position: Point);
    fn present(&mut self) -> io::Result<()>;
}

// ── Text ──────────────────────────────────────────────────────────────────────

/// Fixed-pitch glyph metrics in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Font {
    pub glyph_width: i32,
    pub glyph_height: i32,
}

impl Font {
    pub fn render(&self, text: &str) -> TextTexture {
        TextTexture {
            text: text.to_string(),
            width: self.glyph_width * text.chars().count() as i32,
            height: self.glyph_height,
            color: C_TEXT,
        }
    }
}

/// Text laid out once and drawn many times.
#[derive(Clone, Debug, PartialEq)]
pub struct TextTexture {
    pub text: String,
    pub width: i32,
    pub height: i32,
    pub color: Color,
}

impl TextTexture {
    /// Top-left corner that centres the texture in the arena.
    pub fn centered(&self) -> Point {
        Point::new(
            ARENA_WIDTH / 2 - self.width / 2,
            ARENA_HEIGHT / 2 - self.height / 2,
        )
    }
}

pub fn score_text(kills: u32) -> String {
    format!("Enemies Killed: {}/{}", kills, KILLS_TO_WIN)
}

/// Every piece of text the game shows.  The score texture is re-rendered
/// only when the kill count changes.
#[derive(Clone, Debug)]
pub struct Hud {
    font: Font,
    pub menu: TextTexture,
    pub game_over: TextTexture,
    pub win: TextTexture,
    pub score: TextTexture,
    kills: u32,
}

impl Hud {
    pub fn new(font: Font) -> Self {
        Hud {
            font,
            menu: font.render("Press SPACE to Play"),
            game_over: font.render("Game Over - Press R to Restart"),
            win: font.render("You Win! Press R to Play Again"),
            score: font.render(&score_text(0)),
            kills: 0,
        }
    }

    /// Refresh the score texture if `state` has a different kill count.
    pub fn sync(&mut self, state: &SimulationState) {
        if state.enemies_killed != self.kills {
            self.kills = state.enemies_killed;
            self.score = self.font.render(&score_text(self.kills));
        }
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<P: Presenter>(out: &mut P, state: &SimulationState, hud: &Hud) -> io::Result<()> {
    out.clear(C_BACKGROUND);

    match state.status {
        GameStatus::Menu => out.draw_text_texture(&hud.menu, hud.menu.centered()),
        GameStatus::Playing => draw_playing(out, state, hud),
        GameStatus::GameOver => out.draw_text_texture(&hud.game_over, hud.game_over.centered()),
        GameStatus::Win => out.draw_text_texture(&hud.win, hud.win.centered()),
    }

    out.present()
}

fn draw_playing<P: Presenter>(out: &mut P, state: &SimulationState, hud: &Hud) {
    let player = &state.player;
    out.draw_filled_triangle(player.pos, PLAYER_SIZE / 2, player.angle, C_PLAYER);

    for enemy in &state.enemies {
        out.draw_rotated_rect(enemy.rect, enemy.angle, C_ENEMY);
    }

    for p in &state.projectiles {
        let color = match p.owner {
            ProjectileOwner::Player => C_PROJECTILE_PLAYER,
            ProjectileOwner::Enemy => C_PROJECTILE_ENEMY,
        };
        out.draw_filled_rect(p.rect, color);
    }

    out.draw_text_texture(&hud.score, SCORE_POSITION);
}
