//! Game tuning constants.  Everything is compile-time: there is no runtime
//! configuration surface.

// ── Arena ─────────────────────────────────────────────────────────────────────

/// Logical arena size in pixels, independent of the terminal size.
pub const ARENA_WIDTH: i32 = 1280;
pub const ARENA_HEIGHT: i32 = 720;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: i32 = 40;
pub const PLAYER_RADIUS: i32 = PLAYER_SIZE / 2;
pub const PLAYER_SPAWN_X: i32 = 300;
pub const PLAYER_SPAWN_Y: i32 = 220;
/// Per-axis movement per tick.  Diagonals are not re-normalised.
pub const PLAYER_SPEED: i32 = 5;
pub const PLAYER_FIRE_RATE_MS: u64 = 200;
pub const PLAYER_PROJECTILE_SPEED: f32 = 10.0;

// ── Projectiles ───────────────────────────────────────────────────────────────

pub const PROJECTILE_SIZE: i32 = 10;

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_SIZE: i32 = 40;
pub const ENEMY_FIRE_RATE_MS: u64 = 1500;
pub const ENEMY_SPIN_DEGREES: f64 = 10.0;
pub const ENEMY_DESCENT: i32 = 2;
pub const ENEMY_PROJECTILE_SPEED: f32 = 5.0;
/// Spawn x is drawn from `0..=ENEMY_SPAWN_MAX_X`.
pub const ENEMY_SPAWN_MAX_X: i32 = ARENA_WIDTH - ENEMY_SIZE;
/// Spawn interval is drawn from `SPAWN_INTERVAL_MIN_MS..SPAWN_INTERVAL_MAX_MS`.
pub const SPAWN_INTERVAL_MIN_MS: u64 = 1000;
pub const SPAWN_INTERVAL_MAX_MS: u64 = 3000;

// ── Session ───────────────────────────────────────────────────────────────────

pub const KILLS_TO_WIN: u32 = 5;

// ── Shapes ────────────────────────────────────────────────────────────────────

/// Angular offset (radians, ≈150°) of the ship's two back vertices from its nose.
pub const SHIP_BACK_VERTEX_OFFSET: f64 = 2.618;

// ── Frame loop ────────────────────────────────────────────────────────────────

/// Fixed delay after every frame.  Simulation speed is tied to this.
pub const FRAME_DELAY_MS: u64 = 16;

/// A key counts as held if its last press/repeat event arrived within this
/// many frames.  Needed for terminals that never send release events.
pub const HOLD_WINDOW_FRAMES: u64 = 8;

/// Smallest terminal that still shows the whole arena legibly.
pub const MIN_TERMINAL_COLS: u16 = 64;
pub const MIN_TERMINAL_ROWS: u16 = 18;
