//! All game entity types - pure data, no logic.

use crate::constants::{PLAYER_SPAWN_X, PLAYER_SPAWN_Y, SPAWN_INTERVAL_MIN_MS};
use crate::geometry::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Menu,
    Playing,
    GameOver,
    Win,
}

impl GameStatus {
    /// True for the end-of-session screens that wait for a restart.
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Win)
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Keys held down during the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    /// W
    pub up: bool,
    /// S
    pub down: bool,
    /// A
    pub left: bool,
    /// D
    pub right: bool,
    /// SPACE
    pub fire: bool,
}

/// A discrete key-down event, consumed once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyPress {
    /// SPACE, starts a game from the menu.
    Fire,
    /// R, restarts after game over or victory.
    Restart,
    Quit,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub rect: Rect,
    /// Velocity in pixels per tick.
    pub dx: i32,
    pub dy: i32,
    pub owner: ProjectileOwner,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    /// Centre of the ship.
    pub pos: Point,
    /// Degrees, 0 = up, clockwise positive.  Persists while standing still.
    pub angle: f64,
}

impl Player {
    pub fn at_spawn() -> Self {
        Player {
            pos: Point::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            angle: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    /// Degrees in `[0, 360)`.
    pub angle: f64,
    /// Clock time (ms) of the last shot, or of the spawn.
    pub last_fire: u64,
    pub fire_interval: u64,
}

// ── Events ────────────────────────────────────────────────────────────────────

/// Things that happened during one tick, for the audio/HUD/log layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    PlayerFired,
    EnemySpawned,
    EnemyFired,
    EnemiesDestroyed { count: u32 },
    PlayerHit,
    Victory,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything the simulation owns.  Mutated in place by `compute::tick` and
/// read by the display layer between ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState {
    pub status: GameStatus,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub enemies_killed: u32,
    /// Clock time (ms) of the player's last shot.
    pub last_shot: u64,
    /// Clock time (ms) of the last enemy spawn.
    pub last_spawn: u64,
    /// Delay (ms) before the next enemy spawn.
    pub next_spawn_interval: u64,
}

impl Default for SimulationState {
    /// A fresh process sitting at the menu.
    fn default() -> Self {
        SimulationState {
            status: GameStatus::Menu,
            player: Player::at_spawn(),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            enemies_killed: 0,
            last_shot: 0,
            last_spawn: 0,
            next_spawn_interval: SPAWN_INTERVAL_MIN_MS,
        }
    }
}
