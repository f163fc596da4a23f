//! Game-logic functions.
//!
//! Every public function takes the `SimulationState` by mutable reference,
//! an explicit millisecond clock (`now`) and, where needed, an RNG handle.
//! Side effects are limited to the state itself and the injected RNG, so a
//! seeded RNG plus a scripted clock replays a session exactly.

use rand::Rng;

use crate::constants::*;
use crate::entities::{
    Enemy, GameEvent, GameStatus, HeldKeys, KeyPress, Player, Projectile, ProjectileOwner,
    SimulationState,
};
use crate::geometry::{circle_intersects_rect, rect_intersects_rect, Point, Rect};

// ── Session lifecycle ────────────────────────────────────────────────────────

/// Put the player back at spawn, clear every entity, restart all timers at
/// `now` and zero the score.  The status is left to the caller.
pub fn reset_game(state: &mut SimulationState, now: u64, rng: &mut impl Rng) {
    state.player = Player::at_spawn();
    state.projectiles.clear();
    state.enemies.clear();
    state.enemies_killed = 0;
    state.last_shot = now;
    state.last_spawn = now;
    state.next_spawn_interval = roll_spawn_interval(rng);
}

/// Apply one discrete key press to the state machine.  Returns `true` when
/// the press started a new session.
///
/// Quit is the caller's business and never changes the state.
pub fn apply_key_press(
    state: &mut SimulationState,
    key: KeyPress,
    now: u64,
    rng: &mut impl Rng,
) -> bool {
    let starts = match (state.status, key) {
        (GameStatus::Menu, KeyPress::Fire) => true,
        (status, KeyPress::Restart) if status.is_finished() => true,
        _ => false,
    };
    if starts {
        log::info!("{:?} -> Playing", state.status);
        reset_game(state, now, rng);
        state.status = GameStatus::Playing;
    }
    starts
}

fn roll_spawn_interval(rng: &mut impl Rng) -> u64 {
    rng.gen_range(SPAWN_INTERVAL_MIN_MS..SPAWN_INTERVAL_MAX_MS)
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  Does nothing unless the game is
/// `Playing`.
///
/// The steps run in a fixed order; several edge cases (which shot hits
/// first, whether a kill and a death can share a frame) depend on it.
pub fn tick(
    state: &mut SimulationState,
    keys: &HeldKeys,
    now: u64,
    rng: &mut impl Rng,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    match state.status {
        GameStatus::Playing => {}
        GameStatus::Menu | GameStatus::GameOver | GameStatus::Win => return events,
    }

    // ── 1–3. Move, face, clamp ───────────────────────────────────────────────
    let direction = steer_player(&mut state.player, keys);

    // ── 4. Player fire ───────────────────────────────────────────────────────
    if keys.fire && now.saturating_sub(state.last_shot) >= PLAYER_FIRE_RATE_MS {
        state.projectiles.push(player_projectile(&state.player, direction));
        state.last_shot = now;
        events.push(GameEvent::PlayerFired);
    }

    // ── 5. Enemy spawn ───────────────────────────────────────────────────────
    if now.saturating_sub(state.last_spawn) >= state.next_spawn_interval {
        let x = rng.gen_range(0..=ENEMY_SPAWN_MAX_X);
        state.enemies.push(Enemy {
            rect: Rect::new(x, 0, ENEMY_SIZE, ENEMY_SIZE),
            angle: 0.0,
            last_fire: now,
            fire_interval: ENEMY_FIRE_RATE_MS,
        });
        state.last_spawn = now;
        state.next_spawn_interval = roll_spawn_interval(rng);
        log::debug!("enemy spawned at x={x}, next in {}ms", state.next_spawn_interval);
        events.push(GameEvent::EnemySpawned);
    }

    // ── 6. Enemies spin, descend and shoot ───────────────────────────────────
    let target = state.player.pos;
    for enemy in &mut state.enemies {
        enemy.angle += ENEMY_SPIN_DEGREES;
        if enemy.angle >= 360.0 {
            enemy.angle -= 360.0;
        }
        enemy.rect.y += ENEMY_DESCENT;

        if now.saturating_sub(enemy.last_fire) >= enemy.fire_interval {
            state.projectiles.push(enemy_projectile(enemy, target));
            enemy.last_fire = now;
            events.push(GameEvent::EnemyFired);
        }
    }

    // ── 7. Integrate projectiles ─────────────────────────────────────────────
    for p in &mut state.projectiles {
        p.rect.x += p.dx;
        p.rect.y += p.dy;
    }

    // ── 8. Cull whatever has left the arena ──────────────────────────────────
    state.projectiles.retain(|p| !outside_arena(&p.rect));
    state.enemies.retain(|e| e.rect.y <= ARENA_HEIGHT);

    // ── 9. Enemy projectiles ↔ player ────────────────────────────────────────
    let player = state.player.pos;
    let hit = state.projectiles.iter().any(|p| {
        p.owner == ProjectileOwner::Enemy
            && circle_intersects_rect(player.x, player.y, PLAYER_RADIUS, &p.rect)
    });
    if hit {
        log::info!("player hit after {} kills", state.enemies_killed);
        state.status = GameStatus::GameOver;
        events.push(GameEvent::PlayerHit);
        return events;
    }

    // ── 10. Player projectiles ↔ enemies ─────────────────────────────────────
    let mut killed = 0u32;
    let enemies = &mut state.enemies;
    state.projectiles.retain(|p| {
        if p.owner != ProjectileOwner::Player {
            return true;
        }
        let before = enemies.len();
        enemies.retain(|e| !rect_intersects_rect(&p.rect, &e.rect));
        let removed = (before - enemies.len()) as u32;
        killed += removed;
        removed == 0
    });

    if killed > 0 {
        let was_below = state.enemies_killed < KILLS_TO_WIN;
        state.enemies_killed += killed;
        log::debug!("{killed} enemies destroyed, {} total", state.enemies_killed);
        events.push(GameEvent::EnemiesDestroyed { count: killed });

        if was_below && state.enemies_killed >= KILLS_TO_WIN {
            log::info!("victory with {} kills", state.enemies_killed);
            state.status = GameStatus::Win;
            events.push(GameEvent::Victory);
        }
    }

    events
}

// ── Tick helpers ─────────────────────────────────────────────────────────────

/// Apply held movement keys to the player, update its facing and clamp it
/// to the arena.  Returns this frame's direction vector.
///
/// Each key moves its own axis by the full speed, so diagonals are faster
/// than straight lines and opposing keys cancel out.
fn steer_player(player: &mut Player, keys: &HeldKeys) -> (i32, i32) {
    let (mut dir_x, mut dir_y) = (0, 0);
    if keys.up {
        dir_y = -1;
        player.pos.y -= PLAYER_SPEED;
    }
    if keys.down {
        dir_y = 1;
        player.pos.y += PLAYER_SPEED;
    }
    if keys.left {
        dir_x = -1;
        player.pos.x -= PLAYER_SPEED;
    }
    if keys.right {
        dir_x = 1;
        player.pos.x += PLAYER_SPEED;
    }

    if dir_x != 0 || dir_y != 0 {
        player.angle = f64::from(dir_x).atan2(f64::from(-dir_y)).to_degrees();
    }

    let half = PLAYER_SIZE / 2;
    player.pos.x = player.pos.x.clamp(half, ARENA_WIDTH - half);
    player.pos.y = player.pos.y.clamp(half, ARENA_HEIGHT - half);

    (dir_x, dir_y)
}

/// A shot from the ship's centre.  Moving ships fire along their direction,
/// stationary ones along their last facing.
fn player_projectile(player: &Player, (dir_x, dir_y): (i32, i32)) -> Projectile {
    let (dx, dy) = if dir_x == 0 && dir_y == 0 {
        let radians = player.angle.to_radians() as f32;
        (
            (radians.sin() * PLAYER_PROJECTILE_SPEED) as i32,
            (-radians.cos() * PLAYER_PROJECTILE_SPEED) as i32,
        )
    } else {
        let (fx, fy) = (dir_x as f32, dir_y as f32);
        let length = (fx * fx + fy * fy).sqrt();
        (
            (fx / length * PLAYER_PROJECTILE_SPEED) as i32,
            (fy / length * PLAYER_PROJECTILE_SPEED) as i32,
        )
    };
    Projectile {
        rect: Rect::centered_on(player.pos, PROJECTILE_SIZE),
        dx,
        dy,
        owner: ProjectileOwner::Player,
    }
}

/// A shot from the enemy's centre towards `target`.
///
/// The aim is taken from the enemy rect's top-left corner and the distance
/// is not guarded against zero; a NaN component casts to a speed of 0.
fn enemy_projectile(enemy: &Enemy, target: Point) -> Projectile {
    let dx = (target.x - enemy.rect.x) as f32;
    let dy = (target.y - enemy.rect.y) as f32;
    let length = (dx * dx + dy * dy).sqrt();
    Projectile {
        rect: Rect::centered_on(enemy.rect.center(), PROJECTILE_SIZE),
        dx: (dx / length * ENEMY_PROJECTILE_SPEED) as i32,
        dy: (dy / length * ENEMY_PROJECTILE_SPEED) as i32,
        owner: ProjectileOwner::Enemy,
    }
}

/// True once no part of `rect` overlaps the arena.
fn outside_arena(rect: &Rect) -> bool {
    rect.right() < 0 || rect.x > ARENA_WIDTH || rect.bottom() < 0 || rect.y > ARENA_HEIGHT
}
