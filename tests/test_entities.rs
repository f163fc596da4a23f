use arena_shooter::constants::*;
use arena_shooter::entities::*;
use arena_shooter::geometry::{Point, Rect};

#[test]
fn fresh_state_sits_at_the_menu() {
    let s = SimulationState::default();
    assert_eq!(s.status, GameStatus::Menu);
    assert_eq!(s.player.pos, Point::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
    assert_eq!(s.player.angle, 0.0);
    assert!(s.enemies.is_empty());
    assert!(s.projectiles.is_empty());
    assert_eq!(s.enemies_killed, 0);
}

#[test]
fn only_game_over_and_win_are_finished() {
    assert!(!GameStatus::Menu.is_finished());
    assert!(!GameStatus::Playing.is_finished());
    assert!(GameStatus::GameOver.is_finished());
    assert!(GameStatus::Win.is_finished());
}

#[test]
fn state_clone_is_independent() {
    let original = SimulationState::default();
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.pos.x = 99;
    cloned.enemies_killed = 3;
    cloned.enemies.push(Enemy {
        rect: Rect::new(5, 5, ENEMY_SIZE, ENEMY_SIZE),
        angle: 0.0,
        last_fire: 0,
        fire_interval: ENEMY_FIRE_RATE_MS,
    });

    assert_eq!(original.player.pos.x, PLAYER_SPAWN_X);
    assert_eq!(original.enemies_killed, 0);
    assert!(original.enemies.is_empty());
}

#[test]
fn held_keys_default_to_released() {
    let k = HeldKeys::default();
    assert!(!(k.up || k.down || k.left || k.right || k.fire));
}
