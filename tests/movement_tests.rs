//! Player movement and enemy pursuit through the public game state API

use tui_chase::core::pursuit::step;
use tui_chase::core::{GameConfig, GameState, InputOutcome, Notice};
use tui_chase::types::{Command, Direction, Position};

fn new_state() -> GameState {
    GameState::new(GameConfig::default()).unwrap()
}

#[test]
fn test_each_direction_moves_one_unit() {
    for (dir, expected) in [
        (Direction::Up, Position::new(5, 4)),
        (Direction::Down, Position::new(5, 6)),
        (Direction::Left, Position::new(4, 5)),
        (Direction::Right, Position::new(6, 5)),
    ] {
        let mut state = new_state();
        state.set_positions(Position::new(5, 5), Position::new(15, 7));
        assert_eq!(state.move_player(dir), InputOutcome::Moved(expected));
        assert_eq!(state.player().pos, expected);
    }
}

#[test]
fn test_every_wall_bump_is_rejected() {
    // Walk into each side of the default map from the adjacent interior cell.
    let cases = [
        (Position::new(1, 4), Direction::Left),
        (Position::new(18, 4), Direction::Right),
        (Position::new(7, 1), Direction::Up),
        (Position::new(7, 8), Direction::Down),
    ];
    for (start, dir) in cases {
        let mut state = new_state();
        state.set_positions(start, Position::new(10, 5));
        assert_eq!(state.move_player(dir), InputOutcome::Blocked);
        assert_eq!(state.player().pos, start);
        assert_eq!(state.notice(), Some(Notice::Blocked));
    }
}

#[test]
fn test_left_from_start_is_not_blocked() {
    // (1, 2) is still floor; only x = 0 is wall.
    let mut state = new_state();
    assert_eq!(
        state.apply_input(Some(Command::Left)),
        InputOutcome::Moved(Position::new(1, 2))
    );
    assert_eq!(state.apply_input(Some(Command::Left)), InputOutcome::Blocked);
}

#[test]
fn test_pursuit_example_from_below() {
    assert_eq!(
        step(Position::new(5, 5), Position::new(5, 2)),
        Position::new(5, 4)
    );
}

#[test]
fn test_pursuit_closes_each_differing_axis() {
    let player = Position::new(6, 4);
    for ex in 1..=12 {
        for ey in 1..=8 {
            let enemy = Position::new(ex, ey);
            let next = step(enemy, player);
            let dx = (enemy.x - player.x).abs();
            let dy = (enemy.y - player.y).abs();
            let ndx = (next.x - player.x).abs();
            let ndy = (next.y - player.y).abs();
            assert_eq!(ndx, (dx - 1).max(0), "x axis from {:?}", enemy);
            assert_eq!(ndy, (dy - 1).max(0), "y axis from {:?}", enemy);
            if enemy != player {
                assert_eq!(next.chebyshev(player), enemy.chebyshev(player) - 1);
            } else {
                assert_eq!(next, enemy);
            }
        }
    }
}

#[test]
fn test_enemy_stays_inside_the_border() {
    let mut state = new_state();
    let script = [
        Command::Up,
        Command::Left,
        Command::Left,
        Command::Down,
        Command::Down,
        Command::Down,
        Command::Right,
        Command::Unknown,
    ];
    for cmd in script {
        state.apply_input(Some(cmd));
        state.update();
        let e = state.enemy().pos;
        assert!(
            state.grid().is_interior(e),
            "enemy left the interior at {:?}",
            e
        );
        if !state.is_running() {
            break;
        }
    }
}
