//! Engine behaviour through the public API.

use rand::rngs::StdRng;
use rand::SeedableRng;

use snake::snake::Snake;
use snake::{Cell, Crash, Direction, GameEngine, GameSession, Phase, TickOutcome};

fn cells(engine: &GameEngine) -> Vec<(i16, i16)> {
    engine.snapshot().snake.iter().map(|c| (c.row, c.col)).collect()
}

fn running_session(snake: &[(i16, i16)], direction: Direction, food: (i16, i16)) -> GameEngine {
    let session = GameSession {
        snake: Snake::new(snake.iter().map(|&c| Cell::from(c))).unwrap(),
        direction,
        food: food.into(),
        game_over: false,
        running: true,
    };
    GameEngine::from_session(session, StdRng::seed_from_u64(42))
}

#[test]
fn test_start_layout() {
    for seed in 0..20 {
        let mut engine = GameEngine::with_seed(seed);
        engine.start();

        let snap = engine.snapshot();
        assert_eq!(cells(&engine), vec![(10, 10), (10, 9), (10, 8)]);
        assert_eq!(engine.direction(), Direction::Right);
        assert!(!snap.game_over);
        assert!(snap.running);
        assert!(snap.food.in_bounds());
        assert_eq!(engine.phase(), Phase::Active);
    }
}

#[test]
fn test_two_ticks_right() {
    let mut engine = running_session(&[(10, 10), (10, 9), (10, 8)], Direction::Right, (0, 0));

    assert_eq!(engine.tick(), TickOutcome::Moved { ate: false });
    assert_eq!(engine.tick(), TickOutcome::Moved { ate: false });
    assert_eq!(cells(&engine), vec![(10, 12), (10, 11), (10, 10)]);
}

#[test]
fn test_length_constant_without_food() {
    let mut engine = running_session(&[(10, 10), (10, 9), (10, 8)], Direction::Right, (0, 0));
    let turns = [Direction::Down, Direction::Left, Direction::Down, Direction::Right];

    for turn in turns {
        engine.request_direction(turn);
        for _ in 0..2 {
            assert_eq!(engine.tick(), TickOutcome::Moved { ate: false });
            assert_eq!(engine.snake().len(), 3);
        }
    }
}

#[test]
fn test_reversal_never_applies() {
    let mut engine = GameEngine::with_seed(5);
    engine.start();

    for dir in [Direction::Up, Direction::Left, Direction::Down, Direction::Right] {
        engine.request_direction(dir);
        let current = engine.direction();
        assert!(!engine.request_direction(current.opposite()));
        assert_eq!(engine.direction(), current);
    }
}

#[test]
fn test_top_wall_ends_game() {
    let mut engine = running_session(&[(0, 10), (1, 10), (2, 10)], Direction::Up, (5, 5));
    let before = cells(&engine);

    assert_eq!(engine.tick(), TickOutcome::Crashed(Crash::Wall));
    assert!(engine.is_game_over());
    assert!(!engine.is_running());
    assert_eq!(cells(&engine), before);
}

#[test]
fn test_every_wall() {
    let cases = [
        ([(5, 19), (5, 18), (5, 17)], Direction::Right),
        ([(19, 5), (18, 5), (17, 5)], Direction::Down),
        ([(5, 0), (5, 1), (5, 2)], Direction::Left),
    ];
    for (body, dir) in cases {
        let mut engine = running_session(&body, dir, (10, 10));
        assert_eq!(engine.tick(), TickOutcome::Crashed(Crash::Wall));
        assert_eq!(engine.phase(), Phase::GameOver);
    }
}

#[test]
fn test_eating_grows_by_one() {
    let mut engine = running_session(&[(10, 10), (10, 9), (10, 8)], Direction::Right, (10, 11));

    assert_eq!(engine.tick(), TickOutcome::Moved { ate: true });
    assert_eq!(cells(&engine), vec![(10, 11), (10, 10), (10, 9), (10, 8)]);
    assert!(engine.food().in_bounds());
    assert_ne!(engine.food(), Cell::new(10, 11));
}

#[test]
fn test_moving_into_vacating_tail_is_fatal() {
    // Head (5,5) heading down onto (6,5), which is the current tail.
    let mut engine = running_session(&[(5, 5), (5, 6), (6, 6), (6, 5)], Direction::Down, (0, 0));
    let before = cells(&engine);

    assert_eq!(engine.tick(), TickOutcome::Crashed(Crash::Body));
    assert_eq!(cells(&engine), before);
}

#[test]
fn test_ticks_after_game_over_change_nothing() {
    let mut engine = running_session(&[(0, 3), (0, 4), (0, 5)], Direction::Up, (9, 9));
    engine.tick();
    let frozen = engine.snapshot();

    for _ in 0..5 {
        assert_eq!(engine.tick(), TickOutcome::Idle);
        assert_eq!(engine.snapshot(), frozen);
    }
}

#[test]
fn test_direction_accepted_after_game_over() {
    let mut engine = running_session(&[(0, 3), (0, 4), (0, 5)], Direction::Up, (9, 9));
    engine.tick();

    assert!(engine.request_direction(Direction::Left));
    assert_eq!(engine.direction(), Direction::Left);
    assert_eq!(engine.tick(), TickOutcome::Idle);
}

#[test]
fn test_same_seed_same_food() {
    let mut a = GameEngine::with_seed(99);
    let mut b = GameEngine::with_seed(99);
    assert_eq!(a.food(), b.food());
    a.start();
    b.start();
    assert_eq!(a.food(), b.food());
}
