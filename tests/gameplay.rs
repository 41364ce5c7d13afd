use std::collections::{HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ring_snake::{Cell, Control, Direction, GameConfig, GameState, InputEvent, Key, Phase};

fn new_game(seed: u64) -> GameState<StdRng> {
    GameState::new(GameConfig::default(), StdRng::seed_from_u64(seed)).unwrap()
}

fn cells(list: &[(u8, u8)]) -> Vec<Cell> {
    list.iter().map(|&(x, y)| Cell::new(x, y)).collect()
}

fn body(state: &GameState<StdRng>) -> Vec<(u8, u8)> {
    state.snake().iter().map(|c| (c.x, c.y)).collect()
}

fn tick(state: &mut GameState<StdRng>, events: &[InputEvent]) -> Control {
    let mut input: VecDeque<InputEvent> = events.iter().copied().collect();
    state.update(&mut input).unwrap()
}

#[test]
fn test_single_segment_moves() {
    let mut state = new_game(1);
    state
        .place(&cells(&[(5, 5)]), Direction::Right, Some(Cell::new(0, 0)))
        .unwrap();

    assert_eq!(tick(&mut state, &[]), Control::Continue);

    assert_eq!(body(&state), vec![(6, 5)]);
    assert_eq!(state.phase(), Phase::Playing);
}

#[test]
fn test_eating_grows_and_respawns_food() {
    let mut state = new_game(2);
    state
        .place(
            &cells(&[(6, 5), (5, 5), (4, 5)]),
            Direction::Right,
            Some(Cell::new(7, 5)),
        )
        .unwrap();

    tick(&mut state, &[]);

    assert_eq!(body(&state), vec![(7, 5), (6, 5), (5, 5), (4, 5)]);
    assert!(!state.is_crashed());
    let food = state.food().unwrap().location;
    assert!(food.is_within(15, 10));
    assert!(!state.snake().iter().any(|segment| segment == food));
}

#[test]
fn test_wall_crash_keeps_position() {
    let mut state = new_game(3);
    state
        .place(&cells(&[(14, 5)]), Direction::Right, Some(Cell::new(0, 0)))
        .unwrap();

    tick(&mut state, &[]);

    assert!(state.is_crashed());
    assert_eq!(body(&state), vec![(14, 5)]);
}

#[test]
fn test_self_collision_crashes() {
    let mut state = new_game(4);
    // Heading up out of a loop whose body passes just left of the head
    state
        .place(
            &cells(&[(5, 5), (5, 6), (5, 7), (4, 7), (4, 6), (4, 5), (3, 5)]),
            Direction::Up,
            Some(Cell::new(0, 0)),
        )
        .unwrap();

    // Turning left steps onto (4, 5), which stays occupied after the tail leaves (3, 5)
    assert_eq!(
        tick(&mut state, &[InputEvent::KeyDown(Key::Left)]),
        Control::Continue
    );

    assert_eq!(state.direction(), Direction::Left);
    assert_eq!(state.snake().head(), Cell::new(4, 5));
    assert_eq!(state.snake().len(), 7);
    assert!(state.is_crashed());

    // Crashed snakes stay put until a key restarts the game
    tick(&mut state, &[]);
    assert_eq!(state.snake().head(), Cell::new(4, 5));
    assert!(state.is_crashed());
}

#[test]
fn test_moving_into_vacated_tail_is_safe() {
    let mut state = new_game(5);
    // A 2x2 loop: the head steps onto the cell the tail leaves this tick
    state
        .place(
            &cells(&[(4, 5), (4, 6), (5, 6), (5, 5)]),
            Direction::Right,
            Some(Cell::new(0, 0)),
        )
        .unwrap();

    tick(&mut state, &[]);

    assert!(!state.is_crashed());
    assert_eq!(body(&state), vec![(5, 5), (4, 5), (4, 6), (5, 6)]);
}

#[test]
fn test_key_restarts_after_crash() {
    let mut state = new_game(6);
    state
        .place(
            &cells(&[(14, 5), (13, 5)]),
            Direction::Right,
            Some(Cell::new(0, 0)),
        )
        .unwrap();
    tick(&mut state, &[]);
    assert!(state.is_crashed());

    tick(&mut state, &[InputEvent::KeyDown(Key::Right)]);

    assert!(!state.is_crashed());
    assert_eq!(state.snake().len(), 1);
    let head = state.snake().head();
    assert!(head.is_within(15, 10));
    assert_ne!(state.food().unwrap().location, head);
}

#[test]
fn test_quit_in_every_phase() {
    for event in [
        InputEvent::Quit,
        InputEvent::KeyDown(Key::Escape),
        InputEvent::KeyDown(Key::Q),
    ] {
        let mut playing = new_game(7);
        assert_eq!(tick(&mut playing, &[event]), Control::Quit);

        let mut crashed = new_game(8);
        crashed
            .place(&cells(&[(0, 0)]), Direction::Left, Some(Cell::new(3, 3)))
            .unwrap();
        tick(&mut crashed, &[]);
        assert!(crashed.is_crashed());
        assert_eq!(tick(&mut crashed, &[event]), Control::Quit);
        assert!(crashed.is_crashed());
    }
}

#[test]
fn test_empty_poll_only_moves() {
    let layout = cells(&[(3, 3), (3, 4), (3, 5)]);
    let food = Some(Cell::new(10, 8));

    let mut polled = new_game(9);
    polled.place(&layout, Direction::Up, food).unwrap();
    let mut stepped = new_game(9);
    stepped.place(&layout, Direction::Up, food).unwrap();

    tick(&mut polled, &[]);
    stepped.step().unwrap();

    assert_eq!(body(&polled), body(&stepped));
    assert_eq!(polled.food(), stepped.food());
    assert_eq!(polled.direction(), stepped.direction());
    assert_eq!(polled.phase(), stepped.phase());
}

#[test]
fn test_snake_can_fill_the_grid() {
    let config = GameConfig::new(2, 2, 16, std::time::Duration::from_millis(200)).unwrap();
    let mut state = GameState::new(config, StdRng::seed_from_u64(10)).unwrap();
    state
        .place(
            &cells(&[(0, 1), (0, 0), (1, 0)]),
            Direction::Right,
            Some(Cell::new(1, 1)),
        )
        .unwrap();

    tick(&mut state, &[]);

    assert_eq!(state.snake().len(), 4);
    assert_eq!(state.food(), None);
    assert!(!state.is_crashed());

    // With no free cell left the head can only chase the tail
    tick(&mut state, &[InputEvent::KeyDown(Key::Up)]);
    assert!(!state.is_crashed());
    assert_eq!(state.snake().len(), 4);
}

const KEYS: [Key; 5] = [Key::Up, Key::Down, Key::Left, Key::Right, Key::Other];

#[test]
fn test_random_play_invariants() {
    for seed in 0..20 {
        let mut state = new_game(seed);
        let mut keys = StdRng::seed_from_u64(seed + 1000);
        let capacity = state.config().cell_count();

        for _ in 0..2000 {
            let before = state.direction();
            let was_crashed = state.is_crashed();

            let events: Vec<InputEvent> = (0..keys.gen_range(0..3))
                .map(|_| InputEvent::KeyDown(KEYS[keys.gen_range(0..KEYS.len())]))
                .collect();
            assert_eq!(tick(&mut state, &events), Control::Continue);

            let segments: Vec<Cell> = state.snake().iter().collect();
            assert!((1..=capacity).contains(&segments.len()));
            assert_eq!(segments.len(), state.snake().len());

            if !state.is_crashed() {
                let unique: HashSet<Cell> = segments.iter().copied().collect();
                assert_eq!(unique.len(), segments.len());

                match state.food() {
                    Some(food) => {
                        assert!(food.location.is_within(15, 10));
                        assert!(!unique.contains(&food.location));
                    }
                    None => assert_eq!(segments.len(), capacity),
                }
            }

            if !was_crashed && !state.is_crashed() {
                assert!(!state.direction().is_opposite(before));
            }
        }
    }
}
