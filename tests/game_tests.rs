use std::collections::VecDeque;

use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    next_active, Board, ComputerPlayer, Coord, Game, GameError, Orientation, Phase, Player,
    PlayerError, Ship, ShipKind, ShotOutcome, Side, FLEET_SIZE, TOTAL_FLEET_CELLS,
};

/// Fires at a fixed list of cells.
struct Scripted(VecDeque<Coord>);

impl Scripted {
    fn boxed(cells: &[(usize, usize)]) -> Box<Self> {
        Box::new(Scripted(cells.iter().map(|&(r, c)| Coord::new(r, c)).collect()))
    }
}

impl Player for Scripted {
    fn select_target(&mut self, _rng: &mut SmallRng, _view: &Board) -> Result<Coord, PlayerError> {
        self.0.pop_front().ok_or(PlayerError::InputClosed)
    }
}

fn side(name: &str, player: Box<dyn Player>, ships: &[(ShipKind, Orientation, usize, usize)]) -> Side {
    let mut side = Side::new(name, player);
    for &(kind, orientation, row, col) in ships {
        side.board_mut()
            .place(Ship::new(kind, orientation, Coord::new(row, col)))
            .unwrap();
    }
    side
}

#[test]
fn test_turn_rule() {
    assert_eq!(next_active(0, ShotOutcome::Miss), 1);
    assert_eq!(next_active(1, ShotOutcome::Miss), 0);
    assert_eq!(next_active(0, ShotOutcome::Hit), 0);
    assert_eq!(next_active(1, ShotOutcome::Sunk), 1);
}

#[test]
fn test_miss_passes_turn_and_sink_wins() {
    let mut rng = SmallRng::seed_from_u64(1);
    let a = side(
        "a",
        Scripted::boxed(&[(5, 5)]),
        &[(ShipKind::Submarine, Orientation::Horizontal, 0, 0)],
    );
    let b = side(
        "b",
        Scripted::boxed(&[(0, 0)]),
        &[(ShipKind::Submarine, Orientation::Horizontal, 9, 9)],
    );
    let mut game = Game::new(a, b);
    game.start().unwrap();

    let first = game.step(&mut rng).unwrap();
    assert_eq!((first.shooter, first.outcome, first.game_over), (0, ShotOutcome::Miss, false));
    assert_eq!(game.active(), 1);
    assert_eq!(game.passive(), 0);

    let second = game.step(&mut rng).unwrap();
    assert_eq!((second.shooter, second.outcome, second.game_over), (1, ShotOutcome::Sunk, true));
    assert_eq!(game.phase(), Phase::Finished);
    assert_eq!(game.winner().map(Side::name), Some("b"));
    assert_eq!(game.active(), 1);

    let history = game.history();
    assert_eq!(history.winner.as_deref(), Some("b"));
    assert!(history.end_time.is_some());
    let moves: Vec<_> = history
        .moves
        .iter()
        .map(|m| (m.player.as_str(), m.coord.to_string(), m.result))
        .collect();
    assert_eq!(
        moves,
        vec![
            ("a", "F5".to_string(), ShotOutcome::Miss),
            ("b", "A0".to_string(), ShotOutcome::Sunk),
        ]
    );

    assert!(matches!(
        game.step(&mut rng),
        Err(GameError::WrongPhase { expected: Phase::Playing, actual: Phase::Finished })
    ));
}

#[test]
fn test_hit_grants_another_turn() {
    let mut rng = SmallRng::seed_from_u64(2);
    let a = side(
        "a",
        Scripted::boxed(&[(9, 8), (9, 9), (0, 9)]),
        &[(ShipKind::Submarine, Orientation::Horizontal, 0, 0)],
    );
    let b = side(
        "b",
        Scripted::boxed(&[]),
        &[
            (ShipKind::Destroyer, Orientation::Horizontal, 9, 8),
            (ShipKind::Submarine, Orientation::Horizontal, 0, 9),
        ],
    );
    let mut game = Game::new(a, b);
    game.start().unwrap();

    assert_eq!(game.step(&mut rng).unwrap().outcome, ShotOutcome::Hit);
    assert_eq!(game.active(), 0);
    assert_eq!(game.step(&mut rng).unwrap().outcome, ShotOutcome::Sunk);
    assert_eq!(game.active(), 0);
    assert_eq!(game.phase(), Phase::Playing);
    let last = game.step(&mut rng).unwrap();
    assert!(last.game_over);
    assert_eq!(game.winner().map(Side::name), Some("a"));
    assert_eq!(game.history().moves.len(), 3);
}

#[test]
fn test_phase_guards() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut game = Game::new(
        Side::new("a", Box::new(ComputerPlayer::new())),
        Side::new("b", Box::new(ComputerPlayer::new())),
    );
    assert_eq!(game.phase(), Phase::Setup);
    assert!(matches!(game.step(&mut rng), Err(GameError::WrongPhase { .. })));
    assert!(matches!(game.play_out(&mut rng), Err(GameError::WrongPhase { .. })));
    game.setup(&mut rng).unwrap();
    assert_eq!(game.phase(), Phase::Playing);
    assert!(matches!(game.setup(&mut rng), Err(GameError::WrongPhase { .. })));
    for s in game.sides() {
        assert_eq!(s.board().ships().len(), FLEET_SIZE);
    }
}

#[test]
fn test_player_error_stops_game() {
    let mut rng = SmallRng::seed_from_u64(4);
    let a = side(
        "a",
        Scripted::boxed(&[]),
        &[(ShipKind::Submarine, Orientation::Horizontal, 0, 0)],
    );
    let b = side(
        "b",
        Scripted::boxed(&[]),
        &[(ShipKind::Submarine, Orientation::Horizontal, 0, 0)],
    );
    let mut game = Game::new(a, b);
    game.start().unwrap();
    assert_eq!(
        game.step(&mut rng).unwrap_err(),
        GameError::Player(PlayerError::InputClosed)
    );
    assert_eq!(game.phase(), Phase::Playing);
    assert!(game.history().moves.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn computer_game_runs_to_completion(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::new(
            Side::new("a", Box::new(ComputerPlayer::new())),
            Side::new("b", Box::new(ComputerPlayer::new())),
        );
        game.setup(&mut rng).unwrap();
        let winner = game.play_out(&mut rng).unwrap().name().to_string();

        prop_assert_eq!(game.phase(), Phase::Finished);
        let winner_index = game.sides().iter().position(|s| s.name() == winner).unwrap();
        prop_assert!(game.side(1 - winner_index).board().all_ships_sunk());
        prop_assert!(!game.side(winner_index).board().all_ships_sunk());

        let moves = &game.history().moves;
        prop_assert!(moves.len() < 200);
        prop_assert_eq!(moves.last().map(|m| m.player.as_str()), Some(winner.as_str()));
        let winner_moves: Vec<_> = moves.iter().filter(|m| m.player == winner).collect();
        prop_assert_eq!(winner_moves.iter().filter(|m| m.result.is_hit()).count(), TOTAL_FLEET_CELLS);
        prop_assert_eq!(
            winner_moves.iter().filter(|m| m.result == ShotOutcome::Sunk).count(),
            FLEET_SIZE
        );
        for pair in moves.windows(2) {
            if pair[0].result == ShotOutcome::Miss {
                prop_assert_ne!(&pair[0].player, &pair[1].player);
            } else {
                prop_assert_eq!(&pair[0].player, &pair[1].player);
            }
        }
        prop_assert_eq!(game.history().winner.as_deref(), Some(winner.as_str()));
    }
}
