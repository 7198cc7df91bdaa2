use std::io::Cursor;

use rand::{rngs::SmallRng, SeedableRng};
use seabattle::cli::parse_target;
use seabattle::{Board, Cell, CliPlayer, Coord, Orientation, Player, PlayerError, Ship, ShipKind, Side};

fn scripted(input: &str) -> CliPlayer<Cursor<Vec<u8>>> {
    CliPlayer::new("You", Cursor::new(input.as_bytes().to_vec()))
}

#[test]
fn test_invalid_input_reprompts() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = scripted("\nZ5\nA\nAx\nA10\nb3\n");
    let view = Board::concealed();
    assert_eq!(
        player.select_target(&mut rng, &view).unwrap(),
        Coord::new(3, 1)
    );
}

#[test]
fn test_repeat_target_rejected() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut view = Board::concealed();
    view.mark(Coord::new(3, 1), Cell::Miss).unwrap();
    view.mark(Coord::new(4, 2), Cell::Sunk).unwrap();
    let mut player = scripted("B3\nC4\nC5\n");
    assert_eq!(
        player.select_target(&mut rng, &view).unwrap(),
        Coord::new(5, 2)
    );
}

#[test]
fn test_end_of_input() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = scripted("K1\n");
    assert_eq!(
        player.select_target(&mut rng, &Board::concealed()).unwrap_err(),
        PlayerError::InputClosed
    );
}

#[test]
fn test_parse_target_messages() {
    let mut view = Board::concealed();
    view.mark(Coord::new(0, 0), Cell::Hit).unwrap();
    assert_eq!(parse_target("A0", &view).unwrap_err(), "You already shot there");
    assert!(parse_target("Q1", &view).unwrap_err().contains("A-J"));
    assert!(parse_target("A12", &view).unwrap_err().starts_with("Out of bounds"));
    assert_eq!(parse_target("j9", &view), Ok(Coord::new(9, 9)));
}

#[test]
fn test_human_side_fires_and_mirrors() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut me = Side::new("You", Box::new(scripted("A0\nA0\nC2\n")));
    let mut enemy = Board::new();
    enemy
        .place(Ship::new(ShipKind::Submarine, Orientation::Horizontal, Coord::new(0, 0)))
        .unwrap();

    let shot = me.fire(&mut rng, &mut enemy).unwrap();
    assert_eq!(shot.coord, Coord::new(0, 0));
    assert_eq!(me.view().cell(shot.coord), Some(Cell::Sunk));
    // second A0 is refused by the view, C2 is taken instead
    let shot = me.fire(&mut rng, &mut enemy).unwrap();
    assert_eq!(shot.coord, Coord::new(2, 2));
    assert_eq!(me.view().cell(shot.coord), Some(Cell::Miss));
}
