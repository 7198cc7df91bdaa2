use crate::ship::ShipKind;

pub const BOARD_SIZE: u8 = 10;

/// Column labels, left to right.
pub const COLUMN_LABELS: [char; BOARD_SIZE as usize] =
    ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

/// Ship kinds and how many of each every player places, largest first.
pub const FLEET: [(ShipKind, usize); 4] = [
    (ShipKind::Battleship, 1),
    (ShipKind::Cruiser, 2),
    (ShipKind::Destroyer, 3),
    (ShipKind::Submarine, 4),
];

/// Number of ships in a full fleet.
pub const FLEET_SIZE: usize = 1 + 2 + 3 + 4;

/// Total number of ship segments in a full fleet.
pub const TOTAL_FLEET_CELLS: usize = 4 + 2 * 3 + 3 * 2 + 4;

/// Random candidates tried for one ship before the fleet is laid out again.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Complete fleet layouts tried before giving up.
pub const MAX_FLEET_ATTEMPTS: usize = 16;

/// Random cells tried by the computer before it scans for a free one.
pub const MAX_SHOT_ATTEMPTS: usize = 10_000;

pub const DEFAULT_HISTORY_FILE: &str = "game_history.json";

/// Pause after each move in interactive games, in milliseconds.
pub const DEFAULT_TURN_DELAY_MS: u64 = 2_000;

/// Default player names.
pub const HUMAN_NAME: &str = "You";
pub const COMPUTER_NAME: &str = "Computer";
