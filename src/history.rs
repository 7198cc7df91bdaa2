#![cfg(feature = "std")]

//! Per-game move history and the append-only JSON-lines store it is kept in.
//!
//! Every finished game becomes one line of the store:
//!
//! ```text
//! {"start_time":"2024-05-01T12:00:00.123456","end_time":"2024-05-01T12:04:10.5","winner":"You","moves":[{"player":"You","coord":"A5","result":"Hit","timestamp":"..."}]}
//! ```

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::common::ShotOutcome;
use crate::config::DEFAULT_HISTORY_FILE;
use crate::coord::Coord;

/// Current local time, as written to history records.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// ISO-8601 text of a history timestamp.
pub fn iso(t: NaiveDateTime) -> String {
    t.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

/// One shot taken during a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: String,
    pub coord: Coord,
    pub result: ShotOutcome,
    pub timestamp: NaiveDateTime,
}

/// Record of a single game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub winner: Option<String>,
    pub moves: Vec<MoveRecord>,
}

impl GameHistory {
    /// Start a record now.
    pub fn new() -> Self {
        Self::started_at(now())
    }

    pub fn started_at(start_time: NaiveDateTime) -> Self {
        Self {
            start_time,
            end_time: None,
            winner: None,
            moves: Vec::new(),
        }
    }

    pub fn record_move(&mut self, player: &str, coord: Coord, result: ShotOutcome) {
        self.moves.push(MoveRecord {
            player: player.to_string(),
            coord,
            result,
            timestamp: now(),
        });
    }

    /// Close the record with `winner` and the current time.
    pub fn end_game(&mut self, winner: &str) {
        self.end_time = Some(now());
        self.winner = Some(winner.to_string());
    }

    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }

    /// Serialize as a single JSON line, without the trailing newline.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn stats(&self) -> GameStats {
        GameStats::from(self)
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of one recorded game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameStats {
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub winner: Option<String>,
    pub total_moves: usize,
    pub hits: usize,
}

impl GameStats {
    /// Percentage of moves that hit or sank a ship, 0 when no moves were made.
    pub fn hit_rate(&self) -> f64 {
        hit_rate(self.hits, self.total_moves)
    }
}

impl From<&GameHistory> for GameStats {
    fn from(h: &GameHistory) -> Self {
        GameStats {
            start_time: h.start_time,
            end_time: h.end_time,
            winner: h.winner.clone(),
            total_moves: h.moves.len(),
            hits: h.moves.iter().filter(|m| m.result.is_hit()).count(),
        }
    }
}

/// `100 * hits / total`, or 0 for an empty game.
pub fn hit_rate(hits: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hits as f64 * 100.0 / total as f64
    }
}

/// Append-only file holding one [`GameHistory`] per line.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `game` as a new line, creating the file if needed.
    pub fn append(&self, game: &GameHistory) -> anyhow::Result<()> {
        let line = game
            .to_json_line()
            .context("failed to serialize game history")?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        writeln!(file, "{}", line)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        log::info!("appended game to {}", self.path.display());
        Ok(())
    }

    /// Every recorded game, oldest first. `None` if the file does not exist.
    ///
    /// Lines that do not parse are logged and skipped.
    pub fn load(&self) -> anyhow::Result<Option<Vec<GameHistory>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", self.path.display()))
            }
        };
        let mut games = Vec::new();
        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(game) => games.push(game),
                Err(e) => log::warn!("{}:{}: skipping bad record: {}", self.path.display(), i + 1, e),
            }
        }
        Ok(Some(games))
    }

    /// Stats for every recorded game. `None` if there is no history yet.
    pub fn stats(&self) -> anyhow::Result<Option<Vec<GameStats>>> {
        Ok(self
            .load()?
            .map(|games| games.iter().map(GameStats::from).collect()))
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_FILE)
    }
}
