#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::PlayerError;
use crate::coord::Coord;

use super::Player;

/// Interactive player reading letter+digit moves (`A5`) from a text stream.
pub struct CliPlayer<R> {
    name: String,
    input: R,
}

impl CliPlayer<StdinLock<'static>> {
    /// Player reading from standard input.
    pub fn stdin(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin().lock())
    }
}

impl<R: BufRead> CliPlayer<R> {
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }

    fn read_line(&mut self) -> Result<String, PlayerError> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| PlayerError::Io(e.to_string()))?;
        if read == 0 {
            return Err(PlayerError::InputClosed);
        }
        Ok(line)
    }
}

/// Validate a typed move against the cells already resolved on `view`.
pub fn parse_target(input: &str, view: &Board) -> Result<Coord, String> {
    let coord: Coord = input.parse().map_err(|e| format!("{}", e))?;
    if view.cell(coord).is_some_and(|c| c.is_resolved()) {
        return Err("You already shot there".to_string());
    }
    Ok(coord)
}

impl<R: BufRead> Player for CliPlayer<R> {
    fn select_target(&mut self, _rng: &mut SmallRng, view: &Board) -> Result<Coord, PlayerError> {
        loop {
            print!("{}, enter your move (e.g., A5): ", self.name);
            let _ = io::stdout().flush();
            let line = self.read_line()?;
            match parse_target(&line, view) {
                Ok(coord) => return Ok(coord),
                Err(e) => println!("Error: {}. Try again.", e),
            }
        }
    }
}
