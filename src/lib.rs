#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod player;
mod ship;
#[cfg(feature = "std")]
pub mod console;
#[cfg(feature = "std")]
mod game;
#[cfg(feature = "std")]
mod history;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod ui;
pub mod prelude;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use player::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use game::*;
#[cfg(feature = "std")]
pub use history::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
