//! # chess_movegen
//!
//! Pseudo-legal move generation for pawns and knights over a bitboard position, with a
//! 16-bit move encoding and an allocation-free move buffer.
pub mod board;
pub mod core;

pub use board::{
    AllGen, BoardState, CaptureGen, MAX_MOVES, MoveGen, MoveIter, MoveList, QuietGen, START_FEN,
};
pub use crate::core::*;
