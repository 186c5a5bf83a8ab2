//! Error types shared by the move generator, the move codec and position construction.
//!
//! Square, file, rank and piece parse errors live next to the types they parse. Everything
//! that signals a broken invariant of generation itself is a [`MoveGenError`]; a malformed FEN
//! record is a [`FenParseError`].

use thiserror::Error;

use super::{Colour, Square};

/******************************************\
|==========================================|
|            Move Generation Errors        |
|==========================================|
\******************************************/

/// Defects detected while encoding, storing or generating moves.
///
/// None of these are recoverable in the middle of a generation pass. The generator itself
/// panics with the variant's message; the fallible entry points (`Move::encode`,
/// `MoveList::try_push`, `BoardState::validate`) return it instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveGenError {
    /// An append was attempted on a full move list.
    #[error("move list overflow: capacity of {capacity} moves exceeded")]
    BufferOverflow { capacity: usize },

    /// A square index outside `0..=63` reached the codec.
    #[error("square index {0} is out of range (expected 0-63)")]
    InvalidSquareIndex(u8),

    /// A flag value wider than the 4-bit flag field reached the codec.
    #[error("move flags {0} do not fit in 4 bits (expected 0-15)")]
    InvalidFlags(u8),

    /// A colour's aggregate occupancy is not the union of its piece bitboards.
    #[error("{colour} occupancy does not match the union of its piece bitboards")]
    InconsistentOccupancy { colour: Colour },

    /// Two piece bitboards of the same colour claim the same square.
    #[error("{colour} has more than one piece on {square}")]
    OverlappingPieces { colour: Colour, square: Square },

    /// Both colours claim the same square.
    #[error("{square} is occupied by both colours")]
    ColourOverlap { square: Square },
}

/******************************************\
|==========================================|
|             Fen Parse Errors             |
|==========================================|
\******************************************/

/// Errors raised while reading the piece placement and side-to-move fields of a FEN record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenParseError {
    /// The record has fewer than 2 or more than 6 whitespace separated fields.
    #[error("FEN string must have between 2 and 6 fields separated by spaces, found {0}")]
    InvalidNumberOfFields(usize),

    /// A character in the placement field is neither a piece letter, a digit nor `/`.
    #[error("Invalid character in FEN piece placement: '{0}'")]
    InvalidPiecePlacementChar(char),

    /// A rank does not describe exactly 8 files, or there are not exactly 8 ranks.
    #[error("Invalid rank format in FEN piece placement: {0}")]
    InvalidRankFormat(String),

    /// The side-to-move field is neither `w` nor `b`.
    #[error("Invalid side to move in FEN: '{0}', expected 'w' or 'b'")]
    InvalidSideToMove(String),
}
