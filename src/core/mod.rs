// Core module exports

mod macros;

// Board representation submodules
pub mod bitboard;
pub mod errors;
pub mod moves;
pub mod piece;
pub mod square;
pub mod types;

// Re-export common types for easier access
pub use bitboard::{BitIter, Bitboard};
pub use errors::{FenParseError, MoveGenError};
pub use moves::{Move, MoveFlag};
pub use piece::{ParsePieceError, Piece, PieceType};
pub use square::{File, ParseFileError, ParseRankError, ParseSquareError, Rank, Square};
pub use types::{Colour, Direction};
