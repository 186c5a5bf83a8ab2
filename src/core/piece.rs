use thiserror::Error;

use crate::core::Colour;

/******************************************\
|==========================================|
|                  Piece                   |
|==========================================|
\******************************************/

/// # Piece representation
///
/// A coloured piece. The discriminant interleaves colours so that `piece >> 1` is the
/// [`PieceType`] and `piece & 1` is the [`Colour`].

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    WhitePawn, BlackPawn, WhiteKnight, BlackKnight, WhiteBishop, BlackBishop, WhiteRook, BlackRook, WhiteQueen, BlackQueen, WhiteKing, BlackKing
}

impl Piece {
    /// Number of elements in the Piece enum
    pub const NUM: usize = 12;
}

crate::impl_from_to_primitive!(Piece);
crate::impl_enum_iter!(Piece);

/******************************************\
|==========================================|
|                Piece Type                |
|==========================================|
\******************************************/

/// # Piece Type representation
///
/// The order fixes the layout of the per-colour bitboard arrays in
/// [`BoardState`](crate::board::BoardState).

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceType {
   Pawn, Knight, Bishop, Rook, Queen, King,
}

impl PieceType {
    /// Number of elements in the PieceType enum
    pub const NUM: usize = 6;

    /// Promotion choices in the order of their 2-bit move encoding (knight = 0 .. queen = 3).
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
    ];
}

crate::impl_from_to_primitive!(PieceType);
crate::impl_enum_iter!(PieceType);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Piece {
    /// Returns the piece type of the piece
    #[inline]
    pub const fn pt(self) -> PieceType {
        unsafe { PieceType::from_unchecked(self as u8 >> 1) }
    }

    /// Returns the colour of the piece
    #[inline]
    pub const fn colour(self) -> Colour {
        unsafe { Colour::from_unchecked(self as u8 & 1) }
    }

    /// Combines a colour and piece type pair to create a piece
    #[inline]
    pub const fn from_parts(colour: Colour, piece_type: PieceType) -> Self {
        unsafe { Piece::from_unchecked(colour as u8 | (piece_type as u8) << 1) }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

/// FEN letters in discriminant order
const PIECE_STR: &str = "PpNnBbRrQqKk";

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let piece_char = PIECE_STR.as_bytes()[self.index()] as char;
        write!(f, "{}", piece_char)
    }
}

impl std::fmt::Display for PieceType {
    /// Lowercase FEN letter, as used for promotion suffixes in long algebraic notation
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let piece_char = PIECE_STR.as_bytes()[self.index() << 1].to_ascii_lowercase() as char;
        write!(f, "{}", piece_char)
    }
}

/******************************************\
|==========================================|
|                Parse Piece               |
|==========================================|
\******************************************/

impl TryFrom<char> for Piece {
    type Error = ParsePieceError;

    /// Maps a FEN letter to a piece
    fn try_from(piece_char: char) -> Result<Self, Self::Error> {
        let index = PIECE_STR
            .chars()
            .position(|c| c == piece_char)
            .ok_or(ParsePieceError::InvalidChar(piece_char))? as u8;

        unsafe { Ok(Piece::from_unchecked(index)) }
    }
}

impl std::str::FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(piece_char), None) => Piece::try_from(piece_char),
            _ => Err(ParsePieceError::InvalidLength(s.len())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePieceError {
    #[error("Invalid length for piece string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for piece string: '{0}', expected one of 'PNBRQKpnbrqk'")]
    InvalidChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
