pub mod fen;
pub mod movegen;

pub use fen::{KILLER_FEN, START_FEN, TRICKY_FEN};
pub use movegen::{
    AllGen, CaptureGen, GenTypeTrait, KNIGHT_ATTACKS, MAX_MOVES, MoveGen, MoveGenType, MoveIter,
    MoveList, QuietGen, knight_attack,
};

use crate::core::*;

/******************************************\
|==========================================|
|               Board State                |
|==========================================|
\******************************************/

/// # Position snapshot
///
/// Piece placement as one bitboard per colour and piece type, the aggregate occupancy of each
/// colour, and the side to move. This is everything move generation reads.
///
/// Consistency between the piece bitboards and the occupancy bitboards is maintained by
/// [`add_piece`](BoardState::add_piece) and [`remove_piece`](BoardState::remove_piece), and
/// can be checked with [`validate`](BoardState::validate) for states assembled by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardState {
    pieces: [[Bitboard; PieceType::NUM]; Colour::NUM],

    occupied: [Bitboard; Colour::NUM],

    stm: Colour,
}

/******************************************\
|==========================================|
|           Basic Implementation           |
|==========================================|
\******************************************/

impl Default for BoardState {
    /// The standard starting position, white to move
    fn default() -> BoardState {
        use Colour::*;
        use PieceType::*;

        let mut state = BoardState::new();

        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        for (file, pt) in File::iter().zip(back_rank) {
            state.add_piece(Piece::from_parts(White, pt), Square::from_parts(file, Rank::Rank1));
            state.add_piece(Piece::from_parts(White, Pawn), Square::from_parts(file, Rank::Rank2));
            state.add_piece(Piece::from_parts(Black, Pawn), Square::from_parts(file, Rank::Rank7));
            state.add_piece(Piece::from_parts(Black, pt), Square::from_parts(file, Rank::Rank8));
        }

        state
    }
}

impl BoardState {
    /// An empty board with white to move
    pub const fn new() -> BoardState {
        BoardState {
            pieces: [[Bitboard::EMPTY; PieceType::NUM]; Colour::NUM],
            occupied: [Bitboard::EMPTY; Colour::NUM],
            stm: Colour::White,
        }
    }

    /// Assembles a state from raw bitboards without checking them.
    ///
    /// Use [`validate`](BoardState::validate) if the bitboards come from an untrusted source.
    pub const fn from_raw_parts(
        pieces: [[Bitboard; PieceType::NUM]; Colour::NUM],
        occupied: [Bitboard; Colour::NUM],
        stm: Colour,
    ) -> BoardState {
        BoardState {
            pieces,
            occupied,
            stm,
        }
    }

    /// Puts `piece` on an empty `square`, updating the piece and occupancy bitboards.
    #[inline]
    pub fn add_piece(&mut self, piece: Piece, square: Square) {
        debug_assert!(
            self.piece_on(square).is_none(),
            "add_piece: 'square' is occupied"
        );
        self.pieces[piece.colour().index()][piece.pt().index()].set(square);
        self.occupied[piece.colour().index()].set(square);
    }

    /// Takes whatever stands on `square` off the board and returns it.
    #[inline]
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let piece = self.piece_on(square)?;
        self.pieces[piece.colour().index()][piece.pt().index()].clear(square);
        self.occupied[piece.colour().index()].clear(square);
        Some(piece)
    }

    #[inline]
    pub fn set_stm(&mut self, stm: Colour) {
        self.stm = stm;
    }
}

/******************************************\
|==========================================|
|                 Getters                  |
|==========================================|
\******************************************/

impl BoardState {
    #[inline]
    pub const fn piece_bb(&self, col: Colour, pt: PieceType) -> Bitboard {
        self.pieces[col.index()][pt.index()]
    }

    #[inline]
    pub const fn occupied_bb(&self, col: Colour) -> Bitboard {
        self.occupied[col.index()]
    }

    #[inline]
    pub const fn all_occupied_bb(&self) -> Bitboard {
        self.occupied_bb(Colour::White)
            .bitor(self.occupied_bb(Colour::Black))
    }

    #[inline]
    pub const fn stm(&self) -> Colour {
        self.stm
    }

    /// Returns the piece standing on `square`, if any
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        let col = Colour::iter().find(|&col| self.occupied_bb(col).contains(square))?;
        let pt = PieceType::iter().find(|&pt| self.piece_bb(col, pt).contains(square))?;
        Some(Piece::from_parts(col, pt))
    }
}

/******************************************\
|==========================================|
|                Validation                |
|==========================================|
\******************************************/

impl BoardState {
    /// Checks that the occupancy bitboards agree with the piece bitboards.
    ///
    /// Per colour, no two piece bitboards may share a square and the aggregate occupancy must
    /// equal their union. No square may be occupied by both colours.
    pub fn validate(&self) -> Result<(), MoveGenError> {
        for col in Colour::iter() {
            let mut union = Bitboard::EMPTY;

            for pt in PieceType::iter() {
                let bb = self.piece_bb(col, pt);

                if let Some(square) = (union & bb).lsb() {
                    return Err(MoveGenError::OverlappingPieces {
                        colour: col,
                        square,
                    });
                }

                union |= bb;
            }

            if union != self.occupied_bb(col) {
                return Err(MoveGenError::InconsistentOccupancy { colour: col });
            }
        }

        let both = self.occupied_bb(Colour::White) & self.occupied_bb(Colour::Black);
        match both.lsb() {
            Some(square) => Err(MoveGenError::ColourOverlap { square }),
            None => Ok(()),
        }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SEPARATOR: &str = "\n     +---+---+---+---+---+---+---+---+";

        writeln!(f, "{}", SEPARATOR)?;

        for rank in Rank::iter().rev() {
            write!(f, " {}   |", rank as u8 + 1)?;

            for file in File::iter() {
                let square = Square::from_parts(file, rank);
                let cell = match self.piece_on(square) {
                    Some(piece) => piece.to_string(),
                    None => " ".to_string(),
                };
                write!(f, " {} |", cell)?;
            }

            writeln!(f, "{}", SEPARATOR)?;
        }

        writeln!(f)?;
        writeln!(f, "       A   B   C   D   E   F   G   H")?;
        writeln!(f)?;
        writeln!(f, "Current Side: {:?}", self.stm())
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let state = BoardState::new();
        assert!(state.all_occupied_bb().is_empty());
        assert_eq!(state.stm(), Colour::White);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_default_is_start_position() {
        let state = BoardState::default();

        assert_eq!(state.piece_bb(Colour::White, PieceType::Pawn), Rank::Rank2.bb());
        assert_eq!(state.piece_bb(Colour::Black, PieceType::Pawn), Rank::Rank7.bb());
        assert_eq!(
            state.piece_bb(Colour::White, PieceType::Knight),
            Bitboard::from([Square::B1, Square::G1])
        );
        assert_eq!(state.occupied_bb(Colour::White), Bitboard(0xffff));
        assert_eq!(state.occupied_bb(Colour::Black), Bitboard(0xffff << 48));
        assert_eq!(state.piece_on(Square::E1), Some(Piece::WhiteKing));
        assert_eq!(state.piece_on(Square::D8), Some(Piece::BlackQueen));
        assert_eq!(state.piece_on(Square::E4), None);
        assert!(state.validate().is_ok());
        assert_eq!(state, BoardState::from_fen(START_FEN).unwrap());
    }

    #[test]
    fn test_add_remove_piece() {
        let mut state = BoardState::new();
        state.add_piece(Piece::BlackKnight, Square::F6);

        assert_eq!(state.piece_on(Square::F6), Some(Piece::BlackKnight));
        assert!(state.occupied_bb(Colour::Black).contains(Square::F6));
        assert!(state.validate().is_ok());

        assert_eq!(state.remove_piece(Square::F6), Some(Piece::BlackKnight));
        assert_eq!(state.remove_piece(Square::F6), None);
        assert!(state.all_occupied_bb().is_empty());
    }

    #[test]
    fn test_validate_inconsistent_occupancy() {
        let mut pieces = [[Bitboard::EMPTY; PieceType::NUM]; Colour::NUM];
        pieces[Colour::White.index()][PieceType::Pawn.index()] = Square::E2.bb();
        let occupied = [Bitboard::EMPTY, Bitboard::EMPTY];

        let state = BoardState::from_raw_parts(pieces, occupied, Colour::White);
        assert_eq!(
            state.validate(),
            Err(MoveGenError::InconsistentOccupancy {
                colour: Colour::White
            })
        );
    }

    #[test]
    fn test_validate_overlapping_pieces() {
        let mut pieces = [[Bitboard::EMPTY; PieceType::NUM]; Colour::NUM];
        pieces[Colour::Black.index()][PieceType::Pawn.index()] = Square::D5.bb();
        pieces[Colour::Black.index()][PieceType::Knight.index()] = Square::D5.bb();
        let occupied = [Bitboard::EMPTY, Square::D5.bb()];

        let state = BoardState::from_raw_parts(pieces, occupied, Colour::Black);
        assert_eq!(
            state.validate(),
            Err(MoveGenError::OverlappingPieces {
                colour: Colour::Black,
                square: Square::D5
            })
        );
    }

    #[test]
    fn test_validate_colour_overlap() {
        let mut pieces = [[Bitboard::EMPTY; PieceType::NUM]; Colour::NUM];
        pieces[Colour::White.index()][PieceType::Knight.index()] = Square::C3.bb();
        pieces[Colour::Black.index()][PieceType::Pawn.index()] = Square::C3.bb();
        let occupied = [Square::C3.bb(), Square::C3.bb()];

        let state = BoardState::from_raw_parts(pieces, occupied, Colour::White);
        assert_eq!(
            state.validate(),
            Err(MoveGenError::ColourOverlap { square: Square::C3 })
        );
    }

    #[test]
    fn test_display() {
        let state = BoardState::default();
        let shown = state.to_string();
        assert!(shown.contains(" 8   | r | n | b | q | k | b | n | r |"));
        assert!(shown.contains(" 4   |   |   |   |   |   |   |   |   |"));
        assert!(shown.contains("Current Side: White"));
    }
}
