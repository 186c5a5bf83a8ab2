use log::debug;

use super::BoardState;
use crate::core::*;

/******************************************\
|==========================================|
|            Useful fen strings            |
|==========================================|
\******************************************/

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const TRICKY_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

pub const KILLER_FEN: &str = "rnbqkb1r/pp1p1pPp/8/2p1pP2/1P1P4/3P3P/P1P1P3/RNBQKBNR w KQkq e6 0 1";

/******************************************\
|==========================================|
|               Parse Fen                  |
|==========================================|
\******************************************/

impl BoardState {
    /// Minimum number of FEN fields read: piece placement and side to move
    pub const FEN_MIN_SECTIONS: usize = 2;

    /// Maximum number of FEN fields accepted
    pub const FEN_SECTIONS: usize = 6;

    /// Builds a position from the piece placement and side-to-move fields of a FEN record.
    ///
    /// The castling, en passant and clock fields may follow but are not read, since a
    /// `BoardState` has nowhere to keep them.
    pub fn from_fen(fen: &str) -> Result<Self, FenParseError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();

        if !(Self::FEN_MIN_SECTIONS..=Self::FEN_SECTIONS).contains(&fields.len()) {
            return Err(FenParseError::InvalidNumberOfFields(fields.len()));
        }

        let mut state = BoardState::new();
        state.parse_piece_placement(fields[0])?;
        state.parse_side_to_move(fields[1])?;

        debug!(
            "parsed fen '{}': {} pieces, {} to move",
            fen,
            state.all_occupied_bb().count_bits(),
            state.stm
        );

        Ok(state)
    }

    fn parse_separator(
        rank_iter: &mut impl DoubleEndedIterator<Item = Rank>,
        rank: Rank,
        file: u8,
    ) -> Result<(Rank, u8), FenParseError> {
        if file != 8 {
            return Err(FenParseError::InvalidRankFormat(format!(
                "Rank {:?} ended prematurely at file index {} (expected 8) before '/'",
                rank, file
            )));
        }

        let next_rank = rank_iter.next().ok_or_else(|| {
            FenParseError::InvalidRankFormat(format!(
                "Too many rank separators ('/') found after completing rank {:?}",
                rank
            ))
        })?;

        Ok((next_rank, 0))
    }

    fn parse_skip(
        skip: char,
        idx: usize,
        current_rank: Rank,
        current_file_index: u8,
    ) -> Result<u8, FenParseError> {
        let skip_val = skip as u8 - b'0';

        if !(1..=8).contains(&skip_val) {
            return Err(FenParseError::InvalidRankFormat(format!(
                "Invalid skip digit '{}' (must be 1-8) at char index {}",
                skip, idx
            )));
        }

        if current_file_index + skip_val > 8 {
            return Err(FenParseError::InvalidRankFormat(format!(
                "Skip value {} exceeds rank length at file index {} on rank {:?}",
                skip_val, current_file_index, current_rank
            )));
        }

        Ok(skip_val)
    }

    fn parse_piece(&mut self, piece: char, rank: Rank, file: u8) -> Result<(), FenParseError> {
        let piece_enum =
            Piece::try_from(piece).map_err(|_| FenParseError::InvalidPiecePlacementChar(piece))?;

        if file >= 8 {
            return Err(FenParseError::InvalidRankFormat(format!(
                "Piece placement '{}' attempted beyond file H (index >= 8) on rank {:?}",
                piece, rank
            )));
        }

        let current_file = unsafe { File::from_unchecked(file) };

        self.add_piece(piece_enum, Square::from_parts(current_file, rank));

        Ok(())
    }

    fn parse_piece_placement(&mut self, piece_placement: &str) -> Result<(), FenParseError> {
        let mut rank_iter = Rank::iter().rev();

        let mut rank = rank_iter
            .next()
            .ok_or_else(|| FenParseError::InvalidRankFormat("Board has no ranks?".to_string()))?;

        let mut file: u8 = 0;

        for (i, char) in piece_placement.chars().enumerate() {
            match char {
                '/' => {
                    (rank, file) = Self::parse_separator(&mut rank_iter, rank, file)?;
                }

                skip if skip.is_ascii_digit() => {
                    file += Self::parse_skip(skip, i, rank, file)?;
                }

                piece_char => {
                    self.parse_piece(piece_char, rank, file)?;
                    file += 1;
                }
            }
        }

        if file != 8 {
            return Err(FenParseError::InvalidRankFormat(format!(
                "Final rank {:?} ended prematurely at file index {} (expected 8)",
                rank, file
            )));
        }

        if rank_iter.next().is_some() {
            return Err(FenParseError::InvalidRankFormat(
                "Not enough ranks specified in FEN string (expected 8)".to_string(),
            ));
        }

        Ok(())
    }

    fn parse_side_to_move(&mut self, side_to_move: &str) -> Result<(), FenParseError> {
        match side_to_move {
            "w" => self.stm = Colour::White,
            "b" => self.stm = Colour::Black,
            _ => return Err(FenParseError::InvalidSideToMove(side_to_move.to_string())),
        };
        Ok(())
    }
}

impl std::str::FromStr for BoardState {
    type Err = FenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardState::from_fen(s)
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
