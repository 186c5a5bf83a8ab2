use std::fmt;
use std::iter::FusedIterator;

use super::{Direction, File, Rank, Square};

/******************************************\
|==========================================|
|                 Bitboard                 |
|==========================================|
\******************************************/

/// A set of squares packed into 64 bits, one bit per square, from A1 (LSB) to H8 (MSB).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

crate::impl_bit_ops!(Bitboard);
crate::impl_bit_mani_ops!(Bitboard, u8);

/******************************************\
|==========================================|
|           Bitboard Constants             |
|==========================================|
\******************************************/

impl Bitboard {
    /// An empty bitboard, with no bits set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// A full bitboard, with all 64 bits set.
    pub const FULL: Bitboard = Bitboard(!Self::EMPTY.0);

    /// A bitboard with only the A1 square set.
    pub const A1: Bitboard = Bitboard(1);

    /// All squares on the 1st rank.
    pub const RANK_1: Bitboard = Bitboard(0x00000000000000ff);

    /// All squares on the 8th rank.
    pub const RANK_8: Bitboard = Bitboard(0xff00000000000000);

    /// All squares on the 1st and 2nd ranks.
    pub const RANK_12: Bitboard = Bitboard(0x000000000000ffff);

    /// All squares on the 7th and 8th ranks.
    pub const RANK_78: Bitboard = Bitboard(0xffff000000000000);

    /// Both back ranks, where pawns promote (`0xff000000000000ff`).
    pub const BACK_RANKS: Bitboard = Bitboard(Self::RANK_1.0 | Self::RANK_8.0);

    /// All squares on the A file.
    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);

    /// All squares on the H file.
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);

    /// All squares on the A and B files.
    const FILE_AB: Bitboard = Bitboard(0x0303030303030303);

    /// All squares on the G and H files.
    const FILE_GH: Bitboard = Bitboard(0xc0c0c0c0c0c0c0c0);
}

/******************************************\
|==========================================|
|                Conversions               |
|==========================================|
\******************************************/

impl Square {
    /// Converts a `Square` into a `Bitboard` with only that square's bit set.
    #[inline]
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::A1.0 << *self as u8)
    }
}

impl Rank {
    /// Converts a `Rank` into a `Bitboard` with all squares on that rank set.
    #[inline]
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::RANK_1.0 << (8 * *self as u8))
    }
}

impl File {
    /// Converts a `File` into a `Bitboard` with all squares on that file set.
    #[inline]
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::FILE_A.0 << *self as u8)
    }
}

impl<const N: usize> From<[Square; N]> for Bitboard {
    fn from(squares: [Square; N]) -> Bitboard {
        let mut bb = Bitboard::EMPTY;
        for square in squares {
            bb.set(square);
        }
        bb
    }
}

/******************************************\
|==========================================|
|                 Bit Scan                 |
|==========================================|
\******************************************/

impl Bitboard {
    /// Returns the lowest set square, or `None` for an empty set.
    #[inline]
    pub const fn lsb(&self) -> Option<Square> {
        match self.0 {
            0 => None,
            bits => unsafe { Some(Square::from_unchecked(bits.trailing_zeros() as u8)) },
        }
    }

    /// Returns the lowest set square of a bitboard known to be non-empty.
    ///
    /// # Panics
    /// Panics in debug mode if the bitboard is empty.
    #[inline]
    pub const fn lsb_unchecked(&self) -> Square {
        debug_assert!(self.0 != 0, "Bitboard is empty");
        unsafe { Square::from_unchecked(self.0.trailing_zeros() as u8) }
    }

    /// Clears the lowest set square and returns it, or `None` if the bitboard was empty.
    #[inline]
    pub const fn pop_lsb(&mut self) -> Option<Square> {
        match self.0 {
            0 => None,
            _ => Some(self.pop_lsb_unchecked()),
        }
    }

    /// Clears the lowest set square of a non-empty bitboard and returns it.
    ///
    /// # Panics
    /// Panics in debug mode if the bitboard is empty.
    #[inline]
    pub const fn pop_lsb_unchecked(&mut self) -> Square {
        let lsb_square = self.lsb_unchecked();
        self.0 &= self.0 - 1;
        lsb_square
    }

    /// Calls `f` on every set square, lowest first.
    #[inline]
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Square),
    {
        let mut bb = *self;
        while bb.0 != 0 {
            f(bb.pop_lsb_unchecked());
        }
    }

    /// Returns an iterator over the set squares, lowest first.
    #[inline]
    pub const fn iter(&self) -> BitIter {
        BitIter(*self)
    }
}

/// Iterator over the set squares of a [`Bitboard`] in ascending order.
#[derive(Debug, Clone)]
pub struct BitIter(Bitboard);

impl Iterator for BitIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.0.pop_lsb()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_bits() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitIter {}

impl FusedIterator for BitIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitIter;

    #[inline]
    fn into_iter(self) -> BitIter {
        BitIter(self)
    }
}

/******************************************\
|==========================================|
|          Bitboard Implementation         |
|==========================================|
\******************************************/

impl Bitboard {
    /// Counts the number of set bits (population count) in the bitboard.
    #[inline]
    pub const fn count_bits(&self) -> u32 {
        self.0.count_ones()
    }

    /// Checks if the bitboard is empty (no bits set).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the bitboard has at least one bit set.
    #[inline]
    pub const fn is_occupied(&self) -> bool {
        self.0 != 0
    }

    /// Checks if the bit corresponding to the given `Square` is set.
    #[inline]
    pub const fn contains(&self, square: Square) -> bool {
        (self.0 & (1u64 << (square as u8 as u64))) != 0
    }

    /// Sets the bit corresponding to the given `Square`.
    #[inline]
    pub const fn set(&mut self, square: Square) {
        self.0 |= 1u64 << (square as u8 as u64);
    }

    /// Clears the bit corresponding to the given `Square`.
    #[inline]
    pub const fn clear(&mut self, square: Square) {
        self.0 &= !(1u64 << (square as u8 as u64));
    }

    /// Toggles the bit corresponding to the given `Square`.
    #[inline]
    pub const fn toggle(&mut self, square: Square) {
        self.0 ^= 1u64 << (square as u8 as u64);
    }

    /// Intersection, usable in `const` contexts
    #[inline]
    pub const fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }

    /// Union, usable in `const` contexts
    #[inline]
    pub const fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }

    /// Rotates left for positive `shift` and right for negative `shift`
    #[inline]
    const fn rotate_left(&self, shift: i16) -> Bitboard {
        let bb = if shift >= 0 {
            self.0.rotate_left(shift as u32)
        } else {
            self.0.rotate_right(-shift as u32)
        };
        Bitboard(bb)
    }

    /// Moves every set square one step in `dir`. Squares that would leave the board, including
    /// those that would wrap from one edge file to the other, are dropped.
    #[inline]
    pub const fn shift(&self, dir: Direction) -> Bitboard {
        Bitboard(self.0 & Self::avoid_wrap(dir).0).rotate_left(dir as i16)
    }

    /// Returns the squares that may be shifted in `dir` without leaving the board.
    const fn avoid_wrap(dir: Direction) -> Bitboard {
        use Direction::*;
        let bb = match dir {
            SSE => Self::RANK_12.0 | Self::FILE_H.0,
            SEE => Self::RANK_1.0 | Self::FILE_GH.0,
            SWW => Self::RANK_1.0 | Self::FILE_AB.0,
            SSW => Self::RANK_12.0 | Self::FILE_A.0,
            NNW => Self::RANK_78.0 | Self::FILE_A.0,
            NNE => Self::RANK_78.0 | Self::FILE_H.0,
            NWW => Self::RANK_8.0 | Self::FILE_AB.0,
            NEE => Self::RANK_8.0 | Self::FILE_GH.0,

            N => Self::RANK_8.0,
            S => Self::RANK_1.0,
            E => Self::FILE_H.0,
            W => Self::FILE_A.0,

            NE => Self::RANK_8.0 | Self::FILE_H.0,
            NW => Self::RANK_8.0 | Self::FILE_A.0,
            SE => Self::RANK_1.0 | Self::FILE_H.0,
            SW => Self::RANK_1.0 | Self::FILE_A.0,

            NN => Self::RANK_78.0,
            SS => Self::RANK_12.0,
        };
        Bitboard(!bb)
    }

    /// Squares reached by a knight jump from any square in the set, computed with raw masked
    /// shifts instead of a table lookup.
    ///
    /// The set is first spread one and two files sideways, dropping bits that would wrap
    /// around the board edge, then each spread is moved two and one ranks up and down. This
    /// does not go through [`shift`](Bitboard::shift), so it serves as an independent check
    /// of `KNIGHT_ATTACKS`.
    #[inline]
    pub const fn knight_span(&self) -> Bitboard {
        let b = self.0;
        let east_1 = (b << 1) & !Self::FILE_A.0;
        let west_1 = (b >> 1) & !Self::FILE_H.0;
        let east_2 = (b << 2) & !Self::FILE_AB.0;
        let west_2 = (b >> 2) & !Self::FILE_GH.0;

        let one_file = east_1 | west_1;
        let two_files = east_2 | west_2;

        Bitboard((one_file << 16) | (one_file >> 16) | (two_files << 8) | (two_files >> 8))
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SEPARATOR: &str = "\n     +---+---+---+---+---+---+---+---+";

        writeln!(f, "{}", SEPARATOR)?;

        for rank in Rank::iter().rev() {
            write!(f, " {}   |", rank as u8 + 1)?;

            for file in File::iter() {
                let square = Square::from_parts(file, rank);
                let cell = if self.contains(square) { " 1 " } else { "   " };
                write!(f, "{}|", cell)?;
            }

            writeln!(f, "{}", SEPARATOR)?;
        }

        writeln!(f)?;
        writeln!(f, "       A   B   C   D   E   F   G   H")?;
        writeln!(f)?;
        writeln!(f, "Bitboard: {:#x}", self.0)
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
    fn test_lsb() {
        assert_eq!(Square::A1.bb().lsb(), Some(Square::A1));
        assert_eq!(Square::H8.bb().lsb(), Some(Square::H8));
        assert_eq!((Square::C3.bb() | Square::F7.bb()).lsb(), Some(Square::C3));
        assert_eq!(Bitboard::EMPTY.lsb(), None);
    }

    #[test]
    fn test_pop_lsb() {
        let mut bb = Square::E4.bb() | Square::A1.bb();
        assert_eq!(bb.pop_lsb(), Some(Square::A1));
        assert_eq!(bb.pop_lsb(), Some(Square::E4));
        assert_eq!(bb.pop_lsb(), None);
        assert_eq!(bb.pop_lsb(), None);
    }

    #[test]
    fn test_iteration_is_ascending() {
        let bb = Bitboard::from([Square::H8, Square::A1, Square::D5, Square::E4]);

        let squares: Vec<Square> = bb.iter().collect();
        assert_eq!(squares, vec![Square::A1, Square::E4, Square::D5, Square::H8]);
        assert_eq!(bb.iter().len(), 4);

        let mut visited = Vec::new();
        bb.for_each(|sq| visited.push(sq));
        assert_eq!(visited, squares);

        assert_eq!(Bitboard::EMPTY.into_iter().next(), None);
    }

    #[test]
    fn test_count_bits() {
        assert_eq!(Bitboard::EMPTY.count_bits(), 0);
        assert_eq!(Square::E4.bb().count_bits(), 1);
        assert_eq!(Bitboard::FULL.count_bits(), 64);
        assert_eq!(Bitboard::BACK_RANKS.count_bits(), 16);
    }

    #[test]
    fn test_get_set_clear_toggle() {
        let mut bb = Bitboard::EMPTY;
        bb.set(Square::E4);
        assert!(bb.contains(Square::E4));
        assert!(!bb.contains(Square::A1));

        bb.clear(Square::E4);
        assert!(!bb.contains(Square::E4));

        bb.toggle(Square::D5);
        assert!(bb.contains(Square::D5));
        bb.toggle(Square::D5);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_rank_and_file_masks() {
        assert_eq!(Rank::Rank1.bb(), Bitboard::RANK_1);
        assert_eq!(Rank::Rank8.bb(), Bitboard::RANK_8);
        assert_eq!(Rank::Rank3.bb(), Bitboard(0xff0000));
        assert_eq!(Rank::Rank6.bb(), Bitboard(0xff0000000000));
        assert_eq!(File::FileA.bb(), Bitboard::FILE_A);
        assert_eq!(File::FileH.bb(), Bitboard::FILE_H);
        assert_eq!(Bitboard::BACK_RANKS, Bitboard(0xff000000000000ff));
    }

    #[test]
    fn test_shift_basic_directions() {
        let bb = Square::E5.bb();

        assert_eq!(bb.shift(Direction::N), Square::E6.bb());
        assert_eq!(bb.shift(Direction::S), Square::E4.bb());
        assert_eq!(bb.shift(Direction::E), Square::F5.bb());
        assert_eq!(bb.shift(Direction::W), Square::D5.bb());

        assert_eq!(bb.shift(Direction::NE), Square::F6.bb());
        assert_eq!(bb.shift(Direction::NW), Square::D6.bb());
        assert_eq!(bb.shift(Direction::SE), Square::F4.bb());
        assert_eq!(bb.shift(Direction::SW), Square::D4.bb());

        assert_eq!(bb.shift(Direction::NN), Square::E7.bb());
        assert_eq!(bb.shift(Direction::SS), Square::E3.bb());

        assert_eq!(bb.shift(Direction::NNE), Square::F7.bb());
        assert_eq!(bb.shift(Direction::NNW), Square::D7.bb());
        assert_eq!(bb.shift(Direction::NEE), Square::G6.bb());
        assert_eq!(bb.shift(Direction::NWW), Square::C6.bb());
        assert_eq!(bb.shift(Direction::SEE), Square::G4.bb());
        assert_eq!(bb.shift(Direction::SWW), Square::C4.bb());
        assert_eq!(bb.shift(Direction::SSE), Square::F3.bb());
        assert_eq!(bb.shift(Direction::SSW), Square::D3.bb());
    }

    #[test]
    fn test_shift_does_not_wrap() {
        let h5 = Square::H5.bb();
        assert_eq!(h5.shift(Direction::E), Bitboard::EMPTY);
        assert_eq!(h5.shift(Direction::NE), Bitboard::EMPTY);
        assert_eq!(h5.shift(Direction::SE), Bitboard::EMPTY);
        assert_eq!(h5.shift(Direction::W), Square::G5.bb());

        let a5 = Square::A5.bb();
        assert_eq!(a5.shift(Direction::W), Bitboard::EMPTY);
        assert_eq!(a5.shift(Direction::NW), Bitboard::EMPTY);
        assert_eq!(a5.shift(Direction::SW), Bitboard::EMPTY);

        assert_eq!(Square::E8.bb().shift(Direction::N), Bitboard::EMPTY);
        assert_eq!(Square::E1.bb().shift(Direction::S), Bitboard::EMPTY);

        assert_eq!(Square::G5.bb().shift(Direction::NEE), Bitboard::EMPTY);
        assert_eq!(Square::B5.bb().shift(Direction::SWW), Bitboard::EMPTY);

        let edges = Square::H1.bb() | Square::A1.bb();
        assert_eq!(edges.shift(Direction::E), Square::B1.bb());
        assert_eq!(edges.shift(Direction::W), Square::G1.bb());
    }

    #[test]
    fn test_pawn_rank_shift_stays_on_board() {
        let full_rank = Bitboard::RANK_8 | Bitboard::RANK_1;
        assert_eq!(full_rank.shift(Direction::N), Rank::Rank2.bb());
        assert_eq!(full_rank.shift(Direction::S), Rank::Rank7.bb());
        assert_eq!(Bitboard::FULL.shift(Direction::NE).count_bits(), 49);
        assert_eq!(Bitboard::FULL.shift(Direction::NW).count_bits(), 49);
    }

    #[test]
    fn test_knight_span() {
        assert_eq!(
            Square::D4.bb().knight_span(),
            Bitboard::from([
                Square::C2,
                Square::E2,
                Square::B3,
                Square::F3,
                Square::B5,
                Square::F5,
                Square::C6,
                Square::E6
            ])
        );
        assert_eq!(
            Square::A1.bb().knight_span(),
            Bitboard::from([Square::B3, Square::C2])
        );
        assert_eq!(
            Square::H8.bb().knight_span(),
            Bitboard::from([Square::G6, Square::F7])
        );
        assert_eq!(
            Square::B7.bb().knight_span(),
            Bitboard::from([Square::D8, Square::D6, Square::A5, Square::C5])
        );
        assert_eq!(
            Square::G2.bb().knight_span(),
            Bitboard::from([Square::E1, Square::E3, Square::F4, Square::H4])
        );
    }

    #[test]
    fn test_knight_span_of_a_set() {
        let set = Bitboard::from([Square::A1, Square::H8]);
        assert_eq!(
            set.knight_span(),
            Square::A1.bb().knight_span() | Square::H8.bb().knight_span()
        );
        assert_eq!(Bitboard::FULL.knight_span(), Bitboard::FULL);
        assert!(Bitboard::EMPTY.knight_span().is_empty());
    }
}
