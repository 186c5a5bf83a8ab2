use super::Square;

/******************************************\
|==========================================|
|                 Colours                  |
|==========================================|
\******************************************/

/// # Colour Representation
///
/// The two sides of a chess game. The discriminant doubles as the index into per-colour arrays.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Black,
}

impl Colour {
    /// Number of elements in the Colour enum
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(Colour);
crate::impl_enum_iter!(Colour);

/******************************************\
|==========================================|
|                 Direction                |
|==========================================|
\******************************************/

/// # Direction Representation
///
/// Square-index offsets for the 8 king steps, the 8 knight jumps and the pawn double step.
/// Adding a direction to a square index moves one step that way (`N` is `+8`, `E` is `+1`).

#[rustfmt::skip]
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    N = 8, S = -8, W = -1, E = 1,
    NE = 9, NW = 7, SE = -7, SW = -9,
    NNE = 17, NNW = 15, NEE = 10, NWW = 6,
    SEE = -6, SWW = -10, SSE = -15, SSW = -17,
    NN = 16, SS = -16,
}

crate::impl_from_to_primitive!(Direction, i8);

impl Direction {
    /// The eight knight jumps, in the order the attack table is built from.
    pub const KNIGHT: [Direction; 8] = [
        Direction::NNE,
        Direction::NNW,
        Direction::NEE,
        Direction::NWW,
        Direction::SEE,
        Direction::SWW,
        Direction::SSE,
        Direction::SSW,
    ];
}

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Colour {
    /// Returns the pawn push direction for a colour
    #[inline]
    pub const fn forward(&self) -> Direction {
        match self {
            Colour::White => Direction::N,
            Colour::Black => Direction::S,
        }
    }

    /// Returns the pawn double push direction for a colour
    #[inline]
    pub const fn double_forward(&self) -> Direction {
        match self {
            Colour::White => Direction::NN,
            Colour::Black => Direction::SS,
        }
    }

    /// Returns the pawn capture direction towards the H file for a colour
    #[inline]
    pub const fn forward_east(&self) -> Direction {
        match self {
            Colour::White => Direction::NE,
            Colour::Black => Direction::SE,
        }
    }

    /// Returns the pawn capture direction towards the A file for a colour
    #[inline]
    pub const fn forward_west(&self) -> Direction {
        match self {
            Colour::White => Direction::NW,
            Colour::Black => Direction::SW,
        }
    }
}

impl std::ops::Not for Colour {
    type Output = Self;

    /// Returns the opposite colour
    #[inline]
    fn not(self) -> Self::Output {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Colour::White => write!(f, "white"),
            Colour::Black => write!(f, "black"),
        }
    }
}

impl Square {
    /// Add direction to a square without checking
    ///
    /// ## Safety
    /// - `self + rhs` must land on the board and must not wrap across a board edge
    #[inline]
    pub const unsafe fn add_unchecked(self, rhs: Direction) -> Self {
        debug_assert!((self as i16 + rhs as i16) >= 0, "Square out of bounds");
        debug_assert!((self as i16 + rhs as i16) < 64, "Square out of bounds");
        unsafe { Square::from_unchecked((self as i16 + rhs as i16) as u8) }
    }
}

impl std::ops::Neg for Direction {
    type Output = Self;

    /// Negate the direction (N => S, etc...)
    #[inline]
    fn neg(self) -> Self::Output {
        // Safety: every direction is paired with its opposite.
        unsafe { Self::from_unchecked(-(self as i8)) }
    }
}
