use std::fmt;

use super::{MoveGenError, PieceType, Square};

/******************************************\
|==========================================|
|                Move Flags                |
|==========================================|
\******************************************/

/// # Move flag representation
///
/// The upper nibble of a [`Move`]. Bit 2 marks a capture, bit 3 a promotion, and for
/// promotions the low two bits select the piece (knight, bishop, rook, queen).
///
/// Castling and en passant values are reserved; the generator never emits them. The raw
/// values 6 and 7 have no variant.

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveFlag {
    QuietMove = 0b0000,

    DoublePawnPush = 0b0001,

    KingCastle = 0b0010,

    QueenCastle = 0b0011,

    Capture = 0b0100,

    EPCapture = 0b0101,

    KnightPromo = 0b1000,

    BishopPromo = 0b1001,

    RookPromo = 0b1010,

    QueenPromo = 0b1011,

    KnightPromoCapture = 0b1100,

    BishopPromoCapture = 0b1101,

    RookPromoCapture = 0b1110,

    QueenPromoCapture = 0b1111,
}

impl MoveFlag {
    pub(crate) const CAPTURE_BIT: u8 = 0b0100;

    pub(crate) const PROMOTION_BIT: u8 = 0b1000;

    const PROMOTION_PIECE_MASK: u8 = 0b0011;

    #[inline(always)]
    pub const fn is_capture(self) -> bool {
        (self as u8 & Self::CAPTURE_BIT) != 0
    }

    #[inline(always)]
    pub const fn is_promotion(self) -> bool {
        (self as u8 & Self::PROMOTION_BIT) != 0
    }

    /// Returns the promotion piece, or `None` when this is not a promotion flag
    #[inline(always)]
    pub const fn promotion_piece_type(self) -> Option<PieceType> {
        if !self.is_promotion() {
            return None;
        }

        let promo_index = (self as u8 & Self::PROMOTION_PIECE_MASK) as usize;
        Some(PieceType::PROMOTIONS[promo_index])
    }

    /// Builds a promotion flag
    ///
    /// # Panics
    /// Panics if `piece_type` is a pawn or a king.
    pub const fn promotion_flag(piece_type: PieceType, is_capture: bool) -> MoveFlag {
        match (piece_type, is_capture) {
            (PieceType::Knight, false) => MoveFlag::KnightPromo,
            (PieceType::Bishop, false) => MoveFlag::BishopPromo,
            (PieceType::Rook, false) => MoveFlag::RookPromo,
            (PieceType::Queen, false) => MoveFlag::QueenPromo,
            (PieceType::Knight, true) => MoveFlag::KnightPromoCapture,
            (PieceType::Bishop, true) => MoveFlag::BishopPromoCapture,
            (PieceType::Rook, true) => MoveFlag::RookPromoCapture,
            (PieceType::Queen, true) => MoveFlag::QueenPromoCapture,
            _ => panic!("Invalid promotion piece type!"),
        }
    }
}

impl TryFrom<u8> for MoveFlag {
    type Error = MoveGenError;

    fn try_from(flags: u8) -> Result<Self, Self::Error> {
        use MoveFlag::*;
        let flag = match flags {
            0b0000 => QuietMove,
            0b0001 => DoublePawnPush,
            0b0010 => KingCastle,
            0b0011 => QueenCastle,
            0b0100 => Capture,
            0b0101 => EPCapture,
            0b1000 => KnightPromo,
            0b1001 => BishopPromo,
            0b1010 => RookPromo,
            0b1011 => QueenPromo,
            0b1100 => KnightPromoCapture,
            0b1101 => BishopPromoCapture,
            0b1110 => RookPromoCapture,
            0b1111 => QueenPromoCapture,
            _ => return Err(MoveGenError::InvalidFlags(flags)),
        };
        Ok(flag)
    }
}

/******************************************\
|==========================================|
|                   Move                   |
|==========================================|
\******************************************/

/// # Move representation
///
/// A move packed into 16 bits:
///
/// ```text
/// 15  12 11     6 5      0
/// +-----+--------+--------+
/// |flags|   to   |  from  |
/// +-----+--------+--------+
/// ```
///
/// The flag nibble is stored as given, so any value `0..=15` survives a round trip through
/// [`Move::encode`] and [`Move::decode`], including the two values without a [`MoveFlag`].
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub struct Move {
    data: u16,
}

impl Default for Move {
    fn default() -> Self {
        Self::NONE
    }
}

impl Move {
    const FROM_SHIFT: u16 = 0;

    const TO_SHIFT: u16 = 6;

    const FLAG_SHIFT: u16 = 12;

    const SQUARE_MASK: u16 = 0x3F;

    const FLAG_MASK: u16 = 0xF;

    /// The all-zero record (a1a1, quiet). Used to fill unwritten buffer slots.
    pub const NONE: Self = Self::new(Square::A1, Square::A1, MoveFlag::QuietMove);

    /// Reinterprets a raw 16-bit record. Every `u16` is a well-formed record.
    #[inline]
    pub const fn from_raw(data: u16) -> Self {
        Self { data }
    }

    #[inline(always)]
    pub const fn new(from: Square, to: Square, flag: MoveFlag) -> Self {
        Self::pack(from as u8, to as u8, flag as u8)
    }

    #[inline(always)]
    pub const fn new_promotion(
        from: Square,
        to: Square,
        piece_type: PieceType,
        is_capture: bool,
    ) -> Self {
        Self::new(from, to, MoveFlag::promotion_flag(piece_type, is_capture))
    }

    /// Checked construction from raw square indices and a raw flag nibble.
    ///
    /// Fails with [`MoveGenError::InvalidSquareIndex`] if either square is above 63 and with
    /// [`MoveGenError::InvalidFlags`] if `flags` is above 15.
    pub fn encode(from: u8, to: u8, flags: u8) -> Result<Self, MoveGenError> {
        let from = Square::try_from(from)?;
        let to = Square::try_from(to)?;

        if flags as u16 > Self::FLAG_MASK {
            return Err(MoveGenError::InvalidFlags(flags));
        }

        Ok(Self::pack(from as u8, to as u8, flags))
    }

    /// Splits the record into `(from, to, flags)`, the inverse of [`Move::encode`].
    #[inline]
    pub const fn decode(self) -> (u8, u8, u8) {
        (self.from() as u8, self.to() as u8, self.flags())
    }

    #[inline(always)]
    const fn pack(from: u8, to: u8, flags: u8) -> Self {
        let data = ((from as u16) << Self::FROM_SHIFT)
            | ((to as u16) << Self::TO_SHIFT)
            | ((flags as u16) << Self::FLAG_SHIFT);

        Self { data }
    }

    #[inline(always)]
    pub const fn from(&self) -> Square {
        let index = ((self.data >> Self::FROM_SHIFT) & Self::SQUARE_MASK) as u8;
        unsafe { Square::from_unchecked(index) }
    }

    #[inline(always)]
    pub const fn to(&self) -> Square {
        let index = ((self.data >> Self::TO_SHIFT) & Self::SQUARE_MASK) as u8;
        unsafe { Square::from_unchecked(index) }
    }

    /// The raw flag nibble
    #[inline(always)]
    pub const fn flags(&self) -> u8 {
        ((self.data >> Self::FLAG_SHIFT) & Self::FLAG_MASK) as u8
    }

    /// The flag as a [`MoveFlag`], or `None` for the unassigned values 6 and 7
    #[inline]
    pub fn flag(&self) -> Option<MoveFlag> {
        MoveFlag::try_from(self.flags()).ok()
    }

    #[inline(always)]
    pub const fn raw(&self) -> u16 {
        self.data
    }

    #[inline(always)]
    pub const fn is_quiet(&self) -> bool {
        self.flags() == MoveFlag::QuietMove as u8
    }

    #[inline(always)]
    pub const fn is_double_push(&self) -> bool {
        self.flags() == MoveFlag::DoublePawnPush as u8
    }

    #[inline(always)]
    pub const fn is_capture(&self) -> bool {
        self.flags() & MoveFlag::CAPTURE_BIT != 0
    }

    #[inline(always)]
    pub const fn is_promotion(&self) -> bool {
        self.flags() & MoveFlag::PROMOTION_BIT != 0
    }

    /// The piece a pawn promotes to, if this is a promotion
    #[inline(always)]
    pub const fn promotion_pt(&self) -> Option<PieceType> {
        if self.is_promotion() {
            Some(PieceType::PROMOTIONS[(self.flags() & MoveFlag::PROMOTION_PIECE_MASK) as usize])
        } else {
            None
        }
    }

    #[inline(always)]
    pub const fn is_king_castle(&self) -> bool {
        self.flags() == MoveFlag::KingCastle as u8
    }

    #[inline(always)]
    pub const fn is_queen_castle(&self) -> bool {
        self.flags() == MoveFlag::QueenCastle as u8
    }

    #[inline(always)]
    pub const fn is_castle(&self) -> bool {
        self.is_king_castle() || self.is_queen_castle()
    }

    #[inline(always)]
    pub const fn is_ep_capture(&self) -> bool {
        self.flags() == MoveFlag::EPCapture as u8
    }
}

impl fmt::Display for Move {
    /// Long algebraic notation (`e2e4`, `e7e8q`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.promotion_pt() {
            Some(pt) => write!(f, "{}{}{}", self.from(), self.to(), pt),
            None => write!(f, "{}{}", self.from(), self.to()),
        }
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
    use crate::core::square::Square::*;
    use proptest::prelude::*;

    #[test]
    fn test_encoding_decoding_basic() {
        let m = Move::new(E2, E4, MoveFlag::QuietMove);
        assert_eq!(m.from(), E2);
        assert_eq!(m.to(), E4);
        assert_eq!(m.flag(), Some(MoveFlag::QuietMove));
        assert!(m.is_quiet());
        assert!(!m.is_capture());
        assert!(!m.is_promotion());
        assert!(!m.is_castle());
    }

    #[test]
    fn test_bit_layout() {
        let m = Move::new(E2, E4, MoveFlag::DoublePawnPush);
        assert_eq!(m.raw(), 12 | (28 << 6) | (1 << 12));

        let m = Move::new_promotion(G7, H8, PieceType::Queen, true);
        assert_eq!(m.raw() >> 12, 0b1111);
        assert_eq!(m.raw() & 0x3F, G7 as u16);
        assert_eq!((m.raw() >> 6) & 0x3F, H8 as u16);

        assert_eq!(Move::from_raw(m.raw()), m);
    }

    #[test]
    fn test_encoding_decoding_capture() {
        let m = Move::new(D4, C5, MoveFlag::Capture);
        assert_eq!(m.from(), D4);
        assert_eq!(m.to(), C5);
        assert_eq!(m.flag(), Some(MoveFlag::Capture));
        assert!(!m.is_quiet());
        assert!(m.is_capture());
        assert!(!m.is_promotion());
        assert!(!m.is_ep_capture());
        assert_eq!(m.promotion_pt(), None);
    }

    #[test]
    fn test_encoding_decoding_reserved_flags() {
        let ep = Move::new(E5, D6, MoveFlag::EPCapture);
        assert!(ep.is_capture());
        assert!(ep.is_ep_capture());
        assert!(!ep.is_promotion());

        let ks = Move::new(E1, G1, MoveFlag::KingCastle);
        let qs = Move::new(E8, C8, MoveFlag::QueenCastle);
        assert!(ks.is_king_castle() && ks.is_castle() && !ks.is_capture());
        assert!(qs.is_queen_castle() && qs.is_castle() && !qs.is_capture());
    }

    #[test]
    fn test_unassigned_flags_survive() {
        for flags in [6, 7] {
            let m = Move::encode(1, 2, flags).unwrap();
            assert_eq!(m.flags(), flags);
            assert_eq!(m.flag(), None);
            assert_eq!(m.decode(), (1, 2, flags));
        }
    }

    #[test]
    fn test_promotion_constructor() {
        for (code, &pt) in PieceType::PROMOTIONS.iter().enumerate() {
            let quiet = Move::new_promotion(A7, A8, pt, false);
            assert_eq!(quiet.flags(), 0b1000 | code as u8);
            assert!(quiet.is_promotion());
            assert!(!quiet.is_capture());
            assert_eq!(quiet.promotion_pt(), Some(pt));

            let capture = Move::new_promotion(A7, B8, pt, true);
            assert_eq!(capture.flags(), 0b1100 | code as u8);
            assert!(capture.is_promotion());
            assert!(capture.is_capture());
            assert_eq!(capture.promotion_pt(), Some(pt));
            assert_eq!(capture.flag().unwrap().promotion_piece_type(), Some(pt));
        }
    }

    #[test]
    #[should_panic(expected = "Invalid promotion piece type!")]
    fn test_invalid_promotion_panic_pawn() {
        Move::new_promotion(A7, A8, PieceType::Pawn, false);
    }

    #[test]
    #[should_panic(expected = "Invalid promotion piece type!")]
    fn test_invalid_promotion_panic_king() {
        Move::new_promotion(A7, A8, PieceType::King, false);
    }

    #[test]
    fn test_encode_rejects_out_of_range() {
        assert_eq!(
            Move::encode(64, 0, 0),
            Err(MoveGenError::InvalidSquareIndex(64))
        );
        assert_eq!(
            Move::encode(0, 200, 0),
            Err(MoveGenError::InvalidSquareIndex(200))
        );
        assert_eq!(Move::encode(0, 0, 16), Err(MoveGenError::InvalidFlags(16)));
    }

    #[test]
    fn test_flag_try_from() {
        assert_eq!(MoveFlag::try_from(4), Ok(MoveFlag::Capture));
        assert_eq!(MoveFlag::try_from(15), Ok(MoveFlag::QueenPromoCapture));
        assert_eq!(MoveFlag::try_from(6), Err(MoveGenError::InvalidFlags(6)));
        assert_eq!(MoveFlag::try_from(16), Err(MoveGenError::InvalidFlags(16)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::new(E2, E4, MoveFlag::DoublePawnPush).to_string(), "e2e4");
        assert_eq!(Move::new(G1, F3, MoveFlag::QuietMove).to_string(), "g1f3");
        assert_eq!(
            Move::new_promotion(E7, E8, PieceType::Queen, false).to_string(),
            "e7e8q"
        );
        assert_eq!(
            Move::new_promotion(B2, A1, PieceType::Knight, true).to_string(),
            "b2a1n"
        );
    }

    #[test]
    fn test_default_move() {
        let default_move = Move::default();
        assert_eq!(default_move.raw(), 0);
        assert_eq!(default_move.from(), A1);
        assert_eq!(default_move.to(), A1);
        assert!(default_move.is_quiet());
    }

    proptest! {
        #[test]
        fn prop_encode_decode_roundtrip(from in 0u8..64, to in 0u8..64, flags in 0u8..16) {
            let m = Move::encode(from, to, flags).unwrap();
            prop_assert_eq!(m.decode(), (from, to, flags));
            prop_assert_eq!(Move::from_raw(m.raw()), m);
        }

        #[test]
        fn prop_encode_rejects_wide_flags(from in 0u8..64, to in 0u8..64, flags in 16u8..) {
            prop_assert_eq!(Move::encode(from, to, flags), Err(MoveGenError::InvalidFlags(flags)));
        }
    }
}
