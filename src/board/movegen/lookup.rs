//! # Module: `lookup`
//!
//! Precomputed attack tables, built at compile time by [`init_pseudo_attacks`], and their
//! accessors.
//!
//! Only knights are table driven. Pawn pushes and captures are generated set-wise with
//! [`Bitboard::shift`], which needs no table.

use super::init::*;
use crate::core::{Bitboard, Direction, Square};

/// Attack table for a single piece type indexed by square
pub type AttackTable = [Bitboard; Square::NUM];

/// Precomputed knight attacks, indexed by `[Square]`.
pub const KNIGHT_ATTACKS: AttackTable = init_pseudo_attacks(&Direction::KNIGHT);

/// Squares a knight on `sq` attacks, whatever stands on them.
#[inline]
pub fn knight_attack(sq: Square) -> Bitboard {
    unsafe { *KNIGHT_ATTACKS.get_unchecked(sq.index()) }
}
