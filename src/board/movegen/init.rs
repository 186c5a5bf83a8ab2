//! # Module: `init`
//!
//! Compile-time construction of the leaper attack tables used by `lookup`.

use super::lookup::AttackTable;
use crate::core::*;

/// Builds a per-square attack table for a piece that jumps one step in each of `dirs`.
///
/// Steps that would leave the board, including those wrapping across the A/H files, are
/// dropped by [`Bitboard::shift`].
pub(super) const fn init_pseudo_attacks(dirs: &[Direction]) -> AttackTable {
    let mut attacks = [Bitboard::EMPTY; Square::NUM];

    let mut i = 0;

    while i < Square::NUM {
        let sq_bb = unsafe { Square::from_unchecked(i as u8).bb() };

        let mut j = 0;
        while j < dirs.len() {
            attacks[i] = attacks[i].bitor(sq_bb.shift(dirs[j]));
            j += 1;
        }

        i += 1;
    }

    attacks
}
