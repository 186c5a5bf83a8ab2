//! # Module: `movegen`
//!
//! Pseudo-legal move generation for pawns and knights.
//!
//! ## Overview
//!
//! A [`MoveGen`] owns a copy of the position it was bound to and a fixed-capacity
//! [`MoveList`]. Each call to [`MoveGen::generate_moves`] appends every structurally valid
//! pawn and knight move for the side to move, without checking whether the mover's king is
//! left in check. Rebinding with [`MoveGen::set_state`] or calling [`MoveGen::clear`] resets
//! the list without reallocating, so one generator can be reused for every node of a search.
//!
//! ## Key Components
//!
//! - **`gen`**: the per-piece strategies (`PieceGen`) and the shared
//!   generation context.
//! - **`lookup`**: the compile-time knight attack table.
//! - **`init`**: the `const fn` that builds the table.
//! - **`move_list`**: the move buffer and its iterator.
//!
//! ## Generation order
//!
//! Pawn captures towards the H file, pawn captures towards the A file, single pushes, double
//! pushes, then knights. Promotions come first within each pawn group. Every group is scanned
//! in ascending square order, so the output is a pure function of the position.

mod r#gen;
mod init;
mod lookup;
mod move_list;

pub use lookup::{KNIGHT_ATTACKS, knight_attack};
pub use move_list::{MAX_MOVES, MoveIter, MoveList};

use log::{debug, trace};
use r#gen::{GenContext, KnightGen, PawnGen, PieceGen};

use super::BoardState;
use crate::core::*;

/******************************************\
|==========================================|
|             Generation Types             |
|==========================================|
\******************************************/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveGenType {
    All,
    Quiet,
    Capture,
}

/// Selects which records a generation pass emits.
///
/// Quiet passes emit pushes, double pushes, quiet promotions and knight moves to empty
/// squares. Capture passes emit everything else.
pub trait GenTypeTrait {
    fn gen_type() -> MoveGenType;
}

pub struct AllGen;
pub struct QuietGen;
pub struct CaptureGen;

impl GenTypeTrait for AllGen {
    fn gen_type() -> MoveGenType {
        MoveGenType::All
    }
}
impl GenTypeTrait for QuietGen {
    fn gen_type() -> MoveGenType {
        MoveGenType::Quiet
    }
}
impl GenTypeTrait for CaptureGen {
    fn gen_type() -> MoveGenType {
        MoveGenType::Capture
    }
}

/******************************************\
|==========================================|
|              Move Generator              |
|==========================================|
\******************************************/

/// Generates pseudo-legal pawn and knight moves into a reusable buffer.
#[derive(Debug, Clone)]
pub struct MoveGen {
    state: BoardState,

    moves: MoveList,
}

impl Default for MoveGen {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveGen {
    /// A generator bound to an empty board, white to move
    pub fn new() -> Self {
        Self {
            state: BoardState::new(),
            moves: MoveList::new(),
        }
    }

    pub fn with_state(state: &BoardState) -> Self {
        let mut move_gen = Self::new();
        move_gen.set_state(state);
        move_gen
    }

    /// Binds a new position and clears the move list.
    ///
    /// # Panics
    /// With debug assertions or the `validate` feature enabled, panics if `state` fails
    /// [`BoardState::validate`].
    pub fn set_state(&mut self, state: &BoardState) {
        if cfg!(any(debug_assertions, feature = "validate")) {
            if let Err(err) = state.validate() {
                panic!("set_state: {}", err);
            }
        }

        self.state = *state;
        self.clear();

        debug!(
            "bound position with {} pieces, {} to move",
            state.all_occupied_bb().count_bits(),
            state.stm()
        );
    }

    /// Empties the move list. The bound position is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Appends every pseudo-legal pawn and knight move for the side to move.
    ///
    /// Moves are appended, not replacing earlier output: calling this twice without
    /// [`clear`](MoveGen::clear) leaves two identical batches in the list.
    ///
    /// # Panics
    /// Panics if the list runs out of capacity.
    #[inline]
    pub fn generate_moves(&mut self) {
        self.generate::<AllGen>();
    }

    /// Appends the pseudo-legal moves selected by `G`, in the same order as a full pass.
    pub fn generate<G: GenTypeTrait>(&mut self) {
        let start = self.moves.len();

        let mut ctx = GenContext::new(&self.state, &mut self.moves);
        PawnGen::generate::<G>(&mut ctx);
        KnightGen::generate::<G>(&mut ctx);

        trace!(
            "{:?} pass for {}: {} moves appended",
            G::gen_type(),
            self.state.stm(),
            self.moves.len() - start
        );
    }
}

/******************************************\
|==========================================|
|                 Getters                  |
|==========================================|
\******************************************/

impl MoveGen {
    #[inline]
    pub fn moves(&self) -> &MoveList {
        &self.moves
    }

    /// Number of moves generated since the last clear
    #[inline]
    pub fn size(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Move> {
        self.moves.get(index)
    }

    /// Overwrites the move at `index`.
    ///
    /// # Panics
    /// Panics if `index` is not below [`size`](MoveGen::size).
    #[inline]
    pub fn set(&mut self, index: usize, mv: Move) {
        self.moves.set(index, mv);
    }

    /// Iterates over the moves generated so far
    #[inline]
    pub fn iter(&self) -> MoveIter<'_> {
        self.moves.iter()
    }

    #[inline]
    pub fn state(&self) -> &BoardState {
        &self.state
    }
}

impl<'a> IntoIterator for &'a MoveGen {
    type Item = Move;
    type IntoIter = MoveIter<'a>;

    fn into_iter(self) -> MoveIter<'a> {
        self.iter()
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
