//! # Module: `gen`
//!
//! The per-piece generation strategies.
//!
//! A pass builds one [`GenContext`] holding the bound position, the mover's [`Perspective`]
//! and the occupancy sets every strategy needs, then runs each [`PieceGen`] over it in turn.
//! Strategies only append to the context's move list; nothing else is written.
//!
//! ## Pawns
//!
//! Pawns are generated set-wise. The whole pawn bitboard is shifted one step in a direction
//! and intersected with the squares that step may land on. Destinations on a back rank are
//! unrolled into four promotion records, knight to queen. Every origin is recovered from its
//! destination by stepping back against the shift direction.
//!
//! ## Knights
//!
//! Knights are generated per origin from the precomputed attack table, quiet moves first.
use super::*;
use crate::board::BoardState;

/******************************************\
|==========================================|
|               Perspective                |
|==========================================|
\******************************************/

/// Pawn directions and rank masks for one side, computed once per pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Perspective {
    /// Single push
    pub push: Direction,

    /// Double push, used to step back from a double push destination to its origin
    pub double_push: Direction,

    /// Capture towards the H file
    pub capture_east: Direction,

    /// Capture towards the A file
    pub capture_west: Direction,

    /// Both back ranks. A pawn can only ever reach the far one.
    pub promotion_rank: Bitboard,

    /// Where a single push from the start rank lands
    pub double_push_rank: Bitboard,

    pub start_rank: Bitboard,
}

impl Perspective {
    pub const fn new(us: Colour) -> Self {
        Self {
            push: us.forward(),
            double_push: us.double_forward(),
            capture_east: us.forward_east(),
            capture_west: us.forward_west(),
            promotion_rank: Bitboard::BACK_RANKS,
            double_push_rank: Rank::Rank3.relative(us).bb(),
            start_rank: Rank::Rank2.relative(us).bb(),
        }
    }
}

/******************************************\
|==========================================|
|            Generation Context            |
|==========================================|
\******************************************/

/// Everything a strategy reads, plus the list it appends to.
pub(crate) struct GenContext<'a> {
    pub state: &'a BoardState,

    pub us: Colour,

    pub perspective: Perspective,

    pub own: Bitboard,

    pub enemy: Bitboard,

    pub empty: Bitboard,

    pub list: &'a mut MoveList,
}

impl<'a> GenContext<'a> {
    pub fn new(state: &'a BoardState, list: &'a mut MoveList) -> Self {
        let us = state.stm();

        Self {
            state,
            us,
            perspective: Perspective::new(us),
            own: state.occupied_bb(us),
            enemy: state.occupied_bb(!us),
            empty: !state.all_occupied_bb(),
            list,
        }
    }

    /// The mover's pieces of type `pt`
    #[inline]
    pub fn pieces(&self, pt: PieceType) -> Bitboard {
        self.state.piece_bb(self.us, pt)
    }
}

/// A move generation strategy for one piece type.
pub(crate) trait PieceGen {
    const PIECE: PieceType;

    /// Appends this piece type's moves of kind `G` to `ctx.list`.
    fn generate<G: GenTypeTrait>(ctx: &mut GenContext<'_>);
}

/******************************************\
|==========================================|
|              Helper Functions            |
|==========================================|
\******************************************/

/// Adds the four promotions (knight, bishop, rook, queen) for every destination in `targets`.
///
/// # Arguments
/// * `CAPTURE` - Whether the pawns reached `targets` by capturing.
/// * `targets` - Destinations on the promotion rank.
/// * `dir` - The step the pawns took to reach `targets`.
/// * `move_list` - The list to add the generated moves to.
#[inline]
fn add_promo_moves<const CAPTURE: bool>(
    targets: Bitboard,
    dir: Direction,
    move_list: &mut MoveList,
) {
    targets.for_each(|to| {
        // Safety: `to` was produced by shifting a pawn one step in `dir`.
        let from = unsafe { to.add_unchecked(-dir) };
        for pt in PieceType::PROMOTIONS {
            move_list.push(Move::new_promotion(from, to, pt, CAPTURE));
        }
    });
}

/// Adds one `flag` move for every destination in `targets`, reached by a step of `dir`.
#[inline]
fn add_pawn_moves(targets: Bitboard, dir: Direction, flag: MoveFlag, move_list: &mut MoveList) {
    targets.for_each(|to| {
        // Safety: `to` was produced by shifting a pawn in `dir`.
        let from = unsafe { to.add_unchecked(-dir) };
        move_list.push(Move::new(from, to, flag));
    })
}

/// Adds one `flag` move from `from` to every square in `dest`.
#[inline]
fn add_piece_moves(from: Square, dest: Bitboard, flag: MoveFlag, move_list: &mut MoveList) {
    dest.for_each(|to| {
        move_list.push(Move::new(from, to, flag));
    })
}

/******************************************\
|==========================================|
|                  Pawns                   |
|==========================================|
\******************************************/

pub(crate) struct PawnGen;

impl PieceGen for PawnGen {
    const PIECE: PieceType = PieceType::Pawn;

    fn generate<G: GenTypeTrait>(ctx: &mut GenContext<'_>) {
        let pawns = ctx.pieces(Self::PIECE);
        let Perspective {
            capture_east,
            capture_west,
            ..
        } = ctx.perspective;

        if G::gen_type() != MoveGenType::Quiet {
            gen_pawn_captures(ctx, pawns, capture_east);
            gen_pawn_captures(ctx, pawns, capture_west);
        }

        if G::gen_type() != MoveGenType::Capture {
            gen_pawn_pushes(ctx, pawns);
        }
    }
}

/// Captures in one diagonal direction. Only enemy-occupied squares are targets.
fn gen_pawn_captures(ctx: &mut GenContext<'_>, pawns: Bitboard, dir: Direction) {
    let promotion_rank = ctx.perspective.promotion_rank;
    let targets = pawns.shift(dir) & ctx.enemy;

    add_promo_moves::<true>(targets & promotion_rank, dir, ctx.list);
    add_pawn_moves(targets & !promotion_rank, dir, MoveFlag::Capture, ctx.list);
}

/// Single pushes, then double pushes chained off the non-promoting single pushes.
///
/// A push may only land on an empty square; a piece of either colour blocks it.
fn gen_pawn_pushes(ctx: &mut GenContext<'_>, pawns: Bitboard) {
    let Perspective {
        push,
        double_push,
        promotion_rank,
        double_push_rank,
        start_rank,
        ..
    } = ctx.perspective;

    let single = pawns.shift(push) & ctx.empty;
    let single_quiet = single & !promotion_rank;

    add_promo_moves::<false>(single & promotion_rank, push, ctx.list);
    add_pawn_moves(single_quiet, push, MoveFlag::QuietMove, ctx.list);

    let double = (single_quiet & double_push_rank).shift(push) & ctx.empty;
    debug_assert!(
        (double.shift(-double_push) & !(pawns & start_rank)).is_empty(),
        "double push from outside the start rank"
    );

    add_pawn_moves(double, double_push, MoveFlag::DoublePawnPush, ctx.list);
}

/******************************************\
|==========================================|
|                 Knights                  |
|==========================================|
\******************************************/

pub(crate) struct KnightGen;

impl PieceGen for KnightGen {
    const PIECE: PieceType = PieceType::Knight;

    fn generate<G: GenTypeTrait>(ctx: &mut GenContext<'_>) {
        let knights = ctx.pieces(Self::PIECE);

        knights.for_each(|from| {
            let attacks = knight_attack(from);
            let captures = attacks & ctx.enemy;
            let quiets = attacks & !(captures | ctx.own);

            if G::gen_type() != MoveGenType::Capture {
                add_piece_moves(from, quiets, MoveFlag::QuietMove, ctx.list);
            }

            if G::gen_type() != MoveGenType::Quiet {
                add_piece_moves(from, captures, MoveFlag::Capture, ctx.list);
            }
        })
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
