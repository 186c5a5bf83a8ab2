use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use crate::core::{Move, MoveGenError};

/// Capacity of a [`MoveList`]. Enough for any chess position, which tops out at 218 legal moves.
pub const MAX_MOVES: usize = 256;

/// # Move buffer
///
/// A fixed-capacity list of moves. Clearing resets the length and keeps the storage, so a
/// list can be refilled for every node of a search without allocating.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    num_moves: usize,
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl std::ops::IndexMut<usize> for MoveList {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl MoveList {
    #[inline]
    pub const fn new() -> MoveList {
        MoveList {
            moves: [Move::NONE; MAX_MOVES],
            num_moves: 0,
        }
    }

    /// Appends a move.
    ///
    /// # Panics
    /// Panics with [`MoveGenError::BufferOverflow`] if the list already holds [`MAX_MOVES`]
    /// moves.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        if let Err(err) = self.try_push(mv) {
            panic!("{}", err);
        }
    }

    /// Appends a move, or returns [`MoveGenError::BufferOverflow`] if the list is full.
    #[inline]
    pub fn try_push(&mut self, mv: Move) -> Result<(), MoveGenError> {
        if self.num_moves == MAX_MOVES {
            return Err(MoveGenError::BufferOverflow {
                capacity: MAX_MOVES,
            });
        }

        self.moves[self.num_moves] = mv;
        self.num_moves += 1;

        Ok(())
    }

    #[inline]
    pub fn clear(&mut self) {
        self.num_moves = 0;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.num_moves
    }

    /// Alias of [`len`](MoveList::len)
    #[inline]
    pub const fn size(&self) -> usize {
        self.num_moves
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.num_moves == 0
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        MAX_MOVES
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Move> {
        self.as_slice().get(index).copied()
    }

    /// Overwrites the move at `index`.
    ///
    /// # Panics
    /// Panics if `index` is not below [`len`](MoveList::len).
    #[inline]
    pub fn set(&mut self, index: usize, mv: Move) {
        assert!(
            index < self.num_moves,
            "MoveList index out of bounds: the len is {} but the index is {}",
            self.num_moves,
            index
        );
        self.moves[index] = mv;
    }

    #[inline]
    pub fn swap(&mut self, index1: usize, index2: usize) {
        self.as_mut_slice().swap(index1, index2);
    }

    #[inline]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.num_moves]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves[..self.num_moves]
    }

    /// Iterates over the moves present when the iterator is created, in insertion order.
    #[inline]
    pub fn iter(&self) -> MoveIter<'_> {
        MoveIter {
            inner: self.as_slice().iter(),
        }
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl fmt::Display for MoveList {
    /// Space separated long algebraic moves
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", mv)?;
        }
        Ok(())
    }
}

/******************************************\
|==========================================|
|                 Iterator                 |
|==========================================|
\******************************************/

/// Cursor over a [`MoveList`], fixed to the moves present at creation.
#[derive(Debug, Clone)]
pub struct MoveIter<'a> {
    inner: slice::Iter<'a, Move>,
}

impl Iterator for MoveIter<'_> {
    type Item = Move;

    #[inline]
    fn next(&mut self) -> Option<Move> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for MoveIter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Move> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for MoveIter<'_> {}

impl FusedIterator for MoveIter<'_> {}

impl<'a> IntoIterator for &'a MoveList {
    type Item = Move;
    type IntoIter = MoveIter<'a>;

    fn into_iter(self) -> MoveIter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MoveFlag, Square::*};

    #[test]
    fn test_push_and_access() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), MAX_MOVES);

        let e2e4 = Move::new(E2, E4, MoveFlag::DoublePawnPush);
        let g1f3 = Move::new(G1, F3, MoveFlag::QuietMove);
        list.push(e2e4);
        list.push(g1f3);

        assert_eq!(list.len(), 2);
        assert_eq!(list.size(), 2);
        assert_eq!(list[0], e2e4);
        assert_eq!(list.get(1), Some(g1f3));
        assert_eq!(list.get(2), None);
        assert!(list.contains(g1f3));
        assert!(!list.contains(Move::new(G1, H3, MoveFlag::QuietMove)));
        assert_eq!(list.to_string(), "e2e4 g1f3");
    }

    #[test]
    fn test_set_and_swap() {
        let mut list = MoveList::new();
        let a = Move::new(A2, A3, MoveFlag::QuietMove);
        let b = Move::new(B2, B3, MoveFlag::QuietMove);
        let c = Move::new(C2, C3, MoveFlag::QuietMove);
        list.push(a);
        list.push(b);

        list.swap(0, 1);
        assert_eq!(list.as_slice(), [b, a]);

        list.set(1, c);
        assert_eq!(list.as_slice(), [b, c]);

        list[0] = a;
        assert_eq!(list.as_slice(), [a, c]);
    }

    #[test]
    #[should_panic(expected = "MoveList index out of bounds")]
    fn test_set_past_len_panics() {
        let mut list = MoveList::new();
        list.set(0, Move::NONE);
    }

    #[test]
    fn test_clear_resets_len() {
        let mut list = MoveList::new();
        list.push(Move::new(E7, E5, MoveFlag::DoublePawnPush));
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.iter().next(), None);
        assert_eq!(list.get(0), None);
    }

    #[test]
    fn test_try_push_overflow() {
        let mut list = MoveList::new();
        for _ in 0..MAX_MOVES {
            assert!(list.try_push(Move::NONE).is_ok());
        }

        assert_eq!(
            list.try_push(Move::NONE),
            Err(MoveGenError::BufferOverflow {
                capacity: MAX_MOVES
            })
        );
        assert_eq!(list.len(), MAX_MOVES);
    }

    #[test]
    #[should_panic(expected = "move list overflow")]
    fn test_push_overflow_panics() {
        let mut list = MoveList::new();
        for _ in 0..=MAX_MOVES {
            list.push(Move::NONE);
        }
    }

    #[test]
    fn test_iterator_is_a_snapshot() {
        let mut list = MoveList::new();
        list.push(Move::new(A2, A3, MoveFlag::QuietMove));
        list.push(Move::new(B2, B3, MoveFlag::QuietMove));

        let snapshot = list.clone();
        let mut iter = snapshot.iter();
        list.push(Move::new(C2, C3, MoveFlag::QuietMove));

        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(Move::new(A2, A3, MoveFlag::QuietMove)));
        assert_eq!(iter.next(), Some(Move::new(B2, B3, MoveFlag::QuietMove)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_into_iterator() {
        let mut list = MoveList::new();
        list.push(Move::new(D2, D4, MoveFlag::DoublePawnPush));

        let mut seen = Vec::new();
        for mv in &list {
            seen.push(mv);
        }
        assert_eq!(seen, list.as_slice());
        assert_eq!(list.iter().rev().next(), list.get(0));
    }
}
