use crate::gameplay::Move;

/// Append-only record of a player's moves in the order they were played.
///
/// Entries are never removed or rewritten. Sharing across threads is the
/// owner's concern: wrap the store (or whatever owns it) in a lock so that
/// appends and snapshots are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History(Vec<Move>);

impl History {
    pub fn append(&mut self, m: Move) {
        self.0.push(m);
    }
    /// Bulk load, equivalent to repeated [`History::append`] in iteration order.
    pub fn append_batch<I>(&mut self, moves: I)
    where
        I: IntoIterator<Item = Move>,
    {
        self.0.extend(moves);
    }
    /// Owned copy of every move so far, detached from later appends.
    pub fn snapshot(&self) -> Vec<Move> {
        self.0.clone()
    }
    pub fn as_slice(&self) -> &[Move] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Move>> for History {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for History {
    fn from_iter<I>(moves: I) -> Self
    where
        I: IntoIterator<Item = Move>,
    {
        Self(moves.into_iter().collect())
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for m in self.0.iter() {
            write!(f, "{}", m.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn append_grows_by_one() {
        let mut history = History::default();
        for n in 0..32 {
            assert_eq!(history.len(), n);
            history.append(Move::random());
            assert_eq!(history.len(), n + 1);
        }
    }

    #[test]
    fn batch_matches_repeated_append() {
        let moves = (0..20).map(|_| Move::random()).collect::<Vec<_>>();
        let mut batched = History::from(vec![Move::Paper]);
        let mut stepped = History::from(vec![Move::Paper]);
        batched.append_batch(moves.iter().copied());
        moves.iter().for_each(|m| stepped.append(*m));
        assert_eq!(batched, stepped);
        assert_eq!(batched.len(), 21);
    }

    #[test]
    fn snapshot_is_idempotent_and_detached() {
        let mut history = [Move::Rock, Move::Paper].into_iter().collect::<History>();
        let a = history.snapshot();
        let b = history.snapshot();
        assert_eq!(a, b);
        history.append(Move::Scissors);
        assert_eq!(a.len(), 2);
        assert_eq!(history.snapshot().len(), 3);
    }

    #[test]
    fn display_uses_symbols() {
        let history = History::from(vec![Move::Rock, Move::Scissors, Move::Paper]);
        assert_eq!(history.to_string(), "RSP");
    }
}
