use super::*;
use crate::Count;
use crate::gameplay::Move;
use std::collections::BTreeMap;

/// Frequency table from each observed [`State`] to the moves that followed it.
///
/// For every state key the inner counts sum to the number of times that
/// exact window appeared in history with a move after it. Ordered maps keep
/// iteration (and therefore rendering and tie-breaking) deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transitions(BTreeMap<State, BTreeMap<Move, Count>>);

impl Transitions {
    /// Counts every `order`-length window followed by a move.
    /// Histories of `order` moves or fewer yield an empty table.
    pub fn build(moves: &[Move], order: usize) -> Self {
        moves
            .windows(order + 1)
            .fold(Self::default(), |mut table, window| {
                table.observe(State::from(&window[..order]), window[order]);
                table
            })
    }
    /// Records one occurrence of `next` following `state`.
    pub fn observe(&mut self, state: State, next: Move) {
        *self
            .0
            .entry(state)
            .or_insert_with(BTreeMap::default)
            .entry(next)
            .or_insert(0) += 1;
    }
    pub fn followers(&self, state: &State) -> Option<&BTreeMap<Move, Count>> {
        self.0.get(state)
    }
    pub fn count(&self, state: &State, next: Move) -> Count {
        self.followers(state)
            .and_then(|followers| followers.get(&next))
            .copied()
            .unwrap_or_default()
    }
    /// How many times `state` was seen with a move after it.
    pub fn occurrences(&self, state: &State) -> Count {
        self.followers(state)
            .map(|followers| followers.values().sum())
            .unwrap_or_default()
    }
    /// Most frequent follower of `state`. Equal counts go to the lowest
    /// [`Move`] ordinal. `None` when the state has no recorded followers.
    pub fn likeliest(&self, state: &State) -> Option<Move> {
        self.followers(state)?
            .iter()
            .filter(|(_, n)| **n > 0)
            .max_by(|(a, x), (b, y)| x.cmp(y).then_with(|| b.cmp(a)))
            .map(|(m, _)| *m)
    }
    /// Number of distinct states.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&State, &BTreeMap<Move, Count>)> {
        self.0.iter()
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Transitions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "States: {}", self.len())?;
        writeln!(f, "┌──────────┬──────┬──────┬──────┬──────┐")?;
        writeln!(f, "│    State │    R │    S │    P │ Next │")?;
        writeln!(f, "├──────────┼──────┼──────┼──────┼──────┤")?;
        for (state, _) in self.iter() {
            writeln!(
                f,
                "│ {:>8} │ {:>4} │ {:>4} │ {:>4} │ {:>4} │",
                state.to_string(),
                self.count(state, Move::Rock),
                self.count(state, Move::Scissors),
                self.count(state, Move::Paper),
                self.likeliest(state).map(|m| m.symbol()).unwrap_or("-"),
            )?;
        }
        writeln!(f, "└──────────┴──────┴──────┴──────┴──────┘")?;
        Ok(())
    }
}
