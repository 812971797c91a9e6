use crate::gameplay::Move;

/// Ordered window of consecutive moves used as a prediction key.
///
/// Oldest move first. The window length is the model order; a table only
/// ever holds states of a single length.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct State(Vec<Move>);

impl State {
    /// The trailing `order` moves, or `None` when there are fewer.
    pub fn tail(moves: &[Move], order: usize) -> Option<Self> {
        moves
            .len()
            .checked_sub(order)
            .map(|start| Self::from(&moves[start..]))
    }
    /// Moves in the window, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.0
    }
    pub fn order(&self) -> usize {
        self.0.len()
    }
}

impl From<&[Move]> for State {
    fn from(window: &[Move]) -> Self {
        Self(window.to_vec())
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0.is_empty() {
            true => write!(f, "∅"),
            false => self.0.iter().try_for_each(|m| write!(f, "{}", m.symbol())),
        }
    }
}
