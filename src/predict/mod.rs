//! Variable-order frequency model over a player's move history.
//!
//! A [`State`] is the window of the last `order` moves. [`Transitions`]
//! counts which move followed each historical occurrence of every state,
//! and prediction picks the most frequent follower of the current state,
//! falling back to a uniform draw when the state has never been seen.
//!
//! [`Predictor`] bundles a [`History`] with an incrementally maintained
//! table so a long-running session never rebuilds from scratch.
mod engine;
mod history;
mod predictor;
mod state;
mod transitions;

pub use engine::*;
pub use history::*;
pub use predictor::*;
pub use state::*;
pub use transitions::*;
