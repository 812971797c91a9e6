//! Moves, round outcomes and running score.
mod moves;
mod outcome;
mod round;
mod tally;

pub use moves::*;
pub use outcome::*;
pub use round::*;
pub use tally::*;
