use crate::Order;
use crate::gameplay::*;
use crate::predict::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;
use std::time::Instant;

/// One player's game against the engine.
pub struct Session {
    predictor: Predictor,
    rounds: Vec<Round>,
    rng: SmallRng,
    seen: Instant,
}

impl Session {
    pub fn new(order: Order) -> Self {
        Self::from((order, SmallRng::from_rng(&mut rand::rng())))
    }
    /// Reproducible fallback draws, for tests and replays.
    pub fn seeded(order: Order, seed: u64) -> Self {
        Self::from((order, SmallRng::seed_from_u64(seed)))
    }
    pub fn predictor(&self) -> &Predictor {
        &self.predictor
    }
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }
    pub fn tally(&self) -> Tally {
        self.rounds.iter().collect()
    }
    /// Time since the last round or import.
    pub fn idle(&self) -> Duration {
        self.seen.elapsed()
    }
}

impl Session {
    /// Plays one round. The engine commits to its answer from the history
    /// before `player` is recorded, so a move never trains its own prediction.
    pub fn play(&mut self, player: Move) -> Round {
        let engine = self.predictor.respond(&mut self.rng);
        let round = Round::new(player, engine);
        self.predictor.observe(player);
        self.rounds.push(round);
        self.seen = Instant::now();
        round
    }
    /// Appends historical moves without playing them. Returns the new history length.
    pub fn import<I>(&mut self, moves: I) -> usize
    where
        I: IntoIterator<Item = Move>,
    {
        self.predictor.observe_batch(moves);
        self.seen = Instant::now();
        self.predictor.history().len()
    }
}

impl From<(Order, SmallRng)> for Session {
    fn from((order, rng): (Order, SmallRng)) -> Self {
        Self {
            predictor: Predictor::new(order),
            rounds: Vec::new(),
            rng,
            seen: Instant::now(),
        }
    }
}
