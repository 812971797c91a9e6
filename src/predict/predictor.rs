use super::*;
use crate::Order;
use crate::gameplay::Move;
use rand::Rng;

/// A player's history together with its transition table.
///
/// The table is updated one window per observed move, so it always equals
/// what [`build_transition_table`] would produce from the full history.
#[derive(Debug, Clone)]
pub struct Predictor {
    order: Order,
    history: History,
    table: Transitions,
}

impl Predictor {
    pub fn new(order: Order) -> Self {
        Self {
            order,
            history: History::default(),
            table: Transitions::default(),
        }
    }
    pub fn order(&self) -> Order {
        self.order
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn table(&self) -> &Transitions {
        &self.table
    }
}

impl Predictor {
    /// Appends a move, counting it as the follower of the window before it.
    pub fn observe(&mut self, m: Move) {
        if let Some(state) = State::tail(self.history.as_slice(), self.order) {
            self.table.observe(state, m);
        }
        self.history.append(m);
    }
    pub fn observe_batch<I>(&mut self, moves: I)
    where
        I: IntoIterator<Item = Move>,
    {
        moves.into_iter().for_each(|m| self.observe(m));
    }
    /// Forecast of the next move given everything observed so far.
    pub fn predict<R>(&self, rng: &mut R) -> Move
    where
        R: Rng + ?Sized,
    {
        let guess = predict_next_move(self.history.as_slice(), &self.table, self.order, rng);
        log::debug!(
            "predicted {} after {} moves (window {})",
            guess,
            self.history.len(),
            State::tail(self.history.as_slice(), self.order)
                .map(|state| state.to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
        guess
    }
    /// The engine's move: whatever beats the forecast.
    pub fn respond<R>(&self, rng: &mut R) -> Move
    where
        R: Rng + ?Sized,
    {
        choose_counter_move(self.predict(rng))
    }
}

impl From<(Order, History)> for Predictor {
    fn from((order, history): (Order, History)) -> Self {
        Self {
            order,
            table: Transitions::build(history.as_slice(), order),
            history,
        }
    }
}
