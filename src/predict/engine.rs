use super::*;
use crate::Order;
use crate::gameplay::Move;
use rand::Rng;

/// Builds the frequency table for `moves` at the given `order`.
pub fn build_transition_table(moves: &[Move], order: Order) -> Transitions {
    Transitions::build(moves, order)
}

/// Forecasts the player's next move.
///
/// Uses the most frequent follower of the last `order` moves. Draws a move
/// uniformly from `rng` when history is shorter than `order` or the current
/// window has never been followed by anything.
pub fn predict_next_move<R>(moves: &[Move], table: &Transitions, order: Order, rng: &mut R) -> Move
where
    R: Rng + ?Sized,
{
    State::tail(moves, order)
        .and_then(|state| table.likeliest(&state))
        .unwrap_or_else(|| Move::sample(rng))
}

/// The move that beats the prediction.
pub fn choose_counter_move(predicted: Move) -> Move {
    predicted.counter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn cold_start_stays_in_domain() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let table = Transitions::default();
        for history in [vec![], vec![Rock], vec![Rock, Paper]] {
            for _ in 0..64 {
                let guess = predict_next_move(&history, &table, 3, rng);
                assert!(Move::all().contains(&guess));
            }
        }
    }

    #[test]
    fn cold_start_draws_from_injected_source() {
        let table = Transitions::default();
        let ref mut a = SmallRng::seed_from_u64(42);
        let ref mut b = SmallRng::seed_from_u64(42);
        for _ in 0..32 {
            assert_eq!(predict_next_move(&[Rock], &table, 3, a), Move::sample(b));
        }
    }

    #[test]
    fn cold_start_covers_all_moves() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let table = Transitions::default();
        let seen = (0..300)
            .map(|_| predict_next_move(&[], &table, 3, rng))
            .collect::<std::collections::BTreeSet<_>>();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn cycling_history_predicts_scissors() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let moves = [Rock, Paper, Scissors, Rock, Paper, Scissors, Rock, Paper];
        let table = build_transition_table(&moves, 3);
        // (S, R, P) was followed by S once
        assert_eq!(predict_next_move(&moves, &table, 3, rng), Scissors);
        assert_eq!(choose_counter_move(Scissors), Rock);
    }

    #[test]
    fn repeated_move_is_predicted() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for m in Move::all() {
            let moves = vec![m; 10];
            let table = build_transition_table(&moves, 3);
            for _ in 0..16 {
                assert_eq!(predict_next_move(&moves, &table, 3, rng), m);
            }
            assert_eq!(choose_counter_move(m), m.counter());
        }
    }

    #[test]
    fn unseen_window_falls_back() {
        let moves = [Rock, Rock, Rock, Rock, Paper, Scissors, Paper];
        let table = build_transition_table(&moves, 3);
        assert!(table.likeliest(&State::tail(&moves, 3).unwrap()).is_none());
        let ref mut a = SmallRng::seed_from_u64(9);
        let ref mut b = SmallRng::seed_from_u64(9);
        assert_eq!(predict_next_move(&moves, &table, 3, a), Move::sample(b));
    }

    #[test]
    fn counter_is_total() {
        for m in Move::all() {
            let c = choose_counter_move(m);
            assert_ne!(c, m);
            assert_eq!(choose_counter_move(choose_counter_move(c)), m);
        }
    }
}
