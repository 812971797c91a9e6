use super::*;

/// Running win/draw/loss count for a sequence of rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    wins: usize,
    draws: usize,
    losses: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
        }
    }
    pub fn total(&self) -> usize {
        self.wins + self.draws + self.losses
    }
    pub fn wins(&self) -> usize {
        self.wins
    }
    pub fn draws(&self) -> usize {
        self.draws
    }
    pub fn losses(&self) -> usize {
        self.losses
    }
    /// Rounds that were not draws.
    pub fn decided(&self) -> usize {
        self.wins + self.losses
    }
    /// Percentage of decisive rounds the player won, rounded to two places.
    /// Draws are excluded; zero when nothing has been decided yet.
    pub fn win_rate(&self) -> f64 {
        match self.decided() {
            0 => 0.,
            n => (self.wins as f64 / n as f64 * 10_000.).round() / 100.,
        }
    }
}

impl<'a> FromIterator<&'a Round> for Tally {
    fn from_iter<I>(rounds: I) -> Self
    where
        I: IntoIterator<Item = &'a Round>,
    {
        rounds.into_iter().fold(Self::default(), |mut tally, round| {
            tally.record(round.outcome());
            tally
        })
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} rounds: {}W {}D {}L ({}%)",
            self.total(),
            self.wins,
            self.draws,
            self.losses,
            self.win_rate()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rate_is_zero() {
        assert_eq!(Tally::default().win_rate(), 0.);
    }

    #[test]
    fn only_draws_rate_is_zero() {
        let rounds = vec![Round::new(Move::Rock, Move::Rock); 4];
        let tally = rounds.iter().collect::<Tally>();
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.draws(), 4);
        assert_eq!(tally.win_rate(), 0.);
    }

    #[test]
    fn rate_ignores_draws() {
        let rounds = vec![
            Round::new(Move::Rock, Move::Scissors), // win
            Round::new(Move::Rock, Move::Scissors), // win
            Round::new(Move::Rock, Move::Paper),    // loss
            Round::new(Move::Paper, Move::Paper),   // draw
        ];
        let tally = rounds.iter().collect::<Tally>();
        assert_eq!(tally.wins(), 2);
        assert_eq!(tally.losses(), 1);
        assert_eq!(tally.draws(), 1);
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.win_rate(), 66.67);
    }
}
