use super::*;

/// One completed round: what the player threw, what the engine answered,
/// and how it went for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Round {
    player: Move,
    engine: Move,
    outcome: Outcome,
}

impl Round {
    pub fn new(player: Move, engine: Move) -> Self {
        Self {
            player,
            engine,
            outcome: Outcome::judge(player, engine),
        }
    }
    pub fn player(&self) -> Move {
        self.player
    }
    pub fn engine(&self) -> Move {
        self.engine
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} vs {} ({})", self.player, self.engine, self.outcome)
    }
}
