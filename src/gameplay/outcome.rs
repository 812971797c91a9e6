use super::*;

/// Result of a single round, from the player's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Judges the player's move against the engine's.
    pub fn judge(player: Move, engine: Move) -> Self {
        if player == engine {
            Self::Draw
        } else if player.beats(&engine) {
            Self::Win
        } else {
            Self::Loss
        }
    }
    pub fn is_decisive(&self) -> bool {
        !matches!(self, Self::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Draw => write!(f, "draw"),
            Self::Loss => write!(f, "loss"),
        }
    }
}
