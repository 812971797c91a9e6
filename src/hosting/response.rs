use super::*;
use crate::ID;
use crate::gameplay::*;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StartResponse {
    pub session_id: String,
}

impl From<ID<Session>> for StartResponse {
    fn from(id: ID<Session>) -> Self {
        Self {
            session_id: id.to_string(),
        }
    }
}

/// Running score with the win rate rendered as a percentage.
///
/// Whole rates keep one decimal place ("50.0%"). With nothing decided yet
/// the rate is a bare "0%".
#[derive(Debug, Serialize)]
pub struct Stats {
    pub total: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: String,
}

impl From<Tally> for Stats {
    fn from(tally: Tally) -> Self {
        Self {
            total: tally.total(),
            wins: tally.wins(),
            draws: tally.draws(),
            losses: tally.losses(),
            win_rate: match tally.decided() {
                0 => "0%".to_string(),
                _ => format!("{:?}%", tally.win_rate()),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlayResponse {
    pub player: Move,
    pub ai: Move,
    pub result: Outcome,
    pub stats: Stats,
}

impl From<(Round, Tally)> for PlayResponse {
    fn from((round, tally): (Round, Tally)) -> Self {
        Self {
            player: round.player(),
            ai: round.engine(),
            result: round.outcome(),
            stats: Stats::from(tally),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub total_loaded: usize,
}

impl From<(usize, usize)> for UploadResponse {
    fn from((read, total): (usize, usize)) -> Self {
        Self {
            message: format!("loaded {} moves", read),
            total_loaded: total,
        }
    }
}
