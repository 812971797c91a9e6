use crate::Arbitrary;
use rand::Rng;

/// One of the three hand shapes a player can throw.
///
/// The set is closed and the beats relation forms a 3-cycle:
/// Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
/// Ordinals follow declaration order and double as the tie-break
/// when two moves are equally likely.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    Rock = 0isize,
    Scissors = 1isize,
    Paper = 2isize,
}

impl Move {
    /// All three moves in ordinal order.
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Scissors, Self::Paper]
    }
    /// The unique move that defeats this one.
    pub const fn counter(&self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Scissors => Self::Rock,
            Self::Paper => Self::Scissors,
        }
    }
    /// The unique move this one defeats.
    pub const fn victim(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Scissors => Self::Paper,
            Self::Paper => Self::Rock,
        }
    }
    pub fn beats(&self, other: &Self) -> bool {
        self.victim() == *other
    }
    /// Single-character abbreviation for compact rendering.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Rock => "R",
            Self::Scissors => "S",
            Self::Paper => "P",
        }
    }
    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Scissors => "scissors",
            Self::Paper => "paper",
        }
    }
    /// Uniform draw from an injected random source.
    pub fn sample<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::from(rng.random_range(0..3usize))
    }
}

impl From<usize> for Move {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::Rock,
            1 => Self::Scissors,
            2 => Self::Paper,
            x => panic!("no other moves {}", x),
        }
    }
}

impl From<Move> for usize {
    fn from(m: Move) -> Self {
        m as usize
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Accepts names, single letters and the Japanese labels
/// (グー, チョキ, パー) found in older exported game logs.
impl TryFrom<&str> for Move {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" | "グー" => Ok(Self::Rock),
            "s" | "scissors" | "チョキ" => Ok(Self::Scissors),
            "p" | "paper" | "パー" => Ok(Self::Paper),
            x => Err(format!("invalid move: {:?}", x)),
        }
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        Self::from(rand::random_range(0..3usize))
    }
}

impl serde::Serialize for Move {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> serde::Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_beats_original() {
        for m in Move::all() {
            assert!(m.counter().beats(&m));
            assert!(!m.beats(&m.counter()));
            assert!(!m.beats(&m));
        }
    }

    #[test]
    fn counter_is_three_cycle() {
        for m in Move::all() {
            assert_ne!(m.counter(), m);
            assert_eq!(m.counter().counter().counter(), m);
        }
    }

    #[test]
    fn counter_table() {
        assert_eq!(Move::Rock.counter(), Move::Paper);
        assert_eq!(Move::Scissors.counter(), Move::Rock);
        assert_eq!(Move::Paper.counter(), Move::Scissors);
    }

    #[test]
    fn ordinal_roundtrip() {
        for m in Move::all() {
            assert_eq!(m, Move::from(usize::from(m)));
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!(Move::try_from("Rock"), Ok(Move::Rock));
        assert_eq!(Move::try_from(" s "), Ok(Move::Scissors));
        assert_eq!(Move::try_from("PAPER"), Ok(Move::Paper));
        assert_eq!(Move::try_from("グー"), Ok(Move::Rock));
        assert_eq!(Move::try_from("チョキ"), Ok(Move::Scissors));
        assert_eq!(Move::try_from("パー"), Ok(Move::Paper));
        assert!(Move::try_from("lizard").is_err());
        assert!(Move::try_from("").is_err());
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&Move::Scissors).unwrap();
        assert_eq!(json, "\"scissors\"");
        let back = serde_json::from_str::<Move>("\"r\"").unwrap();
        assert_eq!(back, Move::Rock);
        assert!(serde_json::from_str::<Move>("\"spock\"").is_err());
    }
}
