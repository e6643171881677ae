use rsb_core::Arbitrary;

/// One of the three throws.
///
/// The cycle is Rock > Scissors > Paper > Rock. [`Move::beats`] walks the
/// cycle one way and [`Move::beaten_by`] walks it the other, so each is the
/// inverse of the other and applying either three times is the identity.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    Rock = 0isize,
    Paper = 1isize,
    Scissors = 2isize,
}

impl Move {
    /// All three moves in canonical order.
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// The move this one defeats.
    pub const fn beats(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
    /// The move that defeats this one.
    pub const fn beaten_by(&self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }
    /// Wire and display name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
        }
    }
}

impl From<Move> for usize {
    fn from(m: Move) -> Self {
        m as usize
    }
}

impl TryFrom<usize> for Move {
    type Error = anyhow::Error;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::all()
            .get(n)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("move index out of range: {}", n))
    }
}

/// Accepts full names case-insensitively, plus R/P/S.
impl TryFrom<&str> for Move {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Self::Rock),
            "paper" | "p" => Ok(Self::Paper),
            "scissors" | "scissor" | "s" => Ok(Self::Scissors),
            _ => Err(anyhow::anyhow!("invalid move: {}", s)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        Self::all().choose(rng).copied().expect("three moves")
    }
}
