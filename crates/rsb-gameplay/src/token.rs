use super::*;

/// One element of the predictor's feature vector: either a player move
/// or the outcome code of the round it was played in.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Token {
    Move(Move),
    Code(Outcome),
}

impl Token {
    /// Wire form: move names verbatim, outcomes as W/L/D.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Move(m) => m.label(),
            Self::Code(o) => o.code(),
        }
    }
}

impl From<Move> for Token {
    fn from(m: Move) -> Self {
        Self::Move(m)
    }
}

impl From<Outcome> for Token {
    fn from(o: Outcome) -> Self {
        Self::Code(o)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
