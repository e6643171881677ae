use rsb_gameplay::*;

/// Why a player action was refused. A rejected action changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A move was submitted while the prompt still awaits an answer.
    Unanswered(Prompt),
    /// A move was submitted before the bot committed for this round.
    Uncommitted,
    /// An answer was given while no prompt is active.
    NoPrompt,
    /// The answer does not fit the active prompt.
    Mismatch(Prompt, Answer),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Unanswered(p) => write!(f, "answer \"{}\" first", p),
            Self::Uncommitted => write!(f, "the bot has not committed yet"),
            Self::NoPrompt => write!(f, "there is nothing to answer"),
            Self::Mismatch(p, a) => write!(f, "\"{}\" does not answer \"{}\"", a, p),
        }
    }
}

impl std::error::Error for Rejection {}
