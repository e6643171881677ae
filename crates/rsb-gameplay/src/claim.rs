//! Psychological prompts and the player's answers to them.
//!
//! A [`Prompt`] is the statement the bot makes before a round: either
//! "I will play X" ([`Prompt::Bot`]) or "You will play X" ([`Prompt::You`]).
//! Each kind takes exactly one kind of answer. Once answered, the pair
//! becomes a [`Claim`], which is what the round record keeps.
use super::*;

/// Which statement, if any, is active for a round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum PromptKind {
    #[default]
    None,
    BotClaim,
    YouClaim,
}

impl PromptKind {
    /// Wire name sent to the predictor; `None` has no wire name.
    pub const fn wire(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::BotClaim => Some("bot"),
            Self::YouClaim => Some("you"),
        }
    }
}

/// Answer to "I will play X".
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Belief {
    Believe,
    Disbelieve,
}

/// Answer to "You will play X".
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Intent {
    Will,
    WontDo,
}

/// An unanswered statement about the upcoming round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Prompt {
    /// "I will play X."
    Bot(Move),
    /// "You will play X."
    You(Move),
}

/// A player's answer, not yet matched against a prompt.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Answer {
    Belief(Belief),
    Intent(Intent),
}

/// A prompt together with its matching answer.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Claim {
    Bot(Move, Belief),
    You(Move, Intent),
}

impl Prompt {
    pub fn kind(&self) -> PromptKind {
        match self {
            Self::Bot(_) => PromptKind::BotClaim,
            Self::You(_) => PromptKind::YouClaim,
        }
    }
    /// Pairs the prompt with an answer of the matching kind.
    pub fn answer(&self, answer: Answer) -> Option<Claim> {
        match (*self, answer) {
            (Self::Bot(m), Answer::Belief(b)) => Some(Claim::Bot(m, b)),
            (Self::You(m), Answer::Intent(i)) => Some(Claim::You(m, i)),
            _ => None,
        }
    }
}

impl Claim {
    pub fn prompt(&self) -> Prompt {
        match self {
            Self::Bot(m, _) => Prompt::Bot(*m),
            Self::You(m, _) => Prompt::You(*m),
        }
    }
    pub fn kind(&self) -> PromptKind {
        self.prompt().kind()
    }
    pub fn belief(&self) -> Option<Belief> {
        match self {
            Self::Bot(_, b) => Some(*b),
            Self::You(..) => None,
        }
    }
    pub fn intent(&self) -> Option<Intent> {
        match self {
            Self::Bot(..) => None,
            Self::You(_, i) => Some(*i),
        }
    }
    /// What the player is expected to throw given the answer.
    ///
    /// - "You will play X", "I will": X.
    /// - "You will play X", "I won't": the counter to X.
    /// - "I will play X", "I believe you": the counter to X.
    /// - "I will play X", "I don't": no expectation.
    pub fn expected(&self) -> Option<Move> {
        match self {
            Self::You(m, Intent::Will) => Some(*m),
            Self::You(m, Intent::WontDo) => Some(m.beaten_by()),
            Self::Bot(m, Belief::Believe) => Some(m.beaten_by()),
            Self::Bot(_, Belief::Disbelieve) => None,
        }
    }
    /// The bot's effective move: the counter to the expected throw,
    /// or the prior commitment when nothing is expected.
    pub fn exploit(&self, committed: Move) -> Move {
        self.expected()
            .map(|m| m.beaten_by())
            .unwrap_or(committed)
    }
    /// Whether the player kept their declared intent.
    /// Only meaningful for "You will play X".
    pub fn adhered(&self, player: Move) -> Option<bool> {
        match self {
            Self::You(m, Intent::Will) => Some(player == *m),
            Self::You(m, Intent::WontDo) => Some(player != *m),
            Self::Bot(..) => None,
        }
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Bot(m) => write!(f, "I will choose {}", m),
            Self::You(m) => write!(f, "You will choose {}", m),
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Belief(Belief::Believe) => write!(f, "I believe you"),
            Self::Belief(Belief::Disbelieve) => write!(f, "I don't believe"),
            Self::Intent(Intent::Will) => write!(f, "I will"),
            Self::Intent(Intent::WontDo) => write!(f, "I won't"),
        }
    }
}
