use super::*;

/// A completed round. Built once at resolution and never mutated.
///
/// `claim` holds the prompt that was active together with the player's
/// answer; rounds played without a prompt carry `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    player: Move,
    bot: Move,
    result: Outcome,
    claim: Option<Claim>,
}

impl Round {
    /// Settles the round and records the prompt context it was played under.
    pub fn new(player: Move, bot: Move, claim: Option<Claim>) -> Self {
        Self {
            player,
            bot,
            result: Outcome::resolve(player, bot),
            claim,
        }
    }
    pub fn player(&self) -> Move {
        self.player
    }
    pub fn bot(&self) -> Move {
        self.bot
    }
    pub fn result(&self) -> Outcome {
        self.result
    }
    pub fn claim(&self) -> Option<Claim> {
        self.claim
    }
    pub fn kind(&self) -> PromptKind {
        self.claim.map(|c| c.kind()).unwrap_or_default()
    }
    pub fn bot_claim(&self) -> Option<Move> {
        match self.claim {
            Some(Claim::Bot(m, _)) => Some(m),
            _ => None,
        }
    }
    pub fn you_claim(&self) -> Option<Move> {
        match self.claim {
            Some(Claim::You(m, _)) => Some(m),
            _ => None,
        }
    }
    pub fn belief(&self) -> Option<Belief> {
        self.claim.and_then(|c| c.belief())
    }
    pub fn intent(&self) -> Option<Intent> {
        self.claim.and_then(|c| c.intent())
    }
    /// Whether the player kept a "You will play X" declaration.
    pub fn adhered(&self) -> Option<bool> {
        self.claim.and_then(|c| c.adhered(self.player))
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<8} vs {:<8} {}",
            self.player.label(),
            self.bot.label(),
            self.result.code()
        )
    }
}
