use super::*;
use rsb_gameplay::*;

/// Everything a session knows, held as one explicit value.
///
/// Only the [`Planner`] and the [`Session`] mutate it; presentation code
/// reads it through the accessors.
///
/// # Fields
///
/// - `round` — One-based index of the round being played
/// - `mode` — Random or Psyche
/// - `cooldown` — Rounds until another prompt may be issued
/// - `ledger` — Completed rounds, newest first
/// - `gate` — Active prompt and the player's answer
/// - `probs` — Last distribution the predictor returned
/// - `commitment` — The bot's move for this round, once planned
/// - `token` — Identifies the latest planning pass
#[derive(Debug, Clone, Default)]
pub struct State {
    round: usize,
    mode: Mode,
    cooldown: usize,
    ledger: Ledger,
    gate: Gate,
    probs: Distribution,
    commitment: Option<Move>,
    token: u64,
}

impl From<Mode> for State {
    fn from(mode: Mode) -> Self {
        Self {
            round: 1,
            mode,
            ..Self::default()
        }
    }
}

impl State {
    pub fn round(&self) -> usize {
        self.round
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn cooldown(&self) -> usize {
        self.cooldown
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    pub fn gate(&self) -> &Gate {
        &self.gate
    }
    pub fn probs(&self) -> Distribution {
        self.probs
    }
    pub fn commitment(&self) -> Option<Move> {
        self.commitment
    }
    pub fn token(&self) -> u64 {
        self.token
    }
    pub fn statistics(&self) -> Statistics {
        self.ledger.statistics()
    }

    pub(crate) fn gate_mut(&mut self) -> &mut Gate {
        &mut self.gate
    }
    pub(crate) fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }
    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }
    pub(crate) fn set_cooldown(&mut self, cooldown: usize) {
        self.cooldown = cooldown;
    }
    pub(crate) fn set_probs(&mut self, probs: Distribution) {
        self.probs = probs;
    }
    pub(crate) fn commit(&mut self, commitment: Option<Move>) {
        self.commitment = commitment;
    }
    /// Starts a new planning pass, invalidating any outstanding ticket.
    pub(crate) fn bump(&mut self) -> u64 {
        self.token += 1;
        self.token
    }
    /// Moves on to the next round.
    pub(crate) fn advance(&mut self) {
        self.round += 1;
        self.commitment = None;
        self.bump();
    }
    /// Back to a fresh session in the same mode. The token keeps counting
    /// so tickets from before the reset stay stale.
    pub(crate) fn reset(&mut self) {
        let token = self.token;
        *self = Self::from(self.mode);
        self.token = token;
        self.bump();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn fresh_state() {
        let state = State::from(Mode::Psyche);
        assert_eq!(state.round(), 1);
        assert_eq!(state.cooldown(), 0);
        assert!(state.ledger().is_empty());
        assert_eq!(state.gate().kind(), PromptKind::None);
        assert_eq!(state.commitment(), None);
        assert_eq!(state.probs(), Distribution::default());
    }
    #[test]
    fn advance_clears_commitment() {
        let mut state = State::from(Mode::Random);
        state.commit(Some(Move::Rock));
        let before = state.token();
        state.advance();
        assert_eq!(state.round(), 2);
        assert_eq!(state.commitment(), None);
        assert!(state.token() > before);
    }
    #[test]
    fn reset_keeps_mode_and_token_order() {
        let mut state = State::from(Mode::Random);
        state.ledger_mut().append(Round::new(Move::Rock, Move::Paper, None));
        state.set_cooldown(2);
        state.advance();
        let before = state.token();
        state.reset();
        assert_eq!(state.mode(), Mode::Random);
        assert_eq!(state.round(), 1);
        assert_eq!(state.cooldown(), 0);
        assert!(state.ledger().is_empty());
        assert!(state.token() > before);
    }
}
