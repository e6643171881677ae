use super::*;
use rsb_core::*;
use rsb_gameplay::*;
use rsb_predictor::*;
use std::sync::Arc;

/// Drives one player's game against the adaptive opponent.
///
/// Owns the [`State`], the entropy source, and a handle to the predictor.
/// Every player action goes through here; the planner runs after each
/// round advance, mode switch, and reset.
///
/// A fresh session has no commitment. Call [`Session::plan`] (or drive
/// [`Session::prepare`] / [`Session::resolve`] by hand) before the first
/// submission.
pub struct Session<E = Dice> {
    state: State,
    entropy: E,
    predictor: Arc<dyn Predictor>,
}

impl<E: Entropy> Session<E> {
    pub fn new(mode: Mode, predictor: Arc<dyn Predictor>, entropy: E) -> Self {
        log::info!("[session] starting in {} mode", mode);
        Self {
            state: State::from(mode),
            entropy,
            predictor,
        }
    }
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Local half of planning. Returns a ticket when the predictor should
    /// be consulted; the round stays uncommitted until it is resolved.
    pub fn prepare(&mut self) -> Option<Ticket> {
        match Planner::prepare(&mut self.state, &mut self.entropy) {
            Plan::Committed(commitment) => {
                log::debug!(
                    "[session] round {} committed {}",
                    self.state.round(),
                    commitment
                );
                None
            }
            Plan::Pending(ticket) => Some(ticket),
        }
    }
    /// Applies a predictor response. Returns false if the ticket was stale
    /// and nothing changed.
    pub fn resolve(&mut self, ticket: Ticket, prediction: anyhow::Result<Prediction>) -> bool {
        match Planner::resolve(&mut self.state, &mut self.entropy, ticket, prediction) {
            None => false,
            Some(commitment) => {
                log::debug!(
                    "[session] round {} committed {}",
                    self.state.round(),
                    commitment
                );
                true
            }
        }
    }
    /// Plans the current round end to end, awaiting the predictor if asked.
    pub async fn plan(&mut self) {
        if let Some(ticket) = self.prepare() {
            let prediction = self.predictor.predict(ticket.query()).await;
            self.resolve(ticket, prediction);
        }
    }

    /// Answers the active prompt, replacing any earlier answer.
    pub fn answer(&mut self, answer: Answer) -> Result<(), Rejection> {
        self.state.gate_mut().answer(answer)?;
        log::debug!("[session] answered: {}", answer);
        Ok(())
    }

    /// Resolves the round against the player's move and advances, without
    /// planning the next round.
    ///
    /// The bot's effective move starts from its commitment and is
    /// overridden by an answered prompt. The finished round is recorded
    /// and, in Psyche mode, reported to the predictor in the background.
    pub fn settle(&mut self, player: Move) -> Result<Round, Rejection> {
        if let Gate::Awaiting(prompt) = self.state.gate() {
            return Err(Rejection::Unanswered(*prompt));
        }
        let committed = self.state.commitment().ok_or(Rejection::Uncommitted)?;
        let claim = self.state.gate_mut().consume()?;
        let bot = claim
            .map(|c| c.exploit(committed))
            .unwrap_or(committed);
        let context = self.state.ledger().context(CONTEXT_WINDOW);
        let round = Round::new(player, bot, claim);
        self.state.ledger_mut().append(round);
        log::debug!("[session] round {}: {}", self.state.round(), round);
        if self.state.mode() == Mode::Psyche {
            let predictor = self.predictor.clone();
            let observation = Observation::new(context, player);
            detach("update", async move { predictor.update(&observation).await });
        }
        self.state.advance();
        Ok(round)
    }
    /// Plays the player's move and plans the next round.
    pub async fn submit(&mut self, player: Move) -> Result<Round, Rejection> {
        let round = self.settle(player)?;
        self.plan().await;
        Ok(round)
    }
    /// Changes how the bot plays and re-plans the current round.
    pub async fn switch(&mut self, mode: Mode) {
        if self.state.mode() == mode {
            return;
        }
        log::info!("[session] switching to {} mode", mode);
        self.state.set_mode(mode);
        self.plan().await;
    }
    /// Forgets the game so far, asks the predictor to do the same, and
    /// plans a fresh first round.
    pub async fn reset(&mut self) {
        log::info!("[session] reset");
        self.state.reset();
        let predictor = self.predictor.clone();
        detach("reset", async move { predictor.reset().await });
        self.plan().await;
    }
}
