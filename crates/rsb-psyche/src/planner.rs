use super::*;
use rsb_core::*;
use rsb_gameplay::*;
use rsb_predictor::*;

/// A pending request to the predictor, tagged with the planning pass that
/// issued it. Only the latest pass may apply a response.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    token: u64,
    query: Query,
}

impl Ticket {
    pub fn token(&self) -> u64 {
        self.token
    }
    pub fn query(&self) -> &Query {
        &self.query
    }
}

/// What the local part of planning decided.
#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    /// The round is committed; no predictor call needed.
    Committed(Move),
    /// The predictor should be consulted; the round stays uncommitted
    /// until the ticket is resolved.
    Pending(Ticket),
}

/// Per-round decision engine.
///
/// Planning runs in two halves around the only suspension point, the
/// predictor call. [`Planner::prepare`] performs every local step and
/// either commits or hands back a [`Ticket`]; [`Planner::resolve`] applies
/// the predictor's answer, or falls back to heuristics if it failed.
///
/// Steps, short-circuiting:
/// 1. forget any pending answer
/// 2. Random mode: no prompt, uniform commitment
/// 3. decide whether the bot is stuck
/// 4. stuck: issue a prompt and restart the cooldown; else tick it down
/// 5. a dominant streak is countered outright
/// 6. exploit (probability 1 - ε): consult the predictor
/// 7. explore, or the predictor failed: heuristic fallback
pub struct Planner;

impl Planner {
    pub fn prepare<E: Entropy>(state: &mut State, entropy: &mut E) -> Plan {
        let token = state.bump();
        state.commit(None);
        state.gate_mut().clear();
        if state.mode() == Mode::Random {
            *state.gate_mut() = Gate::NoPrompt;
            return Self::settle(state, entropy.throw());
        }
        Self::provoke(state, entropy);
        if let Some(streak) = state.ledger().streak() {
            log::debug!("[planner] countering {} streak", streak);
            return Self::settle(state, streak.beaten_by());
        }
        if entropy.unit() > EXPLORATION_EPSILON {
            let query = Query::new(
                state.ledger().context(CONTEXT_WINDOW),
                state.gate().kind(),
                state.ledger().adherence(),
            );
            return Plan::Pending(Ticket { token, query });
        }
        log::debug!("[planner] exploring");
        Self::settle(state, Self::fallback(state, entropy))
    }

    /// Applies the predictor's answer for a ticket. Returns the commitment,
    /// or `None` if a newer planning pass has superseded the ticket.
    pub fn resolve<E: Entropy>(
        state: &mut State,
        entropy: &mut E,
        ticket: Ticket,
        prediction: anyhow::Result<Prediction>,
    ) -> Option<Move> {
        if ticket.token != state.token() {
            log::debug!(
                "[planner] discarding stale ticket {} (current {})",
                ticket.token,
                state.token()
            );
            return None;
        }
        let commitment = match prediction {
            Ok(prediction) => {
                state.set_probs(prediction.probs());
                prediction.suggestion()
            }
            Err(e) => {
                log::debug!("[planner] predictor unavailable, exploring: {}", e);
                Self::fallback(state, entropy)
            }
        };
        state.commit(Some(commitment));
        Some(commitment)
    }

    /// Whether the bot should try to influence the player this round.
    pub fn stuck(state: &State) -> bool {
        let unsure = state.probs().peak() < STUCK_CONFIDENCE;
        let losing = state.ledger().losses(STUCK_LOOKBACK) >= STUCK_LOSSES;
        (unsure || losing) && state.cooldown() == 0
    }

    /// Issues a prompt when stuck, otherwise clears it and cools down.
    fn provoke<E: Entropy>(state: &mut State, entropy: &mut E) {
        if Self::stuck(state) {
            let prompt = if entropy.coin() {
                Prompt::Bot(entropy.weighted(CLAIM_BIAS))
            } else {
                Prompt::You(entropy.throw())
            };
            log::debug!("[planner] round {} prompt: {}", state.round(), prompt);
            *state.gate_mut() = Gate::open(Some(prompt));
            state.set_cooldown(PROMPT_COOLDOWN);
        } else {
            *state.gate_mut() = Gate::NoPrompt;
            state.set_cooldown(state.cooldown().saturating_sub(1));
        }
    }

    /// Local heuristic: counter the player's assumed move under a
    /// "You will play X" prompt, else play uniformly.
    fn fallback<E: Entropy>(state: &State, entropy: &mut E) -> Move {
        match state.gate().prompt() {
            Some(Prompt::You(claim)) => {
                let assumed = match state.gate().claim().and_then(|c| c.intent()) {
                    // only set by an answer given while a ticket is outstanding
                    Some(Intent::Will) => claim,
                    _ => claim.beaten_by(),
                };
                assumed.beaten_by()
            }
            _ => entropy.throw(),
        }
    }

    fn settle(state: &mut State, commitment: Move) -> Plan {
        state.commit(Some(commitment));
        Plan::Committed(commitment)
    }
}
