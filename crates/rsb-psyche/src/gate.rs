use super::*;
use rsb_gameplay::*;

/// Submission gate for the active prompt.
///
/// ```text
///   NoPrompt ──────────────────────────────► submit ──► NoPrompt
///   Awaiting(prompt) ──answer──► Answered(claim) ──► submit ──► NoPrompt
/// ```
///
/// An answer can be replaced by the other option of the same kind but
/// never withdrawn; submitting the round consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gate {
    #[default]
    NoPrompt,
    Awaiting(Prompt),
    Answered(Claim),
}

impl Gate {
    /// Gate for a round entered with the given prompt.
    pub fn open(prompt: Option<Prompt>) -> Self {
        prompt.map(Self::Awaiting).unwrap_or_default()
    }
    /// The active prompt, answered or not.
    pub fn prompt(&self) -> Option<Prompt> {
        match self {
            Self::NoPrompt => None,
            Self::Awaiting(p) => Some(*p),
            Self::Answered(c) => Some(c.prompt()),
        }
    }
    pub fn kind(&self) -> PromptKind {
        self.prompt().map(|p| p.kind()).unwrap_or_default()
    }
    /// The prompt paired with its answer, once answered.
    pub fn claim(&self) -> Option<Claim> {
        match self {
            Self::Answered(c) => Some(*c),
            _ => None,
        }
    }
    /// Whether a move may be submitted.
    pub fn allows(&self) -> bool {
        !matches!(self, Self::Awaiting(_))
    }
    /// Records (or replaces) the answer to the active prompt.
    pub fn answer(&mut self, answer: Answer) -> Result<(), Rejection> {
        let prompt = self.prompt().ok_or(Rejection::NoPrompt)?;
        let claim = prompt
            .answer(answer)
            .ok_or(Rejection::Mismatch(prompt, answer))?;
        *self = Self::Answered(claim);
        Ok(())
    }
    /// Forgets any answer but keeps the prompt.
    pub fn clear(&mut self) {
        *self = Self::open(self.prompt());
    }
    /// Terminal step of a round: hands over the answered claim (if any)
    /// and returns to NoPrompt. Refused while awaiting an answer.
    pub fn consume(&mut self) -> Result<Option<Claim>, Rejection> {
        match std::mem::take(self) {
            Self::Awaiting(p) => {
                *self = Self::Awaiting(p);
                Err(Rejection::Unanswered(p))
            }
            Self::Answered(c) => Ok(Some(c)),
            Self::NoPrompt => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn no_prompt_always_allows() {
        let mut gate = Gate::open(None);
        assert!(gate.allows());
        assert_eq!(gate.kind(), PromptKind::None);
        assert_eq!(gate.consume(), Ok(None));
        assert_eq!(gate.answer(Answer::Intent(Intent::Will)), Err(Rejection::NoPrompt));
    }
    #[test]
    fn awaiting_blocks_until_answered() {
        let prompt = Prompt::Bot(Move::Rock);
        let mut gate = Gate::open(Some(prompt));
        assert!(!gate.allows());
        assert_eq!(gate.consume(), Err(Rejection::Unanswered(prompt)));
        assert_eq!(gate, Gate::Awaiting(prompt));
        gate.answer(Answer::Belief(Belief::Believe)).unwrap();
        assert!(gate.allows());
        assert_eq!(gate.consume(), Ok(Some(Claim::Bot(Move::Rock, Belief::Believe))));
        assert_eq!(gate, Gate::NoPrompt);
    }
    #[test]
    fn wrong_kind_of_answer_is_refused() {
        let prompt = Prompt::You(Move::Paper);
        let mut gate = Gate::open(Some(prompt));
        let answer = Answer::Belief(Belief::Disbelieve);
        assert_eq!(gate.answer(answer), Err(Rejection::Mismatch(prompt, answer)));
        assert_eq!(gate, Gate::Awaiting(prompt));
    }
    #[test]
    fn answer_can_be_replaced_not_withdrawn() {
        let mut gate = Gate::open(Some(Prompt::You(Move::Paper)));
        gate.answer(Answer::Intent(Intent::Will)).unwrap();
        gate.answer(Answer::Intent(Intent::WontDo)).unwrap();
        assert_eq!(gate.claim(), Some(Claim::You(Move::Paper, Intent::WontDo)));
        assert!(gate.allows());
    }
    #[test]
    fn clear_forgets_answer() {
        let mut gate = Gate::open(Some(Prompt::You(Move::Paper)));
        gate.answer(Answer::Intent(Intent::Will)).unwrap();
        gate.clear();
        assert_eq!(gate, Gate::Awaiting(Prompt::You(Move::Paper)));
    }
}
