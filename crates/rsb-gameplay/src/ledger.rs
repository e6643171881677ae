use super::*;
use rsb_core::*;
use std::collections::VecDeque;

/// Newest-first log of completed rounds.
///
/// The only mutation is [`Ledger::append`], which pushes at the head;
/// rounds are never edited or dropped.
/// Everything the planner knows about the player is derived from here.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    rounds: VecDeque<Round>,
}

impl Ledger {
    pub fn append(&mut self, round: Round) {
        self.rounds.push_front(round);
    }
    pub fn len(&self) -> usize {
        self.rounds.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
    /// Most recent round.
    pub fn latest(&self) -> Option<&Round> {
        self.rounds.front()
    }
    /// The n most recent rounds, most recent first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &Round> {
        self.rounds.iter().take(n)
    }
    /// Win/loss/draw tally over the whole ledger.
    pub fn statistics(&self) -> Statistics {
        self.rounds
            .iter()
            .fold((0, 0, 0), |(w, l, d), r| match r.result() {
                Outcome::Win => (w + 1, l, d),
                Outcome::Lose => (w, l + 1, d),
                Outcome::Draw => (w, l, d + 1),
            })
            .into()
    }
    /// Interleaved (move, outcome code) features for the n most recent
    /// rounds, most recent first.
    pub fn context(&self, n: usize) -> Vec<Token> {
        self.recent(n)
            .flat_map(|r| [Token::from(r.player()), Token::from(r.result())])
            .collect()
    }
    /// Rounds the player lost among the n most recent.
    pub fn losses(&self, n: usize) -> usize {
        self.recent(n)
            .filter(|r| r.result() == Outcome::Lose)
            .count()
    }
    /// Fraction of recent "You will play X" rounds in which the player
    /// did what they said. Neutral prior when there are none.
    pub fn adherence(&self) -> Probability {
        let (kept, total) = self
            .rounds
            .iter()
            .filter_map(|r| r.adhered())
            .take(ADHERENCE_WINDOW)
            .fold((0usize, 0usize), |(k, t), ok| (k + ok as usize, t + 1));
        match total {
            0 => ADHERENCE_PRIOR,
            n => kept as Probability / n as Probability,
        }
    }
    /// The player's move if the leading run of identical moves within the
    /// recent window is long enough to exploit.
    pub fn streak(&self) -> Option<Move> {
        let head = self.latest()?.player();
        let run = self
            .recent(STREAK_WINDOW)
            .take_while(|r| r.player() == head)
            .count();
        (run >= STREAK_MINIMUM).then_some(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn ledger(rounds: &[(Move, Move)]) -> Ledger {
        // given oldest first, like they were played
        let mut ledger = Ledger::default();
        for (p, b) in rounds {
            ledger.append(Round::new(*p, *b, None));
        }
        ledger
    }
    fn answered(claim: Claim, player: Move) -> Round {
        Round::new(player, Move::Rock, Some(claim))
    }
    #[test]
    fn appends_at_head() {
        let ledger = ledger(&[(Move::Rock, Move::Rock), (Move::Paper, Move::Rock)]);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.latest().map(Round::player), Some(Move::Paper));
        let order = ledger.recent(5).map(Round::player).collect::<Vec<_>>();
        assert_eq!(order, vec![Move::Paper, Move::Rock]);
    }
    #[test]
    fn win_lose_draw_rate() {
        let ledger = ledger(&[
            (Move::Rock, Move::Scissors),
            (Move::Rock, Move::Paper),
            (Move::Rock, Move::Rock),
        ]);
        let stats = ledger.statistics();
        assert_eq!((stats.wins(), stats.losses(), stats.draws()), (1, 1, 1));
        assert_eq!(stats.rate(), 50);
    }
    #[test]
    fn statistics_cover_every_round() {
        use rsb_core::Arbitrary;
        let mut ledger = Ledger::default();
        for _ in 0..64 {
            ledger.append(Round::new(Move::random(), Move::random(), None));
        }
        assert_eq!(ledger.statistics().games(), 64);
    }
    #[test]
    fn context_interleaves_newest_first() {
        let ledger = ledger(&[
            (Move::Rock, Move::Scissors),
            (Move::Paper, Move::Scissors),
        ]);
        let labels = ledger
            .context(CONTEXT_WINDOW)
            .iter()
            .map(Token::label)
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["Paper", "L", "Rock", "W"]);
    }
    #[test]
    fn context_is_capped() {
        let ledger = ledger(&[(Move::Rock, Move::Rock); 9]);
        assert_eq!(ledger.context(CONTEXT_WINDOW).len(), 2 * CONTEXT_WINDOW);
        assert!(Ledger::default().context(CONTEXT_WINDOW).is_empty());
    }
    #[test]
    fn losses_in_lookback() {
        let ledger = ledger(&[
            (Move::Rock, Move::Paper),
            (Move::Rock, Move::Paper),
            (Move::Rock, Move::Scissors),
            (Move::Rock, Move::Paper),
        ]);
        assert_eq!(ledger.losses(STUCK_LOOKBACK), 2);
        assert_eq!(ledger.losses(1), 1);
    }
    #[test]
    fn adherence_prior_without_you_claims() {
        assert_eq!(Ledger::default().adherence(), 0.5);
        let mut ledger = ledger(&[(Move::Rock, Move::Rock); 3]);
        ledger.append(answered(Claim::Bot(Move::Rock, Belief::Believe), Move::Rock));
        assert_eq!(ledger.adherence(), 0.5);
    }
    #[test]
    fn adherence_counts_will_and_wont() {
        let mut ledger = Ledger::default();
        ledger.append(answered(Claim::You(Move::Rock, Intent::Will), Move::Rock));
        ledger.append(answered(Claim::You(Move::Rock, Intent::WontDo), Move::Paper));
        ledger.append(answered(Claim::You(Move::Rock, Intent::Will), Move::Paper));
        ledger.append(answered(Claim::You(Move::Rock, Intent::WontDo), Move::Rock));
        assert_eq!(ledger.adherence(), 0.5);
    }
    #[test]
    fn adherence_window_is_last_ten_you_claims() {
        let mut ledger = Ledger::default();
        for _ in 0..5 {
            ledger.append(answered(Claim::You(Move::Rock, Intent::Will), Move::Paper));
        }
        for _ in 0..ADHERENCE_WINDOW {
            ledger.append(answered(Claim::You(Move::Rock, Intent::Will), Move::Rock));
            ledger.append(Round::new(Move::Scissors, Move::Rock, None));
        }
        assert_eq!(ledger.adherence(), 1.0);
    }
    #[test]
    fn streak_of_five() {
        let ledger = ledger(&[(Move::Rock, Move::Paper); 5]);
        assert_eq!(ledger.streak(), Some(Move::Rock));
    }
    #[test]
    fn streak_of_four_is_not_enough() {
        let ledger = ledger(&[
            (Move::Rock, Move::Paper),
            (Move::Paper, Move::Paper),
            (Move::Paper, Move::Paper),
            (Move::Paper, Move::Paper),
            (Move::Paper, Move::Paper),
        ]);
        assert_eq!(ledger.streak(), None);
        assert_eq!(Ledger::default().streak(), None);
    }
    #[test]
    fn streak_is_counted_from_most_recent() {
        let mut rounds = vec![(Move::Scissors, Move::Rock); 6];
        rounds.push((Move::Paper, Move::Rock));
        assert_eq!(ledger(&rounds).streak(), None);
    }
    #[test]
    fn full_window_streak_qualifies() {
        let ledger = ledger(&[(Move::Scissors, Move::Rock); STREAK_WINDOW + 3]);
        assert_eq!(ledger.streak(), Some(Move::Scissors));
    }
}
