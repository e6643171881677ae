/// Aggregate results over a ledger.
///
/// The win rate excludes draws: wins / (wins + losses), as a rounded
/// percentage, and 0 before any decisive round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    wins: usize,
    losses: usize,
    draws: usize,
}

impl Statistics {
    pub fn new(wins: usize, losses: usize, draws: usize) -> Self {
        Self {
            wins,
            losses,
            draws,
        }
    }
    pub fn wins(&self) -> usize {
        self.wins
    }
    pub fn losses(&self) -> usize {
        self.losses
    }
    pub fn draws(&self) -> usize {
        self.draws
    }
    /// Total rounds played.
    pub fn games(&self) -> usize {
        self.wins + self.losses + self.draws
    }
    /// Rounded win percentage over decisive rounds.
    pub fn rate(&self) -> usize {
        let decisive = (self.wins + self.losses).max(1);
        (100. * self.wins as f64 / decisive as f64).round() as usize
    }
}

impl From<(usize, usize, usize)> for Statistics {
    fn from((wins, losses, draws): (usize, usize, usize)) -> Self {
        Self::new(wins, losses, draws)
    }
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}% win rate over {} games ({}W {}L {}D)",
            self.rate(),
            self.games(),
            self.wins,
            self.losses,
            self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn empty_rate_is_zero() {
        assert_eq!(Statistics::default().rate(), 0);
    }
    #[test]
    fn draws_do_not_dilute() {
        assert_eq!(Statistics::new(1, 1, 1).rate(), 50);
        assert_eq!(Statistics::new(1, 1, 40).rate(), 50);
        assert_eq!(Statistics::new(0, 0, 5).rate(), 0);
    }
    #[test]
    fn rounds_half_up() {
        assert_eq!(Statistics::new(2, 1, 0).rate(), 67);
        assert_eq!(Statistics::new(1, 2, 0).rate(), 33);
        assert_eq!(Statistics::new(1, 7, 0).rate(), 13);
    }
}
