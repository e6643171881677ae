use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rsb_core::Probability;
use rsb_gameplay::Move;

/// Source of every random decision the planner makes.
///
/// Implementors provide uniform draws in [0, 1); the derived helpers turn
/// each draw into exactly one decision, so a fixed sequence of draws fixes
/// the planner's output.
pub trait Entropy: Send {
    /// Uniform draw in [0, 1).
    fn unit(&mut self) -> Probability;
    /// Fair coin.
    fn coin(&mut self) -> bool {
        self.unit() < 0.5
    }
    /// Uniform index below n (n > 0).
    fn index(&mut self, n: usize) -> usize {
        ((self.unit() * n as Probability) as usize).min(n - 1)
    }
    /// Uniform move.
    fn throw(&mut self) -> Move {
        Move::all()[self.index(3)]
    }
    /// Move drawn with relative integer weights in canonical order.
    fn weighted(&mut self, weights: [usize; 3]) -> Move {
        let total = weights.iter().sum::<usize>();
        let mut ticket = self.index(total);
        for (m, w) in Move::all().into_iter().zip(weights) {
            if ticket < w {
                return m;
            }
            ticket -= w;
        }
        unreachable!("ticket drawn below total weight")
    }
}

/// Pseudo-random entropy for live play.
#[derive(Debug, Clone)]
pub struct Dice(SmallRng);

impl Dice {
    /// Reproducible sequence from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl Entropy for Dice {
    fn unit(&mut self) -> Probability {
        self.0.random::<Probability>()
    }
}

/// Replays a fixed, cycling sequence of draws. An empty script always
/// draws zero.
#[derive(Debug, Clone, Default)]
pub struct Script {
    draws: Vec<Probability>,
    cursor: usize,
}

impl Script {
    pub fn new(draws: impl IntoIterator<Item = Probability>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            cursor: 0,
        }
    }
    /// Draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl Entropy for Script {
    fn unit(&mut self) -> Probability {
        let draw = match self.draws.len() {
            0 => 0.,
            n => self.draws[self.cursor % n],
        };
        self.cursor += 1;
        draw
    }
}
