use super::*;
use rsb_core::Probability;

/// Probability vector over the player's next move.
///
/// Always normalized: each entry in [0, 1], summing to 1. The default is
/// uniform, which reads as "no confidence" to the planner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution([Probability; 3]);

impl Default for Distribution {
    fn default() -> Self {
        Self([1. / 3.; 3])
    }
}

impl Distribution {
    /// Probability assigned to a single move.
    pub fn density(&self, m: Move) -> Probability {
        self.0[usize::from(m)]
    }
    /// Largest single probability (the predictor's confidence).
    pub fn peak(&self) -> Probability {
        self.0.iter().copied().fold(0., Probability::max)
    }
    /// Most likely move; ties go to the earlier move in canonical order.
    pub fn mode(&self) -> Move {
        Move::all()
            .into_iter()
            .fold(Move::Rock, |best, m| {
                if self.density(m) > self.density(best) {
                    m
                } else {
                    best
                }
            })
    }
}

/// Normalizes raw (rock, paper, scissors) weights. Rejects negative or
/// non-finite entries and vectors with no mass. Weights are scaled by the
/// largest entry first so that the sum cannot overflow.
impl TryFrom<[Probability; 3]> for Distribution {
    type Error = anyhow::Error;
    fn try_from(raw: [Probability; 3]) -> Result<Self, Self::Error> {
        if raw.iter().any(|p| !p.is_finite() || *p < 0.) {
            return Err(anyhow::anyhow!("invalid probabilities: {:?}", raw));
        }
        let max = raw.iter().copied().fold(0., Probability::max);
        if max <= 0. {
            return Err(anyhow::anyhow!("probabilities carry no mass: {:?}", raw));
        }
        let scaled = raw.map(|p| p / max);
        let sum = scaled.iter().sum::<Probability>();
        Ok(Self(scaled.map(|p| p / sum)))
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "R {:.2} P {:.2} S {:.2}",
            self.0[0], self.0[1], self.0[2]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn default_is_uniform_and_unsure() {
        let d = Distribution::default();
        for m in Move::all() {
            assert!((d.density(m) - 1. / 3.).abs() < 1e-6);
        }
        assert!(d.peak() < rsb_core::STUCK_CONFIDENCE);
    }
    #[test]
    fn normalizes_weights() {
        let d = Distribution::try_from([2., 1., 1.]).unwrap();
        assert!((d.density(Move::Rock) - 0.5).abs() < 1e-6);
        assert!((d.density(Move::Paper) - 0.25).abs() < 1e-6);
        assert_eq!(d.mode(), Move::Rock);
        assert!((d.peak() - 0.5).abs() < 1e-6);
    }
    #[test]
    fn rejects_degenerate_vectors() {
        assert!(Distribution::try_from([0., 0., 0.]).is_err());
        assert!(Distribution::try_from([-0.1, 0.6, 0.5]).is_err());
        assert!(Distribution::try_from([Probability::NAN, 0.5, 0.5]).is_err());
        assert!(Distribution::try_from([Probability::INFINITY, 0., 0.]).is_err());
    }
    #[test]
    fn huge_weights_still_normalize() {
        let d = Distribution::try_from([3.0e38, 3.0e38, 3.0e38]).unwrap();
        let sum = Move::all().iter().map(|m| d.density(*m)).sum::<Probability>();
        assert!((sum - 1.).abs() < 1e-6);
        assert!((d.peak() - 1. / 3.).abs() < 1e-6);
        let d = Distribution::try_from([Probability::MAX, Probability::MAX, 0.]).unwrap();
        assert!((d.density(Move::Rock) - 0.5).abs() < 1e-6);
        assert_eq!(d.density(Move::Scissors), 0.);
    }
}
