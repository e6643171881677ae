use super::*;

/// Result of a round, always from the human player's perspective.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Settles a round. Draw on equal moves, Win if the player's move
    /// defeats the bot's, Lose otherwise.
    pub const fn resolve(player: Move, bot: Move) -> Self {
        if player as usize == bot as usize {
            Self::Draw
        } else if player.beats() as usize == bot as usize {
            Self::Win
        } else {
            Self::Lose
        }
    }
    /// Single-letter outcome code used in predictor features.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Win => "W",
            Self::Lose => "L",
            Self::Draw => "D",
        }
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Lose => "Lose",
            Self::Draw => "Draw",
        }
    }
}

impl TryFrom<&str> for Outcome {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "W" | "Win" => Ok(Self::Win),
            "L" | "Lose" => Ok(Self::Lose),
            "D" | "Draw" => Ok(Self::Draw),
            _ => Err(anyhow::anyhow!("invalid outcome: {}", s)),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn canonical_wins() {
        assert_eq!(Outcome::resolve(Move::Rock, Move::Scissors), Outcome::Win);
        assert_eq!(Outcome::resolve(Move::Scissors, Move::Paper), Outcome::Win);
        assert_eq!(Outcome::resolve(Move::Paper, Move::Rock), Outcome::Win);
    }
    #[test]
    fn canonical_losses() {
        assert_eq!(Outcome::resolve(Move::Scissors, Move::Rock), Outcome::Lose);
        assert_eq!(Outcome::resolve(Move::Paper, Move::Scissors), Outcome::Lose);
        assert_eq!(Outcome::resolve(Move::Rock, Move::Paper), Outcome::Lose);
    }
    #[test]
    fn mirror_is_draw() {
        for m in Move::all() {
            assert_eq!(Outcome::resolve(m, m), Outcome::Draw);
        }
    }
    #[test]
    fn swapping_sides_flips_result() {
        for a in Move::all() {
            for b in Move::all() {
                let flipped = match Outcome::resolve(a, b) {
                    Outcome::Win => Outcome::Lose,
                    Outcome::Lose => Outcome::Win,
                    Outcome::Draw => Outcome::Draw,
                };
                assert_eq!(Outcome::resolve(b, a), flipped);
            }
        }
    }
    #[test]
    fn codes_parse_back() {
        for o in [Outcome::Win, Outcome::Lose, Outcome::Draw] {
            assert_eq!(Outcome::try_from(o.code()).unwrap(), o);
            assert_eq!(Outcome::try_from(o.label()).unwrap(), o);
        }
    }
}
