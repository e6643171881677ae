/// How the bot plays.
///
/// - `Random` — uniform moves, no prompts, no learning
/// - `Psyche` — prompts, predictor, and behavioral heuristics
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub enum Mode {
    Random,
    #[default]
    Psyche,
}

impl TryFrom<&str> for Mode {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "psyche" => Ok(Self::Psyche),
            _ => Err(anyhow::anyhow!("invalid mode: {}", s)),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Psyche => write!(f, "psyche"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn parse() {
        assert_eq!(Mode::try_from("Random").unwrap(), Mode::Random);
        assert_eq!(Mode::try_from("psyche").unwrap(), Mode::Psyche);
        assert!(Mode::try_from("chaos").is_err());
        assert_eq!(Mode::default(), Mode::Psyche);
    }
}
