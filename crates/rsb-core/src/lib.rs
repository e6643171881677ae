//! Core type aliases, traits, and constants for roshambo.
//!
//! This crate provides the foundational types and tuning parameters
//! used throughout the roshambo workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Move likelihoods, exploration rates, and adherence ratios.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// EXPLORE / EXPLOIT
// With probability ε the planner skips the predictor and plays heuristically.
// ============================================================================
/// Epsilon (ε) - probability of exploring instead of querying the predictor.
pub const EXPLORATION_EPSILON: Probability = 0.12;

// ============================================================================
// PSYCHOLOGICAL PROMPTS
// The bot "gets stuck" when the predictor is unsure or play has gone lopsided.
// ============================================================================
/// Predictor confidence below which the bot considers itself stuck.
pub const STUCK_CONFIDENCE: Probability = 0.45;
/// Recent rounds inspected for player losses.
pub const STUCK_LOOKBACK: usize = 3;
/// Player losses within the lookback that mark the bot as stuck.
pub const STUCK_LOSSES: usize = 2;
/// Rounds a freshly issued prompt suppresses further prompts.
pub const PROMPT_COOLDOWN: usize = 2;
/// Relative weights for the move the bot claims it will play (R:P:S = 2:1:1).
pub const CLAIM_BIAS: [usize; 3] = [2, 1, 1];

// ============================================================================
// BEHAVIORAL SIGNALS
// Windows over the newest-first round history.
// ============================================================================
/// Recent rounds scanned for a repeated player move.
pub const STREAK_WINDOW: usize = 10;
/// Minimum run of identical moves that triggers a hard counter.
pub const STREAK_MINIMUM: usize = 5;
/// Recent YouClaim rounds considered when measuring adherence.
pub const ADHERENCE_WINDOW: usize = 10;
/// Adherence prior when no YouClaim rounds have been played.
pub const ADHERENCE_PRIOR: Probability = 0.5;
/// Rounds of (move, outcome) features sent to the predictor.
pub const CONTEXT_WINDOW: usize = 6;
/// Rounds shown in history listings.
pub const HISTORY_DISPLAY: usize = 20;

// ============================================================================
// PREDICTOR SERVICE
// ============================================================================
/// Predictor base URL when PREDICTOR_URL is unset.
pub const PREDICTOR_URL: &str = "http://localhost:8000";
/// Client-side timeout for a single predictor request (seconds).
pub const PREDICTOR_TIMEOUT: u64 = 5;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to terminal,
/// since the terminal doubles as the game board.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Predictor base URL from PREDICTOR_URL, falling back to the local default.
pub fn predictor_url() -> String {
    std::env::var("PREDICTOR_URL")
        .ok()
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| PREDICTOR_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn claim_bias_favors_rock() {
        let total = CLAIM_BIAS.iter().sum::<usize>() as Probability;
        assert_eq!(CLAIM_BIAS[0] as Probability / total, 0.50);
        assert_eq!(CLAIM_BIAS[1] as Probability / total, 0.25);
        assert_eq!(CLAIM_BIAS[2] as Probability / total, 0.25);
    }
    #[test]
    fn streak_fits_in_window() {
        assert!(STREAK_MINIMUM <= STREAK_WINDOW);
    }
}
