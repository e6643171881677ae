//! Rock Paper Scissors rules and behavioral history.
//!
//! ## Rules
//!
//! - [`Move`] — The three throws and their beats/beaten-by cycle
//! - [`Outcome`] — Round result from the player's perspective, with [`Outcome::resolve`]
//!
//! ## Prompts
//!
//! - [`Prompt`] — "I will play X" / "You will play X"
//! - [`Answer`] — Belief or intent reply
//! - [`Claim`] — A prompt paired with its answer
//!
//! ## History
//!
//! - [`Round`] — Immutable record of a resolved round
//! - [`Ledger`] — Newest-first round log and the signals derived from it
//! - [`Statistics`] — Win/loss/draw tally
//! - [`Token`] — Predictor feature element
//! - [`Distribution`] — Probability vector over the player's next move
mod claim;
mod distribution;
mod ledger;
mod moves;
mod outcome;
mod round;
mod statistics;
mod token;

pub use claim::*;
pub use distribution::*;
pub use ledger::*;
pub use moves::*;
pub use outcome::*;
pub use round::*;
pub use statistics::*;
pub use token::*;
