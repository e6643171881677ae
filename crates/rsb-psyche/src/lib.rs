//! The adaptive opponent's per-round decision core.
//!
//! ## Architecture
//!
//! - [`Session`] — Round lifecycle: plan, gate, settle, record, notify
//! - [`Planner`] — Chooses the bot's commitment and the round's prompt
//! - [`Gate`] — Blocks submission until the active prompt is answered
//! - [`State`] — Everything the session knows, as one explicit value
//!
//! ## Support
//!
//! - [`Entropy`] — Injectable randomness ([`Dice`] for play, [`Script`] for replay)
//! - [`Mode`] — Random or Psyche play
//! - [`Rejection`] — Why a player action was refused
mod entropy;
mod gate;
mod mode;
mod planner;
mod rejection;
mod session;
mod state;

pub use entropy::*;
pub use gate::*;
pub use mode::*;
pub use planner::*;
pub use rejection::*;
pub use session::*;
pub use state::*;
