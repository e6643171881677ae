//! Client side of the move-prediction service.
//!
//! The predictor owns the long-lived statistical model of the player; this
//! crate only speaks to it. Every call may fail, and callers treat failure
//! as a signal rather than an error: a failed prediction means "explore",
//! a failed update or reset is simply dropped.
//!
//! - [`Predictor`] — Async port: predict, update, reset
//! - [`Remote`] — HTTP/JSON implementation
//! - [`Offline`] — Always unreachable; forces local play
//! - [`detach`] — Fire-and-forget spawning for best-effort notifications
mod detach;
mod offline;
mod predictor;
mod remote;

pub use detach::*;
pub use offline::*;
pub use predictor::*;
pub use remote::*;
