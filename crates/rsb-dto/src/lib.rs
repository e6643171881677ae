//! Wire types for the move-prediction service.
//!
//! Moves travel as "Rock" / "Paper" / "Scissors", outcome codes as
//! "W" / "L" / "D", prompt kinds as "bot" / "you" / null.
mod request;
mod response;

pub use request::*;
pub use response::*;
