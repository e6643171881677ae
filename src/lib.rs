//! Adaptive Rock Paper Scissors opponent.
//!
//! This facade crate re-exports all public rsb crates for convenient access.
//!
//! ## Crate Organization
//!
//! ### Core Types
//! - [`core`] — Type aliases, constants, and shared traits
//! - [`gameplay`] — Moves, outcomes, prompts, and round history
//!
//! ### Prediction
//! - [`dto`] — Prediction service request/response types
//! - [`predictor`] — Prediction service port and clients
//!
//! ### Application
//! - [`psyche`] — Round planning, prompt gating, and session control

pub use rsb_core      as core;
pub use rsb_gameplay  as gameplay;
pub use rsb_dto       as dto;
pub use rsb_predictor as predictor;
pub use rsb_psyche    as psyche;
