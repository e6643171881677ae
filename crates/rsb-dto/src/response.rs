use serde::{Deserialize, Serialize};

/// Predicted distribution over the player's next move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiProbs {
    pub rock: f32,
    pub paper: f32,
    pub scissors: f32,
}

/// Response of `POST /predict`.
///
/// Both fields are optional on the wire so that a partial response
/// deserializes and can be rejected with a precise reason.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiPrediction {
    #[serde(default)]
    pub probs: Option<ApiProbs>,
    #[serde(default)]
    pub bot_move: Option<String>,
}
