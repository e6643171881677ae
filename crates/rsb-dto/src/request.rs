use serde::{Deserialize, Serialize};

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiPredict {
    pub context: Vec<String>,
    pub prompt_type: Option<String>,
    pub adherence: f32,
}

/// Body of `POST /update`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiUpdate {
    pub context: Vec<String>,
    pub next_human_move: String,
}

// NOTE: impl From<&Query> for ApiPredict is in rsb-predictor
// NOTE: impl From<&Observation> for ApiUpdate is in rsb-predictor

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn null_prompt_type_is_serialized() {
        let body = ApiPredict {
            context: vec!["Rock".into(), "W".into()],
            prompt_type: None,
            adherence: 0.5,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["prompt_type"], serde_json::Value::Null);
        assert_eq!(json["context"][1], "W");
    }
    #[test]
    fn update_field_names() {
        let body = ApiUpdate {
            context: vec![],
            next_human_move: "Paper".into(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"context":[],"next_human_move":"Paper"}"#);
    }
}
