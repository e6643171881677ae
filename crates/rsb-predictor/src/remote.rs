use super::*;
use rsb_dto::*;
use std::time::Duration;

/// HTTP client for the prediction service.
///
/// All three endpoints are `POST` under a common base URL. Non-2xx
/// statuses, transport errors, timeouts, and malformed bodies all surface
/// as errors for the caller to absorb.
#[derive(Debug, Clone)]
pub struct Remote {
    base: String,
    client: reqwest::Client,
}

impl Remote {
    /// Client for `base` with a per-request timeout.
    pub fn new(base: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let base = base.into().trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;
        log::info!("[predictor] using {}", base);
        Ok(Self { base, client })
    }
    /// Client for PREDICTOR_URL, or the local default when unset.
    pub fn from_env(timeout: Duration) -> anyhow::Result<Self> {
        Self::new(rsb_core::predictor_url(), timeout)
    }
    pub fn base(&self) -> &str {
        &self.base
    }
    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base, endpoint)
    }
}

#[async_trait::async_trait]
impl Predictor for Remote {
    async fn predict(&self, query: &Query) -> anyhow::Result<Prediction> {
        let body = ApiPredict::from(query);
        let api = self
            .client
            .post(self.url("predict"))
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<ApiPrediction>()
            .await?;
        let prediction = Prediction::try_from(api)?;
        log::debug!(
            "[predictor] {} -> {}",
            prediction.probs(),
            prediction.suggestion()
        );
        Ok(prediction)
    }
    async fn update(&self, observation: &Observation) -> anyhow::Result<()> {
        let body = ApiUpdate::from(observation);
        self.client
            .post(self.url("update"))
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
    async fn reset(&self) -> anyhow::Result<()> {
        self.client
            .post(self.url("reset"))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
