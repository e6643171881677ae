use super::*;

/// A predictor that is never reachable.
///
/// Every prediction fails, so the planner always falls back to its local
/// heuristics; updates and resets are accepted and dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct Offline;

#[async_trait::async_trait]
impl Predictor for Offline {
    async fn predict(&self, _: &Query) -> anyhow::Result<Prediction> {
        Err(anyhow::anyhow!("predictor offline"))
    }
    async fn update(&self, _: &Observation) -> anyhow::Result<()> {
        Ok(())
    }
    async fn reset(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
