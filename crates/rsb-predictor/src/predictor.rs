use rsb_core::Probability;
use rsb_dto::*;
use rsb_gameplay::*;

/// Everything the predictor is told before a round.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    context: Vec<Token>,
    kind: PromptKind,
    adherence: Probability,
}

impl Query {
    pub fn new(context: Vec<Token>, kind: PromptKind, adherence: Probability) -> Self {
        Self {
            context,
            kind,
            adherence,
        }
    }
    pub fn context(&self) -> &[Token] {
        &self.context
    }
    pub fn kind(&self) -> PromptKind {
        self.kind
    }
    pub fn adherence(&self) -> Probability {
        self.adherence
    }
}

/// A labeled example: the features that preceded a round and the move
/// the player actually made.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    context: Vec<Token>,
    next: Move,
}

impl Observation {
    pub fn new(context: Vec<Token>, next: Move) -> Self {
        Self { context, next }
    }
    pub fn context(&self) -> &[Token] {
        &self.context
    }
    pub fn next(&self) -> Move {
        self.next
    }
}

/// The predictor's answer: a distribution over the player's next move
/// and the move it recommends the bot commit to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    probs: Distribution,
    suggestion: Move,
}

impl Prediction {
    pub fn new(probs: Distribution, suggestion: Move) -> Self {
        Self { probs, suggestion }
    }
    pub fn probs(&self) -> Distribution {
        self.probs
    }
    pub fn suggestion(&self) -> Move {
        self.suggestion
    }
}

/// Port to the external statistical model.
///
/// Implementations must tolerate being unreachable: every method returns
/// an error rather than hanging or panicking when the service is down.
#[async_trait::async_trait]
pub trait Predictor: Send + Sync {
    /// Predict the player's next move.
    async fn predict(&self, query: &Query) -> anyhow::Result<Prediction>;
    /// Feed back what the player actually did.
    async fn update(&self, observation: &Observation) -> anyhow::Result<()>;
    /// Discard the model.
    async fn reset(&self) -> anyhow::Result<()>;
}

impl From<&Query> for ApiPredict {
    fn from(query: &Query) -> Self {
        Self {
            context: query.context().iter().map(|t| t.label().to_string()).collect(),
            prompt_type: query.kind().wire().map(String::from),
            adherence: query.adherence(),
        }
    }
}

impl From<&Observation> for ApiUpdate {
    fn from(observation: &Observation) -> Self {
        Self {
            context: observation
                .context()
                .iter()
                .map(|t| t.label().to_string())
                .collect(),
            next_human_move: observation.next().label().to_string(),
        }
    }
}

/// A response missing either field, naming an unknown move, or carrying
/// an unusable probability vector is malformed.
impl TryFrom<ApiPrediction> for Prediction {
    type Error = anyhow::Error;
    fn try_from(api: ApiPrediction) -> Result<Self, Self::Error> {
        let probs = api
            .probs
            .ok_or_else(|| anyhow::anyhow!("prediction missing probs"))?;
        let suggestion = api
            .bot_move
            .ok_or_else(|| anyhow::anyhow!("prediction missing bot_move"))?;
        Ok(Self {
            probs: Distribution::try_from([probs.rock, probs.paper, probs.scissors])?,
            suggestion: Move::try_from(suggestion.as_str())?,
        })
    }
}
