//! Play Binary
//!
//! Rock Paper Scissors in the terminal against the adaptive opponent.
//!
//! Options: --url, --timeout, --mode, --seed, --offline
mod table;

use clap::Parser;
use rsb_predictor::*;
use rsb_psyche::*;
use std::sync::Arc;
use std::time::Duration;
use table::Table;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Prediction service base URL (defaults to PREDICTOR_URL, then localhost)
    #[arg(long)]
    url: Option<String>,
    /// Prediction request timeout in seconds
    #[arg(long, default_value_t = rsb_core::PREDICTOR_TIMEOUT)]
    timeout: u64,
    /// How the bot plays: psyche or random
    #[arg(long, default_value = "psyche", value_parser = mode)]
    mode: Mode,
    /// Seed for a reproducible bot
    #[arg(long)]
    seed: Option<u64>,
    /// Never contact the prediction service
    #[arg(long)]
    offline: bool,
}

impl Args {
    fn predictor(&self) -> anyhow::Result<Arc<dyn Predictor>> {
        if self.offline {
            log::info!("[play] running offline");
            return Ok(Arc::new(Offline));
        }
        let timeout = Duration::from_secs(self.timeout);
        match self.url {
            Some(ref url) => Ok(Arc::new(Remote::new(url.as_str(), timeout)?)),
            None => Ok(Arc::new(Remote::from_env(timeout)?)),
        }
    }
    fn entropy(&self) -> Dice {
        self.seed.map(Dice::seeded).unwrap_or_default()
    }
}

fn mode(s: &str) -> Result<Mode, String> {
    Mode::try_from(s).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rsb_core::log();
    let args = Args::parse();
    let mut session = Session::new(args.mode, args.predictor()?, args.entropy());
    session.plan().await;
    Table::from(session).run().await
}
