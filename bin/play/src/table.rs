use dialoguer::Select;
use rsb_core::*;
use rsb_gameplay::*;
use rsb_psyche::*;

/// What the player can do between rounds.
#[derive(Debug, Clone, Copy)]
enum Choice {
    Throw(Move),
    Reanswer,
    History,
    Switch(Mode),
    Reset,
    Quit,
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Throw(m) => write!(f, "{}", m),
            Self::Reanswer => write!(f, "Change answer"),
            Self::History => write!(f, "History"),
            Self::Switch(mode) => write!(f, "Switch to {} mode", mode),
            Self::Reset => write!(f, "Reset"),
            Self::Quit => write!(f, "Quit"),
        }
    }
}

/// Terminal front end for a [`Session`].
pub struct Table(Session);

impl From<Session> for Table {
    fn from(session: Session) -> Self {
        Self(session)
    }
}

impl Table {
    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            self.banner();
            if let Gate::Awaiting(prompt) = *self.0.state().gate() {
                self.ask(prompt)?;
            }
            match self.choose()? {
                Choice::Throw(m) => self.throw(m).await,
                Choice::Reanswer => {
                    if let Some(prompt) = self.0.state().gate().prompt() {
                        self.ask(prompt)?;
                    }
                }
                Choice::History => self.history(),
                Choice::Switch(mode) => self.0.switch(mode).await,
                Choice::Reset => self.0.reset().await,
                Choice::Quit => break Ok(()),
            }
        }
    }

    fn banner(&self) {
        let state = self.0.state();
        println!();
        println!("Round {} ({} mode)", state.round(), state.mode());
        println!("{}", state.statistics());
        if let Some(claim) = state.gate().claim() {
            println!("Bot: \"{}\"  You: \"{}\"", claim.prompt(), Self::reply(claim));
        }
    }
    fn reply(claim: Claim) -> Answer {
        match claim {
            Claim::Bot(_, belief) => Answer::Belief(belief),
            Claim::You(_, intent) => Answer::Intent(intent),
        }
    }
    fn ask(&mut self, prompt: Prompt) -> anyhow::Result<()> {
        let answers = match prompt {
            Prompt::Bot(_) => [
                Answer::Belief(Belief::Believe),
                Answer::Belief(Belief::Disbelieve),
            ],
            Prompt::You(_) => [
                Answer::Intent(Intent::Will),
                Answer::Intent(Intent::WontDo),
            ],
        };
        let choice = Select::new()
            .with_prompt(format!("Bot: \"{}\"", prompt))
            .report(false)
            .items(&answers)
            .default(0)
            .interact()?;
        if let Err(rejection) = self.0.answer(answers[choice]) {
            println!("{}", rejection);
        }
        Ok(())
    }
    fn choose(&self) -> anyhow::Result<Choice> {
        let state = self.0.state();
        let other = match state.mode() {
            Mode::Random => Mode::Psyche,
            Mode::Psyche => Mode::Random,
        };
        let choices = Move::all()
            .into_iter()
            .map(Choice::Throw)
            .chain(state.gate().claim().map(|_| Choice::Reanswer))
            .chain([
                Choice::History,
                Choice::Switch(other),
                Choice::Reset,
                Choice::Quit,
            ])
            .collect::<Vec<_>>();
        let choice = Select::new()
            .with_prompt("Your move")
            .report(false)
            .items(&choices)
            .default(0)
            .interact()?;
        Ok(choices[choice])
    }
    async fn throw(&mut self, player: Move) {
        match self.0.submit(player).await {
            Ok(round) => println!(
                "You {} / Bot {}: {}",
                round.player(),
                round.bot(),
                round.result()
            ),
            Err(rejection) => println!("{}", rejection),
        }
    }
    /// Most recent rounds, numbered from the first round played.
    fn history(&self) {
        let ledger = self.0.state().ledger();
        if ledger.is_empty() {
            return println!("No rounds played yet");
        }
        let total = ledger.len();
        for (i, round) in ledger.recent(HISTORY_DISPLAY).enumerate() {
            match round.claim() {
                Some(claim) => println!(
                    "#{:<4} {}  \"{}\" / \"{}\"",
                    total - i,
                    round,
                    claim.prompt(),
                    Self::reply(claim)
                ),
                None => println!("#{:<4} {}", total - i, round),
            }
        }
    }
}
