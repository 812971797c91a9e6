//! Terminal Game Binary
//!
//! Plays rock paper scissors against the predictor from the command line.

use colored::Colorize;
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use roshambo::config::Config;
use roshambo::gameplay::*;
use roshambo::hosting::Session;
use roshambo::*;

const QUIT: usize = 4;
const TABLE: usize = 3;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    log();
    kys();
    let mut session = Session::new(config.order);
    let preload = config.preload()?;
    if !preload.is_empty() {
        session.import(preload);
    }
    let items = Move::all()
        .iter()
        .map(|m| m.label().to_string())
        .chain(["table".to_string(), "quit".to_string()])
        .collect::<Vec<_>>();
    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("your move")
            .items(&items)
            .default(0)
            .interact()?;
        match choice {
            QUIT => break,
            TABLE => println!("{}", session.predictor().table()),
            i => {
                let round = session.play(Move::from(i));
                let verdict = match round.outcome() {
                    Outcome::Win => "you win".green(),
                    Outcome::Draw => "draw".yellow(),
                    Outcome::Loss => "you lose".red(),
                };
                println!("{} vs {}: {}", round.player(), round.engine(), verdict.bold());
                println!("{}", session.tally().to_string().dimmed());
            }
        }
    }
    log::info!("final score {}", session.tally());
    Ok(())
}
