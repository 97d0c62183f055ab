extern crate bounty_holdem;

mod common;

use std::error::Error;

use bounty_holdem::agent::{ActionKind, AgentConfig, Bot, HandRecord};
use bounty_holdem::core::{Value, parse_cards};
use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Legal {
    Fold,
    Check,
    Call,
    Raise,
}

impl From<Legal> for ActionKind {
    fn from(legal: Legal) -> Self {
        match legal {
            Legal::Fold => ActionKind::Fold,
            Legal::Check => ActionKind::Check,
            Legal::Call => ActionKind::Call,
            Legal::Raise => ActionKind::Raise,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "decide",
    about = "Ask the bounty bot what it would do in a spot",
    long_about = "Estimate the strength of a hand and run it through the betting policy.\n\
                  Example: decide AsKd --board 7h2c9s --pips 0 20 --legal fold,call,raise --raise 40 380 --bounty K"
)]
struct Args {
    #[command(flatten)]
    tracing: common::TracingArgs,

    /// Our hole cards (e.g. "AsKd")
    hand: String,

    /// Community cards so far
    #[arg(short, long, default_value = "")]
    board: String,

    /// Our pip and the opponent's pip for this street
    #[arg(long, num_args = 2, value_names = ["MY", "OPP"], default_values_t = [0, 0])]
    pips: Vec<u32>,

    /// Legal action kinds
    #[arg(long, value_delimiter = ',', default_values = ["fold", "check", "call"])]
    legal: Vec<Legal>,

    /// Smallest and largest legal raise
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
    raise: Option<Vec<u32>>,

    /// Our bounty rank (e.g. "K" or "9")
    #[arg(long, default_value = "A")]
    bounty: char,

    /// Agent config as inline JSON or a path to a JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Seed for the estimator, overrides the config
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    args.tracing.init_tracing();

    let mut config = match &args.config {
        Some(input) => AgentConfig::from_str_or_file(input)?,
        None => AgentConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    let mut agent = config.build_agent()?;

    let bounty = Value::from_char(args.bounty)
        .ok_or_else(|| format!("'{}' is not a card value", args.bounty))?;
    let legal: Vec<ActionKind> = args.legal.iter().copied().map(ActionKind::from).collect();

    let mut builder = HandRecord::builder()
        .own_cards(parse_cards(&args.hand)?)
        .board(parse_cards(&args.board)?)
        .pips(args.pips[0], args.pips[1])
        .legal(&legal)
        .own_bounty(bounty);
    if let Some(raise) = &args.raise {
        builder = builder.raise_bounds(raise[0], raise[1]);
    }
    let record = builder.build()?;

    agent.handle_new_round(1);
    let decision = agent.decide(&record)?;

    println!("Agent: {}", agent.name());
    println!("Hand: {} Board: [{}]", args.hand, args.board);
    println!("Street: {}", record.street());
    println!("Cost to continue: {}", record.continue_cost());
    println!("Win rate: {:.3}", decision.win_rate);
    println!("Pot odds: {:.3}", decision.pot_odds);
    println!("Action: {} ({})", decision.action, decision.rule);
    Ok(())
}
